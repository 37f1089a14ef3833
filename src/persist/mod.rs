//! Weight persistence.
//!
//! Learned parameters are stored as a single text line in the fixed order
//! `weight0,weight1,bias`, terminated by a line break, with no header, no
//! versioning, and no escaping:
//!
//! ```text
//! 0.4123,-0.887,0.015
//! ```
//!
//! Save overwrites the entire file. Load replaces weights and bias in place
//! and deliberately leaves the training history and the error accumulator
//! untouched. Floats are written with Rust's shortest round-tripping
//! formatting, so a save/load cycle restores the exact values.

use crate::core::{Perceptron, INPUT_DIMS};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for persistence operations.
#[derive(Debug)]
pub enum PersistError {
    /// Reading or writing the weights file failed.
    Io(io::Error),
    /// The weights file exists but does not hold exactly three
    /// comma-separated numeric fields.
    Malformed(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(err) => write!(f, "weights file I/O error: {}", err),
            PersistError::Malformed(msg) => write!(f, "malformed weights file: {}", msg),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PersistError::Io(err) => Some(err),
            PersistError::Malformed(_) => None,
        }
    }
}

impl From<io::Error> for PersistError {
    fn from(err: io::Error) -> Self {
        PersistError::Io(err)
    }
}

pub type PersistResult<T> = Result<T, PersistError>;

impl Perceptron {
    /// Persist the current `weight0,weight1,bias` line to `path`,
    /// overwriting any previous file.
    ///
    /// # Errors
    /// Returns [`PersistError::Io`] if the write fails. There is no retry.
    pub fn save_weights<P: AsRef<Path>>(&self, path: P) -> PersistResult<()> {
        let w = self.weights();
        let line = format!("{},{},{}\n", w[0], w[1], self.bias());
        fs::write(path, line)?;
        Ok(())
    }

    /// Restore weights and bias from `path`.
    ///
    /// A missing file means there is nothing to load: the call returns
    /// `Ok(())` and the model is left untouched. The history and the error
    /// accumulator are never touched, even on success.
    ///
    /// # Errors
    /// - [`PersistError::Malformed`] if the file does not hold exactly
    ///   three comma-separated numeric fields. No field is applied unless
    ///   all three parse; there is no partial update.
    /// - [`PersistError::Io`] for any read failure other than the file
    ///   being absent.
    pub fn load_weights<P: AsRef<Path>>(&mut self, path: P) -> PersistResult<()> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(PersistError::Io(err)),
        };

        let line = text.lines().next().unwrap_or("");
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != INPUT_DIMS + 1 {
            return Err(PersistError::Malformed(format!(
                "expected {} comma-separated fields, got {}",
                INPUT_DIMS + 1,
                fields.len()
            )));
        }

        let mut values = [0.0f64; INPUT_DIMS + 1];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field.trim().parse().map_err(|_| {
                PersistError::Malformed(format!("non-numeric field {:?}", field))
            })?;
        }

        self.set_parameters([values[0], values[1]], values[2]);
        Ok(())
    }
}
