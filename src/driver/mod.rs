//! External driver surface.
//!
//! The model is driven by two narrow collaborators: a
//! [`DecisionSink`](crate::core::DecisionSink) the core notifies after each
//! observation, and an input-trigger source mapping host events onto
//! reset/save/load commands. A [`Session`] ties one model instance, one
//! weights file, and one sink together for the lifetime of the controlled
//! actor.
//!
//! The session is the single owner of the model; a host with a concurrent
//! control loop must keep the session behind one task or mutex, because
//! the update rule is not safe under concurrent mutation.

use crate::core::{DecisionSink, Perceptron};
use crate::persist::PersistResult;
use std::path::{Path, PathBuf};

/// Commands an input-capture collaborator can fire at the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Re-randomize weights and bias and clear the retained history.
    Reset,
    /// Persist the current weights and bias to the session's weights file.
    Save,
    /// Restore weights and bias from the session's weights file.
    Load,
}

/// One model bound to one weights file and one decision sink.
///
/// Constructed once per controlled actor, at startup, with freshly
/// randomized parameters. Lives until the actor does.
pub struct Session {
    model: Perceptron,
    weights_path: PathBuf,
    sink: Box<dyn DecisionSink>,
}

impl Session {
    /// Start a session with freshly randomized weights.
    pub fn new<P: Into<PathBuf>>(weights_path: P, sink: Box<dyn DecisionSink>) -> Self {
        Self {
            model: Perceptron::with_random_weights(),
            weights_path: weights_path.into(),
            sink,
        }
    }

    /// Feed one labeled observation to the model and return its decision.
    ///
    /// The sink is notified with the decision before the observation is
    /// learned from, so the actor reacts to the model's prior state.
    pub fn observe(&mut self, i1: f64, i2: f64, desired_output: f64) -> f64 {
        self.model.learn(i1, i2, desired_output, self.sink.as_mut())
    }

    /// Decision for an input pair without learning from it.
    pub fn evaluate(&self, i1: f64, i2: f64) -> f64 {
        self.model.evaluate(i1, i2)
    }

    /// Dispatch a reset/save/load command.
    ///
    /// # Errors
    /// Save and load propagate [`crate::persist::PersistError`]; reset
    /// cannot fail.
    pub fn handle_trigger(&mut self, trigger: Trigger) -> PersistResult<()> {
        match trigger {
            Trigger::Reset => {
                self.model.reset_session();
                Ok(())
            }
            Trigger::Save => self.model.save_weights(&self.weights_path),
            Trigger::Load => self.model.load_weights(&self.weights_path),
        }
    }

    /// Read access to the underlying model.
    pub fn model(&self) -> &Perceptron {
        &self.model
    }

    /// The weights file this session saves to and loads from.
    pub fn weights_path(&self) -> &Path {
        &self.weights_path
    }
}
