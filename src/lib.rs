//! # dodge-perceptron
//!
//! A minimal online-learning binary classifier: the textbook single-layer
//! perceptron with bias over a fixed 2-dimensional input, used to drive an
//! external actor's dodge behavior through a narrow decision contract.
//!
//! ## Structure
//!
//! - [`core`] — model state, step activation, the online update rule
//! - [`persist`] — plain-text save/load of the learned parameters
//! - [`driver`] — the trigger/session surface an external control loop uses
//!
//! ## Learning model
//!
//! Every labeled observation is retained, and each new observation triggers
//! one full sweep of the perceptron update rule over the entire retained
//! history, in insertion order. Re-training is O(history) per observation;
//! this is accepted because observations arrive at interactive rates
//! (one per keypress or frame), not as a sustained stream.
//!
//! The model is single-owner and single-threaded. A driver that wants to
//! share it across tasks must serialize access itself; the update rule is
//! not safe under concurrent mutation.

pub mod core;
pub mod driver;
pub mod persist;

pub use core::{
    activation, DecisionSink, NullSink, Perceptron, TrainingExample,
    DIMENSION_MISMATCH_SENTINEL, INPUT_DIMS,
};
pub use driver::{Session, Trigger};
pub use persist::{PersistError, PersistResult};
