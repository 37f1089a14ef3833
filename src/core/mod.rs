//! Core perceptron algorithm implementation.
//!
//! This module provides the fundamental structures and operations:
//! - Fixed two-element weight vector plus a bias scalar
//! - Hard step activation
//! - Online perceptron weight updates swept over the retained history
//!
//! ## Decision Rule
//!
//! The model classifies an input pair with a hard threshold:
//! ```text
//! decision = step(w · x + b)
//!
//! where step(d) = 1 if d > 0, else 0
//! ```
//!
//! ## Learning Rule
//!
//! The canonical perceptron update with learning rate fixed at 1.0:
//! ```text
//! error = desired - step(w · x + b)        (∈ {-1, 0, 1})
//! w     += error * x
//! b     += error
//! ```
//!
//! Every observation appends to the history and triggers one full sweep of
//! the update rule over all retained examples, in insertion order. Weights
//! drift on every sweep, even for historical examples whose classification
//! flips mid-sweep due to earlier updates in the same pass; that is how
//! naive perceptron convergence behaves and the sweep is never shortcut.

use rand::distributions::Uniform;
use rand::Rng;

/// Number of input dimensions. The model only classifies pairs; vectors of
/// any other arity fall into the [`dot_product_bias`](Perceptron::dot_product_bias)
/// sentinel path.
pub const INPUT_DIMS: usize = 2;

/// Value returned by [`Perceptron::dot_product_bias`] when either vector is
/// absent or the lengths differ.
///
/// The sentinel is indistinguishable from a legitimate dot product of `-1`.
/// Nothing in the decision path ever compares against it; it exists on the
/// normal return path and is kept behind that single function so a future
/// revision can swap in a real error type without touching callers.
pub const DIMENSION_MISMATCH_SENTINEL: f64 = -1.0;

/// One observed (input, desired-output) pair retained for re-training.
///
/// Immutable once created. Examples are exclusively owned by the model's
/// ordered history: appended on every learn call, never mutated, cleared
/// wholesale on session reset.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    /// The two input readings at observation time.
    pub input: [f64; INPUT_DIMS],
    /// The label supplied with the observation, conventionally 0 or 1.
    pub desired_output: f64,
}

/// Collaborator notified of each decision the model makes while learning.
///
/// The notification is one-way and fire-and-forget; no return value is
/// consumed. Contract for implementors: on `0.0` the controlled actor goes
/// into a crouch/reactive stance and becomes subject to physical forces; on
/// `1.0` it is locked kinematic, immune to forces. How that is rendered is
/// entirely the implementor's business.
pub trait DecisionSink {
    /// Called with the decision computed from the weights as they stood
    /// before the triggering observation was learned.
    fn on_decision(&mut self, decision: f64);
}

/// Sink that discards every decision. For tests and headless training.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DecisionSink for NullSink {
    fn on_decision(&mut self, _decision: f64) {}
}

/// Hard step activation: `1.0` for a strictly positive score, else `0.0`.
///
/// A dot product of exactly `0` classifies as `0`. The strict `>` is the
/// knife-edge that decides the actor's behavior and must not be relaxed
/// to `>=`.
pub fn activation(dot_product: f64) -> f64 {
    if dot_product > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// A single-layer perceptron with bias over 2-dimensional inputs.
///
/// # Lifecycle
///
/// A freshly constructed model is **uninitialized**: zero weights, zero
/// bias, empty history. It becomes **active** once
/// [`initialise_weights`](Perceptron::initialise_weights) draws random
/// parameters or a successful [`load_weights`](Perceptron::load_weights)
/// replaces them. [`reset_session`](Perceptron::reset_session) re-draws
/// parameters and forgets all retained observations.
///
/// The model is a plain value with a single owner; it is not safe to
/// mutate concurrently.
#[derive(Debug, Clone, Default)]
pub struct Perceptron {
    weights: [f64; INPUT_DIMS],
    bias: f64,
    history: Vec<TrainingExample>,
    total_error: f64,
}

impl Perceptron {
    /// Create an uninitialized model: zero weights, zero bias, empty
    /// history.
    ///
    /// Call [`initialise_weights`](Self::initialise_weights) (or load
    /// persisted parameters) before relying on its decisions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model with freshly randomized weights and bias.
    pub fn with_random_weights() -> Self {
        let mut model = Self::new();
        model.initialise_weights();
        model
    }

    /// Current weight vector.
    pub fn weights(&self) -> [f64; INPUT_DIMS] {
        self.weights
    }

    /// Current bias.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Retained observations, in learn-call order.
    pub fn history(&self) -> &[TrainingExample] {
        &self.history
    }

    /// Cumulative absolute error across all training sweeps since the last
    /// weight initialization.
    ///
    /// Diagnostic only: incremented by `|error|` once per example per
    /// sweep, monotonically non-decreasing within a run, zeroed by
    /// [`initialise_weights`](Self::initialise_weights). No decision logic
    /// reads it.
    pub fn total_error(&self) -> f64 {
        self.total_error
    }

    /// Dot product of two vectors plus the current bias.
    ///
    /// Returns [`DIMENSION_MISMATCH_SENTINEL`] when either vector is absent
    /// or the lengths differ; otherwise the sum of elementwise products
    /// plus the bias. Pure in its arguments and the bias; the caller
    /// supplies both vectors.
    pub fn dot_product_bias(&self, v1: Option<&[f64]>, v2: Option<&[f64]>) -> f64 {
        let (v1, v2) = match (v1, v2) {
            (Some(a), Some(b)) => (a, b),
            _ => return DIMENSION_MISMATCH_SENTINEL,
        };
        if v1.len() != v2.len() {
            return DIMENSION_MISMATCH_SENTINEL;
        }

        let mut d = 0.0;
        for (a, b) in v1.iter().zip(v2) {
            d += a * b;
        }
        d + self.bias
    }

    /// Decision for an arbitrary input pair under the current parameters.
    ///
    /// No side effects; safe to call in any state, including before any
    /// training (an all-zero model scores every input `0`).
    pub fn evaluate(&self, i1: f64, i2: f64) -> f64 {
        let input = [i1, i2];
        activation(self.dot_product_bias(Some(&self.weights), Some(&input)))
    }

    /// Decision for the retained example at `index`.
    ///
    /// # Panics
    ///
    /// `index` must be a valid history position. The training sweep
    /// guarantees this by construction; an out-of-range index is a
    /// programming error, not a condition to recover from.
    fn evaluate_history_entry(&self, index: usize) -> f64 {
        activation(self.dot_product_bias(Some(&self.weights), Some(&self.history[index].input)))
    }

    /// Learn from one labeled observation and return the decision for it.
    ///
    /// # Algorithm
    /// 1. Evaluate the input under the weights as they stand *before* this
    ///    observation is incorporated.
    /// 2. Report that decision to `sink` — the actor reacts to the model's
    ///    prior state, not to what it is about to learn.
    /// 3. Append the observation to the history.
    /// 4. Run one full training sweep over the whole history, including
    ///    the just-appended example.
    pub fn learn(&mut self, i1: f64, i2: f64, desired_output: f64, sink: &mut dyn DecisionSink) -> f64 {
        let decision = self.evaluate(i1, i2);
        sink.on_decision(decision);

        self.history.push(TrainingExample {
            input: [i1, i2],
            desired_output,
        });
        self.train();

        decision
    }

    /// One full sweep of the update rule over the entire history, in
    /// insertion order.
    fn train(&mut self) {
        for j in 0..self.history.len() {
            self.update_weights(j);
        }
    }

    /// Apply the perceptron update rule for the example at history index
    /// `j`. Learning rate is fixed at 1.0.
    fn update_weights(&mut self, j: usize) {
        let error = self.history[j].desired_output - self.evaluate_history_entry(j);
        self.total_error += error.abs();
        for d in 0..INPUT_DIMS {
            self.weights[d] += error * self.history[j].input[d];
        }
        self.bias += error;
    }

    /// Draw each weight and the bias independently from U(-1.0, 1.0) and
    /// zero the cumulative error diagnostic.
    pub fn initialise_weights(&mut self) {
        let dist = Uniform::new_inclusive(-1.0f64, 1.0);
        let mut rng = rand::thread_rng();
        for w in &mut self.weights {
            *w = rng.sample(dist);
        }
        self.bias = rng.sample(dist);
        self.total_error = 0.0;
    }

    /// Start a fresh session: re-randomize the parameters and forget every
    /// retained observation.
    pub fn reset_session(&mut self) {
        self.initialise_weights();
        self.history.clear();
    }

    /// Replace weights and bias in place. Used by persistence; history and
    /// the error accumulator are deliberately untouched.
    pub(crate) fn set_parameters(&mut self, weights: [f64; INPUT_DIMS], bias: f64) {
        self.weights = weights;
        self.bias = bias;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records every decision it is handed.
    #[derive(Default)]
    struct RecordingSink {
        decisions: Vec<f64>,
    }

    impl DecisionSink for RecordingSink {
        fn on_decision(&mut self, decision: f64) {
            self.decisions.push(decision);
        }
    }

    #[test]
    fn test_activation_boundary() {
        assert_eq!(activation(0.0), 0.0);
        assert_eq!(activation(-0.0), 0.0);
        assert_eq!(activation(1e-12), 1.0);
        assert_eq!(activation(3.5), 1.0);
        assert_eq!(activation(-1e-12), 0.0);
        assert_eq!(activation(-2.0), 0.0);
    }

    #[test]
    fn test_dot_product_with_bias() {
        let mut model = Perceptron::new();
        model.set_parameters([0.0, 0.0], 0.5);

        let d = model.dot_product_bias(Some(&[1.0, 2.0]), Some(&[3.0, 4.0]));
        assert_eq!(d, 11.5);
    }

    #[test]
    fn test_dimension_mismatch_sentinel() {
        let model = Perceptron::new();

        let unequal = model.dot_product_bias(Some(&[1.0, 2.0]), Some(&[1.0, 2.0, 3.0]));
        assert_eq!(unequal, DIMENSION_MISMATCH_SENTINEL);

        let absent = model.dot_product_bias(Some(&[1.0, 2.0]), None);
        assert_eq!(absent, DIMENSION_MISMATCH_SENTINEL);

        let both_absent = model.dot_product_bias(None, None);
        assert_eq!(both_absent, DIMENSION_MISMATCH_SENTINEL);
    }

    #[test]
    fn test_evaluate_before_training() {
        // All-zero model: every dot product is 0, which classifies as 0.
        let model = Perceptron::new();
        assert_eq!(model.evaluate(1.0, 1.0), 0.0);
        assert_eq!(model.evaluate(-5.0, 3.0), 0.0);
    }

    #[test]
    fn test_single_example_weight_update() {
        // Fresh zero model, one observation (1, 1) -> 1:
        //   decision = step(0) = 0, error = 1 - 0 = 1
        //   weights become [1, 1], bias becomes 1
        let mut model = Perceptron::new();
        let decision = model.learn(1.0, 1.0, 1.0, &mut NullSink);

        assert_eq!(decision, 0.0);
        assert_eq!(model.weights(), [1.0, 1.0]);
        assert_eq!(model.bias(), 1.0);
        assert_eq!(model.total_error(), 1.0);
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn test_two_observation_sweep_trace() {
        // Deterministic trace from the zero model.
        let mut model = Perceptron::new();

        // learn(1, 0, 1): decision step(0)=0, error 1 -> w=[1,0], b=1.
        let first = model.learn(1.0, 0.0, 1.0, &mut NullSink);
        assert_eq!(first, 0.0);
        assert_eq!(model.weights(), [1.0, 0.0]);
        assert_eq!(model.bias(), 1.0);

        // learn(0, 1, 0): pre-update decision step(0+1)=1.
        // Sweep: j=0 -> step(1+1)=1, error 0; j=1 -> step(0+1)=1, error -1,
        // so w=[1,-1], b=0.
        let second = model.learn(0.0, 1.0, 0.0, &mut NullSink);
        assert_eq!(second, 1.0);
        assert_eq!(model.weights(), [1.0, -1.0]);
        assert_eq!(model.bias(), 0.0);
        assert_eq!(model.total_error(), 2.0);
    }

    #[test]
    fn test_history_growth_and_fidelity() {
        let mut model = Perceptron::with_random_weights();
        let observations = [
            (0.3, -0.7, 1.0),
            (1.5, 2.5, 0.0),
            (-1.0, -1.0, 0.0),
            (0.0, 0.0, 1.0),
        ];

        for &(i1, i2, desired) in &observations {
            model.learn(i1, i2, desired, &mut NullSink);
        }

        assert_eq!(model.history().len(), observations.len());
        for (entry, &(i1, i2, desired)) in model.history().iter().zip(&observations) {
            assert_eq!(entry.input, [i1, i2]);
            assert_eq!(entry.desired_output, desired);
        }
    }

    #[test]
    fn test_decision_reported_before_learning() {
        // The sink must see the decision from the pre-observation weights:
        // the zero model classifies (1, 1) as 0 even though the label is 1.
        let mut model = Perceptron::new();
        let mut sink = RecordingSink::default();

        let decision = model.learn(1.0, 1.0, 1.0, &mut sink);
        assert_eq!(sink.decisions, vec![0.0]);
        assert_eq!(decision, 0.0);

        // After that sweep the same input classifies as 1, and the sink
        // sees the updated state on the next observation.
        model.learn(1.0, 1.0, 1.0, &mut sink);
        assert_eq!(sink.decisions, vec![0.0, 1.0]);
    }

    #[test]
    fn test_reset_session() {
        let mut model = Perceptron::with_random_weights();
        for _ in 0..10 {
            model.learn(1.0, 1.0, 1.0, &mut NullSink);
        }
        assert_eq!(model.history().len(), 10);

        model.reset_session();
        assert!(model.history().is_empty());
        assert_eq!(model.total_error(), 0.0);
        for w in model.weights() {
            assert!((-1.0..=1.0).contains(&w));
        }
        assert!((-1.0..=1.0).contains(&model.bias()));

        // Reset from empty is also fine.
        model.reset_session();
        assert!(model.history().is_empty());
    }

    #[test]
    fn test_initialise_weights_in_range() {
        let mut model = Perceptron::new();
        for _ in 0..100 {
            model.initialise_weights();
            for w in model.weights() {
                assert!((-1.0..=1.0).contains(&w));
            }
            assert!((-1.0..=1.0).contains(&model.bias()));
        }
    }

    #[test]
    fn test_total_error_monotone_within_run() {
        let mut model = Perceptron::with_random_weights();
        let mut prev = model.total_error();
        for i in 0..20 {
            let label = f64::from(i % 2);
            model.learn(label, -label, label, &mut NullSink);
            assert!(model.total_error() >= prev);
            prev = model.total_error();
        }
    }
}
