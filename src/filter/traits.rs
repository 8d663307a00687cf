//! Core filter trait
//!
//! This module defines the unified interface the sequential driver runs
//! against, regardless of the underlying belief representation.

use crate::errors::FilterError;

/// Recursive belief filter over one measurement/update cycle.
///
/// A filter exclusively owns its current belief. Each call to [`step`] draws
/// a measurement from the sensor model conditioned on the true state, fuses
/// it into the belief via Bayes' rule, and returns a snapshot of the new
/// posterior, which serves as the prior for the next call.
///
/// # Type Parameters
/// - `Sensor` - Sensor model providing samples (and likelihoods, for the
///   discrete family)
/// - `TrueState` - Ground-truth state the sensor is conditioned on
/// - `Belief` - Belief representation owned by the filter
///
/// [`step`]: Filter::step
pub trait Filter {
    /// Sensor model type this filter consumes
    type Sensor;

    /// Ground-truth state type
    type TrueState: ?Sized;

    /// Belief representation
    type Belief: Clone;

    /// Perform one measurement/update cycle.
    ///
    /// # Arguments
    /// * `rng` - Random source for measurement sampling; seeding lives with
    ///   the caller so runs are reproducible
    /// * `sensor` - Immutable sensor model, shareable across filters
    /// * `true_state` - True state the measurement is conditioned on
    ///
    /// # Returns
    /// Snapshot of the posterior belief, or the error that aborted the
    /// update. After an error the previously stored belief is unchanged.
    fn step<R: rand::Rng>(
        &mut self,
        rng: &mut R,
        sensor: &Self::Sensor,
        true_state: &Self::TrueState,
    ) -> Result<Self::Belief, FilterError>;

    /// Current belief (read-only)
    fn belief(&self) -> &Self::Belief;

    /// Reset the belief to the prior supplied at construction
    fn reset(&mut self);
}
