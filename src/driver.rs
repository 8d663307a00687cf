//! Sequential update driver
//!
//! Orchestrates N successive measurement/update cycles against a belief
//! filter, feeding each posterior back in as the next prior and emitting
//! every posterior to a reporting collaborator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::errors::RunError;
use crate::filter::traits::Filter;
use crate::reporter::BeliefReporter;

/// Configuration for a sequential run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    /// Number of measurement/update cycles to perform
    pub iterations: usize,
    /// Seed for the run's random source; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Create a configuration with the given iteration count.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            seed: None,
        }
    }

    /// Set the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Serialize to a pretty JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Lifecycle state of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No run started yet
    Idle,
    /// A run is in progress
    Running,
    /// The last run completed all iterations (terminal)
    Done,
    /// The last run aborted on a filter error (terminal)
    Failed,
}

/// Drives N measurement/update cycles against a filter.
///
/// Each cycle samples a measurement from the sensor model conditioned on the
/// true state, updates the filter, and passes `(iteration_index, posterior)`
/// to the reporter. The first filter error aborts the remaining iterations:
/// there is no retry, and no fallback belief is substituted. The filter's
/// last successfully computed posterior stays retrievable via
/// [`Filter::belief`].
///
/// `Done` and `Failed` are terminal: a driver that has finished a run rejects
/// further runs until [`SequentialUpdateDriver::reset`] returns it to `Idle`.
#[derive(Debug, Clone)]
pub struct SequentialUpdateDriver {
    config: RunConfig,
    state: DriverState,
}

impl SequentialUpdateDriver {
    /// Create a driver with the given configuration.
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            state: DriverState::Idle,
        }
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The run configuration
    #[inline]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Return a finished driver to `Idle` so it can run again.
    pub fn reset(&mut self) {
        self.state = DriverState::Idle;
    }

    /// Run the configured number of cycles with an injected random source.
    ///
    /// Given a fixed seed and fixed models, the full belief trajectory is
    /// reproducible.
    ///
    /// # Returns
    /// The final posterior, or a [`RunError`]: [`RunError::UpdateFailed`]
    /// carries the iteration index at which the filter update failed, and
    /// [`RunError::DriverFinished`] means the driver was already in a
    /// terminal state and must be [`reset`](SequentialUpdateDriver::reset)
    /// first.
    pub fn run<F, R, Rep>(
        &mut self,
        rng: &mut R,
        filter: &mut F,
        sensor: &F::Sensor,
        true_state: &F::TrueState,
        reporter: &mut Rep,
    ) -> Result<F::Belief, RunError>
    where
        F: Filter,
        R: rand::Rng,
        Rep: BeliefReporter<F::Belief>,
    {
        if self.state != DriverState::Idle {
            return Err(RunError::DriverFinished);
        }
        self.state = DriverState::Running;

        for iteration in 0..self.config.iterations {
            match filter.step(rng, sensor, true_state) {
                Ok(belief) => reporter.on_update(iteration, &belief),
                Err(error) => {
                    self.state = DriverState::Failed;
                    reporter.on_failure(iteration, &error);
                    return Err(RunError::update_failed(iteration, error));
                }
            }
        }

        self.state = DriverState::Done;
        let final_belief = filter.belief().clone();
        reporter.on_complete(self.config.iterations, &final_belief);
        Ok(final_belief)
    }

    /// Run with a random source built from the configured seed.
    ///
    /// Uses `StdRng::seed_from_u64` when a seed is configured, entropy
    /// otherwise.
    pub fn run_seeded<F, Rep>(
        &mut self,
        filter: &mut F,
        sensor: &F::Sensor,
        true_state: &F::TrueState,
        reporter: &mut Rep,
    ) -> Result<F::Belief, RunError>
    where
        F: Filter,
        Rep: BeliefReporter<F::Belief>,
    {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run(&mut rng, filter, sensor, true_state, reporter)
    }
}
