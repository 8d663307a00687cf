//! Discrete Bayes filter for target classification
//!
//! Maintains a categorical belief over K states and updates it with the
//! likelihood of each observed measurement:
//!
//! ```text
//! posterior[i] = likelihood_row[i] * prior[i] / Z,  Z = sum_i(...)
//! ```
//!
//! Operates in probability space directly. Sequence lengths here are short
//! enough that log-space accumulation is not needed.

use nalgebra::DVector;

use crate::belief::DiscreteBelief;
use crate::common::numeric::normalize_in_place;
use crate::errors::FilterError;
use crate::filter::traits::Filter;
use crate::sensor::DiscreteSensorModel;

/// Recursive Bayes filter over a finite state space.
///
/// Exclusively owns its belief; each successful update replaces it with the
/// normalized posterior. A failed update leaves the stored belief untouched.
#[derive(Debug, Clone)]
pub struct DiscreteBeliefFilter {
    belief: DiscreteBelief,
    initial: DiscreteBelief,
}

impl DiscreteBeliefFilter {
    /// Create a filter from a prior probability vector.
    ///
    /// Fails with `InvalidDistribution` if any entry is negative or the sum
    /// deviates from 1 beyond tolerance.
    pub fn new(prior: DVector<f64>) -> Result<Self, FilterError> {
        let belief = DiscreteBelief::new(prior)?;
        Ok(Self::from_belief(belief))
    }

    /// Create a filter from an already validated belief.
    pub fn from_belief(prior: DiscreteBelief) -> Self {
        Self {
            initial: prior.clone(),
            belief: prior,
        }
    }

    /// Create a filter with a uniform prior over `num_states` states.
    pub fn uniform(num_states: usize) -> Result<Self, FilterError> {
        Ok(Self::from_belief(DiscreteBelief::uniform(num_states)?))
    }

    /// Number of states K
    #[inline]
    pub fn num_states(&self) -> usize {
        self.belief.num_states()
    }

    /// Fuse one likelihood row into the belief.
    ///
    /// `likelihood_row[i]` is `P(measurement | state = i)` for the observed
    /// measurement. Entries must be finite and non-negative but need not sum
    /// to 1.
    ///
    /// Fails with `DegenerateBelief` when every state is assigned zero
    /// posterior mass, i.e. the observation is impossible under the entire
    /// prior support - a model/data mismatch, not a transient fault.
    ///
    /// # Returns
    /// The new normalized belief.
    pub fn update(&mut self, likelihood_row: &DVector<f64>) -> Result<&DiscreteBelief, FilterError> {
        let k = self.num_states();
        if likelihood_row.len() != k {
            return Err(FilterError::DimensionMismatch {
                expected: k,
                actual: likelihood_row.len(),
                context: "likelihood row".to_string(),
            });
        }
        for (i, &l) in likelihood_row.iter().enumerate() {
            if !l.is_finite() || l < 0.0 {
                return Err(FilterError::InvalidDistribution {
                    context: format!("likelihood row entry {} is {}", i, l),
                });
            }
        }

        // A single state trivially has probability 1
        if k == 1 {
            return Ok(&self.belief);
        }

        let mut posterior = likelihood_row.component_mul(self.belief.probabilities());
        normalize_in_place(&mut posterior)?;
        self.belief.replace(posterior);
        Ok(&self.belief)
    }
}

impl Filter for DiscreteBeliefFilter {
    type Sensor = DiscreteSensorModel;
    type TrueState = usize;
    type Belief = DiscreteBelief;

    fn step<R: rand::Rng>(
        &mut self,
        rng: &mut R,
        sensor: &DiscreteSensorModel,
        true_state: &usize,
    ) -> Result<DiscreteBelief, FilterError> {
        if sensor.num_states() != self.num_states() {
            return Err(FilterError::DimensionMismatch {
                expected: self.num_states(),
                actual: sensor.num_states(),
                context: "sensor model states".to_string(),
            });
        }
        let measurement = sensor.sample(rng, *true_state);
        let likelihood_row = sensor.likelihood_row(measurement);
        self.update(&likelihood_row)?;
        Ok(self.belief.clone())
    }

    fn belief(&self) -> &DiscreteBelief {
        &self.belief
    }

    fn reset(&mut self) {
        self.belief = self.initial.clone();
    }
}
