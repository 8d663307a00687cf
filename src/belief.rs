//! Belief types
//!
//! A belief is the current state of knowledge about the true state: a
//! categorical distribution over a finite state space, or Gaussian parameters
//! (mean and per-axis variance) over a continuous one. Uses runtime dimensions
//! (`DVector`) so state-space size is a construction-time parameter.

use nalgebra::DVector;

use crate::common::numeric::{validate_distribution, validate_variances};
use crate::errors::FilterError;

/// Categorical belief over a finite state space of K labeled states.
///
/// Invariant: all entries are non-negative and sum to 1 within tolerance.
/// The invariant is checked at construction and re-established by every
/// successful filter update.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteBelief {
    probabilities: DVector<f64>,
}

impl DiscreteBelief {
    /// Create a belief from a probability vector.
    ///
    /// Fails with `InvalidDistribution` if any entry is negative or the sum
    /// deviates from 1 beyond tolerance.
    pub fn new(probabilities: DVector<f64>) -> Result<Self, FilterError> {
        validate_distribution(&probabilities, "belief")?;
        Ok(Self { probabilities })
    }

    /// Create a uniform belief over `num_states` states.
    pub fn uniform(num_states: usize) -> Result<Self, FilterError> {
        if num_states == 0 {
            return Err(FilterError::InvalidDistribution {
                context: "belief is empty".to_string(),
            });
        }
        Ok(Self {
            probabilities: DVector::from_element(num_states, 1.0 / num_states as f64),
        })
    }

    /// Number of states in the state space
    #[inline]
    pub fn num_states(&self) -> usize {
        self.probabilities.len()
    }

    /// The full probability vector
    #[inline]
    pub fn probabilities(&self) -> &DVector<f64> {
        &self.probabilities
    }

    /// Probability assigned to a single state
    #[inline]
    pub fn probability(&self, state: usize) -> f64 {
        self.probabilities[state]
    }

    /// Index of the most probable state (MAP estimate)
    pub fn most_probable_state(&self) -> usize {
        self.probabilities.argmax().0
    }

    /// Replace the stored probabilities without re-validating.
    ///
    /// Caller must guarantee the vector is already normalized.
    pub(crate) fn replace(&mut self, probabilities: DVector<f64>) {
        self.probabilities = probabilities;
    }
}

/// Gaussian belief with a mean vector and a diagonal covariance stored as a
/// per-axis variance vector.
///
/// Cross-axis correlation is not modeled: the representation cannot express
/// it, which keeps the per-axis fusion exact only when the true covariance is
/// diagonal. Invariant: all variances are strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianBelief {
    mean: DVector<f64>,
    variance: DVector<f64>,
}

impl GaussianBelief {
    /// Create a belief from a mean vector and a per-axis variance vector.
    ///
    /// Fails with `InvalidVariance` if any variance entry is non-positive,
    /// or `DimensionMismatch` if the vectors differ in length.
    pub fn new(mean: DVector<f64>, variance: DVector<f64>) -> Result<Self, FilterError> {
        if mean.len() != variance.len() {
            return Err(FilterError::DimensionMismatch {
                expected: mean.len(),
                actual: variance.len(),
                context: "variance vector".to_string(),
            });
        }
        if mean.is_empty() {
            return Err(FilterError::DimensionMismatch {
                expected: 1,
                actual: 0,
                context: "mean vector".to_string(),
            });
        }
        validate_variances(&variance)?;
        Ok(Self { mean, variance })
    }

    /// Create a one-dimensional belief.
    ///
    /// The scalar case is the same representation with D = 1, not a separate
    /// code path.
    pub fn scalar(mean: f64, variance: f64) -> Result<Self, FilterError> {
        Self::new(
            DVector::from_vec(vec![mean]),
            DVector::from_vec(vec![variance]),
        )
    }

    /// State dimension D
    #[inline]
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Mean vector
    #[inline]
    pub fn mean(&self) -> &DVector<f64> {
        &self.mean
    }

    /// Per-axis variance vector (the diagonal of the covariance)
    #[inline]
    pub fn variance(&self) -> &DVector<f64> {
        &self.variance
    }

    /// Replace the stored parameters without re-validating.
    ///
    /// Caller must guarantee the variances are already positive.
    pub(crate) fn replace(&mut self, mean: DVector<f64>, variance: DVector<f64>) {
        self.mean = mean;
        self.variance = variance;
    }
}
