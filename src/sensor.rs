//! Sensor models
//!
//! A sensor model encapsulates the conditional likelihood
//! `P(measurement | state)` and can draw a noisy measurement given the true
//! state. Models are immutable after construction and can be shared read-only
//! across filters and measurement cycles.
//!
//! The two variants are deliberately asymmetric, reflecting the two update
//! algorithms: the discrete filter consumes likelihood rows, while the
//! Gaussian filter consumes the raw sample plus the known noise variance and
//! needs no likelihood function at all.

use nalgebra::{DMatrix, DVector};
use rand_distr::StandardNormal;

use crate::common::numeric::{validate_distribution, validate_variances};
use crate::errors::FilterError;

// ============================================================================
// Discrete sensor model
// ============================================================================

/// Discrete sensor model: a K×K row-stochastic confusion matrix.
///
/// Row `i` is the categorical distribution `P(measurement = j | state = i)`,
/// so each row sums to 1. A diagonal-dominant matrix models a sensor that
/// usually reports the true state.
#[derive(Debug, Clone)]
pub struct DiscreteSensorModel {
    rows: DMatrix<f64>,
}

impl DiscreteSensorModel {
    /// Create a sensor model from a confusion matrix.
    ///
    /// Fails with `DimensionMismatch` if the matrix is not square, or
    /// `InvalidDistribution` if any row has negative entries or does not sum
    /// to 1 within tolerance.
    pub fn new(rows: DMatrix<f64>) -> Result<Self, FilterError> {
        if rows.nrows() != rows.ncols() {
            return Err(FilterError::DimensionMismatch {
                expected: rows.nrows(),
                actual: rows.ncols(),
                context: "sensor model matrix columns".to_string(),
            });
        }
        for i in 0..rows.nrows() {
            let row: DVector<f64> = rows.row(i).transpose();
            validate_distribution(&row, &format!("sensor model row {}", i))?;
        }
        Ok(Self { rows })
    }

    /// Number of states (and measurement labels) K
    #[inline]
    pub fn num_states(&self) -> usize {
        self.rows.nrows()
    }

    /// Conditional likelihood `P(measurement | state)`
    #[inline]
    pub fn likelihood(&self, measurement: usize, state: usize) -> f64 {
        self.rows[(state, measurement)]
    }

    /// Likelihood of an observed measurement under every hypothesized state.
    ///
    /// Entry `i` is `likelihood(measurement, i)`, i.e. column `measurement`
    /// of the confusion matrix. This is the vector the discrete filter
    /// multiplies into its prior.
    pub fn likelihood_row(&self, measurement: usize) -> DVector<f64> {
        self.rows.column(measurement).into_owned()
    }

    /// Draw a measurement label given the true state.
    ///
    /// Samples from the categorical distribution in row `true_state` by
    /// inverting the cumulative distribution with a single uniform draw.
    pub fn sample<R: rand::Rng>(&self, rng: &mut R, true_state: usize) -> usize {
        let u: f64 = rng.gen();
        let mut cumulative = 0.0;
        for j in 0..self.num_states() {
            cumulative += self.rows[(true_state, j)];
            if u < cumulative {
                return j;
            }
        }
        // Row sums to 1 within tolerance; u can only land past the last
        // boundary through rounding
        self.num_states() - 1
    }
}

// ============================================================================
// Gaussian sensor model
// ============================================================================

/// Gaussian sensor model with independent per-axis noise.
///
/// Holds the expected state (the default sampling center) and a per-axis
/// noise variance vector. The variance plays both roles required by the
/// fusion update: it shapes the drawn samples and is handed to the filter as
/// the known measurement variance.
#[derive(Debug, Clone)]
pub struct GaussianSensorModel {
    mean: DVector<f64>,
    variance: DVector<f64>,
}

impl GaussianSensorModel {
    /// Create a sensor model from an expected state and per-axis noise
    /// variances.
    ///
    /// Fails with `InvalidVariance` if any variance entry is non-positive, or
    /// `DimensionMismatch` if the vectors differ in length.
    pub fn new(mean: DVector<f64>, variance: DVector<f64>) -> Result<Self, FilterError> {
        if mean.len() != variance.len() {
            return Err(FilterError::DimensionMismatch {
                expected: mean.len(),
                actual: variance.len(),
                context: "sensor noise variance".to_string(),
            });
        }
        validate_variances(&variance)?;
        Ok(Self { mean, variance })
    }

    /// Create a one-dimensional sensor model.
    pub fn scalar(mean: f64, variance: f64) -> Result<Self, FilterError> {
        Self::new(
            DVector::from_vec(vec![mean]),
            DVector::from_vec(vec![variance]),
        )
    }

    /// Measurement dimension D
    #[inline]
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Expected state
    #[inline]
    pub fn mean(&self) -> &DVector<f64> {
        &self.mean
    }

    /// Per-axis noise variance
    #[inline]
    pub fn variance(&self) -> &DVector<f64> {
        &self.variance
    }

    /// Draw a measurement around the given true state.
    ///
    /// Each axis is drawn independently from
    /// `N(true_state[d], variance[d])`.
    pub fn sample<R: rand::Rng>(
        &self,
        rng: &mut R,
        true_state: &DVector<f64>,
    ) -> Result<DVector<f64>, FilterError> {
        if true_state.len() != self.dim() {
            return Err(FilterError::DimensionMismatch {
                expected: self.dim(),
                actual: true_state.len(),
                context: "true state".to_string(),
            });
        }
        Ok(DVector::from_fn(self.dim(), |d, _| {
            let noise: f64 = rng.sample(StandardNormal);
            true_state[d] + noise * self.variance[d].sqrt()
        }))
    }

    /// Draw a measurement around the model's own expected state.
    pub fn sample_expected<R: rand::Rng>(&self, rng: &mut R) -> DVector<f64> {
        DVector::from_fn(self.dim(), |d, _| {
            let noise: f64 = rng.sample(StandardNormal);
            self.mean[d] + noise * self.variance[d].sqrt()
        })
    }
}
