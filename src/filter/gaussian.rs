//! Gaussian belief filter for position estimation
//!
//! Maintains a mean and per-axis variance and fuses each measurement by
//! inverse-variance weighting. The scalar case is D = 1 through the same
//! vectorized path; there is no separate one-dimensional implementation.
//!
//! Axes are always fused independently. This is a documented approximation
//! that is exact only when the true covariance is diagonal.

use nalgebra::DVector;

use crate::belief::GaussianBelief;
use crate::common::numeric::fuse_axis;
use crate::errors::FilterError;
use crate::filter::traits::Filter;
use crate::sensor::GaussianSensorModel;

/// Recursive Gaussian fusion filter with diagonal covariance.
///
/// Each update is a single-step Kalman measurement update with no process
/// model: the prior is the previous posterior, carried forward unchanged
/// between measurements.
#[derive(Debug, Clone)]
pub struct GaussianBeliefFilter {
    belief: GaussianBelief,
    initial: GaussianBelief,
}

impl GaussianBeliefFilter {
    /// Create a filter from a prior mean and per-axis variance.
    ///
    /// Fails with `InvalidVariance` if any variance entry is non-positive.
    pub fn new(prior_mean: DVector<f64>, prior_variance: DVector<f64>) -> Result<Self, FilterError> {
        let belief = GaussianBelief::new(prior_mean, prior_variance)?;
        Ok(Self::from_belief(belief))
    }

    /// Create a filter from an already validated belief.
    pub fn from_belief(prior: GaussianBelief) -> Self {
        Self {
            initial: prior.clone(),
            belief: prior,
        }
    }

    /// Create a one-dimensional filter.
    pub fn scalar(prior_mean: f64, prior_variance: f64) -> Result<Self, FilterError> {
        Ok(Self::from_belief(GaussianBelief::scalar(
            prior_mean,
            prior_variance,
        )?))
    }

    /// State dimension D
    #[inline]
    pub fn dim(&self) -> usize {
        self.belief.dim()
    }

    /// Fuse one measurement into the belief, axis by axis.
    ///
    /// ```text
    /// fused_mean[d] = (prior_var[d] / (prior_var[d] + meas_var[d])) * z[d]
    ///               + (meas_var[d]  / (prior_var[d] + meas_var[d])) * prior_mean[d]
    /// fused_var[d]  = prior_var[d] * meas_var[d] / (prior_var[d] + meas_var[d])
    /// ```
    ///
    /// Fails with `InvalidVariance` when a measurement variance entry is
    /// negative or non-finite, or a fused denominator is zero. A failed
    /// update leaves the stored belief untouched.
    ///
    /// # Returns
    /// The new fused belief.
    pub fn update(
        &mut self,
        measurement: &DVector<f64>,
        measurement_variance: &DVector<f64>,
    ) -> Result<&GaussianBelief, FilterError> {
        let d = self.dim();
        if measurement.len() != d {
            return Err(FilterError::DimensionMismatch {
                expected: d,
                actual: measurement.len(),
                context: "measurement".to_string(),
            });
        }
        if measurement_variance.len() != d {
            return Err(FilterError::DimensionMismatch {
                expected: d,
                actual: measurement_variance.len(),
                context: "measurement variance".to_string(),
            });
        }
        for (i, &v) in measurement_variance.iter().enumerate() {
            if !v.is_finite() || v < 0.0 {
                return Err(FilterError::InvalidVariance { axis: i, value: v });
            }
        }

        let mut fused_mean = DVector::zeros(d);
        let mut fused_variance = DVector::zeros(d);
        for axis in 0..d {
            let (mean, variance) = fuse_axis(
                axis,
                self.belief.mean()[axis],
                self.belief.variance()[axis],
                measurement[axis],
                measurement_variance[axis],
            )?;
            fused_mean[axis] = mean;
            fused_variance[axis] = variance;
        }

        self.belief.replace(fused_mean, fused_variance);
        Ok(&self.belief)
    }
}

impl Filter for GaussianBeliefFilter {
    type Sensor = GaussianSensorModel;
    type TrueState = DVector<f64>;
    type Belief = GaussianBelief;

    fn step<R: rand::Rng>(
        &mut self,
        rng: &mut R,
        sensor: &GaussianSensorModel,
        true_state: &DVector<f64>,
    ) -> Result<GaussianBelief, FilterError> {
        if sensor.dim() != self.dim() {
            return Err(FilterError::DimensionMismatch {
                expected: self.dim(),
                actual: sensor.dim(),
                context: "sensor dimension".to_string(),
            });
        }
        let measurement = sensor.sample(rng, true_state)?;
        self.update(&measurement, sensor.variance())?;
        Ok(self.belief.clone())
    }

    fn belief(&self) -> &GaussianBelief {
        &self.belief
    }

    fn reset(&mut self) {
        self.belief = self.initial.clone();
    }
}
