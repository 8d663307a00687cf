//! Numeric routines for belief updates
//!
//! Validation, Bayes normalization, and inverse-variance fusion shared by the
//! discrete and Gaussian filters.

use nalgebra::DVector;

use crate::errors::FilterError;

/// Tolerance for checking that a probability vector sums to one.
///
/// Supplied priors and sensor-model rows must sum to 1 within this tolerance.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-9;

/// Validate a probability distribution.
///
/// Checks that every entry is finite and non-negative and that the entries
/// sum to 1 within [`DISTRIBUTION_TOLERANCE`].
///
/// # Arguments
/// * `probabilities` - Candidate probability vector
/// * `context` - Description used in error messages (e.g., "prior")
pub fn validate_distribution(
    probabilities: &DVector<f64>,
    context: &str,
) -> Result<(), FilterError> {
    if probabilities.is_empty() {
        return Err(FilterError::InvalidDistribution {
            context: format!("{} is empty", context),
        });
    }

    for (i, &p) in probabilities.iter().enumerate() {
        if !p.is_finite() || p < 0.0 {
            return Err(FilterError::InvalidDistribution {
                context: format!("{} entry {} is {}", context, i, p),
            });
        }
    }

    let sum = probabilities.sum();
    if (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(FilterError::InvalidDistribution {
            context: format!("{} sums to {}", context, sum),
        });
    }

    Ok(())
}

/// Validate a variance vector: every entry must be finite and strictly positive.
pub fn validate_variances(variances: &DVector<f64>) -> Result<(), FilterError> {
    for (i, &v) in variances.iter().enumerate() {
        if !v.is_finite() || v <= 0.0 {
            return Err(FilterError::InvalidVariance { axis: i, value: v });
        }
    }
    Ok(())
}

/// Normalize unnormalized posterior weights in place.
///
/// Returns the normalization constant Z. Fails with `DegenerateBelief` when Z
/// is zero or non-finite, i.e. every state was assigned zero posterior mass.
pub fn normalize_in_place(weights: &mut DVector<f64>) -> Result<f64, FilterError> {
    let z = weights.sum();
    if !z.is_finite() || z <= 0.0 {
        return Err(FilterError::DegenerateBelief { normalization: z });
    }
    *weights /= z;
    Ok(z)
}

/// Fuse a prior estimate with a measurement on a single axis.
///
/// Classical inverse-variance-weighted fusion, equivalent to a single-step
/// Kalman measurement update with no process model:
///
/// ```text
/// fused_mean = (prior_var / (prior_var + meas_var)) * z
///            + (meas_var  / (prior_var + meas_var)) * prior_mean
/// fused_var  = prior_var * meas_var / (prior_var + meas_var)
/// ```
///
/// # Arguments
/// * `axis` - Axis index, used in error reporting
/// * `prior_mean`, `prior_variance` - Prior estimate on this axis
/// * `measurement`, `measurement_variance` - Observed sample and noise variance
///
/// # Returns
/// `(fused_mean, fused_variance)` or `InvalidVariance` when the denominator
/// is zero or non-finite.
pub fn fuse_axis(
    axis: usize,
    prior_mean: f64,
    prior_variance: f64,
    measurement: f64,
    measurement_variance: f64,
) -> Result<(f64, f64), FilterError> {
    let denominator = prior_variance + measurement_variance;
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(FilterError::InvalidVariance {
            axis,
            value: denominator,
        });
    }

    let fused_mean = (prior_variance / denominator) * measurement
        + (measurement_variance / denominator) * prior_mean;
    let fused_variance = (prior_variance * measurement_variance) / denominator;

    Ok((fused_mean, fused_variance))
}
