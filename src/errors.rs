//! Error types for belief filters and the sequential driver
//!
//! This module provides proper error handling instead of panics.

use std::fmt;

/// Errors that can occur while constructing or updating a belief filter
#[derive(Debug, Clone)]
pub enum FilterError {
    /// A supplied probability vector has negative entries or does not sum to 1
    InvalidDistribution {
        /// Description of the offending vector (e.g., "prior", "sensor model row 2")
        context: String,
    },

    /// A supplied variance is non-positive, or a fused denominator is zero/non-finite
    InvalidVariance {
        /// Axis index of the offending entry
        axis: usize,
        /// The offending value
        value: f64,
    },

    /// Bayes normalization constant is zero or non-finite: the observed
    /// measurement is impossible under every hypothesized state
    DegenerateBelief {
        /// The normalization constant that was computed
        normalization: f64,
    },

    /// Dimension mismatch between expected and actual
    DimensionMismatch {
        /// What was expected
        expected: usize,
        /// What was received
        actual: usize,
        /// Context (e.g., "likelihood row", "measurement")
        context: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidDistribution { context } => {
                write!(f, "Invalid probability distribution: {}", context)
            }
            FilterError::InvalidVariance { axis, value } => {
                write!(f, "Invalid variance on axis {}: {}", axis, value)
            }
            FilterError::DegenerateBelief { normalization } => {
                write!(
                    f,
                    "Degenerate belief: normalization constant is {}",
                    normalization
                )
            }
            FilterError::DimensionMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Dimension mismatch for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Errors that can abort or prevent a sequential run
#[derive(Debug, Clone)]
pub enum RunError {
    /// A filter update failed and the remaining iterations were aborted.
    ///
    /// Carries the iteration index at which the update failed. The filter's
    /// last successfully computed posterior remains retrievable.
    UpdateFailed {
        /// Iteration index (zero-based) at which the update failed
        iteration: usize,
        /// The underlying filter error
        source: FilterError,
    },

    /// `run` was called on a driver whose previous run already reached a
    /// terminal state (`Done` or `Failed`); the driver must be reset first
    DriverFinished,
}

impl RunError {
    /// Create an update-failure error
    pub fn update_failed(iteration: usize, source: FilterError) -> Self {
        Self::UpdateFailed { iteration, source }
    }

    /// Iteration index at which the run aborted, if an update failed
    pub fn iteration(&self) -> Option<usize> {
        match self {
            RunError::UpdateFailed { iteration, .. } => Some(*iteration),
            RunError::DriverFinished => None,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::UpdateFailed { iteration, source } => {
                write!(f, "Update failed at iteration {}: {}", iteration, source)
            }
            RunError::DriverFinished => {
                write!(f, "Driver already finished a run; reset it before running again")
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::UpdateFailed { source, .. } => Some(source),
            RunError::DriverFinished => None,
        }
    }
}
