//! Observability for sequential belief updates.
//!
//! This module provides the [`BeliefReporter`] trait for instrumentation of
//! driver runs. Reporters receive callbacks after each update cycle without
//! polluting the filter logic; the core never formats output or renders
//! anything itself.
//!
//! The default [`NoOpReporter`] compiles to zero overhead - all callback
//! methods are empty and optimized away.

use std::fmt;

use crate::errors::FilterError;

// ============================================================================
// BeliefReporter trait
// ============================================================================

/// Observability trait for sequential update runs.
///
/// All methods have default empty implementations, so implementors only
/// override the events they care about. Callbacks receive references; clone
/// inside the callback if the data must be stored.
///
/// # Example
///
/// ```
/// use recursive_bayes_rs::{BeliefReporter, DiscreteBelief};
///
/// #[derive(Default)]
/// struct CountingReporter {
///     updates: usize,
/// }
///
/// impl BeliefReporter<DiscreteBelief> for CountingReporter {
///     fn on_update(&mut self, _iteration: usize, _belief: &DiscreteBelief) {
///         self.updates += 1;
///     }
/// }
/// ```
pub trait BeliefReporter<B> {
    /// Called after each successful update with the iteration index and the
    /// new posterior.
    fn on_update(&mut self, _iteration: usize, _belief: &B) {}

    /// Called once when the run completes all iterations.
    fn on_complete(&mut self, _iterations: usize, _final_belief: &B) {}

    /// Called once when an update fails and the run aborts.
    fn on_failure(&mut self, _iteration: usize, _error: &FilterError) {}
}

// ============================================================================
// NoOpReporter
// ============================================================================

/// Zero-cost reporter that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    /// Create a new no-op reporter.
    pub fn new() -> Self {
        Self
    }
}

impl<B> BeliefReporter<B> for NoOpReporter {
    // All methods use default empty implementations
}

// ============================================================================
// RecordingReporter
// ============================================================================

/// Reporter that captures the full belief trajectory.
///
/// Stores a clone of every posterior together with its iteration index,
/// allowing post-hoc analysis of a run. Memory grows linearly with the
/// iteration count.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter<B> {
    updates: Vec<(usize, B)>,
    failure: Option<(usize, FilterError)>,
}

impl<B> RecordingReporter<B> {
    /// Create a new recording reporter.
    pub fn new() -> Self {
        Self {
            updates: Vec::new(),
            failure: None,
        }
    }

    /// Captured `(iteration, posterior)` snapshots, in order.
    pub fn updates(&self) -> &[(usize, B)] {
        &self.updates
    }

    /// The last captured posterior, if any update succeeded.
    pub fn last_belief(&self) -> Option<&B> {
        self.updates.last().map(|(_, b)| b)
    }

    /// The failure that aborted the run, if any.
    pub fn failure(&self) -> Option<&(usize, FilterError)> {
        self.failure.as_ref()
    }

    /// Clear all captured data.
    pub fn clear(&mut self) {
        self.updates.clear();
        self.failure = None;
    }
}

impl<B: Clone> BeliefReporter<B> for RecordingReporter<B> {
    fn on_update(&mut self, iteration: usize, belief: &B) {
        self.updates.push((iteration, belief.clone()));
    }

    fn on_failure(&mut self, iteration: usize, error: &FilterError) {
        self.failure = Some((iteration, error.clone()));
    }
}

// ============================================================================
// LoggingReporter
// ============================================================================

/// Reporter that logs events through the `log` crate facade.
///
/// Per-update snapshots go to DEBUG, run completion to INFO, and failures to
/// ERROR. Useful for watching a run without storing its trajectory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingReporter;

impl LoggingReporter {
    /// Create a new logging reporter.
    pub fn new() -> Self {
        Self
    }
}

impl<B: fmt::Debug> BeliefReporter<B> for LoggingReporter {
    fn on_update(&mut self, iteration: usize, belief: &B) {
        log::debug!("iteration {}: posterior {:?}", iteration, belief);
    }

    fn on_complete(&mut self, iterations: usize, final_belief: &B) {
        log::info!(
            "run complete after {} iterations: {:?}",
            iterations,
            final_belief
        );
    }

    fn on_failure(&mut self, iteration: usize, error: &FilterError) {
        log::error!("run aborted at iteration {}: {}", iteration, error);
    }
}
