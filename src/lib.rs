/*!
# Recursive Bayesian belief filters

Recursive Bayesian belief updating for two state-space families: a discrete
categorical target-classification state and a continuous Gaussian
position-estimation state (scalar and independent-axis multivariate). Given a
prior belief and a stream of noisy measurements, each update combines the
prior with the sensor likelihood via Bayes' rule and yields a normalized
posterior, which becomes the next prior.

## Modules

- [`filter`] - The two belief filters and the shared [`Filter`] trait
- [`belief`] - Owned belief representations (categorical, diagonal Gaussian)
- [`sensor`] - Immutable sensor models (confusion matrix, per-axis Gaussian)
- [`driver`] - Sequential measurement/update orchestration
- [`reporter`] - Observability hooks for belief trajectories
- [`common`] - Low-level numeric utilities

## Example

```rust
use nalgebra::DMatrix;
use recursive_bayes_rs::{
    DiscreteBeliefFilter, DiscreteSensorModel, RecordingReporter, RunConfig,
    SequentialUpdateDriver,
};

// A sensor that is good at detecting a target but poor at classifying it
let sensor = DiscreteSensorModel::new(DMatrix::from_row_slice(
    3,
    3,
    &[0.45, 0.45, 0.1, 0.45, 0.45, 0.1, 0.1, 0.1, 0.8],
))
.unwrap();

// Uniform prior over {type 1, type 2, no target}; the true state is type 1
let mut filter = DiscreteBeliefFilter::uniform(3).unwrap();
let mut driver = SequentialUpdateDriver::new(RunConfig::new(10).with_seed(1234));
let mut reporter = RecordingReporter::new();

let posterior = driver
    .run_seeded(&mut filter, &sensor, &0, &mut reporter)
    .unwrap();
assert_eq!(reporter.updates().len(), 10);
assert!((posterior.probabilities().sum() - 1.0).abs() < 1e-9);
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Belief representations owned by the filters
pub mod belief;

/// Low-level numeric utilities (validation, normalization, fusion)
pub mod common;

/// Sequential measurement/update orchestration
pub mod driver;

/// Error types
pub mod errors;

/// Belief filters and the shared filter trait
pub mod filter;

/// Observability hooks for belief trajectories
pub mod reporter;

/// Sensor models
pub mod sensor;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Core types
pub use belief::{DiscreteBelief, GaussianBelief};
pub use sensor::{DiscreteSensorModel, GaussianSensorModel};

// Errors
pub use errors::{FilterError, RunError};

// Filters
pub use filter::{DiscreteBeliefFilter, Filter, GaussianBeliefFilter};

// Driver
pub use driver::{DriverState, RunConfig, SequentialUpdateDriver};

// Reporters
pub use reporter::{BeliefReporter, LoggingReporter, NoOpReporter, RecordingReporter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
