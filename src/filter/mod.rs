/*!
Recursive Bayesian belief filters.

Two filter families over the shared [`Filter`] trait:
- [`DiscreteBeliefFilter`] - categorical belief, Bayes-rule likelihood update
- [`GaussianBeliefFilter`] - Gaussian belief, inverse-variance-weighted fusion
*/

pub mod discrete;
pub mod gaussian;
pub mod traits;

pub use discrete::DiscreteBeliefFilter;
pub use gaussian::GaussianBeliefFilter;
pub use traits::Filter;
