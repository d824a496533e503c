//! # Betabin Core
//!
//! Bayesian inference for a binomial success probability under a Beta prior.
//!
//! Given `k` successes in `N` trials and a Beta(α, β) prior, the engine
//! evaluates the prior, likelihood and normalized posterior on a grid over
//! `[0, 1]` and computes exact credible-interval probabilities from the Beta
//! CDF.
//!
//! ```rust
//! use betabin_core::{compute_with_defaults, RawInputs};
//!
//! let bundle = compute_with_defaults(&RawInputs::new(10, 6, 1.0, 1.0, 0.2, 0.8)).unwrap();
//! let p = bundle.posterior_interval_probability().unwrap();
//! assert!((p - 0.9476).abs() < 1e-3);
//! ```

pub mod engine;

// Re-export commonly used types
pub use engine::compute::{
    compute, compute_batch, compute_response, compute_with_defaults, ComputeResponse, OutputBundle,
};
pub use engine::density::BetaParams;
pub use engine::errors::ComputeError;
pub use engine::grid::{Grid, DEFAULT_GRID_POINTS};
pub use engine::interval::{IntervalProbabilities, IntervalQuery};
pub use engine::params::{ModelParameters, RawInputs};
