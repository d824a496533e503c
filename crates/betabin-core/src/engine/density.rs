//! # Prior Density and Binomial Likelihood
//!
//! Evaluates the two factors of the posterior pointwise over a [`Grid`]:
//!
//! - **prior**: `BetaPDF(p; α, β)`
//! - **likelihood**: `BinomialPMF(k; N, p)`
//!
//! ## Boundary behavior
//!
//! For α < 1 (or β < 1) the Beta density diverges at `p = 0` (or `p = 1`), and
//! the corresponding grid sample is `+inf`. That is not a failure: the
//! normalizer integrates such endpoints analytically using the leading
//! exponents reported in [`Densities::orders`].

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use statrs::distribution::{Beta, Binomial, Continuous, ContinuousCDF, Discrete};

use crate::engine::errors::ComputeError;
use crate::engine::grid::Grid;
use crate::engine::quadrature::EndpointOrders;

/// Shape parameters of a Beta(α, β) distribution.
///
/// Serves as both the prior and the analytic conjugate posterior. Both
/// parameters are expected to be finite and strictly positive; validation
/// happens in [`crate::engine::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaParams {
    /// Pseudo-count of successes
    pub alpha: f64,
    /// Pseudo-count of failures
    pub beta: f64,
}

impl BetaParams {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// The uniform prior Beta(1, 1).
    pub fn uniform() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Conjugate Beta-Binomial update.
    ///
    /// Beta(α, β) combined with `successes` out of `successes + failures` trials
    /// yields Beta(α + successes, β + failures).
    pub fn observe_counts(&self, successes: u64, failures: u64) -> Self {
        Self {
            alpha: self.alpha + successes as f64,
            beta: self.beta + failures as f64,
        }
    }

    /// E[p] = α / (α + β).
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Var[p] = αβ / [(α+β)²(α+β+1)].
    pub fn variance(&self) -> f64 {
        let sum = self.alpha + self.beta;
        (self.alpha * self.beta) / (sum * sum * (sum + 1.0))
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Interior mode `(α - 1) / (α + β - 2)`.
    ///
    /// Only defined when α > 1 and β > 1; otherwise the density peaks at a
    /// boundary (or is flat) and `None` is returned.
    pub fn mode(&self) -> Option<f64> {
        if self.alpha > 1.0 && self.beta > 1.0 {
            Some((self.alpha - 1.0) / (self.alpha + self.beta - 2.0))
        } else {
            None
        }
    }

    /// Density at a single point. `+inf` at a divergent boundary.
    pub fn density(&self, x: f64) -> Result<f64, ComputeError> {
        Ok(self.distribution()?.pdf(x))
    }

    /// Cumulative probability `P(p ≤ x)`.
    pub fn cdf(&self, x: f64) -> Result<f64, ComputeError> {
        Ok(self.distribution()?.cdf(x))
    }

    /// Probability mass on `[lower, upper]` from the exact CDF.
    ///
    /// Callers are responsible for `lower ≤ upper`; an inverted pair yields a
    /// negative difference.
    pub fn interval_mass(&self, lower: f64, upper: f64) -> Result<f64, ComputeError> {
        let dist = self.distribution()?;
        Ok(dist.cdf(upper) - dist.cdf(lower))
    }

    /// Density evaluated at every grid point.
    pub fn densities(&self, grid: &Grid) -> Result<Vec<f64>, ComputeError> {
        let dist = self.distribution()?;
        Ok(map_grid(grid, |p| dist.pdf(p)))
    }

    fn distribution(&self) -> Result<Beta, ComputeError> {
        Beta::new(self.alpha, self.beta).map_err(|e| {
            ComputeError::Numerical(format!(
                "Beta({}, {}) rejected: {}",
                self.alpha, self.beta, e
            ))
        })
    }
}

impl Default for BetaParams {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Prior and likelihood curves aligned with a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Densities {
    pub prior: Vec<f64>,
    pub likelihood: Vec<f64>,
    /// Leading exponents of `prior × likelihood` at `p = 0` and `p = 1`.
    pub orders: EndpointOrders,
}

/// Evaluates the prior density and binomial likelihood over `grid`.
///
/// `successes ≤ trials` is assumed (enforced by validation). With `trials == 0`
/// the likelihood is identically 1.
pub fn evaluate_densities(
    grid: &Grid,
    prior: BetaParams,
    trials: u64,
    successes: u64,
) -> Result<Densities, ComputeError> {
    let prior_curve = prior.densities(grid)?;
    let likelihood = likelihood_curve(grid, trials, successes)?;
    let failures = trials.saturating_sub(successes);

    Ok(Densities {
        prior: prior_curve,
        likelihood,
        orders: EndpointOrders {
            lower: prior.alpha + successes as f64 - 1.0,
            upper: prior.beta + failures as f64 - 1.0,
        },
    })
}

/// `BinomialPMF(successes; trials, p)` for every grid point `p`.
pub fn likelihood_curve(
    grid: &Grid,
    trials: u64,
    successes: u64,
) -> Result<Vec<f64>, ComputeError> {
    if trials == 0 {
        return Ok(vec![1.0; grid.len()]);
    }
    if successes > trials {
        return Err(ComputeError::InvalidParameter(format!(
            "k ({}) exceeds N ({})",
            successes, trials
        )));
    }

    try_map_grid(grid, |p| binomial_pmf(successes, trials, p))
}

fn binomial_pmf(successes: u64, trials: u64, p: f64) -> Result<f64, ComputeError> {
    let dist = Binomial::new(p, trials).map_err(|e| {
        ComputeError::Numerical(format!("Binomial(p = {}, N = {}) rejected: {}", p, trials, e))
    })?;
    Ok(dist.pmf(successes))
}

#[cfg(feature = "rayon")]
fn map_grid<F>(grid: &Grid, f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    grid.points().par_iter().map(|&p| f(p)).collect()
}

#[cfg(not(feature = "rayon"))]
fn map_grid<F>(grid: &Grid, f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    grid.iter().map(f).collect()
}

#[cfg(feature = "rayon")]
fn try_map_grid<F>(grid: &Grid, f: F) -> Result<Vec<f64>, ComputeError>
where
    F: Fn(f64) -> Result<f64, ComputeError> + Sync + Send,
{
    grid.points().par_iter().map(|&p| f(p)).collect()
}

#[cfg(not(feature = "rayon"))]
fn try_map_grid<F>(grid: &Grid, f: F) -> Result<Vec<f64>, ComputeError>
where
    F: Fn(f64) -> Result<f64, ComputeError>,
{
    grid.iter().map(f).collect()
}
