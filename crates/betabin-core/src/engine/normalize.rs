//! Posterior normalization.
//!
//! Forms `prior × likelihood` pointwise and divides by its integral `Z`
//! (the marginal likelihood up to the grid's discretization).

use crate::engine::errors::ComputeError;
use crate::engine::grid::Grid;
use crate::engine::quadrature::{integrate, EndpointOrders};

/// A posterior curve together with its normalization constant.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPosterior {
    /// `prior[i] * likelihood[i] / Z`
    pub posterior: Vec<f64>,
    /// `Z = ∫ prior × likelihood dp`
    pub evidence: f64,
}

/// Pointwise product of prior and likelihood.
///
/// An infinite prior sample paired with a zero likelihood becomes 0: at that
/// endpoint the product's leading exponent is positive, so it vanishes.
pub fn unnormalized_posterior(prior: &[f64], likelihood: &[f64]) -> Vec<f64> {
    prior
        .iter()
        .zip(likelihood)
        .map(|(&p, &l)| if l == 0.0 { 0.0 } else { p * l })
        .collect()
}

/// Normalizes `prior × likelihood` over `grid` into a density.
///
/// # Errors
///
/// - `DegenerateDistribution` if `Z` is zero, negative, NaN or infinite.
/// - Any quadrature error from [`integrate`].
pub fn normalize(
    grid: &Grid,
    prior: &[f64],
    likelihood: &[f64],
    orders: EndpointOrders,
) -> Result<NormalizedPosterior, ComputeError> {
    if prior.len() != likelihood.len() {
        return Err(ComputeError::InvalidGrid(format!(
            "prior has {} samples but likelihood has {}",
            prior.len(),
            likelihood.len()
        )));
    }

    let unnormalized = unnormalized_posterior(prior, likelihood);
    let evidence = integrate(grid, &unnormalized, orders)?;

    if !evidence.is_finite() || evidence <= 0.0 {
        #[cfg(feature = "tracing")]
        tracing::warn!(evidence, "normalization integral is degenerate");
        return Err(ComputeError::DegenerateDistribution(format!(
            "normalization integral Z = {} is not a positive finite number",
            evidence
        )));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(evidence, points = grid.len(), "posterior normalized");

    let posterior = unnormalized.iter().map(|&u| u / evidence).collect();
    Ok(NormalizedPosterior {
        posterior,
        evidence,
    })
}
