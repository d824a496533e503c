//! Orchestration of one computation cycle.
//!
//! ```text
//! RawInputs ─▶ validate ─▶ grid ─▶ prior, likelihood ─▶ normalize ─▶ intervals ─▶ OutputBundle
//!                 │
//!                 └─▶ ComputeError (no curves)
//! ```
//!
//! A cycle is a pure function of its inputs: no state survives between calls,
//! so hosts may recompute on every input change and independent requests may
//! run in parallel ([`compute_batch`]).

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::engine::density::{evaluate_densities, BetaParams};
use crate::engine::errors::ComputeError;
use crate::engine::grid::{Grid, DEFAULT_GRID_POINTS};
use crate::engine::interval::{interval_probabilities, IntervalProbabilities, IntervalQuery};
use crate::engine::normalize::normalize;
use crate::engine::params::{ModelParameters, RawInputs};
use crate::engine::validate::{validate_grid_points, validate_inputs};

/// Curves and scalars produced by a successful cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutputBundle {
    pub params: ModelParameters,
    pub query: IntervalQuery,
    pub grid: Grid,
    pub prior: Vec<f64>,
    pub likelihood: Vec<f64>,
    pub posterior: Vec<f64>,
    /// Present only when `x1 ≤ x2`.
    pub intervals: Option<IntervalProbabilities>,
    /// Analytic conjugate posterior Beta(α + k, β + N − k).
    pub posterior_params: BetaParams,
    /// Normalization constant `Z` of `prior × likelihood`.
    pub evidence: f64,
}

impl OutputBundle {
    pub fn prior_interval_probability(&self) -> Option<f64> {
        self.intervals.map(|p| p.prior)
    }

    pub fn posterior_interval_probability(&self) -> Option<f64> {
        self.intervals.map(|p| p.posterior)
    }

    /// For each grid point, whether it falls in `[x1, x2]` (the shaded band of
    /// a plotted curve). All false for an inverted query.
    pub fn interval_mask(&self) -> Vec<bool> {
        self.grid.iter().map(|p| self.query.contains(p)).collect()
    }
}

/// Host-facing outcome of a cycle: curves, or an error message instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ComputeResponse {
    Bundle { bundle: Box<OutputBundle> },
    Error { error_message: String },
}

impl From<Result<OutputBundle, ComputeError>> for ComputeResponse {
    fn from(result: Result<OutputBundle, ComputeError>) -> Self {
        match result {
            Ok(bundle) => ComputeResponse::Bundle {
                bundle: Box::new(bundle),
            },
            Err(err) => ComputeResponse::Error {
                error_message: err.to_string(),
            },
        }
    }
}

/// Runs one computation cycle on a grid of `grid_points` points.
///
/// # Errors
///
/// - `InvalidParameter` / `InvalidGrid` before any numerical work.
/// - `DegenerateDistribution` if normalization fails.
pub fn compute(raw: &RawInputs, grid_points: usize) -> Result<OutputBundle, ComputeError> {
    let (params, query) = validate_inputs(raw)?;
    let grid_points = validate_grid_points(grid_points)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        trials = params.trials(),
        successes = params.successes(),
        alpha = params.prior().alpha,
        beta = params.prior().beta,
        grid_points,
        "computing posterior"
    );

    let grid = Grid::linspace(grid_points)?;
    let densities = evaluate_densities(&grid, params.prior(), params.trials(), params.successes())?;
    let normalized = normalize(&grid, &densities.prior, &densities.likelihood, densities.orders)?;
    let intervals =
        interval_probabilities(query, params.prior(), params.trials(), params.successes())?;

    Ok(OutputBundle {
        params,
        query,
        grid,
        prior: densities.prior,
        likelihood: densities.likelihood,
        posterior: normalized.posterior,
        intervals,
        posterior_params: params.posterior(),
        evidence: normalized.evidence,
    })
}

/// [`compute`] on the default grid of [`DEFAULT_GRID_POINTS`] points.
pub fn compute_with_defaults(raw: &RawInputs) -> Result<OutputBundle, ComputeError> {
    compute(raw, DEFAULT_GRID_POINTS)
}

/// [`compute`] folded into the host-facing response form.
pub fn compute_response(raw: &RawInputs, grid_points: usize) -> ComputeResponse {
    compute(raw, grid_points).into()
}

/// Computes independent requests, in parallel when the `rayon` feature is on.
///
/// Results are returned in request order; one failing request does not affect
/// the others.
pub fn compute_batch(
    requests: &[RawInputs],
    grid_points: usize,
) -> Vec<Result<OutputBundle, ComputeError>> {
    #[cfg(feature = "rayon")]
    let results = requests
        .par_iter()
        .map(|raw| compute(raw, grid_points))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let results = requests
        .iter()
        .map(|raw| compute(raw, grid_points))
        .collect();
    results
}
