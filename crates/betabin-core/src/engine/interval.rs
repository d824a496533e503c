//! Exact credible-interval probabilities.
//!
//! Interval mass is taken from the analytic Beta CDF rather than summed over
//! the grid, so it carries no discretization error. The posterior uses the
//! conjugate update Beta(α + k, β + N − k).

use crate::engine::density::BetaParams;
use crate::engine::errors::ComputeError;

/// Bounds of a credible-interval request.
///
/// No ordering is enforced: `x1 > x2` is a valid "inverted" request for which
/// no probabilities are produced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalQuery {
    pub x1: f64,
    pub x2: f64,
}

impl IntervalQuery {
    pub fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    pub fn is_inverted(&self) -> bool {
        self.x1 > self.x2
    }

    /// Whether `p` lies in `[x1, x2]`. Always false for an inverted query.
    pub fn contains(&self, p: f64) -> bool {
        p >= self.x1 && p <= self.x2
    }
}

impl Default for IntervalQuery {
    fn default() -> Self {
        Self::new(0.2, 0.8)
    }
}

/// `P(x1 ≤ p ≤ x2)` under the prior and under the posterior.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalProbabilities {
    pub prior: f64,
    pub posterior: f64,
}

/// Computes prior and posterior interval probabilities.
///
/// Returns `Ok(None)` when the query is inverted.
pub fn interval_probabilities(
    query: IntervalQuery,
    prior: BetaParams,
    trials: u64,
    successes: u64,
) -> Result<Option<IntervalProbabilities>, ComputeError> {
    if query.is_inverted() {
        #[cfg(feature = "tracing")]
        tracing::debug!(x1 = query.x1, x2 = query.x2, "inverted interval, probabilities suppressed");
        return Ok(None);
    }

    let posterior = prior.observe_counts(successes, trials.saturating_sub(successes));
    Ok(Some(IntervalProbabilities {
        prior: prior.interval_mass(query.x1, query.x2)?,
        posterior: posterior.interval_mass(query.x1, query.x2)?,
    }))
}
