//! Model inputs: raw host-supplied values and their validated form.

use crate::engine::density::BetaParams;
use crate::engine::interval::IntervalQuery;

/// Unvalidated inputs as a host collects them.
///
/// Counts are carried as `f64` so that non-integral or negative values coming
/// from numeric widgets or request files can be detected and rejected by
/// [`crate::engine::validate::validate_inputs`]. Missing fields take the
/// defaults of [`RawInputs::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawInputs {
    /// Number of trials (N)
    pub trials: f64,
    /// Number of successes (k)
    pub successes: f64,
    /// Prior shape α
    pub alpha: f64,
    /// Prior shape β
    pub beta: f64,
    /// Lower credible-interval bound
    pub x1: f64,
    /// Upper credible-interval bound
    pub x2: f64,
}

impl Default for RawInputs {
    /// N = 10, k = 6, uniform Beta(1, 1) prior, interval `[0.2, 0.8]`.
    fn default() -> Self {
        Self {
            trials: 10.0,
            successes: 6.0,
            alpha: 1.0,
            beta: 1.0,
            x1: 0.2,
            x2: 0.8,
        }
    }
}

impl RawInputs {
    pub fn new(trials: u64, successes: u64, alpha: f64, beta: f64, x1: f64, x2: f64) -> Self {
        Self {
            trials: trials as f64,
            successes: successes as f64,
            alpha,
            beta,
            x1,
            x2,
        }
    }
}

/// Validated model parameters.
///
/// Only produced by validation, so `successes ≤ trials`, and both shapes are
/// finite and strictly positive, for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelParameters {
    trials: u64,
    successes: u64,
    prior: BetaParams,
}

impl ModelParameters {
    pub(crate) fn new_unchecked(trials: u64, successes: u64, prior: BetaParams) -> Self {
        Self {
            trials,
            successes,
            prior,
        }
    }

    /// N
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// k
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// N − k
    pub fn failures(&self) -> u64 {
        self.trials - self.successes
    }

    pub fn prior(&self) -> BetaParams {
        self.prior
    }

    /// Conjugate posterior Beta(α + k, β + N − k).
    pub fn posterior(&self) -> BetaParams {
        self.prior.observe_counts(self.successes, self.failures())
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self::new_unchecked(10, 6, BetaParams::uniform())
    }
}

/// A validated request: parameters plus interval bounds.
pub type ValidatedInputs = (ModelParameters, IntervalQuery);
