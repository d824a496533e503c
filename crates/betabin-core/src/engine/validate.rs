//! # Input Validation
//!
//! Checks parameter domains before any numerical work runs. Inputs may arrive
//! unconstrained (no widget bounds are assumed), so every rule is enforced
//! here:
//!
//! - `N` is a finite, non-negative integer
//! - `k` is a finite integer with `0 ≤ k ≤ N`
//! - `α`, `β` are finite and strictly positive
//! - `x1`, `x2` are finite and within `[0, 1]` (their order is not checked)
//! - the grid size is odd and large enough for the quadrature
//!
//! Counts are checked first so that the `k > N` message wins over other
//! problems in the same request.

use crate::engine::density::BetaParams;
use crate::engine::errors::ComputeError;
use crate::engine::interval::IntervalQuery;
use crate::engine::params::{ModelParameters, RawInputs, ValidatedInputs};
use crate::engine::quadrature::MIN_QUADRATURE_POINTS;

/// Largest count representable exactly in an `f64` (2^53).
const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

/// Validates every field of a request.
///
/// # Errors
///
/// `ComputeError::InvalidParameter` naming the first offending field.
pub fn validate_inputs(raw: &RawInputs) -> Result<ValidatedInputs, ComputeError> {
    let result = validate_inputs_inner(raw);

    #[cfg(feature = "tracing")]
    {
        if let Err(err) = &result {
            tracing::debug!(error = %err, "request rejected");
        }
    }

    result
}

fn validate_inputs_inner(raw: &RawInputs) -> Result<ValidatedInputs, ComputeError> {
    let (trials, successes) = validate_counts(raw.trials, raw.successes)?;
    let alpha = validate_shape("alpha", raw.alpha)?;
    let beta = validate_shape("beta", raw.beta)?;
    let x1 = validate_bound("x1", raw.x1)?;
    let x2 = validate_bound("x2", raw.x2)?;

    Ok((
        ModelParameters::new_unchecked(trials, successes, BetaParams::new(alpha, beta)),
        IntervalQuery::new(x1, x2),
    ))
}

/// Validates `N` and `k`, returning them as integers.
pub fn validate_counts(trials: f64, successes: f64) -> Result<(u64, u64), ComputeError> {
    if !is_count(trials) {
        return Err(ComputeError::InvalidParameter(format!(
            "number of trials N must be a non-negative integer, got {}",
            trials
        )));
    }
    if !successes.is_finite() || successes.fract() != 0.0 {
        return Err(ComputeError::InvalidParameter(format!(
            "number of successes k must be an integer, got {}",
            successes
        )));
    }
    if successes < 0.0 {
        return Err(ComputeError::InvalidParameter(format!(
            "number of successes k cannot be negative, got {}",
            successes
        )));
    }
    if successes > trials {
        return Err(ComputeError::InvalidParameter(format!(
            "number of successes k ({}) cannot exceed number of trials N ({})",
            successes, trials
        )));
    }
    Ok((trials as u64, successes as u64))
}

/// Validates a Beta shape parameter.
pub fn validate_shape(name: &str, value: f64) -> Result<f64, ComputeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ComputeError::InvalidParameter(format!(
            "prior shape {} must be a finite number greater than 0, got {}",
            name, value
        )))
    }
}

/// Validates a credible-interval bound.
pub fn validate_bound(name: &str, value: f64) -> Result<f64, ComputeError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ComputeError::InvalidParameter(format!(
            "interval bound {} must lie in [0, 1], got {}",
            name, value
        )))
    }
}

/// Validates the grid size for the full pipeline.
pub fn validate_grid_points(points: usize) -> Result<usize, ComputeError> {
    if points < MIN_QUADRATURE_POINTS {
        return Err(ComputeError::InvalidGrid(format!(
            "grid needs at least {} points, got {}",
            MIN_QUADRATURE_POINTS, points
        )));
    }
    if points % 2 == 0 {
        return Err(ComputeError::InvalidGrid(format!(
            "grid size must be odd for Simpson quadrature, got {}",
            points
        )));
    }
    Ok(points)
}

fn is_count(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_EXACT_COUNT
}
