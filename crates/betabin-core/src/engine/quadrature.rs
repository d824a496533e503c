//! Numeric quadrature over a [`Grid`].
//!
//! The workhorse is the composite Simpson rule, which needs an odd number of
//! samples. Simpson assumes a smooth integrand, which fails at an endpoint
//! where the integrand behaves like `x^s` with non-integral `s`: infinite for
//! `s < 0`, a steep cusp for small positive `s`. At such endpoints the first
//! (or last) two sub-intervals are integrated by product integration instead:
//!
//! ```text
//! f(x) = x^s · g(x),   t = x / h
//! g     ≈ cubic through the samples at t = 1, 2, 3, 4 (Newton form)
//! ∫₀^{2h} f = h^{s+1} · Σ_j c_j · ∫₀² t^{s+j} dt,   ∫₀² t^{s+j} dt = 2^{s+j+1} / (s+j+1)
//! ```
//!
//! where `s > -1` is the known leading exponent. Dropping two sub-intervals
//! keeps the Simpson part at an even number of sub-intervals.

use crate::engine::errors::ComputeError;
use crate::engine::grid::Grid;

/// Smallest grid that supports endpoint corrections: each corrected endpoint
/// needs four interior samples for its fit and Simpson needs one panel.
pub const MIN_QUADRATURE_POINTS: usize = 7;

/// Orders at or above this are smooth enough for plain Simpson.
const SMOOTH_ORDER: f64 = 4.0;

/// Leading power-law exponents of an integrand at `p = 0` and `p = 1`.
///
/// Near `p = 0` the integrand behaves like `p^lower`, near `p = 1` like
/// `(1 - p)^upper`. Integral orders need no correction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndpointOrders {
    pub lower: f64,
    pub upper: f64,
}

impl EndpointOrders {
    /// Orders for an integrand that is finite at both endpoints.
    pub const REGULAR: EndpointOrders = EndpointOrders {
        lower: 0.0,
        upper: 0.0,
    };
}

impl Default for EndpointOrders {
    fn default() -> Self {
        Self::REGULAR
    }
}

/// Integrates `values` sampled on `grid` over `[0, 1]`.
///
/// # Errors
///
/// - `InvalidGrid` if the sample count differs from the grid, is even, or is
///   too small for a required endpoint correction (see [`MIN_QUADRATURE_POINTS`]).
/// - `DegenerateDistribution` if an interior sample is non-finite, a sample is
///   NaN or `-inf`, or a singular endpoint has order `≤ -1`.
pub fn integrate(grid: &Grid, values: &[f64], orders: EndpointOrders) -> Result<f64, ComputeError> {
    let n = values.len();
    if n != grid.len() {
        return Err(ComputeError::InvalidGrid(format!(
            "curve has {} samples but grid has {} points",
            n,
            grid.len()
        )));
    }
    if n < 3 || n % 2 == 0 {
        return Err(ComputeError::InvalidGrid(format!(
            "Simpson quadrature needs an odd number of points (at least 3), got {}",
            n
        )));
    }

    let lower_singular = needs_correction(values[0], orders.lower);
    let upper_singular = needs_correction(values[n - 1], orders.upper);
    if (lower_singular || upper_singular) && n < MIN_QUADRATURE_POINTS {
        return Err(ComputeError::InvalidGrid(format!(
            "singular endpoint correction needs at least {} points, got {}",
            MIN_QUADRATURE_POINTS, n
        )));
    }

    let start = if lower_singular { 2 } else { 0 };
    let end = if upper_singular { n - 3 } else { n - 1 };
    if let Some((i, v)) = values[start..=end]
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
    {
        return Err(ComputeError::DegenerateDistribution(format!(
            "non-finite sample {} at p = {}",
            v,
            grid.points()[start + i]
        )));
    }

    let h = grid.step();
    let mut total = simpson(&values[start..=end], h);

    if lower_singular {
        let edge = singular_edge([values[1], values[2], values[3], values[4]], h, orders.lower)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(order = orders.lower, mass = edge, "lower endpoint correction");
        total += edge;
    }
    if upper_singular {
        let samples = [values[n - 2], values[n - 3], values[n - 4], values[n - 5]];
        let edge = singular_edge(samples, h, orders.upper)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(order = orders.upper, mass = edge, "upper endpoint correction");
        total += edge;
    }

    Ok(total)
}

fn needs_correction(sample: f64, order: f64) -> bool {
    sample == f64::INFINITY || (order < SMOOTH_ORDER && order.fract() != 0.0)
}

/// Composite Simpson rule for equally spaced samples.
///
/// `values.len()` must be odd and at least 3; the caller guarantees this.
pub fn simpson(values: &[f64], step: f64) -> f64 {
    debug_assert!(values.len() >= 3 && values.len() % 2 == 1);
    let last = values.len() - 1;
    let mut odd = 0.0;
    let mut even = 0.0;
    for (i, v) in values.iter().enumerate().take(last).skip(1) {
        if i % 2 == 1 {
            odd += v;
        } else {
            even += v;
        }
    }
    step / 3.0 * (values[0] + 4.0 * odd + 2.0 * even + values[last])
}

/// Product integration of `x^s · g(x)` over the two sub-intervals next to a
/// singular endpoint. `samples` are taken at distance `h, 2h, 3h, 4h`.
fn singular_edge(samples: [f64; 4], h: f64, s: f64) -> Result<f64, ComputeError> {
    if s.is_nan() || s <= -1.0 {
        return Err(ComputeError::DegenerateDistribution(format!(
            "endpoint singularity of order {} is not integrable",
            s
        )));
    }

    // g(t·h) scaled by h^s, so no power of h is formed until the end.
    let mut g = [0.0; 4];
    for (i, (&f, slot)) in samples.iter().zip(g.iter_mut()).enumerate() {
        *slot = f / ((i + 1) as f64).powf(s);
    }

    // Newton divided differences on nodes t = 1, 2, 3, 4.
    let d1 = g[1] - g[0];
    let dd1 = (g[2] - 2.0 * g[1] + g[0]) / 2.0;
    let ddd = (g[3] - 3.0 * g[2] + 3.0 * g[1] - g[0]) / 6.0;

    let m = |j: f64| 2.0_f64.powf(s + j + 1.0) / (s + j + 1.0);
    let (m0, m1, m2, m3) = (m(0.0), m(1.0), m(2.0), m(3.0));

    let integral = g[0] * m0
        + d1 * (m1 - m0)
        + dd1 * (m2 - 3.0 * m1 + 2.0 * m0)
        + ddd * (m3 - 6.0 * m2 + 11.0 * m1 - 6.0 * m0);
    Ok(h * integral)
}
