//! Sample grid over the probability domain `[0, 1]`.
//!
//! Every density curve produced by the engine is aligned index-for-index with a
//! [`Grid`]. The grid is immutable once built.

use crate::engine::errors::ComputeError;

/// Default number of grid points.
///
/// Odd, so the composite Simpson rule sees an even number of sub-intervals.
pub const DEFAULT_GRID_POINTS: usize = 1001;

/// An ordered, evenly spaced sample of `[0, 1]` with both endpoints included.
///
/// Invariants: strictly increasing, `points[0] == 0.0`, `points[len - 1] == 1.0`,
/// constant spacing `1 / (len - 1)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Grid {
    points: Vec<f64>,
}

impl Grid {
    /// Builds `num_points` evenly spaced values from 0 to 1 inclusive.
    ///
    /// Each point is computed as `i / (M - 1)` rather than by accumulating the
    /// step, so the endpoints are exact and spacing error does not drift.
    ///
    /// # Errors
    ///
    /// `ComputeError::InvalidGrid` when `num_points < 2`.
    pub fn linspace(num_points: usize) -> Result<Self, ComputeError> {
        if num_points < 2 {
            return Err(ComputeError::InvalidGrid(format!(
                "grid needs at least 2 points, got {}",
                num_points
            )));
        }
        let last = (num_points - 1) as f64;
        let points = (0..num_points).map(|i| i as f64 / last).collect();
        Ok(Self { points })
    }

    /// The grid values in increasing order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a grid has at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Spacing between adjacent points.
    pub fn step(&self) -> f64 {
        1.0 / (self.points.len() - 1) as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

impl Default for Grid {
    fn default() -> Self {
        let last = (DEFAULT_GRID_POINTS - 1) as f64;
        Self {
            points: (0..DEFAULT_GRID_POINTS).map(|i| i as f64 / last).collect(),
        }
    }
}
