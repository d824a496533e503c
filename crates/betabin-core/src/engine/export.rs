//! Rendering of computation results for external consumers.
//!
//! Three forms are provided:
//! - JSON of a [`ComputeResponse`] (`serde` feature)
//! - CSV of the curves with the interval shading mask
//! - a plain-text [`Summary`] mirroring the titles of the three plotted panels

use std::fmt;

use crate::engine::compute::OutputBundle;
#[cfg(feature = "serde")]
use crate::engine::compute::ComputeResponse;
#[cfg(feature = "serde")]
use crate::engine::errors::ComputeError;

/// Header row of [`bundle_to_csv`].
pub const CSV_HEADER: &str = "p,prior,likelihood,posterior,in_interval";

/// Serializes a response to pretty JSON.
///
/// Non-finite boundary densities are written as `null`.
#[cfg(feature = "serde")]
pub fn response_to_json(response: &ComputeResponse) -> Result<String, ComputeError> {
    serde_json::to_string_pretty(response)
        .map_err(|e| ComputeError::Serialization(format!("failed to serialize response: {}", e)))
}

/// Parses a JSON request into raw inputs. Missing fields take defaults.
#[cfg(feature = "serde")]
pub fn request_from_json(json: &str) -> Result<crate::engine::params::RawInputs, ComputeError> {
    serde_json::from_str(json)
        .map_err(|e| ComputeError::Serialization(format!("failed to parse request: {}", e)))
}

/// One CSV row per grid point.
pub fn bundle_to_csv(bundle: &OutputBundle) -> String {
    let mut out = String::with_capacity(bundle.grid.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for (i, p) in bundle.grid.iter().enumerate() {
        out.push_str(&csv_row(bundle, i, p));
    }
    out
}

fn csv_row(bundle: &OutputBundle, i: usize, p: f64) -> String {
    format!(
        "{},{},{},{},{}\n",
        p,
        bundle.prior[i],
        bundle.likelihood[i],
        bundle.posterior[i],
        bundle.query.contains(p)
    )
}

/// Text description of a bundle: one line per plotted panel plus posterior
/// moments.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub prior_title: String,
    pub likelihood_title: String,
    pub posterior_title: String,
    pub posterior_mean: f64,
    pub posterior_std_dev: f64,
    pub posterior_mode: Option<f64>,
}

impl Summary {
    pub fn from_bundle(bundle: &OutputBundle) -> Self {
        let prior = bundle.params.prior();
        let band = format!("P({:.2} ≤ p ≤ {:.2})", bundle.query.x1, bundle.query.x2);
        let post = bundle.posterior_params;

        Self {
            prior_title: format!(
                "Prior Beta({}, {}) - {} = {}",
                prior.alpha,
                prior.beta,
                band,
                format_probability(bundle.prior_interval_probability())
            ),
            likelihood_title: format!(
                "Likelihood (Binomial) for k={}, N={}",
                bundle.params.successes(),
                bundle.params.trials()
            ),
            posterior_title: format!(
                "Posterior (Prior × Likelihood) - {} = {}",
                band,
                format_probability(bundle.posterior_interval_probability())
            ),
            posterior_mean: post.mean(),
            posterior_std_dev: post.std_dev(),
            posterior_mode: post.mode(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.prior_title)?;
        writeln!(f, "{}", self.likelihood_title)?;
        writeln!(f, "{}", self.posterior_title)?;
        write!(
            f,
            "Posterior mean = {:.4}, sd = {:.4}, mode = ",
            self.posterior_mean, self.posterior_std_dev
        )?;
        match self.posterior_mode {
            Some(mode) => write!(f, "{:.4}", mode),
            None => write!(f, "n/a"),
        }
    }
}

fn format_probability(p: Option<f64>) -> String {
    match p {
        Some(p) => format!("{:.2}", p),
        None => "n/a".to_string(),
    }
}
