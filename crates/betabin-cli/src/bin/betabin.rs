//! Betabin CLI - Command-line host for the Beta-Binomial posterior engine
//!
//! Usage:
//!   betabin                                   # Default request (N=10, k=6, Beta(1,1), [0.2, 0.8])
//!   betabin -n 20 -k 3 --alpha 2 --beta 5     # Custom parameters
//!   betabin --input request.json -o json      # Read a JSON request, emit JSON
//!   betabin -n 10 -k 6 -o csv > curves.csv    # Curves for plotting

use std::process;

use betabin_core::engine::export::{bundle_to_csv, request_from_json, response_to_json, Summary};
use betabin_core::{compute, ComputeError, ComputeResponse, RawInputs, DEFAULT_GRID_POINTS};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "betabin")]
#[command(version)]
#[command(about = "Betabin - Bayesian inference for a binomial success probability")]
#[command(
    long_about = "Compute the Beta prior, binomial likelihood and normalized posterior over a grid, \
                  with exact credible-interval probabilities"
)]
struct Cli {
    /// Number of trials (N)
    #[arg(short = 'n', long, default_value_t = 10.0, allow_negative_numbers = true)]
    trials: f64,

    /// Number of successes (k)
    #[arg(short = 'k', long, default_value_t = 6.0, allow_negative_numbers = true)]
    successes: f64,

    /// Prior shape parameter α
    #[arg(short = 'a', long, default_value_t = 1.0, allow_negative_numbers = true)]
    alpha: f64,

    /// Prior shape parameter β
    #[arg(short = 'b', long, default_value_t = 1.0, allow_negative_numbers = true)]
    beta: f64,

    /// Lower credible-interval bound
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    x1: f64,

    /// Upper credible-interval bound
    #[arg(long, default_value_t = 0.8, allow_negative_numbers = true)]
    x2: f64,

    /// JSON request file; overrides the parameter flags
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Number of grid points (odd)
    #[arg(long, default_value_t = DEFAULT_GRID_POINTS, value_name = "M")]
    grid_points: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    output: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Summary,
    Json,
    Csv,
    Debug,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = match load_request(&cli) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = compute(&raw, cli.grid_points);
    if let Err(e) = &result {
        tracing::warn!(error = %e, "computation failed");
    }
    let failed = result.is_err();

    match cli.output {
        OutputFormat::Json => match response_to_json(&ComputeResponse::from(result)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing to JSON: {}", e);
                process::exit(1);
            }
        },
        OutputFormat::Csv => match result {
            Ok(bundle) => print!("{}", bundle_to_csv(&bundle)),
            Err(e) => report_and_exit(&e),
        },
        OutputFormat::Debug => match result {
            Ok(bundle) => println!("{:#?}", bundle),
            Err(e) => report_and_exit(&e),
        },
        OutputFormat::Summary => match result {
            Ok(bundle) => {
                println!("{}", Summary::from_bundle(&bundle));
                println!("Normalization constant Z = {:.6e}", bundle.evidence);
            }
            Err(e) => report_and_exit(&e),
        },
    }

    if failed {
        process::exit(1);
    }
}

fn load_request(cli: &Cli) -> Result<RawInputs, ComputeError> {
    match &cli.input {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .map_err(|e| ComputeError::Io(format!("reading '{}': {}", path, e)))?;
            request_from_json(&source)
        }
        None => Ok(RawInputs {
            trials: cli.trials,
            successes: cli.successes,
            alpha: cli.alpha,
            beta: cli.beta,
            x1: cli.x1,
            x2: cli.x2,
        }),
    }
}

fn report_and_exit(err: &ComputeError) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}
