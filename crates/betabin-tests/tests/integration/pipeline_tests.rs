//! End-to-end computation cycles against closed-form results.

use betabin_core::engine::grid::Grid;
use betabin_core::engine::quadrature::{integrate, EndpointOrders};
use betabin_core::{
    compute, compute_batch, compute_with_defaults, BetaParams, RawInputs, DEFAULT_GRID_POINTS,
};

fn assert_close(actual: f64, expected: f64, tol: f64, label: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{} mismatch: expected {:.12}, got {:.12}, diff={:.3e}",
        label,
        expected,
        actual,
        (actual - expected).abs()
    );
}

#[test]
fn six_of_ten_under_uniform_prior() {
    // N=10, k=6, Beta(1,1), interval [0.2, 0.8]
    // prior is flat, posterior is Beta(7,5)
    let bundle = compute_with_defaults(&RawInputs::new(10, 6, 1.0, 1.0, 0.2, 0.8)).unwrap();

    for (i, v) in bundle.prior.iter().enumerate() {
        assert_close(*v, 1.0, 1e-12, &format!("prior[{}]", i));
    }
    assert_close(bundle.prior_interval_probability().unwrap(), 0.6, 1e-9, "prior mass");
    // I_0.8(7,5) - I_0.2(7,5)
    assert_close(
        bundle.posterior_interval_probability().unwrap(),
        0.947625,
        1e-5,
        "posterior mass",
    );

    assert_eq!(bundle.posterior_params, BetaParams::new(7.0, 5.0));
    let analytic = BetaParams::new(7.0, 5.0);
    for (p, v) in bundle.grid.iter().zip(&bundle.posterior) {
        assert_close(*v, analytic.density(p).unwrap(), 1e-6, &format!("posterior({})", p));
    }
}

#[test]
fn evidence_equals_beta_function_ratio() {
    // Z = C(N,k) B(α+k, β+N-k) / B(α,β); for Beta(1,1), N=10, k=6 this is 1/11
    let bundle = compute_with_defaults(&RawInputs::default()).unwrap();
    assert_close(bundle.evidence, 1.0 / 11.0, 1e-9, "evidence");
}

#[test]
fn zero_trials_leaves_prior_unchanged() {
    let bundle = compute_with_defaults(&RawInputs::new(0, 0, 2.5, 4.0, 0.1, 0.6)).unwrap();
    assert!(bundle.likelihood.iter().all(|&l| l == 1.0));
    assert_eq!(bundle.posterior_params, BetaParams::new(2.5, 4.0));
    for (i, (post, prior)) in bundle.posterior.iter().zip(&bundle.prior).enumerate() {
        assert_close(*post, prior / bundle.evidence, 1e-12, &format!("posterior[{}]", i));
        assert_close(*post, *prior, 1e-3, &format!("posterior vs prior [{}]", i));
    }
    let probs = bundle.intervals.unwrap();
    assert_close(probs.prior, probs.posterior, 1e-12, "unchanged interval mass");
}

#[test]
fn divergent_prior_is_tolerated_and_normalized() {
    // Jeffreys prior Beta(0.5, 0.5) with no successes: posterior Beta(0.5, 8.5)
    let bundle = compute_with_defaults(&RawInputs::new(8, 0, 0.5, 0.5, 0.0, 0.1)).unwrap();
    assert_eq!(bundle.prior[0], f64::INFINITY);
    assert_eq!(bundle.prior[DEFAULT_GRID_POINTS - 1], f64::INFINITY);
    assert_eq!(bundle.posterior[0], f64::INFINITY);
    // likelihood vanishes at p = 1, taming the prior's divergence there
    assert_eq!(bundle.posterior[DEFAULT_GRID_POINTS - 1], 0.0);

    let orders = EndpointOrders {
        lower: -0.5,
        upper: 7.5,
    };
    let total = integrate(&bundle.grid, &bundle.posterior, orders).unwrap();
    assert_close(total, 1.0, 1e-9, "posterior mass");

    let analytic = BetaParams::new(0.5, 8.5);
    let mid = DEFAULT_GRID_POINTS / 10;
    let p = bundle.grid.points()[mid];
    assert_close(bundle.posterior[mid], analytic.density(p).unwrap(), 1e-3, "posterior(0.1)");
}

#[test]
fn all_successes_concentrates_mass_near_one() {
    let bundle = compute_with_defaults(&RawInputs::new(30, 30, 1.0, 1.0, 0.9, 1.0)).unwrap();
    // Beta(31, 1): P(p ≥ 0.9) = 1 - 0.9^31
    assert_close(
        bundle.posterior_interval_probability().unwrap(),
        1.0 - 0.9_f64.powi(31),
        1e-9,
        "tail mass",
    );
    let last = bundle.posterior.len() - 1;
    assert_close(bundle.posterior[last], 31.0, 1e-3, "posterior(1)");
}

#[test]
fn inverted_interval_still_yields_curves() {
    let bundle = compute_with_defaults(&RawInputs::new(10, 6, 1.0, 1.0, 0.8, 0.2)).unwrap();
    assert!(bundle.intervals.is_none());
    assert_eq!(bundle.prior.len(), DEFAULT_GRID_POINTS);
    assert_eq!(bundle.likelihood.len(), DEFAULT_GRID_POINTS);
    assert_eq!(bundle.posterior.len(), DEFAULT_GRID_POINTS);
}

#[test]
fn recomputation_is_deterministic() {
    let raw = RawInputs::new(17, 5, 2.3, 7.1, 0.05, 0.4);
    let first = compute(&raw, 2001).unwrap();
    for _ in 0..5 {
        assert_eq!(compute(&raw, 2001).unwrap(), first);
    }
}

#[test]
fn batch_matches_sequential_computation() {
    let requests: Vec<RawInputs> = (0..16u64)
        .map(|n| RawInputs::new(n, n / 3, 1.0 + n as f64 * 0.25, 2.0, 0.1, 0.9))
        .collect();
    let batch = compute_batch(&requests, 501);
    for (raw, result) in requests.iter().zip(batch) {
        assert_eq!(result.unwrap(), compute(raw, 501).unwrap());
    }
}

#[test]
fn finer_grid_changes_resolution_not_answer() {
    let coarse = compute(&RawInputs::default(), 101).unwrap();
    let fine = compute(&RawInputs::default(), 10001).unwrap();
    assert_eq!(coarse.intervals, fine.intervals);
    assert_close(coarse.evidence, fine.evidence, 1e-9, "evidence");
    assert_eq!(fine.grid, Grid::linspace(10001).unwrap());
}
