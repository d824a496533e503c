//! JSON and CSV renderings consumed by external plotting hosts.

use betabin_core::engine::export::{bundle_to_csv, request_from_json, response_to_json, CSV_HEADER};
use betabin_core::{compute, compute_response, RawInputs};
use serde_json::Value;

#[test]
fn json_bundle_exposes_curves_and_scalars() {
    let response = compute_response(&RawInputs::default(), 101);
    let value: Value = serde_json::from_str(&response_to_json(&response).unwrap()).unwrap();
    let bundle = &value["bundle"];

    assert_eq!(bundle["grid"].as_array().unwrap().len(), 101);
    assert_eq!(bundle["prior"].as_array().unwrap().len(), 101);
    assert_eq!(bundle["likelihood"].as_array().unwrap().len(), 101);
    assert_eq!(bundle["posterior"].as_array().unwrap().len(), 101);
    assert_eq!(bundle["params"]["trials"], 10);
    assert_eq!(bundle["params"]["successes"], 6);
    assert_eq!(bundle["posterior_params"]["alpha"], 7.0);

    let prior_mass = bundle["intervals"]["prior"].as_f64().unwrap();
    assert!((prior_mass - 0.6).abs() < 1e-9);
}

#[test]
fn json_inverted_interval_is_null() {
    let response = compute_response(&RawInputs::new(10, 6, 1.0, 1.0, 0.9, 0.1), 101);
    let value: Value = serde_json::from_str(&response_to_json(&response).unwrap()).unwrap();
    assert!(value["bundle"]["intervals"].is_null());
}

#[test]
fn request_file_round_trips_into_a_computation() {
    let raw = request_from_json(
        r#"{ "trials": 12, "successes": 9, "alpha": 2.0, "beta": 2.0, "x1": 0.5, "x2": 1.0 }"#,
    )
    .unwrap();
    let bundle = compute(&raw, 1001).unwrap();
    assert_eq!(bundle.params.trials(), 12);
    assert_eq!(bundle.params.successes(), 9);
    assert!(bundle.posterior_interval_probability().unwrap() > 0.9);
}

#[test]
fn malformed_request_is_a_serialization_error() {
    let err = request_from_json("{ trials: 12 }").unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"), "{}", err);
}

#[test]
fn csv_mask_matches_bundle_mask() {
    let bundle = compute(&RawInputs::default(), 21).unwrap();
    let csv = bundle_to_csv(&bundle);
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    let flags: Vec<bool> = lines
        .map(|line| line.rsplit(',').next().unwrap() == "true")
        .collect();
    assert_eq!(flags, bundle.interval_mask());
    assert_eq!(flags.iter().filter(|&&f| f).count(), 13);
}
