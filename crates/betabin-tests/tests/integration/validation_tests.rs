//! Requests rejected before any numerical work.

use betabin_core::{compute, compute_response, ComputeError, ComputeResponse, RawInputs};

fn rejected(raw: RawInputs) -> String {
    match compute(&raw, 1001) {
        Err(ComputeError::InvalidParameter(msg)) => msg,
        other => panic!("expected InvalidParameter, got {:?}", other),
    }
}

#[test]
fn successes_above_trials() {
    let msg = rejected(RawInputs::new(3, 4, 1.0, 1.0, 0.2, 0.8));
    assert!(msg.contains("cannot exceed"), "{}", msg);
}

#[test]
fn non_integer_and_negative_counts() {
    rejected(RawInputs {
        trials: 10.5,
        ..RawInputs::default()
    });
    rejected(RawInputs {
        trials: -1.0,
        successes: 0.0,
        ..RawInputs::default()
    });
    rejected(RawInputs {
        successes: -2.0,
        ..RawInputs::default()
    });
    rejected(RawInputs {
        successes: 2.5,
        ..RawInputs::default()
    });
}

#[test]
fn shape_and_bound_domains() {
    rejected(RawInputs {
        alpha: 0.0,
        ..RawInputs::default()
    });
    rejected(RawInputs {
        beta: f64::NAN,
        ..RawInputs::default()
    });
    rejected(RawInputs {
        x1: -0.1,
        ..RawInputs::default()
    });
    rejected(RawInputs {
        x2: 1.5,
        ..RawInputs::default()
    });
}

#[test]
fn unusable_grid_sizes() {
    for m in [0, 1, 2, 5, 1000] {
        assert!(
            matches!(compute(&RawInputs::default(), m), Err(ComputeError::InvalidGrid(_))),
            "grid size {} should be rejected",
            m
        );
    }
}

#[test]
fn error_response_carries_message_only() {
    match compute_response(&RawInputs::new(1, 5, 1.0, 1.0, 0.2, 0.8), 1001) {
        ComputeResponse::Error { error_message } => {
            assert!(error_message.starts_with("invalid parameter:"), "{}", error_message)
        }
        ComputeResponse::Bundle { .. } => panic!("k > N must not produce curves"),
    }
}
