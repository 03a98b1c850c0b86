use super::*;

fn attempt(exit_code: i32) -> MigrationAttempt {
    MigrationAttempt {
        exit_code,
        duration: Duration::from_millis(1500),
        stderr_tail: String::new(),
    }
}

fn report(first: i32, second: Option<i32>, corrected: bool) -> RepairReport {
    RepairReport {
        started_at: Utc::now(),
        readiness: Some(Readiness {
            ready: true,
            attempts: 1,
        }),
        first_attempt: attempt(first),
        precondition_met: second.map(|_| corrected),
        correction: corrected.then(|| CorrectionReport {
            drop_view: BestEffort::Done { value: () },
            create_view: BestEffort::Done { value: () },
        }),
        second_attempt: second.map(attempt),
    }
}

#[test]
fn test_first_attempt_is_final_when_no_retry() {
    let r = report(0, None, false);
    assert_eq!(r.exit_code(), 0);
    assert!(r.succeeded());
    assert!(!r.correction_attempted());
    assert_eq!(r.summary(), "migrations succeeded (first attempt)");
}

#[test]
fn test_second_attempt_is_final() {
    let r = report(1, Some(0), true);
    assert_eq!(r.exit_code(), 0);
    assert!(r.succeeded());
    assert_eq!(r.summary(), "migrations succeeded (retry after correction)");

    let r = report(0, Some(3), false);
    assert_eq!(r.exit_code(), 3);
    assert!(!r.succeeded());
    assert_eq!(
        r.summary(),
        "migrations failed with exit code 3 (retry without correction)"
    );
}

#[test]
fn test_correction_fully_applied() {
    let mut correction = CorrectionReport {
        drop_view: BestEffort::Done { value: () },
        create_view: BestEffort::Done { value: () },
    };
    assert!(correction.fully_applied());

    correction.create_view = BestEffort::Failed {
        step: "create_view".to_string(),
        error: "boom".to_string(),
    };
    assert!(!correction.fully_applied());
}

#[test]
fn test_json_shape() {
    let r = report(2, Some(0), true);
    let value = serde_json::to_value(&r).unwrap();
    assert_eq!(value["first_attempt"]["exit_code"], 2);
    assert_eq!(value["first_attempt"]["duration_ms"], 1500);
    assert!(value["first_attempt"].get("stderr_tail").is_none());
    assert_eq!(value["second_attempt"]["exit_code"], 0);
    assert_eq!(value["precondition_met"], true);
    assert_eq!(value["correction"]["drop_view"]["status"], "done");
    assert_eq!(value["readiness"]["attempts"], 1);
}
