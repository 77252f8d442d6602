use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::entitlements::domain::{DeclaredExpenses, InputProfile, UnitType};
use crate::entitlements::evaluation::{BenefitSchedule, EntitlementEngine, EvaluationResult};

pub(super) fn schedule() -> BenefitSchedule {
    BenefitSchedule::default()
}

pub(super) fn engine() -> EntitlementEngine {
    EntitlementEngine::new(schedule())
}

/// A profile with every optional flag off and no declared expenses.
pub(super) fn base_profile(salary: f64, days: u32, unit: UnitType) -> InputProfile {
    InputProfile {
        monthly_salary: salary,
        reserve_days: days,
        unit_type: unit,
        num_children: 0,
        is_married: false,
        has_non_working_spouse: false,
        is_student: false,
        is_self_employed: false,
        emergency_call_up: false,
        served_during_holidays: false,
        needs_medical_assistance: false,
        needs_preferred_loans: false,
        expenses: DeclaredExpenses::default(),
    }
}

pub(super) fn record_amount(result: &EvaluationResult, rule: &str) -> Option<f64> {
    result
        .records
        .iter()
        .find(|record| record.rule == rule)
        .and_then(|record| record.value.monetary())
}

pub(super) fn has_record(result: &EvaluationResult, rule: &str) -> bool {
    result.records.iter().any(|record| record.rule == rule)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_unprocessable(response: &Response) {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
