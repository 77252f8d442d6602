use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::InputProfile;
use super::evaluation::{BenefitSchedule, EntitlementEngine};

/// Router builder exposing the evaluation endpoints.
pub fn entitlement_router(engine: Arc<EntitlementEngine>) -> Router {
    Router::new()
        .route("/api/v1/entitlements/evaluate", post(evaluate_handler))
        .route("/api/v1/entitlements/schedule", get(schedule_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<EntitlementEngine>>,
    Json(profile): Json<InputProfile>,
) -> Response {
    if let Err(error) = profile.validate() {
        let payload = json!({
            "error": error.to_string(),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let result = engine.evaluate(&profile);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn schedule_handler(
    State(engine): State<Arc<EntitlementEngine>>,
) -> Json<BenefitSchedule> {
    Json(engine.schedule().clone())
}
