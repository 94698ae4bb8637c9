use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::service::AssessmentService;
use super::AssessmentRequest;

/// Router exposing the country list and the assessment endpoint.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/countries", get(countries_handler))
        .route("/api/v1/assessments", post(assess_handler))
        .with_state(service)
}

pub(crate) async fn countries_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    let countries = service.countries();
    (StatusCode::OK, Json(json!({ "countries": countries }))).into_response()
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    match service.assess(&request) {
        Ok(assessment) => (StatusCode::OK, Json(assessment.summary())).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}
