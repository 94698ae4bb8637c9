use crate::infra::{load_catalog, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use uni_readiness::assessment::assessment_router;
use uni_readiness::error::AppError;
use uni_readiness::AssessmentService;

pub(crate) fn with_service_routes(service: Arc<AssessmentService>) -> axum::Router {
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/catalog/reload",
            axum::routing::post(catalog_reload_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Re-reads the catalog files and swaps the snapshot; requests already running keep the
/// previous one.
pub(crate) async fn catalog_reload_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let catalog = load_catalog(&state.catalog_config)?;
    let countries = catalog.templates().len();
    let universities = catalog.universities().len();
    state.catalog.replace(catalog);

    info!(countries, universities, "catalog reloaded");

    Ok(Json(json!({
        "status": "reloaded",
        "countries": countries,
        "universities": universities,
        "reloaded_at": Utc::now().to_rfc3339(),
    })))
}
