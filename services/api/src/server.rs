use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use uni_readiness::config::AppConfig;
use uni_readiness::error::AppError;
use uni_readiness::telemetry;
use uni_readiness::{AssessmentService, CatalogStore};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(&config.catalog)?;
    let store = Arc::new(CatalogStore::new(catalog));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: Arc::clone(&store),
        catalog_config: config.catalog.clone(),
    };

    let assessment_service = Arc::new(AssessmentService::new(store, config.tiers));

    let app = with_service_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, ?config.tiers, "readiness assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
