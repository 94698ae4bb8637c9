use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use uni_readiness::catalog::CatalogError;
use uni_readiness::config::CatalogConfig;
use uni_readiness::{Catalog, CatalogLoader, CatalogStore};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<CatalogStore>,
    pub(crate) catalog_config: CatalogConfig,
}

pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    let catalog = CatalogLoader::from_paths(&config.profiles_path, &config.universities_path)?;
    info!(
        countries = catalog.templates().len(),
        universities = catalog.universities().len(),
        scorable = catalog.scorable_count(),
        "catalog loaded"
    );
    Ok(catalog)
}
