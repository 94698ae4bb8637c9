use super::Catalog;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Holds the current catalog snapshot. Readers clone the `Arc` and keep a consistent view
/// while a reload swaps in a new one.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Installs a new catalog and returns the one it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        info!(
            countries = next.templates().len(),
            universities = next.universities().len(),
            "catalog snapshot replaced"
        );
        std::mem::replace(&mut *guard, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{Dimension, DimensionVector};
    use crate::catalog::{CountryTemplate, UniversityRecord};

    fn catalog_with(country: &str) -> Catalog {
        Catalog::new(
            vec![CountryTemplate {
                country: country.to_string(),
                coefficients: DimensionVector::new([0.1; Dimension::COUNT]),
            }],
            vec![UniversityRecord {
                name: format!("{country} State University"),
                country: country.to_string(),
                required_score: Some(60.0),
                ranking: Some(250),
            }],
        )
        .expect("valid catalog")
    }

    #[test]
    fn snapshots_survive_replacement() {
        let store = CatalogStore::new(catalog_with("UK"));
        let in_flight = store.snapshot();

        let previous = store.replace(catalog_with("Canada"));

        assert!(in_flight.template("UK").is_some());
        assert!(previous.template("UK").is_some());
        assert!(store.snapshot().template("Canada").is_some());
        assert!(store.snapshot().template("UK").is_none());
    }
}
