//! Read-only university catalog: per-country dimension templates plus the university
//! records that reference them.

mod mapping;
mod normalizer;
mod parser;
mod store;

pub use parser::CatalogLoader;
pub use store::CatalogStore;

use crate::assessment::domain::{CountrySelection, DimensionVector};
use serde::Serialize;
use std::collections::HashMap;

/// How one country's institutions weigh each profile dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryTemplate {
    pub country: String,
    pub coefficients: DimensionVector,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversityRecord {
    pub name: String,
    pub country: String,
    /// `None` when the source cell was missing or unparseable; such rows are never scored.
    pub required_score: Option<f64>,
    /// Display only.
    pub ranking: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("{table} table is missing the '{column}' column")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    #[error("country '{0}' has more than one profile template")]
    DuplicateCountry(String),
    #[error("university '{university}' references country '{country}' which has no profile template")]
    UnknownCountry { university: String, country: String },
    #[error("profile template for '{country}' has a non-finite {dimension} coefficient")]
    InvalidCoefficient {
        country: String,
        dimension: &'static str,
    },
}

/// Validated, immutable catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<CountryTemplate>,
    universities: Vec<UniversityRecord>,
    template_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(
        templates: Vec<CountryTemplate>,
        universities: Vec<UniversityRecord>,
    ) -> Result<Self, CatalogError> {
        let mut template_index = HashMap::with_capacity(templates.len());

        for (position, template) in templates.iter().enumerate() {
            if let Some((dimension, _)) = template
                .coefficients
                .iter()
                .find(|(_, value)| !value.is_finite())
            {
                return Err(CatalogError::InvalidCoefficient {
                    country: template.country.clone(),
                    dimension: dimension.label(),
                });
            }
            if template_index
                .insert(template.country.clone(), position)
                .is_some()
            {
                return Err(CatalogError::DuplicateCountry(template.country.clone()));
            }
        }

        if let Some(orphan) = universities
            .iter()
            .find(|university| !template_index.contains_key(&university.country))
        {
            return Err(CatalogError::UnknownCountry {
                university: orphan.name.clone(),
                country: orphan.country.clone(),
            });
        }

        Ok(Self {
            templates,
            universities,
            template_index,
        })
    }

    pub fn template(&self, country: &str) -> Option<&CountryTemplate> {
        self.template_index
            .get(country)
            .map(|position| &self.templates[*position])
    }

    pub fn templates(&self) -> &[CountryTemplate] {
        &self.templates
    }

    /// Templates in catalog order, restricted to the selection.
    pub fn templates_for<'a>(
        &'a self,
        selection: &'a CountrySelection,
    ) -> impl Iterator<Item = &'a CountryTemplate> + 'a {
        self.templates
            .iter()
            .filter(move |template| selection.includes(&template.country))
    }

    pub fn universities(&self) -> &[UniversityRecord] {
        &self.universities
    }

    /// Sorted country names, as offered to the student for selection.
    pub fn country_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .templates
            .iter()
            .map(|template| template.country.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn scorable_count(&self) -> usize {
        self.universities
            .iter()
            .filter(|university| university.required_score.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }
}
