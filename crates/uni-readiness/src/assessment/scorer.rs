use super::domain::{round_to_tenth, CountrySelection};
use super::profile::ProfileWeights;
use crate::catalog::{Catalog, CountryTemplate};
use serde::Serialize;

/// Weighted dot product of the student's standing and a country's emphasis, rescaled to a
/// percentage-like figure and rounded to one decimal.
pub fn score(template: &CountryTemplate, weights: &ProfileWeights) -> f64 {
    round_to_tenth(weights.vector().dot(&template.coefficients) * 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryScore {
    pub country: String,
    pub score: f64,
}

/// One score per selected country, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CountryScoreTable(Vec<CountryScore>);

impl CountryScoreTable {
    pub fn from_entries(entries: Vec<CountryScore>) -> Self {
        Self(entries)
    }

    pub fn get(&self, country: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.country == country)
            .map(|entry| entry.score)
    }

    pub fn entries(&self) -> &[CountryScore] {
        &self.0
    }

    /// Highest score first; equal scores keep catalog order.
    pub fn ranked(&self) -> Vec<CountryScore> {
        let mut ranked = self.0.clone();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn score_countries(
    catalog: &Catalog,
    selection: &CountrySelection,
    weights: &ProfileWeights,
) -> CountryScoreTable {
    CountryScoreTable(
        catalog
            .templates_for(selection)
            .map(|template| CountryScore {
                country: template.country.clone(),
                score: score(template, weights),
            })
            .collect(),
    )
}
