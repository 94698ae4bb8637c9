//! Assessment pipeline: raw profile → normalized weights → per-country scores → gap view →
//! Ambitious/Target/Safe windows.

pub mod domain;
pub mod gap;
pub mod profile;
pub mod router;
pub mod scorer;
pub mod service;
pub mod tiers;
pub mod views;

pub use domain::{CountrySelection, Dimension, DimensionVector};
pub use gap::{GapRecord, GapView};
pub use profile::{ProfileError, ProfileWeights, RawProfile};
pub use router::assessment_router;
pub use scorer::{CountryScore, CountryScoreTable};
pub use service::AssessmentService;
pub use tiers::{Anchor, AnchorKind, Tier, TierPolicy, TierWindows};
pub use views::{AssessmentSummary, TierView};

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub profile: RawProfile,
    /// Country names to consider; `"All"` selects every catalog country.
    #[serde(default = "all_countries")]
    pub countries: Vec<String>,
}

fn all_countries() -> Vec<String> {
    vec!["All".to_string()]
}

impl AssessmentRequest {
    pub fn new(profile: RawProfile, countries: Vec<String>) -> Self {
        Self { profile, countries }
    }

    pub fn selection(&self) -> CountrySelection {
        CountrySelection::from_names(&self.countries)
    }
}

/// Runs the pipeline against one catalog snapshot.
pub struct ReadinessAssessor<'a> {
    catalog: &'a Catalog,
    policy: TierPolicy,
}

impl<'a> ReadinessAssessor<'a> {
    pub fn new(catalog: &'a Catalog, policy: TierPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn assess(&self, request: &AssessmentRequest) -> Result<Assessment, ProfileError> {
        let weights = profile::normalize(&request.profile)?;
        let country_scores = scorer::score_countries(self.catalog, &request.selection(), &weights);
        let gap_view = gap::analyze(self.catalog.universities(), &country_scores);
        let windows = tiers::classify(&gap_view, &self.policy);

        Ok(Assessment {
            weights,
            country_scores,
            gap_view,
            windows,
        })
    }
}

/// Everything a report needs: the score table, the full gap view and the tier windows.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    weights: ProfileWeights,
    country_scores: CountryScoreTable,
    gap_view: GapView,
    windows: TierWindows,
}

impl Assessment {
    pub fn weights(&self) -> &ProfileWeights {
        &self.weights
    }

    pub fn country_scores(&self) -> &CountryScoreTable {
        &self.country_scores
    }

    pub fn gap_view(&self) -> &GapView {
        &self.gap_view
    }

    pub fn windows(&self) -> &TierWindows {
        &self.windows
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.windows.anchor
    }

    pub fn tier(&self, tier: Tier) -> &[GapRecord] {
        self.windows.slice(&self.gap_view, tier)
    }

    pub fn ambitious(&self) -> &[GapRecord] {
        self.tier(Tier::Ambitious)
    }

    pub fn target(&self) -> &[GapRecord] {
        self.tier(Tier::Target)
    }

    pub fn safe(&self) -> &[GapRecord] {
        self.tier(Tier::Safe)
    }

    /// No scorable university matched the selected countries.
    pub fn is_empty(&self) -> bool {
        self.gap_view.is_empty()
    }

    pub fn summary(&self) -> AssessmentSummary {
        views::summarize(self)
    }
}
