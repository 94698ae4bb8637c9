use super::gap::GapRecord;
use super::scorer::CountryScore;
use super::tiers::{Anchor, Tier};
use super::Assessment;
use serde::Serialize;

const NO_COUNTRIES: &str =
    "No countries selected; choose at least one country to see recommendations.";
const NO_UNIVERSITIES: &str =
    "No universities with a published requirement exist for the selected countries.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversityCard {
    pub university: String,
    pub country: String,
    pub ranking: Option<u32>,
    pub ranking_label: String,
    pub required_score: f64,
    pub achieved_score: f64,
    pub gap: f64,
}

impl UniversityCard {
    fn from_record(record: &GapRecord) -> Self {
        let ranking_label = match record.ranking {
            Some(rank) => format!("QS #{rank}"),
            None => "QS #\u{2013}".to_string(),
        };

        Self {
            university: record.university.clone(),
            country: record.country.clone(),
            ranking: record.ranking,
            ranking_label,
            required_score: record.required_score,
            achieved_score: record.achieved_score,
            gap: record.gap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierView {
    pub tier: Tier,
    pub label: &'static str,
    pub accent: &'static str,
    pub universities: Vec<UniversityCard>,
}

/// Plain structured output handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentSummary {
    /// Highest score first.
    pub country_scores: Vec<CountryScore>,
    pub gap_analysis: Vec<GapRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,
    pub tiers: Vec<TierView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AssessmentSummary {
    pub fn tier(&self, tier: Tier) -> Option<&TierView> {
        self.tiers.iter().find(|view| view.tier == tier)
    }
}

pub(crate) fn summarize(assessment: &Assessment) -> AssessmentSummary {
    let tiers = Tier::ordered()
        .into_iter()
        .map(|tier| TierView {
            tier,
            label: tier.label(),
            accent: tier.accent(),
            universities: assessment
                .tier(tier)
                .iter()
                .map(UniversityCard::from_record)
                .collect(),
        })
        .collect();

    let message = if assessment.country_scores().is_empty() {
        Some(NO_COUNTRIES.to_string())
    } else if assessment.is_empty() {
        Some(NO_UNIVERSITIES.to_string())
    } else {
        None
    };

    AssessmentSummary {
        country_scores: assessment.country_scores().ranked(),
        gap_analysis: assessment.gap_view().records().to_vec(),
        anchor: assessment.anchor(),
        tiers,
        message,
    }
}
