use super::domain::{Dimension, DimensionVector};
use serde::{Deserialize, Serialize};

pub const MAX_AP_TESTS: usize = 5;
pub const MAX_AP_SCORE: f64 = 5.0;
pub const SAT_MIN: f64 = 400.0;
pub const SAT_MAX: f64 = 1600.0;
pub const MAX_CO_CURRICULAR: u8 = 3;
pub const MAX_EXTRA_CURRICULAR: u8 = 3;
pub const MAX_INTERNSHIPS: u8 = 2;
pub const MAX_RECOMMENDATIONS: u8 = 3;

/// Raw inputs as collected from the student, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProfile {
    pub class_9: f64,
    pub class_10: f64,
    pub class_11: f64,
    pub class_12: f64,
    pub sat: f64,
    pub ap_scores: Vec<f64>,
    pub co_curricular: u8,
    pub extra_curricular: u8,
    pub internships: u8,
    pub community_service: bool,
    pub research_project: bool,
    pub recommendations: u8,
}

impl Default for RawProfile {
    fn default() -> Self {
        Self {
            class_9: 0.0,
            class_10: 0.0,
            class_11: 0.0,
            class_12: 0.0,
            sat: SAT_MIN,
            ap_scores: Vec::new(),
            co_curricular: 0,
            extra_curricular: 0,
            internships: 0,
            community_service: false,
            research_project: false,
            recommendations: 0,
        }
    }
}

/// Raw input that cannot be mapped onto the unit interval.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("at most {max} AP scores may be reported (got {count})")]
    TooManyApScores { count: usize, max: usize },
}

/// Normalized profile; every component lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileWeights(DimensionVector);

impl ProfileWeights {
    pub fn from_vector(vector: DimensionVector) -> Result<Self, ProfileError> {
        for (dimension, value) in vector.iter() {
            check_range(dimension.label(), value, 0.0, 1.0)?;
        }
        Ok(Self(vector))
    }

    pub fn vector(&self) -> &DimensionVector {
        &self.0
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0.get(dimension)
    }
}

pub fn normalize(raw: &RawProfile) -> Result<ProfileWeights, ProfileError> {
    let mut vector = DimensionVector::default();

    vector.set(Dimension::Class9, percentage("class_9", raw.class_9)?);
    vector.set(Dimension::Class10, percentage("class_10", raw.class_10)?);
    vector.set(Dimension::Class11, percentage("class_11", raw.class_11)?);
    vector.set(Dimension::Class12, percentage("class_12", raw.class_12)?);

    check_range("sat", raw.sat, SAT_MIN, SAT_MAX)?;
    vector.set(Dimension::Sat, raw.sat / SAT_MAX);

    vector.set(Dimension::AdvancedPlacement, ap_average(&raw.ap_scores)?);

    vector.set(
        Dimension::CoCurricular,
        count("co_curricular", raw.co_curricular, MAX_CO_CURRICULAR)?,
    );
    vector.set(
        Dimension::ExtraCurricular,
        count("extra_curricular", raw.extra_curricular, MAX_EXTRA_CURRICULAR)?,
    );
    vector.set(
        Dimension::Internship,
        count("internships", raw.internships, MAX_INTERNSHIPS)?,
    );
    vector.set(Dimension::Community, flag(raw.community_service));
    vector.set(Dimension::Research, flag(raw.research_project));
    vector.set(
        Dimension::Recommendations,
        count("recommendations", raw.recommendations, MAX_RECOMMENDATIONS)?,
    );

    ProfileWeights::from_vector(vector)
}

fn percentage(field: &'static str, value: f64) -> Result<f64, ProfileError> {
    check_range(field, value, 0.0, 100.0)?;
    Ok(value / 100.0)
}

fn ap_average(scores: &[f64]) -> Result<f64, ProfileError> {
    if scores.len() > MAX_AP_TESTS {
        return Err(ProfileError::TooManyApScores {
            count: scores.len(),
            max: MAX_AP_TESTS,
        });
    }
    if scores.is_empty() {
        return Ok(0.0);
    }

    for score in scores {
        check_range("ap_scores", *score, 0.0, MAX_AP_SCORE)?;
    }

    let total: f64 = scores.iter().sum();
    Ok(total / (scores.len() as f64 * MAX_AP_SCORE))
}

fn count(field: &'static str, value: u8, max: u8) -> Result<f64, ProfileError> {
    check_range(field, f64::from(value), 0.0, f64::from(max))?;
    Ok(f64::from(value) / f64::from(max))
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ProfileError> {
    if !value.is_finite() {
        return Err(ProfileError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(ProfileError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
