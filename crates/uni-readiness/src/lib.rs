//! Readiness scoring and Ambitious/Target/Safe tiering for a student profile against a
//! catalog of universities.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{
    Assessment, AssessmentRequest, AssessmentService, ReadinessAssessor, TierPolicy,
};
pub use catalog::{Catalog, CatalogLoader, CatalogStore};
