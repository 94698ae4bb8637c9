use super::profile::ProfileError;
use super::tiers::TierPolicy;
use super::{Assessment, AssessmentRequest, ReadinessAssessor};
use crate::catalog::CatalogStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Request-scoped assessments over the current catalog snapshot.
pub struct AssessmentService {
    store: Arc<CatalogStore>,
    policy: TierPolicy,
}

impl AssessmentService {
    pub fn new(store: Arc<CatalogStore>, policy: TierPolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    pub fn policy(&self) -> TierPolicy {
        self.policy
    }

    pub fn assess(&self, request: &AssessmentRequest) -> Result<Assessment, ProfileError> {
        let catalog = self.store.snapshot();
        let assessment = ReadinessAssessor::new(&catalog, self.policy).assess(request)?;

        debug!(
            countries = assessment.country_scores().len(),
            anchor = ?assessment.anchor(),
            "assessment windows computed"
        );
        info!(
            scored_universities = assessment.gap_view().len(),
            ambitious = assessment.ambitious().len(),
            target = assessment.target().len(),
            safe = assessment.safe().len(),
            "assessment completed"
        );

        Ok(assessment)
    }

    pub fn countries(&self) -> Vec<String> {
        self.store
            .snapshot()
            .country_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
