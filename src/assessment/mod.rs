//! Onboarding questionnaire scoring.
//!
//! The pipeline runs six pure stages over one immutable [`RawResponse`]: normalization, domain
//! aggregation, the composite index, cluster classification, risk assessment and the summary.
//! Only the summary stage talks to the outside world, through an injected [`TextGenerator`].

mod clusters;
pub mod domain;
mod domains;
mod normalizer;
pub mod profile;
mod risk;
pub mod router;
pub mod summary;

#[cfg(test)]
mod tests;

pub use clusters::{classify_cluster, cluster_affinities, select_cluster};
pub use domain::{
    AssessmentResult, Cluster, ClusterResult, CopingSkills, DomainKind, DomainScore,
    NormalizedScore, PriorityLevel, RawResponse, RiskFlags, ScoredField,
};
pub use domains::{aggregate_domains, composite_index, DOMAIN_WEIGHTS};
pub use normalizer::{normalize, score_answer, NEUTRAL_SCORE};
pub use profile::OnboardingProfile;
pub use risk::{assess_risk, reports_suicidal_ideation};
pub use router::assessment_router;
pub use summary::{
    DisabledGenerator, GeminiGenerator, GenerationError, SummaryComposer, SummaryInputs,
    TextGenerator,
};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error};

/// Internal fault raised while scoring. Never escapes [`AssessmentEngine::assess`].
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("{domain} score {value} is outside 0-100")]
    DomainOutOfRange { domain: &'static str, value: f64 },
    #[error("assessment stage panicked: {0}")]
    Panicked(String),
}

/// Stateless scoring engine. Holds nothing but the summary collaborator, so clones are cheap
/// and a single instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    composer: SummaryComposer,
}

impl AssessmentEngine {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            composer: SummaryComposer::new(generator),
        }
    }

    /// Engine that always uses template summaries.
    pub fn offline() -> Self {
        Self::new(Arc::new(DisabledGenerator))
    }

    /// Score a response. Any internal fault yields [`AssessmentResult::fallback`].
    pub fn assess(&self, response: &RawResponse) -> AssessmentResult {
        match self.run_guarded(response) {
            Ok(result) => result,
            Err(err) => {
                error!(error = %err, "assessment failed; returning fallback result");
                AssessmentResult::fallback()
            }
        }
    }

    /// Score a response, surfacing internal faults instead of masking them.
    pub fn try_assess(&self, response: &RawResponse) -> Result<AssessmentResult, AssessmentError> {
        let normalized = normalize(response);
        let domain_scores = aggregate_domains(&normalized);
        domains::ensure_within_bounds(&domain_scores)?;

        let mental_health_index = composite_index(&domain_scores);
        let cluster = classify_cluster(&normalized, &domain_scores);
        let risk_flags = assess_risk(response, &domain_scores, &normalized);

        debug!(
            mental_health_index,
            cluster = cluster.cluster.key(),
            confidence = cluster.confidence,
            priority = risk_flags.priority_level.label(),
            "scored onboarding response"
        );

        let inputs = SummaryInputs::new(
            cluster.cluster,
            domain_scores,
            &normalized,
            risk_flags.priority_level,
        );
        let summary_text = self.composer.compose(&inputs);

        Ok(AssessmentResult {
            mental_health_index,
            cluster_primary: cluster.cluster,
            cluster_confidence: cluster.confidence,
            domain_scores,
            emergency_mode: risk_flags.suicide_flag,
            risk_flags,
            summary_text,
            processed_at: Utc::now(),
            error: None,
        })
    }

    // Panics in any stage, including the collaborator, become `AssessmentError::Panicked`.
    fn run_guarded(&self, response: &RawResponse) -> Result<AssessmentResult, AssessmentError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.try_assess(response)))
            .unwrap_or_else(|payload| Err(AssessmentError::Panicked(panic_message(&*payload))))
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::offline()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
