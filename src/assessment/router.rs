use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

use super::domain::{AssessmentResult, PriorityLevel, RawResponse};
use super::profile::OnboardingProfile;
use super::AssessmentEngine;

/// Request body accepted by the onboarding endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OnboardingSubmission {
    #[serde(default)]
    pub onboarding_data: RawResponse,
    #[serde(default)]
    pub onboarding_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingInsights {
    pub message: String,
    pub profile: OnboardingProfile,
    pub insights: AssessmentResult,
}

/// Router exposing onboarding assessment over HTTP.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/onboarding/assessments", post(submit_handler))
        .with_state(engine)
}

pub(crate) async fn submit_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    axum::Json(submission): axum::Json<OnboardingSubmission>,
) -> Response {
    let OnboardingSubmission {
        onboarding_data,
        onboarding_level,
    } = submission;

    let profile = OnboardingProfile::from_response(&onboarding_data, onboarding_level.as_deref());

    // The summary collaborator blocks on network I/O.
    let scored = tokio::task::spawn_blocking(move || engine.assess(&onboarding_data)).await;

    match scored {
        Ok(insights) => {
            if insights.risk_flags.priority_level == PriorityLevel::Emergency {
                warn!("onboarding submission raised an emergency priority");
            }
            let body = OnboardingInsights {
                message: "Onboarding completed successfully".to_string(),
                profile,
                insights,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(join_error) => {
            error!(error = %join_error, "assessment task did not complete");
            let payload = json!({
                "error": "assessment could not be completed",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
