use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;

use crate::assessment::router::{submit_handler, OnboardingSubmission};
use crate::assessment::{assessment_router, AssessmentEngine};

fn post_json(body: serde_json::Value) -> Request<axum::body::Body> {
    Request::post("/api/v1/onboarding/assessments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn submit_route_returns_profile_and_insights() {
    let router = assessment_router(Arc::new(AssessmentEngine::offline()));

    let response = router
        .oneshot(post_json(json!({
            "onboarding_data": thriving_response(),
            "onboarding_level": "balanced",
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Onboarding completed successfully");
    assert_eq!(payload["profile"]["onboarding_level"], "balanced");
    assert_eq!(payload["profile"]["next_module"], "mood_tracking");
    assert_eq!(payload["insights"]["cluster_primary"], "resilient");
    assert_eq!(payload["insights"]["mental_health_index"], 89.8);
}

#[tokio::test]
async fn submit_route_accepts_empty_submission() {
    let router = assessment_router(Arc::new(AssessmentEngine::offline()));

    let response = router
        .oneshot(post_json(json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["insights"]["mental_health_index"], 60.0);
    assert_eq!(payload["profile"]["next_module"], "just_chat");
}

#[tokio::test]
async fn submit_route_rejects_unknown_answers() {
    let router = assessment_router(Arc::new(AssessmentEngine::offline()));

    let response = router
        .oneshot(post_json(json!({
            "onboarding_data": { "sleep_quality": "average", "favourite_colour": "blue" },
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_flags_emergency_submissions() {
    let mut data = distressed_response();
    data.suicidal_thoughts = Some("yes_briefly".to_string());
    let submission = OnboardingSubmission {
        onboarding_data: data,
        onboarding_level: None,
    };

    let response = submit_handler(
        State(Arc::new(AssessmentEngine::offline())),
        axum::Json(submission),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["insights"]["emergency_mode"], true);
    assert_eq!(payload["insights"]["risk_flags"]["priority_level"], "emergency");
    assert_eq!(payload["profile"]["risk_factors"]["suicidal_thoughts"], true);
}
