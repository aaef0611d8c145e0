use std::sync::Arc;

use super::common::*;

use crate::assessment::summary::{
    build_prompt, cluster_template, fallback_summary, recommendations, CONNECTION_RECOMMENDATION,
    SLEEP_RECOMMENDATION, SUPPORT_RECOMMENDATION,
};
use crate::assessment::{
    aggregate_domains, assess_risk, classify_cluster, Cluster, DisabledGenerator, PriorityLevel,
    RawResponse, SummaryComposer, SummaryInputs,
};

fn inputs_for(response: &RawResponse) -> SummaryInputs {
    let scores = normalized(response);
    let domains = aggregate_domains(&scores);
    let cluster = classify_cluster(&scores, &domains);
    let risk = assess_risk(response, &domains, &scores);
    SummaryInputs::new(cluster.cluster, domains, &scores, risk.priority_level)
}

#[test]
fn prompt_embeds_cluster_domains_and_priority() {
    let prompt = build_prompt(&inputs_for(&RawResponse::default()));

    assert!(prompt.contains("Overall Pattern: resilient"));
    assert!(prompt.contains("Mood Stability: 60.0/100"));
    assert!(prompt.contains("Support Systems: 60.0/100"));
    assert!(prompt.contains("Current Level: stable"));
}

#[test]
fn uses_generated_text_when_available() {
    let generator = Arc::new(ScriptedGenerator::replying("  You are doing well.  \n"));
    let composer = SummaryComposer::new(generator.clone());

    let summary = composer.compose(&inputs_for(&thriving_response()));

    assert_eq!(summary, "You are doing well.");
    assert_eq!(generator.prompts().len(), 1);
}

#[test]
fn sentinel_reply_falls_back_to_template() {
    let generator = Arc::new(ScriptedGenerator::replying(
        "AI service error: HTTP 503 - model overloaded",
    ));
    let composer = SummaryComposer::new(generator.clone());
    let inputs = inputs_for(&RawResponse::default());

    let summary = composer.compose(&inputs);

    assert_eq!(summary, cluster_template(Cluster::Resilient));
    assert_eq!(generator.prompts().len(), 1);
}

#[test]
fn blank_reply_falls_back_to_template() {
    let composer = SummaryComposer::new(Arc::new(ScriptedGenerator::replying("   ")));
    let inputs = inputs_for(&thriving_response());

    assert_eq!(composer.compose(&inputs), fallback_summary(&inputs));
}

#[test]
fn generator_errors_fall_back_to_template() {
    let inputs = inputs_for(&distressed_response());

    for composer in [
        SummaryComposer::new(Arc::new(TimedOutGenerator)),
        SummaryComposer::new(Arc::new(DisabledGenerator)),
    ] {
        let summary = composer.compose(&inputs);
        assert!(summary.starts_with(cluster_template(Cluster::AffectiveLow)));
    }
}

#[test]
fn distressed_fallback_recommends_sleep_and_connection() {
    let inputs = inputs_for(&distressed_response());

    assert_eq!(
        recommendations(&inputs),
        vec![SLEEP_RECOMMENDATION, CONNECTION_RECOMMENDATION]
    );
    assert_eq!(
        fallback_summary(&inputs),
        format!(
            "{} {} {}",
            cluster_template(Cluster::AffectiveLow),
            SLEEP_RECOMMENDATION,
            CONNECTION_RECOMMENDATION
        )
    );
    assert_eq!(inputs.priority, PriorityLevel::HighRisk);
}

#[test]
fn thriving_fallback_acknowledges_support() {
    let inputs = inputs_for(&thriving_response());

    assert_eq!(recommendations(&inputs), vec![SUPPORT_RECOMMENDATION]);
}

#[test]
fn neutral_fallback_is_template_only() {
    let inputs = inputs_for(&RawResponse::default());

    assert!(recommendations(&inputs).is_empty());
    assert_eq!(fallback_summary(&inputs), cluster_template(Cluster::Resilient));
}
