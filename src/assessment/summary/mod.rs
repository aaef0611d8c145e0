//! Human-readable summary for a completed assessment.
//!
//! A text-generation collaborator gets one attempt; any failure falls back to a fixed
//! per-cluster template plus threshold-gated recommendations.

mod generator;

pub use generator::{
    is_failure_reply, DisabledGenerator, GeminiGenerator, GenerationError, TextGenerator,
    FAILURE_SENTINELS,
};

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{Cluster, DomainKind, DomainScore, NormalizedScore, PriorityLevel};
use super::domains::PERCENT_PER_POINT;

const SLEEP_CONCERN_BELOW: f64 = 50.0;
const SOCIAL_CONCERN_BELOW: f64 = 50.0;
const SUPPORT_STRENGTH_ABOVE: f64 = 70.0;

pub const SLEEP_RECOMMENDATION: &str = "Consider establishing a consistent sleep routine.";
pub const CONNECTION_RECOMMENDATION: &str = "Staying connected with others can be really helpful.";
pub const SUPPORT_RECOMMENDATION: &str = "Your existing support systems are a great foundation.";

/// Opening sentence used when the generator is unavailable.
pub fn cluster_template(cluster: Cluster) -> &'static str {
    match cluster {
        Cluster::AffectiveLow => "You've been feeling low energy and emotionally fatigued. Journaling and short breaks may help balance your energy over the week.",
        Cluster::Anxiety => "You might be feeling tense or worried lately. Breathing exercises and grounding techniques could help you feel more centered.",
        Cluster::Burnout => "It sounds like you're feeling drained and overwhelmed. Taking small breaks and setting boundaries might help restore your energy.",
        Cluster::StressOverload => "You seem to be carrying a lot right now. Connecting with supportive people and practicing self-compassion could be helpful.",
        Cluster::Resilient => "You have strong coping skills and support systems. Keep nurturing these relationships and practices that help you thrive.",
    }
}

/// Scores the summary needs beyond the cluster itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryInputs {
    pub cluster: Cluster,
    pub domains: DomainScore,
    /// Sleep quality on the 0-100 domain scale.
    pub sleep_score: f64,
    pub priority: PriorityLevel,
}

impl SummaryInputs {
    pub fn new(
        cluster: Cluster,
        domains: DomainScore,
        normalized: &NormalizedScore,
        priority: PriorityLevel,
    ) -> Self {
        Self {
            cluster,
            domains,
            sleep_score: f64::from(normalized.sleep_quality) * PERCENT_PER_POINT,
            priority,
        }
    }
}

/// Recommendation sentences whose thresholds are met, in fixed order.
pub fn recommendations(inputs: &SummaryInputs) -> Vec<&'static str> {
    let mut selected = Vec::new();
    if inputs.sleep_score < SLEEP_CONCERN_BELOW {
        selected.push(SLEEP_RECOMMENDATION);
    }
    if inputs.domains.social_engagement < SOCIAL_CONCERN_BELOW {
        selected.push(CONNECTION_RECOMMENDATION);
    }
    if inputs.domains.protective_strength > SUPPORT_STRENGTH_ABOVE {
        selected.push(SUPPORT_RECOMMENDATION);
    }
    selected
}

/// Template summary used whenever generation is unavailable.
pub fn fallback_summary(inputs: &SummaryInputs) -> String {
    let mut summary = cluster_template(inputs.cluster).to_string();
    for sentence in recommendations(inputs) {
        summary.push(' ');
        summary.push_str(sentence);
    }
    summary
}

pub fn build_prompt(inputs: &SummaryInputs) -> String {
    let mut prompt = String::from(
        "You are a caring, wise friend who has been following someone's mental health journey. \
         Respond naturally and empathetically.\n\nAssessment Results:\n",
    );
    let _ = writeln!(prompt, "- Overall Pattern: {}", inputs.cluster.key());
    for domain in DomainKind::ordered() {
        let _ = writeln!(
            prompt,
            "- {}: {:.1}/100",
            domain.label(),
            inputs.domains.get(domain)
        );
    }
    let _ = writeln!(prompt, "- Current Level: {}", inputs.priority.label());
    prompt.push_str(
        "\nWrite a warm, human response that:\n\
         - Speaks to them like a trusted friend who understands\n\
         - Acknowledges their journey with genuine care\n\
         - Offers gentle, practical encouragement\n\
         - Uses natural, conversational language\n\
         - Avoids clinical or technical terms\n\n\
         Keep it brief (2-3 sentences) and focus on being supportive and understanding.",
    );
    prompt
}

/// Summary stage wrapping the injected generator.
#[derive(Debug, Clone)]
pub struct SummaryComposer {
    generator: Arc<dyn TextGenerator>,
}

impl SummaryComposer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Always returns non-empty text.
    pub fn compose(&self, inputs: &SummaryInputs) -> String {
        let prompt = build_prompt(inputs);

        match self.generator.generate(&prompt) {
            Ok(reply) if !is_failure_reply(&reply) => {
                debug!(cluster = inputs.cluster.key(), "using generated summary");
                reply.trim().to_string()
            }
            Ok(reply) => {
                warn!(
                    cluster = inputs.cluster.key(),
                    reply = reply.trim(),
                    "text generator reported failure; using template summary"
                );
                fallback_summary(inputs)
            }
            Err(GenerationError::NotConfigured) => {
                debug!(cluster = inputs.cluster.key(), "using template summary");
                fallback_summary(inputs)
            }
            Err(error) => {
                warn!(
                    cluster = inputs.cluster.key(),
                    %error,
                    "text generation unavailable; using template summary"
                );
                fallback_summary(inputs)
            }
        }
    }
}
