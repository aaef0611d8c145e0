use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::{
    normalize, AssessmentEngine, CopingSkills, GenerationError, NormalizedScore, RawResponse,
    TextGenerator,
};

fn answer(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Respondent reporting the lowest score on nearly every question.
pub(super) fn distressed_response() -> RawResponse {
    RawResponse {
        sleep_quality: answer("terrible"),
        energy_level: answer("drained"),
        focus_level: answer("very_hard"),
        social_withdrawal: answer("almost_always"),
        appetite_change: answer("less"),
        primary_affect: answer("numb"),
        affect_duration: answer("weeks"),
        belief_safety: answer("rarely"),
        belief_trust: answer("not_really"),
        belief_control: answer("not_much"),
        belief_self: answer("very_critical"),
        belief_intimacy: answer("very_difficult"),
        social_support: answer("not_really"),
        coping_skills: Some(CopingSkills::Listed(Vec::new())),
        suicidal_thoughts: answer("no"),
        ..RawResponse::default()
    }
}

/// Respondent with strong functioning and protective factors.
pub(super) fn thriving_response() -> RawResponse {
    RawResponse {
        onboarding_level: answer("deep"),
        sleep_quality: answer("pretty_good"),
        energy_level: answer("high"),
        focus_level: answer("sharp_as_usual"),
        social_withdrawal: answer("no"),
        appetite_change: answer("normal"),
        primary_affect: answer("peaceful"),
        affect_duration: answer("comes_and_goes"),
        belief_safety: answer("yes"),
        belief_trust: answer("yes"),
        belief_control: answer("mostly_yes"),
        belief_self: answer("kind"),
        belief_intimacy: answer("easy"),
        social_support: answer("yes_definitely"),
        coping_skills: Some(CopingSkills::Listed(
            ["exercise", "journaling", "music", "friends"]
                .iter()
                .map(|skill| skill.to_string())
                .collect(),
        )),
        purposeful_activities: answer("Volunteering at the animal shelter"),
        suicidal_thoughts: answer("no"),
        start_preference: answer("mood_tracking"),
        ..RawResponse::default()
    }
}

pub(super) fn normalized(response: &RawResponse) -> NormalizedScore {
    normalize(response)
}

/// Generator returning a fixed reply and recording every prompt it receives.
#[derive(Debug, Default)]
pub(super) struct ScriptedGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub(super) fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt mutex poisoned").clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

#[derive(Debug, Default)]
pub(super) struct TimedOutGenerator;

impl TextGenerator for TimedOutGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Timeout(std::time::Duration::from_secs(10)))
    }
}

#[derive(Debug, Default)]
pub(super) struct PanickingGenerator;

impl TextGenerator for PanickingGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        panic!("generator exploded");
    }
}

pub(super) fn engine_with(generator: Arc<dyn TextGenerator>) -> AssessmentEngine {
    AssessmentEngine::new(generator)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
