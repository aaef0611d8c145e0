use std::sync::{Arc, Mutex};

use onboarding_insights::assessment::{
    AssessmentEngine, Cluster, GenerationError, OnboardingProfile, PriorityLevel, RawResponse,
    TextGenerator,
};

#[derive(Debug, Default)]
struct RecordingGenerator {
    prompts: Mutex<Vec<String>>,
}

impl TextGenerator for RecordingGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.to_string());
        Ok("AI service not configured. Please set GEMINI_API_KEY in your environment.".to_string())
    }
}

const BURNOUT_SUBMISSION: &str = r#"{
    "onboarding_level": "balanced",
    "employment_status": "full_time",
    "sleep_quality": "not_great",
    "energy_level": "drained",
    "focus_level": "very_hard",
    "social_withdrawal": "quite_often",
    "appetite_change": "less",
    "primary_affect": "tired",
    "affect_duration": "weeks",
    "belief_safety": "yes",
    "belief_trust": "depends",
    "belief_control": "sometimes",
    "belief_self": "depends",
    "belief_intimacy": "a_bit_hard",
    "social_support": "maybe_one_or_two",
    "coping_skills": ["music"],
    "purposeful_activities": "",
    "recent_trauma": "no",
    "suicidal_thoughts": "no",
    "personalization_goal": "feel less exhausted",
    "start_preference": "just_chat"
}"#;

#[test]
fn scores_a_submitted_questionnaire_end_to_end() {
    let response = RawResponse::from_json_str(BURNOUT_SUBMISSION).expect("submission parses");
    let generator = Arc::new(RecordingGenerator::default());
    let engine = AssessmentEngine::new(generator.clone());

    let result = engine.assess(&response);

    assert_eq!(result.cluster_primary, Cluster::Burnout);
    assert_eq!(result.cluster_confidence, 0.76);
    assert_eq!(result.risk_flags.priority_level, PriorityLevel::ModerateRisk);
    assert!(result.risk_flags.moderate_flag);
    assert!(!result.emergency_mode);
    assert!(result.summary_text.starts_with("It sounds like you're feeling drained"));
    assert!(result
        .summary_text
        .ends_with("Consider establishing a consistent sleep routine."));
    assert_eq!(generator.prompts.lock().expect("prompt mutex poisoned").len(), 1);

    let profile = OnboardingProfile::from_response(&response, None);
    assert_eq!(profile.cognitive_themes.present_count(), 4);
    assert_eq!(
        profile.personalization_goal.as_deref(),
        Some("feel less exhausted")
    );
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(AssessmentEngine::offline());
    let response = Arc::new(RawResponse::from_json_str(BURNOUT_SUBMISSION).expect("parses"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let response = Arc::clone(&response);
            std::thread::spawn(move || engine.assess(&response).mental_health_index)
        })
        .collect();

    let indices: Vec<f64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread completes"))
        .collect();
    assert!(indices.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn unknown_questions_are_rejected() {
    let error = RawResponse::from_json_str(r#"{"sleep_quality": "average", "star_sign": "leo"}"#)
        .expect_err("unknown key is rejected");
    assert!(error.to_string().contains("star_sign"));
}
