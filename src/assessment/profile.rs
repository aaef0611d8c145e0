use serde::{Deserialize, Serialize};

use super::domain::{CopingSkills, RawResponse};
use super::risk::reports_suicidal_ideation;

const DEFAULT_ONBOARDING_LEVEL: &str = "balanced";
const DEFAULT_NEXT_MODULE: &str = "just_chat";

/// Tiered view of an onboarding submission, stored alongside the scored insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingProfile {
    pub onboarding_level: String,
    pub demographics: Demographics,
    pub emotional_state: EmotionalState,
    pub cognitive_themes: CognitiveThemes,
    pub functional_impact: FunctionalImpact,
    pub protective_factors: ProtectiveFactors,
    pub risk_factors: RiskFactors,
    pub personalization_goal: Option<String>,
    pub next_module: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub employment_status: Option<String>,
    pub living_situation: Option<String>,
    pub previous_therapy: Option<String>,
    pub medication: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalState {
    pub primary_affect: Option<String>,
    pub emotion_description: Option<String>,
    pub affect_duration: Option<String>,
    pub morning_mood: Option<String>,
}

/// Negative belief themes flagged from the belief answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitiveThemes {
    pub safety_negative: bool,
    pub trust_negative: bool,
    pub control_low: bool,
    pub self_worth_low: bool,
    pub intimacy_low: bool,
}

impl CognitiveThemes {
    pub fn present_count(&self) -> usize {
        [
            self.safety_negative,
            self.trust_negative,
            self.control_low,
            self.self_worth_low,
            self.intimacy_low,
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalImpact {
    pub sleep_quality: Option<String>,
    pub energy_level: Option<String>,
    pub focus_level: Option<String>,
    pub social_withdrawal: Option<String>,
    pub appetite_change: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectiveFactors {
    pub social_support: Option<String>,
    pub coping_skills: Vec<String>,
    pub purposeful_activities: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub recent_trauma: bool,
    pub suicidal_thoughts: bool,
}

fn answered_one_of(answer: &Option<String>, values: &[&str]) -> bool {
    answer
        .as_deref()
        .map(|value| values.contains(&value))
        .unwrap_or(false)
}

impl OnboardingProfile {
    /// Build the profile. `level` overrides the level captured in the response itself.
    pub fn from_response(response: &RawResponse, level: Option<&str>) -> Self {
        let onboarding_level = level
            .or(response.onboarding_level.as_deref())
            .unwrap_or(DEFAULT_ONBOARDING_LEVEL)
            .to_string();

        let coping_skills = match &response.coping_skills {
            Some(CopingSkills::Listed(skills)) => skills.clone(),
            Some(CopingSkills::Unstructured(_)) | None => Vec::new(),
        };

        Self {
            onboarding_level,
            demographics: Demographics {
                employment_status: response.employment_status.clone(),
                living_situation: response.living_situation.clone(),
                previous_therapy: response.therapy_history.clone(),
                medication: response.medication.clone(),
            },
            emotional_state: EmotionalState {
                primary_affect: response.primary_affect.clone(),
                emotion_description: response.primary_affect_custom.clone(),
                affect_duration: response.affect_duration.clone(),
                morning_mood: response.morning_mood.clone(),
            },
            cognitive_themes: CognitiveThemes {
                safety_negative: answered_one_of(&response.belief_safety, &["sometimes", "rarely"]),
                trust_negative: answered_one_of(&response.belief_trust, &["depends", "not_really"]),
                control_low: answered_one_of(&response.belief_control, &["sometimes", "not_much"]),
                self_worth_low: answered_one_of(
                    &response.belief_self,
                    &["depends", "very_critical"],
                ),
                intimacy_low: answered_one_of(
                    &response.belief_intimacy,
                    &["a_bit_hard", "very_difficult"],
                ),
            },
            functional_impact: FunctionalImpact {
                sleep_quality: response.sleep_quality.clone(),
                energy_level: response.energy_level.clone(),
                focus_level: response.focus_level.clone(),
                social_withdrawal: response.social_withdrawal.clone(),
                appetite_change: response.appetite_change.clone(),
            },
            protective_factors: ProtectiveFactors {
                social_support: response.social_support.clone(),
                coping_skills,
                purposeful_activities: response.purposeful_activities.clone(),
            },
            risk_factors: RiskFactors {
                recent_trauma: response.recent_trauma.as_deref() == Some("yes"),
                suicidal_thoughts: reports_suicidal_ideation(response),
            },
            personalization_goal: response.personalization_goal.clone(),
            next_module: response
                .start_preference
                .clone()
                .unwrap_or_else(|| DEFAULT_NEXT_MODULE.to_string()),
        }
    }
}
