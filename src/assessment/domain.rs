use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Answers collected by the onboarding questionnaire.
///
/// Every field is optional. Unknown keys are rejected during deserialization so a renamed
/// question surfaces as an input error instead of silently scoring as neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawResponse {
    // Tier 1: demographics
    pub onboarding_level: Option<String>,
    pub employment_status: Option<String>,
    pub living_situation: Option<String>,
    pub therapy_history: Option<String>,
    pub medication: Option<String>,
    // Tier 2: emotional state
    pub primary_affect: Option<String>,
    pub primary_affect_custom: Option<String>,
    pub affect_duration: Option<String>,
    pub morning_mood: Option<String>,
    // Tier 4: functional impact
    pub sleep_quality: Option<String>,
    pub energy_level: Option<String>,
    pub focus_level: Option<String>,
    pub social_withdrawal: Option<String>,
    pub appetite_change: Option<String>,
    // Tier 3: beliefs
    pub belief_safety: Option<String>,
    pub belief_trust: Option<String>,
    pub belief_control: Option<String>,
    pub belief_self: Option<String>,
    pub belief_intimacy: Option<String>,
    // Tier 5: protective and risk factors
    pub social_support: Option<String>,
    pub coping_skills: Option<CopingSkills>,
    pub purposeful_activities: Option<String>,
    pub recent_trauma: Option<String>,
    pub suicidal_thoughts: Option<String>,
    // Tier 7/8: personalization
    pub personalization_goal: Option<String>,
    pub start_preference: Option<String>,
}

impl RawResponse {
    /// Parse a questionnaire payload, rejecting unknown fields.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Raw categorical answer backing a scored field, if one was supplied.
    pub fn answer(&self, field: ScoredField) -> Option<&str> {
        let answer = match field {
            ScoredField::SleepQuality => &self.sleep_quality,
            ScoredField::EnergyLevel => &self.energy_level,
            ScoredField::FocusLevel => &self.focus_level,
            ScoredField::SocialWithdrawal => &self.social_withdrawal,
            ScoredField::AppetiteChange => &self.appetite_change,
            ScoredField::PrimaryAffect => &self.primary_affect,
            ScoredField::AffectDuration => &self.affect_duration,
            ScoredField::BeliefSafety => &self.belief_safety,
            ScoredField::BeliefTrust => &self.belief_trust,
            ScoredField::BeliefControl => &self.belief_control,
            ScoredField::BeliefSelf => &self.belief_self,
            ScoredField::BeliefIntimacy => &self.belief_intimacy,
            ScoredField::SocialSupport => &self.social_support,
            ScoredField::CopingSkillsCount => return None,
        };
        answer.as_deref()
    }
}

/// Multi-select coping skills answer. Anything other than a list is kept but scores neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CopingSkills {
    Listed(Vec<String>),
    Unstructured(serde_json::Value),
}

/// Closed set of fields that carry a normalized 1-5 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoredField {
    SleepQuality,
    EnergyLevel,
    FocusLevel,
    SocialWithdrawal,
    AppetiteChange,
    PrimaryAffect,
    AffectDuration,
    BeliefSafety,
    BeliefTrust,
    BeliefControl,
    BeliefSelf,
    BeliefIntimacy,
    SocialSupport,
    CopingSkillsCount,
}

impl ScoredField {
    pub fn ordered() -> [ScoredField; 14] {
        [
            ScoredField::SleepQuality,
            ScoredField::EnergyLevel,
            ScoredField::FocusLevel,
            ScoredField::SocialWithdrawal,
            ScoredField::AppetiteChange,
            ScoredField::PrimaryAffect,
            ScoredField::AffectDuration,
            ScoredField::BeliefSafety,
            ScoredField::BeliefTrust,
            ScoredField::BeliefControl,
            ScoredField::BeliefSelf,
            ScoredField::BeliefIntimacy,
            ScoredField::SocialSupport,
            ScoredField::CopingSkillsCount,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            ScoredField::SleepQuality => "sleep_quality",
            ScoredField::EnergyLevel => "energy_level",
            ScoredField::FocusLevel => "focus_level",
            ScoredField::SocialWithdrawal => "social_withdrawal",
            ScoredField::AppetiteChange => "appetite_change",
            ScoredField::PrimaryAffect => "primary_affect",
            ScoredField::AffectDuration => "affect_duration",
            ScoredField::BeliefSafety => "belief_safety",
            ScoredField::BeliefTrust => "belief_trust",
            ScoredField::BeliefControl => "belief_control",
            ScoredField::BeliefSelf => "belief_self",
            ScoredField::BeliefIntimacy => "belief_intimacy",
            ScoredField::SocialSupport => "social_support",
            ScoredField::CopingSkillsCount => "coping_skills_count",
        }
    }
}

/// Fully populated 1-5 scores for every [`ScoredField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedScore {
    pub sleep_quality: u8,
    pub energy_level: u8,
    pub focus_level: u8,
    pub social_withdrawal: u8,
    pub appetite_change: u8,
    pub primary_affect: u8,
    pub affect_duration: u8,
    pub belief_safety: u8,
    pub belief_trust: u8,
    pub belief_control: u8,
    pub belief_self: u8,
    pub belief_intimacy: u8,
    pub social_support: u8,
    pub coping_skills_count: u8,
    /// Only present when the respondent described a source of purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purposeful_activities: Option<u8>,
}

impl NormalizedScore {
    /// Every field at `score`, without a purposeful activities answer.
    pub fn uniform(score: u8) -> Self {
        Self {
            sleep_quality: score,
            energy_level: score,
            focus_level: score,
            social_withdrawal: score,
            appetite_change: score,
            primary_affect: score,
            affect_duration: score,
            belief_safety: score,
            belief_trust: score,
            belief_control: score,
            belief_self: score,
            belief_intimacy: score,
            social_support: score,
            coping_skills_count: score,
            purposeful_activities: None,
        }
    }

    pub fn get(&self, field: ScoredField) -> u8 {
        match field {
            ScoredField::SleepQuality => self.sleep_quality,
            ScoredField::EnergyLevel => self.energy_level,
            ScoredField::FocusLevel => self.focus_level,
            ScoredField::SocialWithdrawal => self.social_withdrawal,
            ScoredField::AppetiteChange => self.appetite_change,
            ScoredField::PrimaryAffect => self.primary_affect,
            ScoredField::AffectDuration => self.affect_duration,
            ScoredField::BeliefSafety => self.belief_safety,
            ScoredField::BeliefTrust => self.belief_trust,
            ScoredField::BeliefControl => self.belief_control,
            ScoredField::BeliefSelf => self.belief_self,
            ScoredField::BeliefIntimacy => self.belief_intimacy,
            ScoredField::SocialSupport => self.social_support,
            ScoredField::CopingSkillsCount => self.coping_skills_count,
        }
    }

    pub(crate) fn value(&self, field: ScoredField) -> f64 {
        f64::from(self.get(field))
    }
}

/// Top-level psychological dimensions, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKind {
    MoodStability,
    EnergyFunction,
    SocialEngagement,
    CognitiveFlexibility,
    ProtectiveStrength,
}

impl DomainKind {
    pub fn ordered() -> [DomainKind; 5] {
        [
            DomainKind::MoodStability,
            DomainKind::EnergyFunction,
            DomainKind::SocialEngagement,
            DomainKind::CognitiveFlexibility,
            DomainKind::ProtectiveStrength,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            DomainKind::MoodStability => "mood_stability",
            DomainKind::EnergyFunction => "energy_function",
            DomainKind::SocialEngagement => "social_engagement",
            DomainKind::CognitiveFlexibility => "cognitive_flexibility",
            DomainKind::ProtectiveStrength => "protective_strength",
        }
    }

    /// Reader-facing label used in prompts and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            DomainKind::MoodStability => "Mood Stability",
            DomainKind::EnergyFunction => "Energy & Focus",
            DomainKind::SocialEngagement => "Social Connection",
            DomainKind::CognitiveFlexibility => "Mental Flexibility",
            DomainKind::ProtectiveStrength => "Support Systems",
        }
    }
}

/// Domain scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub mood_stability: f64,
    pub energy_function: f64,
    pub social_engagement: f64,
    pub cognitive_flexibility: f64,
    pub protective_strength: f64,
}

impl DomainScore {
    pub fn uniform(score: f64) -> Self {
        Self {
            mood_stability: score,
            energy_function: score,
            social_engagement: score,
            cognitive_flexibility: score,
            protective_strength: score,
        }
    }

    pub fn get(&self, domain: DomainKind) -> f64 {
        match domain {
            DomainKind::MoodStability => self.mood_stability,
            DomainKind::EnergyFunction => self.energy_function,
            DomainKind::SocialEngagement => self.social_engagement,
            DomainKind::CognitiveFlexibility => self.cognitive_flexibility,
            DomainKind::ProtectiveStrength => self.protective_strength,
        }
    }
}

/// Archetypal emotional patterns, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cluster {
    AffectiveLow,
    Anxiety,
    Burnout,
    StressOverload,
    Resilient,
}

impl Cluster {
    pub fn ordered() -> [Cluster; 5] {
        [
            Cluster::AffectiveLow,
            Cluster::Anxiety,
            Cluster::Burnout,
            Cluster::StressOverload,
            Cluster::Resilient,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            Cluster::AffectiveLow => "affective_low",
            Cluster::Anxiety => "anxiety",
            Cluster::Burnout => "burnout",
            Cluster::StressOverload => "stress_overload",
            Cluster::Resilient => "resilient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    pub cluster: Cluster,
    pub confidence: f64,
}

/// Escalation tier consumed by downstream crisis-response tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    Emergency,
    HighRisk,
    ModerateRisk,
    Stable,
}

impl PriorityLevel {
    pub fn label(self) -> &'static str {
        match self {
            PriorityLevel::Emergency => "emergency",
            PriorityLevel::HighRisk => "high_risk",
            PriorityLevel::ModerateRisk => "moderate_risk",
            PriorityLevel::Stable => "stable",
        }
    }
}

/// Mutually exclusive risk flags; at most one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlags {
    pub suicide_flag: bool,
    pub acute_risk_flag: bool,
    pub moderate_flag: bool,
    pub low_flag: bool,
    pub priority_level: PriorityLevel,
}

impl Default for RiskFlags {
    fn default() -> Self {
        Self {
            suicide_flag: false,
            acute_risk_flag: false,
            moderate_flag: false,
            low_flag: false,
            priority_level: PriorityLevel::Stable,
        }
    }
}

impl RiskFlags {
    pub fn raised_count(&self) -> usize {
        [
            self.suicide_flag,
            self.acute_risk_flag,
            self.moderate_flag,
            self.low_flag,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }
}

/// Complete assessment delivered to collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub mental_health_index: f64,
    pub cluster_primary: Cluster,
    pub cluster_confidence: f64,
    pub domain_scores: DomainScore,
    pub risk_flags: RiskFlags,
    pub summary_text: String,
    pub emergency_mode: bool,
    pub processed_at: DateTime<Utc>,
    /// Set only when the engine fell back to the neutral result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub(crate) const FALLBACK_SUMMARY: &str = "Thank you for completing the assessment.";
pub(crate) const FALLBACK_ERROR: &str = "Failed to process onboarding data";

impl AssessmentResult {
    /// Neutral result returned when scoring fails.
    pub fn fallback() -> Self {
        Self {
            mental_health_index: 50.0,
            cluster_primary: Cluster::Resilient,
            cluster_confidence: 0.5,
            domain_scores: DomainScore::uniform(50.0),
            risk_flags: RiskFlags::default(),
            summary_text: FALLBACK_SUMMARY.to_string(),
            emergency_mode: false,
            processed_at: Utc::now(),
            error: Some(FALLBACK_ERROR.to_string()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}
