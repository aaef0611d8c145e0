use super::domain::{DomainScore, NormalizedScore, PriorityLevel, RawResponse, RiskFlags};

const AFFIRMATIVE_IDEATION: [&str; 2] = ["yes_briefly", "yes_often"];
const LOW_MOOD_BELOW: f64 = 50.0;
const LOW_ENERGY_BELOW: f64 = 50.0;
const MINIMUM_SUPPORT_SCORE: u8 = 2;
const STRONG_PROTECTION_ABOVE: f64 = 70.0;

/// True when the suicidal-ideation answer is one of the affirmative variants.
pub fn reports_suicidal_ideation(response: &RawResponse) -> bool {
    response
        .suicidal_thoughts
        .as_deref()
        .map(|answer| AFFIRMATIVE_IDEATION.contains(&answer))
        .unwrap_or(false)
}

/// Evaluate escalation priority. The first matching rule wins and no later rule is consulted.
pub fn assess_risk(
    response: &RawResponse,
    domains: &DomainScore,
    normalized: &NormalizedScore,
) -> RiskFlags {
    if reports_suicidal_ideation(response) {
        return RiskFlags {
            suicide_flag: true,
            priority_level: PriorityLevel::Emergency,
            ..RiskFlags::default()
        };
    }

    let low_mood = domains.mood_stability < LOW_MOOD_BELOW;

    if low_mood && normalized.social_support < MINIMUM_SUPPORT_SCORE {
        return RiskFlags {
            acute_risk_flag: true,
            priority_level: PriorityLevel::HighRisk,
            ..RiskFlags::default()
        };
    }

    if low_mood && domains.energy_function < LOW_ENERGY_BELOW {
        return RiskFlags {
            moderate_flag: true,
            priority_level: PriorityLevel::ModerateRisk,
            ..RiskFlags::default()
        };
    }

    if domains.protective_strength > STRONG_PROTECTION_ABOVE {
        return RiskFlags {
            low_flag: true,
            priority_level: PriorityLevel::Stable,
            ..RiskFlags::default()
        };
    }

    RiskFlags::default()
}
