use super::domain::{DomainKind, DomainScore, NormalizedScore, ScoredField};
use super::AssessmentError;

/// Composite index weights. The set is closed and sums to 1.0.
pub const DOMAIN_WEIGHTS: [(DomainKind, f64); 5] = [
    (DomainKind::MoodStability, 0.25),
    (DomainKind::EnergyFunction, 0.20),
    (DomainKind::SocialEngagement, 0.20),
    (DomainKind::CognitiveFlexibility, 0.20),
    (DomainKind::ProtectiveStrength, 0.15),
];

const ENERGY_FIELD_WEIGHTS: [(ScoredField, f64); 5] = [
    (ScoredField::SleepQuality, 1.2),
    (ScoredField::EnergyLevel, 1.3),
    (ScoredField::FocusLevel, 1.0),
    (ScoredField::SocialWithdrawal, 1.4),
    (ScoredField::AppetiteChange, 1.0),
];

const MOOD_FIELDS: [ScoredField; 3] = [
    ScoredField::PrimaryAffect,
    ScoredField::AffectDuration,
    ScoredField::SleepQuality,
];

const SOCIAL_FIELDS: [ScoredField; 2] = [ScoredField::SocialWithdrawal, ScoredField::BeliefIntimacy];

const COGNITIVE_FIELDS: [ScoredField; 3] = [
    ScoredField::BeliefTrust,
    ScoredField::BeliefControl,
    ScoredField::BeliefSelf,
];

/// Maps a 1-5 average onto 0-100.
pub(crate) const PERCENT_PER_POINT: f64 = 20.0;

pub(crate) fn weight_for(domain: DomainKind) -> f64 {
    DOMAIN_WEIGHTS
        .iter()
        .find(|(kind, _)| *kind == domain)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.0)
}

// Callers only ever pass non-empty field lists.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn field_mean(normalized: &NormalizedScore, fields: &[ScoredField]) -> f64 {
    let values: Vec<f64> = fields.iter().map(|field| normalized.value(*field)).collect();
    mean(&values)
}

fn energy_function(normalized: &NormalizedScore) -> f64 {
    let (weighted, total_weight) = ENERGY_FIELD_WEIGHTS.iter().fold(
        (0.0, 0.0),
        |(weighted, total_weight), (field, weight)| {
            (
                weighted + normalized.value(*field) * weight,
                total_weight + weight,
            )
        },
    );
    weighted / total_weight * PERCENT_PER_POINT
}

fn protective_strength(normalized: &NormalizedScore) -> f64 {
    let mut values = vec![
        normalized.value(ScoredField::SocialSupport),
        normalized.value(ScoredField::CopingSkillsCount),
    ];
    if let Some(purpose) = normalized.purposeful_activities {
        values.push(f64::from(purpose));
    }
    mean(&values) * PERCENT_PER_POINT
}

/// Derive the five domain scores from normalized answers.
pub fn aggregate_domains(normalized: &NormalizedScore) -> DomainScore {
    DomainScore {
        mood_stability: field_mean(normalized, &MOOD_FIELDS) * PERCENT_PER_POINT,
        energy_function: energy_function(normalized),
        social_engagement: field_mean(normalized, &SOCIAL_FIELDS) * PERCENT_PER_POINT,
        cognitive_flexibility: field_mean(normalized, &COGNITIVE_FIELDS) * PERCENT_PER_POINT,
        protective_strength: protective_strength(normalized),
    }
}

/// Weighted composite of the domain scores, rounded to one decimal.
pub fn composite_index(domains: &DomainScore) -> f64 {
    let weighted: f64 = DOMAIN_WEIGHTS
        .iter()
        .map(|(domain, weight)| domains.get(*domain) * weight)
        .sum();
    round_to(weighted, 1)
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub(crate) fn ensure_within_bounds(domains: &DomainScore) -> Result<(), AssessmentError> {
    for domain in DomainKind::ordered() {
        let value = domains.get(domain);
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(AssessmentError::DomainOutOfRange {
                domain: domain.key(),
                value,
            });
        }
    }
    Ok(())
}
