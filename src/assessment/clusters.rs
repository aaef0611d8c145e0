use super::domain::{Cluster, ClusterResult, DomainScore, NormalizedScore, ScoredField};
use super::domains::round_to;

const CONFIDENCE_CEILING: f64 = 1.0;
const SCALE_MAX: f64 = 5.0;

/// Distance of a 1-5 score from the top of the scale.
fn deficit(normalized: &NormalizedScore, field: ScoredField) -> f64 {
    SCALE_MAX - normalized.value(field)
}

fn inverted_affinity(normalized: &NormalizedScore, terms: [(ScoredField, f64); 3]) -> f64 {
    let score: f64 = terms
        .iter()
        .map(|(field, weight)| deficit(normalized, *field) * weight)
        .sum();
    score / SCALE_MAX
}

fn resilient_affinity(normalized: &NormalizedScore, domains: &DomainScore) -> f64 {
    (domains.protective_strength / 100.0) * 0.5
        + (normalized.value(ScoredField::SocialSupport) / SCALE_MAX) * 0.3
        + (normalized.value(ScoredField::CopingSkillsCount) / SCALE_MAX) * 0.2
}

/// Raw affinity per cluster, in tie-break order.
///
/// The four deficit-based affinities peak at 0.8; only the resilient affinity can reach 1.0.
pub fn cluster_affinities(
    normalized: &NormalizedScore,
    domains: &DomainScore,
) -> [(Cluster, f64); 5] {
    [
        (
            Cluster::AffectiveLow,
            inverted_affinity(
                normalized,
                [
                    (ScoredField::SleepQuality, 0.3),
                    (ScoredField::PrimaryAffect, 0.4),
                    (ScoredField::EnergyLevel, 0.3),
                ],
            ),
        ),
        (
            Cluster::Anxiety,
            inverted_affinity(
                normalized,
                [
                    (ScoredField::BeliefControl, 0.4),
                    (ScoredField::BeliefSafety, 0.3),
                    (ScoredField::FocusLevel, 0.3),
                ],
            ),
        ),
        (
            Cluster::Burnout,
            inverted_affinity(
                normalized,
                [
                    (ScoredField::FocusLevel, 0.4),
                    (ScoredField::EnergyLevel, 0.4),
                    (ScoredField::SocialWithdrawal, 0.2),
                ],
            ),
        ),
        (
            Cluster::StressOverload,
            inverted_affinity(
                normalized,
                [
                    (ScoredField::BeliefControl, 0.4),
                    (ScoredField::BeliefIntimacy, 0.3),
                    (ScoredField::BeliefTrust, 0.3),
                ],
            ),
        ),
        (Cluster::Resilient, resilient_affinity(normalized, domains)),
    ]
}

/// Pick the strictly highest affinity; earlier entries win ties.
pub fn select_cluster(affinities: &[(Cluster, f64); 5]) -> ClusterResult {
    let mut best = affinities[0];
    for candidate in &affinities[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }

    ClusterResult {
        cluster: best.0,
        confidence: round_to(best.1.min(CONFIDENCE_CEILING), 2),
    }
}

/// Classify the respondent into the best-fit emotional pattern.
pub fn classify_cluster(normalized: &NormalizedScore, domains: &DomainScore) -> ClusterResult {
    select_cluster(&cluster_affinities(normalized, domains))
}
