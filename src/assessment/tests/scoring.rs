use approx::assert_relative_eq;

use super::common::*;

use crate::assessment::{
    aggregate_domains, composite_index, DomainKind, DomainScore, NormalizedScore, RawResponse,
    DOMAIN_WEIGHTS,
};

#[test]
fn domain_weights_sum_to_one() {
    let total: f64 = DOMAIN_WEIGHTS.iter().map(|(_, weight)| weight).sum();
    assert!((total - 1.0).abs() < 1e-12);

    let covered: Vec<DomainKind> = DOMAIN_WEIGHTS.iter().map(|(domain, _)| *domain).collect();
    assert_eq!(covered, DomainKind::ordered().to_vec());
}

#[test]
fn empty_response_yields_sixty_everywhere() {
    let domains = aggregate_domains(&normalized(&RawResponse::default()));

    for domain in DomainKind::ordered() {
        assert_relative_eq!(domains.get(domain), 60.0, epsilon = 1e-9);
    }
    assert_eq!(composite_index(&domains), 60.0);
}

#[test]
fn thriving_response_domains() {
    let domains = aggregate_domains(&normalized(&thriving_response()));

    assert_relative_eq!(domains.mood_stability, 220.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(domains.energy_function, 27.3 / 5.9 * 20.0, epsilon = 1e-9);
    assert_relative_eq!(domains.social_engagement, 100.0, epsilon = 1e-9);
    assert_relative_eq!(domains.cognitive_flexibility, 100.0, epsilon = 1e-9);
    // Purposeful activities joins the protective mean as a third term.
    assert_relative_eq!(domains.protective_strength, 260.0 / 3.0, epsilon = 1e-9);
    assert_eq!(composite_index(&domains), 89.8);
}

#[test]
fn distressed_response_domains() {
    let domains = aggregate_domains(&normalized(&distressed_response()));

    assert_relative_eq!(domains.mood_stability, 80.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(domains.energy_function, 6.9 / 5.9 * 20.0, epsilon = 1e-9);
    assert_relative_eq!(domains.social_engagement, 20.0, epsilon = 1e-9);
    assert_relative_eq!(domains.cognitive_flexibility, 20.0, epsilon = 1e-9);
    assert_relative_eq!(domains.protective_strength, 20.0, epsilon = 1e-9);
    assert_eq!(composite_index(&domains), 22.3);
}

#[test]
fn composite_reaches_scale_bounds() {
    assert_eq!(composite_index(&DomainScore::uniform(0.0)), 0.0);
    assert_eq!(composite_index(&DomainScore::uniform(100.0)), 100.0);
}

#[test]
fn uniform_low_answers_floor_every_domain_at_twenty() {
    let scores = NormalizedScore::uniform(1);

    let domains = aggregate_domains(&scores);
    for domain in DomainKind::ordered() {
        assert_relative_eq!(domains.get(domain), 20.0, epsilon = 1e-9);
    }
    assert_eq!(composite_index(&domains), 20.0);
}
