use super::domain::{CopingSkills, NormalizedScore, RawResponse, ScoredField};

/// Score used for missing, empty, or unrecognized answers.
pub const NEUTRAL_SCORE: u8 = 3;

const MAX_COPING_SKILLS: usize = 5;
const PURPOSE_DESCRIBED_SCORE: u8 = 4;

const SLEEP_QUALITY: &[(&str, u8)] = &[
    ("pretty_good", 4),
    ("average", 3),
    ("not_great", 2),
    ("terrible", 1),
    ("prefer_not_to_say", 3),
];

const ENERGY_LEVEL: &[(&str, u8)] = &[
    ("high", 5),
    ("medium", 3),
    ("low", 2),
    ("drained", 1),
    ("prefer_not_to_say", 3),
];

const FOCUS_LEVEL: &[(&str, u8)] = &[
    ("sharp_as_usual", 5),
    ("a_bit_off", 3),
    ("very_hard", 1),
    ("prefer_not_to_say", 3),
];

const SOCIAL_WITHDRAWAL: &[(&str, u8)] = &[
    ("no", 5),
    ("sometimes", 3),
    ("quite_often", 2),
    ("almost_always", 1),
    ("prefer_not_to_say", 3),
];

const APPETITE_CHANGE: &[(&str, u8)] = &[
    ("normal", 4),
    ("less", 2),
    ("more", 3),
    ("cant_tell", 3),
    ("prefer_not_to_say", 3),
];

const PRIMARY_AFFECT: &[(&str, u8)] = &[
    ("tired", 2),
    ("okay", 3),
    ("anxious", 2),
    ("numb", 1),
    ("overwhelmed", 1),
    ("peaceful", 4),
    ("motivated", 4),
    ("sad", 2),
    ("other", 3),
];

const AFFECT_DURATION: &[(&str, u8)] = &[("comes_and_goes", 3), ("weeks", 2), ("hard_to_tell", 3)];

const BELIEF_SAFETY: &[(&str, u8)] = &[
    ("yes", 5),
    ("sometimes", 3),
    ("rarely", 1),
    ("prefer_not_to_say", 3),
];

const BELIEF_TRUST: &[(&str, u8)] = &[
    ("yes", 5),
    ("depends", 3),
    ("not_really", 1),
    ("prefer_not_to_say", 3),
];

const BELIEF_CONTROL: &[(&str, u8)] = &[
    ("mostly_yes", 5),
    ("sometimes", 3),
    ("not_much", 1),
    ("prefer_not_to_say", 3),
];

const BELIEF_SELF: &[(&str, u8)] = &[
    ("kind", 5),
    ("depends", 3),
    ("very_critical", 1),
    ("prefer_not_to_say", 3),
];

const BELIEF_INTIMACY: &[(&str, u8)] = &[
    ("easy", 5),
    ("a_bit_hard", 3),
    ("very_difficult", 1),
    ("prefer_not_to_say", 3),
];

const SOCIAL_SUPPORT: &[(&str, u8)] = &[
    ("yes_definitely", 5),
    ("maybe_one_or_two", 3),
    ("not_really", 1),
    ("prefer_not_to_say", 3),
];

/// Answer-to-score table for a categorical field. Coping skills are counted, not looked up.
fn scale(field: ScoredField) -> &'static [(&'static str, u8)] {
    match field {
        ScoredField::SleepQuality => SLEEP_QUALITY,
        ScoredField::EnergyLevel => ENERGY_LEVEL,
        ScoredField::FocusLevel => FOCUS_LEVEL,
        ScoredField::SocialWithdrawal => SOCIAL_WITHDRAWAL,
        ScoredField::AppetiteChange => APPETITE_CHANGE,
        ScoredField::PrimaryAffect => PRIMARY_AFFECT,
        ScoredField::AffectDuration => AFFECT_DURATION,
        ScoredField::BeliefSafety => BELIEF_SAFETY,
        ScoredField::BeliefTrust => BELIEF_TRUST,
        ScoredField::BeliefControl => BELIEF_CONTROL,
        ScoredField::BeliefSelf => BELIEF_SELF,
        ScoredField::BeliefIntimacy => BELIEF_INTIMACY,
        ScoredField::SocialSupport => SOCIAL_SUPPORT,
        ScoredField::CopingSkillsCount => &[],
    }
}

/// Look up a single categorical answer, falling back to [`NEUTRAL_SCORE`].
pub fn score_answer(field: ScoredField, answer: Option<&str>) -> u8 {
    answer
        .and_then(|value| {
            scale(field)
                .iter()
                .find(|(candidate, _)| *candidate == value)
                .map(|(_, score)| *score)
        })
        .unwrap_or(NEUTRAL_SCORE)
}

fn coping_skills_count(answer: Option<&CopingSkills>) -> u8 {
    match answer {
        // An empty list still sits on the 1-5 scale.
        Some(CopingSkills::Listed(skills)) => skills.len().clamp(1, MAX_COPING_SKILLS) as u8,
        Some(CopingSkills::Unstructured(_)) | None => NEUTRAL_SCORE,
    }
}

fn purposeful_activities(answer: Option<&str>) -> Option<u8> {
    answer
        .filter(|text| !text.trim().is_empty())
        .map(|_| PURPOSE_DESCRIBED_SCORE)
}

/// Map every scored field onto the shared 1-5 scale.
pub fn normalize(response: &RawResponse) -> NormalizedScore {
    let score = |field: ScoredField| score_answer(field, response.answer(field));

    NormalizedScore {
        sleep_quality: score(ScoredField::SleepQuality),
        energy_level: score(ScoredField::EnergyLevel),
        focus_level: score(ScoredField::FocusLevel),
        social_withdrawal: score(ScoredField::SocialWithdrawal),
        appetite_change: score(ScoredField::AppetiteChange),
        primary_affect: score(ScoredField::PrimaryAffect),
        affect_duration: score(ScoredField::AffectDuration),
        belief_safety: score(ScoredField::BeliefSafety),
        belief_trust: score(ScoredField::BeliefTrust),
        belief_control: score(ScoredField::BeliefControl),
        belief_self: score(ScoredField::BeliefSelf),
        belief_intimacy: score(ScoredField::BeliefIntimacy),
        social_support: score(ScoredField::SocialSupport),
        coping_skills_count: coping_skills_count(response.coping_skills.as_ref()),
        purposeful_activities: purposeful_activities(response.purposeful_activities.as_deref()),
    }
}
