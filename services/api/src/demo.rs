use crate::infra::{build_engine, read_response};
use clap::Args;
use onboarding_insights::assessment::{
    AssessmentEngine, AssessmentResult, CopingSkills, DomainKind, OnboardingProfile, RawResponse,
};
use onboarding_insights::config::AppConfig;
use onboarding_insights::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Questionnaire response as a JSON object keyed by question name
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Skip the summary generator and use template summaries
    #[arg(long)]
    pub(crate) offline: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print each assessment as JSON instead of the readable report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { input, offline } = args;

    let engine = if offline {
        Arc::new(AssessmentEngine::offline())
    } else {
        let config = AppConfig::load()?;
        let summary = config.summary;
        tokio::task::spawn_blocking(move || build_engine(&summary))
            .await
            .map_err(std::io::Error::other)?
    };

    let result = tokio::task::spawn_blocking(move || {
        let response = read_response(&input)?;
        Ok::<_, AppError>(engine.assess(&response))
    })
    .await
    .map_err(std::io::Error::other)??;

    let rendered = serde_json::to_string_pretty(&result).map_err(AppError::render)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = AssessmentEngine::offline();

    println!("Onboarding insights demo (template summaries)");
    for (name, response) in sample_respondents() {
        let result = engine.assess(&response);

        if args.json {
            let rendered = serde_json::to_string_pretty(&result).map_err(AppError::render)?;
            println!("\n{name}\n{rendered}");
            continue;
        }

        let profile = OnboardingProfile::from_response(&response, None);
        render_assessment(name, &profile, &result);
    }

    Ok(())
}

fn render_assessment(name: &str, profile: &OnboardingProfile, result: &AssessmentResult) {
    println!("\n{name}");
    println!(
        "- Wellbeing index {:.1} | pattern {} ({:.0}% confidence) | priority {}",
        result.mental_health_index,
        result.cluster_primary.key(),
        result.cluster_confidence * 100.0,
        result.risk_flags.priority_level.label()
    );
    for domain in DomainKind::ordered() {
        println!(
            "  - {}: {:.1}/100",
            domain.label(),
            result.domain_scores.get(domain)
        );
    }
    println!(
        "  Belief themes flagged: {} of 5 | next module: {}",
        profile.cognitive_themes.present_count(),
        profile.next_module
    );
    if result.emergency_mode {
        println!("  EMERGENCY: route to crisis support before continuing onboarding");
    }
    println!("  Summary: {}", result.summary_text);
}

fn answer(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn skills(names: &[&str]) -> Option<CopingSkills> {
    Some(CopingSkills::Listed(
        names.iter().map(|name| name.to_string()).collect(),
    ))
}

pub(crate) fn sample_respondents() -> Vec<(&'static str, RawResponse)> {
    vec![
        (
            "Grounded and connected",
            RawResponse {
                onboarding_level: answer("light"),
                sleep_quality: answer("pretty_good"),
                energy_level: answer("high"),
                focus_level: answer("sharp_as_usual"),
                social_withdrawal: answer("no"),
                appetite_change: answer("normal"),
                primary_affect: answer("motivated"),
                affect_duration: answer("comes_and_goes"),
                belief_safety: answer("yes"),
                belief_trust: answer("yes"),
                belief_control: answer("mostly_yes"),
                belief_self: answer("kind"),
                belief_intimacy: answer("easy"),
                social_support: answer("yes_definitely"),
                coping_skills: skills(&["running", "journaling", "cooking"]),
                purposeful_activities: answer("Coaching a youth football team"),
                suicidal_thoughts: answer("no"),
                start_preference: answer("mood_tracking"),
                ..RawResponse::default()
            },
        ),
        (
            "Running on empty",
            RawResponse {
                employment_status: answer("full_time"),
                sleep_quality: answer("not_great"),
                energy_level: answer("drained"),
                focus_level: answer("very_hard"),
                social_withdrawal: answer("quite_often"),
                appetite_change: answer("less"),
                primary_affect: answer("tired"),
                affect_duration: answer("weeks"),
                belief_safety: answer("yes"),
                belief_trust: answer("depends"),
                belief_control: answer("sometimes"),
                belief_self: answer("depends"),
                belief_intimacy: answer("a_bit_hard"),
                social_support: answer("maybe_one_or_two"),
                coping_skills: skills(&["music"]),
                suicidal_thoughts: answer("no"),
                ..RawResponse::default()
            },
        ),
        (
            "Needs immediate support",
            RawResponse {
                sleep_quality: answer("terrible"),
                energy_level: answer("low"),
                primary_affect: answer("numb"),
                affect_duration: answer("weeks"),
                belief_self: answer("very_critical"),
                social_support: answer("not_really"),
                recent_trauma: answer("yes"),
                suicidal_thoughts: answer("yes_briefly"),
                ..RawResponse::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboarding_insights::assessment::{Cluster, PriorityLevel};

    #[test]
    fn sample_respondents_cover_distinct_outcomes() {
        let engine = AssessmentEngine::offline();
        let results: Vec<AssessmentResult> = sample_respondents()
            .iter()
            .map(|(_, response)| engine.assess(response))
            .collect();

        assert_eq!(results[0].cluster_primary, Cluster::Resilient);
        assert_eq!(results[0].risk_flags.priority_level, PriorityLevel::Stable);
        assert_eq!(results[1].cluster_primary, Cluster::Burnout);
        assert_eq!(
            results[1].risk_flags.priority_level,
            PriorityLevel::ModerateRisk
        );
        assert!(results[2].emergency_mode);
        assert!(results.iter().all(|result| !result.is_fallback()));
    }

    #[test]
    fn demo_runs_offline() {
        run_demo(DemoArgs { json: true }).expect("demo completes");
    }
}
