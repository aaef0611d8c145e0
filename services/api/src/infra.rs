use metrics_exporter_prometheus::PrometheusHandle;
use onboarding_insights::assessment::{AssessmentEngine, GeminiGenerator, RawResponse};
use onboarding_insights::config::SummaryConfig;
use onboarding_insights::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine wired to the configured summary generator, or to templates only.
pub(crate) fn build_engine(config: &SummaryConfig) -> Arc<AssessmentEngine> {
    if !config.is_enabled() {
        info!("GEMINI_API_KEY not set; summaries use templates");
        return Arc::new(AssessmentEngine::offline());
    }

    match GeminiGenerator::from_config(config) {
        Ok(generator) => {
            info!(model = %config.model, "summary generation enabled");
            Arc::new(AssessmentEngine::new(Arc::new(generator)))
        }
        Err(error) => {
            warn!(%error, "summary generator unavailable; summaries use templates");
            Arc::new(AssessmentEngine::offline())
        }
    }
}

pub(crate) fn read_response(path: &Path) -> Result<RawResponse, AppError> {
    let raw = std::fs::read_to_string(path)?;
    RawResponse::from_json_str(&raw).map_err(AppError::input)
}
