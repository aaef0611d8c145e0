use std::fmt::Debug;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::SummaryConfig;

/// Reply prefixes that signal the generator failed even though it returned text.
pub const FAILURE_SENTINELS: [&str; 2] = ["AI service not configured", "AI service error"];

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("text generation is not configured")]
    NotConfigured,
    #[error("text generation timed out after {0:?}")]
    Timeout(Duration),
    #[error("text generation transport failed: {0}")]
    Transport(String),
    #[error("text generation returned HTTP {status}")]
    Status { status: u16 },
    #[error("text generation returned an unusable payload: {0}")]
    MalformedResponse(String),
}

/// Best-effort free-text generator consulted once per assessment.
pub trait TextGenerator: Debug + Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// True when the reply is blank or carries one of the [`FAILURE_SENTINELS`].
pub fn is_failure_reply(reply: &str) -> bool {
    let trimmed = reply.trim();
    trimmed.is_empty()
        || FAILURE_SENTINELS
            .iter()
            .any(|sentinel| trimmed.starts_with(sentinel))
}

/// Generator used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

impl TextGenerator for DisabledGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::NotConfigured)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Blocking client for the Gemini `generateContent` endpoint.
///
/// Must not be driven from inside an async task; HTTP handlers hand the whole assessment to
/// the blocking pool.
pub struct GeminiGenerator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiGenerator {
    pub fn from_config(config: &SummaryConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::NotConfigured)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            timeout: config.timeout,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    fn map_transport(&self, err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::Timeout(self.timeout)
        } else {
            // The request URL embeds the API key.
            GenerationError::Transport(err.without_url().to_string())
        }
    }
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl TextGenerator for GeminiGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.request_url())
            .json(&request)
            .send()
            .map_err(|err| self.map_transport(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .map_err(|err| GenerationError::MalformedResponse(err.without_url().to_string()))?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| GenerationError::MalformedResponse("no candidates returned".to_string()))
    }
}
