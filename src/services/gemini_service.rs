use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::prompts::HEALTH_CHECK_PROMPT,
    errors::{AppError, AppResult},
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Operational safeguard only; no contract depends on the exact value.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub ok: bool,
    pub message: String,
}

/// Abstraction over the generative model so the quiz pipeline can be
/// exercised without a live credential.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> AppResult<String>;

    async fn generate_text_with_image(
        &self,
        prompt: &str,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> AppResult<String>;

    async fn check_health(&self) -> HealthStatus;
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Thin client for the Gemini `generateContent` endpoint. One instance lives
/// for the whole process and holds the API credential.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: SecretString,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        })
    }

    async fn generate(&self, parts: Vec<RequestPart>, json_reply: bool) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            GEMINI_API_BASE, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![RequestContent { parts }],
            generation_config: json_reply.then_some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ModelUnavailable(format!("Gemini API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ModelUnavailable(format!(
                "Gemini API returned {}: {}",
                status, body
            )));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::ModelUnavailable(format!("Gemini API reply was unreadable: {}", e))
        })?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::ModelUnavailable(
                "Gemini API returned no candidates".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> AppResult<String> {
        self.generate(
            vec![RequestPart::Text {
                text: prompt.to_string(),
            }],
            true,
        )
        .await
    }

    async fn generate_text_with_image(
        &self,
        prompt: &str,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> AppResult<String> {
        let parts = vec![
            RequestPart::Text {
                text: prompt.to_string(),
            },
            RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.to_string(),
                    data: BASE64.encode(image_bytes),
                },
            },
        ];

        // Image calls return prose (a description), not JSON.
        self.generate(parts, false).await
    }

    async fn check_health(&self) -> HealthStatus {
        let probe = self
            .generate(
                vec![RequestPart::Text {
                    text: HEALTH_CHECK_PROMPT.to_string(),
                }],
                false,
            )
            .await;

        match probe {
            Ok(_) => HealthStatus {
                ok: true,
                message: "connected".to_string(),
            },
            Err(e) => {
                log::error!("Gemini API connection check failed: {}", e);
                HealthStatus {
                    ok: false,
                    message: e.to_string(),
                }
            }
        }
    }
}
