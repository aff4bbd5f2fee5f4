/// LLM Client: the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All generative calls MUST go through `GenerativeService`.
///
/// Models are hardcoded. Do not make configurable to prevent drift.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod recovery;
#[cfg(test)]
pub mod testing;

/// Model used for the text audit (supports search grounding).
pub const REPORT_MODEL: &str = "gemini-2.5-pro";
/// Model used for placeholder image generation.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const REPORT_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Inline binary image returned by the image model.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload as returned by the API.
    pub data: String,
}

impl InlineImage {
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// The generative backend seam. `GeminiClient` in production; tests script it.
///
/// Carried in `AppState` as `Arc<dyn GenerativeService>`.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Sends `prompt` under `system` and returns the model's text reply.
    async fn generate_text(&self, prompt: &str, system: &str) -> Result<String, LlmError>;

    /// Requests one image. `Ok(None)` when the reply carried no image part.
    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    response_modalities: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &ResponsePart> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter())
            .into_iter()
            .flatten()
    }

    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let text: String = self.parts().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }

    /// First inline image of the first candidate.
    pub fn first_image(&self) -> Option<InlineImage> {
        self.parts()
            .find_map(|p| p.inline_data.as_ref())
            .map(|d| InlineImage {
                mime_type: d.mime_type.clone(),
                data: d.data.clone(),
            })
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the Gemini `generateContent` REST endpoint.
/// One attempt per call: the audit surfaces failures to the user instead of retrying.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    /// `timeout` of `None` leaves calls unbounded.
    pub fn new(
        api_key: String,
        api_base: String,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Makes a raw `generateContent` call against `model`.
    async fn call(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.api_base, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("Gemini API returned {}: {}", status, message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: model={}, prompt_tokens={}, candidate_tokens={}",
                model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed)
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn generate_text(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![TextPart { text: system }],
            }),
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart { text: prompt }],
            }],
            tools: vec![Tool {
                google_search: serde_json::Map::new(),
            }],
            generation_config: GenerationConfig {
                temperature: Some(REPORT_TEMPERATURE),
                ..Default::default()
            },
        };

        let response = self.call(REPORT_MODEL, &request).await?;
        response.text().ok_or(LlmError::EmptyContent)
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, LlmError> {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart { text: prompt }],
            }],
            tools: Vec::new(),
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE"],
                ..Default::default()
            },
        };

        let response = self.call(IMAGE_MODEL, &request).await?;
        Ok(response.first_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_request_serializes_gemini_shape() {
        let request = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![TextPart { text: "system" }],
            }),
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart { text: "prompt" }],
            }],
            tools: vec![Tool {
                google_search: serde_json::Map::new(),
            }],
            generation_config: GenerationConfig {
                temperature: Some(0.5),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "systemInstruction": {"parts": [{"text": "system"}]},
                "contents": [{"role": "user", "parts": [{"text": "prompt"}]}],
                "tools": [{"google_search": {}}],
                "generationConfig": {"temperature": 0.5}
            })
        );
    }

    #[test]
    fn test_image_request_omits_tools_and_system() {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart { text: "a logo" }],
            }],
            tools: Vec::new(),
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE"],
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("tools").is_none());
        assert!(value.get("systemInstruction").is_none());
        assert_eq!(value["generationConfig"]["responseModalities"][0], "IMAGE");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "{\"a\":"}, {"text": " 1}"}]}}],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4}
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": []})).unwrap();
        assert!(response.text().is_none());
        assert!(response.first_image().is_none());
    }

    #[test]
    fn test_first_image_becomes_data_url() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [
                {"text": "Here is your logo"},
                {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
            ]}}]
        }))
        .unwrap();
        let image = response.first_image().unwrap();
        assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }
}
