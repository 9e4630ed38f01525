//! Google Gemini generateContent adapter

use super::http::{base_url, post_json};
use async_trait::async_trait;
use panel_application::{CompletionRequest, GatewayError, LlmClient};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(http: Client, api_key: String, base_url_override: Option<&str>) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url(base_url_override, DEFAULT_BASE_URL),
        }
    }

    fn body(request: &CompletionRequest) -> GenerateContentRequest<'_> {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system,
                }],
            },
            generation_config: GenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            },
        }
    }

    /// `{base}/v1beta/models/{model}:generateContent`, with the model id
    /// percent-encoded as a single path segment
    fn endpoint(&self, model: &str) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            GatewayError::Other(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::Other(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(["v1beta", "models", format!("{}:generateContent", model).as_str()]);
        Ok(url)
    }

    fn text_of(response: GenerateContentResponse) -> Result<String, GatewayError> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(GatewayError::MalformedResponse(format!(
                "response had no candidates ({})",
                reason
            )));
        };

        Ok(candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let builder = self
            .http
            .post(self.endpoint(&request.model)?)
            .header("x-goog-api-key", &self.api_key);

        let response: GenerateContentResponse = post_json(builder, &Self::body(request)).await?;
        Self::text_of(response)
    }
}
