//! Cohere chat adapter

use super::http::{base_url, post_json};
use async_trait::async_trait;
use panel_application::{CompletionRequest, GatewayError, LlmClient};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.cohere.com";

pub struct CohereClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl CohereClient {
    pub fn new(http: Client, api_key: String, base_url_override: Option<&str>) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url(base_url_override, DEFAULT_BASE_URL),
        }
    }

    fn body(request: &CompletionRequest) -> ChatRequest<'_> {
        ChatRequest {
            model: &request.model,
            message: &request.prompt,
            preamble: &request.system,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    message: &'a str,
    preamble: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    text: String,
}

#[async_trait]
impl LlmClient for CohereClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let builder = self
            .http
            .post(format!("{}/v1/chat", self.base_url))
            .bearer_auth(&self.api_key);

        let response: ChatResponse = post_json(builder, &Self::body(request)).await?;
        Ok(response.text)
    }
}
