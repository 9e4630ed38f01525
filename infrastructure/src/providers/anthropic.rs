//! Anthropic Messages API adapter

use super::http::{base_url, post_json};
use async_trait::async_trait;
use panel_application::{CompletionRequest, GatewayError, LlmClient};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(http: Client, api_key: String, base_url_override: Option<&str>) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url(base_url_override, DEFAULT_BASE_URL),
        }
    }

    fn body(request: &CompletionRequest) -> MessagesRequest<'_> {
        MessagesRequest {
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: &request.system,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        }
    }

    /// Concatenate the text blocks of a response
    fn text_of(response: MessagesResponse) -> String {
        response
            .content
            .into_iter()
            .filter(|b| b.kind == "text")
            .filter_map(|b| b.text)
            .collect::<Vec<_>>()
            .join("")
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let builder = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION);

        let response: MessagesResponse = post_json(builder, &Self::body(request)).await?;
        Ok(Self::text_of(response))
    }
}
