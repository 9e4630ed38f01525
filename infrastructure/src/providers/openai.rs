//! OpenAI chat completions adapter

use super::http::{base_url, post_json};
use async_trait::async_trait;
use panel_application::{CompletionRequest, GatewayError, LlmClient};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(http: Client, api_key: String, base_url_override: Option<&str>) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url(base_url_override, DEFAULT_BASE_URL),
        }
    }

    fn body(request: &CompletionRequest) -> ChatCompletionRequest<'_> {
        ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &request.system,
                },
                Message {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    fn text_of(response: ChatCompletionResponse) -> Result<String, GatewayError> {
        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| GatewayError::MalformedResponse("response had no choices".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let builder = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key);

        let response: ChatCompletionResponse = post_json(builder, &Self::body(request)).await?;
        Self::text_of(response)
    }
}
