//! Shared HTTP plumbing for the provider adapters.

use panel_application::GatewayError;
use panel_domain::core::string::{single_line, truncate};
use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

const MAX_ERROR_BODY: usize = 300;

/// POST `body` as JSON and decode a successful JSON response.
///
/// Non-2xx statuses become [`GatewayError::RateLimited`] (429) or
/// [`GatewayError::ApiError`]; bodies that do not decode become
/// [`GatewayError::MalformedResponse`].
pub(crate) async fn post_json<B, R>(builder: RequestBuilder, body: &B) -> Result<R, GatewayError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = builder.json(body).send().await.map_err(transport_error)?;
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        return Err(status_error(status.as_u16(), &text));
    }

    serde_json::from_str(&text).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}

pub(crate) fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

pub(crate) fn status_error(status: u16, body: &str) -> GatewayError {
    let message = error_message(body);
    match status {
        429 => GatewayError::RateLimited(message),
        _ => GatewayError::ApiError { status, message },
    }
}

/// Pull a human-readable message out of a provider error body.
///
/// Understands `{"error": {"message": ..}}` (OpenAI, Anthropic, Gemini),
/// `{"message": ..}` (Cohere) and `{"error": ".."}`; anything else is
/// returned as a truncated single line.
fn error_message(body: &str) -> String {
    if body.trim().is_empty() {
        return "empty response body".to_string();
    }

    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .or_else(|| v.get("message"))
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| truncate(&single_line(body), MAX_ERROR_BODY))
}

/// Resolve an optional configured base URL, trimming any trailing slash
pub(crate) fn base_url(configured: Option<&str>, default: &str) -> String {
    configured.unwrap_or(default).trim_end_matches('/').to_string()
}
