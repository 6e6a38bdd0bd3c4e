use std::time::Duration;

use advisor_core::EndpointConfig;
use advisor_core::model::SubmissionPayload;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::RequestError;

/// One network round trip to the recommendation backend.
///
/// Implementations perform no retries; the controller treats each call as
/// at-most-once.
#[async_trait]
pub trait RequestClient: Send + Sync {
    async fn send(&self, payload: &SubmissionPayload) -> Result<String, RequestError>;
}

#[derive(Clone, Debug)]
pub struct HttpRequestClient {
    client: Client,
    endpoint: EndpointConfig,
}

impl HttpRequestClient {
    #[must_use]
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Build a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Transport` when the HTTP client cannot be built.
    pub fn with_timeout(endpoint: EndpointConfig, timeout: Duration) -> Result<Self, RequestError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Probe the backend's health endpoint.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when the backend is unreachable, answers with a
    /// non-success status, or does not answer `pong`.
    pub async fn ping(&self) -> Result<(), RequestError> {
        let response = self.client.get(self.endpoint.health_url()).send().await?;
        if !response.status().is_success() {
            return Err(RequestError::Status(response.status()));
        }

        let body: HealthResponse = response
            .json()
            .await
            .map_err(|err| RequestError::MalformedBody(err.to_string()))?;
        if body.ping != "pong" {
            return Err(RequestError::MalformedBody(format!(
                "unexpected health reply: {}",
                body.ping
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RequestClient for HttpRequestClient {
    async fn send(&self, payload: &SubmissionPayload) -> Result<String, RequestError> {
        let url = self.endpoint.recommend_url();
        debug!(%url, "posting recommendation request");

        let response = self.client.post(url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(RequestError::Status(response.status()));
        }

        let body = response.text().await?;
        decode_body(&body)
    }
}

/// The backend answers with the generated markdown either as a JSON string or
/// as plain text.
pub(crate) fn decode_body(body: &str) -> Result<String, RequestError> {
    if body.trim().is_empty() {
        return Err(RequestError::EmptyBody);
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) if text.trim().is_empty() => Err(RequestError::EmptyBody),
        Ok(Value::String(text)) => Ok(text),
        Ok(other) => Err(RequestError::MalformedBody(format!(
            "expected text, got {}",
            json_kind(&other)
        ))),
        Err(_) => Ok(body.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    ping: String,
}
