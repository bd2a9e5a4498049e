use crate::config::Settings;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// One outbound call per tool invocation. Implementations do not interpret
/// the payload; success and soft-failure semantics belong to the assembler.
pub trait Transport {
    fn is_credential_invalid(&self) -> bool;

    fn send(&self, route: &str, body: String) -> Result<Value, TransportError>;
}

pub struct WinstonClient {
    http: Client,
    settings: Settings,
}

impl WinstonClient {
    pub fn new(settings: Settings) -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { http, settings })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }
}

impl Transport for WinstonClient {
    fn is_credential_invalid(&self) -> bool {
        self.settings.api_key.is_placeholder()
    }

    fn send(&self, route: &str, body: String) -> Result<Value, TransportError> {
        let url = format!("{}{route}", self.settings.base_url);

        debug!(route, bytes = body.len(), "winston request");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(self.settings.api_key.as_str())
            .body(body)
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
