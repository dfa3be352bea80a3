use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::config::{Config as _, OpenAIConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn create_response(&self, request: ResponseRequest) -> Result<ProviderResponse>;
}

/// Client for an OpenAI-compatible `/responses` endpoint.
///
/// `async-openai` supplies the base URL and auth headers; the body is sent
/// with our own wire types because the image part uses the provider's
/// `image_base64` field.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: OpenAIConfig,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.trim_end_matches('/'));
        }

        Self {
            http: reqwest::Client::new(),
            config: openai_config,
        }
    }

    pub fn responses_url(&self) -> String {
        self.config.url("/responses")
    }
}

#[async_trait]
impl InferenceProvider for OpenAiClient {
    async fn create_response(&self, request: ResponseRequest) -> Result<ProviderResponse> {
        debug!(
            "Creating response with model {} ({} input messages)",
            request.model,
            request.input.len()
        );

        let response = self
            .http
            .post(self.responses_url())
            .headers(self.config.headers())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::provider(format!(
                "Error code: {} - {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: ProviderResponse = serde_json::from_str(&body)?;

        debug!("Received provider response {:?}", parsed.id);

        Ok(parsed)
    }
}
