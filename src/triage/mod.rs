mod validation;

pub use validation::{INVALID_IMAGE_MESSAGE, normalize_prompt, validate_image_base64};

use crate::{
    Result,
    llm::{InferenceProvider, ResponseRequest},
};
use std::sync::Arc;
use tracing::{debug, error, warn};

pub const DEFAULT_PROMPT: &str =
    "You are a medical triage assistant. Analyze the photo and provide next steps.";

pub const FALLBACK_ANALYSIS: &str = "No analysis available.";

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub text: String,
    pub response_id: Option<String>,
}

/// Validates triage input and performs the single provider call.
pub struct TriageService {
    provider: Arc<dyn InferenceProvider>,
    model: String,
}

impl TriageService {
    pub fn new(provider: Arc<dyn InferenceProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Returns `Error::Validation` for malformed images and `Error::Provider`
    /// for every other failure.
    pub async fn analyze(&self, prompt: &str, image_base64: &str) -> Result<Analysis> {
        if let Err(e) = validate_image_base64(image_base64) {
            warn!("Rejected triage request: {}", e);
            return Err(e);
        }

        let prompt = normalize_prompt(prompt);
        let request = ResponseRequest::single_turn(&self.model, prompt, image_base64);

        debug!(
            "Sending triage request to provider (model: {}, image: {} chars)",
            self.model,
            image_base64.len()
        );

        let response = self
            .provider
            .create_response(request)
            .await
            .map_err(|e| {
                let e = e.into_provider();
                error!("Provider call failed: {}", e);
                e
            })?;

        let text = response.aggregated_text();
        let text = if text.is_empty() {
            FALLBACK_ANALYSIS.to_string()
        } else {
            text
        };

        Ok(Analysis {
            text,
            response_id: response.id,
        })
    }
}
