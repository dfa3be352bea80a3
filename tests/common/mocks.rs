use async_trait::async_trait;
use triage_gateway::{
    Error, Result,
    llm::{ContentPart, InferenceProvider, ProviderResponse, ResponseRequest},
};
use std::sync::{Arc, Mutex};

/// Mock inference provider for testing
#[derive(Debug, Clone)]
pub struct MockProvider {
    pub responses: Arc<Mutex<Vec<ProviderResponse>>>,
    pub requests: Arc<Mutex<Vec<ResponseRequest>>>,
    pub error: Option<String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<ProviderResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<ResponseRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceProvider for MockProvider {
    async fn create_response(&self, request: ResponseRequest) -> Result<ProviderResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::provider("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider response with plain `output_text`
pub fn create_text_response(id: Option<&str>, text: &str) -> ProviderResponse {
    ProviderResponse {
        id: id.map(str::to_string),
        output_text: Some(text.to_string()),
        output: None,
    }
}

/// Text of the first text part of a recorded request
pub fn first_prompt(request: &ResponseRequest) -> Option<&str> {
    request
        .input
        .iter()
        .flat_map(|message| message.content.iter())
        .find_map(|part| match part {
            ContentPart::Text { text } => Some(text.as_str()),
            ContentPart::InputImage { .. } => None,
        })
}
