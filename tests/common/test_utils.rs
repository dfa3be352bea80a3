use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use triage_gateway::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    llm::InferenceProvider,
    server::{self, handlers::AppState},
    triage::TriageService,
};

use super::MockProvider;

pub const TEST_MODEL: &str = "gpt-5-mini";

/// 1x1 transparent PNG
pub const TINY_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            body_limit_bytes: 10 * 1024 * 1024,
            redact_provider_errors: false,
        },
        llm: LlmConfig {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: TEST_MODEL.to_string(),
        },
    }
}

/// Router backed by an arbitrary provider
pub fn create_app_with_provider(provider: Arc<dyn InferenceProvider>, redact: bool) -> Router {
    let config = create_test_config();
    let state = AppState {
        triage: Arc::new(TriageService::new(provider, config.llm.model.clone())),
        redact_provider_errors: redact,
    };
    server::router(state, config.server.body_limit_bytes)
}

/// Router backed by a mock provider
pub fn create_test_app(provider: MockProvider) -> Router {
    create_app_with_provider(Arc::new(provider), false)
}

pub async fn send_json(app: Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    read_json(response).await
}

pub async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
