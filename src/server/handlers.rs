use super::extract::ApiJson;
use super::types::{EchoRequest, EchoResponse, HealthResponse, TriageRequest, TriageResponse};
use crate::{Error, triage::TriageService};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::info;

const REDACTED_DETAIL: &str = "Internal server error";

#[derive(Clone)]
pub struct AppState {
    pub triage: Arc<TriageService>,
    pub redact_provider_errors: bool,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn echo(ApiJson(request): ApiJson<EchoRequest>) -> Json<EchoResponse> {
    Json(EchoResponse {
        echo: request.message,
    })
}

pub async fn triage(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TriageRequest>,
) -> Result<Json<TriageResponse>, Error> {
    info!(
        "Received triage request (prompt: {} chars, image: {} chars)",
        request.prompt.len(),
        request.image_base64.len()
    );

    match state
        .triage
        .analyze(&request.prompt, &request.image_base64)
        .await
    {
        Ok(analysis) => {
            info!("Triage completed, response id: {:?}", analysis.response_id);
            Ok(Json(TriageResponse {
                analysis: analysis.text,
                response_id: analysis.response_id,
            }))
        }
        Err(Error::Provider(_)) if state.redact_provider_errors => {
            Err(Error::provider(REDACTED_DETAIL))
        }
        Err(e) => Err(e),
    }
}
