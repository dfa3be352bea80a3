use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub echo: String,
}

#[derive(Debug, Deserialize)]
pub struct TriageRequest {
    /// Text context describing the patient's concern.
    #[serde(default)]
    pub prompt: String,
    /// Base64 encoded image data, without a data URI prefix.
    pub image_base64: String,
}

#[derive(Debug, Serialize)]
pub struct TriageResponse {
    pub analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
}
