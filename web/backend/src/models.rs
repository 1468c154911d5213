use crate::examples::ExampleReview;
use reviewsense_core::Sentiment;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct PredictResponse {
    pub status: String,
    pub data: Option<PredictData>,
    pub error: Option<ApiError>,
}

#[derive(Serialize, Deserialize)]
pub struct PredictData {
    pub sentiment: Sentiment,
    pub label: u8,
    /// Confidence percentage: the maximum component of `predict_proba`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    pub normalized_text: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error_type: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ExamplesResponse {
    pub examples: Vec<ExampleReview>,
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Serialize, Deserialize)]
pub struct SessionResponse {
    pub status: String,
    pub data: Option<SessionData>,
    pub error: Option<ApiError>,
}

#[derive(Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: Uuid,
    pub selected_example: Option<String>,
    pub draft: String,
}

#[derive(Deserialize, Default)]
pub struct SessionUpdateRequest {
    /// Populate the draft from a canned example.
    pub example_id: Option<String>,
    /// Populate the draft with free-form text, clearing any selected example.
    pub text: Option<String>,
}
