use crate::models::{
    ApiError, ExamplesResponse, HealthResponse, PredictData, PredictRequest, PredictResponse,
    SessionCreatedResponse, SessionData, SessionResponse, SessionUpdateRequest,
};
use crate::sessions::ReviewSession;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use reviewsense_core::{Sentiment, normalize};
use std::sync::Arc;
use uuid::Uuid;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Reviewsense API is running".to_string(),
    })
}

pub async fn predict_sentiment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    // Validation on the raw text: normalization and the model are skipped
    // entirely for empty input.
    if request.text.trim().is_empty() {
        return Json(PredictResponse {
            status: "error".to_string(),
            data: None,
            error: Some(ApiError {
                error_type: "empty_input".to_string(),
                message: "No input provided. Please enter a review.".to_string(),
            }),
        });
    }

    let normalized = normalize(&request.text);
    let inputs = [normalized.clone()];

    let label = state.model.predict(&inputs)[0];
    let sentiment = match Sentiment::from_label(label) {
        Some(sentiment) => sentiment,
        None => {
            return Json(PredictResponse {
                status: "error".to_string(),
                data: None,
                error: Some(ApiError {
                    error_type: "unexpected_label".to_string(),
                    message: format!("Model returned label {label} outside {{0, 1}}"),
                }),
            });
        }
    };

    let confidence = state
        .model
        .predict_proba(&inputs)
        .first()
        .map(|[negative, positive]| negative.max(*positive) * 100.0);

    Json(PredictResponse {
        status: "ok".to_string(),
        data: Some(PredictData {
            sentiment,
            label,
            confidence,
            normalized_text: normalized,
        }),
        error: None,
    })
}

pub async fn list_examples(State(state): State<Arc<AppState>>) -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: state.examples.clone(),
        count: state.examples.len(),
    })
}

pub async fn create_session(State(state): State<Arc<AppState>>) -> Json<SessionCreatedResponse> {
    let session_id = state.sessions.create().await;
    Json(SessionCreatedResponse { session_id })
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Json<SessionResponse> {
    match state.sessions.get(session_id).await {
        Some(session) => Json(session_response(session_id, session)),
        None => Json(session_not_found(session_id)),
    }
}

pub async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SessionUpdateRequest>,
) -> Json<SessionResponse> {
    let Some(mut session) = state.sessions.get(session_id).await else {
        return Json(session_not_found(session_id));
    };

    if let Some(example_id) = request.example_id {
        let Some(&index) = state.example_lookup.get(&example_id) else {
            return Json(SessionResponse {
                status: "error".to_string(),
                data: None,
                error: Some(ApiError {
                    error_type: "unknown_example".to_string(),
                    message: format!("No example with id '{example_id}'"),
                }),
            });
        };

        session.draft = state.examples[index].text.clone();
        session.selected_example = Some(example_id);
    } else if let Some(text) = request.text {
        session.draft = text;
        session.selected_example = None;
    }

    state.sessions.update(session_id, session.clone()).await;

    Json(session_response(session_id, session))
}

fn session_response(session_id: Uuid, session: ReviewSession) -> SessionResponse {
    SessionResponse {
        status: "ok".to_string(),
        data: Some(SessionData {
            session_id,
            selected_example: session.selected_example,
            draft: session.draft,
        }),
        error: None,
    }
}

fn session_not_found(session_id: Uuid) -> SessionResponse {
    SessionResponse {
        status: "error".to_string(),
        data: None,
        error: Some(ApiError {
            error_type: "unknown_session".to_string(),
            message: format!("No session with id '{session_id}'"),
        }),
    }
}
