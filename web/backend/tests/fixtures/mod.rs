use axum::Router;
use reviewsense_core::SentimentModel;
use reviewsense_web::{app, state::AppState};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Small keyword model: positive words push the score above zero, negative
/// words push it below, and the intercept biases empty text to negative.
pub fn keyword_model() -> SentimentModel {
    let mut vocabulary = FxHashMap::default();
    vocabulary.insert("brilliant".to_string(), 4.0);
    vocabulary.insert("great".to_string(), 2.5);
    vocabulary.insert("stunning".to_string(), 2.0);
    vocabulary.insert("best".to_string(), 1.5);
    vocabulary.insert("terrible".to_string(), -3.0);
    vocabulary.insert("boring".to_string(), -2.0);
    vocabulary.insert("waste".to_string(), -2.0);

    SentimentModel {
        vocabulary,
        intercept: -1.0,
    }
}

pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::with_model(keyword_model()))
}

/// Full application router over the keyword model, for tests that drive the
/// app through `oneshot`.
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let state = create_test_state();
    (app(state.clone()), state)
}
