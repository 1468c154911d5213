use crate::examples::{self, ExampleReview};
use crate::sessions::SessionStore;
use reviewsense_core::SentimentModel;
use rustc_hash::FxHashMap;
use std::path::Path;

pub struct AppState {
    pub model: SentimentModel,
    pub examples: Vec<ExampleReview>,
    pub example_lookup: FxHashMap<String, usize>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let model_path_str = std::env::var("MODEL_PATH")
            .unwrap_or_else(|_| "data/sentiment_model.bin".to_string());

        let model = SentimentModel::load(Path::new(&model_path_str))?;

        tracing::info!(
            "Loaded sentiment model from {model_path_str} ({} vocabulary entries)",
            model.vocabulary.len()
        );

        Ok(Self::with_model(model))
    }

    /// Build state around an already-loaded model. Used by `new` and by tests
    /// that construct the artifact in memory.
    pub fn with_model(model: SentimentModel) -> Self {
        let examples = examples::builtin_examples();
        let example_lookup = examples
            .iter()
            .enumerate()
            .map(|(index, example)| (example.id.clone(), index))
            .collect();

        Self {
            model,
            examples,
            example_lookup,
            sessions: SessionStore::new(),
        }
    }
}
