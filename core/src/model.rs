use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, io, path::Path};

pub const NEGATIVE_LABEL: u8 = 0;
pub const POSITIVE_LABEL: u8 = 1;

#[derive(Debug)]
pub enum ModelError {
    Io(io::Error),
    Malformed(bincode::Error),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Io(error) => write!(f, "failed to read model artifact: {error}"),
            ModelError::Malformed(error) => write!(f, "malformed model artifact: {error}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Io(error) => Some(error),
            ModelError::Malformed(error) => Some(error),
        }
    }
}

impl From<io::Error> for ModelError {
    fn from(error: io::Error) -> Self {
        ModelError::Io(error)
    }
}

/// Predicted sentiment label, mapped from the artifact's raw label domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Positive,
}

impl Sentiment {
    /// Raw labels outside {0, 1} are rejected rather than treated as negative.
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            NEGATIVE_LABEL => Some(Sentiment::Negative),
            POSITIVE_LABEL => Some(Sentiment::Positive),
            _ => None,
        }
    }
}

/// Pre-trained binary sentiment classifier, deserialized from a bincode
/// artifact produced by the training pipeline. Opaque to callers: the only
/// surface is `predict` and `predict_proba` over normalized strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentModel {
    pub vocabulary: FxHashMap<String, f32>,
    pub intercept: f32,
}

impl SentimentModel {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path)?;
        bincode::deserialize(&bytes).map_err(ModelError::Malformed)
    }

    /// One label per input: `1` (positive) or `0` (negative).
    pub fn predict(&self, texts: &[String]) -> Vec<u8> {
        texts
            .iter()
            .map(|text| {
                if self.score(text) > 0.0 {
                    POSITIVE_LABEL
                } else {
                    NEGATIVE_LABEL
                }
            })
            .collect()
    }

    /// One `[p_negative, p_positive]` pair per input.
    pub fn predict_proba(&self, texts: &[String]) -> Vec<[f32; 2]> {
        texts
            .iter()
            .map(|text| {
                let positive = sigmoid(self.score(text));
                [1.0 - positive, positive]
            })
            .collect()
    }

    fn score(&self, text: &str) -> f32 {
        text.split_whitespace()
            .filter_map(|token| self.vocabulary.get(token))
            .sum::<f32>()
            + self.intercept
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
