pub mod model;
pub mod text_normalization;

// Re-export commonly used items
pub use model::{ModelError, Sentiment, SentimentModel};
pub use text_normalization::normalize;
