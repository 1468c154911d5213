pub mod examples;
pub mod handlers;
pub mod models;
pub mod router;
pub mod sessions;
pub mod state;

pub use router::app;
