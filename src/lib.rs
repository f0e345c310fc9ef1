//! `Yatra` - Budget-safe India travel itineraries
//!
//! This library turns a trip request into a prompt for a chat-completion
//! model, calls the model and normalizes its cost labels and budget notes
//! before the text is returned over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod llm;
pub mod logging;
pub mod models;
pub mod web;

// Re-export core types for public API
pub use config::YatraConfig;
pub use error::YatraError;
pub use itinerary::ItineraryPlanner;
pub use llm::{ChatPrompt, CompletionProvider, GenerationError, GroqClient};
pub use models::{Coordinates, TravellerLocation, TripParameters, TripRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, YatraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
