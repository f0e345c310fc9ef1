//! Error types and handling for the Yatra service

use thiserror::Error;

use crate::llm::GenerationError;

/// Message returned to callers when required request fields are absent
pub const MISSING_FIELDS_MESSAGE: &str = "City and interests are required";

/// Message returned to callers when the request body cannot be decoded
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Message returned to callers when the request body exceeds the limit
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Message returned to callers for any upstream generation failure
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate itinerary";

/// Main error type for the Yatra service
#[derive(Error, Debug)]
pub enum YatraError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Client input errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Request body over the accepted size
    #[error("Request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// Upstream model failures
    #[error("Generation error: {source}")]
    Generation {
        #[from]
        source: GenerationError,
    },
}

impl YatraError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the caller, rather than the service, is at fault
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            YatraError::Validation { .. } | YatraError::BodyTooLarge { .. }
        )
    }

    /// Get a user-facing error message.
    ///
    /// Generation failures collapse to one fixed message so upstream detail
    /// never reaches the caller.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            YatraError::Config { .. } => {
                "Service is misconfigured. Please contact the operator.".to_string()
            }
            YatraError::Validation { message } => message.clone(),
            YatraError::BodyTooLarge { .. } => BODY_TOO_LARGE_MESSAGE.to_string(),
            YatraError::Generation { .. } => GENERATION_FAILED_MESSAGE.to_string(),
        }
    }
}
