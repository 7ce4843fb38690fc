//! Error taxonomy for recipe fetches.
//!
//! Every failure originates in [`RecipeClient`](crate::client::RecipeClient)
//! and reaches the view-models unchanged, where it is logged and dropped.

use thiserror::Error;

use crate::traits::HttpError;

/// Result alias used by the recipe client.
pub type RecipeResult<T> = std::result::Result<T, RecipeError>;

/// Errors returned by [`RecipeService`](crate::client::RecipeService).
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The body did not match the expected schema.
    #[error("JSON decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other failure of the underlying HTTP call.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),
}

impl RecipeError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RecipeError::InvalidUrl(_) => "E_RECIPE_URL",
            RecipeError::Decode(_) => "E_RECIPE_DECODE",
            RecipeError::Transport(_) => "E_RECIPE_TRANSPORT",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            RecipeError::InvalidUrl(_) => {
                "The recipe service address is misconfigured.".to_string()
            }
            RecipeError::Decode(_) => {
                "Received an unexpected response from the recipe service.".to_string()
            }
            RecipeError::Transport(HttpError::Timeout(_)) => {
                "The recipe service took too long to respond.".to_string()
            }
            RecipeError::Transport(HttpError::ConnectionFailed(_)) => {
                "Unable to reach the recipe service. Please check your internet connection."
                    .to_string()
            }
            RecipeError::Transport(_) => "Loading ... No Network connection".to_string(),
        }
    }
}
