//! Error types for the Restaurant actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The requested restaurant was not found.
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// A rating score fell outside the accepted 0 to 5 range.
    #[error("Invalid rating {score}: score must be between 0 and 5")]
    InvalidRating { score: f64 },

    /// A menu item is missing its name, price or descriptive fields.
    #[error("Invalid menu item: {0}")]
    InvalidMenuItem(String),

    /// Writing a listing to its output failed.
    #[error("Output error: {0}")]
    Io(String),
}

impl From<FrameworkError> for RestaurantError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => RestaurantError::NotFound(id),
        }
    }
}

impl From<std::io::Error> for RestaurantError {
    fn from(e: std::io::Error) -> Self {
        RestaurantError::Io(e.to_string())
    }
}
