//! Error types shared across the application.

use std::io;

use crate::config::ConfigError;
use crate::navigation::RouteError;

/// Out-of-domain survey input. Never clamped.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SurveyError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("invalid score {0}; expected 50, 75 or 100")]
    InvalidScore(u8),
    #[error("unknown restaurant: {0}")]
    UnknownRestaurant(String),
}

/// Top-level failure reported by `main`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Route(#[from] RouteError),
}
