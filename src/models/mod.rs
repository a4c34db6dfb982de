//! Data models for the survey
//!
//! This module contains the core data structures:
//! - Categories, scores and faces
//! - Restaurants and their static theme table
//! - Ratings and the figures derived from them

pub mod enums;
pub mod ratings;
pub mod restaurant;

// Re-exports for convenient access
pub use enums::{Category, Face, Score};
pub use ratings::Ratings;
pub use restaurant::{Restaurant, RestaurantTheme};
