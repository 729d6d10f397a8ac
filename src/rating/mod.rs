//! Rating rules
//!
//! This module provides the post-match rating update and the rating to
//! rank tier classification used for display.

pub mod rank;
pub mod updater;

// Re-export commonly used types
pub use rank::{rank_tier, MAX_TIER, MIN_TIER};
pub use updater::{RatingUpdate, RatingUpdater};
