//! Team Randomizer - rating and random team balancing for pickup matches
//!
//! This crate keeps a roster of rated players, draws two random teams from
//! the players selected for today, moves ratings after the final score is
//! entered, and maps ratings to display rank tiers.

pub mod config;
pub mod error;
pub mod rating;
pub mod roster;
pub mod service;
pub mod team;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RandomizerError, Result};
pub use types::*;

// Re-export key components
pub use rating::{rank_tier, RatingUpdater};
pub use roster::{RosterProvider, RosterStore};
pub use service::MatchSession;
pub use team::{TeamAssignment, TeamPartitioner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
