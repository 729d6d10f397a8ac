//! Roster management
//!
//! This module holds the in-memory roster store and the providers that
//! supply its initial contents.

pub mod provider;
pub mod store;

// Re-export commonly used types
pub use provider::{JsonFileRosterProvider, RosterProvider, StaticRosterProvider};
pub use store::RosterStore;
