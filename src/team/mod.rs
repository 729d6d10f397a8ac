//! Team drawing
//!
//! This module turns the roster's current selection into a random
//! two-team assignment.

pub mod assignment;
pub mod partitioner;

// Re-export commonly used types
pub use assignment::TeamAssignment;
pub use partitioner::TeamPartitioner;
