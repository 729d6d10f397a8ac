//! Utility functions for the team randomizer

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Number of players that go to team 1 when `selected` players are split.
/// Team 1 is never smaller than team 2.
pub fn team1_size(selected: usize) -> usize {
    selected.div_ceil(2)
}

/// Render a rating delta with an explicit sign
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}
