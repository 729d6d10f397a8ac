//! Rating to rank tier classification
//!
//! Tiers only drive display (which rank icon to show). They never feed back
//! into ratings or team composition.

use crate::types::Rating;

/// Lowest tier, given to every rating below the first threshold
pub const MIN_TIER: u8 = 1;

/// Highest tier
pub const MAX_TIER: u8 = 18;

/// Inclusive lower bounds, highest tier first
const TIER_THRESHOLDS: [(Rating, u8); 17] = [
    (1401, 18),
    (1301, 17),
    (1201, 16),
    (1121, 15),
    (1041, 14),
    (961, 13),
    (881, 12),
    (801, 11),
    (721, 10),
    (641, 9),
    (561, 8),
    (481, 7),
    (401, 6),
    (321, 5),
    (241, 4),
    (161, 3),
    (81, 2),
];

/// Map a rating to its tier in `[MIN_TIER, MAX_TIER]`
pub fn rank_tier(rating: Rating) -> u8 {
    TIER_THRESHOLDS
        .iter()
        .find(|(lower_bound, _)| rating >= *lower_bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(MIN_TIER)
}

/// Smallest rating that reaches `tier`, or `None` for tier 1 (which has no floor)
/// and for values outside the tier range
pub fn tier_lower_bound(tier: u8) -> Option<Rating> {
    TIER_THRESHOLDS
        .iter()
        .find(|(_, t)| *t == tier)
        .map(|(lower_bound, _)| *lower_bound)
}
