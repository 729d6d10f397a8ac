//! Rating update configuration

use crate::types::{JoinKey, Rating, TiePolicy};
use serde::{Deserialize, Serialize};

/// How match results move ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Points gained by each winner and lost by each loser
    pub adjustment: Rating,
    /// How team entries are resolved to roster players
    pub join_key: JoinKey,
    /// What a draw does
    pub tie_policy: TiePolicy,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            adjustment: 10,
            join_key: JoinKey::ByName,
            tie_policy: TiePolicy::BothLose,
        }
    }
}
