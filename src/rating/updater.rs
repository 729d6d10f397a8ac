//! Post-match rating updates
//!
//! Every player on the winning side gains a fixed adjustment and every player
//! on the losing side loses it. A side only wins by scoring strictly more, so
//! with the default tie policy a draw counts as a loss for both teams.

use crate::config::RatingConfig;
use crate::roster::RosterStore;
use crate::team::TeamAssignment;
use crate::types::{JoinKey, MatchOutcome, Rating, RatingChange, TeamSide, TiePolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Result of applying one match to the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub outcome: MatchOutcome,
    pub team1_delta: Rating,
    pub team2_delta: Rating,
    /// One entry per roster player whose rating moved, in application order
    pub rating_changes: Vec<RatingChange>,
}

impl RatingUpdate {
    pub fn delta_for(&self, side: TeamSide) -> Rating {
        match side {
            TeamSide::Team1 => self.team1_delta,
            TeamSide::Team2 => self.team2_delta,
        }
    }
}

/// Applies match results to a roster
#[derive(Debug, Clone, Default)]
pub struct RatingUpdater {
    config: RatingConfig,
}

impl RatingUpdater {
    pub fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Rating deltas for (team 1, team 2) given the outcome
    pub fn deltas(&self, outcome: MatchOutcome) -> (Rating, Rating) {
        let adjustment = self.config.adjustment;
        match (outcome, self.config.tie_policy) {
            (MatchOutcome::Team1Win, _) => (adjustment, -adjustment),
            (MatchOutcome::Team2Win, _) => (-adjustment, adjustment),
            (MatchOutcome::Draw, TiePolicy::BothLose) => (-adjustment, -adjustment),
            (MatchOutcome::Draw, TiePolicy::Neutral) => (0, 0),
        }
    }

    /// Apply the final scores of `assignment` to `roster`
    ///
    /// Scores are not validated. Each team entry is resolved through the
    /// configured join key; a roster player is adjusted at most once per
    /// submission, and when the same key shows up on both sides the team 1
    /// delta applies.
    pub fn submit_scores(
        &self,
        roster: &mut RosterStore,
        assignment: &TeamAssignment,
        score1: f64,
        score2: f64,
    ) -> RatingUpdate {
        let outcome = MatchOutcome::from_scores(score1, score2);
        let (team1_delta, team2_delta) = self.deltas(outcome);

        let mut rating_changes = Vec::new();
        let mut seen_names = HashSet::new();
        let mut seen_ids = HashSet::new();

        for (side, member) in assignment.members() {
            let delta = match side {
                TeamSide::Team1 => team1_delta,
                TeamSide::Team2 => team2_delta,
            };

            match self.config.join_key {
                JoinKey::ByName => {
                    if !seen_names.insert(member.name.as_str()) {
                        debug!("'{}' already adjusted in this match", member.name);
                        continue;
                    }
                    rating_changes.extend(roster.apply_rating_delta(&member.name, delta));
                }
                JoinKey::ById => {
                    if !seen_ids.insert(member.player_id) {
                        debug!("Player {} already adjusted in this match", member.player_id);
                        continue;
                    }
                    rating_changes.extend(roster.apply_rating_delta_by_id(member.player_id, delta));
                }
            }
        }

        info!(
            "{} ({} : {}), team 1 {:+}, team 2 {:+}, {} ratings changed",
            outcome,
            score1,
            score2,
            team1_delta,
            team2_delta,
            rating_changes.len()
        );

        RatingUpdate {
            outcome,
            team1_delta,
            team2_delta,
            rating_changes,
        }
    }
}
