//! Common types used throughout the team randomizer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a player when the roster is loaded
pub type PlayerId = i64;

/// Integer skill rating. Unbounded, may go negative.
pub type Rating = i64;

/// A roster record as supplied from outside (a `players.json` entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    pub rating: Rating,
}

impl RosterEntry {
    pub fn new(id: PlayerId, name: impl Into<String>, rating: Rating) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
        }
    }
}

/// A player known to the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: Rating,
    /// Whether the player takes part in the next randomization
    pub selected: bool,
}

impl From<&RosterEntry> for Player {
    fn from(entry: &RosterEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            rating: entry.rating,
            selected: false,
        }
    }
}

/// Snapshot of a player taken when teams are drawn
///
/// The rating is a copy: later adjustments on the roster do not show up here
/// until the assignment is re-synced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Only read by the by-id join strategy
    pub player_id: PlayerId,
    pub name: String,
    pub rating: Rating,
}

impl From<&Player> for TeamMember {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name.clone(),
            rating: player.rating,
        }
    }
}

/// Which side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Team1,
    Team2,
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::Team1 => write!(f, "Team 1"),
            TeamSide::Team2 => write!(f, "Team 2"),
        }
    }
}

/// How a team entry is resolved back to its roster record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoinKey {
    /// Match on name. Every roster player sharing the name is adjusted.
    #[default]
    ByName,
    /// Match on player id
    ById,
}

impl std::fmt::Display for JoinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKey::ByName => write!(f, "by-name"),
            JoinKey::ById => write!(f, "by-id"),
        }
    }
}

impl std::str::FromStr for JoinKey {
    type Err = crate::error::RandomizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "by-name" | "name" => Ok(JoinKey::ByName),
            "by-id" | "id" => Ok(JoinKey::ById),
            other => Err(crate::error::RandomizerError::ConfigurationError {
                message: format!("Unknown join key '{}', use 'by-name' or 'by-id'", other),
            }),
        }
    }
}

/// What a drawn match does to ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TiePolicy {
    /// Neither side scored more, so both sides take the losing adjustment
    #[default]
    BothLose,
    /// Draws leave every rating unchanged
    Neutral,
}

impl std::fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TiePolicy::BothLose => write!(f, "both-lose"),
            TiePolicy::Neutral => write!(f, "neutral"),
        }
    }
}

impl std::str::FromStr for TiePolicy {
    type Err = crate::error::RandomizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "both-lose" => Ok(TiePolicy::BothLose),
            "neutral" => Ok(TiePolicy::Neutral),
            other => Err(crate::error::RandomizerError::ConfigurationError {
                message: format!(
                    "Unknown tie policy '{}', use 'both-lose' or 'neutral'",
                    other
                ),
            }),
        }
    }
}

/// Result of comparing two final scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Team1Win,
    Team2Win,
    /// Neither score is greater (equal scores, or a NaN on either side)
    Draw,
}

impl MatchOutcome {
    pub fn from_scores(score1: f64, score2: f64) -> Self {
        if score1 > score2 {
            MatchOutcome::Team1Win
        } else if score2 > score1 {
            MatchOutcome::Team2Win
        } else {
            MatchOutcome::Draw
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Team1Win => write!(f, "Team 1 wins"),
            MatchOutcome::Team2Win => write!(f, "Team 2 wins"),
            MatchOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Rating change applied to one roster player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub name: String,
    pub old_rating: Rating,
    pub new_rating: Rating,
}

impl RatingChange {
    pub fn delta(&self) -> Rating {
        self.new_rating.saturating_sub(self.old_rating)
    }
}

/// One submitted match, kept for the lifetime of the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team1: Vec<TeamMember>,
    pub team2: Vec<TeamMember>,
    pub score1: f64,
    pub score2: f64,
    pub outcome: MatchOutcome,
    pub rating_changes: Vec<RatingChange>,
    pub played_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_from_entry_starts_unselected() {
        let entry = RosterEntry::new(3, "Kuba", 950);
        let player = Player::from(&entry);
        assert_eq!(player.id, 3);
        assert_eq!(player.name, "Kuba");
        assert_eq!(player.rating, 950);
        assert!(!player.selected);
    }

    #[test]
    fn test_match_outcome_from_scores() {
        assert_eq!(MatchOutcome::from_scores(5.0, 3.0), MatchOutcome::Team1Win);
        assert_eq!(MatchOutcome::from_scores(1.0, 2.5), MatchOutcome::Team2Win);
        assert_eq!(MatchOutcome::from_scores(4.0, 4.0), MatchOutcome::Draw);
        assert_eq!(MatchOutcome::from_scores(f64::NAN, 1.0), MatchOutcome::Draw);
        assert_eq!(MatchOutcome::from_scores(-1.0, -3.0), MatchOutcome::Team1Win);
    }

    #[test]
    fn test_join_key_parsing() {
        assert_eq!("by-name".parse::<JoinKey>().unwrap(), JoinKey::ByName);
        assert_eq!("BY-ID".parse::<JoinKey>().unwrap(), JoinKey::ById);
        assert!("by-email".parse::<JoinKey>().is_err());
        assert_eq!(JoinKey::default(), JoinKey::ByName);
    }

    #[test]
    fn test_tie_policy_parsing() {
        assert_eq!("both-lose".parse::<TiePolicy>().unwrap(), TiePolicy::BothLose);
        assert_eq!("neutral".parse::<TiePolicy>().unwrap(), TiePolicy::Neutral);
        assert!("coinflip".parse::<TiePolicy>().is_err());
        assert_eq!(TiePolicy::default(), TiePolicy::BothLose);
    }

    #[test]
    fn test_rating_change_delta_saturates() {
        let change = RatingChange {
            player_id: 1,
            name: "Wide".to_string(),
            old_rating: i64::MIN,
            new_rating: i64::MAX,
        };
        assert_eq!(change.delta(), i64::MAX);
    }

    #[test]
    fn test_roster_entry_deserializes_from_json() {
        let entries: Vec<RosterEntry> =
            serde_json::from_str(r#"[{"id": 1, "name": "Maniek", "rating": 1200}]"#).unwrap();
        assert_eq!(entries, vec![RosterEntry::new(1, "Maniek", 1200)]);
    }
}
