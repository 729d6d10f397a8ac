//! Match session
//!
//! A `MatchSession` owns everything one organizer works with: the roster, the
//! partitioner with its random source, the rating updater, the teams from the
//! last draw and the matches played so far. Nothing here is persisted; a new
//! session starts from whatever the roster provider supplies.

use crate::config::{AppConfig, RatingConfig};
use crate::error::Result;
use crate::rating::{rank_tier, RatingUpdate, RatingUpdater};
use crate::roster::{RosterProvider, RosterStore};
use crate::team::{TeamAssignment, TeamPartitioner};
use crate::types::{MatchRecord, PlayerId, Rating, RosterEntry, TeamSide};
use crate::utils::current_timestamp;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A roster row ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub rating: Rating,
    pub selected: bool,
    pub tier: u8,
}

/// A team row ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberView {
    pub side: TeamSide,
    pub name: String,
    pub rating: Rating,
    pub tier: u8,
}

/// State of one organizing session
#[derive(Debug)]
pub struct MatchSession<R = StdRng> {
    roster: RosterStore,
    partitioner: TeamPartitioner<R>,
    updater: RatingUpdater,
    assignment: TeamAssignment,
    history: Vec<MatchRecord>,
}

impl MatchSession<StdRng> {
    /// Build a session from configuration and an initial roster
    pub fn from_config(config: &AppConfig, provider: &dyn RosterProvider) -> Result<Self> {
        let entries = provider.load_roster()?;
        info!(
            "Starting session with {} players from {}",
            entries.len(),
            provider.source_name()
        );

        Ok(Self::new(
            RosterStore::from_entries(&entries),
            TeamPartitioner::from_seed_option(config.teams.seed),
            RatingUpdater::new(config.rating),
        ))
    }
}

impl<R: Rng> MatchSession<R> {
    pub fn new(roster: RosterStore, partitioner: TeamPartitioner<R>, updater: RatingUpdater) -> Self {
        Self {
            roster,
            partitioner,
            updater,
            assignment: TeamAssignment::default(),
            history: Vec::new(),
        }
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    /// Teams from the most recent draw (empty before the first one)
    pub fn assignment(&self) -> &TeamAssignment {
        &self.assignment
    }

    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }

    pub fn rating_config(&self) -> &RatingConfig {
        self.updater.config()
    }

    /// Replace the roster; selections and the current teams are dropped
    pub fn reload(&mut self, entries: &[RosterEntry]) {
        self.roster.load(entries);
        self.assignment = TeamAssignment::default();
        info!("Roster reloaded with {} players", self.roster.len());
    }

    /// Re-read the roster from `provider`
    pub fn reload_from(&mut self, provider: &dyn RosterProvider) -> Result<()> {
        let entries = provider.load_roster()?;
        self.reload(&entries);
        Ok(())
    }

    /// Flip one player's selection; `None` if the id is unknown
    pub fn toggle_selected(&mut self, id: PlayerId) -> Option<bool> {
        self.roster.toggle_selected(id)
    }

    /// Draw new teams from the current selection, replacing the previous ones
    pub fn randomize_teams(&mut self) -> &TeamAssignment {
        self.assignment = self.partitioner.partition(&self.roster);
        &self.assignment
    }

    /// Record the final scores for the current teams
    ///
    /// Ratings are adjusted on the roster, the match is appended to the
    /// history and the current team snapshots are refreshed from the roster.
    /// Without drawn teams nothing changes and nothing is recorded.
    pub fn submit_scores(&mut self, score1: f64, score2: f64) -> RatingUpdate {
        let update = self
            .updater
            .submit_scores(&mut self.roster, &self.assignment, score1, score2);

        if self.assignment.is_empty() {
            warn!("Scores submitted before any teams were drawn, not recorded");
            return update;
        }

        self.history.push(MatchRecord {
            team1: self.assignment.team1.clone(),
            team2: self.assignment.team2.clone(),
            score1,
            score2,
            outcome: update.outcome,
            rating_changes: update.rating_changes.clone(),
            played_at: current_timestamp(),
        });

        self.assignment.resync(&self.roster);
        update
    }

    /// Every roster player with its rank tier
    pub fn roster_view(&self) -> Vec<PlayerView> {
        self.roster
            .players()
            .iter()
            .map(|player| PlayerView {
                id: player.id,
                name: player.name.clone(),
                rating: player.rating,
                selected: player.selected,
                tier: rank_tier(player.rating),
            })
            .collect()
    }

    /// Current team members with their rank tiers
    pub fn team_view(&self) -> Vec<TeamMemberView> {
        self.assignment
            .members()
            .map(|(side, member)| TeamMemberView {
                side,
                name: member.name.clone(),
                rating: member.rating,
                tier: rank_tier(member.rating),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::StaticRosterProvider;
    use crate::types::MatchOutcome;

    fn create_test_session() -> MatchSession {
        let roster = RosterStore::from_entries(&[
            RosterEntry::new(1, "JBRKR", 1000),
            RosterEntry::new(2, "Maniek", 1000),
            RosterEntry::new(3, "Kuba", 400),
            RosterEntry::new(4, "Ola", 1450),
        ]);
        MatchSession::new(roster, TeamPartitioner::seeded(7), RatingUpdater::default())
    }

    #[test]
    fn test_from_config_loads_roster() {
        let provider = StaticRosterProvider::new(vec![RosterEntry::new(1, "A", 100)]);
        let session = MatchSession::from_config(&AppConfig::default(), &provider).unwrap();

        assert_eq!(session.roster().len(), 1);
        assert!(session.assignment().is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_randomize_uses_selection() {
        let mut session = create_test_session();
        session.toggle_selected(1);
        session.toggle_selected(2);
        session.toggle_selected(4);

        let assignment = session.randomize_teams().clone();

        assert_eq!(assignment.team1.len(), 2);
        assert_eq!(assignment.team2.len(), 1);
        assert!(assignment.members().all(|(_, m)| m.name != "Kuba"));
    }

    #[test]
    fn test_randomize_replaces_previous_assignment() {
        let mut session = create_test_session();
        session.toggle_selected(1);
        session.toggle_selected(2);
        session.randomize_teams();

        session.toggle_selected(1);
        session.toggle_selected(2);
        assert!(session.randomize_teams().is_empty());
    }

    #[test]
    fn test_submit_scores_updates_roster_history_and_teams() {
        let mut session = create_test_session();
        session.toggle_selected(1);
        session.toggle_selected(2);
        let assignment = session.randomize_teams().clone();
        let winner = assignment.team1[0].player_id;
        let loser = assignment.team2[0].player_id;

        let update = session.submit_scores(5.0, 3.0);

        assert_eq!(update.outcome, MatchOutcome::Team1Win);
        assert_eq!(session.roster().get(winner).unwrap().rating, 1010);
        assert_eq!(session.roster().get(loser).unwrap().rating, 990);
        assert_eq!(session.roster().get(3).unwrap().rating, 400);

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].team1, assignment.team1);
        assert_eq!(session.history()[0].rating_changes.len(), 2);

        assert_eq!(session.assignment().team1[0].rating, 1010);
        assert_eq!(session.assignment().team2[0].rating, 990);
    }

    #[test]
    fn test_team_view_shows_drawn_namesake_after_update() {
        let roster = RosterStore::from_entries(&[
            RosterEntry::new(1, "A", 1000),
            RosterEntry::new(2, "A", 2000),
        ]);
        let mut session =
            MatchSession::new(roster, TeamPartitioner::seeded(1), RatingUpdater::default());
        session.toggle_selected(2);
        session.randomize_teams();

        session.submit_scores(1.0, 0.0);

        assert_eq!(session.roster().get(2).unwrap().rating, 2010);
        assert_eq!(session.assignment().team1[0].player_id, 2);
        assert_eq!(session.assignment().team1[0].rating, 2010);
        assert_eq!(session.team_view()[0].rating, 2010);
    }

    #[test]
    fn test_scores_without_teams_are_not_recorded() {
        let mut session = create_test_session();

        let update = session.submit_scores(3.0, 1.0);

        assert!(update.rating_changes.is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_reload_drops_selection_and_teams() {
        let mut session = create_test_session();
        session.toggle_selected(1);
        session.toggle_selected(2);
        session.randomize_teams();

        session.reload(&[RosterEntry::new(1, "JBRKR", 1000)]);

        assert_eq!(session.roster().selected_count(), 0);
        assert!(session.assignment().is_empty());
    }

    #[test]
    fn test_views_carry_rank_tiers() {
        let mut session = create_test_session();
        session.toggle_selected(4);

        let roster_view = session.roster_view();
        assert_eq!(roster_view[2].tier, 5);
        assert_eq!(roster_view[3].tier, 18);
        assert!(roster_view[3].selected);

        session.randomize_teams();
        let team_view = session.team_view();
        assert_eq!(team_view.len(), 1);
        assert_eq!(team_view[0].side, TeamSide::Team1);
        assert_eq!(team_view[0].tier, 18);
    }
}
