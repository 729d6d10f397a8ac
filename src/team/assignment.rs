//! Team assignment produced by one randomization

use crate::roster::RosterStore;
use crate::types::{TeamMember, TeamSide};
use serde::{Deserialize, Serialize};

/// Two disjoint teams of player snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub team1: Vec<TeamMember>,
    pub team2: Vec<TeamMember>,
}

impl TeamAssignment {
    pub fn new(team1: Vec<TeamMember>, team2: Vec<TeamMember>) -> Self {
        Self { team1, team2 }
    }

    /// True when nobody was drawn
    pub fn is_empty(&self) -> bool {
        self.team1.is_empty() && self.team2.is_empty()
    }

    pub fn player_count(&self) -> usize {
        self.team1.len() + self.team2.len()
    }

    pub fn team(&self, side: TeamSide) -> &[TeamMember] {
        match side {
            TeamSide::Team1 => &self.team1,
            TeamSide::Team2 => &self.team2,
        }
    }

    /// Iterate over every member together with its side
    pub fn members(&self) -> impl Iterator<Item = (TeamSide, &TeamMember)> {
        self.team1
            .iter()
            .map(|member| (TeamSide::Team1, member))
            .chain(self.team2.iter().map(|member| (TeamSide::Team2, member)))
    }

    /// Sum of the snapshot ratings on one side
    pub fn total_rating(&self, side: TeamSide) -> i64 {
        self.team(side).iter().map(|member| member.rating).sum()
    }

    /// Refresh the rating snapshots from the roster
    ///
    /// Each snapshot is refreshed from the drawn player's own record, looked
    /// up by id whatever join key the rating update used. Members that no
    /// longer resolve keep their old snapshot.
    pub fn resync(&mut self, roster: &RosterStore) {
        for member in self.team1.iter_mut().chain(self.team2.iter_mut()) {
            if let Some(player) = roster.get(member.player_id) {
                member.rating = player.rating;
            }
        }
    }
}
