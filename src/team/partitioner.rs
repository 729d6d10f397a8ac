//! Random team partitioning
//!
//! The selected players are shuffled with a uniform (Fisher-Yates) shuffle and
//! the permutation is cut in half, team 1 taking the extra player when the
//! count is odd. The random source is injected so tests can replay a draw.

use crate::roster::RosterStore;
use crate::team::assignment::TeamAssignment;
use crate::types::TeamMember;
use crate::utils::team1_size;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Splits the selected players into two random teams
#[derive(Debug, Clone)]
pub struct TeamPartitioner<R = StdRng> {
    rng: R,
}

impl TeamPartitioner<StdRng> {
    /// Partitioner seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Partitioner with a fixed seed; the same seed replays the same draws
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> TeamPartitioner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a fresh assignment from the roster's current selection
    ///
    /// The roster is only read. With no selected players both teams are
    /// empty; a single selected player ends up alone on team 1.
    pub fn partition(&mut self, roster: &RosterStore) -> TeamAssignment {
        let mut drawn: Vec<TeamMember> = roster.selected_players().map(TeamMember::from).collect();
        drawn.shuffle(&mut self.rng);

        let team2 = drawn.split_off(team1_size(drawn.len()));
        let assignment = TeamAssignment::new(drawn, team2);

        info!(
            "Drew teams of {} and {} players",
            assignment.team1.len(),
            assignment.team2.len()
        );
        debug!(
            "Team 1: {:?}, Team 2: {:?}",
            assignment.team1.iter().map(|m| &m.name).collect::<Vec<_>>(),
            assignment.team2.iter().map(|m| &m.name).collect::<Vec<_>>()
        );
        assignment
    }
}
