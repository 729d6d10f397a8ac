//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use team_randomizer::error::Result;
use team_randomizer::roster::{RosterProvider, RosterStore};
use team_randomizer::service::MatchSession;
use team_randomizer::team::TeamPartitioner;
use team_randomizer::types::RosterEntry;
use team_randomizer::RatingUpdater;

/// Roster used across the integration tests
pub fn evening_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(1, "JBRKR", 1210),
        RosterEntry::new(2, "Maniek", 1180),
        RosterEntry::new(3, "Kuba", 1000),
        RosterEntry::new(4, "Ola", 960),
        RosterEntry::new(5, "Bartek", 1050),
        RosterEntry::new(6, "Zosia", 890),
        RosterEntry::new(7, "Michal", 1420),
        RosterEntry::new(8, "Asia", 740),
    ]
}

/// Roster of `count` players named `player<id>`, all selected
pub fn selected_roster(count: i64) -> RosterStore {
    let entries: Vec<RosterEntry> = (1..=count)
        .map(|id| RosterEntry::new(id, format!("player{}", id), 1000))
        .collect();
    let mut roster = RosterStore::from_entries(&entries);
    for id in 1..=count {
        roster.toggle_selected(id);
    }
    roster
}

/// Session over `entries` with a fixed shuffle seed and default rating rules
pub fn seeded_session(entries: &[RosterEntry], seed: u64) -> MatchSession {
    MatchSession::new(
        RosterStore::from_entries(entries),
        TeamPartitioner::seeded(seed),
        RatingUpdater::default(),
    )
}

/// Mock roster provider that serves a swappable roster and counts loads
#[derive(Debug, Default)]
pub struct MockRosterProvider {
    entries: Arc<Mutex<Vec<RosterEntry>>>,
    load_calls: Arc<Mutex<usize>>,
}

impl MockRosterProvider {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
            load_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Replace what the next load returns
    pub fn set_entries(&self, entries: Vec<RosterEntry>) {
        if let Ok(mut current) = self.entries.lock() {
            *current = entries;
        }
    }

    /// Number of times the roster was loaded (for testing)
    pub fn load_calls(&self) -> usize {
        self.load_calls.lock().map(|calls| *calls).unwrap_or_default()
    }
}

impl RosterProvider for MockRosterProvider {
    fn load_roster(&self) -> Result<Vec<RosterEntry>> {
        if let Ok(mut calls) = self.load_calls.lock() {
            *calls += 1;
        }
        Ok(self
            .entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default())
    }

    fn source_name(&self) -> String {
        "mock roster".to_string()
    }
}
