//! In-memory roster store
//!
//! Holds the canonical list of players for a session together with their
//! selection flags and current ratings. One store is built per session;
//! there is no process-wide roster.

use crate::types::{Player, PlayerId, Rating, RatingChange, RosterEntry};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Players known to the current session
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    players: Vec<Player>,
}

impl RosterStore {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster loaded from `entries`
    pub fn from_entries(entries: &[RosterEntry]) -> Self {
        let mut store = Self::new();
        store.load(entries);
        store
    }

    /// Replace the whole roster with `entries`, every player unselected
    pub fn load(&mut self, entries: &[RosterEntry]) {
        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();
        for entry in entries {
            if !seen_ids.insert(entry.id) {
                warn!("Roster contains duplicate player id {}", entry.id);
            }
            if !seen_names.insert(entry.name.as_str()) {
                warn!(
                    "Roster contains duplicate name '{}'; by-name rating updates will hit every match",
                    entry.name
                );
            }
        }

        self.players = entries.iter().map(Player::from).collect();
        debug!("Loaded roster with {} players", self.players.len());
    }

    /// All players in roster order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players currently marked as selected, in roster order
    pub fn selected_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| player.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_players().count()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// All players carrying `name`
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Player> + 'a {
        self.players.iter().filter(move |player| player.name == name)
    }

    /// Flip the selection flag of the player with `id`
    ///
    /// Returns the new flag, or `None` when no player has that id (nothing
    /// changes in that case).
    pub fn toggle_selected(&mut self, id: PlayerId) -> Option<bool> {
        let mut new_state = None;
        for player in self.players.iter_mut().filter(|player| player.id == id) {
            player.selected = !player.selected;
            if new_state.is_none() {
                new_state = Some(player.selected);
            }
        }

        match new_state {
            Some(selected) => debug!("Player {} selected: {}", id, selected),
            None => debug!("Toggle ignored, no player with id {}", id),
        }
        new_state
    }

    /// Select every player
    pub fn select_all(&mut self) {
        for player in &mut self.players {
            player.selected = true;
        }
    }

    /// Unselect every player
    pub fn clear_selection(&mut self) {
        for player in &mut self.players {
            player.selected = false;
        }
    }

    /// Add `delta` to every player whose name equals `name`
    ///
    /// Returns one change per affected player; empty if the name is unknown.
    pub fn apply_rating_delta(&mut self, name: &str, delta: Rating) -> Vec<RatingChange> {
        let changes: Vec<RatingChange> = self
            .players
            .iter_mut()
            .filter(|player| player.name == name)
            .map(|player| Self::adjust(player, delta))
            .collect();

        if changes.is_empty() {
            debug!("Rating delta ignored, no player named '{}'", name);
        } else if changes.len() > 1 {
            warn!(
                "Rating delta {} applied to {} players sharing the name '{}'",
                delta,
                changes.len(),
                name
            );
        }
        changes
    }

    /// Add `delta` to the player with `id`
    pub fn apply_rating_delta_by_id(&mut self, id: PlayerId, delta: Rating) -> Option<RatingChange> {
        let change = self
            .players
            .iter_mut()
            .find(|player| player.id == id)
            .map(|player| Self::adjust(player, delta));

        if change.is_none() {
            debug!("Rating delta ignored, no player with id {}", id);
        }
        change
    }

    fn adjust(player: &mut Player, delta: Rating) -> RatingChange {
        let old_rating = player.rating;
        player.rating = player.rating.saturating_add(delta);
        RatingChange {
            player_id: player.id,
            name: player.name.clone(),
            old_rating,
            new_rating: player.rating,
        }
    }
}
