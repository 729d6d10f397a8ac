//! Roster provider traits and implementations
//!
//! A provider supplies the initial `{id, name, rating}` records once at
//! startup (and again on reload). The engine never writes rosters back.

use crate::error::{RandomizerError, Result};
use crate::types::RosterEntry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Trait for supplying the initial roster
pub trait RosterProvider {
    /// Read the full roster
    fn load_roster(&self) -> Result<Vec<RosterEntry>>;

    /// Human-readable description of where the roster comes from
    fn source_name(&self) -> String;
}

/// Provider backed by a fixed list of entries
#[derive(Debug, Clone, Default)]
pub struct StaticRosterProvider {
    entries: Vec<RosterEntry>,
}

impl StaticRosterProvider {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }
}

impl RosterProvider for StaticRosterProvider {
    fn load_roster(&self) -> Result<Vec<RosterEntry>> {
        Ok(self.entries.clone())
    }

    fn source_name(&self) -> String {
        "static roster".to_string()
    }
}

/// Provider reading a JSON array of roster entries (`players.json`)
#[derive(Debug, Clone)]
pub struct JsonFileRosterProvider {
    path: PathBuf,
}

impl JsonFileRosterProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterProvider for JsonFileRosterProvider {
    fn load_roster(&self) -> Result<Vec<RosterEntry>> {
        let contents =
            fs::read_to_string(&self.path).map_err(|e| RandomizerError::RosterLoadFailed {
                source_name: self.source_name(),
                reason: e.to_string(),
            })?;

        let entries: Vec<RosterEntry> =
            serde_json::from_str(&contents).map_err(|e| RandomizerError::RosterLoadFailed {
                source_name: self.source_name(),
                reason: e.to_string(),
            })?;

        info!(
            "Read {} roster entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
