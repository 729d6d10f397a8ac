//! Session layer for the team randomizer
//!
//! This module ties the roster, partitioner and rating updater together into
//! a single organizing session, and parses the commands the terminal
//! front-end feeds into it.

pub mod command;
pub mod session;

pub use command::{Command, HELP_TEXT};
pub use session::{MatchSession, PlayerView, TeamMemberView};
