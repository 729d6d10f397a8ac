//! Error types for the team randomizer
//!
//! The engine itself is total: toggling an unknown id or adjusting an unknown
//! name is a no-op, never an error. Failures only happen at the edges, when a
//! roster is read, configuration is parsed or a front-end command is malformed.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for the fallible edges of the system
#[derive(Debug, thiserror::Error)]
pub enum RandomizerError {
    #[error("Failed to load roster from {source_name}: {reason}")]
    RosterLoadFailed { source_name: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RandomizerError::RosterLoadFailed {
            source_name: "players.json".to_string(),
            reason: "missing field `rating`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load roster from players.json: missing field `rating`"
        );

        let err = RandomizerError::InvalidCommand {
            reason: "score needs two numbers".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid command: score needs two numbers");
    }
}
