//! Error types for the team assignment and rating engine
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific engine failures
#[derive(Debug, thiserror::Error)]
pub enum MatchmakingError {
    #[error("Invalid match data: {reason}")]
    InvalidMatchData { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
