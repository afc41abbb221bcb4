//! Fireteam - Team assignment and rating engine for competitive matchmaking
//!
//! This crate provides role-aware team balancing and post-match Elo-derived
//! rating updates for two-sided five-player matches.

pub mod balancer;
pub mod config;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{MatchmakingError, Result};
pub use types::*;

// Re-export key components
pub use balancer::{RolePriorityBalancer, TeamBalancer};
pub use config::RatingConfig;
pub use rating::EloRatingEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
