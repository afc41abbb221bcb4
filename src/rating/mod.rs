//! Post-match rating updates
//!
//! This module computes per-player skill-score deltas from completed
//! match results using a tiered-K Elo base term plus additive
//! performance, disadvantage, abandon, and placement adjustments.

pub mod elo;
pub mod validation;

// Re-export commonly used types
pub use elo::EloRatingEngine;
pub use validation::{validate_match_records, MAX_SIDE_IMBALANCE, MIN_SIDE_PLAYERS};
