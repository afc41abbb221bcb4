//! Configuration for the team assignment and rating engine
//!
//! Rating constants are an explicit, immutable value handed to the engine
//! at construction time rather than process-wide state, so tests can supply
//! alternate tuning without touching globals.

pub mod rating;

// Re-export commonly used types
pub use rating::RatingConfig;
