//! Role-aware team balancing
//!
//! This module partitions a pool of queued players into two five-player
//! teams, respecting role coverage and minimizing the skill gap between
//! the sides.

pub mod search;
pub mod slots;

// Re-export commonly used types
pub use search::{RolePriorityBalancer, TeamBalancer};
pub use slots::{slot_priority, SLOT_COUNT, SLOT_ORDER, TEAM_SIZE};
