//! Common types used throughout the team assignment and rating engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for players
pub type PlayerId = String;

/// Unique identifier for matches
pub type MatchId = Uuid;

/// Integer skill score (MMR) approximating player skill
pub type SkillScore = i32;

/// Combat role a player can queue for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Sniper,
    T1,
    T2,
    T3,
    T4,
    /// Flexible role that can cover any trooper slot
    Smg,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Sniper => write!(f, "Sniper"),
            Role::T1 => write!(f, "T1"),
            Role::T2 => write!(f, "T2"),
            Role::T3 => write!(f, "T3"),
            Role::T4 => write!(f, "T4"),
            Role::Smg => write!(f, "SMG"),
        }
    }
}

/// One of the two sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Alpha,
    Bravo,
}

impl Side {
    /// The opposing side
    pub fn opposite(&self) -> Side {
        match self {
            Side::Alpha => Side::Bravo,
            Side::Bravo => Side::Alpha,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Alpha => write!(f, "Alpha"),
            Side::Bravo => write!(f, "Bravo"),
        }
    }
}

/// A player waiting in the matchmaking queue
///
/// Immutable input to the balancer; owned by the caller for the duration
/// of one balancing call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedPlayer {
    pub id: PlayerId,
    pub primary_role: Role,
    pub secondary_role: Role,
    pub skill: SkillScore,
    pub queued_at: DateTime<Utc>,
}

/// One of the ten fixed (side, role) assignment targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleSlot {
    pub side: Side,
    pub role: Role,
}

/// A player placed into a specific role on a side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub player: QueuedPlayer,
    pub role: Role,
}

/// A complete two-sided team assignment: five players per side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub alpha: Vec<SlotAssignment>,
    pub bravo: Vec<SlotAssignment>,
}

impl TeamAssignment {
    /// Roster for the given side
    pub fn side(&self, side: Side) -> &[SlotAssignment] {
        match side {
            Side::Alpha => &self.alpha,
            Side::Bravo => &self.bravo,
        }
    }

    /// Sum of skill scores for the given side
    pub fn skill_sum(&self, side: Side) -> i64 {
        self.side(side)
            .iter()
            .map(|slot| slot.player.skill as i64)
            .sum()
    }

    /// Absolute skill difference between the two sides
    pub fn skill_difference(&self) -> i64 {
        (self.skill_sum(Side::Alpha) - self.skill_sum(Side::Bravo)).abs()
    }
}

/// Per-player performance snapshot from a completed match
///
/// Stat counts are unsigned, so the non-negativity invariant holds by
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub player_id: PlayerId,
    pub side: Side,
    pub skill: SkillScore,
    pub matches_played: u32,
    pub placement_completed: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub headshots: u32,
    pub won: bool,
    pub abandoned: bool,
}

/// Additive components of a single rating change
///
/// `win_streak` is reserved and always zero; no cross-match history is
/// available to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub base: f64,
    pub performance: f64,
    pub disadvantage: f64,
    pub abandon: f64,
    pub placement: f64,
    pub win_streak: f64,
}

/// Signed skill-score change for one player after a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingDelta {
    pub player_id: PlayerId,
    pub old_skill: SkillScore,
    pub new_skill: SkillScore,
    pub change: i32,
    pub breakdown: RatingBreakdown,
}
