//! Rating system configuration
//!
//! All tuning constants for the rating engine live here: score bounds,
//! per-tier K factors, performance weights, and the bonus/penalty magnitudes.

use crate::error::MatchmakingError;
use serde::{Deserialize, Serialize};

/// Tuning constants for the rating engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Score assigned to brand-new players; also stands in as the mean of an
    /// empty side
    pub initial_score: i32,
    /// Lower clamp bound for any resulting score
    pub min_score: i32,
    /// Upper clamp bound for any resulting score
    pub max_score: i32,
    /// Normal per-match cap on the absolute rating change
    pub max_change: f64,

    /// Number of placement matches before a player is calibrated
    pub placement_matches: u32,
    /// Upper bound (exclusive) of the new-player experience tier
    pub new_tier_matches: u32,
    /// Upper bound (exclusive) of the experienced tier
    pub experienced_tier_matches: u32,

    /// K factor while in placement matches
    pub k_placement: f64,
    /// K factor for new players
    pub k_new: f64,
    /// K factor for experienced players
    pub k_experienced: f64,
    /// K factor for veterans
    pub k_veteran: f64,

    /// Weight of normalized K/D in the performance score
    pub kd_weight: f64,
    /// Weight of kill participation in the performance score
    pub participation_weight: f64,
    /// Weight of scaled headshot accuracy in the performance score
    pub headshot_weight: f64,
    /// Scales the performance bonus relative to the base Elo term
    pub performance_multiplier: f64,

    /// Bonus per missing player for winning short-handed
    pub team_disadvantage_bonus: f64,
    /// Flat penalty applied to abandoning players (negative)
    pub abandon_penalty: f64,
    /// One-time seeding bonus for dominant placement wins
    pub placement_seed_bonus: f64,
    /// Minimum (kills+assists)/deaths ratio to trigger the seeding bonus
    pub placement_jump_threshold: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_score: 1000,
            min_score: 0,
            max_score: 3000,
            max_change: 100.0,
            placement_matches: 5,
            new_tier_matches: 50,
            experienced_tier_matches: 200,
            k_placement: 50.0,
            k_new: 32.0,
            k_experienced: 24.0,
            k_veteran: 16.0,
            kd_weight: 0.5,
            participation_weight: 0.3,
            headshot_weight: 0.2,
            performance_multiplier: 0.5,
            team_disadvantage_bonus: 25.0,
            abandon_penalty: -50.0,
            placement_seed_bonus: 150.0,
            placement_jump_threshold: 3.0,
        }
    }
}

impl RatingConfig {
    /// Create conservative configuration (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            max_change: 60.0,
            k_placement: 40.0,
            k_new: 24.0,
            k_experienced: 18.0,
            k_veteran: 12.0,
            performance_multiplier: 0.3,
            placement_seed_bonus: 100.0,
            ..Self::default()
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            max_change: 150.0,
            k_placement: 64.0,
            k_new: 40.0,
            k_experienced: 32.0,
            k_veteran: 24.0,
            performance_multiplier: 0.75,
            placement_seed_bonus: 200.0,
            ..Self::default()
        }
    }

    /// Select the K factor for a player's experience tier
    pub fn k_for(&self, matches_played: u32) -> f64 {
        if matches_played < self.placement_matches {
            self.k_placement
        } else if matches_played < self.new_tier_matches {
            self.k_new
        } else if matches_played < self.experienced_tier_matches {
            self.k_experienced
        } else {
            self.k_veteran
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.min_score >= self.max_score {
            return Err(MatchmakingError::ConfigurationError {
                message: "min_score must be below max_score".to_string(),
            }
            .into());
        }

        if self.initial_score < self.min_score || self.initial_score > self.max_score {
            return Err(MatchmakingError::ConfigurationError {
                message: "initial_score must lie within the score bounds".to_string(),
            }
            .into());
        }

        if self.max_change <= 0.0 {
            return Err(MatchmakingError::ConfigurationError {
                message: "max_change must be positive".to_string(),
            }
            .into());
        }

        for (name, k) in [
            ("k_placement", self.k_placement),
            ("k_new", self.k_new),
            ("k_experienced", self.k_experienced),
            ("k_veteran", self.k_veteran),
        ] {
            if k <= 0.0 {
                return Err(MatchmakingError::ConfigurationError {
                    message: format!("{} must be positive", name),
                }
                .into());
            }
        }

        if self.placement_matches >= self.new_tier_matches
            || self.new_tier_matches >= self.experienced_tier_matches
        {
            return Err(MatchmakingError::ConfigurationError {
                message: "experience tier boundaries must be strictly increasing".to_string(),
            }
            .into());
        }

        for (name, weight) in [
            ("kd_weight", self.kd_weight),
            ("participation_weight", self.participation_weight),
            ("headshot_weight", self.headshot_weight),
            ("performance_multiplier", self.performance_multiplier),
        ] {
            if weight < 0.0 {
                return Err(MatchmakingError::ConfigurationError {
                    message: format!("{} must be non-negative", name),
                }
                .into());
            }
        }

        if self.abandon_penalty > 0.0 {
            return Err(MatchmakingError::ConfigurationError {
                message: "abandon_penalty must not be positive".to_string(),
            }
            .into());
        }

        if self.team_disadvantage_bonus < 0.0
            || self.placement_seed_bonus < 0.0
            || self.placement_jump_threshold < 0.0
        {
            return Err(MatchmakingError::ConfigurationError {
                message: "bonus magnitudes must be non-negative".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
