//! Elo-derived rating engine
//!
//! Computes one signed skill-score delta per performance record. The base
//! term is classic Elo against the opposing side's mean (expected score
//! from the skillratings crate, K chosen by experience tier); additive
//! adjustments for individual performance, short-handed wins, abandons,
//! and placement seeding are layered on top, then the sum is clamped and
//! applied within hard score bounds.

use crate::balancer::slots::TEAM_SIZE;
use crate::config::RatingConfig;
use crate::error::Result;
use crate::rating::validation::validate_match_records;
use crate::types::{PerformanceRecord, RatingBreakdown, RatingDelta, Side};
use crate::utils::mean_or;
use skillratings::elo::{expected_score, EloRating};
use tracing::debug;

/// Kills per death, or raw kills when the player never died
fn kill_death_ratio(kills: u32, deaths: u32) -> f64 {
    if deaths == 0 {
        kills as f64
    } else {
        kills as f64 / deaths as f64
    }
}

/// Per-side aggregates computed once per call
#[derive(Debug, Clone)]
struct SideContext {
    mean_skill: f64,
    total_kills: u32,
    mean_kd: f64,
    disadvantage: u32,
}

#[derive(Debug, Clone)]
struct TeamContext {
    alpha: SideContext,
    bravo: SideContext,
}

impl TeamContext {
    fn build(records: &[PerformanceRecord], config: &RatingConfig) -> Self {
        let build_side = |side: Side| {
            let members: Vec<&PerformanceRecord> =
                records.iter().filter(|r| r.side == side).collect();

            let skills: Vec<f64> = members.iter().map(|r| r.skill as f64).collect();
            let kds: Vec<f64> = members
                .iter()
                .map(|r| kill_death_ratio(r.kills, r.deaths))
                .collect();

            SideContext {
                // An empty side contributes the configured initial score as
                // its mean, avoiding a division by zero.
                mean_skill: mean_or(&skills, config.initial_score as f64),
                total_kills: members.iter().map(|r| r.kills).sum(),
                mean_kd: mean_or(&kds, 0.0),
                disadvantage: (TEAM_SIZE.saturating_sub(members.len())) as u32,
            }
        };

        Self {
            alpha: build_side(Side::Alpha),
            bravo: build_side(Side::Bravo),
        }
    }

    fn side(&self, side: Side) -> &SideContext {
        match side {
            Side::Alpha => &self.alpha,
            Side::Bravo => &self.bravo,
        }
    }
}

/// Elo-derived rating engine with injected configuration
#[derive(Debug, Clone)]
pub struct EloRatingEngine {
    config: RatingConfig,
}

impl EloRatingEngine {
    /// Create a new engine, validating the configuration up front
    pub fn new(config: RatingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Compute one rating delta per record, order-preserving
    ///
    /// Fails fast with a typed validation error before any delta is
    /// computed when the match data violates the engine's preconditions.
    pub fn compute_deltas(
        &self,
        records: &[PerformanceRecord],
        winning_side: Side,
    ) -> Result<Vec<RatingDelta>> {
        validate_match_records(records, winning_side)?;

        let context = TeamContext::build(records, &self.config);
        debug!(
            records = records.len(),
            %winning_side,
            alpha_mean = context.alpha.mean_skill,
            bravo_mean = context.bravo.mean_skill,
            "computing rating deltas"
        );

        Ok(records
            .iter()
            .map(|record| self.delta_for(record, &context))
            .collect())
    }

    fn delta_for(&self, record: &PerformanceRecord, context: &TeamContext) -> RatingDelta {
        let config = &self.config;

        if record.abandoned {
            let new_skill = (record.skill as f64 + config.abandon_penalty)
                .max(config.min_score as f64)
                .round() as i32;
            return RatingDelta {
                player_id: record.player_id.clone(),
                old_skill: record.skill,
                new_skill,
                change: new_skill - record.skill,
                breakdown: RatingBreakdown {
                    abandon: config.abandon_penalty,
                    ..RatingBreakdown::default()
                },
            };
        }

        let own = context.side(record.side);
        let opponent_mean = context.side(record.side.opposite()).mean_skill;

        // Base Elo term against the opposing side's mean.
        let (expected, _) = expected_score(
            &EloRating {
                rating: record.skill as f64,
            },
            &EloRating {
                rating: opponent_mean,
            },
        );
        let actual = if record.won { 1.0 } else { 0.0 };
        let k = config.k_for(record.matches_played);
        let base = k * (actual - expected);

        // Individual performance relative to the own team.
        let kd = kill_death_ratio(record.kills, record.deaths);
        let normalized_kd = if own.mean_kd > 0.0 { kd / own.mean_kd } else { 1.0 };
        let participation = if own.total_kills > 0 {
            (record.kills + record.assists) as f64 / own.total_kills as f64
        } else {
            0.0
        };
        let headshot_accuracy = if record.kills > 0 {
            record.headshots as f64 / record.kills as f64
        } else {
            0.0
        };
        let performance_score = normalized_kd * config.kd_weight
            + participation * config.participation_weight
            + headshot_accuracy * 2.0 * config.headshot_weight;
        let performance = (performance_score - 1.0) * base.abs() * config.performance_multiplier;

        // Credit for winning short-handed.
        let disadvantage = if record.won && own.disadvantage > 0 {
            own.disadvantage as f64 * config.team_disadvantage_bonus
        } else {
            0.0
        };

        // One-time seeding jump for dominant placement wins. The cap is
        // raised to the bonus for this record only, so the jump can exceed
        // the normal per-match clamp.
        let mut max_change = config.max_change;
        let mut placement = 0.0;
        if !record.placement_completed
            && record.matches_played < config.placement_matches
            && record.won
        {
            let impact = (record.kills + record.assists) as f64;
            let jump_ratio = if record.deaths == 0 {
                impact
            } else {
                impact / record.deaths as f64
            };
            if jump_ratio >= config.placement_jump_threshold {
                placement = config.placement_seed_bonus;
                max_change = max_change.max(placement);
            }
        }

        // No cross-match history reaches this engine.
        let win_streak = 0.0;

        let total = (base + performance + disadvantage + placement + win_streak)
            .clamp(-max_change, max_change);
        let new_skill = (record.skill as f64 + total)
            .clamp(config.min_score as f64, config.max_score as f64)
            .round() as i32;

        RatingDelta {
            player_id: record.player_id.clone(),
            old_skill: record.skill,
            new_skill,
            change: new_skill - record.skill,
            breakdown: RatingBreakdown {
                base,
                performance,
                disadvantage,
                abandon: 0.0,
                placement,
                win_streak,
            },
        }
    }
}

impl Default for EloRatingEngine {
    fn default() -> Self {
        Self {
            config: RatingConfig::default(),
        }
    }
}
