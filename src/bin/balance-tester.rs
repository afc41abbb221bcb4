//! Balance Tester CLI Tool
//!
//! Command-line tool for exercising the team balancer and rating engine
//! against deterministic synthetic data.
//!
//! Usage:
//!   cargo run --bin balance-tester -- --help
//!   cargo run --bin balance-tester balance --pool-size 12
//!   cargo run --bin balance-tester rate --preset aggressive --abandon player-3
//!   cargo run --bin balance-tester simulate
//!   cargo run --bin balance-tester show-config --preset conservative

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Duration;
use clap::{Parser, Subcommand};
use fireteam::balancer::{RolePriorityBalancer, TeamBalancer};
use fireteam::config::RatingConfig;
use fireteam::rating::EloRatingEngine;
use fireteam::types::{
    PerformanceRecord, QueuedPlayer, RatingDelta, Role, Side, TeamAssignment,
};
use fireteam::utils::{current_timestamp, generate_match_id};

#[derive(Parser)]
#[command(name = "balance-tester")]
#[command(about = "Exercise the fireteam balancer and rating engine with synthetic players")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a synthetic queue pool and balance it into two teams
    Balance {
        /// Number of players to queue
        #[arg(short, long, default_value = "10")]
        pool_size: usize,
    },
    /// Rate a synthetic finished match
    Rate {
        /// Path to a TOML rating configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Named preset (default, conservative, aggressive)
        #[arg(long)]
        preset: Option<String>,
        /// Mark this player as an abandoner
        #[arg(long)]
        abandon: Option<String>,
    },
    /// Balance a pool, fabricate match stats, and rate the result
    Simulate {
        /// Path to a TOML rating configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Named preset (default, conservative, aggressive)
        #[arg(long)]
        preset: Option<String>,
    },
    /// Print the active rating configuration as JSON
    ShowConfig {
        /// Named preset (default, conservative, aggressive)
        #[arg(long)]
        preset: Option<String>,
    },
}

fn parse_preset(preset: &str) -> Result<RatingConfig> {
    match preset.to_lowercase().as_str() {
        "default" => Ok(RatingConfig::default()),
        "conservative" => Ok(RatingConfig::conservative()),
        "aggressive" => Ok(RatingConfig::aggressive()),
        _ => Err(anyhow!(
            "Unknown preset '{}'. Use 'default', 'conservative' or 'aggressive'",
            preset
        )),
    }
}

fn load_config(path: Option<PathBuf>, preset: Option<String>) -> Result<RatingConfig> {
    let config = if let Some(path) = path {
        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents)?
    } else if let Some(preset) = preset {
        parse_preset(&preset)?
    } else {
        RatingConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Deterministic synthetic queue pool: roles cycle, skills fan out over a
/// fixed band, queue times are strictly increasing
fn demo_pool(size: usize) -> Vec<QueuedPlayer> {
    let roles = [
        Role::Sniper,
        Role::T1,
        Role::T2,
        Role::T3,
        Role::T4,
        Role::Smg,
    ];
    let base = current_timestamp();

    (0..size)
        .map(|n| {
            let primary = roles[n % roles.len()];
            let secondary = if primary == Role::Smg {
                roles[(n + 1) % 5]
            } else {
                Role::Smg
            };
            QueuedPlayer {
                id: format!("player-{}", n),
                primary_role: primary,
                secondary_role: secondary,
                skill: 900 + ((n * 137) % 400) as i32,
                queued_at: base + Duration::seconds(n as i64),
            }
        })
        .collect()
}

/// Fabricate per-player stats for a balanced assignment; Alpha wins
fn demo_records(assignment: &TeamAssignment) -> Vec<PerformanceRecord> {
    let mut records = Vec::new();
    for side in [Side::Alpha, Side::Bravo] {
        for (n, slot) in assignment.side(side).iter().enumerate() {
            let kills = 3 + ((n * 7 + slot.player.skill as usize) % 12) as u32;
            // The first player on each side is still in placements.
            let matches_played = if n == 0 { 3 } else { 8 + (n as u32) * 13 };
            records.push(PerformanceRecord {
                player_id: slot.player.id.clone(),
                side,
                skill: slot.player.skill,
                matches_played,
                placement_completed: n != 0,
                kills,
                deaths: 2 + (n as u32 % 6),
                assists: (n as u32 * 3) % 9,
                headshots: kills / 3,
                won: side == Side::Alpha,
                abandoned: false,
            });
        }
    }
    records
}

fn print_assignment(assignment: &TeamAssignment) {
    for side in [Side::Alpha, Side::Bravo] {
        println!(
            "  {} (total skill {}):",
            side,
            assignment.skill_sum(side)
        );
        for slot in assignment.side(side) {
            println!(
                "    {:<8} {:<12} {}",
                slot.role.to_string(),
                slot.player.id,
                slot.player.skill
            );
        }
    }
    println!("  Skill difference: {}", assignment.skill_difference());
}

fn print_deltas(deltas: &[RatingDelta]) {
    for delta in deltas {
        println!(
            "  {:<12} {:>5} -> {:>5} ({:+})  base {:+.1}  perf {:+.1}  disadv {:+.1}  abandon {:+.1}  placement {:+.1}",
            delta.player_id,
            delta.old_skill,
            delta.new_skill,
            delta.change,
            delta.breakdown.base,
            delta.breakdown.performance,
            delta.breakdown.disadvantage,
            delta.breakdown.abandon,
            delta.breakdown.placement,
        );
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let balancer = RolePriorityBalancer::new();

    match cli.command {
        Commands::Balance { pool_size } => {
            let pool = demo_pool(pool_size);
            println!("Queueing {} synthetic players...", pool.len());

            match balancer.balance(&pool) {
                Some(assignment) => {
                    println!("✅ Balanced teams found:");
                    print_assignment(&assignment);
                }
                None => {
                    eprintln!("❌ No role-complete assignment exists for this pool.");
                    std::process::exit(1);
                }
            }
        }

        Commands::Rate {
            config,
            preset,
            abandon,
        } => {
            let engine = EloRatingEngine::new(load_config(config, preset)?)?;
            let pool = demo_pool(10);
            let assignment = balancer
                .balance(&pool)
                .ok_or_else(|| anyhow!("demo pool could not be balanced"))?;
            let mut records = demo_records(&assignment);

            if let Some(id) = abandon {
                let record = records
                    .iter_mut()
                    .find(|r| r.player_id == id)
                    .ok_or_else(|| anyhow!("no such player '{}' in the demo match", id))?;
                record.abandoned = true;
                record.won = false;
            }

            let deltas = engine.compute_deltas(&records, Side::Alpha)?;
            println!("Match {} rated (Alpha wins):", generate_match_id());
            print_deltas(&deltas);
        }

        Commands::Simulate { config, preset } => {
            let engine = EloRatingEngine::new(load_config(config, preset)?)?;
            let pool = demo_pool(12);

            println!("Queueing {} synthetic players...", pool.len());
            let assignment = balancer
                .balance(&pool)
                .ok_or_else(|| anyhow!("demo pool could not be balanced"))?;
            println!("✅ Balanced teams:");
            print_assignment(&assignment);

            let records = demo_records(&assignment);
            let deltas = engine.compute_deltas(&records, Side::Alpha)?;
            println!("✅ Match {} rated (Alpha wins):", generate_match_id());
            print_deltas(&deltas);
        }

        Commands::ShowConfig { preset } => {
            let config = load_config(None, preset)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
