//! Test fixtures and builders for integration testing

use chrono::{TimeZone, Utc};
use fireteam::types::{PerformanceRecord, QueuedPlayer, Role, Side};

/// Fixed epoch so queue ordering is reproducible across runs
pub const BASE_QUEUE_TIME: i64 = 1_700_000_000;

/// Build a queued player with a queue time offset in seconds
pub fn queued_player(
    id: &str,
    primary: Role,
    secondary: Role,
    skill: i32,
    offset: i64,
) -> QueuedPlayer {
    QueuedPlayer {
        id: id.to_string(),
        primary_role: primary,
        secondary_role: secondary,
        skill,
        queued_at: Utc.timestamp_opt(BASE_QUEUE_TIME + offset, 0).unwrap(),
    }
}

/// Ten players, two primaries per role, queued in order with distinct skills
pub fn full_coverage_pool() -> Vec<QueuedPlayer> {
    let roles = [Role::Sniper, Role::T1, Role::T2, Role::T3, Role::T4];
    let mut pool = Vec::new();
    for (role_idx, role) in roles.iter().enumerate() {
        for copy in 0..2 {
            let n = role_idx * 2 + copy;
            pool.push(queued_player(
                &format!("pool-{}", n),
                *role,
                *role,
                950 + (n as i32) * 23,
                n as i64,
            ));
        }
    }
    pool
}

/// Build a performance record with league-average stats
pub fn performance_record(id: &str, side: Side, skill: i32, won: bool) -> PerformanceRecord {
    PerformanceRecord {
        player_id: id.to_string(),
        side,
        skill,
        matches_played: 30,
        placement_completed: true,
        kills: 6,
        deaths: 5,
        assists: 3,
        headshots: 2,
        won,
        abandoned: false,
    }
}

/// A full 5v5 finished match with the given winner
pub fn even_match_records(winning_side: Side) -> Vec<PerformanceRecord> {
    let mut records = Vec::new();
    for n in 0..5 {
        records.push(performance_record(
            &format!("alpha-{}", n),
            Side::Alpha,
            1000 + n * 40,
            winning_side == Side::Alpha,
        ));
        records.push(performance_record(
            &format!("bravo-{}", n),
            Side::Bravo,
            1010 + n * 35,
            winning_side == Side::Bravo,
        ));
    }
    records
}
