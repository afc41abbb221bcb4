//! Match-data precondition validation
//!
//! The rating engine trusts its input; this validator is the gate the
//! orchestrator must pass before deltas are computed. Violations are
//! caller errors surfaced as typed failures, never silently skewed
//! deltas.

use crate::error::{MatchmakingError, Result};
use crate::types::{PerformanceRecord, Side};
use std::collections::HashSet;

/// Minimum players a side must field for the match to be rateable
pub const MIN_SIDE_PLAYERS: usize = 3;

/// Maximum allowed difference in side sizes
pub const MAX_SIDE_IMBALANCE: usize = 2;

/// Validate a completed match's records before rating
///
/// Checks side sizes, size imbalance, duplicate identities, and that each
/// non-abandoning record's `won` flag agrees with the winning side. An
/// abandoner's flag is not trusted and not checked. Stat counts are
/// unsigned and need no negativity check.
pub fn validate_match_records(records: &[PerformanceRecord], winning_side: Side) -> Result<()> {
    if records.is_empty() {
        return Err(MatchmakingError::InvalidMatchData {
            reason: "no performance records supplied".to_string(),
        }
        .into());
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.player_id.as_str()) {
            return Err(MatchmakingError::InvalidMatchData {
                reason: format!("duplicate performance record for player {}", record.player_id),
            }
            .into());
        }

        if !record.abandoned && record.won != (record.side == winning_side) {
            return Err(MatchmakingError::InvalidMatchData {
                reason: format!(
                    "win flag for player {} disagrees with winning side {}",
                    record.player_id, winning_side
                ),
            }
            .into());
        }
    }

    let alpha_count = records.iter().filter(|r| r.side == Side::Alpha).count();
    let bravo_count = records.len() - alpha_count;

    if alpha_count < MIN_SIDE_PLAYERS || bravo_count < MIN_SIDE_PLAYERS {
        return Err(MatchmakingError::InvalidMatchData {
            reason: format!(
                "each side needs at least {} players (got {} vs {})",
                MIN_SIDE_PLAYERS, alpha_count, bravo_count
            ),
        }
        .into());
    }

    if alpha_count.abs_diff(bravo_count) > MAX_SIDE_IMBALANCE {
        return Err(MatchmakingError::InvalidMatchData {
            reason: format!(
                "side sizes too uneven ({} vs {})",
                alpha_count, bravo_count
            ),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, side: Side, won: bool) -> PerformanceRecord {
        PerformanceRecord {
            player_id: id.to_string(),
            side,
            skill: 1000,
            matches_played: 20,
            placement_completed: true,
            kills: 10,
            deaths: 8,
            assists: 4,
            headshots: 3,
            won,
            abandoned: false,
        }
    }

    fn even_match() -> Vec<PerformanceRecord> {
        let mut records = Vec::new();
        for n in 0..5 {
            records.push(record(&format!("a{}", n), Side::Alpha, true));
            records.push(record(&format!("b{}", n), Side::Bravo, false));
        }
        records
    }

    #[test]
    fn test_valid_even_match() {
        assert!(validate_match_records(&even_match(), Side::Alpha).is_ok());
    }

    #[test]
    fn test_empty_records_rejected() {
        assert!(validate_match_records(&[], Side::Alpha).is_err());
    }

    #[test]
    fn test_short_side_rejected() {
        let records = vec![
            record("a0", Side::Alpha, true),
            record("a1", Side::Alpha, true),
            record("b0", Side::Bravo, false),
            record("b1", Side::Bravo, false),
            record("b2", Side::Bravo, false),
        ];
        assert!(validate_match_records(&records, Side::Alpha).is_err());
    }

    #[test]
    fn test_uneven_sides_rejected() {
        // 3 vs 6 exceeds the allowed imbalance even though both sides
        // meet the minimum.
        let mut records = vec![
            record("a0", Side::Alpha, true),
            record("a1", Side::Alpha, true),
            record("a2", Side::Alpha, true),
        ];
        for n in 0..6 {
            records.push(record(&format!("b{}", n), Side::Bravo, false));
        }
        assert!(validate_match_records(&records, Side::Alpha).is_err());
    }

    #[test]
    fn test_four_vs_five_allowed() {
        let mut records = even_match();
        records.retain(|r| r.player_id != "a4");
        assert!(validate_match_records(&records, Side::Alpha).is_ok());
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let mut records = even_match();
        records[1].player_id = "a0".to_string();
        assert!(validate_match_records(&records, Side::Alpha).is_err());
    }

    #[test]
    fn test_inconsistent_win_flag_rejected() {
        let mut records = even_match();
        records[0].won = false; // on the winning side
        assert!(validate_match_records(&records, Side::Alpha).is_err());
    }

    #[test]
    fn test_abandoner_win_flag_not_checked() {
        let mut records = even_match();
        records[0].won = false;
        records[0].abandoned = true;
        assert!(validate_match_records(&records, Side::Alpha).is_ok());
    }
}
