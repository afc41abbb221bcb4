//! Exhaustive backtracking search over the fixed slot order
//!
//! The search walks the ten slots in canonical order with an explicit
//! frame stack (cursor per slot, index-addressed used array) instead of
//! recursion. Per-slot candidate ordering is priority ascending, queue
//! time ascending, skill descending; that ordering is the complete
//! tie-break rule and decides which equally-valid assignment is found
//! first.

use crate::balancer::slots::{slot_priority, SLOT_COUNT, SLOT_ORDER, TEAM_SIZE};
use crate::types::{QueuedPlayer, Side, SlotAssignment, TeamAssignment};
use tracing::debug;

/// Trait for team balancing algorithms
pub trait TeamBalancer: Send + Sync {
    /// Partition the pool into two role-complete five-player teams
    ///
    /// Returns `None` when fewer than ten candidates are supplied, or
    /// when no role-complete split of ten players exists.
    fn balance(&self, players: &[QueuedPlayer]) -> Option<TeamAssignment>;
}

/// Role-priority team balancer
///
/// Finds the role-respecting assignment with the lowest aggregate skill
/// difference between the sides. Deterministic: identical input (players,
/// scores, timestamps) always yields the identical assignment.
#[derive(Debug, Default)]
pub struct RolePriorityBalancer;

impl RolePriorityBalancer {
    pub fn new() -> Self {
        Self
    }

    /// Per-slot exploration order over the whole pool, computed once
    ///
    /// Eligibility does not depend on which players are already used, so
    /// the ordered candidate lists are fixed for the entire search and
    /// used players are skipped at walk time.
    fn slot_candidates(pool: &[&QueuedPlayer]) -> Vec<Vec<usize>> {
        SLOT_ORDER
            .iter()
            .map(|slot| {
                let mut eligible: Vec<(u8, usize)> = pool
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, player)| {
                        slot_priority(slot.role, player).map(|priority| (priority, idx))
                    })
                    .collect();

                eligible.sort_by(|a, b| {
                    a.0.cmp(&b.0)
                        .then_with(|| pool[a.1].queued_at.cmp(&pool[b.1].queued_at))
                        .then_with(|| pool[b.1].skill.cmp(&pool[a.1].skill))
                });

                eligible.into_iter().map(|(_, idx)| idx).collect()
            })
            .collect()
    }

    fn assignment_difference(pool: &[&QueuedPlayer], picks: &[usize; SLOT_COUNT]) -> i64 {
        let mut alpha_sum: i64 = 0;
        let mut bravo_sum: i64 = 0;
        for (slot, &idx) in SLOT_ORDER.iter().zip(picks.iter()) {
            match slot.side {
                Side::Alpha => alpha_sum += pool[idx].skill as i64,
                Side::Bravo => bravo_sum += pool[idx].skill as i64,
            }
        }
        (alpha_sum - bravo_sum).abs()
    }

    fn build_assignment(pool: &[&QueuedPlayer], picks: &[usize; SLOT_COUNT]) -> TeamAssignment {
        let mut alpha = Vec::with_capacity(TEAM_SIZE);
        let mut bravo = Vec::with_capacity(TEAM_SIZE);
        for (slot, &idx) in SLOT_ORDER.iter().zip(picks.iter()) {
            let assignment = SlotAssignment {
                player: pool[idx].clone(),
                role: slot.role,
            };
            match slot.side {
                Side::Alpha => alpha.push(assignment),
                Side::Bravo => bravo.push(assignment),
            }
        }
        TeamAssignment { alpha, bravo }
    }
}

impl TeamBalancer for RolePriorityBalancer {
    fn balance(&self, players: &[QueuedPlayer]) -> Option<TeamAssignment> {
        if players.len() < SLOT_COUNT {
            debug!(
                pool_size = players.len(),
                "not enough candidates to fill both teams"
            );
            return None;
        }

        // Deterministic base order: queue-entry time ascending. Stable, so
        // equal timestamps keep the caller's order.
        let mut pool: Vec<&QueuedPlayer> = players.iter().collect();
        pool.sort_by(|a, b| a.queued_at.cmp(&b.queued_at));

        let slot_candidates = Self::slot_candidates(&pool);

        let mut used = vec![false; pool.len()];
        let mut chosen = [usize::MAX; SLOT_COUNT];
        let mut cursor = [0usize; SLOT_COUNT];
        let mut depth: usize = 0;
        let mut best: Option<([usize; SLOT_COUNT], i64)> = None;

        loop {
            if depth == SLOT_COUNT {
                let diff = Self::assignment_difference(&pool, &chosen);
                if best.map_or(true, |(_, best_diff)| diff < best_diff) {
                    best = Some((chosen, diff));
                }
                if diff == 0 {
                    // A perfectly balanced split cannot be improved.
                    break;
                }
                depth -= 1;
                used[chosen[depth]] = false;
                continue;
            }

            let mut descended = false;
            while cursor[depth] < slot_candidates[depth].len() {
                let candidate = slot_candidates[depth][cursor[depth]];
                cursor[depth] += 1;
                if !used[candidate] {
                    chosen[depth] = candidate;
                    used[candidate] = true;
                    depth += 1;
                    if depth < SLOT_COUNT {
                        cursor[depth] = 0;
                    }
                    descended = true;
                    break;
                }
            }
            if descended {
                continue;
            }

            // Slot exhausted: reset its cursor for the next visit and pop
            // the previous pick.
            cursor[depth] = 0;
            if depth == 0 {
                break;
            }
            depth -= 1;
            used[chosen[depth]] = false;
        }

        match best {
            Some((picks, diff)) => {
                debug!(skill_difference = diff, "team assignment found");
                Some(Self::build_assignment(&pool, &picks))
            }
            None => {
                debug!("no role-complete assignment exists for this pool");
                None
            }
        }
    }
}
