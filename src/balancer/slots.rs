//! Static slot-order and role-priority tables
//!
//! The canonical slot order and the eligibility ladder are fixed lookup
//! data; the exact ordering doubles as the balancer's tie-break
//! specification and must not be rearranged.

use crate::types::{QueuedPlayer, Role, RoleSlot, Side};

/// Players per side
pub const TEAM_SIZE: usize = 5;

/// Total assignment slots in a match
pub const SLOT_COUNT: usize = 10;

/// Canonical slot order: two slots per role, alternating sides within
/// each role pair
pub const SLOT_ORDER: [RoleSlot; SLOT_COUNT] = [
    RoleSlot {
        side: Side::Alpha,
        role: Role::Sniper,
    },
    RoleSlot {
        side: Side::Bravo,
        role: Role::Sniper,
    },
    RoleSlot {
        side: Side::Alpha,
        role: Role::T1,
    },
    RoleSlot {
        side: Side::Bravo,
        role: Role::T1,
    },
    RoleSlot {
        side: Side::Alpha,
        role: Role::T2,
    },
    RoleSlot {
        side: Side::Bravo,
        role: Role::T2,
    },
    RoleSlot {
        side: Side::Alpha,
        role: Role::T3,
    },
    RoleSlot {
        side: Side::Bravo,
        role: Role::T3,
    },
    RoleSlot {
        side: Side::Alpha,
        role: Role::T4,
    },
    RoleSlot {
        side: Side::Bravo,
        role: Role::T4,
    },
];

/// Eligibility priority of a player for a slot role, lower is better
///
/// The ladder: primary match (0), primary SMG wildcard (1), secondary
/// match (2), secondary SMG wildcard (3). Sniper slots take no SMG
/// wildcard; only a primary or secondary Sniper qualifies. `None` means
/// the player cannot fill the slot at all.
pub fn slot_priority(slot_role: Role, player: &QueuedPlayer) -> Option<u8> {
    if player.primary_role == slot_role {
        return Some(0);
    }
    if slot_role != Role::Sniper && player.primary_role == Role::Smg {
        return Some(1);
    }
    if player.secondary_role == slot_role {
        return Some(2);
    }
    if slot_role != Role::Sniper && player.secondary_role == Role::Smg {
        return Some(3);
    }
    None
}
