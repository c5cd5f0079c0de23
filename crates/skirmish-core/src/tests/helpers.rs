//! Creature factories for tests.

use crate::creature::{Creature, CreatureId, Stats};

/// Hit points every scenario combatant starts with.
pub const SCENARIO_HP: i32 = 10;

/// Builds a creature with explicit stats.
pub fn creature(id: u64, attack: i32, defense: i32, speed: i32, hit_points: i32) -> Creature {
    Creature::new(
        CreatureId::new(id),
        format!("creature-{id}"),
        Stats::new(attack, defense, speed, hit_points),
    )
}

/// Builds the pair used by the fixed scenarios: A is id 1, B is id 2, both
/// starting at [`SCENARIO_HP`].
///
/// Each tuple is `(attack, defense, speed)`.
pub fn scenario_pair(a: (i32, i32, i32), b: (i32, i32, i32)) -> (Creature, Creature) {
    (
        creature(1, a.0, a.1, a.2, SCENARIO_HP),
        creature(2, b.0, b.1, b.2, SCENARIO_HP),
    )
}
