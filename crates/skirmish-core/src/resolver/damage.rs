//! Damage calculation.

use crate::creature::Stats;

/// Damage dealt by `attacker` to `defender` in one exchange.
///
/// `max(attack - defense, min_damage)`, computed in `i64` so extreme stats
/// cannot overflow. With the default floor of 1 every blow lands for at
/// least 1 point.
///
/// # Example
///
/// ```
/// use skirmish_core::creature::Stats;
/// use skirmish_core::resolver::damage;
///
/// let attacker = Stats::new(10, 0, 0, 1);
/// let defender = Stats::new(0, 5, 0, 1);
/// assert_eq!(damage(&attacker, &defender, 1), 5);
/// assert_eq!(damage(&defender, &attacker, 1), 1);
/// ```
#[must_use]
pub fn damage(attacker: &Stats, defender: &Stats, min_damage: i32) -> i64 {
    (i64::from(attacker.attack) - i64::from(defender.defense)).max(i64::from(min_damage))
}
