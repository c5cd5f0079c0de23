//! Attacker selection for each exchange.

use std::cmp::Ordering;

use crate::creature::Stats;
use crate::report::{Initiative, Side};
use crate::rules::TieBreak;

/// Decides which side strikes, using stats alone.
///
/// Strictly higher speed wins initiative; on equal speed, strictly higher
/// attack does. Returns `None` when both speed and attack are equal, leaving
/// the choice to the configured [`TieBreak`].
///
/// # Example
///
/// ```
/// use skirmish_core::creature::Stats;
/// use skirmish_core::report::{Initiative, Side};
/// use skirmish_core::resolver::initiative;
///
/// let fast = Stats::new(1, 1, 9, 10);
/// let strong = Stats::new(9, 1, 1, 10);
/// assert_eq!(initiative(&fast, &strong), Some((Side::A, Initiative::Speed)));
/// assert_eq!(initiative(&fast, &fast), None);
/// ```
#[must_use]
pub fn initiative(a: &Stats, b: &Stats) -> Option<(Side, Initiative)> {
    match a.speed.cmp(&b.speed) {
        Ordering::Greater => Some((Side::A, Initiative::Speed)),
        Ordering::Less => Some((Side::B, Initiative::Speed)),
        Ordering::Equal => match a.attack.cmp(&b.attack) {
            Ordering::Greater => Some((Side::A, Initiative::Attack)),
            Ordering::Less => Some((Side::B, Initiative::Attack)),
            Ordering::Equal => None,
        },
    }
}

/// Picks the attacker for the exchange at 0-based position `index`.
pub(crate) fn attacker_for(
    a: &Stats,
    b: &Stats,
    tie_break: TieBreak,
    index: u64,
) -> (Side, Initiative) {
    initiative(a, b).unwrap_or_else(|| {
        let side = match tie_break {
            TieBreak::Alternate if index % 2 == 1 => Side::B,
            TieBreak::Alternate | TieBreak::FirstCombatant => Side::A,
        };
        (side, Initiative::TieBreak)
    })
}
