//! Round-robin tournaments over a roster.
//!
//! Every unordered pair of creatures fights once, with the lower id as
//! combatant A. Battles share nothing, so they run in parallel; results are
//! gathered back in pair order before anything is tallied.
//!
//! # Determinism
//!
//! Pair order follows roster id order, and errors are reported for the first
//! failing pair in that order, regardless of which thread finished first.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::battle::Roster;
use crate::creature::{Creature, CreatureId};
use crate::error::BattleError;
use crate::report::Outcome;
use crate::resolver::BattleResolver;

/// Win/loss tally for one creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The creature.
    pub id: CreatureId,
    /// Battles won.
    pub wins: u32,
    /// Battles lost.
    pub losses: u32,
}

/// One resolved pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bout {
    /// Combatant A (lower id).
    pub a: CreatureId,
    /// Combatant B (higher id).
    pub b: CreatureId,
    /// Result of the battle.
    pub outcome: Outcome,
}

/// Final tournament table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    /// Records sorted by wins (descending), then id (ascending).
    pub records: Vec<Record>,
    /// Every bout, in pair order.
    pub bouts: Vec<Bout>,
}

impl Standings {
    /// Returns the top record, if any creature fought.
    #[must_use]
    pub fn leader(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Returns the record of `id`.
    #[must_use]
    pub fn record(&self, id: CreatureId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// Runs a round-robin tournament over `roster`.
///
/// A roster with fewer than two creatures yields an empty bout list and a
/// zeroed record for each creature.
///
/// # Errors
///
/// Returns the [`BattleError`] of the first pair (in id order) containing a
/// creature that cannot fight.
pub fn round_robin(resolver: &BattleResolver, roster: &Roster) -> Result<Standings, BattleError> {
    let creatures: Vec<&Creature> = roster.iter().collect();
    let mut pairs: Vec<(&Creature, &Creature)> = Vec::new();
    for (i, a) in creatures.iter().enumerate() {
        for b in &creatures[i + 1..] {
            pairs.push((*a, *b));
        }
    }

    let results: Vec<Result<Bout, BattleError>> = pairs
        .par_iter()
        .map(|(a, b)| {
            resolver.resolve(a, b).map(|outcome| Bout {
                a: a.id(),
                b: b.id(),
                outcome,
            })
        })
        .collect();
    let bouts = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    let mut tally: BTreeMap<CreatureId, Record> = creatures
        .iter()
        .map(|c| {
            let record = Record {
                id: c.id(),
                wins: 0,
                losses: 0,
            };
            (c.id(), record)
        })
        .collect();

    for bout in &bouts {
        let loser = if bout.outcome.winner == bout.a {
            bout.b
        } else {
            bout.a
        };
        if let Some(record) = tally.get_mut(&bout.outcome.winner) {
            record.wins += 1;
        }
        if let Some(record) = tally.get_mut(&loser) {
            record.losses += 1;
        }
    }

    let mut records: Vec<Record> = tally.into_values().collect();
    records.sort_by(|x, y| y.wins.cmp(&x.wins).then(x.id.cmp(&y.id)));

    info!(
        creatures = records.len(),
        bouts = bouts.len(),
        leader = ?records.first().map(|r| r.id),
        "tournament complete"
    );

    Ok(Standings { records, bouts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Stats;

    fn creature(id: u64, attack: i32, defense: i32, speed: i32, hit_points: i32) -> Creature {
        Creature::new(
            CreatureId::new(id),
            format!("c{id}"),
            Stats::new(attack, defense, speed, hit_points),
        )
    }

    #[test]
    fn every_pair_fights_once() {
        let roster = Roster::from_creatures((1..=5).map(|i| creature(i, 5, 2, 3, 10))).unwrap();
        let standings = round_robin(&BattleResolver::default(), &roster).unwrap();

        assert_eq!(standings.bouts.len(), 10);
        for bout in &standings.bouts {
            assert!(bout.a < bout.b);
        }
        let total_wins: u32 = standings.records.iter().map(|r| r.wins).sum();
        let total_losses: u32 = standings.records.iter().map(|r| r.losses).sum();
        assert_eq!(total_wins, 10);
        assert_eq!(total_losses, 10);
    }

    #[test]
    fn dominant_creature_leads() {
        let roster = Roster::from_creatures([
            creature(1, 3, 1, 1, 10),
            creature(2, 20, 5, 9, 30),
            creature(3, 4, 2, 2, 10),
        ])
        .unwrap();
        let standings = round_robin(&BattleResolver::default(), &roster).unwrap();

        let leader = standings.leader().unwrap();
        assert_eq!(leader.id, CreatureId::new(2));
        assert_eq!(leader.wins, 2);
        assert_eq!(leader.losses, 0);
    }

    #[test]
    fn ties_in_wins_ordered_by_id() {
        // Identical creatures: alternating tie-break always favours the lower id.
        let roster = Roster::from_creatures((1..=3).map(|i| creature(i, 1, 1, 1, 5))).unwrap();
        let standings = round_robin(&BattleResolver::default(), &roster).unwrap();

        let order: Vec<(u64, u32)> = standings
            .records
            .iter()
            .map(|r| (r.id.as_u64(), r.wins))
            .collect();
        assert_eq!(order, vec![(1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn first_invalid_pair_reported() {
        let roster = Roster::from_creatures([
            creature(1, 1, 1, 1, 5),
            creature(2, 1, 1, 1, 0),
            creature(3, 1, 1, 1, -1),
        ])
        .unwrap();
        let err = round_robin(&BattleResolver::default(), &roster).unwrap_err();

        assert_eq!(
            err,
            BattleError::InvalidCombatant {
                id: CreatureId::new(2),
                hit_points: 0
            }
        );
    }

    #[test]
    fn single_creature_has_no_bouts() {
        let roster = Roster::from_creatures([creature(1, 1, 1, 1, 5)]).unwrap();
        let standings = round_robin(&BattleResolver::default(), &roster).unwrap();

        assert!(standings.bouts.is_empty());
        assert_eq!(
            standings.record(CreatureId::new(1)),
            Some(&Record {
                id: CreatureId::new(1),
                wins: 0,
                losses: 0
            })
        );
    }

    #[test]
    fn repeated_runs_identical() {
        let roster = Roster::from_creatures((1..=8).map(|i| {
            let n = i32::try_from(i).unwrap();
            creature(i, (n * 7) % 11, (n * 3) % 5, n % 4, 20)
        }))
        .unwrap();
        let resolver = BattleResolver::default();

        let first = round_robin(&resolver, &roster).unwrap();
        for _ in 0..5 {
            assert_eq!(round_robin(&resolver, &roster).unwrap(), first);
        }
    }
}
