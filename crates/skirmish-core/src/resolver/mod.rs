//! Battle resolution between two creatures.
//!
//! The resolver runs a turn loop over a private two-element working state.
//! Each exchange:
//! 1. Picks the attacker (speed, then attack, then the configured tie-break)
//! 2. Computes `max(attack - defense, min_damage)`
//! 3. Subtracts it from the defender's working hit points
//! 4. Ends the battle if the defender dropped to 0 or below
//!
//! # Invariants
//!
//! - Input creatures are never mutated
//! - Only the defender is damaged in an exchange, so there is never a double knockout
//! - Every exchange removes at least 1 hit point, so a battle lasts at most
//!   `hp_a + hp_b` exchanges
//! - No state survives between calls; a [`BattleResolver`] can be shared across threads
//!
//! # Example
//!
//! ```
//! use skirmish_core::creature::{Creature, CreatureId, Stats};
//! use skirmish_core::resolver::resolve;
//!
//! let wolf = Creature::new(CreatureId::new(1), "Wolf", Stats::new(10, 5, 5, 10));
//! let rat = Creature::new(CreatureId::new(2), "Rat", Stats::new(2, 5, 5, 10));
//!
//! assert_eq!(resolve(&wolf, &rat).unwrap(), CreatureId::new(1));
//! ```

mod damage;
mod turn_order;

pub use damage::damage;
pub use turn_order::initiative;

use tracing::{debug, trace};

use crate::creature::{Creature, CreatureId, Stats};
use crate::error::BattleError;
use crate::report::{BattleReport, Exchange, Outcome};
use crate::rules::{BattleRules, RulesError};

use turn_order::attacker_for;

/// Resolves a battle with the default rules and returns the winner's identity.
///
/// # Errors
///
/// Returns [`BattleError::InvalidCombatant`] if either creature starts with
/// non-positive hit points (combatant A is checked first).
pub fn resolve(a: &Creature, b: &Creature) -> Result<CreatureId, BattleError> {
    BattleResolver::default()
        .resolve(a, b)
        .map(|outcome| outcome.winner)
}

/// Working state of one combatant during a battle.
#[derive(Debug, Clone, Copy)]
struct Combatant<'a> {
    creature: &'a Creature,
    hp: i64,
}

impl<'a> Combatant<'a> {
    fn new(creature: &'a Creature) -> Self {
        Self {
            creature,
            hp: i64::from(creature.stats().hit_points),
        }
    }

    fn stats(&self) -> &'a Stats {
        self.creature.stats()
    }
}

/// Deterministic two-creature battle resolver.
///
/// Holds only the [`BattleRules`]; all per-battle state lives on the stack of
/// a single call.
///
/// # Example
///
/// ```
/// use skirmish_core::creature::{Creature, CreatureId, Stats};
/// use skirmish_core::report::Side;
/// use skirmish_core::resolver::BattleResolver;
///
/// let a = Creature::new(CreatureId::new(1), "a", Stats::new(1, 10, 5, 10));
/// let b = Creature::new(CreatureId::new(2), "b", Stats::new(1, 10, 5, 10));
///
/// let report = BattleResolver::default().resolve_with_log(&a, &b).unwrap();
/// assert_eq!(report.outcome.winner_side, Side::A);
/// assert_eq!(report.exchanges.len(), 19);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BattleResolver {
    rules: BattleRules,
}

impl BattleResolver {
    /// Creates a resolver with the given rules.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::MinDamage`] if the rules could not guarantee
    /// termination.
    pub fn new(rules: BattleRules) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Returns the rules this resolver applies.
    #[must_use]
    pub const fn rules(&self) -> &BattleRules {
        &self.rules
    }

    /// Resolves a battle between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::InvalidCombatant`] if either creature starts
    /// with non-positive hit points.
    pub fn resolve(&self, a: &Creature, b: &Creature) -> Result<Outcome, BattleError> {
        self.run(a, b, |_| {})
    }

    /// Resolves a battle and records every exchange.
    ///
    /// # Errors
    ///
    /// Same as [`BattleResolver::resolve`].
    pub fn resolve_with_log(&self, a: &Creature, b: &Creature) -> Result<BattleReport, BattleError> {
        let mut exchanges = Vec::new();
        let outcome = self.run(a, b, |exchange| exchanges.push(*exchange))?;
        Ok(BattleReport { outcome, exchanges })
    }

    fn run(
        &self,
        a: &Creature,
        b: &Creature,
        mut on_exchange: impl FnMut(&Exchange),
    ) -> Result<Outcome, BattleError> {
        check_fit(a)?;
        check_fit(b)?;

        debug!(a = %a.id(), b = %b.id(), "battle started");

        let mut state = [Combatant::new(a), Combatant::new(b)];
        let mut number: u64 = 0;

        loop {
            let (attacker, initiative) =
                attacker_for(a.stats(), b.stats(), self.rules.tie_break, number);
            let defender = attacker.opponent();
            number += 1;

            let dealt = damage(
                state[attacker.index()].stats(),
                state[defender.index()].stats(),
                self.rules.min_damage,
            );
            let target = &mut state[defender.index()];
            target.hp -= dealt;

            let exchange = Exchange {
                number,
                attacker,
                initiative,
                damage: dealt,
                defender_hp: target.hp,
            };
            trace!(
                number,
                attacker = %attacker,
                ?initiative,
                damage = dealt,
                defender_hp = target.hp,
                "exchange"
            );
            on_exchange(&exchange);

            if target.hp <= 0 {
                let survivor = &state[attacker.index()];
                let outcome = Outcome {
                    winner: survivor.creature.id(),
                    winner_side: attacker,
                    exchanges: number,
                    winner_hp: survivor.hp,
                };
                debug!(
                    winner = %outcome.winner,
                    side = %attacker,
                    exchanges = number,
                    "battle resolved"
                );
                return Ok(outcome);
            }
        }
    }
}

fn check_fit(creature: &Creature) -> Result<(), BattleError> {
    if creature.is_fit() {
        Ok(())
    } else {
        Err(BattleError::InvalidCombatant {
            id: creature.id(),
            hit_points: creature.stats().hit_points,
        })
    }
}
