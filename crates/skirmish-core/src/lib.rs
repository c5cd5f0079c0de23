//! # Skirmish Core
//!
//! Deterministic battle resolution between two creatures.
//!
//! A creature has four stats: attack, defense, speed and hit points. The
//! resolver runs a turn loop in which the faster (or, on equal speed, the
//! stronger) creature strikes for `max(attack - defense, 1)` until one side
//! drops to zero hit points. There is no randomness: the same two creatures
//! always produce the same winner.
//!
//! ## Modules
//!
//! - [`creature`]: Creature records and ids
//! - [`rules`]: Tunable battle rules (damage floor, tie-break)
//! - [`resolver`]: The battle loop
//! - [`report`]: Outcomes and exchange logs
//! - [`battle`]: Battle records, creature stores and the battle service
//! - [`tournament`]: Parallel round-robin over a roster
//!
//! ## Usage
//!
//! ```
//! use skirmish_core::creature::{Creature, CreatureId, Stats};
//! use skirmish_core::resolver::resolve;
//!
//! let a = Creature::new(CreatureId::new(1), "Hawk", Stats::new(10, 5, 7, 10));
//! let b = Creature::new(CreatureId::new(2), "Toad", Stats::new(2, 5, 5, 10));
//!
//! assert_eq!(resolve(&a, &b)?, CreatureId::new(1));
//! # Ok::<(), skirmish_core::BattleError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod battle;
pub mod creature;
pub mod error;
pub mod report;
pub mod resolver;
pub mod rules;
pub mod tournament;

// Re-exports for convenience
pub use battle::{Battle, BattleId, BattleService, CreatureStore, Roster, RosterError};
pub use creature::{Creature, CreatureId, Stats};
pub use error::BattleError;
pub use report::{BattleReport, Exchange, Initiative, Outcome, Side};
pub use resolver::{resolve, BattleResolver};
pub use rules::{BattleRules, RulesError, TieBreak};
pub use tournament::{round_robin, Standings};

#[cfg(test)]
mod tests;
