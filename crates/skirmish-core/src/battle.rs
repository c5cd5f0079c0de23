//! Caller-side battle handling.
//!
//! The resolver works on already-resolved creatures. This module provides the
//! layer that sits in front of it:
//! - [`Battle`]: A single-use request naming two combatants by id
//! - [`CreatureStore`]: Lookup of creatures by id
//! - [`Roster`]: In-memory [`CreatureStore`]
//! - [`BattleService`]: Resolves ids, runs the battle, records the winner
//!
//! # Example
//!
//! ```
//! use skirmish_core::battle::{Battle, BattleId, BattleService, Roster};
//! use skirmish_core::creature::{Creature, CreatureId, Stats};
//!
//! let roster = Roster::from_creatures([
//!     Creature::new(CreatureId::new(1), "Wolf", Stats::new(10, 5, 7, 10)),
//!     Creature::new(CreatureId::new(2), "Rat", Stats::new(2, 5, 5, 10)),
//! ])
//! .unwrap();
//!
//! let service = BattleService::new(roster);
//! let mut battle = Battle::new(BattleId::new(1), CreatureId::new(1), CreatureId::new(2));
//! service.fight(&mut battle).unwrap();
//!
//! assert_eq!(battle.winner(), Some(CreatureId::new(1)));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::creature::{Creature, CreatureId};
use crate::error::BattleError;
use crate::report::BattleReport;
use crate::resolver::BattleResolver;

// =============================================================================
// Battle Record
// =============================================================================

/// Unique identifier for a battle.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleId(u64);

impl BattleId {
    /// Creates a new `BattleId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BattleId({})", self.0)
    }
}

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A request to fight two creatures, identified by id.
///
/// `winner` stays `None` until a [`BattleService`] resolves the battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battle {
    id: BattleId,
    combatant_a: CreatureId,
    combatant_b: CreatureId,
    #[serde(default)]
    winner: Option<CreatureId>,
}

impl Battle {
    /// Creates an unresolved battle.
    #[must_use]
    pub const fn new(id: BattleId, combatant_a: CreatureId, combatant_b: CreatureId) -> Self {
        Self {
            id,
            combatant_a,
            combatant_b,
            winner: None,
        }
    }

    /// Returns the battle's identifier.
    #[must_use]
    pub const fn id(&self) -> BattleId {
        self.id
    }

    /// Returns the first combatant.
    #[must_use]
    pub const fn combatant_a(&self) -> CreatureId {
        self.combatant_a
    }

    /// Returns the second combatant.
    #[must_use]
    pub const fn combatant_b(&self) -> CreatureId {
        self.combatant_b
    }

    /// Returns the winner, if the battle has been resolved.
    #[must_use]
    pub const fn winner(&self) -> Option<CreatureId> {
        self.winner
    }
}

// =============================================================================
// Creature Store
// =============================================================================

/// Lookup of creature records by identifier.
pub trait CreatureStore {
    /// Returns the creature with the given id, if any.
    fn creature(&self, id: CreatureId) -> Option<&Creature>;
}

/// Errors raised while building a [`Roster`].
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    /// The roster document is not a JSON array of creatures.
    #[error("failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an id.
    #[error("duplicate creature id {0}")]
    DuplicateId(CreatureId),
}

/// In-memory creature store.
///
/// Creatures are kept in id order, so [`Roster::iter`] is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    creatures: BTreeMap<CreatureId, Creature>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from creatures.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateId`] if two creatures share an id.
    pub fn from_creatures(
        creatures: impl IntoIterator<Item = Creature>,
    ) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for creature in creatures {
            roster.insert(creature)?;
        }
        Ok(roster)
    }

    /// Parses a roster from a JSON array of creatures.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Parse`] on malformed input and
    /// [`RosterError::DuplicateId`] on repeated ids.
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        let creatures: Vec<Creature> = serde_json::from_str(json)?;
        Self::from_creatures(creatures)
    }

    /// Reads a roster from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Roster::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Adds a creature.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateId`] if the id is already taken; the
    /// roster is left unchanged.
    pub fn insert(&mut self, creature: Creature) -> Result<(), RosterError> {
        let id = creature.id();
        if self.creatures.contains_key(&id) {
            return Err(RosterError::DuplicateId(id));
        }
        if !creature.is_fit() {
            warn!(%id, hit_points = creature.stats().hit_points, "creature cannot fight");
        }
        self.creatures.insert(id, creature);
        Ok(())
    }

    /// Number of creatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Returns true if the roster has no creatures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Iterates creatures in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.values()
    }
}

impl CreatureStore for Roster {
    fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.get(&id)
    }
}

// =============================================================================
// Battle Service
// =============================================================================

/// Runs [`Battle`] requests against a [`CreatureStore`].
#[derive(Debug, Clone)]
pub struct BattleService<S> {
    store: S,
    resolver: BattleResolver,
}

impl<S: CreatureStore> BattleService<S> {
    /// Creates a service with the default rules.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_resolver(store, BattleResolver::default())
    }

    /// Creates a service with a configured resolver.
    #[must_use]
    pub fn with_resolver(store: S, resolver: BattleResolver) -> Self {
        Self { store, resolver }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves `battle` and records its winner.
    ///
    /// On error `battle` is left untouched.
    ///
    /// # Errors
    ///
    /// - [`BattleError::MissingCombatant`] if either id is unknown (A first)
    /// - [`BattleError::InvalidCombatant`] if either creature cannot fight
    pub fn fight(&self, battle: &mut Battle) -> Result<CreatureId, BattleError> {
        let (a, b) = self.combatants(battle)?;
        let outcome = self.resolver.resolve(a, b)?;
        Self::record(battle, outcome.winner);
        Ok(outcome.winner)
    }

    /// Resolves `battle`, records its winner and returns every exchange.
    ///
    /// On error `battle` is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`BattleService::fight`].
    pub fn fight_with_log(&self, battle: &mut Battle) -> Result<BattleReport, BattleError> {
        let (a, b) = self.combatants(battle)?;
        let report = self.resolver.resolve_with_log(a, b)?;
        Self::record(battle, report.outcome.winner);
        Ok(report)
    }

    fn combatants(&self, battle: &Battle) -> Result<(&Creature, &Creature), BattleError> {
        let a = self.lookup(battle.combatant_a)?;
        let b = self.lookup(battle.combatant_b)?;
        Ok((a, b))
    }

    fn record(battle: &mut Battle, winner: CreatureId) {
        battle.winner = Some(winner);
        debug!(battle = %battle.id, %winner, "battle recorded");
    }

    fn lookup(&self, id: CreatureId) -> Result<&Creature, BattleError> {
        self.store
            .creature(id)
            .ok_or(BattleError::MissingCombatant { id })
    }
}
