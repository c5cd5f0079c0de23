//! Creature records consumed by the battle resolver.
//!
//! This module provides:
//! - [`CreatureId`]: Opaque identifier used to report winners
//! - [`Stats`]: The four combat stats of a creature
//! - [`Creature`]: A named creature with its stats
//!
//! Creatures are read-only inputs. The resolver copies hit points into its own
//! working state and never mutates the records it is given.
//!
//! # Example
//!
//! ```
//! use skirmish_core::creature::{Creature, CreatureId, Stats};
//!
//! let wolf = Creature::new(CreatureId::new(7), "Wolf", Stats::new(10, 5, 5, 10));
//!
//! assert_eq!(wolf.id().as_u64(), 7);
//! assert_eq!(wolf.stats().attack, 10);
//! assert!(wolf.is_fit());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a creature.
///
/// `CreatureId` is a newtype wrapper around `u64`. The resolver treats it as
/// opaque and only carries it through to the reported winner.
///
/// # Ordering
///
/// IDs are ordered by their numeric value. Rosters and tournaments rely on
/// this for deterministic iteration.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(u64);

impl CreatureId {
    /// Creates a new `CreatureId` from a raw `u64` value.
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

impl fmt::Debug for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CreatureId({})", self.0)
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CreatureId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<CreatureId> for u64 {
    fn from(id: CreatureId) -> Self {
        id.0
    }
}

/// Combat stats of a creature.
///
/// `attack`, `defense` and `speed` stay fixed for the whole battle; only a
/// working copy of `hit_points` is decremented by the resolver. A creature
/// must enter a battle with `hit_points > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    /// Offensive power.
    pub attack: i32,
    /// Damage mitigation.
    pub defense: i32,
    /// Turn-order priority.
    pub speed: i32,
    /// Remaining vitality.
    pub hit_points: i32,
}

impl Stats {
    /// Creates a stat block.
    #[must_use]
    pub const fn new(attack: i32, defense: i32, speed: i32, hit_points: i32) -> Self {
        Self {
            attack,
            defense,
            speed,
            hit_points,
        }
    }
}

/// A creature that can take part in a battle.
///
/// Serialized with its stats flattened into the record:
///
/// ```json
/// {"id": 1, "name": "Wolf", "attack": 10, "defense": 5, "speed": 5, "hit_points": 10}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    id: CreatureId,
    #[serde(default)]
    name: String,
    #[serde(flatten)]
    stats: Stats,
}

impl Creature {
    /// Creates a creature.
    #[must_use]
    pub fn new(id: CreatureId, name: impl Into<String>, stats: Stats) -> Self {
        Self {
            id,
            name: name.into(),
            stats,
        }
    }

    /// Returns the creature's identifier.
    #[must_use]
    pub const fn id(&self) -> CreatureId {
        self.id
    }

    /// Returns the creature's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creature's stats.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns true if the creature can enter a battle (`hit_points > 0`).
    #[must_use]
    pub const fn is_fit(&self) -> bool {
        self.stats.hit_points > 0
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "#{}", self.id)
        } else {
            write!(f, "{} (#{})", self.name, self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod creature_id_tests {
        use super::*;

        #[test]
        fn ids_order_numerically() {
            assert!(CreatureId::new(1) < CreatureId::new(2));
            assert!(CreatureId::new(10) > CreatureId::new(9));
        }

        #[test]
        fn id_conversions() {
            let id: CreatureId = 42u64.into();
            assert_eq!(id.as_u64(), 42);
            assert_eq!(u64::from(id), 42);
        }

        #[test]
        fn id_formatting() {
            let id = CreatureId::new(3);
            assert_eq!(format!("{id:?}"), "CreatureId(3)");
            assert_eq!(format!("{id}"), "3");
        }
    }

    mod creature_tests {
        use super::*;

        #[test]
        fn fitness_requires_positive_hit_points() {
            let alive = Creature::new(CreatureId::new(1), "a", Stats::new(1, 1, 1, 1));
            let zero = Creature::new(CreatureId::new(2), "b", Stats::new(1, 1, 1, 0));
            let negative = Creature::new(CreatureId::new(3), "c", Stats::new(1, 1, 1, -4));

            assert!(alive.is_fit());
            assert!(!zero.is_fit());
            assert!(!negative.is_fit());
        }

        #[test]
        fn display_uses_name_when_present() {
            let named = Creature::new(CreatureId::new(5), "Wolf", Stats::new(1, 1, 1, 1));
            let anonymous = Creature::new(CreatureId::new(6), "", Stats::new(1, 1, 1, 1));

            assert_eq!(named.to_string(), "Wolf (#5)");
            assert_eq!(anonymous.to_string(), "#6");
        }

        #[test]
        fn serializes_with_flattened_stats() {
            let wolf = Creature::new(CreatureId::new(1), "Wolf", Stats::new(10, 5, 7, 12));
            let json = serde_json::to_value(&wolf).unwrap();

            assert_eq!(json["id"], 1);
            assert_eq!(json["name"], "Wolf");
            assert_eq!(json["attack"], 10);
            assert_eq!(json["defense"], 5);
            assert_eq!(json["speed"], 7);
            assert_eq!(json["hit_points"], 12);
        }

        #[test]
        fn deserializes_without_name() {
            let json = r#"{"id": 9, "attack": 3, "defense": 2, "speed": 1, "hit_points": 4}"#;
            let creature: Creature = serde_json::from_str(json).unwrap();

            assert_eq!(creature.id(), CreatureId::new(9));
            assert_eq!(creature.name(), "");
            assert_eq!(*creature.stats(), Stats::new(3, 2, 1, 4));
        }
    }
}
