//! Battle outcomes and exchange logs.
//!
//! - [`Side`]: Which argument of the resolver a combatant was
//! - [`Initiative`]: Why a side struck in a given exchange
//! - [`Exchange`]: One attacker-to-defender damage application
//! - [`Outcome`]: The winner and summary counters
//! - [`BattleReport`]: An outcome plus every exchange, in order

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::creature::CreatureId;

/// Position of a combatant in the resolver's argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First argument (combatant A).
    A,
    /// Second argument (combatant B).
    B,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Index into a two-element working state.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// The rule that selected the attacker of an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initiative {
    /// Strictly higher speed.
    Speed,
    /// Equal speed, strictly higher attack.
    Attack,
    /// Equal speed and attack; picked by the configured tie-break.
    TieBreak,
}

/// A single exchange: one attacker strikes one defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// 1-based position of this exchange in the battle.
    pub number: u64,
    /// Side that struck.
    pub attacker: Side,
    /// Why that side struck.
    pub initiative: Initiative,
    /// Damage dealt (always at least the rules' damage floor).
    pub damage: i64,
    /// Defender's hit points after the blow. May be negative.
    pub defender_hp: i64,
}

/// Result of a resolved battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Identity of the surviving creature.
    pub winner: CreatureId,
    /// Argument position of the surviving creature.
    pub winner_side: Side,
    /// Number of exchanges fought.
    pub exchanges: u64,
    /// Hit points the winner had left (always positive).
    pub winner_hp: i64,
}

/// An [`Outcome`] together with the full exchange log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    /// Battle summary.
    pub outcome: Outcome,
    /// Every exchange, in the order fought.
    pub exchanges: Vec<Exchange>,
}

impl BattleReport {
    /// Returns the side that took the first blow.
    #[must_use]
    pub fn first_struck(&self) -> Option<Side> {
        self.exchanges.first().map(|e| e.attacker.opponent())
    }

    /// Total damage dealt to `side` over the whole battle.
    #[must_use]
    pub fn damage_taken(&self, side: Side) -> i64 {
        self.exchanges
            .iter()
            .filter(|e| e.attacker.opponent() == side)
            .map(|e| e.damage)
            .sum()
    }

    /// Number of exchanges in which `side` was the attacker.
    #[must_use]
    pub fn strikes_by(&self, side: Side) -> usize {
        self.exchanges.iter().filter(|e| e.attacker == side).count()
    }
}
