//! Error types surfaced by battle resolution.

use crate::creature::CreatureId;

/// Errors raised while resolving a battle.
///
/// Neither variant is retried. Both are raised before any working state is
/// touched, so a failed battle has no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// A combatant entered the battle with non-positive hit points.
    #[error("creature {id} cannot fight with {hit_points} hit points")]
    InvalidCombatant {
        /// The offending creature.
        id: CreatureId,
        /// Its starting hit points.
        hit_points: i32,
    },

    /// A combatant identifier did not resolve to a creature record.
    ///
    /// Only raised by the caller-side [`BattleService`](crate::battle::BattleService);
    /// the resolver itself always receives resolved creatures.
    #[error("creature {id} does not exist")]
    MissingCombatant {
        /// The identifier that failed to resolve.
        id: CreatureId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_creature() {
        let invalid = BattleError::InvalidCombatant {
            id: CreatureId::new(4),
            hit_points: 0,
        };
        let missing = BattleError::MissingCombatant {
            id: CreatureId::new(11),
        };

        assert_eq!(invalid.to_string(), "creature 4 cannot fight with 0 hit points");
        assert_eq!(missing.to_string(), "creature 11 does not exist");
    }
}
