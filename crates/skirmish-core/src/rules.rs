//! Battle rules configuration.
//!
//! [`BattleRules`] holds the few knobs the resolver exposes. Every field has a
//! default, so an empty JSON object (or no file at all) yields the standard
//! rules:
//!
//! ```
//! use skirmish_core::rules::{BattleRules, TieBreak};
//!
//! let rules = BattleRules::from_json_str(r#"{"tie_break": "first_combatant"}"#).unwrap();
//! assert_eq!(rules.min_damage, 1);
//! assert_eq!(rules.tie_break, TieBreak::FirstCombatant);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Damage dealt by an exchange when attack does not exceed defense.
pub const DEFAULT_MIN_DAMAGE: i32 = 1;

/// How the attacker is chosen when speed and attack are both equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Alternate the attacker every exchange, starting with combatant A.
    #[default]
    Alternate,
    /// Combatant A strikes every exchange.
    FirstCombatant,
}

/// Errors raised while loading or validating [`BattleRules`].
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// The rules file could not be read.
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    /// The rules document is not valid JSON for [`BattleRules`].
    #[error("failed to parse rules: {0}")]
    Parse(#[from] serde_json::Error),

    /// `min_damage` below 1 would let a battle run forever.
    #[error("min_damage must be at least 1, got {0}")]
    MinDamage(i32),
}

/// Tunable rules for battle resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BattleRules {
    /// Damage floor applied to every exchange. Must be at least 1.
    pub min_damage: i32,
    /// Attacker selection when speed and attack are both tied.
    pub tie_break: TieBreak,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            min_damage: DEFAULT_MIN_DAMAGE,
            tie_break: TieBreak::default(),
        }
    }
}

impl BattleRules {
    /// Checks that the rules guarantee termination.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::MinDamage`] if `min_damage < 1`.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.min_damage < 1 {
            return Err(RulesError::MinDamage(self.min_damage));
        }
        Ok(())
    }

    /// Parses and validates rules from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Parse`] on malformed input or unknown fields, and
    /// [`RulesError::MinDamage`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reads, parses and validates rules from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Io`] if the file cannot be read, otherwise the
    /// errors of [`BattleRules::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = BattleRules::default();
        assert_eq!(rules.min_damage, 1);
        assert_eq!(rules.tie_break, TieBreak::Alternate);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn empty_object_yields_defaults() {
        let rules = BattleRules::from_json_str("{}").unwrap();
        assert_eq!(rules, BattleRules::default());
    }

    #[test]
    fn parses_all_fields() {
        let rules =
            BattleRules::from_json_str(r#"{"min_damage": 3, "tie_break": "alternate"}"#).unwrap();
        assert_eq!(rules.min_damage, 3);
        assert_eq!(rules.tie_break, TieBreak::Alternate);
    }

    #[test]
    fn rejects_zero_min_damage() {
        let err = BattleRules::from_json_str(r#"{"min_damage": 0}"#).unwrap_err();
        assert!(matches!(err, RulesError::MinDamage(0)));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = BattleRules::from_json_str(r#"{"crit_chance": 5}"#).unwrap_err();
        assert!(matches!(err, RulesError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_tie_break() {
        let err = BattleRules::from_json_str(r#"{"tie_break": "coin_flip"}"#).unwrap_err();
        assert!(matches!(err, RulesError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = BattleRules::from_path("/nonexistent/skirmish/rules.json").unwrap_err();
        assert!(matches!(err, RulesError::Io(_)));
    }
}
