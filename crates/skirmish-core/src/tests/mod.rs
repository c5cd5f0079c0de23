//! Cross-module battle tests.
//!
//! - `scenarios.rs`: Fixed matchups with hand-checked results
//! - `determinism.rs`: Repeatability and argument-order checks
//! - `properties.rs`: Property tests over random stat blocks
//! - `helpers.rs`: Creature factories

mod helpers;

pub use helpers::*;
