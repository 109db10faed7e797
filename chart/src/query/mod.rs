//! Effectiveness queries
//!
//! [`analyze_defense`] and [`analyze_offense`] classify every type against a
//! typing; the matchup helpers answer narrower questions on top of them.

mod analysis;
mod matchup;

pub use analysis::{
    DefenseProfile, OffenseProfile, analyze_defense, analyze_offense, defense_multipliers,
    offense_multipliers,
};
pub use matchup::{has_type_advantage, resistances, weaknesses};
