//! Type chart and type effectiveness analysis.
//!
//! This crate is the engine shared by every other `typedex` crate. It owns the
//! fixed 18-type universe, the 18x18 effectiveness chart, and the two analyses
//! built on top of it.
//!
//! # Overview
//!
//! ```text
//! typedex-chart (types + chart + analysis) ← THIS CRATE
//!        │
//!        ├─> typedex-species (provider payloads, versus)
//!        │          └─> typedex-client (HTTP fetch + cache)
//!        ├─> typedex-team (team store, coverage)
//!        └─> typedex-quiz (weakness quiz)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 types, with [`TYPE_CHART`] lookups
//! - [`Typing`] - a validated 1-2 type combination parsed from raw labels
//! - [`DefenseProfile`] - result of [`analyze_defense`]: damage taken, multiplied across types
//! - [`OffenseProfile`] - result of [`analyze_offense`]: best damage dealt across types
//! - [`TypeSelection`] - calculator state, at most two types
//!
//! # Example Usage
//!
//! ```
//! use typedex_chart::{Type, Typing, analyze_defense, analyze_offense};
//!
//! let typing = Typing::parse(&["ghost", "dark"]).unwrap();
//! let defense = analyze_defense(&typing.types());
//! assert_eq!(defense.weaknesses, vec![Type::Fairy]);
//! assert!(defense.immunities.contains(&Type::Normal));
//!
//! let offense = analyze_offense(&[Type::Fire, Type::Flying]);
//! assert!(offense.super_effective.contains(&Type::Fighting));
//! ```

pub mod calculator;
mod error;
pub mod query;
pub mod types;

pub use calculator::{DefenseTiers, TypeSelection};
pub use error::ChartError;
pub use query::{
    DefenseProfile, OffenseProfile, analyze_defense, analyze_offense, has_type_advantage,
};
pub use types::{MAX_TYPES, Multipliers, TYPE_CHART, TYPE_COUNT, Type, Typing, multiplier};
