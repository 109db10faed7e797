//! Defensive and offensive effectiveness profiles
//!
//! Defense multiplies across the defender's types, since both typings take the
//! hit at once. Offense takes the best single matchup across the attacker's
//! types, since only one move is used per attack.

use crate::types::{Multipliers, Type};

/// How much damage a typing receives from every attacking type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DefenseProfile {
    /// Combined multiplier per attacking type
    pub multipliers: Multipliers,
    /// Attacking types dealing more than 1x, strongest first
    pub weaknesses: Vec<Type>,
    /// Attacking types dealing between 0x and 1x, most resisted first
    pub resistances: Vec<Type>,
    /// Attacking types dealing 0x
    pub immunities: Vec<Type>,
}

impl DefenseProfile {
    /// Multiplier received from `attacker`
    pub fn multiplier(&self, attacker: Type) -> f32 {
        self.multipliers.get(attacker)
    }

    /// Attacking types dealing exactly 1x
    pub fn neutral(&self) -> Vec<Type> {
        self.multipliers.types_at(1.0)
    }

    /// Whether `attacker` deals more than 1x
    pub fn is_weak_to(&self, attacker: Type) -> bool {
        self.multiplier(attacker) > 1.0
    }
}

/// How well a typing's same-type attacks hit every defending type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OffenseProfile {
    /// Best multiplier per defending type
    pub multipliers: Multipliers,
    pub super_effective: Vec<Type>,
    pub not_very_effective: Vec<Type>,
    pub no_effect: Vec<Type>,
}

impl OffenseProfile {
    /// Best multiplier achievable against `defender`
    pub fn multiplier(&self, defender: Type) -> f32 {
        self.multipliers.get(defender)
    }

    /// Defending types hit for exactly 1x
    pub fn neutral(&self) -> Vec<Type> {
        self.multipliers.types_at(1.0)
    }
}

/// Combined multiplier each attacking type deals to the given defending types
///
/// An empty slice yields 1x for every attacker.
pub fn defense_multipliers(types: &[Type]) -> Multipliers {
    Multipliers::from_fn(|attacker| attacker.effectiveness_multi(types))
}

/// Best multiplier any of the given attacking types deals to each defending type
///
/// An empty slice yields 1x for every defender.
pub fn offense_multipliers(types: &[Type]) -> Multipliers {
    Multipliers::from_fn(|defender| {
        types
            .iter()
            .map(|attacker| attacker.effectiveness(defender))
            .reduce(f32::max)
            .unwrap_or(1.0)
    })
}

/// Classify every attacking type by the damage the given typing receives
pub fn analyze_defense(types: &[Type]) -> DefenseProfile {
    let multipliers = defense_multipliers(types);

    let mut weaknesses = Vec::new();
    let mut resistances = Vec::new();
    let mut immunities = Vec::new();

    for (attacker, value) in multipliers.iter() {
        if value > 1.0 {
            weaknesses.push(attacker);
        } else if value == 0.0 {
            immunities.push(attacker);
        } else if value < 1.0 {
            resistances.push(attacker);
        }
    }

    // sort_by is stable, so equal multipliers keep chart order
    weaknesses.sort_by(|a, b| multipliers[*b].total_cmp(&multipliers[*a]));
    resistances.sort_by(|a, b| multipliers[*a].total_cmp(&multipliers[*b]));

    DefenseProfile {
        multipliers,
        weaknesses,
        resistances,
        immunities,
    }
}

/// Classify every defending type by how well the given typing's attacks hit it
pub fn analyze_offense(types: &[Type]) -> OffenseProfile {
    let multipliers = offense_multipliers(types);

    let mut super_effective = Vec::new();
    let mut not_very_effective = Vec::new();
    let mut no_effect = Vec::new();

    for (defender, best) in multipliers.iter() {
        if best > 1.0 {
            super_effective.push(defender);
        } else if best == 0.0 {
            no_effect.push(defender);
        } else if best < 1.0 {
            not_very_effective.push(defender);
        }
    }

    OffenseProfile {
        multipliers,
        super_effective,
        not_very_effective,
        no_effect,
    }
}
