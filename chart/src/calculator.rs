//! Interactive type calculator state

use crate::query::{DefenseProfile, analyze_defense};
use crate::types::{MAX_TYPES, Type};

/// Up to two types picked one at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSelection {
    types: Vec<Type>,
}

impl TypeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a type in or out of the selection
    ///
    /// A selected type is removed. Otherwise it is appended, or replaces the
    /// second slot when two types are already selected.
    pub fn toggle(&mut self, t: Type) {
        if let Some(pos) = self.types.iter().position(|s| *s == t) {
            self.types.remove(pos);
        } else if self.types.len() < MAX_TYPES {
            self.types.push(t);
        } else {
            self.types[MAX_TYPES - 1] = t;
        }
    }

    pub fn clear(&mut self) {
        self.types.clear();
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn is_selected(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    /// Whether both slots are taken
    pub fn is_full(&self) -> bool {
        self.types.len() == MAX_TYPES
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Defense profile of the current selection, `None` while nothing is selected
    pub fn analysis(&self) -> Option<DefenseProfile> {
        if self.types.is_empty() {
            return None;
        }
        Some(analyze_defense(&self.types))
    }
}

/// A defense profile grouped by exact multiplier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefenseTiers {
    /// x4
    pub quad_weak: Vec<Type>,
    /// x2
    pub weak: Vec<Type>,
    /// x0.5
    pub resist: Vec<Type>,
    /// x0.25
    pub double_resist: Vec<Type>,
    /// x0
    pub immune: Vec<Type>,
}

impl DefenseTiers {
    pub fn from_profile(profile: &DefenseProfile) -> Self {
        let at = |list: &[Type], value: f32| -> Vec<Type> {
            list.iter()
                .copied()
                .filter(|t| profile.multiplier(*t) == value)
                .collect()
        };

        Self {
            quad_weak: at(&profile.weaknesses[..], 4.0),
            weak: at(&profile.weaknesses[..], 2.0),
            resist: at(&profile.resistances[..], 0.5),
            double_resist: at(&profile.resistances[..], 0.25),
            immune: profile.immunities.clone(),
        }
    }

    /// Non-empty tiers as `(label, types)` pairs, in display order
    pub fn sections(&self) -> Vec<(&'static str, &[Type])> {
        [
            ("x4", self.quad_weak.as_slice()),
            ("x2", self.weak.as_slice()),
            ("x0.5", self.resist.as_slice()),
            ("x0.25", self.double_resist.as_slice()),
            ("x0", self.immune.as_slice()),
        ]
        .into_iter()
        .filter(|(_, types)| !types.is_empty())
        .collect()
    }
}
