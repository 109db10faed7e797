//! Validated typings and per-type multiplier tables

use std::ops::Index;

use crate::ChartError;
use crate::types::pokemon_type::{TYPE_COUNT, Type};

/// Maximum number of types a single species can carry
pub const MAX_TYPES: usize = 2;

/// A species' typing: one or two types, in the order given
///
/// This is the boundary check for raw type labels. Analyses accept plain
/// `&[Type]` slices and never fail; `Typing` rejects unknown labels and
/// lists that are empty or longer than two before they get that far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Typing {
    primary: Type,
    secondary: Option<Type>,
}

impl Typing {
    /// Single-type typing
    pub fn single(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Dual-type typing
    pub fn dual(primary: Type, secondary: Type) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Build from a slice of 1-2 types
    pub fn from_types(types: &[Type]) -> Result<Self, ChartError> {
        match types {
            [] => Err(ChartError::EmptyTyping),
            [t] => Ok(Self::single(*t)),
            [a, b] => Ok(Self::dual(*a, *b)),
            _ => Err(ChartError::TooManyTypes(types.len())),
        }
    }

    /// Parse from raw labels, e.g. `["ghost", "dark"]`
    pub fn parse<S: AsRef<str>>(labels: &[S]) -> Result<Self, ChartError> {
        if labels.len() > MAX_TYPES {
            return Err(ChartError::TooManyTypes(labels.len()));
        }
        let types = labels
            .iter()
            .map(|s| s.as_ref().parse::<Type>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_types(&types)
    }

    pub fn primary(&self) -> Type {
        self.primary
    }

    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    /// Types as a vector, primary first
    pub fn types(&self) -> Vec<Type> {
        let mut types = vec![self.primary];
        types.extend(self.secondary);
        types
    }

    pub fn contains(&self, t: Type) -> bool {
        self.primary == t || self.secondary == Some(t)
    }
}

impl From<Type> for Typing {
    fn from(t: Type) -> Self {
        Self::single(t)
    }
}

impl std::fmt::Display for Typing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

/// One combined multiplier per type, indexed by [`Type`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Multipliers([f32; TYPE_COUNT]);

impl Multipliers {
    /// Table with every type at the same value
    pub fn filled(value: f32) -> Self {
        Self([value; TYPE_COUNT])
    }

    /// Build by evaluating `f` for every type in chart order
    pub fn from_fn(mut f: impl FnMut(Type) -> f32) -> Self {
        let mut values = [0.0; TYPE_COUNT];
        for t in Type::ALL {
            values[t.index()] = f(t);
        }
        Self(values)
    }

    pub fn get(&self, t: Type) -> f32 {
        self.0[t.index()]
    }

    /// Iterate `(type, multiplier)` pairs in chart order
    pub fn iter(&self) -> impl Iterator<Item = (Type, f32)> + '_ {
        Type::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    /// Types whose multiplier equals `value`, in chart order
    pub fn types_at(&self, value: f32) -> Vec<Type> {
        self.iter()
            .filter(|(_, m)| *m == value)
            .map(|(t, _)| t)
            .collect()
    }
}

impl Index<Type> for Multipliers {
    type Output = f32;

    fn index(&self, t: Type) -> &f32 {
        &self.0[t.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_parse() {
        let typing = Typing::parse(&["Ghost", "dark"]).unwrap();
        assert_eq!(typing.primary(), Type::Ghost);
        assert_eq!(typing.secondary(), Some(Type::Dark));
        assert_eq!(typing.types(), vec![Type::Ghost, Type::Dark]);
        assert_eq!(typing.to_string(), "Ghost/Dark");
    }

    #[test]
    fn test_typing_rejects_bad_input() {
        let empty: [&str; 0] = [];
        assert_eq!(Typing::parse(&empty), Err(ChartError::EmptyTyping));
        assert_eq!(
            Typing::parse(&["fire", "water", "grass"]),
            Err(ChartError::TooManyTypes(3))
        );
        assert_eq!(
            Typing::parse(&["fire", "cosmic"]),
            Err(ChartError::InvalidType("cosmic".to_string()))
        );
    }

    #[test]
    fn test_typing_allows_repeated_type() {
        let typing = Typing::from_types(&[Type::Fire, Type::Fire]).unwrap();
        assert!(typing.contains(Type::Fire));
        assert_eq!(typing.types().len(), 2);
    }

    #[test]
    fn test_multipliers_lookup() {
        let table = Multipliers::from_fn(|t| if t == Type::Water { 2.0 } else { 1.0 });
        assert_eq!(table.get(Type::Water), 2.0);
        assert_eq!(table[Type::Fire], 1.0);
        assert_eq!(table.types_at(2.0), vec![Type::Water]);
        assert_eq!(table.iter().count(), 18);
        assert_eq!(Multipliers::filled(1.0).types_at(1.0).len(), 18);
    }
}
