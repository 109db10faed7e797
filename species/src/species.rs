//! Species records as consumed by the analyses

use serde::Serialize;
use typedex_chart::{DefenseProfile, OffenseProfile, Type, analyze_defense, analyze_offense};

/// A species as returned by the provider, trimmed to what the app shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Species {
    /// Provider's national dex number
    pub id: u32,

    /// Lowercase provider name (e.g., "garchomp")
    pub name: String,

    /// One or two types, primary first
    pub types: Vec<Type>,

    /// Artwork URL, if the provider has one
    pub image: Option<String>,

    /// Base stats in provider order
    pub stats: Vec<BaseStat>,

    /// Move names with the first dash replaced by a space
    pub moves: Vec<String>,
}

/// A named base stat (e.g., "hp" = 108)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseStat {
    pub name: String,
    pub value: u32,
}

/// An entry of the provider's species list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesRef {
    /// Provider id; alternate forms use ids from 10001 up
    pub id: u32,
    pub name: String,
}

impl AsRef<str> for SpeciesRef {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl Species {
    /// Look up a base stat by provider name
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.value)
    }

    /// Sum of all base stats
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.value).sum()
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    /// Damage taken from every attacking type
    pub fn defense(&self) -> DefenseProfile {
        analyze_defense(&self.types)
    }

    /// Same-type coverage against every defending type
    pub fn offense(&self) -> OffenseProfile {
        analyze_offense(&self.types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garchomp() -> Species {
        Species {
            id: 445,
            name: "garchomp".to_string(),
            types: vec![Type::Dragon, Type::Ground],
            image: None,
            stats: vec![
                BaseStat { name: "hp".into(), value: 108 },
                BaseStat { name: "attack".into(), value: 130 },
                BaseStat { name: "defense".into(), value: 95 },
                BaseStat { name: "special-attack".into(), value: 80 },
                BaseStat { name: "special-defense".into(), value: 85 },
                BaseStat { name: "speed".into(), value: 102 },
            ],
            moves: vec![],
        }
    }

    #[test]
    fn test_stat_lookup() {
        let species = garchomp();
        assert_eq!(species.stat("attack"), Some(130));
        assert_eq!(species.stat("Speed"), Some(102));
        assert_eq!(species.stat("evasion"), None);
        assert_eq!(species.base_stat_total(), 600);
    }

    #[test]
    fn test_analyses_use_types() {
        let species = garchomp();
        assert!(species.has_type(Type::Ground));
        let defense = species.defense();
        assert_eq!(defense.weaknesses[0], Type::Ice);
        assert_eq!(defense.multiplier(Type::Ice), 4.0);
        assert_eq!(defense.immunities, vec![Type::Electric]);
        // Ground covers the fairy immunity, dragon covers flying
        assert!(species.offense().no_effect.is_empty());
    }
}
