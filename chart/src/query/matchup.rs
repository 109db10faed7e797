//! Type matchup helpers

use crate::query::analysis::analyze_defense;
use crate::types::Type;

/// Types super effective against the defender, strongest first
pub fn weaknesses(defender_types: &[Type]) -> Vec<Type> {
    analyze_defense(defender_types).weaknesses
}

/// Types the defender resists (0 < effectiveness < 1), most resisted first
pub fn resistances(defender_types: &[Type]) -> Vec<Type> {
    analyze_defense(defender_types).resistances
}

/// Whether any of the attacker's own types is among the defender's weaknesses
///
/// This is the head-to-head view: the attacker is assumed to carry a move of
/// each of its own types.
pub fn has_type_advantage(attacker_types: &[Type], defender_types: &[Type]) -> bool {
    let defense = analyze_defense(defender_types);
    attacker_types.iter().any(|t| defense.is_weak_to(*t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weaknesses() {
        assert_eq!(
            weaknesses(&[Type::Steel]),
            vec![Type::Fire, Type::Fighting, Type::Ground]
        );
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground is only weak to Grass (4x)
        assert_eq!(weaknesses(&[Type::Water, Type::Ground]), vec![Type::Grass]);
    }

    #[test]
    fn test_resistances() {
        let resists = resistances(&[Type::Steel]);
        assert!(resists.contains(&Type::Normal));
        assert!(resists.contains(&Type::Ice));
        assert!(resists.contains(&Type::Fairy));
        assert!(!resists.contains(&Type::Fire));
        // Poison is an immunity, not a resistance
        assert!(!resists.contains(&Type::Poison));
    }

    #[test]
    fn test_has_type_advantage() {
        // Pikachu against Gyarados
        assert!(has_type_advantage(
            &[Type::Electric],
            &[Type::Water, Type::Flying]
        ));
        // Gyarados against Pikachu
        assert!(!has_type_advantage(
            &[Type::Water, Type::Flying],
            &[Type::Electric]
        ));
        assert!(!has_type_advantage(&[], &[Type::Fire]));
    }

    #[test]
    fn test_immunity_is_not_an_advantage() {
        // Normal and fighting do nothing to ghost; dark hits it for 2x
        assert!(!has_type_advantage(&[Type::Normal, Type::Fighting], &[Type::Ghost]));
        assert!(has_type_advantage(&[Type::Normal, Type::Dark], &[Type::Ghost]));
    }
}
