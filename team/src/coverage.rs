//! Team-wide defensive coverage
//!
//! Counts, for every attacking type, how many members are weak to it and how
//! many resist it or are immune to it.

use typedex_chart::{TYPE_COUNT, Type, analyze_defense};

/// A type is a threat when at least this many members are weak to it and none resist it
pub const THREAT_MIN_WEAK: usize = 2;

/// A type is covered when at least this many members resist it and at most one is weak
pub const COVERED_MIN_RESIST: usize = 3;

/// Per-type weakness and resistance counts for a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCoverage {
    weak: [usize; TYPE_COUNT],
    resist: [usize; TYPE_COUNT],
}

impl TeamCoverage {
    /// Members taking more than 1x from `attacker`
    pub fn weak_count(&self, attacker: Type) -> usize {
        self.weak[attacker.index()]
    }

    /// Members taking less than 1x from `attacker`, immunities included
    pub fn resist_count(&self, attacker: Type) -> usize {
        self.resist[attacker.index()]
    }

    /// Attacking types several members are weak to and nobody resists
    pub fn threats(&self) -> Vec<Type> {
        Type::ALL
            .into_iter()
            .filter(|t| self.weak_count(*t) >= THREAT_MIN_WEAK && self.resist_count(*t) == 0)
            .collect()
    }

    /// Attacking types most of the team shrugs off
    pub fn covered(&self) -> Vec<Type> {
        Type::ALL
            .into_iter()
            .filter(|t| self.resist_count(*t) >= COVERED_MIN_RESIST && self.weak_count(*t) <= 1)
            .collect()
    }
}

/// Coverage for a team given each member's types, `None` for an empty team
pub fn coverage<'a, I>(members: I) -> Option<TeamCoverage>
where
    I: IntoIterator<Item = &'a [Type]>,
{
    let mut weak = [0; TYPE_COUNT];
    let mut resist = [0; TYPE_COUNT];
    let mut count = 0;

    for types in members {
        count += 1;
        let profile = analyze_defense(types);
        for t in &profile.weaknesses {
            weak[t.index()] += 1;
        }
        for t in profile.resistances.iter().chain(&profile.immunities) {
            resist[t.index()] += 1;
        }
    }

    if count == 0 {
        return None;
    }
    Some(TeamCoverage { weak, resist })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(members: &[&[Type]]) -> TeamCoverage {
        coverage(members.iter().copied()).unwrap()
    }

    #[test]
    fn test_empty_team() {
        assert!(coverage(Vec::<&[Type]>::new()).is_none());
    }

    #[test]
    fn test_counts() {
        let cov = team(&[&[Type::Water], &[Type::Water, Type::Flying], &[Type::Ghost]]);

        // Water 2x, water/flying 4x, ghost neutral
        assert_eq!(cov.weak_count(Type::Electric), 2);
        assert_eq!(cov.resist_count(Type::Electric), 0);
        // Ghost is immune to normal; nobody else resists it
        assert_eq!(cov.resist_count(Type::Normal), 1);
        assert_eq!(cov.resist_count(Type::Fire), 2);
    }

    #[test]
    fn test_threats() {
        let cov = team(&[&[Type::Water], &[Type::Water, Type::Flying], &[Type::Ghost]]);
        assert_eq!(cov.threats(), vec![Type::Electric]);
    }

    #[test]
    fn test_threat_cancelled_by_one_resist() {
        let cov = team(&[&[Type::Water], &[Type::Water, Type::Flying], &[Type::Grass]]);
        // Grass resists electric
        assert!(!cov.threats().contains(&Type::Electric));
    }

    #[test]
    fn test_covered() {
        let cov = team(&[&[Type::Steel], &[Type::Steel, Type::Flying], &[Type::Fairy]]);
        let covered = cov.covered();
        // Steel, steel/flying and fairy all resist bug; fairy is immune to dragon
        assert!(covered.contains(&Type::Bug));
        assert!(covered.contains(&Type::Dragon));
        assert!(!covered.contains(&Type::Fire));
    }
}
