//! Head-to-head comparison of two species

use typedex_chart::has_type_advantage;

use crate::species::Species;

/// Which side holds a type advantage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Only the left species hits the other's weaknesses
    Left,
    /// Only the right species hits the other's weaknesses
    Right,
    /// Both species hit each other's weaknesses
    Both,
    /// Neither side has an advantage
    Neutral,
}

/// Difference for one stat, left minus right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatDiff {
    pub name: String,
    pub left: u32,
    pub right: u32,
}

impl StatDiff {
    pub fn diff(&self) -> i64 {
        i64::from(self.left) - i64::from(self.right)
    }
}

/// Comparison of two species: stats side by side plus type advantage
#[derive(Debug, Clone)]
pub struct Versus<'a> {
    pub left: &'a Species,
    pub right: &'a Species,
}

impl<'a> Versus<'a> {
    pub fn new(left: &'a Species, right: &'a Species) -> Self {
        Self { left, right }
    }

    /// Stats paired by position; extra stats on either side are dropped
    pub fn stat_diffs(&self) -> Vec<StatDiff> {
        self.left
            .stats
            .iter()
            .zip(&self.right.stats)
            .map(|(l, r)| StatDiff {
                name: l.name.clone(),
                left: l.value,
                right: r.value,
            })
            .collect()
    }

    /// Whether one of the left species' types is a weakness of the right one
    pub fn left_has_advantage(&self) -> bool {
        has_type_advantage(&self.left.types, &self.right.types)
    }

    /// Whether one of the right species' types is a weakness of the left one
    pub fn right_has_advantage(&self) -> bool {
        has_type_advantage(&self.right.types, &self.left.types)
    }

    pub fn outcome(&self) -> Outcome {
        match (self.left_has_advantage(), self.right_has_advantage()) {
            (true, true) => Outcome::Both,
            (true, false) => Outcome::Left,
            (false, true) => Outcome::Right,
            (false, false) => Outcome::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::BaseStat;
    use typedex_chart::Type;

    fn species(name: &str, types: &[Type], stats: &[u32]) -> Species {
        let names = ["hp", "attack", "defense", "special-attack", "special-defense", "speed"];
        Species {
            id: 0,
            name: name.to_string(),
            types: types.to_vec(),
            image: None,
            stats: names
                .iter()
                .zip(stats)
                .map(|(n, v)| BaseStat {
                    name: n.to_string(),
                    value: *v,
                })
                .collect(),
            moves: vec![],
        }
    }

    #[test]
    fn test_stat_diffs() {
        let pikachu = species("pikachu", &[Type::Electric], &[35, 55, 40, 50, 50, 90]);
        let gyarados = species(
            "gyarados",
            &[Type::Water, Type::Flying],
            &[95, 125, 79, 60, 100, 81],
        );
        let versus = Versus::new(&pikachu, &gyarados);
        let diffs = versus.stat_diffs();

        assert_eq!(diffs.len(), 6);
        assert_eq!(diffs[0].name, "hp");
        assert_eq!(diffs[0].diff(), -60);
        assert_eq!(diffs[5].name, "speed");
        assert_eq!(diffs[5].diff(), 9);
    }

    #[test]
    fn test_stat_diffs_uneven_lengths() {
        let a = species("a", &[Type::Normal], &[10, 20, 30]);
        let b = species("b", &[Type::Normal], &[5, 5]);
        assert_eq!(Versus::new(&a, &b).stat_diffs().len(), 2);
    }

    #[test]
    fn test_outcome() {
        let pikachu = species("pikachu", &[Type::Electric], &[]);
        let gyarados = species("gyarados", &[Type::Water, Type::Flying], &[]);
        let garchomp = species("garchomp", &[Type::Dragon, Type::Ground], &[]);
        let snorlax = species("snorlax", &[Type::Normal], &[]);

        assert_eq!(Versus::new(&pikachu, &gyarados).outcome(), Outcome::Left);
        assert_eq!(Versus::new(&pikachu, &garchomp).outcome(), Outcome::Right);
        assert_eq!(Versus::new(&garchomp, &garchomp).outcome(), Outcome::Both);
        assert_eq!(Versus::new(&snorlax, &snorlax).outcome(), Outcome::Neutral);
    }
}
