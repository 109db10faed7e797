//! Species name search over the provider's full name list

use crate::species::SpeciesRef;

/// Terms shorter than this never match
pub const MIN_TERM_LEN: usize = 2;

/// At most this many suggestions are returned
pub const MAX_MATCHES: usize = 5;

/// Names containing `term` (case-insensitive), in list order
///
/// Returns nothing for terms shorter than [`MIN_TERM_LEN`] characters, and at
/// most [`MAX_MATCHES`] names.
pub fn search_names<'a, S: AsRef<str>>(names: &'a [S], term: &str) -> Vec<&'a str> {
    search(names, term).map(S::as_ref).collect()
}

/// Like [`search_names`], over list entries so matches keep their provider id
pub fn search_indexed<'a>(list: &'a [SpeciesRef], term: &str) -> Vec<(u32, &'a str)> {
    search(list, term)
        .map(|entry| (entry.id, entry.name.as_str()))
        .collect()
}

fn search<'a, S: AsRef<str>>(items: &'a [S], term: &str) -> impl Iterator<Item = &'a S> {
    let term = term.trim().to_lowercase();
    let limit = if term.chars().count() < MIN_TERM_LEN {
        0
    } else {
        MAX_MATCHES
    };
    items
        .iter()
        .filter(move |item| S::as_ref(item).contains(term.as_str()))
        .take(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        [
            "bulbasaur",
            "ivysaur",
            "venusaur",
            "charmander",
            "charmeleon",
            "charizard",
            "squirtle",
            "wartortle",
            "blastoise",
            "caterpie",
            "metapod",
            "butterfree",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_short_terms_do_not_match() {
        let names = names();
        assert!(search_names(&names, "").is_empty());
        assert!(search_names(&names, "c").is_empty());
        assert!(search_names(&names, " c ").is_empty());
    }

    #[test]
    fn test_matches_substring_case_insensitive() {
        let names = names();
        assert_eq!(
            search_names(&names, "CHAR"),
            vec!["charmander", "charmeleon", "charizard"]
        );
        assert_eq!(search_names(&names, "tort"), vec!["wartortle"]);
        assert!(search_names(&names, "pikachu").is_empty());
    }

    #[test]
    fn test_matches_are_capped() {
        let names = names();
        assert_eq!(
            search_names(&names, "sa"),
            vec!["bulbasaur", "ivysaur", "venusaur"]
        );

        let pidgeys: Vec<String> = (1..=8).map(|i| format!("pidgey-{i}")).collect();
        let matches = search_names(&pidgeys, "pidg");
        assert_eq!(matches.len(), MAX_MATCHES);
        assert_eq!(matches[0], "pidgey-1");
        assert_eq!(matches[4], "pidgey-5");
    }

    #[test]
    fn test_indexed_keeps_provider_ids() {
        let list = vec![
            SpeciesRef { id: 386, name: "deoxys-normal".into() },
            SpeciesRef { id: 387, name: "turtwig".into() },
            SpeciesRef { id: 10001, name: "deoxys-attack".into() },
            SpeciesRef { id: 10002, name: "deoxys-defense".into() },
        ];
        assert_eq!(
            search_indexed(&list, "deoxys"),
            vec![(386, "deoxys-normal"), (10001, "deoxys-attack"), (10002, "deoxys-defense")]
        );
        assert!(search_indexed(&list, "d").is_empty());
        assert_eq!(search_names(&list, "TURT"), vec!["turtwig"]);
    }
}
