use thiserror::Error;

pub mod payload;
pub mod search;
pub mod species;
pub mod versus;

pub use payload::{DEFAULT_MOVES_LIMIT, parse_species, parse_species_list};
pub use search::{MAX_MATCHES, MIN_TERM_LEN, search_indexed, search_names};
pub use species::{BaseStat, Species, SpeciesRef};
pub use versus::{Outcome, StatDiff, Versus};

pub use typedex_chart::{ChartError, Type, Typing};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid type {0:?} for species {1}")]
    InvalidType(String, String),

    #[error("Species {0} has no types")]
    MissingTypes(String),

    #[error("Species {0} has {1} types, at most two are supported")]
    TooManyTypes(String, usize),

    #[error("No id in resource URL {0:?} for species {1}")]
    InvalidUrl(String, String),
}
