use thiserror::Error;
use typedex_species::ParseError;

/// Why a species could not be fetched
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Species name is empty")]
    EmptyName,

    #[error("Species not found: {0}")]
    NotFound(String),

    #[error("Species provider returned {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Species provider unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("Failed to parse provider response: {0}")]
    Parse(#[from] ParseError),
}

impl FetchError {
    /// Whether the provider answered but has no such species
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}
