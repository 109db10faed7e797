use std::time::Duration;

use typedex_species::DEFAULT_MOVES_LIMIT;

/// Public species provider
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Environment variable overriding [`ClientConfig::base_url`]
pub const API_URL_ENV: &str = "TYPEDEX_API_URL";

/// Species client settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Provider root, without trailing slash (e.g., `https://pokeapi.co/api/v2`)
    pub base_url: String,
    /// How many names to request for the species list
    pub list_limit: usize,
    /// How many moves to keep per species
    pub moves_limit: usize,
    /// How long a fetched species stays cached
    pub species_ttl: Duration,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            list_limit: 1500,
            moves_limit: DEFAULT_MOVES_LIMIT,
            species_ttl: Duration::from_secs(60 * 60),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `TYPEDEX_API_URL` when set
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn species_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    pub(crate) fn list_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url, self.list_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080/api/");
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(
            config.species_url("garchomp"),
            "http://localhost:8080/api/pokemon/garchomp"
        );
        assert_eq!(
            config.list_url(),
            "http://localhost:8080/api/pokemon?limit=1500"
        );
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, POKEAPI_URL);
        assert_eq!(config.moves_limit, 8);
        assert_eq!(config.species_ttl, Duration::from_secs(3600));
    }
}
