use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use typedex_species::{Species, SpeciesRef};

/// Responses kept between calls
pub(crate) struct ClientState {
    /// Full species list; it does not change while the client lives
    pub list: Option<Arc<Vec<SpeciesRef>>>,
    /// Species by lowercased name, with fetch time
    pub species: HashMap<String, (Instant, Species)>,
}

impl ClientState {
    pub fn new() -> Self {
        Self {
            list: None,
            species: HashMap::new(),
        }
    }

    /// A cached species, if fetched less than `ttl` ago
    pub fn fresh_species(&self, name: &str, ttl: Duration) -> Option<Species> {
        self.species
            .get(name)
            .filter(|(fetched, _)| fetched.elapsed() < ttl)
            .map(|(_, species)| species.clone())
    }

    /// Cache a species, dropping entries older than `ttl`
    pub fn store_species(&mut self, name: String, species: Species, ttl: Duration) {
        self.species.retain(|_, (fetched, _)| fetched.elapsed() < ttl);
        self.species.insert(name, (Instant::now(), species));
    }
}
