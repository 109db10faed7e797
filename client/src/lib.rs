//! Async client for the species provider.
//!
//! [`SpeciesClient`] fetches species and the full species name list, caches
//! both in memory, and hands species types to the `typedex-chart` analyses.
//!
//! # Example Usage
//!
//! ```ignore
//! use typedex_client::{ClientConfig, SpeciesClient};
//!
//! let client = SpeciesClient::new(ClientConfig::from_env())?;
//! let garchomp = client.fetch_species("garchomp").await?;
//! let defense = client.defense_for("garchomp").await?;
//! println!("{} is weak to {:?}", garchomp.name, defense.weaknesses);
//! ```

mod config;
mod error;
mod state;

use std::sync::Arc;

use reqwest::StatusCode;
use tokio::sync::RwLock;

pub use config::{API_URL_ENV, ClientConfig, POKEAPI_URL};
pub use error::FetchError;
pub use typedex_chart::{DefenseProfile, OffenseProfile, Type};
pub use typedex_species::{Species, SpeciesRef, Versus};

use state::ClientState;
use typedex_chart::{analyze_defense, analyze_offense};
use typedex_species::{parse_species, parse_species_list, search_indexed, search_names};

/// Species provider client
///
/// Cloning is cheap; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct SpeciesClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    config: ClientConfig,
    state: RwLock<ClientState>,
}

impl SpeciesClient {
    /// Build a client with the given settings
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                config,
                state: RwLock::new(ClientState::new()),
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Fetch one species by name (case-insensitive)
    pub async fn fetch_species(&self, name: &str) -> Result<Species, FetchError> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return Err(FetchError::EmptyName);
        }

        let ttl = self.inner.config.species_ttl;
        if let Some(species) = self.inner.state.read().await.fresh_species(&key, ttl) {
            tracing::debug!(name = %key, "Species cache hit");
            return Ok(species);
        }

        let url = self.inner.config.species_url(&key);
        let body = match self.get(&url).await {
            Ok(body) => body,
            Err(FetchError::Status { status: 404, .. }) => {
                tracing::debug!(name = %key, "Species not found");
                return Err(FetchError::NotFound(key));
            }
            Err(e) => return Err(e),
        };
        let species = parse_species(&body, self.inner.config.moves_limit)?;

        self.inner
            .state
            .write()
            .await
            .store_species(key, species.clone(), ttl);
        Ok(species)
    }

    /// Fetch every species id and name, in provider order
    ///
    /// The list is fetched once per client and reused afterwards.
    pub async fn fetch_species_list(&self) -> Result<Arc<Vec<SpeciesRef>>, FetchError> {
        if let Some(list) = self.inner.state.read().await.list.clone() {
            return Ok(list);
        }

        let body = self.get(&self.inner.config.list_url()).await?;
        let list = Arc::new(parse_species_list(&body)?);
        tracing::debug!(count = list.len(), "Fetched species list");

        self.inner.state.write().await.list = Some(list.clone());
        Ok(list)
    }

    /// Name suggestions for a partially typed species name
    pub async fn search(&self, term: &str) -> Result<Vec<String>, FetchError> {
        let list = self.fetch_species_list().await?;
        Ok(search_names(list.as_slice(), term)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Like [`search`](Self::search), keeping each match's provider id
    pub async fn search_indexed(&self, term: &str) -> Result<Vec<SpeciesRef>, FetchError> {
        let list = self.fetch_species_list().await?;
        Ok(search_indexed(list.as_slice(), term)
            .into_iter()
            .map(|(id, name)| SpeciesRef {
                id,
                name: name.to_string(),
            })
            .collect())
    }

    /// Damage a species takes from every attacking type
    pub async fn defense_for(&self, name: &str) -> Result<DefenseProfile, FetchError> {
        let species = self.fetch_species(name).await?;
        Ok(analyze_defense(&species.types))
    }

    /// How well a species' own types hit every defending type
    pub async fn offense_for(&self, name: &str) -> Result<OffenseProfile, FetchError> {
        let species = self.fetch_species(name).await?;
        Ok(analyze_offense(&species.types))
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(%url, "GET");

        let response = self.inner.http.get(url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "Species provider request failed");
            FetchError::Unavailable(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            if status != StatusCode::NOT_FOUND {
                tracing::warn!(%url, status = status.as_u16(), "Species provider returned an error");
            }
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
