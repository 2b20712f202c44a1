pub mod error;
pub mod types;

pub use error::{PokeApiError, Result};
pub use types::{
    ChainLink, EvolutionChain, EvolutionDetail, NamedResource, Pokemon, RawBundle, ResourceRef,
    Species, StatEntry, TypeSlot,
};

use std::time::Duration;

use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET an arbitrary URL and decode the JSON body. Non-success
    /// statuses become `Api` errors with the body text as the message;
    /// transport and decode failures convert via `From<reqwest::Error>`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(PokeApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }

    /// Fetch `/pokemon/{key}` where `key` is a decimal pokedex id or a
    /// lowercased name.
    pub async fn pokemon(&self, key: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, key);
        self.get_json(&url).await
    }

    /// Fetch species data via the URL embedded in the pokemon payload.
    pub async fn species_by_url(&self, url: &str) -> Result<Species> {
        self.get_json(url).await
    }

    /// Fetch the evolution chain via the URL embedded in the species payload.
    pub async fn evolution_chain_by_url(&self, url: &str) -> Result<EvolutionChain> {
        self.get_json(url).await
    }

    /// Fetch the three chained payloads for one entity. All three must
    /// succeed for the entity to be usable downstream.
    pub async fn bundle(&self, key: &str) -> Result<RawBundle> {
        let pokemon = self.pokemon(key).await?;
        let species = self.species_by_url(&pokemon.species.url).await?;
        let evolution = self
            .evolution_chain_by_url(&species.evolution_chain.url)
            .await?;

        Ok(RawBundle {
            pokemon,
            species,
            evolution,
        })
    }
}
