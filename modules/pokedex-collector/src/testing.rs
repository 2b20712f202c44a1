//! Deterministic in-memory source for loop tests: no HTTP, no live API.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use pokeapi_client::{
    ChainLink, EvolutionChain, NamedResource, Pokemon, RawBundle, ResourceRef, Species, StatEntry,
    TypeSlot,
};

use crate::EntitySource;

fn named(name: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: String::new(),
    }
}

/// A minimal single-node bundle: one type, one stat, no evolutions.
pub fn simple_bundle(id: u32, name: &str) -> RawBundle {
    RawBundle {
        pokemon: Pokemon {
            id,
            name: name.to_string(),
            types: vec![TypeSlot {
                type_ref: named("normal"),
            }],
            stats: vec![StatEntry {
                base_stat: 50,
                stat: named("hp"),
            }],
            species: named(name),
        },
        species: Species {
            evolution_chain: ResourceRef { url: String::new() },
        },
        evolution: EvolutionChain {
            chain: ChainLink {
                species: named(name),
                evolves_to: vec![],
                evolution_details: vec![],
            },
        },
    }
}

/// Serves pre-seeded bundles by key; unknown keys fail like a 404 would.
#[derive(Default)]
pub struct MockSource {
    bundles: HashMap<String, RawBundle>,
}

impl MockSource {
    pub fn with(mut self, key: &str, bundle: RawBundle) -> Self {
        self.bundles.insert(key.to_string(), bundle);
        self
    }
}

#[async_trait]
impl EntitySource for MockSource {
    async fn bundle(&self, key: &str) -> Result<RawBundle> {
        self.bundles
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("no bundle for key {key}"))
    }
}
