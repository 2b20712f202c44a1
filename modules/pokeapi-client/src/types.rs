use serde::Deserialize;

// --- Shared wire fragments ---

/// A `{ name, url }` pair, the standard PokeAPI reference shape.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A bare `{ url }` reference (species → evolution chain).
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

// --- /pokemon/{id-or-name} ---

/// The slice of the pokemon payload this pipeline consumes.
/// Unknown fields on the wire are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub species: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

// --- species and evolution chain ---

#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    pub evolution_chain: ResourceRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

/// One node of the evolution tree. Small and acyclic by domain
/// construction, so plain owned recursion is fine.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvolutionDetail {
    pub min_level: Option<u32>,
}

/// The three payloads fetched for one entity. Transient: built by
/// `PokeApiClient::bundle`, consumed by the record formatter, dropped.
#[derive(Debug, Clone)]
pub struct RawBundle {
    pub pokemon: Pokemon,
    pub species: Species,
    pub evolution: EvolutionChain,
}
