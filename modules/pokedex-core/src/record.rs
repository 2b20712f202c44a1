//! The per-entity output record and the insertion-ordered collection.

use pokeapi_client::RawBundle;
use serde::Serialize;

use crate::evolution;
use crate::stats::{BaseStats, GrowthRates};

/// One entity as it appears in the output document. Field order here is
/// serialization order; the evolution fields are omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonRecord {
    #[serde(rename = "pokedexId")]
    pub pokedex_id: u32,
    pub types: Vec<String>,
    pub base: BaseStats,
    pub growth: GrowthRates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evolution: Option<String>,
    #[serde(rename = "evolveLevel", skip_serializing_if = "Option::is_none")]
    pub evolve_level: Option<u32>,
}

/// Reshape one fetched bundle into its `(display name, record)` pair.
pub fn format_record(bundle: &RawBundle) -> (String, PokemonRecord) {
    let name = title_case(&bundle.pokemon.name);

    let types = bundle
        .pokemon
        .types
        .iter()
        .map(|slot| title_case(&slot.type_ref.name))
        .collect();

    let base = BaseStats::from_entries(&bundle.pokemon.stats);
    let growth = GrowthRates::from_base(&base);

    let next = evolution::resolve(&bundle.evolution.chain, &name.to_lowercase());

    let record = PokemonRecord {
        pokedex_id: bundle.pokemon.id,
        types,
        base,
        growth,
        evolution: next.name,
        evolve_level: next.min_level,
    };

    (name, record)
}

/// Uppercase the first letter of every alphabetic run, lowercase the
/// rest: `"mr-mime"` becomes `"Mr-Mime"`. Hyphenated API names must
/// keep their hyphen-split capitalization in the output.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Insertion-ordered `display name -> record` mapping accumulated over
/// one run. Re-inserting an existing key overwrites the record in
/// place without moving it.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: Vec<(String, PokemonRecord)>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, record: PokemonRecord) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = record,
            None => self.entries.push((name, record)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PokemonRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PokemonRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }
}
