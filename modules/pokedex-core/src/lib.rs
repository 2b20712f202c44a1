pub mod evolution;
pub mod export;
pub mod record;
pub mod stats;

pub use evolution::NextEvolution;
pub use export::{write_json, ExportError};
pub use record::{format_record, title_case, Pokedex, PokemonRecord};
pub use stats::{BaseStats, GrowthRates};
