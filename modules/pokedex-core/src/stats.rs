//! Base-stat extraction and the derived growth-rate heuristic.

use pokeapi_client::StatEntry;
use serde::Serialize;

/// Growth multiplier per stat. These are illustrative placeholders,
/// not a validated game mechanic. Treat the derived numbers as such.
pub const HP_GROWTH: f64 = 0.05;
pub const ATTACK_GROWTH: f64 = 0.03;
pub const DEFENSE_GROWTH: f64 = 0.03;
pub const SPEED_GROWTH: f64 = 0.025;

/// The four recognized base stats. A field is `None` when the stat was
/// missing from the payload; absent stats serialize as absent keys, so
/// there is no zero-fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BaseStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
}

impl BaseStats {
    /// Keep the recognized stats, values unchanged. Unrecognized names
    /// (special-attack, special-defense, ...) are dropped; input order
    /// has no effect.
    pub fn from_entries(entries: &[StatEntry]) -> Self {
        let mut out = Self::default();
        for entry in entries {
            match entry.stat.name.as_str() {
                "hp" => out.hp = Some(entry.base_stat),
                "attack" => out.attack = Some(entry.base_stat),
                "defense" => out.defense = Some(entry.base_stat),
                "speed" => out.speed = Some(entry.base_stat),
                _ => {}
            }
        }
        out
    }
}

/// Per-stat growth estimate, rounded to one decimal; present only for
/// stats that appear in the base record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GrowthRates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl GrowthRates {
    pub fn from_base(base: &BaseStats) -> Self {
        Self {
            hp: base.hp.map(|v| round1(v as f64 * HP_GROWTH)),
            attack: base.attack.map(|v| round1(v as f64 * ATTACK_GROWTH)),
            defense: base.defense.map(|v| round1(v as f64 * DEFENSE_GROWTH)),
            speed: base.speed.map(|v| round1(v as f64 * SPEED_GROWTH)),
        }
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
