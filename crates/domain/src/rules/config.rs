//! Serde shapes of the textual rules document.
//!
//! Everything is optional so partial documents still load; the registry
//! turns these into enum-keyed tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::character::SavingThrows;

/// One row of a range table: `value` applies when `min <= x <= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band<V> {
    pub min: i32,
    pub max: i32,
    pub value: V,
}

impl<V> Band<V> {
    #[inline]
    pub fn contains(&self, x: i32) -> bool {
        self.min <= x && x <= self.max
    }
}

/// First band containing `x`, in table order.
pub fn find_band<V>(bands: &[Band<V>], x: i32) -> Option<&V> {
    bands.iter().find(|band| band.contains(x)).map(|band| &band.value)
}

/// XP needed to leave `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelXp {
    pub level: u8,
    pub xp: u32,
}

/// Spells castable per spell level (1 to 6) at one character level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSlotRow {
    pub level: u8,
    pub slots: [u8; 6],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimeConditionConfig {
    /// Ability name to minimum score.
    pub minimums: BTreeMap<String, i32>,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimeRequisiteConfig {
    pub primary_ability: Option<String>,
    pub conditions: Vec<PrimeConditionConfig>,
}

/// Tables for one class, or for the `"Default"` fallback entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassTableConfig {
    pub hit_die: Option<String>,
    pub max_level: Option<u8>,
    pub hit_die_modifiers: Vec<Band<i32>>,
    pub xp_for_next_level: Vec<LevelXp>,
    pub xp_modifiers: Vec<Band<f64>>,
    pub prime_requisite: Option<PrimeRequisiteConfig>,
    pub thac0: Vec<Band<i32>>,
    pub attack_bonus: Vec<Band<i32>>,
    pub saving_throws: Vec<Band<SavingThrows>>,
    pub starting_languages: Vec<String>,
    pub magic_type: Option<String>,
    pub spell_type: Option<String>,
    pub spell_slots: Vec<SpellSlotRow>,
    pub spell_lists: BTreeMap<u8, Vec<String>>,
    /// Level bands of monster hit dice to turning result.
    pub turning: Vec<Band<BTreeMap<String, String>>>,
}

/// The whole game-system document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSystemConfig {
    pub game_system: String,
    pub version: String,
    pub languages: Vec<String>,
    pub ability_modifiers: Vec<Band<i32>>,
    pub max_retainers: Vec<Band<i32>>,
    pub retainer_loyalty: Vec<Band<i32>>,
    pub reaction_bonus: Vec<Band<i32>>,
    pub literacy: Vec<Band<String>>,
    pub additional_languages: Vec<Band<i32>>,
    pub open_doors: Vec<Band<String>>,
    pub coin_conversion: BTreeMap<String, f64>,
    pub classes: BTreeMap<String, ClassTableConfig>,
}
