//! Per-level recompute.
//!
//! Everything a level decides, except the hit point roll, is a pure function
//! of class, level and ability scores.

use crate::rules::{RulesRegistry, SpellSlots};
use crate::value_objects::{AbilityScores, CharacterClass};

use super::{CombatState, SavingThrows};

/// What the tables say about one level of one class.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelEffects {
    pub level: u8,
    pub saving_throws: SavingThrows,
    pub combat: CombatState,
    pub spell_slots: SpellSlots,
    /// Flat hit points for this level; zero or less means roll the hit die.
    pub max_hit_die_modifier: i32,
    /// Zero at the class's maximum level.
    pub xp_to_next_level: u32,
}

pub fn recompute_for_level(
    class: CharacterClass,
    level: u8,
    abilities: &AbilityScores,
    rules: &RulesRegistry,
) -> LevelEffects {
    let xp_to_next_level = if level >= rules.max_level(class).max(1) {
        0
    } else {
        rules.xp_for_next_level(class, level)
    };
    LevelEffects {
        level,
        saving_throws: rules.saving_throws(class, level),
        combat: CombatState::for_level(class, level, abilities, rules),
        spell_slots: rules.spell_slots(class, level),
        max_hit_die_modifier: rules.hit_die_modifier(class, level),
        xp_to_next_level,
    }
}
