//! Character-related domain events
//!
//! These enums communicate what happened when character state was modified,
//! allowing callers to react appropriately.

use crate::value_objects::{CharacterClass, Language};

/// Outcome of applying damage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Zero or negative damage, nothing changed
    NoEffect,
    /// Temporary hit points took all of it
    Absorbed {
        temp_hp_absorbed: i32,
        temp_hp_remaining: i32,
    },
    /// Hit points were lost but some remain
    Wounded {
        temp_hp_absorbed: i32,
        hp_lost: i32,
        remaining_hp: i32,
    },
    /// Current hit points reached zero
    Downed { temp_hp_absorbed: i32, hp_lost: i32 },
}

/// Outcome of healing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealOutcome {
    /// Zero or negative healing, nothing changed
    NoEffect,
    /// Already at max HP
    AlreadyFull,
    /// Healing applied
    Healed { amount_healed: i32, new_hp: i32 },
}

/// Outcome of assigning a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassChange {
    /// Same class as before; nothing was reset
    Unchanged(CharacterClass),
    /// Every class-derived sub-state was rebuilt
    Assigned {
        from: Option<CharacterClass>,
        to: CharacterClass,
    },
}

/// One step of the level-up cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u8,
    pub hp_gained: i32,
    pub max_hp: i32,
}

/// Outcome of an experience award.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceGained {
    /// XP banked after the class multiplier
    pub xp_awarded: u32,
    pub total_xp: u32,
    pub level: u8,
    /// In the order they happened
    pub level_ups: Vec<LevelUp>,
}

/// Outcome of learning an additional language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageOutcome {
    /// No additional languages left to learn; nothing changed
    NoAllowance,
    Learned {
        language: Language,
        remaining_allowance: i32,
    },
}
