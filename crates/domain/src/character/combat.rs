//! Attack numbers and ability-driven combat bonuses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::RulesRegistry;
use crate::value_objects::{AbilityScores, AbilityType, CharacterClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatState {
    to_hit_ac0: i32,
    attack_bonus: i32,
    melee_hit_bonus: i32,
    melee_damage_bonus: i32,
    missile_hit_bonus: i32,
    initiative_bonus: i32,
}

impl CombatState {
    /// Class/level attack numbers plus the current Strength and Dexterity
    /// modifiers.
    pub fn for_level(
        class: CharacterClass,
        level: u8,
        abilities: &AbilityScores,
        rules: &RulesRegistry,
    ) -> Self {
        let strength = abilities.modifier(AbilityType::Strength);
        let dexterity = abilities.modifier(AbilityType::Dexterity);
        Self {
            to_hit_ac0: rules.to_hit_ac0(class, level),
            attack_bonus: rules.attack_bonus(class, level),
            melee_hit_bonus: strength,
            melee_damage_bonus: strength,
            missile_hit_bonus: dexterity,
            initiative_bonus: dexterity,
        }
    }

    /// THAC0: the d20 roll needed to hit armour class 0.
    #[inline]
    pub fn to_hit_ac0(&self) -> i32 {
        self.to_hit_ac0
    }

    /// Bonus added to attack rolls against ascending armour class.
    #[inline]
    pub fn attack_bonus(&self) -> i32 {
        self.attack_bonus
    }

    #[inline]
    pub fn melee_hit_bonus(&self) -> i32 {
        self.melee_hit_bonus
    }

    #[inline]
    pub fn melee_damage_bonus(&self) -> i32 {
        self.melee_damage_bonus
    }

    #[inline]
    pub fn missile_hit_bonus(&self) -> i32 {
        self.missile_hit_bonus
    }

    #[inline]
    pub fn initiative_bonus(&self) -> i32 {
        self.initiative_bonus
    }
}

impl fmt::Display for CombatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "THAC0 {} ({:+} vs ascending AC), Melee {:+} hit / {:+} damage, Missile {:+} hit, Initiative {:+}",
            self.to_hit_ac0,
            self.attack_bonus,
            self.melee_hit_bonus,
            self.melee_damage_bonus,
            self.missile_hit_bonus,
            self.initiative_bonus
        )
    }
}
