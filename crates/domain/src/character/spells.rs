//! Spell slots and the arcane spellbook.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::rules::{RulesRegistry, SpellSlots};
use crate::value_objects::{CharacterClass, MagicType, SpellType};

/// A spell written in a spellbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownSpell {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellsState {
    magic_type: MagicType,
    spell_type: SpellType,
    /// Spells per day for spell levels 1 to 6.
    slots: SpellSlots,
    spellbook: Vec<KnownSpell>,
}

impl SpellsState {
    /// Empty spellbook with the class's slots at `level`.
    pub fn for_class(class: CharacterClass, level: u8, rules: &RulesRegistry) -> Self {
        Self {
            magic_type: rules.magic_type(class),
            spell_type: rules.spell_type(class),
            slots: rules.spell_slots(class, level),
            spellbook: Vec::new(),
        }
    }

    /// Replaces the slot counts after a level change. The spellbook is kept.
    pub(crate) fn apply_slots(&mut self, slots: SpellSlots) {
        self.slots = slots;
    }

    #[inline]
    pub fn magic_type(&self) -> MagicType {
        self.magic_type
    }

    #[inline]
    pub fn spell_type(&self) -> SpellType {
        self.spell_type
    }

    #[inline]
    pub fn slots(&self) -> SpellSlots {
        self.slots
    }

    /// Spells per day of `spell_level` (1 to 6); 0 outside that range.
    pub fn max_for_level(&self, spell_level: u8) -> u8 {
        match spell_level {
            1..=6 => self.slots[usize::from(spell_level - 1)],
            _ => 0,
        }
    }

    pub fn spellbook(&self) -> &[KnownSpell] {
        &self.spellbook
    }

    pub fn can_cast(&self) -> bool {
        self.slots.iter().any(|&count| count > 0)
    }

    /// Copies a spell from the class list into the spellbook.
    ///
    /// Only arcane casters keep spellbooks, and only spells of a level they
    /// currently have slots for can be added.
    pub fn learn_spell(
        &mut self,
        class: CharacterClass,
        name: &str,
        rules: &RulesRegistry,
    ) -> Result<KnownSpell, DomainError> {
        if self.magic_type != MagicType::Arcane {
            return Err(DomainError::invalid_argument(format!(
                "{} casters do not keep spellbooks",
                self.magic_type
            )));
        }
        let (level, canonical) = rules.find_spell(class, name).ok_or_else(|| {
            DomainError::invalid_argument(format!(
                "{} is not on the {} spell list",
                name,
                class.display_name()
            ))
        })?;
        if self.max_for_level(level) == 0 {
            return Err(DomainError::invalid_argument(format!(
                "{} is a level {} spell and no level {} slots are available yet",
                canonical, level, level
            )));
        }
        if self.spellbook.iter().any(|spell| spell.name == canonical) {
            return Err(DomainError::invalid_argument(format!(
                "{} is already in the spellbook",
                canonical
            )));
        }

        let spell = KnownSpell {
            name: canonical.to_string(),
            level,
        };
        self.spellbook.push(spell.clone());
        Ok(spell)
    }
}

impl fmt::Display for SpellsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_day: Vec<String> = self.slots.iter().map(|n| n.to_string()).collect();
        write!(
            f,
            "{} ({}), per day {}",
            self.magic_type,
            self.spell_type,
            per_day.join("/")
        )?;
        if !self.spellbook.is_empty() {
            let names: Vec<&str> = self.spellbook.iter().map(|s| s.name.as_str()).collect();
            write!(f, ", Spellbook: {}", names.join(", "))?;
        }
        Ok(())
    }
}
