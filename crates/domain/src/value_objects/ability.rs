//! Ability scores and their derived modifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::normalize_key;
use crate::error::DomainError;
use crate::rules::RulesRegistry;

/// The six character abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AbilityType {
    #[serde(alias = "Str", alias = "STR")]
    Strength,
    #[serde(alias = "Dex", alias = "DEX")]
    Dexterity,
    #[serde(alias = "Con", alias = "CON")]
    Constitution,
    #[serde(alias = "Int", alias = "INT")]
    Intelligence,
    #[serde(alias = "Wis", alias = "WIS")]
    Wisdom,
    #[serde(alias = "Cha", alias = "CHA")]
    Charisma,
}

impl AbilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Returns the short uppercase form (e.g., "STR", "DEX").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    pub fn all() -> [AbilityType; 6] {
        [
            Self::Strength,
            Self::Dexterity,
            Self::Constitution,
            Self::Intelligence,
            Self::Wisdom,
            Self::Charisma,
        ]
    }
}

impl fmt::Display for AbilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AbilityType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "str" | "strength" => Ok(Self::Strength),
            "dex" | "dexterity" => Ok(Self::Dexterity),
            "con" | "constitution" => Ok(Self::Constitution),
            "int" | "intelligence" => Ok(Self::Intelligence),
            "wis" | "wisdom" => Ok(Self::Wisdom),
            "cha" | "charisma" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}

/// A raw ability value and the modifier the rules give it.
///
/// Only constructed through the registry so the pair can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    value: i32,
    modifier: i32,
}

impl AbilityScore {
    pub const DEFAULT_VALUE: i32 = 9;

    pub fn new(value: i32, rules: &RulesRegistry) -> Self {
        Self {
            value,
            modifier: rules.ability_modifier(value),
        }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    pub fn modifier(&self) -> i32 {
        self.modifier
    }
}

impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.value, self.modifier)
    }
}

/// All six scores. Every ability is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScores {
    strength: AbilityScore,
    dexterity: AbilityScore,
    constitution: AbilityScore,
    intelligence: AbilityScore,
    wisdom: AbilityScore,
    charisma: AbilityScore,
}

impl AbilityScores {
    /// Every ability at 9.
    pub fn new(rules: &RulesRegistry) -> Self {
        let score = AbilityScore::new(AbilityScore::DEFAULT_VALUE, rules);
        Self {
            strength: score,
            dexterity: score,
            constitution: score,
            intelligence: score,
            wisdom: score,
            charisma: score,
        }
    }

    pub fn get(&self, ability: AbilityType) -> AbilityScore {
        match ability {
            AbilityType::Strength => self.strength,
            AbilityType::Dexterity => self.dexterity,
            AbilityType::Constitution => self.constitution,
            AbilityType::Intelligence => self.intelligence,
            AbilityType::Wisdom => self.wisdom,
            AbilityType::Charisma => self.charisma,
        }
    }

    #[inline]
    pub fn value(&self, ability: AbilityType) -> i32 {
        self.get(ability).value()
    }

    #[inline]
    pub fn modifier(&self, ability: AbilityType) -> i32 {
        self.get(ability).modifier()
    }

    /// Replaces one score, recomputing its modifier.
    pub fn set(&mut self, ability: AbilityType, value: i32, rules: &RulesRegistry) {
        let score = AbilityScore::new(value, rules);
        match ability {
            AbilityType::Strength => self.strength = score,
            AbilityType::Dexterity => self.dexterity = score,
            AbilityType::Constitution => self.constitution = score,
            AbilityType::Intelligence => self.intelligence = score,
            AbilityType::Wisdom => self.wisdom = score,
            AbilityType::Charisma => self.charisma = score,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AbilityType, AbilityScore)> + '_ {
        AbilityType::all().into_iter().map(move |a| (a, self.get(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ose_rules;

    #[test]
    fn test_defaults_are_nine_with_zero_modifier() {
        let scores = AbilityScores::new(&ose_rules());
        for (_, score) in scores.iter() {
            assert_eq!(score.value(), 9);
            assert_eq!(score.modifier(), 0);
        }
    }

    #[test]
    fn test_set_updates_value_and_modifier_together() {
        let rules = ose_rules();
        let mut scores = AbilityScores::new(&rules);

        scores.set(AbilityType::Strength, 18, &rules);
        assert_eq!(scores.value(AbilityType::Strength), 18);
        assert_eq!(scores.modifier(AbilityType::Strength), 3);

        scores.set(AbilityType::Strength, 5, &rules);
        assert_eq!(scores.modifier(AbilityType::Strength), -2);
        assert_eq!(scores.value(AbilityType::Dexterity), 9);
    }

    #[test]
    fn test_out_of_table_values_fall_back_to_zero_modifier() {
        let rules = ose_rules();
        assert_eq!(AbilityScore::new(25, &rules).modifier(), 0);
        assert_eq!(AbilityScore::new(-4, &rules).modifier(), 0);
    }

    #[test]
    fn test_ability_from_str() {
        assert_eq!("STR".parse::<AbilityType>(), Ok(AbilityType::Strength));
        assert_eq!("wisdom".parse::<AbilityType>(), Ok(AbilityType::Wisdom));
        assert!("Luck".parse::<AbilityType>().is_err());
    }

    #[test]
    fn test_display_shows_signed_modifier() {
        let rules = ose_rules();
        assert_eq!(AbilityScore::new(13, &rules).to_string(), "13 (+1)");
        assert_eq!(AbilityScore::new(4, &rules).to_string(), "4 (-2)");
    }
}
