//! Closed vocabularies for classes, races, alignments, magic and coins.
//!
//! The rules configuration is textual; these enums are the only place the
//! text is parsed. `as_str` gives the stable projection used as table keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::normalize_key;
use crate::error::DomainError;

/// Character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterClass {
    Cleric,
    Dwarf,
    Elf,
    Fighter,
    Halfling,
    #[serde(alias = "Magic-User", alias = "Magic User", alias = "Wizard")]
    MagicUser,
    Thief,
}

impl CharacterClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cleric => "Cleric",
            Self::Dwarf => "Dwarf",
            Self::Elf => "Elf",
            Self::Fighter => "Fighter",
            Self::Halfling => "Halfling",
            Self::MagicUser => "MagicUser",
            Self::Thief => "Thief",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MagicUser => "Magic-User",
            other => other.as_str(),
        }
    }

    pub fn all() -> [CharacterClass; 7] {
        [
            Self::Cleric,
            Self::Dwarf,
            Self::Elf,
            Self::Fighter,
            Self::Halfling,
            Self::MagicUser,
            Self::Thief,
        ]
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "cleric" => Ok(Self::Cleric),
            "dwarf" => Ok(Self::Dwarf),
            "elf" => Ok(Self::Elf),
            "fighter" => Ok(Self::Fighter),
            "halfling" => Ok(Self::Halfling),
            "magicuser" | "wizard" => Ok(Self::MagicUser),
            "thief" => Ok(Self::Thief),
            _ => Err(DomainError::parse(format!("Unknown character class: {}", s))),
        }
    }
}

/// Character race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterRace {
    Human,
    Dwarf,
    Elf,
    Gnome,
    #[serde(alias = "Half-Elf")]
    HalfElf,
    Halfling,
    #[serde(alias = "Half-Orc")]
    HalfOrc,
}

impl CharacterRace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Dwarf => "Dwarf",
            Self::Elf => "Elf",
            Self::Gnome => "Gnome",
            Self::HalfElf => "HalfElf",
            Self::Halfling => "Halfling",
            Self::HalfOrc => "HalfOrc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HalfElf => "Half-Elf",
            Self::HalfOrc => "Half-Orc",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for CharacterRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterRace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "human" => Ok(Self::Human),
            "dwarf" => Ok(Self::Dwarf),
            "elf" => Ok(Self::Elf),
            "gnome" => Ok(Self::Gnome),
            "halfelf" => Ok(Self::HalfElf),
            "halfling" => Ok(Self::Halfling),
            "halforc" => Ok(Self::HalfOrc),
            _ => Err(DomainError::parse(format!("Unknown character race: {}", s))),
        }
    }
}

/// Alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Lawful,
    Neutral,
    Chaotic,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lawful => "Lawful",
            Self::Neutral => "Neutral",
            Self::Chaotic => "Chaotic",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "lawful" | "law" => Ok(Self::Lawful),
            "neutral" | "neutrality" => Ok(Self::Neutral),
            "chaotic" | "chaos" => Ok(Self::Chaotic),
            _ => Err(DomainError::parse(format!("Unknown alignment: {}", s))),
        }
    }
}

/// Source of a class's spell power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MagicType {
    #[default]
    None,
    Arcane,
    Divine,
}

impl MagicType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Arcane => "Arcane",
            Self::Divine => "Divine",
        }
    }
}

impl fmt::Display for MagicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MagicType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "none" | "" => Ok(Self::None),
            "arcane" => Ok(Self::Arcane),
            "divine" => Ok(Self::Divine),
            _ => Err(DomainError::parse(format!("Unknown magic type: {}", s))),
        }
    }
}

/// Which spell list a caster draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpellType {
    #[default]
    None,
    Cleric,
    MagicUser,
}

impl SpellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Cleric => "Cleric",
            Self::MagicUser => "MagicUser",
        }
    }
}

impl fmt::Display for SpellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpellType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "none" | "" => Ok(Self::None),
            "cleric" => Ok(Self::Cleric),
            "magicuser" => Ok(Self::MagicUser),
            _ => Err(DomainError::parse(format!("Unknown spell type: {}", s))),
        }
    }
}

/// Coin denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CoinType {
    #[serde(alias = "pp")]
    Platinum,
    #[serde(alias = "gp")]
    Gold,
    #[serde(alias = "ep")]
    Electrum,
    #[serde(alias = "sp")]
    Silver,
    #[serde(alias = "cp")]
    Copper,
}

impl CoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Platinum => "Platinum",
            Self::Gold => "Gold",
            Self::Electrum => "Electrum",
            Self::Silver => "Silver",
            Self::Copper => "Copper",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Platinum => "pp",
            Self::Gold => "gp",
            Self::Electrum => "ep",
            Self::Silver => "sp",
            Self::Copper => "cp",
        }
    }

    pub fn all() -> [CoinType; 5] {
        [
            Self::Platinum,
            Self::Gold,
            Self::Electrum,
            Self::Silver,
            Self::Copper,
        ]
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CoinType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "platinum" | "pp" => Ok(Self::Platinum),
            "gold" | "gp" => Ok(Self::Gold),
            "electrum" | "ep" => Ok(Self::Electrum),
            "silver" | "sp" => Ok(Self::Silver),
            "copper" | "cp" => Ok(Self::Copper),
            _ => Err(DomainError::parse(format!("Unknown coin type: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_str_is_lenient_about_spelling() {
        assert_eq!("Magic-User".parse::<CharacterClass>(), Ok(CharacterClass::MagicUser));
        assert_eq!("magic user".parse::<CharacterClass>(), Ok(CharacterClass::MagicUser));
        assert_eq!("FIGHTER".parse::<CharacterClass>(), Ok(CharacterClass::Fighter));
        assert!("Bard".parse::<CharacterClass>().is_err());
    }

    #[test]
    fn test_class_as_str_round_trips() {
        for class in CharacterClass::all() {
            assert_eq!(class.as_str().parse::<CharacterClass>(), Ok(class));
        }
    }

    #[test]
    fn test_race_display_names() {
        assert_eq!(CharacterRace::HalfOrc.display_name(), "Half-Orc");
        assert_eq!("half-elf".parse::<CharacterRace>(), Ok(CharacterRace::HalfElf));
    }

    #[test]
    fn test_coin_abbreviations_parse() {
        for coin in CoinType::all() {
            assert_eq!(coin.abbreviation().parse::<CoinType>(), Ok(coin));
        }
    }

    #[test]
    fn test_serde_uses_stable_projection() {
        let json = serde_json::to_string(&CharacterClass::MagicUser).unwrap();
        assert_eq!(json, "\"MagicUser\"");
        let parsed: CharacterClass = serde_json::from_str("\"Magic-User\"").unwrap();
        assert_eq!(parsed, CharacterClass::MagicUser);
        let coin: CoinType = serde_json::from_str("\"gp\"").unwrap();
        assert_eq!(coin, CoinType::Gold);
    }

    #[test]
    fn test_magic_type_default_is_none() {
        assert_eq!(MagicType::default(), MagicType::None);
        assert_eq!(SpellType::default(), SpellType::None);
    }
}
