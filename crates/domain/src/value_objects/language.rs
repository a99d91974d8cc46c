//! Languages a character can speak.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::normalize_key;
use crate::error::DomainError;

/// A spoken language.
///
/// `Common` and `Alignment` double as the "pick one for me" request when
/// learning an additional language, since every character already knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    Common,
    Alignment,
    Bugbear,
    Doppelganger,
    Dragon,
    Dwarvish,
    Elvish,
    Gargoyle,
    Gnoll,
    Gnomish,
    Goblin,
    Halfling,
    Harpy,
    Hobgoblin,
    Kobold,
    LizardMan,
    Medusa,
    Minotaur,
    Ogre,
    Orcish,
    Pixie,
    ThievesCant,
    Druidic,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Alignment => "Alignment",
            Self::Bugbear => "Bugbear",
            Self::Doppelganger => "Doppelganger",
            Self::Dragon => "Dragon",
            Self::Dwarvish => "Dwarvish",
            Self::Elvish => "Elvish",
            Self::Gargoyle => "Gargoyle",
            Self::Gnoll => "Gnoll",
            Self::Gnomish => "Gnomish",
            Self::Goblin => "Goblin",
            Self::Halfling => "Halfling",
            Self::Harpy => "Harpy",
            Self::Hobgoblin => "Hobgoblin",
            Self::Kobold => "Kobold",
            Self::LizardMan => "LizardMan",
            Self::Medusa => "Medusa",
            Self::Minotaur => "Minotaur",
            Self::Ogre => "Ogre",
            Self::Orcish => "Orcish",
            Self::Pixie => "Pixie",
            Self::ThievesCant => "ThievesCant",
            Self::Druidic => "Druidic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LizardMan => "Lizard Man",
            Self::ThievesCant => "Thieves' Cant (Secret)",
            Self::Druidic => "Druidic (Secret)",
            other => other.as_str(),
        }
    }

    /// Class-only tongues that can never be learned as an extra language.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::ThievesCant | Self::Druidic)
    }

    pub fn is_random_request(&self) -> bool {
        matches!(self, Self::Common | Self::Alignment)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        let key = key.trim_end_matches("(secret)");
        match key {
            "common" => Ok(Self::Common),
            "alignment" => Ok(Self::Alignment),
            "bugbear" => Ok(Self::Bugbear),
            "doppelganger" | "doppelgänger" => Ok(Self::Doppelganger),
            "dragon" => Ok(Self::Dragon),
            "dwarvish" | "dwarf" => Ok(Self::Dwarvish),
            "elvish" | "elf" => Ok(Self::Elvish),
            "gargoyle" => Ok(Self::Gargoyle),
            "gnoll" => Ok(Self::Gnoll),
            "gnomish" | "gnome" => Ok(Self::Gnomish),
            "goblin" => Ok(Self::Goblin),
            "halfling" => Ok(Self::Halfling),
            "harpy" => Ok(Self::Harpy),
            "hobgoblin" => Ok(Self::Hobgoblin),
            "kobold" => Ok(Self::Kobold),
            "lizardman" => Ok(Self::LizardMan),
            "medusa" => Ok(Self::Medusa),
            "minotaur" => Ok(Self::Minotaur),
            "ogre" => Ok(Self::Ogre),
            "orcish" | "orc" => Ok(Self::Orcish),
            "pixie" => Ok(Self::Pixie),
            "thievescant" | "thieves'cant" => Ok(Self::ThievesCant),
            "druidic" => Ok(Self::Druidic),
            _ => Err(DomainError::parse(format!("Unknown language: {}", s))),
        }
    }
}
