//! The character tool surface as a closed set of calls.
//!
//! Calls arrive as JSON objects tagged by `name`, e.g.
//! `{"name": "UpdateAbilityScore", "ability": "Strength", "value": 16}`.
//! Vocabulary arguments stay as text here and are parsed leniently when the
//! call runs, so "magic-user" and "MagicUser" both name the same class.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Any tool call. The wire form is flat: the `name` tag alone decides
/// whether the call needs a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToolCall {
    Character(CharacterCall),
    Standalone(StandaloneCall),
}

impl ToolCall {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Character(call) => call.name(),
            Self::Standalone(call) => call.name(),
        }
    }

    /// Whether the call can change the character.
    pub fn is_mutation(&self) -> bool {
        match self {
            Self::Character(call) => call.is_mutation(),
            Self::Standalone(_) => false,
        }
    }
}

impl From<CharacterCall> for ToolCall {
    fn from(call: CharacterCall) -> Self {
        Self::Character(call)
    }
}

impl From<StandaloneCall> for ToolCall {
    fn from(call: StandaloneCall) -> Self {
        Self::Standalone(call)
    }
}

impl<'de> Deserialize<'de> for ToolCall {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let standalone = value
            .get("name")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|name| StandaloneCall::NAMES.contains(&name));
        if standalone {
            StandaloneCall::deserialize(value)
                .map(Self::Standalone)
                .map_err(de::Error::custom)
        } else {
            CharacterCall::deserialize(value)
                .map(Self::Character)
                .map_err(de::Error::custom)
        }
    }
}

/// A call that reads or changes the conversation's character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum CharacterCall {
    // =========================================================================
    // Mutators
    // =========================================================================
    UpdateAbilityScores {
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    },
    UpdateAbilityScore {
        ability: String,
        value: i32,
    },
    UpdateCharacterClass {
        class: String,
    },
    UpdateRace {
        race: String,
    },
    UpdateCharacterName {
        character_name: String,
    },
    UpdateCharacterAlignment {
        alignment: String,
    },
    UpdateCharacterExperience {
        experience: i32,
    },
    /// No language, "Common" or "Alignment" picks a random one.
    AddAdditionalLanguage {
        #[serde(default)]
        language: Option<String>,
    },
    TakeDamage {
        amount: i32,
    },
    Heal {
        amount: i32,
    },
    GainTempHp {
        amount: i32,
    },
    /// Positive amounts gain coins, negative amounts spend them.
    AdjustCoins {
        coin: String,
        amount: i64,
    },
    LearnSpell {
        spell: String,
    },

    // =========================================================================
    // Accessors
    // =========================================================================
    GetCharacterStateAsString,
    GetCharacterStateAsJson,
    GetCharacterClassName,
    GetCharacterRace,
    GetAbilityScoreValue {
        ability: String,
    },
    GetAbilityScores,
    GetLiteracyState,
    GetAdditionalLanguages,
    GetMaxRetainers,
    GetRetainerLoyalty,
    GetNpcReactionBonus,
    GetOpenDoorChance,
    GetTurningResult {
        monster_hit_dice: String,
    },
}

impl CharacterCall {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateAbilityScores { .. } => "UpdateAbilityScores",
            Self::UpdateAbilityScore { .. } => "UpdateAbilityScore",
            Self::UpdateCharacterClass { .. } => "UpdateCharacterClass",
            Self::UpdateRace { .. } => "UpdateRace",
            Self::UpdateCharacterName { .. } => "UpdateCharacterName",
            Self::UpdateCharacterAlignment { .. } => "UpdateCharacterAlignment",
            Self::UpdateCharacterExperience { .. } => "UpdateCharacterExperience",
            Self::AddAdditionalLanguage { .. } => "AddAdditionalLanguage",
            Self::TakeDamage { .. } => "TakeDamage",
            Self::Heal { .. } => "Heal",
            Self::GainTempHp { .. } => "GainTempHp",
            Self::AdjustCoins { .. } => "AdjustCoins",
            Self::LearnSpell { .. } => "LearnSpell",
            Self::GetCharacterStateAsString => "GetCharacterStateAsString",
            Self::GetCharacterStateAsJson => "GetCharacterStateAsJson",
            Self::GetCharacterClassName => "GetCharacterClassName",
            Self::GetCharacterRace => "GetCharacterRace",
            Self::GetAbilityScoreValue { .. } => "GetAbilityScoreValue",
            Self::GetAbilityScores => "GetAbilityScores",
            Self::GetLiteracyState => "GetLiteracyState",
            Self::GetAdditionalLanguages => "GetAdditionalLanguages",
            Self::GetMaxRetainers => "GetMaxRetainers",
            Self::GetRetainerLoyalty => "GetRetainerLoyalty",
            Self::GetNpcReactionBonus => "GetNpcReactionBonus",
            Self::GetOpenDoorChance => "GetOpenDoorChance",
            Self::GetTurningResult { .. } => "GetTurningResult",
        }
    }

    /// Whether the call can change the character.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::UpdateAbilityScores { .. }
                | Self::UpdateAbilityScore { .. }
                | Self::UpdateCharacterClass { .. }
                | Self::UpdateRace { .. }
                | Self::UpdateCharacterName { .. }
                | Self::UpdateCharacterAlignment { .. }
                | Self::UpdateCharacterExperience { .. }
                | Self::AddAdditionalLanguage { .. }
                | Self::TakeDamage { .. }
                | Self::Heal { .. }
                | Self::GainTempHp { .. }
                | Self::AdjustCoins { .. }
                | Self::LearnSpell { .. }
        )
    }
}

/// A call that never touches a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum StandaloneCall {
    /// With `count`, `dice` names a die type ("d6"). Without, it is a
    /// formula ("2d6+1").
    RollDice {
        dice: String,
        #[serde(default)]
        count: Option<u32>,
    },
    ListExperts,
}

impl StandaloneCall {
    const NAMES: [&'static str; 2] = ["RollDice", "ListExperts"];

    pub fn name(&self) -> &'static str {
        match self {
            Self::RollDice { .. } => "RollDice",
            Self::ListExperts => "ListExperts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tagged_by_name() {
        let call: ToolCall = serde_json::from_value(json!({
            "name": "UpdateAbilityScore",
            "ability": "Str",
            "value": 16
        }))
        .unwrap();
        assert_eq!(
            call,
            ToolCall::Character(CharacterCall::UpdateAbilityScore {
                ability: "Str".to_string(),
                value: 16
            })
        );
        assert_eq!(call.name(), "UpdateAbilityScore");
        assert!(call.is_mutation());
    }

    #[test]
    fn test_unit_and_optional_arguments() {
        let call: ToolCall = serde_json::from_value(json!({ "name": "GetAbilityScores" })).unwrap();
        assert_eq!(call, CharacterCall::GetAbilityScores.into());
        assert!(!call.is_mutation());

        let call: ToolCall =
            serde_json::from_value(json!({ "name": "AddAdditionalLanguage" })).unwrap();
        assert_eq!(call, CharacterCall::AddAdditionalLanguage { language: None }.into());
    }

    #[test]
    fn test_dice_and_experts_are_standalone() {
        let call: ToolCall =
            serde_json::from_value(json!({ "name": "RollDice", "dice": "2d6+1" })).unwrap();
        assert_eq!(
            call,
            ToolCall::Standalone(StandaloneCall::RollDice {
                dice: "2d6+1".to_string(),
                count: None
            })
        );
        assert!(!call.is_mutation());

        let call: ToolCall = serde_json::from_value(json!({ "name": "ListExperts" })).unwrap();
        assert_eq!(call, StandaloneCall::ListExperts.into());
        assert_eq!(call.name(), "ListExperts");
    }

    #[test]
    fn test_unknown_tool_is_rejected() {
        let err = serde_json::from_value::<ToolCall>(json!({ "name": "CastFireball" }));
        assert!(err.unwrap_err().to_string().contains("CastFireball"));
    }

    #[test]
    fn test_missing_argument_is_reported() {
        let err = serde_json::from_value::<ToolCall>(json!({ "name": "RollDice" }));
        assert!(err.unwrap_err().to_string().contains("dice"));
    }

    #[test]
    fn test_serialized_name_matches_name() {
        let call: ToolCall = CharacterCall::TakeDamage { amount: 3 }.into();
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["name"], call.name());

        let call: ToolCall = StandaloneCall::ListExperts.into();
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value, json!({ "name": "ListExperts" }));
    }
}
