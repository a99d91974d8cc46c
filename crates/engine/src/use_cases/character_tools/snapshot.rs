//! Structured character snapshot.

use serde::Serialize;

use expertgm_domain::{CharacterState, RulesRegistry};

/// The persisted character plus values derived from it through the rules.
///
/// `character` deserializes back into a [`CharacterState`]; `derived` is
/// output only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSnapshot<'a> {
    pub character: &'a CharacterState,
    pub derived: DerivedValues,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedValues {
    pub class_name: Option<&'static str>,
    pub level: Option<u8>,
    pub literacy: String,
    pub max_retainers: i32,
    pub retainer_loyalty: i32,
    pub npc_reaction_bonus: i32,
    pub open_door_chance: String,
    pub total_value_in_gp: Option<u64>,
    pub available_languages: Vec<String>,
}

impl<'a> CharacterSnapshot<'a> {
    pub fn new(state: &'a CharacterState, rules: &RulesRegistry) -> Self {
        let progress = state.class_progression();
        let derived = DerivedValues {
            class_name: state.class().map(|c| c.display_name()),
            level: progress.map(|p| p.level()),
            literacy: state.literacy(rules).to_string(),
            max_retainers: state.max_retainers(rules),
            retainer_loyalty: state.retainer_loyalty(rules),
            npc_reaction_bonus: state.npc_reaction_bonus(rules),
            open_door_chance: state.open_door_chance(rules).to_string(),
            total_value_in_gp: progress.map(|p| p.wealth().total_value_in_gp()),
            available_languages: state
                .available_languages(rules)
                .iter()
                .map(|l| l.to_string())
                .collect(),
        };
        Self {
            character: state,
            derived,
        }
    }
}
