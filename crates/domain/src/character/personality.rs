use serde::{Deserialize, Serialize};

/// Free-text roleplaying notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalityBackground {
    pub personality: String,
    pub ideals: String,
    pub bonds: String,
    pub flaws: String,
    pub background: String,
}

impl PersonalityBackground {
    pub fn is_empty(&self) -> bool {
        [
            &self.personality,
            &self.ideals,
            &self.bonds,
            &self.flaws,
            &self.background,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }
}
