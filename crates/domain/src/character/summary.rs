//! Human-readable character summary.

use std::fmt;

use super::CharacterState;
use crate::rules::RulesRegistry;

/// Borrowed view that renders a multi-line summary.
///
/// Ability-derived lines need the rules registry, so the summary is built
/// through [`CharacterState::summary`] rather than `Display` on the state.
pub struct CharacterSummary<'a> {
    state: &'a CharacterState,
    rules: &'a RulesRegistry,
}

impl CharacterState {
    pub fn summary<'a>(&'a self, rules: &'a RulesRegistry) -> CharacterSummary<'a> {
        CharacterSummary { state: self, rules }
    }
}

fn or_unset(value: Option<String>) -> String {
    value.unwrap_or_else(|| "Not set".to_string())
}

impl fmt::Display for CharacterSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        let rules = self.rules;

        writeln!(f, "Current Character State:")?;
        let name = if state.name().is_empty() {
            "Unnamed"
        } else {
            state.name()
        };
        writeln!(f, "  Name: {}", name)?;
        writeln!(f, "  Race: {}", or_unset(state.race().map(|r| r.display_name().to_string())))?;
        writeln!(
            f,
            "  Class: {}",
            or_unset(state.class().map(|c| c.display_name().to_string()))
        )?;
        writeln!(
            f,
            "  Alignment: {}",
            or_unset(state.alignment().map(|a| a.to_string()))
        )?;

        writeln!(f, "  Ability Scores:")?;
        for (ability, score) in state.abilities().iter() {
            writeln!(f, "    {}: {}", ability, score)?;
        }

        let languages: Vec<String> = state
            .known_languages()
            .iter()
            .map(|l| l.to_string())
            .collect();
        writeln!(
            f,
            "  Languages: {}",
            if languages.is_empty() {
                "None".to_string()
            } else {
                languages.join(", ")
            }
        )?;
        writeln!(
            f,
            "  Additional Languages Available: {}",
            state.additional_languages()
        )?;
        writeln!(f, "  Literacy: {}", state.literacy(rules))?;
        writeln!(
            f,
            "  Retainers: max {}, loyalty {}",
            state.max_retainers(rules),
            state.retainer_loyalty(rules)
        )?;
        writeln!(
            f,
            "  NPC Reaction Bonus: {:+}",
            state.npc_reaction_bonus(rules)
        )?;
        writeln!(f, "  Open Doors: {}", state.open_door_chance(rules))?;

        match state.class_progression() {
            Some(progress) => {
                writeln!(f, "  Experience: {}", progress.experience())?;
                writeln!(f, "  Health: {}", progress.health())?;
                writeln!(f, "  Saving Throws: {}", progress.saving_throws())?;
                writeln!(f, "  Combat: {}", progress.combat())?;
                if progress.spells().max_for_level(1) > 0 {
                    writeln!(f, "  Spells: {}", progress.spells())?;
                }
                writeln!(f, "  Wealth: {}", progress.wealth())?;
            }
            None => writeln!(f, "  Progression: no class assigned")?,
        }

        let personality = state.personality();
        if !personality.is_empty() {
            writeln!(f, "  Personality: {}", personality.personality)?;
            writeln!(f, "  Ideals: {}", personality.ideals)?;
            writeln!(f, "  Bonds: {}", personality.bonds)?;
            writeln!(f, "  Flaws: {}", personality.flaws)?;
            writeln!(f, "  Background: {}", personality.background)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ose_rules, FixedRandom};
    use crate::value_objects::{AbilityType, Alignment, CharacterClass, CharacterRace};

    #[test]
    fn test_uninitialized_summary() {
        let rules = ose_rules();
        let state = CharacterState::new(&rules);
        let text = state.summary(&rules).to_string();

        assert!(text.starts_with("Current Character State:\n  Name: Unnamed\n"));
        assert!(text.contains("  Class: Not set\n"));
        assert!(text.contains("    Strength: 9 (+0)\n"));
        assert!(text.contains("  Languages: None\n"));
        assert!(text.contains("  Progression: no class assigned\n"));
        assert!(!text.contains("Health:"));
    }

    #[test]
    fn test_fighter_summary_omits_spells() {
        let rules = ose_rules();
        let mut state = CharacterState::new(&rules);
        state.set_name("Brannoc");
        state.set_race(CharacterRace::Human);
        state.set_alignment(Alignment::Lawful);
        state.set_ability_score(AbilityType::Strength, 16, &rules);
        state.set_class(CharacterClass::Fighter, &rules, &FixedRandom(8));
        let text = state.summary(&rules).to_string();

        assert!(text.contains("  Name: Brannoc\n"));
        assert!(text.contains("  Race: Human\n"));
        assert!(text.contains("    Strength: 16 (+2)\n"));
        assert!(text.contains("  Languages: Alignment, Common\n"));
        assert!(text.contains("  Health: HP 8/8"));
        assert!(text.contains("  Open Doors: 4-in-6\n"));
        assert!(!text.contains("Spells:"));
    }

    #[test]
    fn test_magic_user_summary_lists_spells() {
        let rules = ose_rules();
        let mut state = CharacterState::new(&rules);
        state.set_class(CharacterClass::MagicUser, &rules, &FixedRandom(3));
        state.learn_spell("Sleep", &rules).unwrap();
        let text = state.summary(&rules).to_string();

        assert!(text.contains("  Class: Magic-User\n"));
        assert!(text.contains("  Spells: "));
        assert!(text.contains("Spellbook: Sleep"));
    }
}
