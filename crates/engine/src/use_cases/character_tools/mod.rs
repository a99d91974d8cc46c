//! Character tool use cases.
//!
//! Resolves a conversation's character through the directory and runs one
//! [`ToolCall`] against it. Every call returns text for the caller to relay:
//! mutators answer with what happened followed by the refreshed summary,
//! accessors with the bare value.

mod error;
mod snapshot;
mod tool_call;

pub use error::ToolError;
pub use snapshot::{CharacterSnapshot, DerivedValues};
pub use tool_call::{CharacterCall, StandaloneCall, ToolCall};

use std::sync::Arc;

use expertgm_domain::{
    roll_dice, AbilityType, Alignment, CharacterClass, CharacterRace, CharacterState, ClassChange,
    CoinType, DamageOutcome, DiceFormula, DieType, DomainError, ExperienceGained, HealOutcome,
    Language, LanguageOutcome, RandomSource, RulesRegistry,
};

use crate::infrastructure::experts::ExpertRegistry;
use crate::stores::CharacterDirectory;

const MAX_DICE_PER_ROLL: u32 = 100;

/// Runs character tool calls for any number of conversations.
pub struct CharacterToolService {
    characters: Arc<CharacterDirectory>,
    rules: Arc<RulesRegistry>,
    experts: Arc<ExpertRegistry>,
    random: Arc<dyn RandomSource>,
}

impl CharacterToolService {
    pub fn new(
        characters: Arc<CharacterDirectory>,
        rules: Arc<RulesRegistry>,
        experts: Arc<ExpertRegistry>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            characters,
            rules,
            experts,
            random,
        }
    }

    /// Runs one call for the conversation.
    ///
    /// Calls against the same conversation run one at a time. A failed call
    /// leaves the character as it was.
    pub fn execute(&self, conversation_id: &str, call: ToolCall) -> Result<String, ToolError> {
        let tool = call.name();
        let result = match call {
            ToolCall::Standalone(call) => self.run_standalone(call),
            ToolCall::Character(call) => self
                .characters
                .with_character(conversation_id, |state| self.apply(state, call)),
        };

        match &result {
            Ok(_) => tracing::info!(
                conversation_id = %conversation_id,
                tool = tool,
                "Tool call completed"
            ),
            Err(e) => tracing::warn!(
                conversation_id = %conversation_id,
                tool = tool,
                kind = e.kind(),
                error = %e,
                "Tool call failed"
            ),
        }
        result
    }

    /// Parses a JSON call and runs it.
    pub fn execute_json(
        &self,
        conversation_id: &str,
        call: serde_json::Value,
    ) -> Result<String, ToolError> {
        let call: ToolCall = serde_json::from_value(call)?;
        self.execute(conversation_id, call)
    }

    fn apply(&self, state: &mut CharacterState, call: CharacterCall) -> Result<String, ToolError> {
        let rules = self.rules.as_ref();
        let rng = self.random.as_ref();

        let text = match call {
            // =================================================================
            // Mutators
            // =================================================================
            CharacterCall::UpdateAbilityScores {
                strength,
                dexterity,
                constitution,
                intelligence,
                wisdom,
                charisma,
            } => {
                state.set_ability_scores(
                    [
                        (AbilityType::Strength, strength),
                        (AbilityType::Dexterity, dexterity),
                        (AbilityType::Constitution, constitution),
                        (AbilityType::Intelligence, intelligence),
                        (AbilityType::Wisdom, wisdom),
                        (AbilityType::Charisma, charisma),
                    ],
                    rules,
                );
                self.summary(state)
            }
            CharacterCall::UpdateAbilityScore { ability, value } => {
                let ability: AbilityType = ability.parse()?;
                state.set_ability_score(ability, value, rules);
                self.summary(state)
            }
            CharacterCall::UpdateCharacterClass { class } => {
                let class: CharacterClass = class.parse()?;
                let line = match state.set_class(class, rules, rng) {
                    ClassChange::Unchanged(class) => {
                        format!("Already a {}; nothing changed.", class.display_name())
                    }
                    ClassChange::Assigned { to, .. } => {
                        format!("Class set to {}.", to.display_name())
                    }
                };
                self.with_summary(line, state)
            }
            CharacterCall::UpdateRace { race } => {
                let race: CharacterRace = race.parse()?;
                state.set_race(race);
                self.summary(state)
            }
            CharacterCall::UpdateCharacterName { character_name } => {
                state.set_name(character_name);
                self.summary(state)
            }
            CharacterCall::UpdateCharacterAlignment { alignment } => {
                let alignment: Alignment = alignment.parse()?;
                state.set_alignment(alignment);
                self.summary(state)
            }
            CharacterCall::UpdateCharacterExperience { experience } => {
                let gained = state.gain_experience(experience, rules, rng)?;
                self.with_summary(describe_experience(&gained), state)
            }
            CharacterCall::AddAdditionalLanguage { language } => {
                let requested = language
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::parse::<Language>)
                    .transpose()?;
                let line = match state.learn_additional_language(requested, rules, rng)? {
                    LanguageOutcome::NoAllowance => {
                        "No additional languages can be learned.".to_string()
                    }
                    LanguageOutcome::Learned {
                        language,
                        remaining_allowance,
                    } => format!(
                        "Learned {} ({} more available).",
                        language, remaining_allowance
                    ),
                };
                self.with_summary(line, state)
            }
            CharacterCall::TakeDamage { amount } => {
                let outcome = state.take_damage(amount)?;
                self.with_summary(describe_damage(&outcome), state)
            }
            CharacterCall::Heal { amount } => {
                let outcome = state.heal(amount)?;
                self.with_summary(describe_heal(&outcome), state)
            }
            CharacterCall::GainTempHp { amount } => {
                let total = state.gain_temp_hp(amount)?;
                self.with_summary(format!("Temporary hit points now {}.", total), state)
            }
            CharacterCall::AdjustCoins { coin, amount } => {
                let coin: CoinType = coin.parse()?;
                let count = u32::try_from(amount.unsigned_abs()).map_err(|_| {
                    DomainError::invalid_argument(format!("Coin amount out of range: {}", amount))
                })?;
                let held = if amount >= 0 {
                    state.gain_coins(coin, count)?
                } else {
                    state.spend_coins(coin, count)?
                };
                self.with_summary(format!("Now holding {} {}.", held, coin.abbreviation()), state)
            }
            CharacterCall::LearnSpell { spell } => {
                let learned = state.learn_spell(&spell, rules)?;
                self.with_summary(
                    format!("Added {} (level {}) to the spellbook.", learned.name, learned.level),
                    state,
                )
            }

            // =================================================================
            // Accessors
            // =================================================================
            CharacterCall::GetCharacterStateAsString => self.summary(state),
            CharacterCall::GetCharacterStateAsJson => {
                let snapshot = CharacterSnapshot::new(state, rules);
                serde_json::to_string_pretty(&snapshot).map_err(ToolError::Snapshot)?
            }
            CharacterCall::GetCharacterClassName => state
                .class()
                .map_or("None", |c| c.display_name())
                .to_string(),
            CharacterCall::GetCharacterRace => state
                .race()
                .map_or("None", |r| r.display_name())
                .to_string(),
            CharacterCall::GetAbilityScoreValue { ability } => {
                let ability: AbilityType = ability.parse()?;
                state.ability(ability).value().to_string()
            }
            CharacterCall::GetAbilityScores => state
                .abilities()
                .iter()
                .map(|(ability, score)| format!("{}: {}", ability, score))
                .collect::<Vec<_>>()
                .join("\n"),
            CharacterCall::GetLiteracyState => state.literacy(rules).to_string(),
            CharacterCall::GetAdditionalLanguages => state.additional_languages().to_string(),
            CharacterCall::GetMaxRetainers => state.max_retainers(rules).to_string(),
            CharacterCall::GetRetainerLoyalty => state.retainer_loyalty(rules).to_string(),
            CharacterCall::GetNpcReactionBonus => format!("{:+}", state.npc_reaction_bonus(rules)),
            CharacterCall::GetOpenDoorChance => state.open_door_chance(rules).to_string(),
            CharacterCall::GetTurningResult { monster_hit_dice } => state
                .turning_result(monster_hit_dice.trim(), rules)?
                .to_string(),
        };
        Ok(text)
    }

    fn run_standalone(&self, call: StandaloneCall) -> Result<String, ToolError> {
        match call {
            StandaloneCall::RollDice { dice, count } => self.roll_dice(&dice, count),
            StandaloneCall::ListExperts => Ok(self.list_experts()),
        }
    }

    fn roll_dice(&self, dice: &str, count: Option<u32>) -> Result<String, ToolError> {
        let rng = self.random.as_ref();
        match count {
            Some(count) => {
                if count == 0 || count > MAX_DICE_PER_ROLL {
                    return Err(DomainError::invalid_argument(format!(
                        "Dice count must be between 1 and {}, got {}",
                        MAX_DICE_PER_ROLL, count
                    ))
                    .into());
                }
                let die: DieType = dice.parse()?;
                let total = roll_dice(die, count, rng);
                tracing::debug!(die = %die, count = count, total = total, "Rolled dice");
                Ok(total.to_string())
            }
            None => {
                let formula = DiceFormula::parse(dice).map_err(DomainError::from)?;
                let result = formula.roll(rng);
                tracing::debug!(formula = %formula, total = result.total, "Rolled formula");
                Ok(result.breakdown())
            }
        }
    }

    fn list_experts(&self) -> String {
        self.experts
            .all()
            .iter()
            .map(|e| {
                format!(
                    "{} [{}] ({}): {}",
                    e.name, e.intent_name, e.expert_type, e.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn summary(&self, state: &CharacterState) -> String {
        state.summary(&self.rules).to_string()
    }

    fn with_summary(&self, line: String, state: &CharacterState) -> String {
        format!("{}\n\n{}", line, self.summary(state))
    }
}

fn describe_experience(gained: &ExperienceGained) -> String {
    let mut line = format!(
        "Gained {} XP (total {}).",
        gained.xp_awarded, gained.total_xp
    );
    for step in &gained.level_ups {
        line.push_str(&format!(
            " Reached level {} (+{} HP, max {}).",
            step.level, step.hp_gained, step.max_hp
        ));
    }
    line
}

fn describe_damage(outcome: &DamageOutcome) -> String {
    match outcome {
        DamageOutcome::NoEffect => "No damage taken.".to_string(),
        DamageOutcome::Absorbed {
            temp_hp_absorbed,
            temp_hp_remaining,
        } => format!(
            "Temporary hit points absorbed {} ({} left).",
            temp_hp_absorbed, temp_hp_remaining
        ),
        DamageOutcome::Wounded {
            temp_hp_absorbed,
            hp_lost,
            remaining_hp,
        } => format!(
            "Lost {} HP after {} temporary absorbed; {} HP left.",
            hp_lost, temp_hp_absorbed, remaining_hp
        ),
        DamageOutcome::Downed {
            temp_hp_absorbed,
            hp_lost,
        } => format!(
            "Lost {} HP after {} temporary absorbed; down at 0 HP.",
            hp_lost, temp_hp_absorbed
        ),
    }
}

fn describe_heal(outcome: &HealOutcome) -> String {
    match outcome {
        HealOutcome::NoEffect => "No healing applied.".to_string(),
        HealOutcome::AlreadyFull => "Already at full hit points.".to_string(),
        HealOutcome::Healed {
            amount_healed,
            new_hp,
        } => format!("Healed {} HP; now at {}.", amount_healed, new_hp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::random::FixedRandom;
    use crate::infrastructure::rules_loader::load_rules;
    use mockall::predicate::eq;
    use serde_json::json;

    mockall::mock! {
        pub Random {}

        impl RandomSource for Random {
            fn gen_range(&self, min: i32, max: i32) -> i32;
        }
    }

    fn service_with(random: Arc<dyn RandomSource>) -> CharacterToolService {
        let rules = Arc::new(load_rules(None).unwrap());
        let characters = Arc::new(CharacterDirectory::new(Arc::clone(&rules)));
        let experts = Arc::new(ExpertRegistry::load(None).unwrap());
        CharacterToolService::new(characters, rules, experts, random)
    }

    fn service(roll: i32) -> CharacterToolService {
        service_with(Arc::new(FixedRandom(roll)))
    }

    fn run(service: &CharacterToolService, call: serde_json::Value) -> Result<String, ToolError> {
        service.execute_json("conv-1", call)
    }

    mod mutators {
        use super::*;

        #[test]
        fn test_fighter_scenario_end_to_end() {
            let mut rng = MockRandom::new();
            rng.expect_gen_range()
                .with(eq(1), eq(8))
                .times(2)
                .returning(|_, _| 6);
            let service = service_with(Arc::new(rng));

            run(&service, json!({"name": "UpdateCharacterName", "character_name": "Brannoc"}))
                .unwrap();
            let text = run(&service, json!({"name": "UpdateCharacterClass", "class": "fighter"}))
                .unwrap();
            assert!(text.starts_with("Class set to Fighter."));
            assert!(text.contains("Health: HP 6/6"));

            let text = run(
                &service,
                json!({"name": "UpdateCharacterExperience", "experience": 2000}),
            )
            .unwrap();
            assert!(text.starts_with("Gained 2000 XP (total 2000). Reached level 2 (+6 HP, max 12)."));

            let state = service.characters.snapshot("conv-1").unwrap();
            let progress = state.class_progression().unwrap();
            assert_eq!(progress.level(), 2);
            assert_eq!(progress.health().max_hp(), 12);
        }

        #[test]
        fn test_reassigning_the_same_class_reports_no_change() {
            let service = service(4);
            run(&service, json!({"name": "UpdateCharacterClass", "class": "Cleric"})).unwrap();
            let text =
                run(&service, json!({"name": "UpdateCharacterClass", "class": "cleric"})).unwrap();
            assert!(text.starts_with("Already a Cleric; nothing changed."));
        }

        #[test]
        fn test_scores_set_together() {
            let service = service(4);
            run(
                &service,
                json!({
                    "name": "UpdateAbilityScores",
                    "strength": 18, "dexterity": 13, "constitution": 3,
                    "intelligence": 16, "wisdom": 9, "charisma": 6
                }),
            )
            .unwrap();
            let text = run(&service, json!({"name": "GetAbilityScores"})).unwrap();
            assert_eq!(
                text,
                "Strength: 18 (+3)\nDexterity: 13 (+1)\nConstitution: 3 (-3)\n\
                 Intelligence: 16 (+2)\nWisdom: 9 (+0)\nCharisma: 6 (-1)"
            );
        }

        #[test]
        fn test_named_and_random_languages() {
            let service = service(0);
            run(
                &service,
                json!({"name": "UpdateAbilityScore", "ability": "INT", "value": 16}),
            )
            .unwrap();
            run(&service, json!({"name": "UpdateCharacterClass", "class": "Fighter"})).unwrap();

            let text = run(
                &service,
                json!({"name": "AddAdditionalLanguage", "language": "elvish"}),
            )
            .unwrap();
            assert!(text.starts_with("Learned Elvish (1 more available)."));

            let text = run(&service, json!({"name": "AddAdditionalLanguage"})).unwrap();
            assert!(text.starts_with("Learned Bugbear (0 more available)."));

            let text = run(
                &service,
                json!({"name": "AddAdditionalLanguage", "language": "Goblin"}),
            )
            .unwrap();
            assert!(text.starts_with("No additional languages can be learned."));
        }

        #[test]
        fn test_coins_in_and_out() {
            let service = service(4);
            run(&service, json!({"name": "UpdateCharacterClass", "class": "Thief"})).unwrap();
            let text =
                run(&service, json!({"name": "AdjustCoins", "coin": "gp", "amount": 25})).unwrap();
            assert!(text.starts_with("Now holding 25 gp."));
            let text =
                run(&service, json!({"name": "AdjustCoins", "coin": "Gold", "amount": -5})).unwrap();
            assert!(text.starts_with("Now holding 20 gp."));

            let err = run(&service, json!({"name": "AdjustCoins", "coin": "gp", "amount": -50}))
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_argument");
        }

        #[test]
        fn test_damage_and_healing_messages() {
            let service = service(8);
            run(&service, json!({"name": "UpdateCharacterClass", "class": "Fighter"})).unwrap();
            run(&service, json!({"name": "GainTempHp", "amount": 3})).unwrap();

            let text = run(&service, json!({"name": "TakeDamage", "amount": 5})).unwrap();
            assert!(text.starts_with("Lost 2 HP after 3 temporary absorbed; 6 HP left."));
            let text = run(&service, json!({"name": "Heal", "amount": 10})).unwrap();
            assert!(text.starts_with("Healed 2 HP; now at 8."));
            let text = run(&service, json!({"name": "Heal", "amount": 1})).unwrap();
            assert!(text.starts_with("Already at full hit points."));
        }

        #[test]
        fn test_spellbook() {
            let service = service(3);
            run(&service, json!({"name": "UpdateCharacterClass", "class": "Magic-User"})).unwrap();
            let text = run(&service, json!({"name": "LearnSpell", "spell": "sleep"})).unwrap();
            assert!(text.starts_with("Added Sleep (level 1) to the spellbook."));

            let err = run(&service, json!({"name": "LearnSpell", "spell": "Wish"})).unwrap_err();
            assert_eq!(err.kind(), "invalid_argument");
        }
    }

    mod failures {
        use super::*;

        #[test]
        fn test_experience_before_class_is_not_initialized() {
            let service = service(4);
            let err = run(
                &service,
                json!({"name": "UpdateCharacterExperience", "experience": 100}),
            )
            .unwrap_err();
            assert_eq!(err.kind(), "not_initialized");
        }

        #[test]
        fn test_negative_experience_leaves_state_alone() {
            let service = service(4);
            run(&service, json!({"name": "UpdateCharacterClass", "class": "Dwarf"})).unwrap();
            let before = service.characters.snapshot("conv-1").unwrap();

            let err = run(
                &service,
                json!({"name": "UpdateCharacterExperience", "experience": -1}),
            )
            .unwrap_err();
            assert_eq!(err.kind(), "invalid_argument");
            assert_eq!(service.characters.snapshot("conv-1").unwrap(), before);
        }

        #[test]
        fn test_unknown_vocabulary_is_a_parse_error() {
            let service = service(4);
            let err =
                run(&service, json!({"name": "UpdateCharacterClass", "class": "Bard"})).unwrap_err();
            assert_eq!(err.kind(), "parse");
            let err = run(&service, json!({"name": "UpdateRace", "race": "Tiefling"})).unwrap_err();
            assert_eq!(err.kind(), "parse");
        }

        #[test]
        fn test_malformed_call_is_a_bad_request() {
            let service = service(4);
            let err = run(&service, json!({"name": "TakeDamage"})).unwrap_err();
            assert_eq!(err.kind(), "bad_request");
        }
    }

    mod accessors {
        use super::*;

        #[test]
        fn test_blank_character_values() {
            let service = service(4);
            assert_eq!(run(&service, json!({"name": "GetCharacterClassName"})).unwrap(), "None");
            assert_eq!(run(&service, json!({"name": "GetCharacterRace"})).unwrap(), "None");
            assert_eq!(run(&service, json!({"name": "GetLiteracyState"})).unwrap(), "Literate");
            assert_eq!(run(&service, json!({"name": "GetAdditionalLanguages"})).unwrap(), "0");
            assert_eq!(run(&service, json!({"name": "GetMaxRetainers"})).unwrap(), "4");
            assert_eq!(run(&service, json!({"name": "GetRetainerLoyalty"})).unwrap(), "7");
            assert_eq!(run(&service, json!({"name": "GetNpcReactionBonus"})).unwrap(), "+0");
            assert_eq!(run(&service, json!({"name": "GetOpenDoorChance"})).unwrap(), "2-in-6");
            assert_eq!(
                run(&service, json!({"name": "GetAbilityScoreValue", "ability": "wis"})).unwrap(),
                "9"
            );
        }

        #[test]
        fn test_turning_requires_a_class() {
            let service = service(4);
            let call = json!({"name": "GetTurningResult", "monster_hit_dice": "1"});
            assert_eq!(run(&service, call.clone()).unwrap_err().kind(), "not_initialized");

            run(&service, json!({"name": "UpdateCharacterClass", "class": "Cleric"})).unwrap();
            assert_eq!(run(&service, call).unwrap(), "7");
        }

        #[test]
        fn test_json_snapshot_round_trips_the_character() {
            let service = service(5);
            run(&service, json!({"name": "UpdateCharacterName", "character_name": "Ilsa"})).unwrap();
            run(&service, json!({"name": "UpdateRace", "race": "Half-Elf"})).unwrap();
            run(&service, json!({"name": "UpdateCharacterClass", "class": "Elf"})).unwrap();
            run(&service, json!({"name": "AdjustCoins", "coin": "pp", "amount": 2})).unwrap();

            let text = run(&service, json!({"name": "GetCharacterStateAsJson"})).unwrap();
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(value["derived"]["className"], "Elf");
            assert_eq!(value["derived"]["level"], 1);
            assert_eq!(value["derived"]["totalValueInGp"], 10);

            let restored: CharacterState =
                serde_json::from_value(value["character"].clone()).unwrap();
            assert_eq!(restored, service.characters.snapshot("conv-1").unwrap());
        }

        #[test]
        fn test_conversations_are_independent() {
            let service = service(4);
            service
                .execute(
                    "a",
                    CharacterCall::UpdateCharacterClass {
                        class: "Thief".into(),
                    }
                    .into(),
                )
                .unwrap();
            assert_eq!(
                service.execute("b", CharacterCall::GetCharacterClassName.into()).unwrap(),
                "None"
            );
            assert_eq!(
                service.execute("a", CharacterCall::GetCharacterClassName.into()).unwrap(),
                "Thief"
            );
        }
    }

    mod dice_and_experts {
        use super::*;

        #[test]
        fn test_roll_named_die_sums_each_roll() {
            let mut rng = MockRandom::new();
            rng.expect_gen_range()
                .with(eq(1), eq(6))
                .times(4)
                .returning(|_, _| 3);
            let service = service_with(Arc::new(rng));
            let text = run(&service, json!({"name": "RollDice", "dice": "d6", "count": 4})).unwrap();
            assert_eq!(text, "12");
        }

        #[test]
        fn test_roll_formula_shows_breakdown() {
            let service = service(5);
            let text = run(&service, json!({"name": "RollDice", "dice": "2d6+1"})).unwrap();
            assert_eq!(text, "2d6[5, 5] + 1 = 11");
        }

        #[test]
        fn test_bad_dice_requests() {
            let service = service(5);
            let err = run(&service, json!({"name": "RollDice", "dice": "d7", "count": 1}))
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_argument");
            let err = run(&service, json!({"name": "RollDice", "dice": "d6", "count": 0}))
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_argument");
        }

        #[test]
        fn test_formula_modifier_past_integer_range_is_rejected() {
            let service = service(3);
            let err = run(&service, json!({"name": "RollDice", "dice": "1d6+2147483647"}))
                .unwrap_err();
            assert_eq!(err.kind(), "invalid_argument");
            assert!(err.to_string().contains("overflow"));
        }

        #[test]
        fn test_roll_dice_does_not_create_a_character() {
            let service = service(5);
            run(&service, json!({"name": "RollDice", "dice": "d20", "count": 1})).unwrap();
            assert!(service.characters.is_empty());
        }

        #[test]
        fn test_list_experts() {
            let service = service(5);
            let text = run(&service, json!({"name": "ListExperts"})).unwrap();
            assert_eq!(text.lines().count(), 4);
            assert!(text.contains("CharacterSheet [character_sheet] (LocalData)"));
        }
    }
}
