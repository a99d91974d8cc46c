//! Character state aggregate
//!
//! # Lifecycle
//!
//! A character starts [`Progression::Uninitialized`]: name, race, alignment,
//! ability scores and languages only. Assigning a class builds every
//! class-derived sub-state at once, so a character is never half-initialized.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: reads go through accessors
//! - **Explicit inputs**: mutations take the rules registry and random source
//!   as arguments instead of reaching for globals
//! - **Outcome enums**: mutations report what happened (`ClassChange`, `DamageOutcome`, ...)
//! - **No partial writes**: a failing mutation leaves the character untouched
//!
//! Ability-score changes after class assignment do not rework hit points,
//! combat bonuses or the XP multiplier already derived from them.

use serde::{Deserialize, Serialize};

use super::progression::recompute_for_level;
use super::{
    CombatState, ExperienceState, HealthState, KnownSpell, PersonalityBackground, SavingThrows,
    SpellsState, WealthState,
};
use crate::error::DomainError;
use crate::events::{
    ClassChange, DamageOutcome, ExperienceGained, HealOutcome, LanguageOutcome, LevelUp,
};
use crate::random::{choose, RandomSource};
use crate::rules::RulesRegistry;
use crate::value_objects::{
    AbilityScore, AbilityScores, AbilityType, Alignment, CharacterClass, CharacterRace, CoinType,
    Language,
};

/// Everything that exists only once a class is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassProgression {
    class: CharacterClass,
    experience: ExperienceState,
    health: HealthState,
    saving_throws: SavingThrows,
    combat: CombatState,
    spells: SpellsState,
    wealth: WealthState,
}

impl ClassProgression {
    /// Fresh level-1 sub-states for `class`.
    pub fn new(
        class: CharacterClass,
        abilities: &AbilityScores,
        rules: &RulesRegistry,
        rng: &dyn RandomSource,
    ) -> Self {
        let effects = recompute_for_level(class, 1, abilities, rules);
        let mut spells = SpellsState::for_class(class, 1, rules);
        spells.apply_slots(effects.spell_slots);
        Self {
            class,
            experience: ExperienceState::new(class, abilities, rules),
            health: HealthState::roll_initial(
                class,
                abilities.modifier(AbilityType::Constitution),
                rules,
                rng,
            ),
            saving_throws: effects.saving_throws,
            combat: effects.combat,
            spells,
            wealth: WealthState::new(),
        }
    }

    #[inline]
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    #[inline]
    pub fn experience(&self) -> &ExperienceState {
        &self.experience
    }

    #[inline]
    pub fn health(&self) -> &HealthState {
        &self.health
    }

    #[inline]
    pub fn saving_throws(&self) -> &SavingThrows {
        &self.saving_throws
    }

    #[inline]
    pub fn combat(&self) -> &CombatState {
        &self.combat
    }

    #[inline]
    pub fn spells(&self) -> &SpellsState {
        &self.spells
    }

    #[inline]
    pub fn wealth(&self) -> &WealthState {
        &self.wealth
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.experience.level()
    }

    /// Banks scaled XP, then applies each crossed level in turn.
    fn gain_experience(
        &mut self,
        amount: i32,
        abilities: &AbilityScores,
        rules: &RulesRegistry,
        rng: &dyn RandomSource,
    ) -> Result<ExperienceGained, DomainError> {
        let xp_awarded = self.experience.scaled_award(amount)?;
        self.experience.bank(xp_awarded);

        let constitution = abilities.modifier(AbilityType::Constitution);
        let mut level_ups = Vec::new();
        while let Some(level) = self.experience.pending_level() {
            let effects = recompute_for_level(self.class, level, abilities, rules);
            let hp_gained =
                self.health
                    .advance(level, effects.max_hit_die_modifier, constitution, rng);
            self.saving_throws = effects.saving_throws;
            self.combat = effects.combat;
            self.spells.apply_slots(effects.spell_slots);
            self.experience.advance_to(level, effects.xp_to_next_level);

            level_ups.push(LevelUp {
                level,
                hp_gained,
                max_hp: self.health.max_hp(),
            });
        }

        Ok(ExperienceGained {
            xp_awarded,
            total_xp: self.experience.current_xp(),
            level: self.experience.level(),
            level_ups,
        })
    }
}

/// Whether a class has been assigned yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Progression {
    Uninitialized,
    Initialized(Box<ClassProgression>),
}

/// The character aggregate root.
///
/// # Invariants
///
/// - All six ability scores are always present, each with its table modifier
/// - Known languages contain no duplicates and keep insertion order
/// - Sub-states exist together or not at all (see [`Progression`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterState {
    name: String,
    race: Option<CharacterRace>,
    alignment: Option<Alignment>,
    abilities: AbilityScores,
    known_languages: Vec<Language>,
    additional_languages: i32,
    #[serde(default)]
    personality: PersonalityBackground,
    progression: Progression,
}

impl CharacterState {
    /// Unnamed, classless, every ability at 9.
    pub fn new(rules: &RulesRegistry) -> Self {
        Self {
            name: String::new(),
            race: None,
            alignment: None,
            abilities: AbilityScores::new(rules),
            known_languages: Vec::new(),
            additional_languages: 0,
            personality: PersonalityBackground::default(),
            progression: Progression::Uninitialized,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn race(&self) -> Option<CharacterRace> {
        self.race
    }

    #[inline]
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    #[inline]
    pub fn abilities(&self) -> &AbilityScores {
        &self.abilities
    }

    #[inline]
    pub fn ability(&self, ability: AbilityType) -> AbilityScore {
        self.abilities.get(ability)
    }

    #[inline]
    pub fn known_languages(&self) -> &[Language] {
        &self.known_languages
    }

    /// Languages still available to learn.
    #[inline]
    pub fn additional_languages(&self) -> i32 {
        self.additional_languages
    }

    #[inline]
    pub fn personality(&self) -> &PersonalityBackground {
        &self.personality
    }

    #[inline]
    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// The class-derived sub-states, if a class has been assigned.
    pub fn class_progression(&self) -> Option<&ClassProgression> {
        match &self.progression {
            Progression::Initialized(progress) => Some(&**progress),
            Progression::Uninitialized => None,
        }
    }

    pub fn class(&self) -> Option<CharacterClass> {
        self.class_progression().map(ClassProgression::class)
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.progression, Progression::Initialized(_))
    }

    fn initialized_mut(&mut self, action: &str) -> Result<&mut ClassProgression, DomainError> {
        match &mut self.progression {
            Progression::Initialized(progress) => Ok(&mut **progress),
            Progression::Uninitialized => Err(DomainError::not_initialized(format!(
                "Cannot {} before a class is assigned",
                action
            ))),
        }
    }

    fn initialized(&self, action: &str) -> Result<&ClassProgression, DomainError> {
        self.class_progression().ok_or_else(|| {
            DomainError::not_initialized(format!("Cannot {} before a class is assigned", action))
        })
    }

    // =========================================================================
    // Ability-derived lookups
    // =========================================================================

    pub fn literacy<'a>(&self, rules: &'a RulesRegistry) -> &'a str {
        rules.literacy(self.abilities.value(AbilityType::Intelligence))
    }

    pub fn max_retainers(&self, rules: &RulesRegistry) -> i32 {
        rules.max_retainers(self.abilities.value(AbilityType::Charisma))
    }

    pub fn retainer_loyalty(&self, rules: &RulesRegistry) -> i32 {
        rules.retainer_loyalty(self.abilities.value(AbilityType::Charisma))
    }

    pub fn npc_reaction_bonus(&self, rules: &RulesRegistry) -> i32 {
        rules.npc_reaction_bonus(self.abilities.value(AbilityType::Charisma))
    }

    pub fn open_door_chance<'a>(&self, rules: &'a RulesRegistry) -> &'a str {
        rules.open_door_chance(self.abilities.value(AbilityType::Strength))
    }

    /// Languages in the game this character could still learn.
    pub fn available_languages(&self, rules: &RulesRegistry) -> Vec<Language> {
        rules
            .languages()
            .iter()
            .copied()
            .filter(|language| !language.is_secret() && !self.known_languages.contains(language))
            .collect()
    }

    /// Turning result against undead of the given hit dice at the current level.
    pub fn turning_result<'a>(
        &self,
        monster_hit_dice: &str,
        rules: &'a RulesRegistry,
    ) -> Result<&'a str, DomainError> {
        let progress = self.initialized("turn undead")?;
        Ok(rules.turning_result(progress.class(), progress.level(), monster_hit_dice))
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into().trim().to_string();
    }

    pub fn set_race(&mut self, race: CharacterRace) {
        self.race = Some(race);
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = Some(alignment);
    }

    pub fn set_personality(&mut self, personality: PersonalityBackground) {
        self.personality = personality;
    }

    /// Updates one score and its modifier. Derived sub-states are left as
    /// they were.
    pub fn set_ability_score(&mut self, ability: AbilityType, value: i32, rules: &RulesRegistry) {
        self.abilities.set(ability, value, rules);
    }

    pub fn set_ability_scores(
        &mut self,
        scores: impl IntoIterator<Item = (AbilityType, i32)>,
        rules: &RulesRegistry,
    ) {
        for (ability, value) in scores {
            self.abilities.set(ability, value, rules);
        }
    }

    // =========================================================================
    // Class
    // =========================================================================

    /// Assigns a class, rebuilding every class-derived sub-state.
    ///
    /// Re-assigning the current class changes nothing. Any other class is a
    /// hard reset: new hit points, level 1, no coins, the class's starting
    /// languages, and an additional-language allowance from Intelligence.
    pub fn set_class(
        &mut self,
        class: CharacterClass,
        rules: &RulesRegistry,
        rng: &dyn RandomSource,
    ) -> ClassChange {
        let from = self.class();
        if from == Some(class) {
            return ClassChange::Unchanged(class);
        }

        self.progression = Progression::Initialized(Box::new(ClassProgression::new(
            class,
            &self.abilities,
            rules,
            rng,
        )));

        let mut languages = Vec::new();
        for language in rules.starting_languages(class) {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
        self.known_languages = languages;
        self.additional_languages =
            rules.additional_languages(self.abilities.value(AbilityType::Intelligence));

        ClassChange::Assigned { from, to: class }
    }

    // =========================================================================
    // Experience
    // =========================================================================

    /// Awards XP through the class multiplier and runs every level-up it
    /// earns, one level at a time.
    pub fn gain_experience(
        &mut self,
        amount: i32,
        rules: &RulesRegistry,
        rng: &dyn RandomSource,
    ) -> Result<ExperienceGained, DomainError> {
        let abilities = &self.abilities;
        let progress = match &mut self.progression {
            Progression::Initialized(progress) => progress,
            Progression::Uninitialized => {
                return Err(DomainError::not_initialized(
                    "Cannot gain experience before a class is assigned",
                ))
            }
        };
        progress.gain_experience(amount, abilities, rules, rng)
    }

    // =========================================================================
    // Languages
    // =========================================================================

    /// Learns one additional language if the allowance permits.
    ///
    /// `None`, `Common` and `Alignment` ask for a random eligible language.
    pub fn learn_additional_language(
        &mut self,
        requested: Option<Language>,
        rules: &RulesRegistry,
        rng: &dyn RandomSource,
    ) -> Result<LanguageOutcome, DomainError> {
        if self.additional_languages <= 0 {
            return Ok(LanguageOutcome::NoAllowance);
        }

        let language = match requested {
            Some(language) if !language.is_random_request() => language,
            _ => {
                let available = self.available_languages(rules);
                *choose(&available, rng).ok_or_else(|| {
                    DomainError::invalid_argument("No languages are left to learn")
                })?
            }
        };

        if language.is_secret() || self.known_languages.contains(&language) {
            return Err(DomainError::invalid_argument(format!(
                "{} is already known or is a secret language",
                language
            )));
        }

        self.known_languages.push(language);
        self.additional_languages -= 1;
        Ok(LanguageOutcome::Learned {
            language,
            remaining_allowance: self.additional_languages,
        })
    }

    // =========================================================================
    // Health
    // =========================================================================

    pub fn take_damage(&mut self, amount: i32) -> Result<DamageOutcome, DomainError> {
        Ok(self.initialized_mut("take damage")?.health.take_damage(amount))
    }

    pub fn heal(&mut self, amount: i32) -> Result<HealOutcome, DomainError> {
        Ok(self.initialized_mut("heal")?.health.heal(amount))
    }

    /// Returns the new temporary hit point total.
    pub fn gain_temp_hp(&mut self, amount: i32) -> Result<i32, DomainError> {
        self.initialized_mut("gain temporary hit points")?
            .health
            .gain_temp_hp(amount)
    }

    // =========================================================================
    // Spells and wealth
    // =========================================================================

    pub fn learn_spell(
        &mut self,
        name: &str,
        rules: &RulesRegistry,
    ) -> Result<KnownSpell, DomainError> {
        let progress = self.initialized_mut("learn spells")?;
        let class = progress.class;
        progress.spells.learn_spell(class, name, rules)
    }

    /// Returns the new count of that coin.
    pub fn gain_coins(&mut self, coin: CoinType, amount: u32) -> Result<u32, DomainError> {
        Ok(self
            .initialized_mut("hold coins")?
            .wealth
            .gain_coins(coin, amount))
    }

    /// Returns the new count of that coin.
    pub fn spend_coins(&mut self, coin: CoinType, amount: u32) -> Result<u32, DomainError> {
        self.initialized_mut("spend coins")?
            .wealth
            .spend_coins(coin, amount)
    }

    pub fn set_domain(&mut self, domain: Option<super::Domain>) -> Result<(), DomainError> {
        self.initialized_mut("rule a domain")?
            .wealth
            .set_domain(domain);
        Ok(())
    }
}
