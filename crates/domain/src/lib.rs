//! ExpertGM domain: the character aggregate, its sub-states, and the
//! rule tables that drive them.
//!
//! This crate holds no I/O. Randomness comes in through [`RandomSource`] and
//! rule data through a [`RulesRegistry`] built from deserialized config.

pub mod character;
pub mod error;
pub mod events;
pub mod random;
pub mod rules;
pub mod value_objects;

#[cfg(test)]
mod testing;

pub use character::{
    recompute_for_level, CharacterState, CharacterSummary, ClassProgression, CombatState, Domain,
    ExperienceState, HealthState, KnownSpell, LevelEffects, PersonalityBackground, Progression,
    SavingThrows, SpellsState, WealthState,
};
pub use error::DomainError;
pub use events::{
    ClassChange, DamageOutcome, ExperienceGained, HealOutcome, LanguageOutcome, LevelUp,
};
pub use random::{choose, RandomSource};
pub use rules::{
    find_band, Band, ClassTableConfig, GameSystemConfig, LevelXp, PrimeCondition,
    PrimeConditionConfig, PrimeRequisiteConfig, PrimeRequisiteRule, RulesRegistry, SpellSlotRow,
    SpellSlots,
};
pub use value_objects::{
    roll_dice, roll_die, roll_mixed, AbilityScore, AbilityScores, AbilityType, Alignment,
    CharacterClass, CharacterRace, CoinType, DiceFormula, DiceParseError, DiceRollResult, DieType,
    Language, MagicType, SpellType,
};
