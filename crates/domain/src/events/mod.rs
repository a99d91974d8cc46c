//! Domain events and mutation outcomes

mod character_events;

pub use character_events::{
    ClassChange, DamageOutcome, ExperienceGained, HealOutcome, LanguageOutcome, LevelUp,
};
