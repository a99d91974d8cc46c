//! The character aggregate and its class-derived sub-states.

mod combat;
mod experience;
mod health;
mod personality;
mod progression;
mod saving_throws;
mod spells;
mod state;
mod summary;
mod wealth;

pub use combat::CombatState;
pub use experience::ExperienceState;
pub use health::HealthState;
pub use personality::PersonalityBackground;
pub use progression::{recompute_for_level, LevelEffects};
pub use saving_throws::SavingThrows;
pub use spells::{KnownSpell, SpellsState};
pub use state::{CharacterState, ClassProgression, Progression};
pub use summary::CharacterSummary;
pub use wealth::{Domain, WealthState};
