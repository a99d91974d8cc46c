//! Game-system rules: the configuration document and the registry over it.

mod config;
mod registry;

pub use config::{
    find_band, Band, ClassTableConfig, GameSystemConfig, LevelXp, PrimeConditionConfig,
    PrimeRequisiteConfig, SpellSlotRow,
};
pub use registry::{PrimeCondition, PrimeRequisiteRule, RulesRegistry, SpellSlots};
