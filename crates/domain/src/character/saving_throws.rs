//! Saving throw targets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum d20 roll needed to save against each category. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingThrows {
    pub death_poison: i32,
    pub wands: i32,
    pub paralysis_petrify: i32,
    pub breath_attacks: i32,
    pub spells_rods_staves: i32,
}

impl SavingThrows {
    /// Answer for a class/level the tables do not list: only a natural 20 saves.
    pub const UNLISTED: SavingThrows = SavingThrows {
        death_poison: 20,
        wands: 20,
        paralysis_petrify: 20,
        breath_attacks: 20,
        spells_rods_staves: 20,
    };
}

impl fmt::Display for SavingThrows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Death/Poison {}, Wands {}, Paralysis/Petrify {}, Breath Attacks {}, Spells/Rods/Staves {}",
            self.death_poison,
            self.wands,
            self.paralysis_petrify,
            self.breath_attacks,
            self.spells_rods_staves
        )
    }
}
