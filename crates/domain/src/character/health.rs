//! Hit points: rolled at class assignment, grown per level, spent by damage.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::events::{DamageOutcome, HealOutcome};
use crate::random::RandomSource;
use crate::rules::RulesRegistry;
use crate::value_objects::{CharacterClass, DieType};

/// Current, maximum and temporary hit points.
///
/// # Invariants
///
/// - `0 <= current_hp <= max_hp`
/// - `temp_hp >= 0` and is spent before `current_hp`
/// - `hit_dice_count` equals the character level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthState {
    current_hp: i32,
    max_hp: i32,
    temp_hp: i32,
    hit_die: DieType,
    hit_dice_count: u8,
    max_hit_die_modifier: i32,
}

/// One hit die plus Constitution, never less than a single hit point.
fn rolled_hit_points(hit_die: DieType, constitution_modifier: i32, rng: &dyn RandomSource) -> i32 {
    (hit_die.roll(rng) + constitution_modifier).max(1)
}

impl HealthState {
    /// Level-1 hit points: one roll of the class hit die plus Constitution.
    pub fn roll_initial(
        class: CharacterClass,
        constitution_modifier: i32,
        rules: &RulesRegistry,
        rng: &dyn RandomSource,
    ) -> Self {
        let hit_die = rules.hit_die(class);
        let max_hp = rolled_hit_points(hit_die, constitution_modifier, rng);
        Self {
            current_hp: max_hp,
            max_hp,
            temp_hp: 0,
            hit_die,
            hit_dice_count: 1,
            max_hit_die_modifier: rules.hit_die_modifier(class, 1),
        }
    }

    /// Applies one level-up and restores the character to full.
    ///
    /// A positive `flat_modifier` replaces the hit die roll for this level.
    /// Returns the hit points gained.
    pub(crate) fn advance(
        &mut self,
        level: u8,
        flat_modifier: i32,
        constitution_modifier: i32,
        rng: &dyn RandomSource,
    ) -> i32 {
        self.hit_dice_count = level;
        self.max_hit_die_modifier = flat_modifier;
        let gained = if flat_modifier <= 0 {
            rolled_hit_points(self.hit_die, constitution_modifier, rng)
        } else {
            flat_modifier
        };
        self.max_hp += gained;
        self.current_hp = self.max_hp;
        gained
    }

    #[inline]
    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    #[inline]
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    #[inline]
    pub fn temp_hp(&self) -> i32 {
        self.temp_hp
    }

    #[inline]
    pub fn hit_die(&self) -> DieType {
        self.hit_die
    }

    #[inline]
    pub fn hit_dice_count(&self) -> u8 {
        self.hit_dice_count
    }

    #[inline]
    pub fn max_hit_die_modifier(&self) -> i32 {
        self.max_hit_die_modifier
    }

    /// Temporary hit points soak damage point for point, the rest comes off
    /// current hit points, floored at zero.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if amount <= 0 {
            return DamageOutcome::NoEffect;
        }

        let absorbed = amount.min(self.temp_hp);
        self.temp_hp -= absorbed;
        let remaining = amount - absorbed;
        if remaining == 0 {
            return DamageOutcome::Absorbed {
                temp_hp_absorbed: absorbed,
                temp_hp_remaining: self.temp_hp,
            };
        }

        let hp_lost = remaining.min(self.current_hp);
        self.current_hp -= hp_lost;
        if self.current_hp == 0 {
            DamageOutcome::Downed {
                temp_hp_absorbed: absorbed,
                hp_lost,
            }
        } else {
            DamageOutcome::Wounded {
                temp_hp_absorbed: absorbed,
                hp_lost,
                remaining_hp: self.current_hp,
            }
        }
    }

    /// Heals up to maximum hit points.
    pub fn heal(&mut self, amount: i32) -> HealOutcome {
        if amount <= 0 {
            return HealOutcome::NoEffect;
        }
        if self.current_hp >= self.max_hp {
            return HealOutcome::AlreadyFull;
        }

        let new_hp = self.current_hp.saturating_add(amount).min(self.max_hp);
        let amount_healed = new_hp - self.current_hp;
        self.current_hp = new_hp;
        HealOutcome::Healed {
            amount_healed,
            new_hp,
        }
    }

    /// Adds temporary hit points, returning the new temporary total.
    pub fn gain_temp_hp(&mut self, amount: i32) -> Result<i32, DomainError> {
        if amount < 0 {
            return Err(DomainError::invalid_argument(format!(
                "Temporary hit points cannot be negative: {}",
                amount
            )));
        }
        self.temp_hp = self.temp_hp.saturating_add(amount);
        Ok(self.temp_hp)
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HP {}/{}, Temp HP {}, Hit Dice {}d{}",
            self.current_hp,
            self.max_hp,
            self.temp_hp,
            self.hit_dice_count,
            self.hit_die.sides()
        )?;
        if self.max_hit_die_modifier > 0 {
            write!(f, " (+{} per level)", self.max_hit_die_modifier)?;
        }
        Ok(())
    }
}
