//! Experience points and level.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::rules::RulesRegistry;
use crate::value_objects::{AbilityScores, CharacterClass};

/// # Invariants
///
/// - `1 <= level <= max_level`, and level never decreases
/// - `xp_to_next_level == 0` once `level == max_level`
/// - `xp_multiplier` is fixed when the class is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceState {
    current_xp: u32,
    level: u8,
    max_level: u8,
    xp_multiplier: f64,
    xp_to_next_level: u32,
}

impl ExperienceState {
    /// Level 1 with the multiplier the current scores earn for `class`.
    pub fn new(class: CharacterClass, abilities: &AbilityScores, rules: &RulesRegistry) -> Self {
        let max_level = rules.max_level(class).max(1);
        let xp_to_next_level = if max_level > 1 {
            rules.xp_for_next_level(class, 1)
        } else {
            0
        };
        Self {
            current_xp: 0,
            level: 1,
            max_level,
            xp_multiplier: rules.xp_multiplier(class, abilities),
            xp_to_next_level,
        }
    }

    #[inline]
    pub fn current_xp(&self) -> u32 {
        self.current_xp
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    #[inline]
    pub fn xp_multiplier(&self) -> f64 {
        self.xp_multiplier
    }

    #[inline]
    pub fn xp_to_next_level(&self) -> u32 {
        self.xp_to_next_level
    }

    /// XP actually banked for a raw award, truncated toward zero.
    pub fn scaled_award(&self, amount: i32) -> Result<u32, DomainError> {
        if amount < 0 {
            return Err(DomainError::invalid_argument(format!(
                "Experience gain cannot be negative: {}",
                amount
            )));
        }
        let scaled = (f64::from(amount) * self.xp_multiplier).trunc();
        Ok(if scaled <= 0.0 {
            0
        } else if scaled >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            scaled as u32
        })
    }

    pub(crate) fn bank(&mut self, xp: u32) {
        self.current_xp = self.current_xp.saturating_add(xp);
    }

    /// The next level if banked XP has crossed its threshold.
    pub(crate) fn pending_level(&self) -> Option<u8> {
        let reached = self.level < self.max_level
            && self.xp_to_next_level > 0
            && self.current_xp >= self.xp_to_next_level;
        reached.then(|| self.level + 1)
    }

    pub(crate) fn advance_to(&mut self, level: u8, xp_to_next_level: u32) {
        self.level = level;
        self.xp_to_next_level = if level >= self.max_level {
            0
        } else {
            xp_to_next_level
        };
    }
}

impl fmt::Display for ExperienceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}, XP {}", self.level, self.current_xp)?;
        if self.xp_to_next_level > 0 {
            write!(f, " / {}", self.xp_to_next_level)?;
        } else {
            write!(f, " (max level)")?;
        }
        write!(f, ", XP multiplier x{:.2}", self.xp_multiplier)
    }
}
