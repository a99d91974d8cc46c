//! Dice rolling value objects and parsing
//!
//! Supports the fixed set of polyhedral dice used by the rules tables and
//! formulas like "3d6", "1d8+1", "2d4-1".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::DomainError;
use crate::random::RandomSource;

/// Error when parsing a die type or dice formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("Empty dice formula")]
    Empty,
    /// Invalid format - expected XdY or XdY+Z
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Dice count must be between 1 and 100
    #[error("Dice count must be between 1 and 100")]
    InvalidDiceCount,
    /// Only d4, d6, d8, d10, d12, d20 and d100 exist
    #[error("Unsupported die type: d{0}")]
    UnsupportedDie(u32),
    /// Modifier pushes the total past the integer range
    #[error("Modifier value overflow")]
    ModifierOverflow,
}

/// A supported die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DieType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieType {
    pub fn sides(self) -> i32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    pub fn from_sides(sides: u32) -> Result<Self, DiceParseError> {
        match sides {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            100 => Ok(Self::D100),
            other => Err(DiceParseError::UnsupportedDie(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::D4 => "D4",
            Self::D6 => "D6",
            Self::D8 => "D8",
            Self::D10 => "D10",
            Self::D12 => "D12",
            Self::D20 => "D20",
            Self::D100 => "D100",
        }
    }

    pub fn all() -> [DieType; 7] {
        [
            Self::D4,
            Self::D6,
            Self::D8,
            Self::D10,
            Self::D12,
            Self::D20,
            Self::D100,
        ]
    }

    /// Rolls this die once, returning a value in `1..=sides`.
    pub fn roll(self, rng: &dyn RandomSource) -> i32 {
        rng.gen_range(1, self.sides())
    }
}

impl fmt::Display for DieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DieType {
    type Err = DomainError;

    /// Accepts "D6", "d6" or a bare side count "6".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('d')
            .or_else(|| trimmed.strip_prefix('D'))
            .unwrap_or(trimmed);
        let sides: u32 = digits
            .parse()
            .map_err(|_| DomainError::invalid_argument(format!("Unrecognized die type: {}", s)))?;
        Ok(Self::from_sides(sides)?)
    }
}

/// Rolls a single die.
pub fn roll_die(die: DieType, rng: &dyn RandomSource) -> i32 {
    die.roll(rng)
}

/// Sums `count` independent rolls of the same die. Zero dice sum to zero.
pub fn roll_dice(die: DieType, count: u32, rng: &dyn RandomSource) -> i32 {
    (0..count).map(|_| die.roll(rng)).sum()
}

/// Sums one roll of each listed die, for mixed damage like d8 + d6.
pub fn roll_mixed(dice: &[DieType], rng: &dyn RandomSource) -> i32 {
    dice.iter().map(|die| die.roll(rng)).sum()
}

/// A parsed dice formula like "2d6+3"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u8,
    /// Die to roll (Y in XdY)
    pub die: DieType,
    /// Modifier to add/subtract after rolling (+Z or -Z)
    pub modifier: i32,
}

impl DiceFormula {
    const MAX_DICE: u8 = 100;

    pub fn new(dice_count: u8, die: DieType, modifier: i32) -> Result<Self, DiceParseError> {
        if dice_count == 0 || dice_count > Self::MAX_DICE {
            return Err(DiceParseError::InvalidDiceCount);
        }
        let count = i32::from(dice_count);
        count
            .checked_add(modifier)
            .and_then(|_| count.checked_mul(die.sides()))
            .and_then(|max| max.checked_add(modifier))
            .ok_or(DiceParseError::ModifierOverflow)?;
        Ok(Self {
            dice_count,
            die,
            modifier,
        })
    }

    /// Parse a dice formula string like "1d20+5", "2d6-1", "d100"
    ///
    /// Supported formats:
    /// - "XdY" - Roll X dice of size Y
    /// - "XdY+Z" - Roll X dice of size Y, add Z
    /// - "XdY-Z" - Roll X dice of size Y, subtract Z
    /// - "dY" - Roll 1 die of size Y (shorthand)
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = input.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let dice_count_str = &input[..d_pos];
        let dice_count: u8 = if dice_count_str.is_empty() {
            1
        } else {
            dice_count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", dice_count_str))
            })?
        };

        let after_d = &input[d_pos + 1..];
        let (die_str, modifier) = if let Some(plus_pos) = after_d.find('+') {
            let mod_str = &after_d[plus_pos + 1..];
            let modifier: i32 = mod_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid modifier: '+{}'", mod_str))
            })?;
            (&after_d[..plus_pos], modifier)
        } else if let Some(minus_pos) = after_d.rfind('-') {
            if minus_pos == 0 {
                return Err(DiceParseError::InvalidFormat(format!(
                    "Invalid die size: '{}'",
                    after_d
                )));
            }
            let mod_str = &after_d[minus_pos + 1..];
            let modifier: i32 = mod_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid modifier: '-{}'", mod_str))
            })?;
            (&after_d[..minus_pos], -modifier)
        } else {
            (after_d, 0)
        };

        let sides: u32 = die_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", die_str))
        })?;

        Self::new(dice_count, DieType::from_sides(sides)?, modifier)
    }

    /// Roll the dice and return the result
    pub fn roll(&self, rng: &dyn RandomSource) -> DiceRollResult {
        let individual_rolls: Vec<i32> = (0..self.dice_count).map(|_| self.die.roll(rng)).collect();
        let dice_total: i32 = individual_rolls.iter().sum();

        DiceRollResult {
            formula: self.clone(),
            individual_rolls,
            dice_total,
            modifier_applied: self.modifier,
            total: dice_total.saturating_add(self.modifier),
        }
    }

    /// Get the minimum possible roll
    pub fn min_roll(&self) -> i32 {
        i32::from(self.dice_count).saturating_add(self.modifier)
    }

    /// Get the maximum possible roll
    pub fn max_roll(&self) -> i32 {
        (i32::from(self.dice_count) * self.die.sides()).saturating_add(self.modifier)
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sides = self.die.sides();
        match self.modifier {
            0 => write!(f, "{}d{}", self.dice_count, sides),
            m if m > 0 => write!(f, "{}d{}+{}", self.dice_count, sides, m),
            m => write!(f, "{}d{}{}", self.dice_count, sides, m),
        }
    }
}

impl FromStr for DiceFormula {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s)?)
    }
}

/// Result of rolling dice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollResult {
    /// The formula that was rolled
    pub formula: DiceFormula,
    /// Individual die results
    pub individual_rolls: Vec<i32>,
    /// Sum of dice before modifier
    pub dice_total: i32,
    /// Modifier that was applied
    pub modifier_applied: i32,
    /// Final total (dice_total + modifier)
    pub total: i32,
}

impl DiceRollResult {
    /// Format as a breakdown string (e.g., "3d6[2, 5, 6] = 13" or "1d8[4] + 1 = 5")
    pub fn breakdown(&self) -> String {
        let rolls: Vec<String> = self
            .individual_rolls
            .iter()
            .map(|r| r.to_string())
            .collect();
        let head = format!(
            "{}d{}[{}]",
            self.formula.dice_count,
            self.formula.die.sides(),
            rolls.join(", ")
        );
        match self.modifier_applied {
            0 => format!("{} = {}", head, self.total),
            m if m > 0 => format!("{} + {} = {}", head, m, self.total),
            m => format!("{} - {} = {}", head, -m, self.total),
        }
    }
}
