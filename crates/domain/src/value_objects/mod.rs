//! Value objects: dice, ability scores and the closed game vocabularies.

mod ability;
mod dice;
mod language;
mod vocabulary;

pub use ability::{AbilityScore, AbilityScores, AbilityType};
pub use dice::{
    roll_dice, roll_die, roll_mixed, DiceFormula, DiceParseError, DiceRollResult, DieType,
};
pub use language::Language;
pub use vocabulary::{Alignment, CharacterClass, CharacterRace, CoinType, MagicType, SpellType};

/// Lowercases and drops spaces, hyphens and underscores so "Magic-User",
/// "magic user" and "MAGIC_USER" compare equal.
pub(crate) fn normalize_key(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
