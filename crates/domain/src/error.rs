//! Unified error types for the domain layer
//!
//! Rules-table misses never surface here: registry lookups fall back to
//! defaults. These errors are caller mistakes or calls made out of order.

use thiserror::Error;

use crate::value_objects::DiceParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller supplied a value the operation cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs a class-initialized character
    #[error("Character not initialized: {0}")]
    NotInitialized(String),

    /// Parse error (for enums and dice formulas read from text)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates an invalid-argument error.
    ///
    /// Use this when the input itself is wrong:
    /// - Negative experience or temporary hit point grants
    /// - A language that is already known or secret
    /// - An unsupported die type
    ///
    /// # Example
    /// ```ignore
    /// if amount < 0 {
    ///     return Err(DomainError::invalid_argument("Experience cannot be negative"));
    /// }
    /// ```
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an error for operations attempted before a class is assigned.
    pub fn not_initialized(msg: impl Into<String>) -> Self {
        Self::NotInitialized(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for CoinType {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "Gold" => Ok(Self::Gold),
    ///             _ => Err(DomainError::parse(format!("Unknown coin type: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized(_))
    }
}

impl From<DiceParseError> for DomainError {
    fn from(err: DiceParseError) -> Self {
        match err {
            DiceParseError::UnsupportedDie(_) | DiceParseError::ModifierOverflow => {
                Self::InvalidArgument(err.to_string())
            }
            _ => Self::Parse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = DomainError::invalid_argument("experience cannot be negative");
        assert!(err.is_invalid_argument());
        assert!(!err.is_not_initialized());
        assert_eq!(
            err.to_string(),
            "Invalid argument: experience cannot be negative"
        );
    }

    #[test]
    fn test_not_initialized_error() {
        let err = DomainError::not_initialized("no class assigned");
        assert!(err.is_not_initialized());
        assert_eq!(
            err.to_string(),
            "Character not initialized: no class assigned"
        );
    }

    #[test]
    fn test_from_dice_parse_error() {
        let domain_err: DomainError = DiceParseError::Empty.into();
        assert!(matches!(domain_err, DomainError::Parse(_)));
        assert!(domain_err.to_string().contains("Empty dice formula"));
    }

    #[test]
    fn test_unsupported_die_is_invalid_argument() {
        let domain_err: DomainError = DiceParseError::UnsupportedDie(7).into();
        assert!(domain_err.is_invalid_argument());
        assert!(domain_err.to_string().contains("d7"));
    }

    #[test]
    fn test_modifier_overflow_is_invalid_argument() {
        let domain_err: DomainError = DiceParseError::ModifierOverflow.into();
        assert!(domain_err.is_invalid_argument());
    }
}
