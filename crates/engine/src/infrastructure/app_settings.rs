//! Process configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `EXPERTGM_RULES_PATH` | game-system rules JSON | bundled OSE tables |
//! | `EXPERTGM_EXPERTS_PATH` | expert list JSON | bundled experts |
//! | `EXPERTGM_RNG_SEED` | seed for a reproducible random source | thread RNG |

use std::path::PathBuf;

pub const RULES_PATH_VAR: &str = "EXPERTGM_RULES_PATH";
pub const EXPERTS_PATH_VAR: &str = "EXPERTGM_EXPERTS_PATH";
pub const RNG_SEED_VAR: &str = "EXPERTGM_RNG_SEED";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{var} must be an unsigned integer, got '{value}'")]
    InvalidSeed { var: &'static str, value: String },
}

/// Engine settings. `None` paths mean the bundled data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub rules_path: Option<PathBuf>,
    pub experts_path: Option<PathBuf>,
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds settings from any variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let read = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let rng_seed = match read(RNG_SEED_VAR) {
            Some(value) => Some(value.parse::<u64>().map_err(|_| SettingsError::InvalidSeed {
                var: RNG_SEED_VAR,
                value,
            })?),
            None => None,
        };

        Ok(Self {
            rules_path: read(RULES_PATH_VAR).map(PathBuf::from),
            experts_path: read(EXPERTS_PATH_VAR).map(PathBuf::from),
            rng_seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_reads_paths_and_seed() {
        let config = EngineConfig::from_lookup(lookup(&[
            (RULES_PATH_VAR, "/tmp/rules.json"),
            (EXPERTS_PATH_VAR, " /tmp/experts.json "),
            (RNG_SEED_VAR, "1234"),
        ]))
        .unwrap();
        assert_eq!(config.rules_path, Some(PathBuf::from("/tmp/rules.json")));
        assert_eq!(config.experts_path, Some(PathBuf::from("/tmp/experts.json")));
        assert_eq!(config.rng_seed, Some(1234));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = EngineConfig::from_lookup(lookup(&[(RULES_PATH_VAR, "  ")])).unwrap();
        assert_eq!(config.rules_path, None);
    }

    #[test]
    fn test_bad_seed_is_an_error() {
        let err = EngineConfig::from_lookup(lookup(&[(RNG_SEED_VAR, "-3")])).unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidSeed {
                var: RNG_SEED_VAR,
                value: "-3".to_string()
            }
        );
    }
}
