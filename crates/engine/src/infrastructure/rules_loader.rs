//! Loads the game-system tables at startup.

use std::path::{Path, PathBuf};

use expertgm_domain::{GameSystemConfig, RulesRegistry};

/// The OSE tables shipped with the engine.
pub const BUNDLED_RULES_JSON: &str = include_str!("../../../../data/gamesystem_ose.json");

#[derive(Debug, thiserror::Error)]
pub enum RulesLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid rules JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_rules(json: &str, origin: &str) -> Result<RulesRegistry, RulesLoadError> {
    let config: GameSystemConfig =
        serde_json::from_str(json).map_err(|source| RulesLoadError::Json {
            origin: origin.to_string(),
            source,
        })?;
    let registry = RulesRegistry::from_config(config);

    for key in registry.skipped_keys() {
        tracing::warn!(origin = %origin, key = %key, "Skipped unrecognised rules entry");
    }
    tracing::info!(
        origin = %origin,
        game_system = %registry.game_system(),
        version = %registry.version(),
        "Loaded rules tables"
    );
    Ok(registry)
}

/// Reads the rules from `path`, or the bundled tables when `None`.
pub fn load_rules(path: Option<&Path>) -> Result<RulesRegistry, RulesLoadError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| RulesLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_rules(&json, &path.display().to_string())
        }
        None => parse_rules(BUNDLED_RULES_JSON, "bundled"),
    }
}
