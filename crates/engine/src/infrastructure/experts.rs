//! Expert registry.
//!
//! Experts are the knowledge-domain handlers the orchestration layer routes
//! intents to. The engine only loads and lists them.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const BUNDLED_EXPERTS_JSON: &str = include_str!("../../../../data/experts.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpertType {
    #[serde(alias = "AI_RAG")]
    AiRag,
    #[serde(alias = "LOCAL_DATA")]
    LocalData,
    #[serde(alias = "NARRATIVE_ONLY")]
    NarrativeOnly,
}

impl ExpertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiRag => "AiRag",
            Self::LocalData => "LocalData",
            Self::NarrativeOnly => "NarrativeOnly",
        }
    }
}

impl fmt::Display for ExpertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertDefinition {
    pub name: String,
    pub intent_name: String,
    #[serde(default)]
    pub description: String,
    pub expert_type: ExpertType,
    #[serde(default)]
    pub corpus_id: Option<String>,
    #[serde(default)]
    pub data_source_key: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExpertLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid experts JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Experts in definition order. Names are unique; a later duplicate replaces
/// the earlier entry in place.
#[derive(Debug, Clone, Default)]
pub struct ExpertRegistry {
    experts: Vec<ExpertDefinition>,
}

impl ExpertRegistry {
    pub fn new(definitions: impl IntoIterator<Item = ExpertDefinition>) -> Self {
        let mut experts: Vec<ExpertDefinition> = Vec::new();
        for definition in definitions {
            match experts.iter_mut().find(|e| e.name == definition.name) {
                Some(existing) => {
                    tracing::warn!(expert = %definition.name, "Duplicate expert name, keeping the later definition");
                    *existing = definition;
                }
                None => experts.push(definition),
            }
        }
        Self { experts }
    }

    pub fn parse(json: &str, origin: &str) -> Result<Self, ExpertLoadError> {
        let definitions: Vec<ExpertDefinition> =
            serde_json::from_str(json).map_err(|source| ExpertLoadError::Json {
                origin: origin.to_string(),
                source,
            })?;
        let registry = Self::new(definitions);
        tracing::info!(origin = %origin, count = registry.len(), "Loaded experts");
        Ok(registry)
    }

    /// Reads the experts from `path`, or the bundled list when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ExpertLoadError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| ExpertLoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::parse(&json, &path.display().to_string())
            }
            None => Self::parse(BUNDLED_EXPERTS_JSON, "bundled"),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ExpertDefinition> {
        self.experts.iter().find(|e| e.name == name)
    }

    /// First expert registered for the intent.
    pub fn by_intent(&self, intent_name: &str) -> Option<&ExpertDefinition> {
        self.experts.iter().find(|e| e.intent_name == intent_name)
    }

    pub fn all(&self) -> &[ExpertDefinition] {
        &self.experts
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }
}
