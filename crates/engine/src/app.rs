//! Application state and composition.

use std::sync::Arc;

use expertgm_domain::{RandomSource, RulesRegistry};

use crate::infrastructure::experts::ExpertRegistry;
use crate::stores::CharacterDirectory;
use crate::use_cases::CharacterToolService;

/// Main application state.
///
/// Rules and experts are loaded once and shared read-only; characters live
/// in the directory for the life of the process.
pub struct App {
    pub rules: Arc<RulesRegistry>,
    pub experts: Arc<ExpertRegistry>,
    pub characters: Arc<CharacterDirectory>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub character_tools: CharacterToolService,
}

impl App {
    pub fn new(
        rules: RulesRegistry,
        experts: ExpertRegistry,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let rules = Arc::new(rules);
        let experts = Arc::new(experts);
        let characters = Arc::new(CharacterDirectory::new(Arc::clone(&rules)));

        let use_cases = UseCases {
            character_tools: CharacterToolService::new(
                Arc::clone(&characters),
                Arc::clone(&rules),
                Arc::clone(&experts),
                random,
            ),
        };

        Self {
            rules,
            experts,
            characters,
            use_cases,
        }
    }
}
