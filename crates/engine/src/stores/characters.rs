//! Per-conversation character storage.
//!
//! Each conversation id maps to one character behind its own mutex. The
//! sharded map only serializes the get-or-insert; work on a character holds
//! that character's lock alone.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use expertgm_domain::{CharacterState, RulesRegistry};

type SharedCharacter = Arc<Mutex<CharacterState>>;

pub struct CharacterDirectory {
    characters: DashMap<String, SharedCharacter>,
    rules: Arc<RulesRegistry>,
}

impl CharacterDirectory {
    pub fn new(rules: Arc<RulesRegistry>) -> Self {
        Self {
            characters: DashMap::new(),
            rules,
        }
    }

    /// Returns the conversation's character, creating a fresh one if absent.
    pub fn get_or_create(&self, conversation_id: &str) -> SharedCharacter {
        if let Some(existing) = self.characters.get(conversation_id) {
            return Arc::clone(existing.value());
        }
        let entry = self
            .characters
            .entry(conversation_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(conversation_id = %conversation_id, "Creating character");
                Arc::new(Mutex::new(CharacterState::new(&self.rules)))
            });
        Arc::clone(entry.value())
    }

    /// Runs `f` with exclusive access to the conversation's character.
    pub fn with_character<R>(
        &self,
        conversation_id: &str,
        f: impl FnOnce(&mut CharacterState) -> R,
    ) -> R {
        let character = self.get_or_create(conversation_id);
        let mut guard = character
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    /// A copy of the character, if the conversation has one.
    pub fn snapshot(&self, conversation_id: &str) -> Option<CharacterState> {
        let character = self.characters.get(conversation_id).map(|e| Arc::clone(e.value()))?;
        let guard = character
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Some(guard.clone())
    }

    pub fn remove(&self, conversation_id: &str) -> bool {
        self.characters.remove(conversation_id).is_some()
    }

    pub fn contains(&self, conversation_id: &str) -> bool {
        self.characters.contains_key(conversation_id)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
