//! Test doubles shared by the domain unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::random::RandomSource;
use crate::rules::{GameSystemConfig, RulesRegistry};

/// Always answers the same value, clamped into the requested range.
pub struct FixedRandom(pub i32);

impl RandomSource for FixedRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        self.0.clamp(min, max)
    }
}

/// Replays a script of values (each clamped), then falls back to `min`.
pub struct SequenceRandom(Mutex<VecDeque<i32>>);

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self(Mutex::new(values.into_iter().collect()))
    }
}

impl RandomSource for SequenceRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        let next = self.0.lock().unwrap().pop_front();
        next.map_or(min, |v| v.clamp(min, max))
    }
}

pub const OSE_RULES_JSON: &str = include_str!("../../../data/gamesystem_ose.json");

/// The bundled rules tables.
pub fn ose_rules() -> RulesRegistry {
    let config: GameSystemConfig = serde_json::from_str(OSE_RULES_JSON).unwrap();
    RulesRegistry::from_config(config)
}
