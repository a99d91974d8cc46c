//! Use cases - User story orchestration.
//!
//! Use cases resolve a conversation's character and drive the domain
//! aggregate on the caller's behalf.

pub mod character_tools;

pub use character_tools::{CharacterCall, CharacterToolService, StandaloneCall, ToolCall, ToolError};
