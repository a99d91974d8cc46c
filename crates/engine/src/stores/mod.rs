//! In-memory state storage modules.
//!
//! - `CharacterDirectory` - one character per conversation id

pub mod characters;

pub use characters::CharacterDirectory;
