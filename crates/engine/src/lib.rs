//! ExpertGM Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Tool calls orchestrated against the character aggregate
//! - `stores/` - In-memory per-conversation state
//! - `infrastructure/` - Random sources, configuration, data loading
//! - `api/` - Console entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
