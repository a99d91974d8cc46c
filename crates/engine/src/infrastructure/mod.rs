//! Infrastructure implementations.
//!
//! Random sources, configuration, and the loaders for bundled data.

pub mod app_settings;
pub mod experts;
pub mod random;
pub mod rules_loader;
