//! Entry points.
//!
//! - `console` - JSON-lines tool calls over stdin/stdout

pub mod console;
