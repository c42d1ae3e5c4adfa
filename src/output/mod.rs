//! Rendering of match results

pub mod formatter;

pub use formatter::{formatter_for, ConsoleFormatter, JsonFormatter, OutputFormatter};
