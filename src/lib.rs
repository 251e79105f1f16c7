//! Pretty Print - colorized progress output for unit-test runners
//!
//! Renders runner lifecycle callbacks (test started, progress code emitted,
//! test ended) as grouped, per-test console lines with a status glyph, a
//! `[n/total]` counter, a readable method name and a color-coded duration.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod decorate;
pub mod event;
pub mod printer;
pub mod runner;
pub mod session;
pub mod text;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use config::PrinterConfig;
pub use decorate::{Decoration, DurationThreshold, OutcomeCode};
pub use event::{parse_event, TestEvent};
pub use printer::{ConsoleWriter, OutputWriter, RecordingWriter, Style, TestProgressFormatter};
pub use runner::{TestCase, TestHandle};
pub use session::ReplaySession;
