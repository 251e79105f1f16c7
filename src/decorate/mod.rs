//! Outcome and duration decorations
//!
//! Static tables mapping runner outcome codes and elapsed times to the
//! colors and glyphs used on the console.

pub mod duration;
pub mod outcome;

pub use duration::{duration_color, format_elapsed, DurationThreshold, DEFAULT_THRESHOLDS};
pub use outcome::{Decoration, OutcomeCode, DANGER};
