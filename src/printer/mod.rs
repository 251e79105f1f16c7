//! Console rendering
//!
//! The formatter reacts to runner callbacks and writes through an
//! [`OutputWriter`], which owns the actual color escapes.

pub mod formatter;
pub mod writer;

pub use formatter::{RunState, TestProgressFormatter};
pub use writer::{ConsoleWriter, OutputWriter, RecordingWriter, Segment, Style};
