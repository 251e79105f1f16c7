//! Output writers
//!
//! [`ConsoleWriter`] renders styled text as ANSI SGR sequences onto any
//! `io::Write`. [`RecordingWriter`] keeps the styled segments in memory.

use std::borrow::Cow;
use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Color;

/// SGR parameter for bold text
const SGR_BOLD: &str = "1";

/// SGR reset
const SGR_RESET: &str = "\x1b[0m";

/// Styling applied to a colored write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Bold, default color
    Bold,
    /// Foreground color
    Fg(Color),
}

/// Sink for formatter output
pub trait OutputWriter {
    /// Write unstyled text
    fn write(&mut self, text: &str) -> Result<()>;

    /// Write styled text, followed by a line break when `newline` is set
    fn write_with_color(&mut self, style: Style, text: &str, newline: bool) -> Result<()>;

    /// Flush buffered output
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes to a terminal-like stream
pub struct ConsoleWriter<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleWriter<io::Stdout> {
    /// Console writer on standard output
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleWriter<W> {
    /// Wrap a stream. With `color` on, every styled write is wrapped in SGR
    /// escapes whatever the stream is; with it off, styles are dropped.
    #[must_use]
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Recover the wrapped stream
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if !self.color || text.is_empty() {
            return text.to_string();
        }
        let params = match style {
            Style::Bold => Cow::Borrowed(SGR_BOLD),
            Style::Fg(color) => color.to_fg_str(),
        };
        format!("\x1b[{params}m{text}{SGR_RESET}")
    }
}

impl<W: Write> OutputWriter for ConsoleWriter<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .context("Failed to write to console")
    }

    fn write_with_color(&mut self, style: Style, text: &str, newline: bool) -> Result<()> {
        let mut painted = self.paint(style, text);
        if newline {
            painted.push('\n');
        }
        self.write(&painted)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush console")
    }
}

/// One write captured by [`RecordingWriter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Style of the write, `None` for plain writes
    pub style: Option<Style>,
    /// Text written, including any trailing line break
    pub text: String,
}

/// Keeps every write in memory, in order
#[derive(Debug, Default, Clone)]
pub struct RecordingWriter {
    segments: Vec<Segment>,
}

impl RecordingWriter {
    /// Empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured writes
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Everything written, with styles dropped
    #[must_use]
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Text of every segment written with `style`
    #[must_use]
    pub fn styled(&self, style: Style) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|s| s.style == Some(style))
            .map(|s| s.text.as_str())
            .collect()
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&mut self, text: &str) -> Result<()> {
        self.segments.push(Segment {
            style: None,
            text: text.to_string(),
        });
        Ok(())
    }

    fn write_with_color(&mut self, style: Style, text: &str, newline: bool) -> Result<()> {
        let mut text = text.to_string();
        if newline {
            text.push('\n');
        }
        self.segments.push(Segment {
            style: Some(style),
            text,
        });
        Ok(())
    }
}
