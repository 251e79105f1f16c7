//! Per-test progress formatter
//!
//! Reacts to the three runner callbacks and renders, per test:
//!
//! ```text
//!
//! UserTest
//! [1/3] ✓ creates a user (0.050s)
//! [2/3] ✓ deletes a user (0.300s)
//! ```
//!
//! A group header is printed whenever the owning group changes between
//! consecutive progress events.

use anyhow::Result;
use tracing::{debug, warn};

use crate::decorate::{
    duration_color, format_elapsed, Decoration, DurationThreshold, OutcomeCode, DEFAULT_THRESHOLDS,
};
use crate::printer::writer::{OutputWriter, Style};
use crate::runner::{TestCase, TestHandle};
use crate::text::{decode_method_name, strip_ansi};

/// Counters and group tracking for one suite run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    tests_run: usize,
    total_tests: usize,
    current_group: Option<String>,
}

impl RunState {
    /// Fresh state for a suite of `total_tests`
    #[must_use]
    pub const fn new(total_tests: usize) -> Self {
        Self {
            tests_run: 0,
            total_tests,
            current_group: None,
        }
    }

    /// `[current/total] ` with `current` zero-padded to the width of `total`
    #[must_use]
    pub fn counter(&self) -> String {
        let width = self.total_tests.to_string().len();
        format!("[{:0width$}/{}] ", self.tests_run, self.total_tests)
    }

    /// Whether `group` differs from the group whose header was printed last
    #[must_use]
    pub fn is_new_group(&self, group: &str) -> bool {
        self.current_group.as_deref() != Some(group)
    }
}

/// Renders runner callbacks through an [`OutputWriter`]
pub struct TestProgressFormatter<W: OutputWriter> {
    writer: W,
    thresholds: Vec<DurationThreshold>,
    state: RunState,
    current_test: Option<TestCase>,
}

impl<W: OutputWriter> TestProgressFormatter<W> {
    /// Formatter for a suite of `total_tests` tests using the default
    /// duration thresholds.
    #[must_use]
    pub fn new(writer: W, total_tests: usize) -> Self {
        Self::with_thresholds(writer, total_tests, DEFAULT_THRESHOLDS.to_vec())
    }

    /// Formatter with custom duration thresholds, sorted ascending by limit.
    #[must_use]
    pub fn with_thresholds(
        writer: W,
        total_tests: usize,
        thresholds: Vec<DurationThreshold>,
    ) -> Self {
        Self {
            writer,
            thresholds,
            state: RunState::new(total_tests),
            current_test: None,
        }
    }

    /// Record the test that is about to run. Writes nothing.
    pub fn start_test(&mut self, test: &dyn TestHandle) {
        self.current_test = Some(TestCase::of(test));
    }

    /// Render one progress code: group header if the group changed, the
    /// `[n/total]` counter, the status glyph and the decoded method name.
    ///
    /// Unrecognized codes render with the danger decoration. Only write
    /// failures are returned as errors.
    pub fn write_progress(&mut self, raw_code: &str) -> Result<()> {
        let decoration = Self::decoration_for(raw_code);
        self.state.tests_run += 1;

        self.write_group_header()?;
        self.write_counter()?;
        self.writer.write_with_color(
            Style::Fg(decoration.color),
            &decoration.glyph.to_string(),
            false,
        )?;
        self.write_method_name(decoration)
    }

    /// Render the elapsed time of the finished test and end the line.
    pub fn end_test(&mut self, test: &dyn TestHandle, elapsed: f64) -> Result<()> {
        let color = duration_color(&self.thresholds, elapsed);
        debug!(
            group = test.group_name(),
            test = test.description(),
            elapsed,
            ?color,
            "Test finished"
        );

        self.writer.write_with_color(
            Style::Fg(color),
            &format!("({}s)", format_elapsed(elapsed)),
            true,
        )
    }

    /// Number of progress events rendered so far
    #[must_use]
    pub const fn tests_run(&self) -> usize {
        self.state.tests_run
    }

    /// Suite size used for the counter
    #[must_use]
    pub const fn total_tests(&self) -> usize {
        self.state.total_tests
    }

    /// Group whose header was printed last
    #[must_use]
    pub fn current_group(&self) -> Option<&str> {
        self.state.current_group.as_deref()
    }

    /// Borrow the writer
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Flush the writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }

    /// Consume the formatter, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn decoration_for(raw_code: &str) -> Decoration {
        let code = strip_ansi(raw_code);
        let outcome = OutcomeCode::from_code(&code);
        if outcome == OutcomeCode::Unknown {
            warn!(code = %code, "Unrecognized progress code");
        }
        outcome.decoration()
    }

    fn write_group_header(&mut self) -> Result<()> {
        let Some(group) = self.current_test.as_ref().map(|t| t.group.as_str()) else {
            warn!("Progress reported before any test started");
            return Ok(());
        };
        if !self.state.is_new_group(group) {
            return Ok(());
        }

        let group = group.to_string();
        debug!(group = %group, "Entering test group");
        self.writer.write("\n")?;
        self.writer.write_with_color(Style::Bold, &group, true)?;
        self.state.current_group = Some(group);
        Ok(())
    }

    fn write_counter(&mut self) -> Result<()> {
        let counter = self.state.counter();
        self.writer.write(&counter)
    }

    fn write_method_name(&mut self, decoration: Decoration) -> Result<()> {
        let method = self
            .current_test
            .as_ref()
            .map(|t| decode_method_name(&t.description))
            .unwrap_or_default();

        self.writer.write(" ")?;
        self.writer
            .write_with_color(Style::Fg(decoration.color), &method, false)?;
        self.writer.write(" ")
    }
}
