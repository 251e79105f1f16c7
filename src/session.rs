//! Event replay session
//!
//! Feeds a parsed runner event stream into a [`TestProgressFormatter`],
//! rejecting streams whose events arrive out of order.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::decorate::{DurationThreshold, DEFAULT_THRESHOLDS};
use crate::event::{parse_event, TestEvent};
use crate::printer::{OutputWriter, TestProgressFormatter};
use crate::runner::TestCase;

/// Drives a formatter from runner events
pub struct ReplaySession<W: OutputWriter> {
    pending_writer: Option<W>,
    formatter: Option<TestProgressFormatter<W>>,
    thresholds: Vec<DurationThreshold>,
    current: Option<TestCase>,
    lines_read: usize,
}

impl<W: OutputWriter> ReplaySession<W> {
    /// Session with the default duration thresholds
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_thresholds(writer, DEFAULT_THRESHOLDS.to_vec())
    }

    /// Session with custom duration thresholds
    #[must_use]
    pub fn with_thresholds(writer: W, thresholds: Vec<DurationThreshold>) -> Self {
        Self {
            pending_writer: Some(writer),
            formatter: None,
            thresholds,
            current: None,
            lines_read: 0,
        }
    }

    /// Read and apply every line of `input`, then flush.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read runner event stream")?;
            self.feed_line(&line)?;
        }
        self.flush()
    }

    /// Parse and apply one line. Errors carry the 1-based line number.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.lines_read += 1;
        let line_num = self.lines_read;

        let event = parse_event(line).with_context(|| format!("line {line_num}"))?;
        match event {
            Some(event) => self
                .handle(event)
                .with_context(|| format!("line {line_num}")),
            None => Ok(()),
        }
    }

    /// Apply one event
    pub fn handle(&mut self, event: TestEvent) -> Result<()> {
        match event {
            TestEvent::Suite { total } => self.start_suite(total),
            TestEvent::Start { group, description } => {
                let test = TestCase::new(&group, &description);
                self.formatter_mut("start")?.start_test(&test);
                self.current = Some(test);
                Ok(())
            }
            TestEvent::Progress { code } => {
                if self.current.is_none() {
                    bail!("'progress' event before any 'start' event");
                }
                self.formatter_mut("progress")?.write_progress(&code)
            }
            TestEvent::End { elapsed } => {
                if !elapsed.is_finite() || elapsed < 0.0 {
                    bail!("Invalid elapsed time {elapsed}: must be a finite, non-negative number");
                }
                let Some(test) = self.current.take() else {
                    bail!("'end' event without a matching 'start' event");
                };
                self.formatter_mut("end")?.end_test(&test, elapsed)
            }
        }
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        match (&mut self.formatter, &mut self.pending_writer) {
            (Some(formatter), _) => formatter.flush(),
            (None, Some(writer)) => writer.flush(),
            (None, None) => Ok(()),
        }
    }

    /// The formatter, once a `suite` event has been seen
    #[must_use]
    pub const fn formatter(&self) -> Option<&TestProgressFormatter<W>> {
        self.formatter.as_ref()
    }

    /// Consume the session, returning the writer
    pub fn into_writer(self) -> Option<W> {
        match self.formatter {
            Some(formatter) => Some(formatter.into_writer()),
            None => self.pending_writer,
        }
    }

    fn start_suite(&mut self, total: usize) -> Result<()> {
        if total == 0 {
            bail!("'suite' event must announce at least one test");
        }
        let Some(writer) = self.pending_writer.take() else {
            bail!("Duplicate 'suite' event");
        };

        debug!(total, "Suite started");
        self.formatter = Some(TestProgressFormatter::with_thresholds(
            writer,
            total,
            self.thresholds.clone(),
        ));
        Ok(())
    }

    fn formatter_mut(&mut self, event: &str) -> Result<&mut TestProgressFormatter<W>> {
        self.formatter
            .as_mut()
            .with_context(|| format!("'{event}' event before the 'suite' event"))
    }
}
