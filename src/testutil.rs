//! Formatter fixtures for unit tests
//!
//! Builds test handles and formatters that render into a
//! [`RecordingWriter`], so assertions can inspect styled segments.

use crate::printer::{RecordingWriter, TestProgressFormatter};
use crate::runner::TestCase;

/// Shorthand for a test handle
#[must_use]
pub fn case(group: &str, description: &str) -> TestCase {
    TestCase::new(group, description)
}

/// Formatter over an in-memory recorder with the default thresholds
#[must_use]
pub fn recording_formatter(total_tests: usize) -> TestProgressFormatter<RecordingWriter> {
    TestProgressFormatter::new(RecordingWriter::new(), total_tests)
}
