//! Runner event stream parser
//!
//! The CLI reads one JSON object per line, tagged by `event`:
//!
//! ```text
//! {"event":"suite","total":3}
//! {"event":"start","group":"UserTest","description":"test_creates_a_user"}
//! {"event":"progress","code":"."}
//! {"event":"end","elapsed":0.05}
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A runner lifecycle event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TestEvent {
    /// Suite is about to run `total` tests
    Suite {
        /// Number of tests in the suite
        total: usize,
    },
    /// A test started
    Start {
        /// Owning group short name
        group: String,
        /// Test description
        description: String,
    },
    /// The runner emitted a progress code for the current test
    Progress {
        /// Raw outcome code, possibly wrapped in ANSI escapes
        code: String,
    },
    /// The current test ended
    End {
        /// Elapsed seconds
        elapsed: f64,
    },
}

/// Parse a single line of the event stream.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_event(line: &str) -> Result<Option<TestEvent>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let event = serde_json::from_str(line).context("Failed to parse runner event")?;
    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suite_event() {
        let event = parse_event(r#"{"event":"suite","total":42}"#).unwrap();
        assert_eq!(event, Some(TestEvent::Suite { total: 42 }));
    }

    #[test]
    fn test_parse_start_event() {
        let event =
            parse_event(r#"{"event":"start","group":"UserTest","description":"test_a"}"#)
                .unwrap();
        assert_eq!(
            event,
            Some(TestEvent::Start {
                group: "UserTest".to_string(),
                description: "test_a".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_progress_event_with_escapes() {
        let event = parse_event(r#"{"event":"progress","code":"\u001b[31mF\u001b[0m"}"#).unwrap();
        assert_eq!(
            event,
            Some(TestEvent::Progress {
                code: "\x1b[31mF\x1b[0m".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_end_event() {
        let event = parse_event(r#"  {"event":"end","elapsed":0.25}  "#).unwrap();
        assert_eq!(event, Some(TestEvent::End { elapsed: 0.25 }));
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert_eq!(parse_event("").unwrap(), None);
        assert_eq!(parse_event("   \t").unwrap(), None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = parse_event("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse runner event"));
    }

    #[test]
    fn test_unknown_event_tag_is_an_error() {
        assert!(parse_event(r#"{"event":"teardown"}"#).is_err());
    }

    #[test]
    fn test_missing_field_is_an_error() {
        assert!(parse_event(r#"{"event":"end"}"#).is_err());
    }
}
