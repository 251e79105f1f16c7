//! ANSI escape stripping
//!
//! Progress codes can arrive already wrapped in color escapes by the runner.
//! They are stripped before the code is looked up.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// ANSI CSI sequence: `ESC [`, any parameter/intermediate bytes, then a
/// single final letter (e.g. `\x1b[31m`, `\x1b[1;32m`, `\x1b[0K`).
pub const ANSI_CSI_PATTERN: &str = r"\x1b\[[^A-Za-z]*[A-Za-z]";

static ANSI_CSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANSI_CSI_PATTERN).unwrap());

/// Remove every ANSI CSI sequence from `raw`.
///
/// Borrows when there is nothing to strip.
#[must_use]
pub fn strip_ansi(raw: &str) -> Cow<'_, str> {
    ANSI_CSI_RE.replace_all(raw, "")
}
