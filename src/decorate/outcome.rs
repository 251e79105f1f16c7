//! Outcome code table
//!
//! Maps the single-character progress codes emitted by a test runner to a
//! display color and glyph. Unrecognized codes resolve to [`DANGER`].

use colored::Color;

/// Color and glyph used to render one outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    /// Foreground color for the glyph and method name
    pub color: Color,
    /// Status glyph
    pub glyph: char,
}

/// Fallback decoration for anything the runner emits that we don't recognize
pub const DANGER: Decoration = Decoration {
    color: Color::Red,
    glyph: '?',
};

/// Outcome of a single test as reported by the runner's progress code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeCode {
    /// `.`
    Success,
    /// `E`
    Error,
    /// `F`
    Failure,
    /// `W`
    Warning,
    /// `I`
    Incomplete,
    /// `R`
    Risky,
    /// `S`
    Skipped,
    /// Anything else
    Unknown,
}

impl OutcomeCode {
    /// All recognized outcomes, in runner alphabet order.
    pub const KNOWN: [Self; 7] = [
        Self::Success,
        Self::Error,
        Self::Failure,
        Self::Warning,
        Self::Incomplete,
        Self::Risky,
        Self::Skipped,
    ];

    /// Resolve a sanitized progress code.
    ///
    /// Only an exact single-character match is recognized; empty strings and
    /// longer strings are `Unknown`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let mut chars = code.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Self::Unknown;
        };
        Self::KNOWN
            .into_iter()
            .find(|outcome| outcome.code() == Some(c))
            .unwrap_or(Self::Unknown)
    }

    /// The runner character for this outcome, `None` for `Unknown`.
    #[must_use]
    pub const fn code(self) -> Option<char> {
        match self {
            Self::Success => Some('.'),
            Self::Error => Some('E'),
            Self::Failure => Some('F'),
            Self::Warning => Some('W'),
            Self::Incomplete => Some('I'),
            Self::Risky => Some('R'),
            Self::Skipped => Some('S'),
            Self::Unknown => None,
        }
    }

    /// Display decoration for this outcome
    #[must_use]
    pub const fn decoration(self) -> Decoration {
        let (color, glyph) = match self {
            Self::Success => (Color::Green, '✓'),
            Self::Error => (Color::Red, '⚈'),
            Self::Failure => (Color::Red, 'x'),
            Self::Warning => (Color::Yellow, '!'),
            Self::Incomplete => (Color::Yellow, '∅'),
            Self::Risky => (Color::Yellow, '⚑'),
            Self::Skipped => (Color::Cyan, '⤼'),
            Self::Unknown => return DANGER,
        };
        Decoration { color, glyph }
    }
}
