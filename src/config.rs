//! Printer configuration parser
//!
//! Parses an optional TOML file controlling color output and the duration
//! buckets:
//!
//! ```toml
//! color = true
//!
//! [[threshold]]
//! limit = 0.1
//! color = "white"
//! ```

use std::borrow::Cow;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Color;
use serde::{Deserialize, Serialize};

use crate::decorate::{DurationThreshold, DEFAULT_THRESHOLDS};

/// One duration bucket as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThresholdEntry {
    /// Inclusive upper bound in seconds
    pub limit: f64,
    /// Color name, e.g. `"yellow"` or `"bright-magenta"`
    pub color: String,
}

/// Top-level printer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrinterConfig {
    /// Emit ANSI colors (default: true)
    #[serde(default = "default_color")]
    pub color: bool,
    /// Duration buckets, ascending by limit
    #[serde(rename = "threshold", default = "default_thresholds")]
    pub thresholds: Vec<ThresholdEntry>,
}

const fn default_color() -> bool {
    true
}

fn default_thresholds() -> Vec<ThresholdEntry> {
    DEFAULT_THRESHOLDS
        .iter()
        .map(|t| ThresholdEntry {
            limit: t.limit,
            color: color_name(t.color).into_owned(),
        })
        .collect()
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            thresholds: default_thresholds(),
        }
    }
}

impl PrinterConfig {
    /// Parse a config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse printer config")?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configured buckets into typed thresholds
    pub fn duration_thresholds(&self) -> Result<Vec<DurationThreshold>> {
        self.thresholds
            .iter()
            .map(|entry| {
                parse_color(&entry.color).map(|color| DurationThreshold::new(entry.limit, color))
            })
            .collect()
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        for entry in &self.thresholds {
            if !entry.limit.is_finite() || entry.limit < 0.0 {
                bail!(
                    "Invalid threshold limit {}: must be a finite, non-negative number of seconds",
                    entry.limit
                );
            }
            parse_color(&entry.color)?;
        }

        // First-match selection only works on an ascending list
        for pair in self.thresholds.windows(2) {
            if pair[1].limit <= pair[0].limit {
                bail!(
                    "Thresholds must be strictly ascending: {} follows {}",
                    pair[1].limit,
                    pair[0].limit
                );
            }
        }

        Ok(())
    }
}

/// Parse a color name. Accepts `-`, `_` or a space between `bright` and the
/// base color, case-insensitively, or a `#rrggbb` true color.
pub fn parse_color(name: &str) -> Result<Color> {
    if let Some(hex) = name.trim().strip_prefix('#') {
        return parse_hex_color(hex).with_context(|| format!("Unknown color '{name}'"));
    }
    let normalized = name.trim().to_lowercase().replace(['_', ' '], "-");
    let color = match normalized.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "bright-black" => Color::BrightBlack,
        "bright-red" => Color::BrightRed,
        "bright-green" => Color::BrightGreen,
        "bright-yellow" => Color::BrightYellow,
        "bright-blue" => Color::BrightBlue,
        "bright-magenta" => Color::BrightMagenta,
        "bright-cyan" => Color::BrightCyan,
        "bright-white" => Color::BrightWhite,
        _ => bail!("Unknown color '{name}'"),
    };
    Ok(color)
}

/// Config name of a color. True colors are written as `#rrggbb`.
#[must_use]
pub fn color_name(color: Color) -> Cow<'static, str> {
    let name = match color {
        Color::Black => "black",
        Color::Red => "red",
        Color::Green => "green",
        Color::Yellow => "yellow",
        Color::Blue => "blue",
        Color::Magenta => "magenta",
        Color::Cyan => "cyan",
        Color::White => "white",
        Color::BrightBlack => "bright-black",
        Color::BrightRed => "bright-red",
        Color::BrightGreen => "bright-green",
        Color::BrightYellow => "bright-yellow",
        Color::BrightBlue => "bright-blue",
        Color::BrightMagenta => "bright-magenta",
        Color::BrightCyan => "bright-cyan",
        Color::BrightWhite => "bright-white",
        Color::TrueColor { r, g, b } => return Cow::Owned(format!("#{r:02x}{g:02x}{b:02x}")),
        #[allow(unreachable_patterns)]
        other => return Cow::Owned(format!("{other:?}").to_lowercase()),
    };
    Cow::Borrowed(name)
}

/// Parse `#rrggbb` into a true color
fn parse_hex_color(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::TrueColor {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}
