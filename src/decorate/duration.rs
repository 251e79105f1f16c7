//! Duration thresholds
//!
//! Elapsed times are bucketed by an ascending list of upper bounds. The first
//! bound that is `>=` the elapsed time picks the color, so a time exactly on a
//! bound lands in the tighter bucket.

use colored::Color;

use super::outcome::DANGER;

/// Upper bound (in seconds) and the color for times at or below it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationThreshold {
    /// Inclusive upper bound in seconds
    pub limit: f64,
    /// Color for elapsed times within this bound
    pub color: Color,
}

impl DurationThreshold {
    /// Create a threshold
    #[must_use]
    pub const fn new(limit: f64, color: Color) -> Self {
        Self { limit, color }
    }
}

/// Default buckets: fast, noticeable, slow. Anything slower is danger red.
pub const DEFAULT_THRESHOLDS: [DurationThreshold; 3] = [
    DurationThreshold::new(0.1, Color::White),
    DurationThreshold::new(0.25, Color::Yellow),
    DurationThreshold::new(0.5, Color::Magenta),
];

/// Select the color for an elapsed time.
///
/// `thresholds` must be sorted ascending by `limit`.
#[must_use]
pub fn duration_color(thresholds: &[DurationThreshold], elapsed: f64) -> Color {
    thresholds
        .iter()
        .find(|threshold| elapsed <= threshold.limit)
        .map_or(DANGER.color, |threshold| threshold.color)
}

/// Format seconds with exactly three decimals and `,` thousands grouping.
///
/// `0.05` becomes `"0.050"`, `1234.5` becomes `"1,234.500"`.
#[must_use]
pub fn format_elapsed(elapsed: f64) -> String {
    let fixed = format!("{:.3}", elapsed.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if elapsed < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_pick_documented_colors() {
        let colors: Vec<Color> = [0.05, 0.2, 0.4, 0.9]
            .into_iter()
            .map(|elapsed| duration_color(&DEFAULT_THRESHOLDS, elapsed))
            .collect();

        assert_eq!(
            colors,
            vec![Color::White, Color::Yellow, Color::Magenta, Color::Red]
        );
    }

    #[test]
    fn test_boundary_values_land_in_tighter_bucket() {
        assert_eq!(duration_color(&DEFAULT_THRESHOLDS, 0.1), Color::White);
        assert_eq!(duration_color(&DEFAULT_THRESHOLDS, 0.25), Color::Yellow);
        assert_eq!(duration_color(&DEFAULT_THRESHOLDS, 0.5), Color::Magenta);
    }

    #[test]
    fn test_zero_elapsed_is_fastest_bucket() {
        assert_eq!(duration_color(&DEFAULT_THRESHOLDS, 0.0), Color::White);
    }

    #[test]
    fn test_empty_thresholds_always_danger() {
        assert_eq!(duration_color(&[], 0.0), Color::Red);
        assert_eq!(duration_color(&[], 10.0), Color::Red);
    }

    #[test]
    fn test_nan_never_matches() {
        assert_eq!(duration_color(&DEFAULT_THRESHOLDS, f64::NAN), Color::Red);
    }

    #[test]
    fn test_format_elapsed_three_decimals() {
        assert_eq!(format_elapsed(0.05), "0.050");
        assert_eq!(format_elapsed(0.3), "0.300");
        assert_eq!(format_elapsed(0.0), "0.000");
        assert_eq!(format_elapsed(12.0), "12.000");
    }

    #[test]
    fn test_format_elapsed_rounds_to_millis() {
        assert_eq!(format_elapsed(0.123_56), "0.124");
        assert_eq!(format_elapsed(2.000_1), "2.000");
    }

    #[test]
    fn test_format_elapsed_groups_thousands() {
        assert_eq!(format_elapsed(999.0), "999.000");
        assert_eq!(format_elapsed(1234.5), "1,234.500");
        assert_eq!(format_elapsed(1_234_567.25), "1,234,567.250");
    }

    #[test]
    fn test_format_elapsed_negative_keeps_sign() {
        assert_eq!(format_elapsed(-1.5), "-1.500");
        assert_eq!(format_elapsed(-0.0001), "0.000");
    }
}
