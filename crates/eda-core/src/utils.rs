//! Shared utilities for the analysis engines.
//!
//! Numeric parsing and label formatting live here so that every engine
//! resolves and prints values the same way.

// =============================================================================
// String Parsing Utilities
// =============================================================================

/// Try to parse a raw string as a finite number.
///
/// Surrounding whitespace is ignored. Strings that parse to an infinity or
/// NaN (`"inf"`, `"NaN"`, `"1e999"`) are rejected so they stay text.
///
/// # Example
///
/// ```rust
/// use eda_core::utils::parse_finite_number;
///
/// assert_eq!(parse_finite_number(" 42 "), Some(42.0));
/// assert_eq!(parse_finite_number("1e3"), Some(1000.0));
/// assert_eq!(parse_finite_number("NaN"), None);
/// assert_eq!(parse_finite_number("NY"), None);
/// ```
pub fn parse_finite_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a number the way it is written back into a table cell.
///
/// Integral values drop the fractional part (`1.0` → `"1"`), so a number
/// received as a native value compares equal to the same number typed as
/// text.
pub fn number_to_text(value: f64) -> String {
    if value == 0.0 {
        // Collapses -0.0 as well.
        return "0".to_string();
    }
    format!("{value}")
}

// =============================================================================
// Label Formatting Utilities
// =============================================================================

/// Format a number with a fixed number of decimals.
///
/// Negative zero is printed as zero so labels never read `-0.00`.
pub fn format_fixed(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}

/// Format a histogram range label, e.g. `"0.00 - 1.00"`.
pub fn format_range(start: f64, end: f64, precision: usize) -> String {
    format!(
        "{} - {}",
        format_fixed(start, precision),
        format_fixed(end, precision)
    )
}

// =============================================================================
// Arithmetic Utilities
// =============================================================================

/// Percentage of `part` in `whole`, defined as 0 when `whole` is 0.
#[inline]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

/// Arithmetic mean of finite values, 0 for an empty slice.
///
/// Stays finite for values near `f64::MAX`: when the plain sum overflows,
/// each value is divided by the count before summing.
pub fn finite_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

/// Largest absolute value, 0 for an empty slice.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_finite_number() {
        assert_eq!(parse_finite_number("42"), Some(42.0));
        assert_eq!(parse_finite_number("-100.5"), Some(-100.5));
        assert_eq!(parse_finite_number("  3.25\t"), Some(3.25));
        assert_eq!(parse_finite_number(".5"), Some(0.5));
        assert_eq!(parse_finite_number(""), None);
        assert_eq!(parse_finite_number("   "), None);
        assert_eq!(parse_finite_number("hello"), None);
        assert_eq!(parse_finite_number("$1,234"), None);
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert_eq!(parse_finite_number("inf"), None);
        assert_eq!(parse_finite_number("-Infinity"), None);
        assert_eq!(parse_finite_number("NaN"), None);
        assert_eq!(parse_finite_number("1e400"), None);
    }

    #[test]
    fn test_number_to_text() {
        assert_eq!(number_to_text(1.0), "1");
        assert_eq!(number_to_text(-0.0), "0");
        assert_eq!(number_to_text(2.5), "2.5");
        assert_eq!(number_to_text(-7.0), "-7");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(1.0, 2), "1.00");
        assert_eq!(format_fixed(2.345, 1), "2.3");
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
        assert_eq!(format_fixed(-1.5, 2), "-1.50");
        assert_eq!(format_fixed(7.0, 0), "7");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(0.0, 1.0, 2), "0.00 - 1.00");
        assert_eq!(format_range(-2.5, 2.5, 1), "-2.5 - 2.5");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
    }

    #[test]
    fn test_finite_mean() {
        assert_eq!(finite_mean(&[]), 0.0);
        assert_eq!(finite_mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);

        let mean = finite_mean(&[1e308, 1.5e308]);
        assert!(mean.is_finite());
        assert!((mean / 1.25e308 - 1.0).abs() < 1e-12);

        assert_eq!(finite_mean(&[f64::MAX, -f64::MAX]), 0.0);
    }

    #[test]
    fn test_max_abs() {
        assert_eq!(max_abs(&[]), 0.0);
        assert_eq!(max_abs(&[-3.0, 2.0]), 3.0);
    }
}
