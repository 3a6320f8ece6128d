//! Amount and date display formatting

use crate::{FrTextError, Result};
use chrono::NaiveDate;

/// Format an amount for display with thousands grouping and two decimals
///
/// # Examples
/// ```
/// use fr_text::format_amount;
/// assert_eq!(format_amount(10000.0), "10,000.00");
/// assert_eq!(format_amount(12500.5), "12,500.50");
/// ```
pub fn format_amount(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = n.abs();
    let rounded = (abs * 100.0).round() / 100.0;

    let int_part = rounded.floor() as i64;
    let frac_part = ((rounded - rounded.floor()) * 100.0).round() as i64;

    let sign = if n < -0.000_000_001 { "-" } else { "" };

    format!("{sign}{}.{frac_part:02}", group_thousands(int_part))
}

/// Parse an amount string that may contain grouping commas
///
/// Returns `None` when the stripped input is not a finite number.
///
/// # Examples
/// ```
/// use fr_text::parse_amount;
/// assert_eq!(parse_amount("10,000.00"), Some(10000.0));
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(s: &str) -> Option<f64> {
    s.replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Format an amount string, passing unparseable input through unchanged
///
/// # Examples
/// ```
/// use fr_text::format_amount_lenient;
/// assert_eq!(format_amount_lenient("12500.5"), "12,500.50");
/// assert_eq!(format_amount_lenient("n/a"), "n/a");
/// ```
pub fn format_amount_lenient(s: &str) -> String {
    match parse_amount(s) {
        Some(n) => format_amount(n),
        None => s.to_string(),
    }
}

/// Format a date as dd/mm/yyyy, independent of the host locale
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use fr_text::format_french_date;
/// let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
/// assert_eq!(format_french_date(date), "03/01/2025");
/// ```
pub fn format_french_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parse a date from ISO (yyyy-mm-dd) or French (dd/mm/yyyy) notation
pub fn parse_french_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .map_err(|_| FrTextError::InvalidDate(s.to_string()))
}

/// Group an integer with comma thousands separators
fn group_thousands(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1234.56), "1,234.56");
        assert_eq!(format_amount(1_000_000.0), "1,000,000.00");
        assert_eq!(format_amount(-100.5), "-100.50");
        assert_eq!(format_amount(0.005), "0.01");
    }

    #[test]
    fn test_format_amount_special() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10,000.00"), Some(10000.0));
        assert_eq!(parse_amount("  42 "), Some(42.0));
        assert_eq!(parse_amount("1,234,567.89"), Some(1234567.89));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_round_trip_to_the_penny() {
        for cents in [0i64, 1, 99, 1234, 999_999, 1_250_050] {
            let value = cents as f64 / 100.0;
            let display = format_amount(value);
            let reparsed = parse_amount(&display).unwrap();
            assert_eq!((reparsed * 100.0).round() as i64, cents);
        }
    }

    #[test]
    fn test_format_amount_lenient_passthrough() {
        assert_eq!(format_amount_lenient("10,000"), "10,000.00");
        assert_eq!(format_amount_lenient("hello"), "hello");
        assert_eq!(format_amount_lenient(""), "");
    }

    #[test]
    fn test_format_french_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_french_date(date), "31/12/2025");
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(format_french_date(date), "02/01/2025");
    }

    #[test]
    fn test_parse_french_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 22).unwrap();
        assert_eq!(parse_french_date("2025-01-22").unwrap(), expected);
        assert_eq!(parse_french_date("22/01/2025").unwrap(), expected);
        assert!(parse_french_date("22-01-2025").is_err());
        assert!(parse_french_date("not a date").is_err());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }
}
