//! # Formatting Utilities
//!
//! Number formatting for the views. For address formatting, use
//! [`shared::utils::truncate_address`].

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use creatorhub_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(12482.0, 0), "12,482");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{sign}{integer_with_commas}")
    } else {
        format!("{sign}{integer_with_commas}.{decimal_part}")
    }
}

/// Whole count with separators, e.g. `35,691`
pub fn format_count(value: u64) -> String {
    format_number(value as f64, 0)
}

/// Grouped number with at most three decimals and no trailing zeros,
/// e.g. `0`, `7.8`, `1,234.5`
pub fn format_compact(value: f64) -> String {
    let formatted = format_number(value, 3);
    match formatted.split_once('.') {
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                integer.to_string()
            } else {
                format!("{integer}.{fraction}")
            }
        }
        None => formatted,
    }
}

/// Credit score with one decimal place, e.g. `9.0`
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-1500.0, 0), "-1,500");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_482), "12,482");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(3.9), "3.9");
        assert_eq!(format_compact(7.8), "7.8");
        assert_eq!(format_compact(9.0), "9");
        assert_eq!(format_compact(1234.5), "1,234.5");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(9.0), "9.0");
        assert_eq!(format_score(7.8), "7.8");
    }
}
