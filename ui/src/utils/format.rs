//! Display formatting helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Default pattern used across list views.
pub const DEFAULT_DATE_PATTERN: &str = "YYYY-MM-DD HH:mm:ss";

/// Format a date/time string with a `YYYY`/`MM`/`DD`/`HH`/`mm`/`ss` token
/// pattern. Accepts RFC 3339, `YYYY-MM-DD HH:mm:ss` and bare `YYYY-MM-DD`
/// input; empty or unparseable input yields an empty string.
pub fn format_date(input: &str, pattern: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    let Some(datetime) = parse_datetime(input) else {
        return String::new();
    };

    pattern
        .replace("YYYY", &datetime.format("%Y").to_string())
        .replace("MM", &datetime.format("%m").to_string())
        .replace("DD", &datetime.format("%d").to_string())
        .replace("HH", &datetime.format("%H").to_string())
        .replace("mm", &datetime.format("%M").to_string())
        .replace("ss", &datetime.format("%S").to_string())
}

fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// Format a byte count as `B`/`KB`/`MB`/`GB`/`TB` with up to two decimals.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut formatted = format!("{value:.2}");
    if formatted.contains('.') {
        formatted = formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }
    format!("{} {}", formatted, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_default_pattern() {
        assert_eq!(
            format_date("2030-05-06 07:08:09", DEFAULT_DATE_PATTERN),
            "2030-05-06 07:08:09"
        );
    }

    #[test]
    fn formats_with_custom_pattern() {
        assert_eq!(format_date("2030-05-06 07:08:09", "YYYY/MM/DD"), "2030/05/06");
        assert_eq!(format_date("2030-05-06", "DD.MM.YYYY"), "06.05.2030");
    }

    #[test]
    fn accepts_rfc3339_input() {
        assert_eq!(
            format_date("2030-05-06T07:08:09+00:00", "HH:mm"),
            "07:08"
        );
    }

    #[test]
    fn empty_or_invalid_input_yields_empty_string() {
        assert_eq!(format_date("", DEFAULT_DATE_PATTERN), "");
        assert_eq!(format_date("   ", DEFAULT_DATE_PATTERN), "");
        assert_eq!(format_date("yesterday", DEFAULT_DATE_PATTERN), "");
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }
}
