//! Display formatting for the review pages
//!
//! Compact follower/view counts, score bands and backend timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a count compactly: `1.5M`, `2.3K`, or the plain integer
///
/// Values at or above one million use one decimal of millions, values at or
/// above one thousand use one decimal of thousands.
///
/// # Examples
///
/// ```
/// use collector_common::format_compact;
///
/// assert_eq!(format_compact(1_500_000), "1.5M");
/// assert_eq!(format_compact(2_300), "2.3K");
/// assert_eq!(format_compact(42), "42");
/// ```
pub fn format_compact(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Score with one decimal place
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Quality band of an opportunity score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Weak,
    Poor,
}

impl ScoreBand {
    /// Band thresholds: 80 / 65 / 50 / 30
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 65.0 {
            ScoreBand::Good
        } else if score >= 50.0 {
            ScoreBand::Fair
        } else if score >= 30.0 {
            ScoreBand::Weak
        } else {
            ScoreBand::Poor
        }
    }

    /// CSS class used by the badge styles in `dashboard.css`
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "score-excellent",
            ScoreBand::Good => "score-good",
            ScoreBand::Fair => "score-fair",
            ScoreBand::Weak => "score-weak",
            ScoreBand::Poor => "score-poor",
        }
    }
}

/// Render a backend timestamp as a calendar date (`YYYY-MM-DD`)
///
/// Accepts RFC 3339, naive ISO date-times (with or without fractional
/// seconds) and plain dates. Anything else is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }

    raw.to_string()
}

/// Like [`format_date`] but keeps the time of day (`YYYY-MM-DD HH:MM`)
pub fn format_datetime(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_millions() {
        assert_eq!(format_compact(1_500_000), "1.5M");
        assert_eq!(format_compact(1_000_000), "1.0M");
        assert_eq!(format_compact(12_340_000), "12.3M");
    }

    #[test]
    fn test_compact_thousands() {
        assert_eq!(format_compact(2_300), "2.3K");
        assert_eq!(format_compact(1_000), "1.0K");
        assert_eq!(format_compact(999_949), "999.9K");
    }

    #[test]
    fn test_compact_small_values() {
        assert_eq!(format_compact(42), "42");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(0), "0");
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::for_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(65.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(50.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(30.0), ScoreBand::Weak);
        assert_eq!(ScoreBand::for_score(12.0), ScoreBand::Poor);
        assert_eq!(ScoreBand::Weak.css_class(), "score-weak");
    }

    #[test]
    fn test_format_score_one_decimal() {
        assert_eq!(format_score(82.35), "82.3");
        assert_eq!(format_score(70.0), "70.0");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2025-03-14T09:26:53.589793"), "2025-03-14");
        assert_eq!(format_date("2025-03-14T09:26:53+02:00"), "2025-03-14");
        assert_eq!(format_date("2025-03-14 09:26:53"), "2025-03-14");
        assert_eq!(format_date("2025-03-14"), "2025-03-14");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2025-03-14T09:26:53"), "2025-03-14 09:26");
    }
}
