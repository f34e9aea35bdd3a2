//! Parsing of the free-form project `year` field into a sortable key.
//!
//! Project years are written by hand, so the field is loose:
//!
//! - `"2021"` → January 2021
//! - `"March 2019"` → March 2019 (month name is case-insensitive;
//!   an unknown name such as `"Spring 2019"` falls back to January)
//! - anything else goes through a generic date parse
//!   (`"2019-03-15"`, `"2019/03/15"`, `"March 15, 2019"`, RFC 3339, …)
//!
//! The key is `Option<NaiveDate>`. `None` — an empty or unparseable year —
//! orders below every real date, so such projects sink to the end of a
//! newest-first listing and lead an oldest-first one.

use chrono::{DateTime, NaiveDate};

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Formats tried, in order, by the generic fallback.
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse a project year into its sort key.
pub fn parse_year(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(year) = parse_bare_year(raw) {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    if let Some((month, year)) = parse_month_year(raw) {
        return NaiveDate::from_ymd_opt(year, month, 1);
    }
    parse_generic(raw)
}

/// 1-based month number for a full English month name.
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|idx| idx as u32 + 1)
}

fn parse_bare_year(raw: &str) -> Option<i32> {
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

/// `"<Word> <YYYY>"`. The word must be alphabetic; unknown names map to January.
fn parse_month_year(raw: &str) -> Option<(u32, i32)> {
    let mut parts = raw.split_whitespace();
    let word = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() || !word.chars().all(char::is_alphabetic) {
        return None;
    }
    let year = parse_bare_year(year)?;
    Some((month_number(word).unwrap_or(1), year))
}

fn parse_generic(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    // Year-month without a day: "2019-03"
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ym(raw: &str) -> Option<(i32, u32)> {
        parse_year(raw).map(|d| (d.year(), d.month()))
    }

    #[test]
    fn bare_year_defaults_to_january() {
        assert_eq!(ym("2021"), Some((2021, 1)));
    }

    #[test]
    fn month_year_uses_named_month() {
        assert_eq!(ym("March 2019"), Some((2019, 3)));
        assert_eq!(ym("december 2020"), Some((2020, 12)));
        assert_eq!(ym("  SEPTEMBER   2018 "), Some((2018, 9)));
    }

    #[test]
    fn unknown_month_name_defaults_to_january() {
        assert_eq!(ym("Spring 2019"), Some((2019, 1)));
        assert_eq!(ym("Mar 2019"), Some((2019, 1)));
    }

    #[test]
    fn iso_date_falls_back_to_generic_parse() {
        assert_eq!(parse_year("2019-03-15"), NaiveDate::from_ymd_opt(2019, 3, 15));
        assert_eq!(parse_year("2019/03/15"), NaiveDate::from_ymd_opt(2019, 3, 15));
        assert_eq!(parse_year("March 15, 2019"), NaiveDate::from_ymd_opt(2019, 3, 15));
        assert_eq!(
            parse_year("2019-03-15T10:00:00Z"),
            NaiveDate::from_ymd_opt(2019, 3, 15)
        );
        assert_eq!(ym("2019-03"), Some((2019, 3)));
    }

    #[test]
    fn empty_or_garbage_is_lowest() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("   "), None);
        assert_eq!(parse_year("ongoing"), None);
        assert!(parse_year("") < parse_year("0001"));
    }

    #[test]
    fn keys_order_chronologically() {
        assert!(parse_year("2019") < parse_year("March 2019"));
        assert!(parse_year("March 2019") < parse_year("2019-03-15"));
        assert!(parse_year("December 2018") < parse_year("2019"));
    }

    #[test]
    fn month_number_lookup() {
        assert_eq!(month_number("January"), Some(1));
        assert_eq!(month_number("OCTOBER"), Some(10));
        assert_eq!(month_number("Smarch"), None);
    }
}
