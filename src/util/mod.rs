use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{Datelike, Local, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YYYY_MM_DD: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

static ID_SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Parse a `YYYY-MM-DD` date. Anything else, including `2024-1-5`, is rejected so that the parsed
/// order always agrees with the lexicographic order of the stored text. Surrounding whitespace is not
/// accepted either.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    if !YYYY_MM_DD.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Current local calendar date
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Creation-time id: milliseconds since epoch, then the sub-millisecond nanoseconds and a per-process
/// sequence number as fixed-width hex. Ids created in the same millisecond still differ.
pub(crate) fn timestamp_id() -> String {
    let now = Utc::now();
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed) & 0xffff;
    format!("{}{:06x}{:04x}", now.timestamp_millis(), now.timestamp_subsec_nanos() % 1_000_000, seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-02"), NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(parse_date(" 2024-01-02 "), None);
        assert_eq!(parse_date("2024-1-2"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_same_month() {
        let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert!(same_month(d(2024, 3, 1), d(2024, 3, 31)));
        assert!(!same_month(d(2024, 3, 1), d(2023, 3, 1)));
        assert!(!same_month(d(2024, 3, 1), d(2024, 4, 1)));
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
        assert_eq!(format_date(date), "2024-07-09");
        assert_eq!(parse_date(&format_date(date)), Some(date));
    }

    #[test]
    fn test_timestamp_ids_are_unique() {
        let ids: Vec<String> = (0..1000).map(|_| timestamp_id()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());

        let millis = Utc::now().timestamp_millis().to_string();
        assert_eq!(ids[0].len(), millis.len() + 10);
        assert!(ids[0].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
