//! Calendar helpers: month filters and user-supplied timestamps.
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

/// A calendar month, written as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        timestamp.year() == self.year && timestamp.month() == self.month
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Number of days in this month (28-31)
    pub fn days_in_month(&self) -> u32 {
        match (self.first_day(), self.next().first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            _ => 31,
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid month '{}', expected YYYY-MM", s);
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

/// Parse a transaction timestamp supplied by a client.
///
/// Accepts full RFC 3339 (any offset, normalised to UTC) or a bare
/// `YYYY-MM-DD` date, which is taken as midnight UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, String> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }
    Err(format!("Invalid date '{}', expected RFC 3339 or YYYY-MM-DD", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_parse_and_display() {
        let month: YearMonth = "2025-02".parse().unwrap();
        assert_eq!(month, YearMonth { year: 2025, month: 2 });
        assert_eq!(month.to_string(), "2025-02");

        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025".parse::<YearMonth>().is_err());
        assert!("feb-2025".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2025, 4).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2025, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_contains_uses_utc_month() {
        let month = YearMonth::new(2025, 3).unwrap();
        let inside = parse_timestamp("2025-03-31T23:59:59Z").unwrap();
        let outside = parse_timestamp("2025-04-01T00:00:00Z").unwrap();
        assert!(month.contains(&inside));
        assert!(!month.contains(&outside));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let with_offset = parse_timestamp("2025-06-14T10:30:00-04:00").unwrap();
        assert_eq!(with_offset.to_rfc3339(), "2025-06-14T14:30:00+00:00");

        let date_only = parse_timestamp("2025-06-14").unwrap();
        assert_eq!(date_only.to_rfc3339(), "2025-06-14T00:00:00+00:00");

        assert!(parse_timestamp("14/06/2025").is_err());
    }
}
