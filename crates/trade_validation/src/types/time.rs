//! Calendar date type and the date predicates used by the trade rules.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `parse_date`, `is_before`, `is_weekend`: day-granularity predicates
//! - `date_before`, `falls_on_weekend`: string-level variants that contain
//!   parse failures and evaluate to `false`
//!
//! # Examples
//!
//! ```
//! use trade_validation::types::time::{is_before, is_weekend, parse_date};
//!
//! let trade = parse_date("2016-08-11").unwrap();
//! let value = parse_date("2016-08-15").unwrap();
//!
//! assert!(is_before(trade, value));
//! assert!(!is_weekend(value)); // Monday
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

use super::error::DateError;

/// Wire format of every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Dates carry no time-of-day and no timezone; comparison is at day
/// granularity.
///
/// # Examples
///
/// ```
/// use trade_validation::types::time::Date;
///
/// let date = Date::from_ymd(2016, 8, 13).unwrap();
/// assert_eq!(date.year(), 2016);
/// assert!(date.is_weekend()); // Saturday
///
/// let parsed: Date = "2016-08-13".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// Parsing is strict: the input must be exactly four year digits, two
    /// month digits and two day digits separated by `-`, and out-of-range
    /// components are rejected rather than rolled over into the next month.
    ///
    /// ```
    /// use trade_validation::types::time::Date;
    ///
    /// assert!(Date::parse("2016-08-15").is_ok());
    /// assert!(Date::parse("2016-02-30").is_err());
    /// assert!(Date::parse("15/08/2016").is_err());
    /// assert!(Date::parse("2016-8-5").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        if !has_date_shape(s) {
            return Err(DateError::ParseError {
                input: s.to_string(),
                reason: "expected exactly YYYY-MM-DD".to_string(),
            });
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Date)
            .map_err(|e| DateError::ParseError {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// True if this date is strictly earlier than `other`.
    pub fn is_before(&self, other: Date) -> bool {
        self.0 < other.0
    }

    /// True on Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

// chrono's `%Y-%m-%d` accepts signs, short years and unpadded fields.
fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Strict parse of a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<Date, DateError> {
    Date::parse(s)
}

/// True iff `a` is strictly earlier than `b`. Equal dates are not "before".
pub fn is_before(a: Date, b: Date) -> bool {
    a.is_before(b)
}

/// True iff `d` is a Saturday or a Sunday.
pub fn is_weekend(d: Date) -> bool {
    d.is_weekend()
}

/// String-level [`is_before`].
///
/// An unparsable operand makes the comparison `false`; the failure is
/// logged at `warn` and never propagated.
///
/// ```
/// use trade_validation::types::time::date_before;
///
/// assert!(date_before("2016-08-10", "2016-08-11"));
/// assert!(!date_before("2016-08-11", "2016-08-11"));
/// assert!(!date_before("not-a-date", "2016-08-11"));
/// ```
pub fn date_before(a: &str, b: &str) -> bool {
    match (parse_lenient(a), parse_lenient(b)) {
        (Some(a), Some(b)) => a.is_before(b),
        _ => false,
    }
}

/// String-level [`is_weekend`]; an unparsable date is not a weekend.
pub fn falls_on_weekend(s: &str) -> bool {
    parse_lenient(s).is_some_and(|d| d.is_weekend())
}

fn parse_lenient(s: &str) -> Option<Date> {
    match Date::parse(s) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::warn!(%err, "unparsable date treated as failed comparison");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parse_valid() {
        let date = Date::parse("2016-08-11").unwrap();
        assert_eq!(date.year(), 2016);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 11);
    }

    #[test]
    fn test_date_parse_invalid() {
        assert!(Date::parse("2016-13-01").is_err());
        assert!(Date::parse("2016-08-32").is_err());
        assert!(Date::parse("").is_err());
        assert!(Date::parse("2016-08-11T10:00:00").is_err());

        match Date::parse("garbage") {
            Err(DateError::ParseError { input, .. }) => assert_eq!(input, "garbage"),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_date_parse_rejects_loose_shapes() {
        for input in [
            "2016-8-5",
            "2016-08-5",
            " 2016-08-15",
            "2016- 08-15",
            "+2016-08-15",
            "16-08-15",
            "02016-08-15",
            "2016-08-15 ",
            "2016/08/15",
        ] {
            assert!(
                matches!(Date::parse(input), Err(DateError::ParseError { .. })),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_short_year_is_unparsable_not_year_16() {
        // As year 0016 this would be before 2016
        assert!(!date_before("16-08-15", "2016-08-11"));
        assert!(date_before("2016-08-11", "2016-08-15"));
    }

    #[test]
    fn test_date_from_ymd_invalid() {
        assert_eq!(
            Date::from_ymd(2017, 2, 29),
            Err(DateError::InvalidDate {
                year: 2017,
                month: 2,
                day: 29
            })
        );
        assert!(Date::from_ymd(2016, 2, 29).is_ok());
    }

    #[test]
    fn test_date_display() {
        let date = Date::from_ymd(2016, 8, 5).unwrap();
        assert_eq!(date.to_string(), "2016-08-05");
    }

    #[test]
    fn test_is_before_strict() {
        let a = parse_date("2016-08-11").unwrap();
        let b = parse_date("2016-08-15").unwrap();
        assert!(is_before(a, b));
        assert!(!is_before(b, a));
        assert!(!is_before(a, a));
    }

    #[test]
    fn test_is_weekend_known_week() {
        // 2016-08-08 is a Monday
        let expected = [false, false, false, false, false, true, true];
        for (offset, weekend) in expected.iter().enumerate() {
            let date = Date::from_ymd(2016, 8, 8 + offset as u32).unwrap();
            assert_eq!(is_weekend(date), *weekend, "{}", date);
        }
    }

    #[test]
    fn test_falls_on_weekend_strings() {
        assert!(falls_on_weekend("2016-08-13"));
        assert!(falls_on_weekend("2016-08-14"));
        assert!(!falls_on_weekend("2016-08-15"));
        assert!(!falls_on_weekend("2016-08-1x"));
    }

    #[test]
    fn test_date_before_unparsable_is_false() {
        assert!(!date_before("2016-08-11", "bad"));
        assert!(!date_before("bad", "2016-08-11"));
        assert!(!date_before("bad", "bad"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = NaiveDate> {
            (1900i32..2100, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }

        proptest! {
            #[test]
            fn test_is_before_matches_day_ordering(a in date_strategy(), b in date_strategy()) {
                prop_assert_eq!(is_before(Date(a), Date(b)), a < b);
            }

            #[test]
            fn test_is_before_irreflexive(a in date_strategy()) {
                prop_assert!(!is_before(Date(a), Date(a)));
            }

            #[test]
            fn test_is_weekend_matches_weekday(a in date_strategy()) {
                let expected = a.weekday() == Weekday::Sat || a.weekday() == Weekday::Sun;
                prop_assert_eq!(is_weekend(Date(a)), expected);
            }

            #[test]
            fn test_string_roundtrip_agrees(a in date_strategy(), b in date_strategy()) {
                let (sa, sb) = (Date(a).to_string(), Date(b).to_string());
                prop_assert_eq!(date_before(&sa, &sb), a < b);
            }
        }
    }
}
