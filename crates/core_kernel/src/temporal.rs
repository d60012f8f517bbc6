//! Calendar types for monthly billing
//!
//! This module provides the two calendar primitives the billing domain
//! works with:
//! - Billing month: a `YYYY-MM` calendar month with its real length
//! - Date range: an inclusive span of calendar days

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Textual format of calendar dates on item records and billing periods
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years a date or billing month may fall in
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Invalid month '{0}': expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parses a `YYYY-MM-DD` calendar date
///
/// The year takes exactly four digits, the month and day one or two.
/// Anything else, surrounding whitespace and signs included, is rejected.
pub fn parse_date(value: &str) -> Result<NaiveDate, TemporalError> {
    let invalid = || TemporalError::InvalidDate(value.to_string());

    let mut parts = value.split('-');
    let well_formed = matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(year), Some(month), Some(day), None)
            if all_digits(year, 4..=4) && all_digits(month, 1..=2) && all_digits(day, 1..=2)
    );
    if !well_formed {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;
    if !YEAR_RANGE.contains(&date.year()) {
        return Err(invalid());
    }
    Ok(date)
}

fn all_digits(part: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

/// An inclusive range of calendar days
///
/// Both `start` and `end` belong to the range, so a range whose start
/// equals its end covers exactly one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the range, counting both endpoints
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns the days shared by both ranges, if any
    ///
    /// `start` and `end` may be any pair of dates; a start after its end
    /// never intersects.
    pub fn intersect(&self, start: NaiveDate, end: NaiveDate) -> Option<DateRange> {
        let active_start = start.max(self.start);
        let active_end = end.min(self.end);
        if active_start > active_end {
            return None;
        }
        Some(Self {
            start: active_start,
            end: active_end,
        })
    }

    /// Returns true if the two ranges share at least one day
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.intersect(other.start, other.end).is_some()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// A calendar month targeted by a bill
///
/// Serialized as its `YYYY-MM` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BillingMonth {
    year: i32,
    month: u32,
    range: DateRange,
}

impl BillingMonth {
    /// Creates a billing month, rejecting months outside 1..=12 and years
    /// outside [`YEAR_RANGE`]
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        let invalid = || TemporalError::InvalidMonth(format!("{}-{}", year, month));

        if !YEAR_RANGE.contains(&year) {
            return Err(invalid());
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            range: DateRange {
                start: first,
                end: last,
            },
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.range.start
    }

    /// Last day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.range.end
    }

    /// The whole month as an inclusive range
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Number of days in the month (28 to 31)
    pub fn days(&self) -> i64 {
        i64::from(self.range.end.day())
    }

    /// Returns the days of `[start, end]` that fall inside this month
    pub fn overlap(&self, start: NaiveDate, end: NaiveDate) -> Option<DateRange> {
        self.range.intersect(start, end)
    }
}

impl FromStr for BillingMonth {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TemporalError::InvalidMonth(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.trim().parse().map_err(|_| invalid())?;
        let month: u32 = month.trim().parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for BillingMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BillingMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
