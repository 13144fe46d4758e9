//! Publish-date parsing and the injectable clock.
//!
//! Article dates arrive as `"MM月DD日HH時mm分"` with no year. Only the month
//! and day are used: the year is taken from the processing clock and the
//! time-of-day suffix is ignored, so every parsed date sits at midnight
//! resolution.
//!
//! A month later than the current one still resolves to the current year,
//! which can put the article in the future.

use crate::error::DateParseError;
use chrono::{Local, NaiveDate, NaiveDateTime};

const MONTH_MARKER: char = '月';
const DAY_MARKER: char = '日';

/// Source of "now" for the filter cutoff and the render timestamp.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Parse a partial publish date against `year`.
///
/// # Arguments
///
/// * `raw` - The record's `date` field, e.g. `"01月17日12時00分"`
/// * `year` - Year to attach, normally the processing year
///
/// # Errors
///
/// Returns a [`DateParseError`] when a marker is missing, a segment is not an
/// integer, or the month/day pair does not exist in `year`.
///
/// # Examples
///
/// ```ignore
/// let date = parse_publish_date("01月17日12時00分", 2026)?;
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
/// ```
pub fn parse_publish_date(raw: &str, year: i32) -> Result<NaiveDate, DateParseError> {
    let (month_text, rest) = raw
        .split_once(MONTH_MARKER)
        .ok_or(DateParseError::MissingMarker(MONTH_MARKER))?;
    let (day_text, _time_of_day) = rest
        .split_once(DAY_MARKER)
        .ok_or(DateParseError::MissingMarker(DAY_MARKER))?;

    let month = parse_segment("month", month_text)?;
    let day = parse_segment("day", day_text)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateParseError::OutOfRange { year, month, day })
}

fn parse_segment(field: &'static str, text: &str) -> Result<u32, DateParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|source| DateParseError::InvalidNumber {
            field,
            value: trimmed.to_string(),
            source,
        })
}
