//! Calendar, week and time-of-day window models.
//!
//! Defines the service-day vocabulary shared by every component:
//! the operating window, Monday-start weeks, peak-day classification,
//! and intra-day time windows used to express split-shift patterns.
//!
//! # Time Model
//! Timestamps are wall-clock `NaiveDateTime` values in the business's
//! local time. Intra-day windows are expressed in minutes from midnight
//! so that a window may end exactly at 24:00.
//!
//! # Week Model
//! A week runs from Monday 00:00 (inclusive) to the following Monday
//! 00:00 (exclusive), matching ISO 8601.

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// First operating hour of the service day.
pub const OPENING_HOUR: u32 = 10;
/// Closing hour of the service day (exclusive).
pub const CLOSING_HOUR: u32 = 24;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time-of-day interval [start, end), in minutes from midnight.
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (minutes from midnight, inclusive).
    pub start_minute: i64,
    /// Interval end (minutes from midnight, exclusive).
    pub end_minute: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_minute: i64, end_minute: i64) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Creates a window from whole hours, e.g. `hours(10, 16)` = 10:00–16:00.
    pub fn hours(start_hour: u32, end_hour: u32) -> Self {
        Self::new(i64::from(start_hour) * 60, i64::from(end_hour) * 60)
    }

    /// Duration of this window (minutes).
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end_minute - self.start_minute
    }

    /// Whether a minute-of-day falls within this window.
    #[inline]
    pub fn contains(&self, minute: i64) -> bool {
        minute >= self.start_minute && minute < self.end_minute
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    /// Anchors this window onto a calendar date.
    ///
    /// A window ending at 24:00 ends at midnight of the following day.
    pub fn on(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let midnight = start_of_day(date);
        (
            midnight + Duration::minutes(self.start_minute),
            midnight + Duration::minutes(self.end_minute),
        )
    }
}

/// Demand classification of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Monday through Thursday.
    Standard,
    /// Friday or Saturday: doubled headcount, intensified dinner service.
    Peak,
    /// Sunday has its own demand branch.
    Sunday,
}

impl DayClass {
    /// Classifies a date.
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Fri | Weekday::Sat => DayClass::Peak,
            Weekday::Sun => DayClass::Sunday,
            _ => DayClass::Standard,
        }
    }
}

/// Whether a date is a peak day (Friday or Saturday).
#[inline]
pub fn is_peak_day(date: NaiveDate) -> bool {
    DayClass::of(date) == DayClass::Peak
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = Days::new(u64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_days(back).unwrap_or(NaiveDate::MIN)
}

/// The [Monday 00:00, next Monday 00:00) range of the week containing `date`.
pub fn week_range(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let monday = start_of_day(week_start(date));
    (monday, monday + Duration::days(7))
}

/// Midnight at the start of `date`.
#[inline]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Minutes between two timestamps (`end - start`).
#[inline]
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}
