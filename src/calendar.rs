//! Date facts and the full-year grid model.
//!
//! "Now" is the wall-clock instant shifted by a fixed civil offset (no DST
//! rules). Everything else is pure Gregorian arithmetic recomputed per
//! request; nothing is cached between renders.

use chrono::{Datelike, FixedOffset, NaiveDate, Utc};

use crate::params::DEFAULT_TZ_HOURS;

/// Classification of a calendar day relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Past,
    Today,
    Future,
}

/// Current date under the given fractional-hour offset east of UTC.
///
/// Offsets outside chrono's representable range (|hours| >= 24) fall back to
/// the default offset; the parameter layer already filtered non-finite input.
pub fn local_today(tz_hours: f64) -> NaiveDate {
    let offset = fixed_offset(tz_hours);
    Utc::now().with_timezone(&offset).date_naive()
}

fn fixed_offset(tz_hours: f64) -> FixedOffset {
    let seconds = (tz_hours * 3600.0).round();
    if seconds.is_finite() {
        if let Some(offset) = FixedOffset::east_opt(seconds as i32) {
            return offset;
        }
    }
    FixedOffset::east_opt((DEFAULT_TZ_HOURS * 3600.0) as i32).unwrap()
}

/// Standard Gregorian leap rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Day count of a zero-based month.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Monday-first weekday index (0 = Monday) of day 1 of a zero-based month.
pub fn first_weekday_offset(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|d| d.weekday().num_days_from_monday())
        .unwrap_or(0)
}

/// Whether (year, month0, day) is a Saturday or Sunday.
pub fn is_weekend(year: i32, month0: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
        .map(|d| d.weekday().num_days_from_monday() >= 5)
        .unwrap_or(false)
}

/// Scalar date facts derived from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFacts {
    pub year: i32,
    /// Zero-based current month.
    pub month0: u32,
    /// One-based current day of month.
    pub day: u32,
    pub day_of_year: u32,
    pub days_in_year: u32,
    pub days_left: u32,
    pub percent_left: u32,
    pub percent_passed: u32,
}

impl DateFacts {
    pub fn for_date(today: NaiveDate) -> Self {
        let year = today.year();
        let day_of_year = today.ordinal();
        let days_in_year = days_in_year(year);
        let days_left = days_in_year - day_of_year;
        let percent_left = ((days_left as f64 / days_in_year as f64) * 100.0).round() as u32;
        Self {
            year,
            month0: today.month0(),
            day: today.day(),
            day_of_year,
            days_in_year,
            days_left,
            percent_left,
            percent_passed: 100 - percent_left,
        }
    }

    /// Past/today/future classification of (month0, day) relative to "now".
    pub fn day_state(&self, month0: u32, day: u32) -> DayState {
        if month0 < self.month0 || (month0 == self.month0 && day < self.day) {
            DayState::Past
        } else if month0 == self.month0 && day == self.day {
            DayState::Today
        } else {
            DayState::Future
        }
    }
}

/// One month of the grid: leading `None` slots for alignment, then day
/// numbers 1..=days_in_month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month0: u32,
    pub days_in_month: u32,
    pub offset: u32,
    pub cells: Vec<Option<u32>>,
}

impl MonthGrid {
    pub fn build(year: i32, month0: u32) -> Self {
        let days_in_month = days_in_month(year, month0);
        let offset = first_weekday_offset(year, month0);
        let mut cells = Vec::with_capacity((offset + days_in_month) as usize);
        cells.extend(std::iter::repeat(None).take(offset as usize));
        cells.extend((1..=days_in_month).map(Some));
        Self {
            month0,
            days_in_month,
            offset,
            cells,
        }
    }

    /// Number of week rows occupied by this month.
    pub fn rows(&self) -> u32 {
        (self.cells.len() as u32).div_ceil(7)
    }
}

/// The whole model for one render: date facts plus twelve month grids.
#[derive(Debug, Clone)]
pub struct YearCalendar {
    pub facts: DateFacts,
    pub months: Vec<MonthGrid>,
}

impl YearCalendar {
    pub fn new(today: NaiveDate) -> Self {
        let facts = DateFacts::for_date(today);
        let months = (0..12).map(|m| MonthGrid::build(facts.year, m)).collect();
        Self { facts, months }
    }
}
