//! ISO 8601 week coordinates.
//!
//! A [`WeekCoordinate`] names one Monday-to-Sunday week as `(iso_year, iso_week)`.
//! Week 1 of an ISO year is the week containing that year's first Thursday
//! (equivalently, January 4th), so the ISO year of a date differs from its
//! Gregorian year for a few days around New Year:
//!
//! - 2024-12-30 (Monday) is `2025-W01`
//! - 2021-01-01 (Friday) is `2020-W53`
//!
//! # Functions
//!
//! - [`week_coordinate`] — date → week coordinate
//! - [`monday_of`] — week coordinate → the Monday that begins it
//! - [`weeks_in_year`] — number of ISO weeks (52 or 53) in an ISO year
//! - [`weeks_of_year`] — every valid coordinate of an ISO year, in order
//!
//! Coordinates can only be built from a date or through [`WeekCoordinate::new`],
//! which validates the week number against [`weeks_in_year`]. Nothing in this
//! module clamps an out-of-range week on the caller's behalf.
//!
//! A coordinate exists only if its whole Monday–Sunday span is representable.
//! The first and last partial weeks of chrono's date range are rejected with
//! [`CalendarError::InvalidComponent`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{CalendarError, Result};

// ── WeekCoordinate ──────────────────────────────────────────────────────────

/// An ISO 8601 `(year, week)` pair together with the Monday it starts on.
///
/// The Monday is resolved once at construction, so [`monday_of`] never fails,
/// and the Sunday six days later is always representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WeekCoordinate {
    iso_year: i32,
    iso_week: u32,
    monday: NaiveDate,
}

impl WeekCoordinate {
    /// Build a coordinate from raw components.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidComponent`] if `iso_week` is 0, exceeds
    /// [`weeks_in_year`] for `iso_year`, or any day of the week is outside the
    /// range chrono can represent.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekcal::WeekCoordinate;
    ///
    /// assert!(WeekCoordinate::new(2020, 53).is_ok());
    /// assert!(WeekCoordinate::new(2021, 53).is_err());
    /// ```
    pub fn new(iso_year: i32, iso_week: u32) -> Result<Self> {
        let max_week = weeks_in_year(iso_year)?;
        if iso_week == 0 || iso_week > max_week {
            return Err(CalendarError::InvalidComponent(format!(
                "week {iso_week} is outside 1..={max_week} for ISO year {iso_year}"
            )));
        }
        let out_of_range = || {
            CalendarError::InvalidComponent(format!(
                "{iso_year}-W{iso_week:02} is outside the supported date range"
            ))
        };
        let monday = NaiveDate::from_isoywd_opt(iso_year, iso_week, Weekday::Mon)
            .ok_or_else(out_of_range)?;
        monday
            .checked_add_days(Days::new(6))
            .ok_or_else(out_of_range)?;
        Ok(Self {
            iso_year,
            iso_week,
            monday,
        })
    }

    /// The coordinate of the week containing `date`. Same as [`week_coordinate`].
    pub fn containing(date: NaiveDate) -> Result<Self> {
        week_coordinate(date)
    }

    pub fn iso_year(&self) -> i32 {
        self.iso_year
    }

    pub fn iso_week(&self) -> u32 {
        self.iso_week
    }

    /// The Sunday that ends this week.
    pub fn sunday(&self) -> NaiveDate {
        // Checked in `new`.
        self.monday + Days::new(6)
    }

    /// The following week, rolling into week 1 of the next ISO year after the
    /// last week. `None` only at the end of chrono's date range.
    pub fn next(&self) -> Option<Self> {
        self.monday
            .checked_add_days(Days::new(7))
            .and_then(|d| week_coordinate(d).ok())
    }

    /// The preceding week, rolling back into week 52/53 of the previous ISO year.
    pub fn previous(&self) -> Option<Self> {
        self.monday
            .checked_sub_days(Days::new(7))
            .and_then(|d| week_coordinate(d).ok())
    }
}

impl fmt::Display for WeekCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.iso_year, self.iso_week)
    }
}

impl FromStr for WeekCoordinate {
    type Err = CalendarError;

    /// Parse the ISO 8601 week notation `YYYY-Www` (e.g. `2020-W53`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (year, week) = s.rsplit_once("-W").ok_or_else(|| {
            CalendarError::InvalidComponent(format!("expected YYYY-Www, got '{s}'"))
        })?;
        let iso_year: i32 = year
            .parse()
            .map_err(|_| CalendarError::InvalidComponent(format!("invalid ISO year in '{s}'")))?;
        let iso_week: u32 = week
            .parse()
            .map_err(|_| CalendarError::InvalidComponent(format!("invalid ISO week in '{s}'")))?;
        Self::new(iso_year, iso_week)
    }
}

// ── Calculator ──────────────────────────────────────────────────────────────

/// Compute the ISO 8601 week coordinate of `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weekcal::week_coordinate;
///
/// let c = week_coordinate(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()).unwrap();
/// assert_eq!((c.iso_year(), c.iso_week()), (2025, 1));
/// ```
///
/// # Errors
///
/// Returns [`CalendarError::InvalidComponent`] for dates in the first or last
/// week of chrono's range, whose Monday or Sunday cannot be represented.
pub fn week_coordinate(date: NaiveDate) -> Result<WeekCoordinate> {
    let iso = date.iso_week();
    WeekCoordinate::new(iso.year(), iso.week())
}

/// The Monday that begins the week named by `coordinate`.
pub fn monday_of(coordinate: &WeekCoordinate) -> NaiveDate {
    coordinate.monday
}

// ── Year week-count oracle ──────────────────────────────────────────────────

/// Number of ISO weeks in `iso_year`: 52 or 53.
///
/// Derived from the coordinate of December 31st. If Dec 31 already belongs to
/// week 1 of the next ISO year the year is short (52 weeks); otherwise its own
/// week number is the count.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidComponent`] if December 31st of `iso_year`
/// cannot be represented.
pub fn weeks_in_year(iso_year: i32) -> Result<u32> {
    let dec31 = NaiveDate::from_ymd_opt(iso_year, 12, 31).ok_or_else(|| {
        CalendarError::InvalidComponent(format!(
            "year {iso_year} is outside the supported date range"
        ))
    })?;
    let last = dec31.iso_week();
    if last.week() == 1 {
        Ok(52)
    } else {
        Ok(last.week())
    }
}

/// Whether `iso_year` has 53 ISO weeks.
pub fn is_long_year(iso_year: i32) -> Result<bool> {
    Ok(weeks_in_year(iso_year)? == 53)
}

/// Every valid week coordinate of `iso_year`, week 1 first.
///
/// This is the list a week picker offers for one year.
pub fn weeks_of_year(iso_year: i32) -> Result<Vec<WeekCoordinate>> {
    let count = weeks_in_year(iso_year)?;
    (1..=count)
        .map(|iso_week| WeekCoordinate::new(iso_year, iso_week))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
