//! Concrete date ranges for a week or a month.
//!
//! A [`DateWindow`] is an inclusive `start..=end` pair of local dates. Week
//! windows always run Monday through Sunday; month windows run from day 1 to
//! the last calendar day of the month (leap-aware for February).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{CalendarError, Result};
use crate::week::{monday_of, week_coordinate, WeekCoordinate};

/// An inclusive range of calendar days. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// The Monday–Sunday window of an ISO week.
    pub fn of_week(coordinate: &WeekCoordinate) -> Self {
        Self {
            start: monday_of(coordinate),
            end: coordinate.sunday(),
        }
    }

    /// The first-to-last-day window of `month` in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidComponent`] if `month` is outside `1..=12`
    /// or the year cannot be represented.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekcal::DateWindow;
    ///
    /// let feb = DateWindow::of_month(2024, 2).unwrap();
    /// assert_eq!(feb.end().to_string(), "2024-02-29");
    /// ```
    pub fn of_month(year: i32, month: u32) -> Result<Self> {
        let last_day = days_in_month(year, month)?;
        let start = ymd(year, month, 1)?;
        let end = ymd(year, month, last_day)?;
        Ok(Self { start, end })
    }

    /// The week window containing `date`.
    ///
    /// # Errors
    ///
    /// Fails like [`week_coordinate`] for the partial weeks at either end of
    /// chrono's date range.
    pub fn containing_week(date: NaiveDate) -> Result<Self> {
        Ok(Self::of_week(&week_coordinate(date)?))
    }

    /// The month window containing `date`.
    pub fn containing_month(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = days_in_month(date.year(), date.month())
            .ok()
            .and_then(|last| date.with_day(last))
            .unwrap_or(date);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the window (both ends inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every day of the window in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Same as [`DateWindow::of_week`].
pub fn week_window(coordinate: &WeekCoordinate) -> DateWindow {
    DateWindow::of_week(coordinate)
}

/// Same as [`DateWindow::of_month`].
pub fn month_window(year: i32, month: u32) -> Result<DateWindow> {
    DateWindow::of_month(year, month)
}

/// Number of days in `month` of `year` (28–31).
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidComponent(format!(
            "month {month} is outside 1..=12"
        )));
    }
    if month == 12 {
        return Ok(31);
    }
    let first_next = ymd(year, month + 1, 1)?;
    let last = first_next.pred_opt().ok_or_else(|| {
        CalendarError::InvalidComponent(format!("{year}-{month:02} has no last day"))
    })?;
    Ok(last.day())
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CalendarError::InvalidComponent(format!(
            "{year}-{month:02}-{day:02} is outside the supported date range"
        ))
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── week windows ────────────────────────────────────────────────────

    #[test]
    fn test_week_window_spans_year_boundary() {
        let c = WeekCoordinate::new(2025, 1).unwrap();
        let w = DateWindow::of_week(&c);
        assert_eq!(w.start(), date(2024, 12, 30));
        assert_eq!(w.end(), date(2025, 1, 5));
        assert_eq!(w.len_days(), 7);
    }

    #[test]
    fn test_week_window_starts_monday_ends_sunday() {
        let w = week_window(&WeekCoordinate::new(2020, 53).unwrap());
        assert_eq!(w.start().weekday(), Weekday::Mon);
        assert_eq!(w.end().weekday(), Weekday::Sun);
        assert_eq!(w.end(), date(2021, 1, 3));
    }

    #[test]
    fn test_containing_week() {
        // Wed Feb 18 2026
        let w = DateWindow::containing_week(date(2026, 2, 18)).unwrap();
        assert_eq!(w.start(), date(2026, 2, 16));
        assert_eq!(w.end(), date(2026, 2, 22));
        assert!(w.contains(date(2026, 2, 18)));
        assert!(!w.contains(date(2026, 2, 23)));
    }

    #[test]
    fn test_week_window_near_range_end_is_full_week() {
        // The last week chrono can hold in full still spans seven days
        let last = (0..14)
            .filter_map(|back| NaiveDate::MAX.checked_sub_days(chrono::Days::new(back)))
            .find_map(|d| week_coordinate(d).ok())
            .unwrap();
        let w = DateWindow::of_week(&last);
        assert_eq!(w.len_days(), 7);
        assert_eq!(w.end().weekday(), Weekday::Sun);
    }

    #[test]
    fn test_containing_week_at_range_end_is_error() {
        let err = DateWindow::containing_week(NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidComponent(_)));
        assert!(DateWindow::containing_week(NaiveDate::MIN).is_err());
    }

    // ── month windows ───────────────────────────────────────────────────

    #[test]
    fn test_month_window_leap_february() {
        let w = month_window(2024, 2).unwrap();
        assert_eq!(w.start(), date(2024, 2, 1));
        assert_eq!(w.end(), date(2024, 2, 29));
    }

    #[test]
    fn test_month_window_common_february() {
        let w = month_window(2025, 2).unwrap();
        assert_eq!(w.end(), date(2025, 2, 28));
        assert_eq!(w.len_days(), 28);
    }

    #[test]
    fn test_month_window_century_years() {
        // 1900 is not a leap year, 2000 is
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
    }

    #[test]
    fn test_month_window_december() {
        let w = month_window(2025, 12).unwrap();
        assert_eq!(w.start(), date(2025, 12, 1));
        assert_eq!(w.end(), date(2025, 12, 31));
    }

    #[test]
    fn test_month_window_rejects_month_zero_and_thirteen() {
        for month in [0, 13] {
            let err = month_window(2025, month).unwrap_err();
            assert!(matches!(err, CalendarError::InvalidComponent(_)), "month {month}");
        }
    }

    #[test]
    fn test_days_in_month_all_months() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2026, i as u32 + 1).unwrap(), *days);
        }
    }

    #[test]
    fn test_containing_month() {
        let w = DateWindow::containing_month(date(2024, 2, 10));
        assert_eq!(w, month_window(2024, 2).unwrap());
    }

    #[test]
    fn test_days_iterates_inclusive() {
        let w = month_window(2026, 4).unwrap();
        let days: Vec<_> = w.days().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days.first(), Some(&date(2026, 4, 1)));
        assert_eq!(days.last(), Some(&date(2026, 4, 30)));
    }
}
