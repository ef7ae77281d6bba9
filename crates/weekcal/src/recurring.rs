//! Countdown dates: resolving a one-time or annually recurring anchor against
//! a reference day.
//!
//! An anchor is authored once from a full date. For a recurring anchor the
//! month/day pair is extracted at that moment and frozen; it is never derived
//! from the full date again, so a later change of time zone cannot shift it.
//!
//! # Resolution
//!
//! - One-time anchors resolve to their authored date, past or future.
//! - Recurring anchors resolve to this year's occurrence, or next year's if
//!   this year's is strictly before `today`. The offset is therefore always
//!   in `0..=365`.
//!
//! # Leap-day anchors
//!
//! A February 29 anchor falls on **February 28** in common years. The
//! substitution is a normal result, not an error.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::calendar::Calendar;
use crate::error::{CalendarError, Result};

/// Leap year used to check that a month/day pair can exist at all.
const REFERENCE_LEAP_YEAR: i32 = 2000;

// ── RecurringAnchor ─────────────────────────────────────────────────────────

/// A countdown target: either a fixed date or an annual month/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RecurringAnchor {
    date: NaiveDate,
    month: u32,
    day: u32,
    recurs: bool,
}

impl RecurringAnchor {
    /// Author an anchor from a full date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use weekcal::{resolve, RecurringAnchor};
    ///
    /// let christmas = RecurringAnchor::new(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(), true);
    /// let today = NaiveDate::from_ymd_opt(2025, 12, 26).unwrap();
    /// let next = resolve(&christmas, today).unwrap();
    /// assert_eq!(next.date(), NaiveDate::from_ymd_opt(2026, 12, 25).unwrap());
    /// assert_eq!(next.day_offset(), 364);
    /// ```
    pub fn new(date: NaiveDate, recurs: bool) -> Self {
        Self {
            date,
            month: date.month(),
            day: date.day(),
            recurs,
        }
    }

    /// Author an anchor from an instant, taking the local day under `calendar`.
    pub fn from_instant(instant: DateTime<Utc>, recurs: bool, calendar: &Calendar) -> Self {
        Self::new(calendar.today(instant), recurs)
    }

    /// A recurring anchor from a bare month/day pair.
    ///
    /// The authored date is that pair in the year 2000.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::InvalidComponent`] if `month` is outside `1..=12` or
    ///   `day` outside `1..=31`.
    /// - [`CalendarError::InvalidAnchor`] if the pair exists in no year at all
    ///   (April 31, February 30).
    pub fn annual(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidComponent(format!(
                "month {month} is outside 1..=12"
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(CalendarError::InvalidComponent(format!(
                "day {day} is outside 1..=31"
            )));
        }
        let date = NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day).ok_or_else(|| {
            CalendarError::InvalidAnchor(format!("{month:02}-{day:02} is not a date in any year"))
        })?;
        Ok(Self::new(date, true))
    }

    /// The full date the anchor was authored from.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn recurs(&self) -> bool {
        self.recurs
    }

    fn is_leap_day(&self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// The anchor's occurrence in `year`, applying the February 28 fallback.
    fn occurrence_in(&self, year: i32) -> Result<NaiveDate> {
        if let Some(date) = NaiveDate::from_ymd_opt(year, self.month, self.day) {
            return Ok(date);
        }
        if self.is_leap_day() {
            if let Some(date) = NaiveDate::from_ymd_opt(year, 2, 28) {
                log::debug!("{year} is not a leap year; Feb 29 anchor falls on {date}");
                return Ok(date);
            }
        }
        Err(CalendarError::InvalidComponent(format!(
            "{:02}-{:02} cannot be placed in year {year}",
            self.month, self.day
        )))
    }
}

// ── ResolvedOccurrence ──────────────────────────────────────────────────────

/// How an occurrence relates to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum Relation {
    /// N days until.
    Upcoming(i64),
    Today,
    /// N days since.
    Passed(i64),
}

/// A concrete date for an anchor plus its whole-day distance from `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedOccurrence {
    date: NaiveDate,
    day_offset: i64,
}

impl ResolvedOccurrence {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Positive in the future, zero today, negative in the past.
    pub fn day_offset(&self) -> i64 {
        self.day_offset
    }

    pub fn relation(&self) -> Relation {
        match self.day_offset.cmp(&0) {
            Ordering::Greater => Relation::Upcoming(self.day_offset),
            Ordering::Equal => Relation::Today,
            Ordering::Less => Relation::Passed(-self.day_offset),
        }
    }
}

// ── Resolver ────────────────────────────────────────────────────────────────

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Resolve `anchor` relative to the local day `today`.
///
/// For instants, go through [`Calendar::resolve`] so the time of day is
/// dropped before comparing.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidComponent`] only when the next occurrence
/// would fall outside chrono's representable years.
pub fn resolve(anchor: &RecurringAnchor, today: NaiveDate) -> Result<ResolvedOccurrence> {
    log::trace!("resolving {anchor:?} against {today}");

    if !anchor.recurs {
        return Ok(ResolvedOccurrence {
            date: anchor.date,
            day_offset: days_between(today, anchor.date),
        });
    }

    let year = today.year();
    let mut date = anchor.occurrence_in(year)?;
    if date < today {
        let next_year = year.checked_add(1).ok_or_else(|| {
            CalendarError::InvalidComponent(format!("no year follows {year}"))
        })?;
        log::debug!("{date} already passed; rolling to {next_year}");
        date = anchor.occurrence_in(next_year)?;
    }

    Ok(ResolvedOccurrence {
        date,
        day_offset: days_between(today, date),
    })
}

/// Resolve every anchor and order them soonest first.
///
/// Ties on the resolved date keep the earlier authored date first.
pub fn by_next_occurrence(
    anchors: &[RecurringAnchor],
    today: NaiveDate,
) -> Result<Vec<(RecurringAnchor, ResolvedOccurrence)>> {
    let mut resolved = anchors
        .iter()
        .map(|anchor| resolve(anchor, today).map(|occurrence| (*anchor, occurrence)))
        .collect::<Result<Vec<_>>>()?;
    resolved.sort_by_key(|(anchor, occurrence)| (occurrence.date, anchor.date));
    Ok(resolved)
}

// ── Tests ───────────────────────────────────────────────────────────────────
