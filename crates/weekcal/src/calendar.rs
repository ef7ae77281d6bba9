//! The explicit calendar configuration threaded through timezone-aware calls.
//!
//! Week numbering is fixed to ISO 8601 (weeks start Monday). The only input a
//! [`Calendar`] carries is the time zone used to turn an instant into a local
//! day. Build one per process (or per test) and pass it by reference; nothing
//! here is global or mutable.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{CalendarError, Result};
use crate::recurring::{resolve, RecurringAnchor, ResolvedOccurrence};
use crate::week::{week_coordinate, WeekCoordinate};
use crate::window::DateWindow;

/// ISO-week calendar bound to one time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    tz: Tz,
}

impl Default for Calendar {
    fn default() -> Self {
        Self { tz: Tz::UTC }
    }
}

impl Calendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Build a calendar from an IANA timezone name (e.g. `"Europe/Berlin"`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimezone`] if the name is not a known
    /// IANA timezone.
    pub fn from_name(name: &str) -> Result<Self> {
        let tz = name
            .trim()
            .parse::<Tz>()
            .map_err(|_| CalendarError::InvalidTimezone(format!("'{}'", name.trim())))?;
        Ok(Self { tz })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The local calendar day `now` falls on.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.tz).date_naive()
    }

    /// Local midnight of `date`.
    ///
    /// Where a DST transition skips midnight the day starts at its first valid
    /// local instant instead.
    pub fn start_of_day(&self, date: NaiveDate) -> Result<DateTime<Tz>> {
        (0..24)
            .filter_map(|hour| date.and_hms_opt(hour, 0, 0))
            .find_map(|naive| self.tz.from_local_datetime(&naive).earliest())
            .ok_or_else(|| {
                CalendarError::InvalidDatetime(format!(
                    "{date} has no valid local time in {}",
                    self.tz
                ))
            })
    }

    /// The ISO week containing the local day of `now`.
    pub fn current_week(&self, now: DateTime<Utc>) -> Result<WeekCoordinate> {
        week_coordinate(self.today(now))
    }

    /// The month window containing the local day of `now`.
    pub fn current_month(&self, now: DateTime<Utc>) -> DateWindow {
        DateWindow::containing_month(self.today(now))
    }

    /// Resolve `anchor` against the local day of `now`.
    ///
    /// Only the day matters: any two instants on the same local day give the
    /// same occurrence and offset.
    pub fn resolve(
        &self,
        anchor: &RecurringAnchor,
        now: DateTime<Utc>,
    ) -> Result<ResolvedOccurrence> {
        resolve(anchor, self.today(now))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
