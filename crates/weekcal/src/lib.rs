//! # weekcal
//!
//! Deterministic date math for a personal planner.
//!
//! Everything here is a pure function over `Copy` values. The caller supplies
//! the reference day (or instant plus [`Calendar`]) instead of the library
//! reading a clock, so results depend only on arguments.
//!
//! ## Modules
//!
//! - [`week`] — date → ISO 8601 week coordinate, the inverse, and the 52/53 week-count oracle
//! - [`window`] — week or month → inclusive start/end date range
//! - [`recurring`] — one-time or annual countdown anchors resolved against "today"
//! - [`calendar`] — the time zone used to turn instants into local days
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod recurring;
pub mod week;
pub mod window;

pub use calendar::Calendar;
pub use error::CalendarError;
pub use recurring::{
    by_next_occurrence, days_between, resolve, RecurringAnchor, Relation, ResolvedOccurrence,
};
pub use week::{
    is_long_year, monday_of, week_coordinate, weeks_in_year, weeks_of_year, WeekCoordinate,
};
pub use window::{days_in_month, month_window, week_window, DateWindow};
