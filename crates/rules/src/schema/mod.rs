//! Calendar annotation data model with serde support.
//!
//! Defines the types the projector reads and the stores persist:
//! - `RecurringTaskRule`: a weekly/monthly/yearly single-occurrence task
//! - `CycleSchedule`: a repeating work/rest day pattern over a date range
//! - `DayAnnotations`: the derived, never-persisted result for one date
//!
//! Field names follow the persisted JSON shape (`type`, `value`,
//! `workDays`, `showIcons`, ...), so existing saved data loads unchanged.

mod annotations;
pub(crate) mod dates;
mod icon;
mod kind;
mod recurrence;
mod schedule;

pub use annotations::*;
pub use icon::*;
pub use kind::*;
pub use recurrence::*;
pub use schedule::*;
