//! Date projector: maps a calendar date to the annotations that apply to it.
//!
//! Everything here is a pure function over snapshots passed in by the
//! caller. Nothing reads global state, performs I/O or logs, so view code can
//! call it once per visible cell on every render.
//!
//! - [`match_recurring_tasks`]: weekly/monthly/yearly rules falling on a date
//! - [`match_schedule`]: the work or rest icon of one cycle schedule
//! - [`project_day`] / [`project_range`]: both combined, with per-granularity
//!   visibility and an explicit [`OverlapPolicy`]

mod calendar;
mod day;
mod matching;


pub use self::calendar::{days_between, leading_blank_days, visible_range, CalendarDay, DateRange};
pub use self::day::{project_day, project_range, OverlapPolicy};
pub use self::matching::{match_recurring_tasks, match_schedule};
