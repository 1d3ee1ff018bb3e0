//! Derived per-date annotations.

use chrono::NaiveDate;
use serde::Serialize;

use super::{Icon, RecurringTaskRule};

/// Everything a calendar cell shows for one date. Computed on demand, never
/// persisted; borrows from the rule and schedule snapshots it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAnnotations<'a> {
    pub date: NaiveDate,
    /// Matching rules in their stored order.
    pub repeating_task_matches: Vec<&'a RecurringTaskRule>,
    /// Work/rest icons from visible schedules, after the overlap policy.
    pub schedule_icons: Vec<&'a Icon>,
}

impl<'a> DayAnnotations<'a> {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            repeating_task_matches: Vec::new(),
            schedule_icons: Vec::new(),
        }
    }

    /// The first schedule icon for this date, in schedule order.
    ///
    /// With [`OverlapPolicy::ShowAll`](crate::projector::OverlapPolicy) several
    /// icons may apply; read `schedule_icons` to see all of them.
    pub fn schedule_icon(&self) -> Option<&'a Icon> {
        self.schedule_icons.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.repeating_task_matches.is_empty() && self.schedule_icons.is_empty()
    }
}
