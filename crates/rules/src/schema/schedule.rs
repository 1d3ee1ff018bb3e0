//! Work/rest cycle schedule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{dates, Granularity, Icon};

/// A repeating pattern of `work_days` work days followed by `rest_days`
/// rest days, starting on `from` and active through `to` (both inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSchedule {
    /// Assigned by the store. Saves from the single-schedule era have none.
    #[serde(default)]
    pub id: String,
    #[serde(with = "dates")]
    pub from: NaiveDate,
    #[serde(with = "dates")]
    pub to: NaiveDate,
    pub work_days: u32,
    pub rest_days: u32,
    pub work_icon: Icon,
    pub rest_icon: Icon,
    #[serde(rename = "showIcons", default)]
    pub visibility: ScheduleVisibility,
}

impl CycleSchedule {
    pub fn new(from: NaiveDate, to: NaiveDate, work_days: u32, rest_days: u32) -> Self {
        Self {
            id: String::new(),
            from,
            to,
            work_days,
            rest_days,
            work_icon: Icon::new("briefcase"),
            rest_icon: Icon::new("home"),
            visibility: ScheduleVisibility::default(),
        }
    }

    pub fn with_icons(mut self, work: impl Into<Icon>, rest: impl Into<Icon>) -> Self {
        self.work_icon = work.into();
        self.rest_icon = rest.into();
        self
    }

    pub fn with_visibility(mut self, visibility: ScheduleVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Total length of one work+rest cycle in days. Zero means degenerate.
    pub fn cycle_length(&self) -> u64 {
        u64::from(self.work_days) + u64::from(self.rest_days)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Per-granularity switches for rendering a schedule's icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleVisibility {
    #[serde(default = "default_true")]
    pub year: bool,
    #[serde(default = "default_true")]
    pub month: bool,
    #[serde(default = "default_true")]
    pub week: bool,
}

fn default_true() -> bool {
    true
}

impl ScheduleVisibility {
    pub const ALL: Self = Self {
        year: true,
        month: true,
        week: true,
    };

    pub const NONE: Self = Self {
        year: false,
        month: false,
        week: false,
    };

    pub fn shows(&self, granularity: Granularity) -> bool {
        match granularity {
            Granularity::Year => self.year,
            Granularity::Month => self.month,
            Granularity::Week => self.week,
        }
    }
}

impl Default for ScheduleVisibility {
    fn default() -> Self {
        Self::ALL
    }
}
