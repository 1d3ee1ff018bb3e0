//! Whole-day projection: rules plus visible schedules, merged by policy.

use chrono::NaiveDate;
use daymark_core::OverlapSetting;

use crate::schema::{CycleSchedule, DayAnnotations, Granularity, Icon, RecurringTaskRule};

use super::calendar::DateRange;
use super::matching::{match_recurring_tasks, match_schedule};

/// How icons from several schedules matching the same date are combined.
///
/// There is no built-in precedence between overlapping schedules; every
/// caller picks one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Keep the icon of the earliest schedule in list order.
    FirstWins,
    /// Keep the icon of the latest schedule in list order.
    LastWins,
    /// Keep every icon, in list order.
    ShowAll,
}

impl From<OverlapSetting> for OverlapPolicy {
    fn from(setting: OverlapSetting) -> Self {
        match setting {
            OverlapSetting::First => OverlapPolicy::FirstWins,
            OverlapSetting::Last => OverlapPolicy::LastWins,
            OverlapSetting::All => OverlapPolicy::ShowAll,
        }
    }
}

impl OverlapPolicy {
    fn resolve<'a>(self, mut icons: Vec<&'a Icon>) -> Vec<&'a Icon> {
        match self {
            OverlapPolicy::ShowAll => icons,
            OverlapPolicy::FirstWins => {
                icons.truncate(1);
                icons
            }
            OverlapPolicy::LastWins => icons.pop().into_iter().collect(),
        }
    }
}

/// Annotations for one date as seen at `granularity`.
///
/// Schedules hidden at this granularity are skipped before the overlap
/// policy runs, so a hidden schedule never shadows a visible one.
pub fn project_day<'a>(
    date: NaiveDate,
    rules: &'a [RecurringTaskRule],
    schedules: &'a [CycleSchedule],
    granularity: Granularity,
    policy: OverlapPolicy,
) -> DayAnnotations<'a> {
    let icons: Vec<&Icon> = schedules
        .iter()
        .filter(|s| s.visibility.shows(granularity))
        .filter_map(|s| match_schedule(date, s))
        .collect();

    DayAnnotations {
        date,
        repeating_task_matches: match_recurring_tasks(date, rules),
        schedule_icons: policy.resolve(icons),
    }
}

/// [`project_day`] for every date in `range`, ascending.
pub fn project_range<'a>(
    range: DateRange,
    rules: &'a [RecurringTaskRule],
    schedules: &'a [CycleSchedule],
    granularity: Granularity,
    policy: OverlapPolicy,
) -> Vec<DayAnnotations<'a>> {
    range
        .iter()
        .map(|date| project_day(date, rules, schedules, granularity, policy))
        .collect()
}
