//! Cycle schedule checks: date range, cycle length, visibility.

use crate::schema::CycleSchedule;

use super::ValidationResult;

pub(super) fn validate_range(schedule: &CycleSchedule, result: &mut ValidationResult) {
    if schedule.from > schedule.to {
        result.error(
            "to",
            format!(
                "Schedule ends ({}) before it starts ({})",
                schedule.to, schedule.from
            ),
        );
    }
}

pub(super) fn validate_cycle(schedule: &CycleSchedule, result: &mut ValidationResult) {
    if schedule.cycle_length() == 0 {
        result.error(
            "workDays",
            "workDays + restDays must be at least 1",
        );
        return;
    }

    if schedule.work_days == 0 {
        result.warn("workDays", "No work days: every date shows the rest icon");
    } else if schedule.rest_days == 0 {
        result.warn("restDays", "No rest days: every date shows the work icon");
    }
}

pub(super) fn validate_visibility(schedule: &CycleSchedule, result: &mut ValidationResult) {
    let vis = &schedule.visibility;
    if !vis.year && !vis.month && !vis.week {
        result.warn(
            "showIcons",
            "Icons are hidden in every view; the schedule will never be shown",
        );
    }
}
