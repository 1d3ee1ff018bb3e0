//! Rule and schedule matching against a single date.

use chrono::NaiveDate;

use crate::schema::{CycleSchedule, Icon, RecurrenceType, RecurringTaskRule};

use super::calendar::{days_between, CalendarDay};

/// Rules whose recurrence falls on `date`, in their original order.
///
/// Out-of-domain anchors and unknown recurrence types never match. Empty
/// text is not checked here.
pub fn match_recurring_tasks<'a>(
    date: NaiveDate,
    rules: &'a [RecurringTaskRule],
) -> Vec<&'a RecurringTaskRule> {
    if rules.is_empty() {
        return Vec::new();
    }
    let day = CalendarDay::of(date);
    rules.iter().filter(|rule| rule_matches(rule, &day)).collect()
}

fn rule_matches(rule: &RecurringTaskRule, day: &CalendarDay) -> bool {
    match rule.recurrence_type {
        RecurrenceType::Weekly => rule.anchor == day.weekday,
        RecurrenceType::Monthly => rule.anchor == day.day_of_month,
        // Plain ordinal: after Feb 29 leap and non-leap years differ by one.
        RecurrenceType::Yearly => rule.anchor == day.day_of_year,
        RecurrenceType::Unknown(_) => false,
    }
}

/// The work or rest icon `schedule` puts on `date`.
///
/// `None` outside `[from, to]` and for a zero-length cycle.
pub fn match_schedule(date: NaiveDate, schedule: &CycleSchedule) -> Option<&Icon> {
    if !schedule.contains(date) {
        return None;
    }
    let cycle_length = i64::try_from(schedule.cycle_length()).ok()?;
    if cycle_length == 0 {
        return None;
    }

    let day_index = days_between(schedule.from, date);
    let position = day_index.rem_euclid(cycle_length);
    if position < i64::from(schedule.work_days) {
        Some(&schedule.work_icon)
    } else {
        Some(&schedule.rest_icon)
    }
}
