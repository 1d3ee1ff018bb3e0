//! Calendar field extraction and visible date ranges.

use chrono::{Datelike, Duration, NaiveDate};

use crate::schema::Granularity;

/// The calendar fields recurrence anchors are compared against.
///
/// This is the only place weekday numbering is normalized: callers hand in a
/// plain date and never deal with Sunday-first or zero-based weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// 1 = Monday .. 7 = Sunday.
    pub weekday: i32,
    /// 1..=31.
    pub day_of_month: i32,
    /// 1-based ordinal within the year, 1..=366.
    pub day_of_year: i32,
}

impl CalendarDay {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            weekday: date.weekday().number_from_monday() as i32,
            day_of_month: date.day() as i32,
            day_of_year: date.ordinal() as i32,
        }
    }
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of dates in the range; zero when `end < start`.
    pub fn len(&self) -> usize {
        usize::try_from(days_between(self.start, self.end) + 1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the range, ascending.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// The dates a calendar view shows around `selected` at the given zoom level.
///
/// - week: Monday through Sunday of the week containing `selected`
/// - month: first through last day of its month
/// - year: January 1 through December 31 of its year
pub fn visible_range(granularity: Granularity, selected: NaiveDate) -> DateRange {
    match granularity {
        Granularity::Week => {
            let offset = i64::from(selected.weekday().num_days_from_monday());
            let start = selected
                .checked_sub_signed(Duration::days(offset))
                .unwrap_or(NaiveDate::MIN);
            let end = start
                .checked_add_signed(Duration::days(6))
                .unwrap_or(NaiveDate::MAX);
            DateRange::new(start, end)
        }
        Granularity::Month => {
            let start = selected.with_day(1).unwrap_or(selected);
            DateRange::new(start, last_day_of_month(selected))
        }
        Granularity::Year => {
            let start = selected.with_ordinal(1).unwrap_or(selected);
            let end = NaiveDate::from_ymd_opt(selected.year(), 12, 31).unwrap_or(selected);
            DateRange::new(start, end)
        }
    }
}

/// Blank cells before day 1 in a Monday-first month grid.
pub fn leading_blank_days(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_monday())
        .unwrap_or(0)
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}
