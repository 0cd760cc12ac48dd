//! Assertions on [`Period`] subjects.
//!
//! Equality normalizes the fixed-length fields to an absolute tick count, so
//! a period of 24 hours equals a period of one day. Field assertions do the
//! opposite and compare the raw, unnormalized field values. Tick and
//! nanosecond counts are `i64` fields and render with thousands grouping.

use crate::values::{Duration, Period};

use super::engine::{AbsentStyle, Continuation, Expectation, TemporalValue};
use super::format::grouped;

impl TemporalValue for Period {
    /// Calendar-relative fields (years, months) compare field-wise; the
    /// fixed-length remainder compares by normalized absolute length.
    fn family_eq(&self, other: &Self) -> bool {
        self.years == other.years
            && self.months == other.months
            && self.normalized_ticks() == other.normalized_ticks()
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn equality_absent_style() -> AbsentStyle {
        AbsentStyle::Found
    }

    fn field_absent_style() -> AbsentStyle {
        AbsentStyle::Found
    }
}

fn count(n: i64, unit: &str) -> String {
    if n == 1 || n == -1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn count_grouped(n: i64, unit: &str) -> String {
    if n == 1 || n == -1 {
        format!("{} {unit}", grouped(n))
    } else {
        format!("{} {unit}s", grouped(n))
    }
}

impl Expectation<Period> {
    /// Assert the raw years field.
    pub fn to_have_years(self, years: i32) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count(years.into(), "year")),
            move |p| p.years == years,
            |p| p.years.to_string(),
        )
    }

    /// Assert the raw months field.
    pub fn to_have_months(self, months: i32) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count(months.into(), "month")),
            move |p| p.months == months,
            |p| p.months.to_string(),
        )
    }

    /// Assert the raw weeks field.
    pub fn to_have_weeks(self, weeks: i32) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count(weeks.into(), "week")),
            move |p| p.weeks == weeks,
            |p| p.weeks.to_string(),
        )
    }

    /// Assert the raw days field.
    pub fn to_have_days(self, days: i32) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count(days.into(), "day")),
            move |p| p.days == days,
            |p| p.days.to_string(),
        )
    }

    /// Assert the raw hours field.
    pub fn to_have_hours(self, hours: i64) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count(hours, "hour")),
            move |p| p.hours == hours,
            |p| p.hours.to_string(),
        )
    }

    /// Assert the raw minutes field.
    pub fn to_have_minutes(self, minutes: i64) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count(minutes, "minute")),
            move |p| p.minutes == minutes,
            |p| p.minutes.to_string(),
        )
    }

    /// Assert the raw seconds field.
    pub fn to_have_seconds(self, seconds: i64) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count(seconds, "second")),
            move |p| p.seconds == seconds,
            |p| p.seconds.to_string(),
        )
    }

    /// Assert the raw milliseconds field.
    pub fn to_have_milliseconds(self, milliseconds: i64) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count(milliseconds, "millisecond")),
            move |p| p.milliseconds == milliseconds,
            |p| p.milliseconds.to_string(),
        )
    }

    /// Assert the raw ticks field.
    pub fn to_have_ticks(self, ticks: i64) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count_grouped(ticks, "tick")),
            move |p| p.ticks == ticks,
            |p| grouped(p.ticks),
        )
    }

    /// Assert the raw nanoseconds field.
    pub fn to_have_nanoseconds(self, nanoseconds: i64) -> Continuation<Period> {
        self.check_field(
            format!("have {}", count_grouped(nanoseconds, "nanosecond")),
            move |p| p.nanoseconds == nanoseconds,
            |p| grouped(p.nanoseconds),
        )
    }

    /// Assert every field is zero.
    pub fn to_be_zero(self) -> Continuation<Period> {
        self.check_field("be zero".to_string(), |p| p.is_zero(), |p| p.to_string())
    }

    /// Assert equality against an absolute [`Duration`]: the period's
    /// fixed-length fields are normalized to an absolute length first. A
    /// period carrying years or months never equals a duration.
    pub fn to_be_duration(self, expected: Duration) -> Continuation<Period> {
        self.check_field(
            format!("be a duration of {expected}"),
            move |p| p.to_duration() == Some(expected),
            |p| p.to_string(),
        )
    }
}
