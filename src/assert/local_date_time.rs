//! Assertions on [`LocalDateTime`] subjects.

use crate::values::{LocalDate, LocalDateTime, LocalTime};

use super::engine::{AbsentStyle, AbsolutePosition, Continuation, Expectation, TemporalValue};
use super::fields::{calendar_assertion, date_field_assertions, time_field_assertions};

impl TemporalValue for LocalDateTime {
    fn family_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.to_string()
    }

    // Unlike the local-date family, this family's equality messages repeat
    // the subject name when it is absent.
    fn equality_absent_style() -> AbsentStyle {
        AbsentStyle::Named
    }

    fn field_absent_style() -> AbsentStyle {
        AbsentStyle::Named
    }
}

impl AbsolutePosition for LocalDateTime {
    fn position(&self) -> i128 {
        self.position_nanos()
    }
}

date_field_assertions!(LocalDateTime);
time_field_assertions!(LocalDateTime);
calendar_assertion!(LocalDateTime);

impl Expectation<LocalDateTime> {
    /// Assert the subject's ordinal day within its year, read under the
    /// subject's own calendar.
    pub fn to_have_day_of_year(self, day_of_year: u16) -> Continuation<LocalDateTime> {
        self.check_field(
            format!("have day of year {day_of_year}"),
            move |v| v.day_of_year() == day_of_year,
            |v| v.day_of_year().to_string(),
        )
    }

    /// Assert equality against a chrono
    /// [`NaiveDateTime`](chrono::NaiveDateTime), which is interpreted as an
    /// ISO-calendar value before comparing.
    pub fn to_be_date_time(self, expected: chrono::NaiveDateTime) -> Continuation<LocalDateTime> {
        self.to_be(LocalDateTime::from(expected))
    }

    /// Shape assertion: expose the date component for further chaining.
    pub fn to_have_date_component(self) -> Continuation<LocalDate> {
        self.project("have a date component", |v| v.date())
    }

    /// Shape assertion: expose the time-of-day component for further
    /// chaining.
    pub fn to_have_time_component(self) -> Continuation<LocalTime> {
        self.project("have a time component", |v| v.time())
    }
}
