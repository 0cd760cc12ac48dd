//! Assertions on [`OffsetDateTime`] subjects.

use crate::values::{LocalDate, LocalDateTime, LocalTime, Offset, OffsetDateTime};

use super::engine::{AbsentStyle, AbsolutePosition, Continuation, Expectation, TemporalValue};
use super::fields::{calendar_assertion, date_field_assertions, time_field_assertions};

impl TemporalValue for OffsetDateTime {
    fn family_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.to_string()
    }

    // Both message templates in this family say "found <null>".
    fn equality_absent_style() -> AbsentStyle {
        AbsentStyle::Found
    }

    fn field_absent_style() -> AbsentStyle {
        AbsentStyle::Found
    }
}

impl AbsolutePosition for OffsetDateTime {
    fn position(&self) -> i128 {
        self.position_nanos()
    }
}

date_field_assertions!(OffsetDateTime);
time_field_assertions!(OffsetDateTime);
calendar_assertion!(OffsetDateTime);

impl Expectation<OffsetDateTime> {
    /// Assert the subject's UTC offset.
    pub fn to_have_offset(self, offset: Offset) -> Continuation<OffsetDateTime> {
        self.check_field(
            format!("have offset {offset}"),
            move |v| v.offset() == offset,
            |v| v.offset().to_string(),
        )
    }

    /// Shape assertion: expose the local date-time for further chaining.
    pub fn to_have_local_date_time(self) -> Continuation<LocalDateTime> {
        self.project("have a local date-time component", |v| v.local_date_time())
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
