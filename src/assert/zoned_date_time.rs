//! Assertions on [`ZonedDateTime`] subjects.

use crate::values::{LocalDate, LocalDateTime, LocalTime, Offset, ZonedDateTime};

use super::engine::{AbsentStyle, AbsolutePosition, Continuation, Expectation, TemporalValue};
use super::fields::{calendar_assertion, date_field_assertions, time_field_assertions};

impl TemporalValue for ZonedDateTime {
    fn family_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn equality_absent_style() -> AbsentStyle {
        AbsentStyle::Found
    }

    fn field_absent_style() -> AbsentStyle {
        AbsentStyle::Named
    }
}

impl AbsolutePosition for ZonedDateTime {
    fn position(&self) -> i128 {
        self.position_nanos()
    }
}

date_field_assertions!(ZonedDateTime);
time_field_assertions!(ZonedDateTime);
calendar_assertion!(ZonedDateTime);

impl Expectation<ZonedDateTime> {
    /// Assert the subject's time-zone identity.
    pub fn to_be_in_zone(self, zone: &str) -> Continuation<ZonedDateTime> {
        let zone = zone.to_string();
        self.check_field(
            format!("be in zone {zone}"),
            |v| v.zone() == zone,
            |v| format!("zone {}", v.zone()),
        )
    }

    /// Assert the subject's resolved UTC offset.
    pub fn to_have_offset(self, offset: Offset) -> Continuation<ZonedDateTime> {
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
