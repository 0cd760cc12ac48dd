//! Assertions on [`OffsetTime`] subjects.

use crate::values::{LocalTime, Offset, OffsetTime};

use super::engine::{AbsentStyle, AbsolutePosition, Continuation, Expectation, TemporalValue};
use super::fields::time_field_assertions;

impl TemporalValue for OffsetTime {
    fn family_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.to_string()
    }

    // The mirror image of the offset date-time family: equality repeats the
    // subject name, field assertions do not.
    fn equality_absent_style() -> AbsentStyle {
        AbsentStyle::Named
    }

    fn field_absent_style() -> AbsentStyle {
        AbsentStyle::Found
    }
}

impl AbsolutePosition for OffsetTime {
    fn position(&self) -> i128 {
        self.position_nanos()
    }
}

time_field_assertions!(OffsetTime);

impl Expectation<OffsetTime> {
    /// Assert the subject's UTC offset.
    pub fn to_have_offset(self, offset: Offset) -> Continuation<OffsetTime> {
        self.check_field(
            format!("have offset {offset}"),
            move |v| v.offset() == offset,
            |v| v.offset().to_string(),
        )
    }

    /// Shape assertion: expose the time-of-day component for further
    /// chaining.
    pub fn to_have_time_component(self) -> Continuation<LocalTime> {
        self.project("have a time component", |v| v.time())
    }
}
