//! Assertions on [`LocalTime`] subjects.
//!
//! Local time is not one of the seven primary families, but it is the
//! continuation target of `to_have_time_component` and carries the full set
//! of time-field assertions.

use crate::values::LocalTime;

use super::engine::{AbsentStyle, TemporalValue};
use super::fields::time_field_assertions;

impl TemporalValue for LocalTime {
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

time_field_assertions!(LocalTime);
