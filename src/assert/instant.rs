//! Assertions on [`Instant`] subjects.

use crate::values::{Duration, Instant};

use super::engine::{AbsentStyle, AbsolutePosition, Continuation, Expectation, TemporalValue};

impl TemporalValue for Instant {
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

impl AbsolutePosition for Instant {
    fn position(&self) -> i128 {
        i128::from(self.unix_nanos())
    }
}

impl Expectation<Instant> {
    /// Assert the subject lies within `tolerance` of `expected`, both ends
    /// inclusive.
    pub fn to_be_close_to(self, expected: Instant, tolerance: Duration) -> Continuation<Instant> {
        self.check_field(
            format!("be within {tolerance} of {expected}"),
            move |v| (*v - expected).abs() <= tolerance,
            |v| v.to_string(),
        )
    }
}
