//! Assertions on [`LocalDate`] subjects.

use crate::values::LocalDate;

use super::engine::{AbsentStyle, AbsolutePosition, Continuation, Expectation, TemporalValue};
use super::fields::{calendar_assertion, date_field_assertions};

impl TemporalValue for LocalDate {
    fn family_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.to_string()
    }

    // This family's equality messages say "found <null>" without repeating
    // the subject name; field messages repeat it.
    fn equality_absent_style() -> AbsentStyle {
        AbsentStyle::Found
    }

    fn field_absent_style() -> AbsentStyle {
        AbsentStyle::Named
    }
}

impl AbsolutePosition for LocalDate {
    fn position(&self) -> i128 {
        i128::from(self.epoch_days())
    }
}

date_field_assertions!(LocalDate);
calendar_assertion!(LocalDate);

impl Expectation<LocalDate> {
    /// Assert the subject's ordinal day within its year, read under the
    /// subject's own calendar.
    pub fn to_have_day_of_year(self, day_of_year: u16) -> Continuation<LocalDate> {
        self.check_field(
            format!("have day of year {day_of_year}"),
            move |v| v.day_of_year() == day_of_year,
            |v| v.day_of_year().to_string(),
        )
    }

    /// Assert equality against a chrono [`NaiveDate`](chrono::NaiveDate),
    /// which is interpreted as an ISO-calendar date before comparing.
    pub fn to_be_date(self, expected: chrono::NaiveDate) -> Continuation<LocalDate> {
        self.to_be(LocalDate::from(expected))
    }
}
