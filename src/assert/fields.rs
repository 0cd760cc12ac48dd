//! Field-assertion call-sites shared across the date/time families.
//!
//! Each family exposes the same mechanical `to_have_*` methods over its own
//! accessors; the macros here stamp them out per family so the phrase
//! wording and formatting rules stay identical everywhere.

/// Date-field assertions for any family exposing `year`/`month`/`day`/
/// `day_of_week` accessors.
macro_rules! date_field_assertions {
    ($ty:ty) => {
        impl crate::assert::Expectation<$ty> {
            /// Assert the subject's year, read under its own calendar.
            pub fn to_have_year(self, year: i32) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have year {year}"),
                    move |v| v.year() == year,
                    |v| v.year().to_string(),
                )
            }

            /// Assert the subject's month, read under its own calendar.
            pub fn to_have_month(self, month: u8) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have month {month}"),
                    move |v| v.month() == month,
                    |v| v.month().to_string(),
                )
            }

            /// Assert the subject's day of month, read under its own calendar.
            pub fn to_have_day(self, day: u8) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have day {day}"),
                    move |v| v.day() == day,
                    |v| v.day().to_string(),
                )
            }

            /// Assert the subject's day of the week.
            pub fn to_have_day_of_week(
                self,
                day_of_week: crate::values::DayOfWeek,
            ) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have day of week {day_of_week}"),
                    move |v| v.day_of_week() == day_of_week,
                    |v| v.day_of_week().to_string(),
                )
            }
        }
    };
}

/// Time-field assertions for any family exposing the time-of-day accessors.
/// Tick-of-day and nanosecond-of-day are `i64` fields and render with
/// thousands grouping; the rest render plainly.
macro_rules! time_field_assertions {
    ($ty:ty) => {
        impl crate::assert::Expectation<$ty> {
            /// Assert the subject's hour of day.
            pub fn to_have_hour(self, hour: i32) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have hour {hour}"),
                    move |v| v.hour() == hour,
                    |v| v.hour().to_string(),
                )
            }

            /// Assert the subject's minute of hour.
            pub fn to_have_minute(self, minute: i32) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have minute {minute}"),
                    move |v| v.minute() == minute,
                    |v| v.minute().to_string(),
                )
            }

            /// Assert the subject's second of minute.
            pub fn to_have_second(self, second: i32) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have second {second}"),
                    move |v| v.second() == second,
                    |v| v.second().to_string(),
                )
            }

            /// Assert the subject's millisecond of second.
            pub fn to_have_millisecond(
                self,
                millisecond: i32,
            ) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have millisecond {millisecond}"),
                    move |v| v.millisecond() == millisecond,
                    |v| v.millisecond().to_string(),
                )
            }

            /// Assert the subject's nanosecond within the second.
            pub fn to_have_nanosecond_of_second(
                self,
                nanosecond: i32,
            ) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have nanosecond of second {nanosecond}"),
                    move |v| v.nanosecond_of_second() == nanosecond,
                    |v| v.nanosecond_of_second().to_string(),
                )
            }

            /// Assert the subject's tick within the day.
            pub fn to_have_tick_of_day(self, tick: i64) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("have tick of day {}", crate::assert::format::grouped(tick)),
                    move |v| v.tick_of_day() == tick,
                    |v| crate::assert::format::grouped(v.tick_of_day()),
                )
            }

            /// Assert the subject's nanosecond within the day.
            pub fn to_have_nanosecond_of_day(
                self,
                nanosecond: i64,
            ) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!(
                        "have nanosecond of day {}",
                        crate::assert::format::grouped(nanosecond)
                    ),
                    move |v| v.nanosecond_of_day() == nanosecond,
                    |v| crate::assert::format::grouped(v.nanosecond_of_day()),
                )
            }
        }
    };
}

/// Calendar-membership assertion for any date-bearing family.
macro_rules! calendar_assertion {
    ($ty:ty) => {
        impl crate::assert::Expectation<$ty> {
            /// Assert the subject's calendar system. A difference solely in
            /// calendar is enough to fail, even when the printed fields
            /// coincide.
            pub fn to_be_in_calendar(
                self,
                calendar: crate::values::CalendarSystem,
            ) -> crate::assert::Continuation<$ty> {
                self.check_field(
                    format!("be in the {calendar} calendar"),
                    move |v| v.calendar() == calendar,
                    |v| format!("the {} calendar", v.calendar()),
                )
            }
        }
    };
}

pub(crate) use calendar_assertion;
pub(crate) use date_field_assertions;
pub(crate) use time_field_assertions;
