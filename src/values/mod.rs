//! Calendar-aware date and time value types.
//!
//! These are the seven value families the assertion layer operates on:
//! [`Instant`], [`LocalDate`], [`LocalDateTime`], [`OffsetDateTime`],
//! [`OffsetTime`], [`Period`], and [`ZonedDateTime`], plus the supporting
//! types [`LocalTime`], [`Offset`], [`Duration`], [`CalendarSystem`], and
//! [`DayOfWeek`].
//!
//! Date-bearing values carry their calendar system as part of their identity:
//! two dates with the same printed fields under different calendars are not
//! equal. Internally every date is an absolute day number (days since
//! 1970-01-01) plus a calendar, so reinterpreting the same day under another
//! calendar is cheap and exact.

mod calendar;
mod date;
mod instant;
mod offset;
mod period;
mod zoned;

pub use calendar::{CalendarSystem, DayOfWeek};
pub use date::{LocalDate, LocalDateTime, LocalTime};
pub use instant::{Duration, Instant};
pub use offset::{Offset, OffsetDateTime, OffsetTime};
pub use period::Period;
pub use zoned::ZonedDateTime;

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_TICK: i64 = 100;
pub(crate) const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;
pub(crate) const TICKS_PER_SECOND: i64 = 10_000_000;

/// Error type for value construction issues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("month {month} is out of range for year {year} in the {calendar} calendar")]
    MonthOutOfRange {
        calendar: CalendarSystem,
        year: i32,
        month: u8,
    },

    #[error("day {day} is out of range for {year}-{month:02} in the {calendar} calendar")]
    DayOutOfRange {
        calendar: CalendarSystem,
        year: i32,
        month: u8,
        day: u8,
    },

    #[error("time {hour:02}:{minute:02}:{second:02} is out of range")]
    TimeOutOfRange { hour: u8, minute: u8, second: u8 },

    #[error("nanosecond-of-day {nanos} is out of range")]
    NanosOutOfRange { nanos: i64 },

    #[error("offset of {seconds} seconds is outside the +/-18 hour range")]
    OffsetOutOfRange { seconds: i32 },

    #[error("instant is outside the representable nanosecond range")]
    InstantOutOfRange,
}
