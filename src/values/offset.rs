//! UTC offsets and offset-carrying date/time values.

use super::calendar::{CalendarSystem, DayOfWeek};
use super::date::{LocalDate, LocalDateTime, LocalTime};
use super::{ValueError, NANOS_PER_SECOND};

const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// A fixed offset from UTC, in seconds, within +/-18 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    seconds: i32,
}

impl Offset {
    pub const UTC: Offset = Offset { seconds: 0 };

    pub fn from_seconds(seconds: i32) -> Result<Self, ValueError> {
        if seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(ValueError::OffsetOutOfRange { seconds });
        }
        Ok(Self { seconds })
    }

    pub fn from_hours(hours: i32) -> Result<Self, ValueError> {
        Self::from_seconds(hours * 3600)
    }

    pub fn from_hours_minutes(hours: i32, minutes: i32) -> Result<Self, ValueError> {
        let sign = if hours < 0 { -1 } else { 1 };
        Self::from_seconds(hours * 3600 + sign * minutes * 60)
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.seconds == 0 {
            return write!(f, "Z");
        }
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 3600, abs / 60 % 60)?;
        if abs % 60 != 0 {
            write!(f, ":{:02}", abs % 60)?;
        }
        Ok(())
    }
}

/// A local date and time together with a fixed UTC offset.
///
/// Equality is pairwise: same local value (calendar included) and same
/// offset. Two values naming the same instant through different offsets are
/// not equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetDateTime {
    local: LocalDateTime,
    offset: Offset,
}

impl OffsetDateTime {
    pub fn new(local: LocalDateTime, offset: Offset) -> Self {
        Self { local, offset }
    }

    pub fn local_date_time(&self) -> LocalDateTime {
        self.local
    }

    pub fn date(&self) -> LocalDate {
        self.local.date()
    }

    pub fn time(&self) -> LocalTime {
        self.local.time()
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn calendar(&self) -> CalendarSystem {
        self.local.calendar()
    }

    pub fn year(&self) -> i32 {
        self.local.year()
    }

    pub fn month(&self) -> u8 {
        self.local.month()
    }

    pub fn day(&self) -> u8 {
        self.local.day()
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        self.local.day_of_week()
    }

    pub fn hour(&self) -> i32 {
        self.local.hour()
    }

    pub fn minute(&self) -> i32 {
        self.local.minute()
    }

    pub fn second(&self) -> i32 {
        self.local.second()
    }

    pub fn millisecond(&self) -> i32 {
        self.local.millisecond()
    }

    pub fn nanosecond_of_second(&self) -> i32 {
        self.local.nanosecond_of_second()
    }

    pub fn nanosecond_of_day(&self) -> i64 {
        self.local.nanosecond_of_day()
    }

    pub fn tick_of_day(&self) -> i64 {
        self.local.tick_of_day()
    }

    /// Absolute position: UTC nanoseconds since the Unix epoch.
    pub(crate) fn position_nanos(&self) -> i128 {
        self.local.position_nanos() - i128::from(self.offset.seconds) * i128::from(NANOS_PER_SECOND)
    }
}

impl std::fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.date().write_fields(f)?;
        write!(f, "T{}{}", self.time(), self.offset)?;
        self.date().write_calendar_suffix(f)
    }
}

/// A time-of-day together with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetTime {
    time: LocalTime,
    offset: Offset,
}

impl OffsetTime {
    pub fn new(time: LocalTime, offset: Offset) -> Self {
        Self { time, offset }
    }

    pub fn time(&self) -> LocalTime {
        self.time
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn hour(&self) -> i32 {
        self.time.hour()
    }

    pub fn minute(&self) -> i32 {
        self.time.minute()
    }

    pub fn second(&self) -> i32 {
        self.time.second()
    }

    pub fn millisecond(&self) -> i32 {
        self.time.millisecond()
    }

    pub fn nanosecond_of_second(&self) -> i32 {
        self.time.nanosecond_of_second()
    }

    pub fn nanosecond_of_day(&self) -> i64 {
        self.time.nanosecond_of_day()
    }

    pub fn tick_of_day(&self) -> i64 {
        self.time.tick_of_day()
    }

    /// Position of this time on the UTC day, for ordering.
    pub(crate) fn position_nanos(&self) -> i128 {
        i128::from(self.time.nanosecond_of_day())
            - i128::from(self.offset.seconds) * i128::from(NANOS_PER_SECOND)
    }
}

impl std::fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}
