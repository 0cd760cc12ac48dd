//! Local (zone-less) date and time values.

use chrono::{Datelike, Timelike};

use super::calendar::{CalendarSystem, DayOfWeek};
use super::{ValueError, NANOS_PER_DAY, NANOS_PER_SECOND, NANOS_PER_TICK};

/// A date on a calendar, with no time-of-day and no time zone.
///
/// Stored as an absolute day number plus the calendar under which its fields
/// are read. Equality requires both the same calendar and the same day;
/// ordering by absolute position is available through the assertion layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalDate {
    calendar: CalendarSystem,
    epoch_days: i64,
}

impl LocalDate {
    /// Create a date from fields in the given calendar.
    pub fn new(
        calendar: CalendarSystem,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<Self, ValueError> {
        let days_in_month = calendar
            .days_in_month(year, month)
            .ok_or(ValueError::MonthOutOfRange {
                calendar,
                year,
                month,
            })?;
        if day == 0 || day > days_in_month {
            return Err(ValueError::DayOutOfRange {
                calendar,
                year,
                month,
                day,
            });
        }
        Ok(Self {
            calendar,
            epoch_days: calendar.fields_to_epoch_days(year, month, day),
        })
    }

    /// Create an ISO-calendar date.
    pub fn iso(year: i32, month: u8, day: u8) -> Result<Self, ValueError> {
        Self::new(CalendarSystem::Iso, year, month, day)
    }

    /// Create a date from an absolute day number (days since 1970-01-01).
    pub fn from_epoch_days(calendar: CalendarSystem, epoch_days: i64) -> Self {
        Self {
            calendar,
            epoch_days,
        }
    }

    /// The same absolute day, with its fields read under another calendar.
    pub fn with_calendar(self, calendar: CalendarSystem) -> Self {
        Self { calendar, ..self }
    }

    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    /// Days since 1970-01-01; the calendar-independent position of this date.
    pub fn epoch_days(&self) -> i64 {
        self.epoch_days
    }

    pub fn year(&self) -> i32 {
        self.fields().0
    }

    pub fn month(&self) -> u8 {
        self.fields().1
    }

    pub fn day(&self) -> u8 {
        self.fields().2
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_epoch_days(self.epoch_days)
    }

    /// Ordinal day within the year, under this date's own calendar.
    pub fn day_of_year(&self) -> u16 {
        let year_start = self.calendar.fields_to_epoch_days(self.year(), 1, 1);
        (self.epoch_days - year_start + 1) as u16
    }

    pub fn plus_days(self, days: i64) -> Self {
        Self {
            epoch_days: self.epoch_days + days,
            ..self
        }
    }

    /// Combine with a time-of-day.
    pub fn at(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime { date: self, time }
    }

    fn fields(&self) -> (i32, u8, u8) {
        self.calendar.epoch_days_to_fields(self.epoch_days)
    }

    pub(crate) fn write_fields(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.fields();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }

    pub(crate) fn write_calendar_suffix(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        if self.calendar != CalendarSystem::Iso {
            write!(f, " ({})", self.calendar)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for LocalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_fields(f)?;
        self.write_calendar_suffix(f)
    }
}

impl From<chrono::NaiveDate> for LocalDate {
    /// Interprets the chrono date as an ISO-calendar date.
    fn from(date: chrono::NaiveDate) -> Self {
        // chrono counts days from 0001-01-01 CE (day 1); 1970-01-01 is 719163.
        Self::from_epoch_days(
            CalendarSystem::Iso,
            i64::from(date.num_days_from_ce()) - 719_163,
        )
    }
}

/// A time-of-day with nanosecond resolution, no date and no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalTime {
    nanos_of_day: i64,
}

impl LocalTime {
    pub const MIDNIGHT: LocalTime = LocalTime { nanos_of_day: 0 };

    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ValueError> {
        Self::with_nanos(hour, minute, second, 0)
    }

    pub fn with_nanos(hour: u8, minute: u8, second: u8, nanos: u32) -> Result<Self, ValueError> {
        if hour > 23 || minute > 59 || second > 59 || nanos > 999_999_999 {
            return Err(ValueError::TimeOutOfRange {
                hour,
                minute,
                second,
            });
        }
        let seconds = i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second);
        Ok(Self {
            nanos_of_day: seconds * NANOS_PER_SECOND + i64::from(nanos),
        })
    }

    pub fn from_nanos_of_day(nanos: i64) -> Result<Self, ValueError> {
        if !(0..NANOS_PER_DAY).contains(&nanos) {
            return Err(ValueError::NanosOutOfRange { nanos });
        }
        Ok(Self { nanos_of_day: nanos })
    }

    pub fn hour(&self) -> i32 {
        (self.nanos_of_day / (3600 * NANOS_PER_SECOND)) as i32
    }

    pub fn minute(&self) -> i32 {
        (self.nanos_of_day / (60 * NANOS_PER_SECOND) % 60) as i32
    }

    pub fn second(&self) -> i32 {
        (self.nanos_of_day / NANOS_PER_SECOND % 60) as i32
    }

    pub fn millisecond(&self) -> i32 {
        (self.nanos_of_day / 1_000_000 % 1000) as i32
    }

    pub fn nanosecond_of_second(&self) -> i32 {
        (self.nanos_of_day % NANOS_PER_SECOND) as i32
    }

    pub fn nanosecond_of_day(&self) -> i64 {
        self.nanos_of_day
    }

    pub fn tick_of_day(&self) -> i64 {
        self.nanos_of_day / NANOS_PER_TICK
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;
        let nanos = self.nanosecond_of_second();
        if nanos != 0 {
            let frac = format!("{nanos:09}");
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

/// A date and time-of-day on a calendar, with no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {
    pub fn new(
        calendar: CalendarSystem,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ValueError> {
        Ok(LocalDate::new(calendar, year, month, day)?.at(LocalTime::new(hour, minute, second)?))
    }

    pub fn iso(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ValueError> {
        Self::new(CalendarSystem::Iso, year, month, day, hour, minute, second)
    }

    pub fn date(&self) -> LocalDate {
        self.date
    }

    pub fn time(&self) -> LocalTime {
        self.time
    }

    pub fn calendar(&self) -> CalendarSystem {
        self.date.calendar()
    }

    /// The same absolute moment, with date fields read under another calendar.
    pub fn with_calendar(self, calendar: CalendarSystem) -> Self {
        Self {
            date: self.date.with_calendar(calendar),
            ..self
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u8 {
        self.date.month()
    }

    pub fn day(&self) -> u8 {
        self.date.day()
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        self.date.day_of_week()
    }

    pub fn day_of_year(&self) -> u16 {
        self.date.day_of_year()
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

    /// Calendar-independent position: nanoseconds since 1970-01-01T00:00:00.
    pub(crate) fn position_nanos(&self) -> i128 {
        i128::from(self.date.epoch_days()) * i128::from(NANOS_PER_DAY)
            + i128::from(self.time.nanosecond_of_day())
    }
}

impl std::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.date.write_fields(f)?;
        write!(f, "T{}", self.time)?;
        self.date.write_calendar_suffix(f)
    }
}

impl From<chrono::NaiveDateTime> for LocalDateTime {
    /// Interprets the chrono date-time as an ISO-calendar value.
    ///
    /// Chrono represents a leap second by a nanosecond field of 1e9 or more;
    /// this value model has no leap seconds, so such an input folds into the
    /// last representable nanosecond of the same second.
    fn from(dt: chrono::NaiveDateTime) -> Self {
        let date = LocalDate::from(dt.date());
        let time = dt.time();
        let nanos = i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND
            + i64::from(time.nanosecond().min(999_999_999));
        date.at(LocalTime {
            nanos_of_day: nanos,
        })
    }
}
