//! Date-time values carrying a time-zone identity.

use super::calendar::{CalendarSystem, DayOfWeek};
use super::date::{LocalDate, LocalDateTime, LocalTime};
use super::instant::Instant;
use super::offset::Offset;
use super::ValueError;

/// A local date and time in a named time zone, resolved to a fixed offset.
///
/// The zone identity is part of the value: equality compares zone id, offset,
/// and local value. No time-zone database is consulted; the caller supplies
/// the offset in effect at the given local time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZonedDateTime {
    local: LocalDateTime,
    offset: Offset,
    zone: String,
}

impl ZonedDateTime {
    pub fn new(local: LocalDateTime, offset: Offset, zone: impl Into<String>) -> Self {
        Self {
            local,
            offset,
            zone: zone.into(),
        }
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

    pub fn zone(&self) -> &str {
        &self.zone
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

    /// The absolute instant this value names.
    ///
    /// Fails when that instant lies outside the representable nanosecond
    /// range.
    pub fn to_instant(&self) -> Result<Instant, ValueError> {
        let nanos =
            i64::try_from(self.position_nanos()).map_err(|_| ValueError::InstantOutOfRange)?;
        Ok(Instant::from_unix_nanos(nanos))
    }

    pub(crate) fn position_nanos(&self) -> i128 {
        self.local.position_nanos()
            - i128::from(self.offset.seconds()) * i128::from(super::NANOS_PER_SECOND)
    }
}

impl std::fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.date().write_fields(f)?;
        write!(f, "T{}{} ({})", self.time(), self.offset, self.zone)?;
        self.date().write_calendar_suffix(f)
    }
}
