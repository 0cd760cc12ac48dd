//! Absolute points in time and absolute lengths of time.

use std::ops::{Add, Sub};

use super::calendar::CalendarSystem;
use super::{ValueError, NANOS_PER_DAY, NANOS_PER_SECOND, NANOS_PER_TICK};

/// An absolute point on the global time line, independent of calendar and
/// time zone. Nanosecond resolution, stored relative to the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    nanos: i64,
}

impl Instant {
    pub const UNIX_EPOCH: Instant = Instant { nanos: 0 };

    pub fn from_unix_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self {
            nanos: seconds * NANOS_PER_SECOND,
        }
    }

    /// Point in time for the given UTC calendar fields (ISO calendar).
    pub fn from_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ValueError> {
        let dt = super::LocalDateTime::new(
            CalendarSystem::Iso,
            year,
            month,
            day,
            hour,
            minute,
            second,
        )?;
        let nanos =
            i64::try_from(dt.position_nanos()).map_err(|_| ValueError::InstantOutOfRange)?;
        Ok(Self { nanos })
    }

    pub fn unix_nanos(&self) -> i64 {
        self.nanos
    }

    /// Ticks (100 nanosecond units) since the Unix epoch.
    pub fn unix_ticks(&self) -> i64 {
        self.nanos.div_euclid(NANOS_PER_TICK)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.nanos.div_euclid(NANOS_PER_DAY);
        let nanos_of_day = self.nanos.rem_euclid(NANOS_PER_DAY);
        let (y, m, d) = CalendarSystem::Iso.epoch_days_to_fields(days);
        let seconds = nanos_of_day / NANOS_PER_SECOND;
        write!(
            f,
            "{y:04}-{m:02}-{d:02}T{:02}:{:02}:{:02}",
            seconds / 3600,
            seconds / 60 % 60,
            seconds % 60
        )?;
        let frac = nanos_of_day % NANOS_PER_SECOND;
        if frac != 0 {
            let frac = format!("{frac:09}");
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }
        write!(f, "Z")
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        Instant {
            nanos: self.nanos + rhs.nanos,
        }
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;

    fn sub(self, rhs: Duration) -> Instant {
        Instant {
            nanos: self.nanos - rhs.nanos,
        }
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, rhs: Instant) -> Duration {
        Duration {
            nanos: self.nanos - rhs.nanos,
        }
    }
}

impl TryFrom<chrono::DateTime<chrono::Utc>> for Instant {
    type Error = ValueError;

    /// Fails when the chrono value lies outside the representable
    /// nanosecond range (roughly years 1677 through 2262).
    fn try_from(dt: chrono::DateTime<chrono::Utc>) -> Result<Self, ValueError> {
        let nanos = dt
            .timestamp_nanos_opt()
            .ok_or(ValueError::InstantOutOfRange)?;
        Ok(Self { nanos })
    }
}

/// An absolute length of time, independent of any calendar.
///
/// This is the normalization target for [`Period`](super::Period) equality:
/// a period that carries no calendar-relative fields reduces to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration { nanos: 0 };

    pub fn from_days(days: i64) -> Self {
        Self {
            nanos: days * NANOS_PER_DAY,
        }
    }

    pub fn from_hours(hours: i64) -> Self {
        Self {
            nanos: hours * 3600 * NANOS_PER_SECOND,
        }
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            nanos: minutes * 60 * NANOS_PER_SECOND,
        }
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            nanos: seconds * NANOS_PER_SECOND,
        }
    }

    pub fn from_milliseconds(millis: i64) -> Self {
        Self {
            nanos: millis * 1_000_000,
        }
    }

    pub fn from_ticks(ticks: i64) -> Self {
        Self {
            nanos: ticks * NANOS_PER_TICK,
        }
    }

    pub fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    pub fn total_nanos(&self) -> i64 {
        self.nanos
    }

    /// Whole ticks (100 nanosecond units), truncated toward zero.
    pub fn total_ticks(&self) -> i64 {
        self.nanos / NANOS_PER_TICK
    }

    pub fn abs(&self) -> Duration {
        Duration {
            nanos: self.nanos.abs(),
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.nanos < 0 {
            write!(f, "-")?;
        }
        let nanos = self.nanos.unsigned_abs();
        let seconds = nanos / NANOS_PER_SECOND as u64;
        let frac = nanos % NANOS_PER_SECOND as u64;
        write!(f, "{seconds}")?;
        if frac != 0 {
            let frac = format!("{frac:09}");
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }
        write!(f, "s")
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration {
            nanos: self.nanos + rhs.nanos,
        }
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration {
            nanos: self.nanos - rhs.nanos,
        }
    }
}
