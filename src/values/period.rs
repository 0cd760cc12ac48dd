//! Calendar-relative spans of time.

use super::instant::Duration;
use super::TICKS_PER_SECOND;

const TICKS_PER_DAY: i64 = 86_400 * TICKS_PER_SECOND;

/// A span of time expressed in calendar fields.
///
/// Fields are held exactly as given, never normalized against each other:
/// a period of 24 hours keeps `hours == 24` and `days == 0`. Years and
/// months are calendar-relative (their absolute length depends on where the
/// span is anchored); everything from weeks down has a fixed absolute
/// length and can be reduced to a [`Duration`] via [`Period::to_duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub weeks: i32,
    pub days: i32,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub ticks: i64,
    pub nanoseconds: i64,
}

impl Period {
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
        ticks: 0,
        nanoseconds: 0,
    };

    pub fn from_years(years: i32) -> Self {
        Self {
            years,
            ..Self::ZERO
        }
    }

    pub fn from_months(months: i32) -> Self {
        Self {
            months,
            ..Self::ZERO
        }
    }

    pub fn from_weeks(weeks: i32) -> Self {
        Self {
            weeks,
            ..Self::ZERO
        }
    }

    pub fn from_days(days: i32) -> Self {
        Self { days, ..Self::ZERO }
    }

    pub fn from_hours(hours: i64) -> Self {
        Self {
            hours,
            ..Self::ZERO
        }
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes,
            ..Self::ZERO
        }
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            ..Self::ZERO
        }
    }

    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self {
            milliseconds,
            ..Self::ZERO
        }
    }

    pub fn from_ticks(ticks: i64) -> Self {
        Self {
            ticks,
            ..Self::ZERO
        }
    }

    pub fn from_nanoseconds(nanoseconds: i64) -> Self {
        Self {
            nanoseconds,
            ..Self::ZERO
        }
    }

    /// Whether every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Whether this period carries calendar-relative fields (years, months)
    /// that have no fixed absolute length.
    pub fn has_calendar_fields(&self) -> bool {
        self.years != 0 || self.months != 0
    }

    /// Total absolute length of the fixed-length fields, in ticks.
    /// Sub-tick nanoseconds truncate toward zero.
    pub fn normalized_ticks(&self) -> i64 {
        (i64::from(self.weeks) * 7 + i64::from(self.days)) * TICKS_PER_DAY
            + self.hours * 3600 * TICKS_PER_SECOND
            + self.minutes * 60 * TICKS_PER_SECOND
            + self.seconds * TICKS_PER_SECOND
            + self.milliseconds * 10_000
            + self.ticks
            + self.nanoseconds / 100
    }

    /// Reduce to an absolute duration. `None` when years or months are
    /// present, since those have no anchor-independent length.
    pub fn to_duration(&self) -> Option<Duration> {
        if self.has_calendar_fields() {
            None
        } else {
            Some(Duration::from_ticks(self.normalized_ticks()))
        }
    }
}

impl std::fmt::Display for Period {
    /// Round-trip style rendering: uppercase suffixes for the date fields and
    /// seconds, lowercase `s`/`t`/`n` for milliseconds, ticks, nanoseconds.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "P0D");
        }
        write!(f, "P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.weeks != 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        let time_part = self.hours != 0
            || self.minutes != 0
            || self.seconds != 0
            || self.milliseconds != 0
            || self.ticks != 0
            || self.nanoseconds != 0;
        if time_part {
            write!(f, "T")?;
            if self.hours != 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes != 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0 {
                write!(f, "{}S", self.seconds)?;
            }
            if self.milliseconds != 0 {
                write!(f, "{}s", self.milliseconds)?;
            }
            if self.ticks != 0 {
                write!(f, "{}t", self.ticks)?;
            }
            if self.nanoseconds != 0 {
                write!(f, "{}n", self.nanoseconds)?;
            }
        }
        Ok(())
    }
}
