//! Calendar systems and field/day-number conversions.
//!
//! All calendars here are arithmetic: fields convert to and from an absolute
//! day number (days since the Unix epoch, 1970-01-01 ISO) with pure integer
//! math. The Gregorian conversions follow the standard civil-calendar
//! algorithm; Julian goes through the Julian Day Number; Coptic goes through
//! a rata-die day count.

/// A calendar system under which a date's year/month/day fields are defined.
///
/// Calendar identity is part of date equality: the same absolute day carries
/// different fields under different calendars, and even when the fields
/// happen to coincide (ISO vs Gregorian) the dates are distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarSystem {
    /// Proleptic Gregorian calendar with ISO-8601 week rules.
    Iso,
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Proleptic Julian calendar.
    Julian,
    /// Coptic calendar (12 months of 30 days plus 5 or 6 epagomenal days).
    Coptic,
}

/// Days between 0000-03-01 (civil algorithm origin) and 1970-01-01.
const CIVIL_EPOCH_SHIFT: i64 = 719_468;
/// Julian Day Number of 1970-01-01 ISO.
const UNIX_EPOCH_JDN: i64 = 2_440_588;
/// Rata die of 1970-01-01 ISO (R.D. 1 = 0001-01-01 Gregorian).
const UNIX_EPOCH_RD: i64 = 719_163;
/// Rata die of the Coptic epoch (Coptic 0001-01-01 = Julian 284-08-29).
const COPTIC_EPOCH_RD: i64 = 103_605;

impl CalendarSystem {
    /// All supported calendar systems.
    pub fn all() -> &'static [CalendarSystem] {
        &[
            CalendarSystem::Iso,
            CalendarSystem::Gregorian,
            CalendarSystem::Julian,
            CalendarSystem::Coptic,
        ]
    }

    /// Human-readable calendar name, as rendered in failure messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarSystem::Iso => "ISO",
            CalendarSystem::Gregorian => "Gregorian",
            CalendarSystem::Julian => "Julian",
            CalendarSystem::Coptic => "Coptic",
        }
    }

    /// Number of months in a year of this calendar.
    pub fn months_in_year(&self) -> u8 {
        match self {
            CalendarSystem::Coptic => 13,
            _ => 12,
        }
    }

    /// Whether `year` is a leap year in this calendar.
    pub fn is_leap_year(&self, year: i32) -> bool {
        match self {
            CalendarSystem::Iso | CalendarSystem::Gregorian => {
                year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
            }
            CalendarSystem::Julian => year.rem_euclid(4) == 0,
            CalendarSystem::Coptic => year.rem_euclid(4) == 3,
        }
    }

    /// Number of days in `month` of `year`, or `None` if the month is out of
    /// range for this calendar.
    pub fn days_in_month(&self, year: i32, month: u8) -> Option<u8> {
        if month == 0 || month > self.months_in_year() {
            return None;
        }
        let days = match self {
            CalendarSystem::Coptic => {
                if month <= 12 {
                    30
                } else if self.is_leap_year(year) {
                    6
                } else {
                    5
                }
            }
            _ => match month {
                1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
                4 | 6 | 9 | 11 => 30,
                _ => {
                    if self.is_leap_year(year) {
                        29
                    } else {
                        28
                    }
                }
            },
        };
        Some(days)
    }

    /// Convert calendar fields to an absolute day number (days since
    /// 1970-01-01). Fields must already be validated.
    pub(crate) fn fields_to_epoch_days(&self, year: i32, month: u8, day: u8) -> i64 {
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
        match self {
            CalendarSystem::Iso | CalendarSystem::Gregorian => {
                let y = y - i64::from(m <= 2);
                let era = if y >= 0 { y } else { y - 399 } / 400;
                let yoe = y - era * 400;
                let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
                let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
                era * 146_097 + doe - CIVIL_EPOCH_SHIFT
            }
            CalendarSystem::Julian => {
                let a = (14 - m) / 12;
                let y2 = y + 4800 - a;
                let m2 = m + 12 * a - 3;
                let jdn = d + (153 * m2 + 2) / 5 + 365 * y2 + y2.div_euclid(4) - 32_083;
                jdn - UNIX_EPOCH_JDN
            }
            CalendarSystem::Coptic => {
                let fixed = COPTIC_EPOCH_RD - 1
                    + 365 * (y - 1)
                    + y.div_euclid(4)
                    + 30 * (m - 1)
                    + d;
                fixed - UNIX_EPOCH_RD
            }
        }
    }

    /// Convert an absolute day number back to calendar fields.
    pub(crate) fn epoch_days_to_fields(&self, days: i64) -> (i32, u8, u8) {
        match self {
            CalendarSystem::Iso | CalendarSystem::Gregorian => {
                let z = days + CIVIL_EPOCH_SHIFT;
                let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
                let doe = z - era * 146_097;
                let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
                let y = yoe + era * 400;
                let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
                let mp = (5 * doy + 2) / 153;
                let d = doy - (153 * mp + 2) / 5 + 1;
                let m = if mp < 10 { mp + 3 } else { mp - 9 };
                ((y + i64::from(m <= 2)) as i32, m as u8, d as u8)
            }
            CalendarSystem::Julian => {
                let c = days + UNIX_EPOCH_JDN + 32_082;
                let d1 = (4 * c + 3).div_euclid(1461);
                let e = c - (1461 * d1).div_euclid(4);
                let m1 = (5 * e + 2).div_euclid(153);
                let day = e - (153 * m1 + 2) / 5 + 1;
                let month = m1 + 3 - 12 * (m1 / 10);
                let year = d1 - 4800 + m1 / 10;
                (year as i32, month as u8, day as u8)
            }
            CalendarSystem::Coptic => {
                let fixed = days + UNIX_EPOCH_RD;
                let year = (4 * (fixed - COPTIC_EPOCH_RD) + 1463).div_euclid(1461);
                let year_start = self.fields_to_epoch_days(year as i32, 1, 1) + UNIX_EPOCH_RD;
                let month = (fixed - year_start).div_euclid(30) + 1;
                let month_start =
                    self.fields_to_epoch_days(year as i32, month as u8, 1) + UNIX_EPOCH_RD;
                let day = fixed - month_start + 1;
                (year as i32, month as u8, day as u8)
            }
        }
    }
}

impl std::fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of the week, ISO numbered (Monday = 1 through Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first.
    pub fn all() -> &'static [DayOfWeek] {
        &[
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ]
    }

    /// Full English name, as rendered in failure messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// ISO day number, Monday = 1 through Sunday = 7.
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Day of week for an absolute day number (1970-01-01 was a Thursday).
    pub(crate) fn from_epoch_days(days: i64) -> DayOfWeek {
        Self::all()[(days + 3).rem_euclid(7) as usize]
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
