//! # timecheck
//!
//! A fluent assertion library for calendar-aware date and time values.
//!
//! This library provides an expectation-style API for asserting on temporal
//! values inside test suites, with human-readable failure diagnostics. It
//! can be used with Rust's native `#[test]` framework.
//!
//! Seven value families are covered: [`Instant`], [`LocalDate`],
//! [`LocalDateTime`], [`OffsetDateTime`], [`OffsetTime`], [`Period`], and
//! [`ZonedDateTime`]. Date-bearing values carry their calendar system as
//! part of their identity, so two dates with identical printed fields under
//! different calendars are not equal.
//!
//! ## Quick Start
//!
//! ```rust
//! use timecheck::{expect, CalendarSystem, LocalDate};
//!
//! # fn main() -> Result<(), timecheck::ValueError> {
//! let date = LocalDate::iso(2020, 1, 1)?;
//!
//! expect("start date", date)
//!     .to_have_year(2020)
//!     .and()
//!     .to_be_in_calendar(CalendarSystem::Iso);
//! # Ok(())
//! # }
//! ```
//!
//! ## Chaining and `which`
//!
//! Every successful assertion returns a continuation. `and()` keeps
//! asserting on the same subject; shape assertions like
//! `to_have_date_component()` expose a component of the subject, and
//! `which()` reads the validated value.
//!
//! ```rust
//! use timecheck::{expect, LocalDateTime};
//!
//! # fn main() -> Result<(), timecheck::ValueError> {
//! let meeting = LocalDateTime::iso(2020, 6, 10, 14, 30, 0)?;
//!
//! let date = *expect("meeting", meeting)
//!     .to_have_hour(14)
//!     .and()
//!     .to_have_date_component()
//!     .which();
//! assert_eq!(date.day(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! ## Optional subjects
//!
//! Absence is a first-class state. Equality assertions compare it
//! structurally; every other assertion fails on an absent subject and names
//! it `<null>` in the message.
//!
//! ```rust
//! use timecheck::{expect_opt, LocalDate};
//!
//! let missing: Option<LocalDate> = None;
//! expect_opt("end date", missing).to_be_opt(None);
//! ```

pub mod assert;
pub mod values;

// Assertion entry points and engine types
pub use assert::{
    expect, expect_opt, AbsentStyle, AbsolutePosition, Continuation, Expectation, Failure,
    PreconditionError, Subject, TemporalValue,
};

// Value families
pub use values::{
    CalendarSystem, DayOfWeek, Duration, Instant, LocalDate, LocalDateTime, LocalTime, Offset,
    OffsetDateTime, OffsetTime, Period, ValueError, ZonedDateTime,
};
