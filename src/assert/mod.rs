//! Fluent assertion API for calendar-aware date and time values.
//!
//! This module provides the subject wrapper, the assertion engine, and the
//! per-family assertion methods. Assertions evaluate immediately and panic
//! on failure with a precisely templated message; a successful assertion
//! returns a [`Continuation`] so further assertions can be chained with
//! `and()` or the validated value read with `which()`.
//!
//! # Example
//!
//! ```rust,ignore
//! use timecheck::{expect, CalendarSystem, LocalDate};
//!
//! let date = LocalDate::iso(2020, 1, 1)?;
//!
//! expect("start date", date)
//!     .to_have_year(2020)
//!     .and()
//!     .to_be_in_calendar(CalendarSystem::Iso);
//! ```

mod engine;
mod fields;
pub(crate) mod format;
mod instant;
mod local_date;
mod local_date_time;
mod local_time;
mod offset_date_time;
mod offset_time;
mod period;
mod subject;
mod zoned_date_time;

pub use engine::{
    expect, expect_opt, AbsentStyle, AbsolutePosition, Continuation, Expectation, Failure,
    TemporalValue,
};
pub use subject::{PreconditionError, Subject};

#[cfg(test)]
mod tests;
