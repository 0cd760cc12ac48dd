//! The single evaluation/reporting path used by every concrete assertion.
//!
//! Every assertion method reduces to the same shape: look at the subject's
//! presence, run a predicate over the value, and either hand back a
//! [`Continuation`] carrying the validated value or raise a [`Failure`]
//! rendered from one of two canonical templates:
//!
//! - present subject: `Expected {name} to {phrase}, but found {actual}.`
//!   (negated assertions say `Did not expect ...`)
//! - absent subject: `Expected {name} to {phrase}, but {name} was <null>.`
//!   or `Expected {name} to {phrase}, but found <null>.` depending on the
//!   call-site family ([`AbsentStyle`]).
//!
//! The engine never retries, never logs, never swallows: it is a pure
//! evaluate-or-raise function.

use std::cmp::Ordering;

use super::subject::Subject;

/// A failed assertion: an immutable record of the fully rendered message.
///
/// Raising a failure aborts the assertion expression by panicking with the
/// message, which is what `#[should_panic(expected = "...")]` tests pin.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The rendered failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Which of the two absent-subject message templates a call-site renders.
///
/// The two phrasings coexist deliberately; each assertion family pins one of
/// them (see the per-family [`TemporalValue`] impls).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentStyle {
    /// `"Expected {name} to {phrase}, but {name} was <null>."`
    Named,
    /// `"Expected {name} to {phrase}, but found <null>."`
    Found,
}

pub(crate) fn failure_expected(name: &str, phrase: &str, actual: &str) -> Failure {
    Failure::new(format!("Expected {name} to {phrase}, but found {actual}."))
}

pub(crate) fn failure_did_not_expect(name: &str, phrase: &str, actual: &str) -> Failure {
    Failure::new(format!(
        "Did not expect {name} to {phrase}, but found {actual}."
    ))
}

pub(crate) fn failure_absent(style: AbsentStyle, name: &str, phrase: &str) -> Failure {
    match style {
        AbsentStyle::Named => Failure::new(format!(
            "Expected {name} to {phrase}, but {name} was <null>."
        )),
        AbsentStyle::Found => {
            Failure::new(format!("Expected {name} to {phrase}, but found <null>."))
        }
    }
}

/// Raise a failure, aborting the current assertion expression.
pub(crate) fn raise(failure: Failure) -> ! {
    panic!("{failure}")
}

/// Per-family equality and rendering, the adapter the generic engine is
/// parameterized by.
pub trait TemporalValue: Clone {
    /// Family equality; calendar-aware for date-bearing families.
    fn family_eq(&self, other: &Self) -> bool;

    /// The rendering used inside failure messages.
    fn render(&self) -> String;

    /// Absent-subject template used by this family's equality assertions.
    fn equality_absent_style() -> AbsentStyle {
        AbsentStyle::Found
    }

    /// Absent-subject template used by this family's field and shape
    /// assertions.
    fn field_absent_style() -> AbsentStyle {
        AbsentStyle::Named
    }
}

/// Position on the absolute time line, for families with a strict total
/// order. Comparison assertions compare positions, never calendar fields.
pub trait AbsolutePosition: TemporalValue {
    fn position(&self) -> i128;
}

/// Create an expectation over a present value.
///
/// This is the entry point for the fluent assertion API. The name is used
/// verbatim in failure messages.
///
/// # Example
///
/// ```rust,ignore
/// use timecheck::{expect, LocalDate};
///
/// let date = LocalDate::iso(2020, 1, 1)?;
/// expect("start date", date).to_have_year(2020).and().to_have_month(1);
/// ```
pub fn expect<T>(name: impl Into<String>, value: T) -> Expectation<T> {
    Expectation {
        subject: Subject::new(name, value),
    }
}

/// Create an expectation over an optional value, preserving absence.
///
/// Equality assertions treat absence structurally (`None` equals `None`);
/// every other assertion fails on an absent subject.
pub fn expect_opt<T>(name: impl Into<String>, value: Option<T>) -> Expectation<T> {
    Expectation {
        subject: Subject::from_option(name, value),
    }
}

/// An assertion waiting to happen: a subject plus the fluent methods that
/// evaluate predicates against it.
///
/// Assertion methods consume the expectation and either return a
/// [`Continuation`] or panic with the rendered failure message.
#[derive(Debug, Clone)]
pub struct Expectation<T> {
    subject: Subject<T>,
}

impl<T> Expectation<T> {
    /// The subject's display name.
    pub fn name(&self) -> &str {
        self.subject.name()
    }

    pub(crate) fn settle(self, verdict: Result<(), Failure>) -> Continuation<T> {
        match verdict {
            Ok(()) => Continuation {
                subject: self.subject,
            },
            Err(failure) => raise(failure),
        }
    }
}

impl<T: TemporalValue> Expectation<T> {
    /// Assert the subject equals `expected` under family equality.
    ///
    /// # Panics
    ///
    /// Panics if the subject is absent or not equal to `expected`.
    pub fn to_be(self, expected: T) -> Continuation<T> {
        let phrase = format!("be {}", expected.render());
        let verdict = match self.subject.peek() {
            Some(actual) if actual.family_eq(&expected) => Ok(()),
            Some(actual) => Err(failure_expected(
                self.subject.name(),
                &phrase,
                &actual.render(),
            )),
            None => Err(failure_absent(
                T::equality_absent_style(),
                self.subject.name(),
                &phrase,
            )),
        };
        self.settle(verdict)
    }

    /// Assert the subject equals a possibly-absent expectation.
    ///
    /// Absence is compared structurally: an absent subject equals an absent
    /// expectation, and never equals a present one.
    pub fn to_be_opt(self, expected: Option<T>) -> Continuation<T> {
        let verdict = match (self.subject.peek(), &expected) {
            (None, None) => Ok(()),
            (Some(actual), Some(expected)) if actual.family_eq(expected) => Ok(()),
            (Some(actual), Some(expected)) => Err(failure_expected(
                self.subject.name(),
                &format!("be {}", expected.render()),
                &actual.render(),
            )),
            (Some(actual), None) => Err(failure_expected(
                self.subject.name(),
                "be <null>",
                &actual.render(),
            )),
            (None, Some(expected)) => Err(failure_absent(
                T::equality_absent_style(),
                self.subject.name(),
                &format!("be {}", expected.render()),
            )),
        };
        self.settle(verdict)
    }

    /// Assert the subject does not equal `expected`.
    ///
    /// An absent subject passes: absent never equals present.
    pub fn to_not_be(self, expected: T) -> Continuation<T> {
        let verdict = match self.subject.peek() {
            Some(actual) if actual.family_eq(&expected) => Err(failure_did_not_expect(
                self.subject.name(),
                &format!("be {}", expected.render()),
                &actual.render(),
            )),
            _ => Ok(()),
        };
        self.settle(verdict)
    }

    /// Assert the subject does not equal a possibly-absent expectation.
    ///
    /// When both sides are absent the assertion fails with a fixed message
    /// that does not carry a found-value clause.
    pub fn to_not_be_opt(self, expected: Option<T>) -> Continuation<T> {
        let verdict = match (self.subject.peek(), &expected) {
            (None, None) => Err(Failure::new(format!(
                "Did not expect {} to be <null>.",
                self.subject.name()
            ))),
            (Some(actual), Some(expected)) if actual.family_eq(expected) => {
                Err(failure_did_not_expect(
                    self.subject.name(),
                    &format!("be {}", expected.render()),
                    &actual.render(),
                ))
            }
            _ => Ok(()),
        };
        self.settle(verdict)
    }

    /// Shared path for field and shape assertions: absent subjects always
    /// fail, rendered under the family's field template.
    pub(crate) fn check_field(
        self,
        phrase: String,
        predicate: impl FnOnce(&T) -> bool,
        actual: impl FnOnce(&T) -> String,
    ) -> Continuation<T> {
        let verdict = match self.subject.peek() {
            Some(value) if predicate(value) => Ok(()),
            Some(value) => Err(failure_expected(
                self.subject.name(),
                &phrase,
                &actual(value),
            )),
            None => Err(failure_absent(
                T::field_absent_style(),
                self.subject.name(),
                &phrase,
            )),
        };
        self.settle(verdict)
    }

    /// Shared path for shape assertions that expose a component of the
    /// subject: the continuation carries the projected value.
    pub(crate) fn project<U>(
        self,
        phrase: &str,
        component: impl FnOnce(&T) -> U,
    ) -> Continuation<U> {
        match self.subject.peek() {
            Some(value) => {
                let projected = component(value);
                Continuation {
                    subject: Subject::new(self.subject.name(), projected),
                }
            }
            None => raise(failure_absent(
                T::field_absent_style(),
                self.subject.name(),
                phrase,
            )),
        }
    }
}

impl<T: AbsolutePosition> Expectation<T> {
    /// Assert the subject is strictly later than `other` on the absolute
    /// time line. Equal values fail.
    pub fn to_be_greater_than(self, other: T) -> Continuation<T> {
        self.compare_position("be greater than", other, Ordering::is_gt)
    }

    /// Assert the subject is later than or equal to `other`.
    pub fn to_be_greater_than_or_equal_to(self, other: T) -> Continuation<T> {
        self.compare_position("be greater than or equal to", other, Ordering::is_ge)
    }

    /// Assert the subject is strictly earlier than `other` on the absolute
    /// time line. Equal values fail.
    pub fn to_be_less_than(self, other: T) -> Continuation<T> {
        self.compare_position("be less than", other, Ordering::is_lt)
    }

    /// Assert the subject is earlier than or equal to `other`.
    pub fn to_be_less_than_or_equal_to(self, other: T) -> Continuation<T> {
        self.compare_position("be less than or equal to", other, Ordering::is_le)
    }

    fn compare_position(
        self,
        relation: &str,
        other: T,
        accept: fn(Ordering) -> bool,
    ) -> Continuation<T> {
        let phrase = format!("{relation} {}", other.render());
        let verdict = match self.subject.peek() {
            Some(value) if accept(value.position().cmp(&other.position())) => Ok(()),
            Some(value) => Err(failure_expected(
                self.subject.name(),
                &phrase,
                &value.render(),
            )),
            None => Err(failure_absent(
                T::field_absent_style(),
                self.subject.name(),
                &phrase,
            )),
        };
        self.settle(verdict)
    }
}

/// The chainable result of a successful assertion.
///
/// Owns the value the assertion validated; [`Continuation::which`] reads it
/// and [`Continuation::and`] resumes the fluent chain on the same subject.
#[derive(Debug, Clone)]
pub struct Continuation<T> {
    subject: Subject<T>,
}

impl<T> Continuation<T> {
    /// The value the last assertion validated.
    ///
    /// # Panics
    ///
    /// Panics if the subject was absent. A continuation produced by a
    /// presence-requiring assertion always carries a value; only
    /// `to_be_opt(None)` style successes leave the subject absent.
    pub fn which(&self) -> &T {
        match self.subject.value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// The subject's display name.
    pub fn name(&self) -> &str {
        self.subject.name()
    }

    /// Continue asserting on the same subject.
    pub fn and(self) -> Expectation<T> {
        Expectation {
            subject: self.subject,
        }
    }
}
