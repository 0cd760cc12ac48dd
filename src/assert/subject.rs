//! The subject wrapper: a possibly-absent value plus its display name.

/// Error raised when a subject's value is read while absent.
///
/// This guards an engine precondition: assertion call-sites check presence
/// before reading, so hitting this through the public API indicates a bug in
/// the assertion layer itself, not a failing test.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("subject `{name}` was read while absent")]
pub struct PreconditionError {
    name: String,
}

impl PreconditionError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The value under test together with the literal name identifying it in
/// failure messages. Absence is a first-class state, not an error: every
/// assertion defines its own behavior for an absent subject.
#[derive(Debug, Clone)]
pub struct Subject<T> {
    name: String,
    value: Option<T>,
}

impl<T> Subject<T> {
    /// Wrap a present value.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    /// Wrap an optional value, preserving its presence state.
    pub fn from_option(name: impl Into<String>, value: Option<T>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Wrap an absent subject.
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The display name used verbatim in failure messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the value. Call-sites must check [`Subject::is_present`] first.
    pub fn value(&self) -> Result<&T, PreconditionError> {
        self.value
            .as_ref()
            .ok_or_else(|| PreconditionError::new(&self.name))
    }

    pub(crate) fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }
}
