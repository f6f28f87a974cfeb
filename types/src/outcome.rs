//! Recovered parse results.
//!
//! Some configuration inputs are never allowed to fail construction: a bad
//! value is replaced by a default and the failure is only reported. This type
//! keeps the failure visible to the caller instead of swallowing it.

/// Result of parsing a value that always yields something usable.
#[derive(Debug)]
pub enum ParseOutcome<T, E> {
    /// The input parsed cleanly.
    Parsed(T),
    /// The input was rejected; `value` is the substituted default.
    Defaulted { value: T, reason: E },
}

impl<T, E> ParseOutcome<T, E> {
    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            Self::Parsed(value) | Self::Defaulted { value, .. } => value,
        }
    }

    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Parsed(value) | Self::Defaulted { value, .. } => value,
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&E> {
        match self {
            Self::Parsed(_) => None,
            Self::Defaulted { reason, .. } => Some(reason),
        }
    }

    #[must_use]
    pub const fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }

    /// Split into the usable value and the recovered failure, if any.
    pub fn into_parts(self) -> (T, Option<E>) {
        match self {
            Self::Parsed(value) => (value, None),
            Self::Defaulted { value, reason } => (value, Some(reason)),
        }
    }
}
