//! Categorical selectors with the "all" sentinel.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Spelling of the sentinel in dropdown values and on the command line.
pub const ALL: &str = "all";

/// A selector value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selector `{input}`: {reason}")]
pub struct SelectorError {
    /// The rejected input.
    pub input: String,
    /// Why the underlying value did not parse.
    pub reason: String,
}

/// One categorical filter criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    /// No constraint.
    All,
    /// Only records whose field equals (or contains) this value.
    Only(T),
}

impl<T> Selector<T> {
    /// Whether this selector imposes no constraint.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Selector<T> {
    /// Match a scalar field.
    pub fn matches(&self, field: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => value == field,
        }
    }

    /// Match an optional field. A missing field only matches [`Selector::All`].
    pub fn matches_opt(&self, field: Option<&T>) -> bool {
        match (self, field) {
            (Self::All, _) => true,
            (Self::Only(value), Some(field)) => value == field,
            (Self::Only(_), None) => false,
        }
    }

    /// Match an array-valued field by containment.
    pub fn contained_in(&self, field: &[T]) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => field.contains(value),
        }
    }
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<T> FromStr for Selector<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }

        trimmed
            .parse::<T>()
            .map(Self::Only)
            .map_err(|e| SelectorError {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}
