use std::fmt;

/// Why a resolver fell back to its default instead of using the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackReason {
    /// Nothing was supplied.
    Missing,
    /// A name was supplied that no table knows.
    Unrecognized,
    /// A number was supplied outside the accepted range.
    OutOfRange,
    /// A number was expected but the input did not parse.
    NotNumeric,
    /// The input is meaningless for the resolved sort (e.g. a time window on `new`).
    NotApplicable,
    /// The cursor does not point at a live record.
    StaleCursor,
    /// Both `before` and `after` were supplied.
    AmbiguousCursor,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::Missing => "missing",
            FallbackReason::Unrecognized => "unrecognized",
            FallbackReason::OutOfRange => "out_of_range",
            FallbackReason::NotNumeric => "not_numeric",
            FallbackReason::NotApplicable => "not_applicable",
            FallbackReason::StaleCursor => "stale_cursor",
            FallbackReason::AmbiguousCursor => "ambiguous_cursor",
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a loosely-typed request parameter.
///
/// Bad pagination input never fails a request; it degrades to a default.
/// The `Defaulted` arm keeps that degradation observable.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Resolved(T),
    Defaulted(T, FallbackReason),
}

impl<T> Resolution<T> {
    pub fn value(&self) -> &T {
        match self {
            Resolution::Resolved(value) | Resolution::Defaulted(value, _) => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Resolution::Resolved(value) | Resolution::Defaulted(value, _) => value,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Resolution::Defaulted(..))
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Resolution::Resolved(_) => None,
            Resolution::Defaulted(_, reason) => Some(*reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Resolution::Resolved(value) => Resolution::Resolved(f(value)),
            Resolution::Defaulted(value, reason) => Resolution::Defaulted(f(value), reason),
        }
    }
}
