//! The `Optional` type and its core combinators.
//!
//! Every combinator here is layered on [`Optional::case_of`], the single
//! eliminator. `bind` is `case_of(empty, f)`, `map` is `bind` followed by
//! `create`, and the conveniences below are written the same way.
//!
//! # Example
//!
//! ```
//! use cfg_optional::{create, empty, Optional};
//!
//! fn safe_divide(a: i64, b: i64) -> Optional<i64> {
//!     if b == 0 { empty() } else { create(a / b) }
//! }
//!
//! let result = create(4)
//!     .bind(|b| safe_divide(20, b))
//!     .bind(|b| safe_divide(5, b));
//! assert_eq!(result, create(1));
//! ```

use crate::error::{OptionalError, OptionalResult};
use std::fmt;
use tracing::debug;

/// Zero or one value of type `T`.
///
/// `Absent` orders before any `Present` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// Exactly one value.
    Present(T),
}

impl<T> Optional<T> {
    /// The absent optional, for any element type.
    pub const EMPTY: Self = Optional::Absent;

    /// Wrap a value.
    #[inline]
    pub const fn create(value: T) -> Self {
        Optional::Present(value)
    }

    /// The absent optional. Same as [`Optional::EMPTY`].
    #[inline]
    pub const fn empty() -> Self {
        Optional::Absent
    }

    /// Eliminate the optional: apply `f` to the payload, or return `default`.
    ///
    /// `default` is evaluated by the caller before the call. `f` runs at most
    /// once, and only when a value is present.
    #[inline]
    pub fn case_of<R, F>(self, default: R, f: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => default,
        }
    }

    /// Borrow the payload, if any.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// True iff a value is present.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.as_ref().case_of(false, |_| true)
    }

    /// True iff no value is present.
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.has_value()
    }

    /// Extract the payload.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::EmptyOptional`] if no value is present.
    pub fn value(self) -> OptionalResult<T> {
        let result = self.case_of(Err(OptionalError::EmptyOptional), Ok);
        if let Err(err) = &result {
            debug!(%err, "extraction from absent optional");
        }
        result
    }

    /// Monadic bind.
    #[inline]
    pub fn bind<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        self.case_of(Optional::EMPTY, f)
    }

    /// Map a function over the payload.
    ///
    /// Functor instance.
    #[inline]
    pub fn map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        self.bind(|value| Optional::create(f(value)))
    }

    /// Get the payload or a default (`fromMaybe`).
    #[inline]
    pub fn from_optional(self, default: T) -> T {
        self.case_of(default, |value| value)
    }

    /// Keep this optional if present, otherwise take `other`.
    ///
    /// This is the `<|>` operation from Alternative.
    #[inline]
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        self.case_of(other, Optional::create)
    }

    /// Keep the payload only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|value| {
            if predicate(&value) {
                Optional::create(value)
            } else {
                Optional::EMPTY
            }
        })
    }

    /// Convert into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.case_of(None, Some)
    }
}

impl<T> Optional<Optional<T>> {
    /// Flatten one level of nesting.
    #[inline]
    pub fn join(self) -> Optional<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

/// Absent optionals print as `null`, the configuration language's spelling.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => value.fmt(f),
            Optional::Absent => f.write_str("null"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// ============================================================
// Free-function forms
// ============================================================

/// Wrap a value in a present optional.
#[inline]
pub const fn create<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// The absent optional, with the element type inferred from context.
#[inline]
pub const fn empty<T>() -> Optional<T> {
    Optional::Absent
}

/// True iff `optional` holds a value.
#[inline]
pub fn has_value<T>(optional: &Optional<T>) -> bool {
    optional.has_value()
}

/// Extract the payload of `optional`.
///
/// # Errors
///
/// Returns [`OptionalError::EmptyOptional`] if `optional` is absent.
#[inline]
pub fn value<T>(optional: Optional<T>) -> OptionalResult<T> {
    optional.value()
}

/// Apply `f` to the payload of `optional`, or return `default`.
#[inline]
pub fn case_of<T, R, F>(default: R, f: F, optional: Optional<T>) -> R
where
    F: FnOnce(T) -> R,
{
    optional.case_of(default, f)
}

/// Chain a computation that may itself produce no value.
#[inline]
pub fn bind<T, R, F>(f: F, optional: Optional<T>) -> Optional<R>
where
    F: FnOnce(T) -> Optional<R>,
{
    optional.bind(f)
}

/// Transform the payload of `optional`, keeping its shape.
#[inline]
pub fn map<T, R, F>(f: F, optional: Optional<T>) -> Optional<R>
where
    F: FnOnce(T) -> R,
{
    optional.map(f)
}
