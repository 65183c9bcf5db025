//! List adapters.
//!
//! Besides `head`, this module holds the list-shaped helpers from
//! `Data.Maybe` and the codec for the configuration language's own encoding
//! of an optional: a list of length zero or one.

use crate::error::{OptionalError, OptionalResult};
use crate::optional::Optional;
use tracing::debug;

/// The first element of `items`, if any.
///
/// Only the first element is pulled from the iterator, so infinite and lazy
/// sequences are fine.
#[inline]
pub fn head<I: IntoIterator>(items: I) -> Optional<I::Item> {
    items.into_iter().next().into()
}

/// Keep the present payloads, dropping absent entries (`catMaybes`).
pub fn cat_optionals<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = Optional<T>>,
{
    items.into_iter().flatten().collect()
}

/// Map `f` over `items`, keeping only present results (`mapMaybe`).
pub fn map_optional<A, B, F, I>(f: F, items: I) -> Vec<B>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Optional<B>,
{
    items.into_iter().flat_map(f).collect()
}

/// All payloads if every element is present, otherwise absent.
///
/// Stops consuming at the first absent element.
pub fn sequence<T, I>(items: I) -> Optional<Vec<T>>
where
    I: IntoIterator<Item = Optional<T>>,
{
    items
        .into_iter()
        .map(Optional::into_option)
        .collect::<Option<Vec<T>>>()
        .into()
}

/// Decode the list encoding: `[]` is absent, `[x]` is `x`.
///
/// # Errors
///
/// Returns [`OptionalError::InvalidRepresentation`] for longer lists.
pub fn from_list<T>(items: Vec<T>) -> OptionalResult<Optional<T>> {
    let len = items.len();
    if len > 1 {
        debug!(len, "rejecting list-encoded optional");
        return Err(OptionalError::InvalidRepresentation { len });
    }
    Ok(head(items))
}

/// Encode as a list of length zero or one.
pub fn to_list<T>(optional: Optional<T>) -> Vec<T> {
    optional.case_of(Vec::new(), |value| vec![value])
}
