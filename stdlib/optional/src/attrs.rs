//! Attribute-set adapters.
//!
//! An attribute set is the configuration language's string-keyed record.
//! These helpers move between attribute sets and optionals: looking a key up
//! yields an optional, and an optional can become a zero- or one-entry set
//! that is merged into a larger one.
//!
//! ```
//! use cfg_optional::attrs::{make_attr_set, merge, AttrSet};
//! use cfg_optional::{create, empty};
//!
//! let mut person = AttrSet::new();
//! person.insert("name".to_string(), "Bob".to_string());
//!
//! let person = merge(person, make_attr_set("age", create("30".to_string())));
//! let person = merge(person, make_attr_set("city", empty()));
//! assert_eq!(person.len(), 2);
//! ```

use crate::optional::Optional;
use std::collections::BTreeMap;

/// A string-keyed record, ordered by key.
pub type AttrSet<V> = BTreeMap<String, V>;

/// Look up `key`, cloning the value if present.
pub fn get_attr<V: Clone>(key: &str, attrs: &AttrSet<V>) -> Optional<V> {
    get_attr_ref(key, attrs).map(V::clone)
}

/// Look up `key` without cloning.
#[inline]
pub fn get_attr_ref<'a, V>(key: &str, attrs: &'a AttrSet<V>) -> Optional<&'a V> {
    attrs.get(key).into()
}

/// `{key: v}` if `optional` holds `v`, otherwise the empty set.
pub fn make_attr_set<V>(key: impl Into<String>, optional: Optional<V>) -> AttrSet<V> {
    optional.case_of(AttrSet::new(), |value| {
        AttrSet::from([(key.into(), value)])
    })
}

/// Right-biased union: keys in `overlay` replace those in `base`.
pub fn merge<V>(mut base: AttrSet<V>, overlay: AttrSet<V>) -> AttrSet<V> {
    base.extend(overlay);
    base
}
