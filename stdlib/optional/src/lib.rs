//! Optional values for configuration-language libraries.
//!
//! [`Optional<T>`] holds zero or one value. It replaces `null` and sentinel
//! checks with a small set of combinators:
//!
//! - construction: [`create`], [`empty`]
//! - inspection and extraction: [`has_value`], [`value`]
//! - elimination: [`case_of`]
//! - functor and monad: [`map`], [`bind`]
//! - adapters: [`attrs::get_attr`], [`attrs::make_attr_set`], [`list::head`]
//!
//! All operations are pure.
//!
//! # Example
//!
//! ```
//! use cfg_optional::attrs::{get_attr, make_attr_set, merge, AttrSet};
//! use cfg_optional::list::head;
//! use cfg_optional::{case_of, create};
//!
//! let ports = vec![8080, 8081];
//! let port = head(ports);
//! assert_eq!(port, create(8080));
//!
//! let config = merge(AttrSet::new(), make_attr_set("port", port));
//! let rendered = case_of("unset".to_string(), |p: i32| p.to_string(), get_attr("port", &config));
//! assert_eq!(rendered, "8080");
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize `Optional<T>` as a list of length zero or one.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod attrs;
pub mod error;
pub mod list;
mod optional;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{OptionalError, OptionalResult};
pub use optional::{bind, case_of, create, empty, has_value, map, value, Optional};
