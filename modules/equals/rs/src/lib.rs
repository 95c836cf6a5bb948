//! Equality of values and collections under caller-supplied checks.
//!
//! Each operation takes an [`EqualsCheck`] that replaces the intrinsic `PartialEq` of the
//! compared values, e.g. to compare records by a subset of their fields. Any
//! `Fn(&T, &T) -> bool` is a valid check. Checks are passed as `Option`s, an absent check is
//! reported as [`InvalidArgument`] before anything is compared.
//!
//! ```
//! use std::collections::HashSet;
//! use biobit_equals_rs::{by_key, set_equals};
//!
//! // (contig, position) pairs compared by contig only
//! let a = HashSet::from([(1u8, 100), (2, 200)]);
//! let b = HashSet::from([(2u8, 250), (1, 150)]);
//! assert!(set_equals(&a, &b, Some(by_key(|x: &(u8, i32)| x.0))).unwrap());
//! ```

pub use check::{by_key, ByKey, EqualsCheck, Intrinsic};
pub use element::element_equals;
pub use error::InvalidArgument;
pub use map::{map_equals, Mapping};
pub use sequence::{nullable_sequence_equals, sequence_equals};
pub use set::set_equals;

mod check;
mod element;
mod error;
mod map;
mod sequence;
mod set;
