#![deny(unsafe_op_in_unsafe_fn)]
#![deny(warnings, missing_docs, missing_debug_implementations)]
//! Enumeration of canonically equivalent strings.
//!
//! Two strings are canonically equivalent when they spell the same abstract
//! text: `"\u{00C5}"` and `"A\u{030A}"`, or `"x\u{0327}\u{0307}"` and
//! `"x\u{0307}\u{0327}"`. The `CanonicalIterator` type produces every such
//! spelling of a source string, which is what comparison, search and
//! conformance testing code needs when a single normal form is not enough.
//!
//! # How it works
//!
//! The source is canonically decomposed and cut into segments before every
//! *safe start*: a code point of combining class 0 that never occurs after
//! the first position of any canonical decomposition. Nothing equivalent can
//! reach across such a cut, so each segment is expanded on its own into the
//! closed set of its equivalent spellings, and the iterator walks the cross
//! product of those sets like an odometer.
//!
//! All of the expansion happens when the source is set. Producing each
//! string afterwards only concatenates one alternative per segment.
//!
//! ```
//! use canonstr::CanonicalIterator;
//! use std::collections::BTreeSet;
//!
//! let mut it = CanonicalIterator::new("\u{010D}\u{017E}");
//! let all = it.iter().collect::<BTreeSet<_>>();
//! assert_eq!(4, all.len());
//! assert!(all.contains("c\u{030C}\u{017E}"));
//! ```
//!
//! # Enumeration order
//!
//! The first string is always the canonical decomposition of the source.
//! Beyond that the order is not part of the contract; collect into a sorted
//! set if a stable order is needed.

pub(crate) mod tables;

pub(crate) mod permute;

pub(crate) mod segment;

pub(crate) mod closure;

pub(crate) mod canonical_iter;

pub use canonical_iter::{CanonicalIterator, Iter, Options};

pub use permute::{permute, permute_by};

pub use tables::{compose, decompose, is_safe_start, Composites};
