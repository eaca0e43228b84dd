//! Multi-sequence `zip` operations for [`Iterator`][core::iter::Iterator].
//!
//! The purpose of this library is to serve as a staging ground for what
//! eventually may become the multi-sequence `zip` operation provided by the
//! stdlib. See the [`iter`] submodule for more.
//!
//! # Operations
//!
//! This library provides the following operations on arrays, vecs, and tuples:
//!
//! - [`iter::Zip`]: ‘Zips up’ multiple sequences into a single sequence of tuples.
//!
//! # Examples
//!
//! Iterate over multiple heterogenous sequences in lockstep:
//! ```rust
//! use multi_zip::prelude::*;
//!
//! let word = "four";
//! let integers = 1..=4;
//! let doubles = [1.0, 2.0, 3.0, 4.0];
//!
//! let mut out = String::new();
//! for (ch, int, double) in (word.chars(), integers, doubles).zip() {
//!     out += &format!("{ch} - {int} - {double}\n");
//! }
//! assert_eq!(out.lines().next(), Some("f - 1 - 1"));
//! ```
//!
//! If the zipped sequences are of different lengths, the resulting sequence
//! is as long as the shortest input:
//! ```rust
//! use multi_zip::prelude::*;
//!
//! let words = ["one", "two", "three", "four"];
//! let naturals = 1..;
//!
//! let zipped: Vec<_> = (words, naturals).zip().into_iter().collect();
//! assert_eq!(zipped, [("one", 1), ("two", 2), ("three", 3), ("four", 4)]);
//! ```
//!
//! # Limitations
//!
//! Because of orphan rules this library can't implement everything the stdlib
//! can. The missing implementations are:
//!
//! - `impl<T..> IntoIterator for (T..)`
//!
//! This would enable tuples of sequences to directly be passed to `for` loops
//! to be iterated over using `zip` semantics. Instead, "zip" has to be spelled
//! as a verb: a [`Zip`][iter::Zip] trait implemented on the containers
//! themselves.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod utils;

/// The multi-zip prelude.
pub mod prelude {
    pub use super::iter::Zip as _;
}

pub mod iter;

/// Helper functions and types for tuples.
pub mod tuple {
    pub use crate::iter::zip::tuple::{
        Zip0, Zip1, Zip10, Zip11, Zip12, Zip2, Zip3, Zip4, Zip5, Zip6, Zip7, Zip8, Zip9, ZipIter0,
        ZipIter1, ZipIter10, ZipIter11, ZipIter12, ZipIter2, ZipIter3, ZipIter4, ZipIter5,
        ZipIter6, ZipIter7, ZipIter8, ZipIter9,
    };
}

/// Helper functions and types for fixed-length arrays.
pub mod array {
    pub use crate::iter::zip::array::{Zip, ZipIter};
}

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
#[cfg(feature = "alloc")]
pub mod vec {
    pub use crate::iter::zip::vec::{Zip, ZipIter};
}
