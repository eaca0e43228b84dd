//! Composable external iteration.
//!
//! # Examples
//!
//! Zip multiple sequences to step through their elements in lockstep,
//! stopping as soon as the shortest input runs out:
//!
//! ```
//! use multi_zip::prelude::*;
//!
//! let a = [1, 2, 3];
//! let b = [4, 5];
//! let c = [7, 8, 9];
//!
//! let mut total = 0;
//! for (x, y, z) in (a, b, c).zip() {
//!     total += x + y + z;
//! }
//! assert_eq!(total, (1 + 4 + 7) + (2 + 5 + 8));
//! ```
//!
//! # Semantics
//!
//! Zipping produces one output element per synchronized round of pulls, and
//! ends the moment any input ends. Inputs are always pulled in construction
//! order, so in the round that ends the sequence every input left of the
//! exhausted one has been advanced once more; those extra elements are
//! dropped.
//!
//! | Name  | Return signature        | When does it yield? |
//! | ---   | ---                     | ---                 |
//! | `Zip` | `(A::Item, B::Item, ..)`| Each round in which every input has a next element.
pub use zip::{zip, Zip};

pub(crate) mod zip;
