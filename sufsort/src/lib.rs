// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Suffix array construction for byte and integer strings.
//!
//! This crate computes suffix arrays with the linear-time SA-IS induced-sorting algorithm over
//! either the implicit 256-symbol byte alphabet or an arbitrary integer alphabet with an explicit
//! bound. Both forms can additionally emit the Burrows-Wheeler transform of the text derived in
//! one pass over the construction's output.
//!
//! Suffixes are compared symbol by symbol, with a suffix that is a prefix of another ordering
//! first. No terminator symbol is required in the input and none ever appears in the output.
//!
//! # Examples
//!
//! ```
//! let sa = sufsort::sort(b"banana")?;
//!
//! assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
//! # Ok::<(), sufsort::SortError>(())
//! ```

mod sais;
mod sort;

pub use sort::{SortError, sort, sort_bwt, sort_int, sort_int_bwt};
