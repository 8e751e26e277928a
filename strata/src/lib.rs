// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Suffix arrays, Burrows-Wheeler transforms, and LCP arrays for byte and UTF-8 text.
//!
//! This crate derives three classical string-indexing artifacts from an arbitrary text: the
//! suffix array (the lexicographic ordering of all suffixes), the Burrows-Wheeler transform, and
//! the longest-common-prefix array computed with Kasai's linear-time algorithm. Each operation
//! comes in two alphabet modes: raw bytes, and Unicode code points decoded from UTF-8 so that
//! multi-byte characters are treated as single symbols rather than as several byte symbols.
//!
//! Suffix sorting itself is pluggable: the bundled [`Sais`] sorter from the `sufsort` crate is
//! used by default, and any [`SuffixSorter`] implementation can be substituted through
//! [`Indexer::with_sorter`]. Every call is self-contained and stateless, so operations on
//! distinct inputs are safe to run concurrently.
//!
//! # Examples
//!
//! Deriving all three arrays from a byte string:
//!
//! ```
//! # fn main() -> Result<(), strata::Error> {
//! let text = b"banana";
//!
//! let sa = strata::suffix_array(text)?;
//! let bwt = strata::bwt(text)?;
//! let lcp = strata::lcp_array(text, &sa)?;
//!
//! assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
//! assert_eq!(bwt, b"nnbaaa");
//! assert_eq!(lcp, [-1, 1, 3, 0, 0, 2]);
//! # Ok(())
//! # }
//! ```
//!
//! Indexing UTF-8 text over its code point alphabet:
//!
//! ```
//! # fn main() -> Result<(), strata::Error> {
//! // Four characters, five bytes
//! let sa = strata::suffix_array_utf8("café".as_bytes())?;
//!
//! assert_eq!(sa.len(), 4);
//! # Ok(())
//! # }
//! ```

mod index;
#[cfg(feature = "java-ffi")]
mod jni;
mod lcp;
mod sorter;
mod unicode;

pub use index::{
    Error, Indexer, bwt, bwt_utf8, lcp_array, lcp_array_utf8, suffix_array, suffix_array_utf8,
};
pub use sorter::{Sais, SuffixSorter};
pub use sufsort::SortError;
