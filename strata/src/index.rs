// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error,
    fmt::{self, Display, Formatter},
};

use sufsort::SortError;

use crate::{
    lcp,
    sorter::{Sais, SuffixSorter},
    unicode,
};

/// Derived-array entries are marshalled as 32-bit integers, which bounds the text length.
const MAX_TEXT_LEN: usize = i32::MAX as usize;

/// An error indicating that a derived array could not be computed.
///
/// No operation ever returns a partial result: on error, every intermediate buffer is released
/// and nothing is observable to the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The text is too long for its derived arrays to be represented
    TextTooLong {
        /// Length of the offending text, in symbols
        len: usize,
    },
    /// A caller-supplied suffix array's length does not match the text's length
    LengthMismatch {
        /// The text's length, in symbols
        expected: usize,
        /// The supplied suffix array's length
        actual: usize,
    },
    /// A caller-supplied suffix array is not a permutation of the text's positions
    InvalidSuffixArray,
    /// The suffix-sort primitive failed
    Sort(SortError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::TextTooLong { len } => {
                write!(f, "text length {len} exceeds the maximum of {MAX_TEXT_LEN}")
            }
            Error::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "suffix array length {actual} does not match text length {expected}",
                )
            }
            Error::InvalidSuffixArray => {
                write!(f, "suffix array is not a permutation of the text positions")
            }
            Error::Sort(e) => write!(f, "suffix sorting failed: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Sort(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SortError> for Error {
    fn from(value: SortError) -> Self {
        Error::Sort(value)
    }
}

/// A text indexer bound to a suffix-sorting primitive.
///
/// All operations are stateless between calls; the indexer only carries the sorter, so a single
/// value can be reused freely, including from multiple threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indexer<S = Sais> {
    sorter: S,
}

impl Indexer {
    /// Creates an indexer backed by the default SA-IS sorter.
    #[must_use]
    pub const fn new() -> Self {
        Self { sorter: Sais }
    }
}

impl<S: SuffixSorter> Indexer<S> {
    /// Creates an indexer backed by `sorter`.
    ///
    /// Any [`SuffixSorter`] implementation satisfying the trait's ordering contract may be
    /// substituted for the default.
    #[must_use]
    pub const fn with_sorter(sorter: S) -> Self {
        Self { sorter }
    }

    /// Computes the suffix array of a byte string.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is longer than `i32::MAX` bytes or the sorter fails.
    pub fn suffix_array(&self, text: &[u8]) -> Result<Vec<u32>, Error> {
        check_len(text.len())?;

        Ok(self.sorter.sort(text)?)
    }

    /// Computes the suffix array of a UTF-8 string over its code point alphabet.
    ///
    /// The array has one entry per character rather than per byte, and offsets index characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is longer than `i32::MAX` bytes or the sorter fails.
    pub fn suffix_array_utf8(&self, text: &[u8]) -> Result<Vec<u32>, Error> {
        check_len(text.len())?;

        let decoded = unicode::decode(text);
        Ok(self
            .sorter
            .sort_int(&decoded.symbols, decoded.max_symbol + 1)?)
    }

    /// Computes the Burrows-Wheeler transform of a byte string.
    ///
    /// Entry `i` is the byte cyclically preceding the suffix ranked `i`, i.e.
    /// `text[(sa[i] + n - 1) % n]`. No sentinel symbol is emitted; the transform is a permutation
    /// of exactly the input bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is longer than `i32::MAX` bytes or the sorter fails.
    pub fn bwt(&self, text: &[u8]) -> Result<Vec<u8>, Error> {
        check_len(text.len())?;

        let (_, bwt) = self.sorter.sort_bwt(text)?;
        Ok(bwt)
    }

    /// Computes the Burrows-Wheeler transform of a UTF-8 string over its code point alphabet.
    ///
    /// Entries are code points rather than bytes; the transform convention matches [`Self::bwt`].
    ///
    /// # Errors
    ///
    /// Returns an error if the text is longer than `i32::MAX` bytes or the sorter fails.
    pub fn bwt_utf8(&self, text: &[u8]) -> Result<Vec<u32>, Error> {
        check_len(text.len())?;

        let decoded = unicode::decode(text);
        let (_, bwt) = self
            .sorter
            .sort_int_bwt(&decoded.symbols, decoded.max_symbol + 1)?;
        Ok(bwt)
    }

    /// Computes the LCP array of a byte string under a caller-supplied suffix array.
    ///
    /// Entry 0 is the fixed sentinel -1; entry `k > 0` is the length of the longest common prefix
    /// of the suffixes starting at `sa[k]` and `sa[k - 1]`. The computation is Kasai's linear-time
    /// algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if `sa`'s length differs from the text's byte length, if `sa` is not a
    /// permutation of the text's positions, or if the text is longer than `i32::MAX` bytes. All
    /// validation happens before any computation.
    pub fn lcp_array(&self, text: &[u8], sa: &[u32]) -> Result<Vec<i32>, Error> {
        check_supplied_sa(text.len(), sa)?;

        Ok(lcp::lcp_from_suffix_array(text, sa))
    }

    /// Computes the LCP array of a UTF-8 string under a caller-supplied suffix array.
    ///
    /// The supplied suffix array must index characters, not bytes, and its length must equal the
    /// text's character count.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::lcp_array`], with the length checks
    /// applied to the character count. All validation happens before the text is decoded.
    pub fn lcp_array_utf8(&self, text: &[u8], sa: &[u32]) -> Result<Vec<i32>, Error> {
        check_supplied_sa(unicode::char_count(text), sa)?;

        let decoded = unicode::decode(text);
        Ok(lcp::lcp_from_suffix_array(&decoded.symbols, sa))
    }
}

fn check_len(len: usize) -> Result<(), Error> {
    if len > MAX_TEXT_LEN {
        return Err(Error::TextTooLong { len });
    }
    Ok(())
}

fn check_supplied_sa(text_len: usize, sa: &[u32]) -> Result<(), Error> {
    if sa.len() != text_len {
        return Err(Error::LengthMismatch {
            expected: text_len,
            actual: sa.len(),
        });
    }
    check_len(text_len)?;
    if !lcp::is_permutation_of(sa, text_len) {
        return Err(Error::InvalidSuffixArray);
    }
    Ok(())
}

/// Computes the suffix array of a byte string with the default sorter.
///
/// # Errors
///
/// See [`Indexer::suffix_array`].
///
/// # Examples
///
/// ```
/// let sa = strata::suffix_array(b"banana")?;
///
/// assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
/// # Ok::<(), strata::Error>(())
/// ```
pub fn suffix_array(text: &[u8]) -> Result<Vec<u32>, Error> {
    Indexer::new().suffix_array(text)
}

/// Computes the suffix array of a UTF-8 string with the default sorter.
///
/// # Errors
///
/// See [`Indexer::suffix_array_utf8`].
///
/// # Examples
///
/// ```
/// // Four characters, five bytes: offsets index characters
/// let sa = strata::suffix_array_utf8("café".as_bytes())?;
///
/// assert_eq!(sa, [1, 0, 2, 3]);
/// # Ok::<(), strata::Error>(())
/// ```
pub fn suffix_array_utf8(text: &[u8]) -> Result<Vec<u32>, Error> {
    Indexer::new().suffix_array_utf8(text)
}

/// Computes the Burrows-Wheeler transform of a byte string with the default sorter.
///
/// # Errors
///
/// See [`Indexer::bwt`].
///
/// # Examples
///
/// ```
/// let bwt = strata::bwt(b"banana")?;
///
/// assert_eq!(bwt, b"nnbaaa");
/// # Ok::<(), strata::Error>(())
/// ```
pub fn bwt(text: &[u8]) -> Result<Vec<u8>, Error> {
    Indexer::new().bwt(text)
}

/// Computes the Burrows-Wheeler transform of a UTF-8 string with the default sorter.
///
/// # Errors
///
/// See [`Indexer::bwt_utf8`].
///
/// # Examples
///
/// ```
/// let bwt = strata::bwt_utf8("café".as_bytes())?;
///
/// assert_eq!(bwt, ['c' as u32, 'é' as u32, 'a' as u32, 'f' as u32]);
/// # Ok::<(), strata::Error>(())
/// ```
pub fn bwt_utf8(text: &[u8]) -> Result<Vec<u32>, Error> {
    Indexer::new().bwt_utf8(text)
}

/// Computes the LCP array of a byte string under a caller-supplied suffix array.
///
/// # Errors
///
/// See [`Indexer::lcp_array`].
///
/// # Examples
///
/// ```
/// let text = b"banana";
/// let sa = strata::suffix_array(text)?;
/// let lcp = strata::lcp_array(text, &sa)?;
///
/// assert_eq!(lcp, [-1, 1, 3, 0, 0, 2]);
/// # Ok::<(), strata::Error>(())
/// ```
pub fn lcp_array(text: &[u8], sa: &[u32]) -> Result<Vec<i32>, Error> {
    Indexer::new().lcp_array(text, sa)
}

/// Computes the LCP array of a UTF-8 string under a caller-supplied suffix array.
///
/// # Errors
///
/// See [`Indexer::lcp_array_utf8`].
///
/// # Examples
///
/// ```
/// let text = "café".as_bytes();
/// let sa = strata::suffix_array_utf8(text)?;
/// let lcp = strata::lcp_array_utf8(text, &sa)?;
///
/// assert_eq!(lcp, [-1, 0, 0, 0]);
/// # Ok::<(), strata::Error>(())
/// ```
pub fn lcp_array_utf8(text: &[u8], sa: &[u32]) -> Result<Vec<i32>, Error> {
    Indexer::new().lcp_array_utf8(text, sa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcp_rejects_wrong_length() {
        let result = lcp_array(b"banana", &[5, 3, 1, 0, 4]);

        assert_eq!(
            result,
            Err(Error::LengthMismatch {
                expected: 6,
                actual: 5,
            }),
        );
    }

    #[test]
    fn lcp_utf8_validates_against_character_count() {
        // Five bytes but four characters: a four-entry suffix array is accepted, a five-entry one
        // is not
        let text = "café".as_bytes();

        assert!(lcp_array_utf8(text, &[1, 0, 2, 3]).is_ok());
        assert_eq!(
            lcp_array_utf8(text, &[1, 0, 2, 3, 4]),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 5,
            }),
        );
    }

    #[test]
    fn lcp_rejects_non_permutation() {
        assert_eq!(
            lcp_array(b"banana", &[5, 3, 1, 0, 4, 4]),
            Err(Error::InvalidSuffixArray),
        );
        assert_eq!(
            lcp_array(b"banana", &[6, 3, 1, 0, 4, 2]),
            Err(Error::InvalidSuffixArray),
        );
    }

    #[test]
    fn sort_failure_propagates() {
        struct FailingSorter;

        impl SuffixSorter for FailingSorter {
            fn sort(&self, _: &[u8]) -> Result<Vec<u32>, SortError> {
                Err(SortError::TextTooLong { len: 0 })
            }

            fn sort_bwt(&self, _: &[u8]) -> Result<(Vec<u32>, Vec<u8>), SortError> {
                Err(SortError::TextTooLong { len: 0 })
            }

            fn sort_int(&self, _: &[u32], _: u32) -> Result<Vec<u32>, SortError> {
                Err(SortError::TextTooLong { len: 0 })
            }

            fn sort_int_bwt(&self, _: &[u32], _: u32) -> Result<(Vec<u32>, Vec<u32>), SortError> {
                Err(SortError::TextTooLong { len: 0 })
            }
        }

        let indexer = Indexer::with_sorter(FailingSorter);

        assert!(matches!(indexer.suffix_array(b"abc"), Err(Error::Sort(_))));
        assert!(matches!(indexer.bwt(b"abc"), Err(Error::Sort(_))));
    }

    #[test]
    fn empty_text_yields_empty_arrays() {
        assert!(suffix_array(b"").unwrap().is_empty());
        assert!(suffix_array_utf8(b"").unwrap().is_empty());
        assert!(bwt(b"").unwrap().is_empty());
        assert!(bwt_utf8(b"").unwrap().is_empty());
        assert!(lcp_array(b"", &[]).unwrap().is_empty());
        assert!(lcp_array_utf8(b"", &[]).unwrap().is_empty());
    }
}
