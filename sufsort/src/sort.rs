// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::sais;

/// The byte alphabet has 256 symbols
const BYTE_ALPHABET_SIZE: u32 = 256;

/// Texts longer than this cannot be sorted because suffix offsets are marshalled as 32-bit
/// integers downstream.
const MAX_TEXT_LEN: usize = i32::MAX as usize;

/// Alphabets larger than this are rejected to keep symbol values representable after the internal
/// one-symbol shift.
const MAX_ALPHABET_SIZE: u32 = i32::MAX as u32;

/// An error indicating that a suffix sort could not be performed.
///
/// Sorting never returns a partial result: on error, no suffix array is produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortError {
    /// The text is too long for its suffix offsets to be represented
    TextTooLong {
        /// Length of the offending text
        len: usize,
    },
    /// The requested alphabet size is unsupported
    AlphabetTooLarge {
        /// The requested alphabet size
        alphabet_size: u32,
    },
    /// A symbol in the text is not covered by the declared alphabet
    SymbolOutOfRange {
        /// The offending symbol
        symbol: u32,
        /// The declared alphabet size
        alphabet_size: u32,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SortError::TextTooLong { len } => {
                write!(f, "text length {len} exceeds the maximum of {MAX_TEXT_LEN}")
            }
            SortError::AlphabetTooLarge { alphabet_size } => {
                write!(
                    f,
                    "alphabet size {alphabet_size} exceeds the maximum of {MAX_ALPHABET_SIZE}",
                )
            }
            SortError::SymbolOutOfRange {
                symbol,
                alphabet_size,
            } => {
                write!(
                    f,
                    "symbol {symbol} is out of range for alphabet size {alphabet_size}",
                )
            }
        }
    }
}

impl Error for SortError {}

/// Computes the suffix array of a byte string.
///
/// The returned array holds the starting offsets of the suffixes of `text` in ascending
/// lexicographic order, where a suffix that is a prefix of another suffix orders first. No
/// terminator byte is required; an empty text yields an empty array.
///
/// This operation is *O*(*n*).
///
/// # Errors
///
/// Returns an error if `text` is longer than `i32::MAX` bytes.
///
/// # Examples
///
/// ```
/// let sa = sufsort::sort(b"banana")?;
///
/// assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
/// # Ok::<(), sufsort::SortError>(())
/// ```
pub fn sort(text: &[u8]) -> Result<Vec<u32>, SortError> {
    if text.len() > MAX_TEXT_LEN {
        return Err(SortError::TextTooLong { len: text.len() });
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut shifted: Vec<u32> = Vec::with_capacity(text.len() + 1);
    shifted.extend(text.iter().map(|&b| u32::from(b) + 1));
    shifted.push(0);

    Ok(strip_sentinel(sais::sais(
        &shifted,
        BYTE_ALPHABET_SIZE as usize + 1,
    )))
}

/// Computes the suffix array of an integer string over the alphabet `[0, alphabet_size)`.
///
/// Suffixes are ordered as in [`sort`]. An empty text yields an empty array for any
/// `alphabet_size`.
///
/// This operation is *O*(*n* + *alphabet_size*).
///
/// # Errors
///
/// Returns an error if `text` is longer than `i32::MAX` symbols, if `alphabet_size` exceeds
/// `i32::MAX`, or if any symbol in `text` is not less than `alphabet_size`.
///
/// # Examples
///
/// ```
/// let sa = sufsort::sort_int(&[1, 0, 2, 0, 2, 0], 3)?;
///
/// assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
/// # Ok::<(), sufsort::SortError>(())
/// ```
pub fn sort_int(text: &[u32], alphabet_size: u32) -> Result<Vec<u32>, SortError> {
    if text.len() > MAX_TEXT_LEN {
        return Err(SortError::TextTooLong { len: text.len() });
    }
    if alphabet_size > MAX_ALPHABET_SIZE {
        return Err(SortError::AlphabetTooLarge { alphabet_size });
    }
    if let Some(&symbol) = text.iter().find(|&&symbol| symbol >= alphabet_size) {
        return Err(SortError::SymbolOutOfRange {
            symbol,
            alphabet_size,
        });
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut shifted: Vec<u32> = Vec::with_capacity(text.len() + 1);
    shifted.extend(text.iter().map(|&symbol| symbol + 1));
    shifted.push(0);

    Ok(strip_sentinel(sais::sais(
        &shifted,
        alphabet_size as usize + 1,
    )))
}

/// Computes the suffix array of a byte string along with its Burrows-Wheeler transform.
///
/// The transform holds, for each suffix in sorted order, the byte cyclically preceding that
/// suffix's starting offset: entry `i` is `text[(sa[i] + n - 1) % n]`. No sentinel symbol is
/// emitted; the transform is a permutation of exactly the input bytes.
///
/// # Errors
///
/// Fails under the same conditions as [`sort`].
///
/// # Examples
///
/// ```
/// let (sa, bwt) = sufsort::sort_bwt(b"banana")?;
///
/// assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
/// assert_eq!(bwt, b"nnbaaa");
/// # Ok::<(), sufsort::SortError>(())
/// ```
pub fn sort_bwt(text: &[u8]) -> Result<(Vec<u32>, Vec<u8>), SortError> {
    let sa = sort(text)?;
    let bwt = bwt_of(text, &sa);

    Ok((sa, bwt))
}

/// Computes the suffix array of an integer string along with its Burrows-Wheeler transform.
///
/// See [`sort_int`] for the sorting contract and [`sort_bwt`] for the transform convention.
///
/// # Errors
///
/// Fails under the same conditions as [`sort_int`].
pub fn sort_int_bwt(text: &[u32], alphabet_size: u32) -> Result<(Vec<u32>, Vec<u32>), SortError> {
    let sa = sort_int(text, alphabet_size)?;
    let bwt = bwt_of(text, &sa);

    Ok((sa, bwt))
}

/// Derives the cyclic-predecessor Burrows-Wheeler transform from a text and its suffix array.
fn bwt_of<T: Copy>(text: &[T], sa: &[u32]) -> Vec<T> {
    sa.iter()
        .map(|&p| {
            let i = if p == 0 { text.len() - 1 } else { p as usize - 1 };
            text[i]
        })
        .collect()
}

/// Removes the sentinel suffix's slot from a suffix array computed over the shifted text.
///
/// The sentinel is the unique smallest symbol, so its suffix always occupies the first slot.
fn strip_sentinel(mut sa: Vec<u32>) -> Vec<u32> {
    debug_assert_eq!(
        sa.first().copied(),
        Some((sa.len() - 1) as u32),
        "sentinel suffix must sort first",
    );
    sa.remove(0);
    sa
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Comparison-sort reference construction; Rust slice ordering matches the
    /// prefix-orders-first contract.
    fn naive_sort(text: &[u8]) -> Vec<u32> {
        let mut sa: Vec<u32> = (0..text.len() as u32).collect();
        sa.sort_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
        sa
    }

    #[test]
    fn sorts_banana() {
        let sa = sort(b"banana").unwrap();

        assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn sorts_with_trailing_terminator() {
        let sa = sort(b"banana$").unwrap();

        assert_eq!(sa, [6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn empty_text() {
        assert!(sort(b"").unwrap().is_empty());
        assert!(sort_int(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn single_symbol() {
        assert_eq!(sort(b"x").unwrap(), [0]);
    }

    #[test]
    fn matches_naive_construction() {
        for text in [
            b"abracadabra".as_slice(),
            b"aabaab",
            b"abababab",
            b"zyxwvu",
            b"the quick brown fox jumps over the lazy dog",
        ] {
            assert_eq!(sort(text).unwrap(), naive_sort(text), "text {text:?}");
        }
    }

    #[test]
    fn int_sort_matches_byte_sort() {
        let text = b"banana";
        let symbols: Vec<u32> = text.iter().map(|&b| u32::from(b)).collect();

        assert_eq!(
            sort_int(&symbols, BYTE_ALPHABET_SIZE).unwrap(),
            sort(text).unwrap(),
        );
    }

    #[test]
    fn int_sort_rejects_out_of_range_symbol() {
        assert_eq!(
            sort_int(&[0, 3, 1], 3),
            Err(SortError::SymbolOutOfRange {
                symbol: 3,
                alphabet_size: 3,
            }),
        );
    }

    #[test]
    fn bwt_is_cyclic_predecessor() {
        let (sa, bwt) = sort_bwt(b"banana").unwrap();

        assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
        assert_eq!(bwt, b"nnbaaa");
    }

    #[test]
    fn int_bwt_matches_byte_bwt() {
        let text = b"banana";
        let symbols: Vec<u32> = text.iter().map(|&b| u32::from(b)).collect();
        let (_, bwt) = sort_bwt(text).unwrap();
        let (_, int_bwt) = sort_int_bwt(&symbols, BYTE_ALPHABET_SIZE).unwrap();

        let widened: Vec<u32> = bwt.iter().map(|&b| u32::from(b)).collect();
        assert_eq!(int_bwt, widened);
    }

    proptest! {
        #[test]
        fn sort_is_correct(text in proptest::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(sort(&text).unwrap(), naive_sort(&text));
        }

        #[test]
        fn sort_small_alphabet_is_correct(text in proptest::collection::vec(0u8..4, 0..256)) {
            // Small alphabets exercise the recursive naming path heavily
            prop_assert_eq!(sort(&text).unwrap(), naive_sort(&text));
        }

        #[test]
        fn bwt_is_permutation_of_text(text in proptest::collection::vec(any::<u8>(), 1..256)) {
            let (_, bwt) = sort_bwt(&text).unwrap();

            let mut sorted_text = text.clone();
            let mut sorted_bwt = bwt;
            sorted_text.sort_unstable();
            sorted_bwt.sort_unstable();
            prop_assert_eq!(sorted_bwt, sorted_text);
        }
    }
}
