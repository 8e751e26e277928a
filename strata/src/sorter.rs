// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use sufsort::SortError;

/// A suffix-sorting primitive usable by an [`Indexer`](crate::Indexer).
///
/// The trait captures the two alphabet capabilities the pipeline needs, each in a plain and a
/// BWT-producing form. Implementations must be deterministic, must return a suffix array that is
/// a permutation of `[0, n)` ordering the text's suffixes ascending (a suffix that is a prefix of
/// another suffix first), and must fail with a [`SortError`] rather than return a partial result.
/// The BWT-producing forms emit the cyclic-predecessor transform: entry `i` is the symbol at
/// `(sa[i] + n - 1) % n`.
///
/// Any construction algorithm satisfying this contract may be substituted via
/// [`Indexer::with_sorter`](crate::Indexer::with_sorter). [`Sais`] is the default.
pub trait SuffixSorter {
    /// Sorts the suffixes of a byte string over the implicit 256-symbol alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be sorted; see [`SortError`].
    fn sort(&self, text: &[u8]) -> Result<Vec<u32>, SortError>;

    /// Sorts the suffixes of a byte string, also emitting the Burrows-Wheeler transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be sorted; see [`SortError`].
    fn sort_bwt(&self, text: &[u8]) -> Result<(Vec<u32>, Vec<u8>), SortError>;

    /// Sorts the suffixes of an integer string over the alphabet `[0, alphabet_size)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be sorted or a symbol is not covered by
    /// `alphabet_size`; see [`SortError`].
    fn sort_int(&self, text: &[u32], alphabet_size: u32) -> Result<Vec<u32>, SortError>;

    /// Sorts the suffixes of an integer string, also emitting the Burrows-Wheeler transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be sorted or a symbol is not covered by
    /// `alphabet_size`; see [`SortError`].
    fn sort_int_bwt(
        &self,
        text: &[u32],
        alphabet_size: u32,
    ) -> Result<(Vec<u32>, Vec<u32>), SortError>;
}

/// The default suffix sorter: the linear-time SA-IS construction from the `sufsort` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sais;

impl SuffixSorter for Sais {
    fn sort(&self, text: &[u8]) -> Result<Vec<u32>, SortError> {
        sufsort::sort(text)
    }

    fn sort_bwt(&self, text: &[u8]) -> Result<(Vec<u32>, Vec<u8>), SortError> {
        sufsort::sort_bwt(text)
    }

    fn sort_int(&self, text: &[u32], alphabet_size: u32) -> Result<Vec<u32>, SortError> {
        sufsort::sort_int(text, alphabet_size)
    }

    fn sort_int_bwt(
        &self,
        text: &[u32],
        alphabet_size: u32,
    ) -> Result<(Vec<u32>, Vec<u32>), SortError> {
        sufsort::sort_int_bwt(text, alphabet_size)
    }
}
