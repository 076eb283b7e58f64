// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use alloc::vec::Vec;

use crate::sacak;

/// A suffix array for a byte string.
pub struct SuffixArray<'a> {
    data: &'a [u8],
    inner: Vec<u32>,
}

impl<'a> SuffixArray<'a> {
    /// Creates a new `SuffixArray` for `data`.
    ///
    /// Note that `data` MUST have a `0` appended to the end of the data you actually wish to sort
    /// for the algorithm to work properly.
    ///
    /// This operation is *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if the last element in `data` is not 0 or if `data.len() > u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let data = b"Hello, world!\0";
    /// let sa = SuffixArray::new(data);
    /// ```
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        assert_eq!(data[data.len() - 1], 0);

        let inner = sacak::sacak(data);

        Self { data, inner }
    }

    /// Returns the suffix array as a sequence of signed 32-bit text positions.
    ///
    /// Callers that need a `-1`-sentinel-friendly representation (e.g. the KKP factorization
    /// drivers) should use this instead of indexing the raw `u32` positions directly.
    ///
    /// # Panics
    ///
    /// Panics if any position does not fit in an `i32`. This cannot happen for data constructed
    /// via [`SuffixArray::new`], since [`SuffixArray::new`] itself requires `data.len() <=
    /// u32::MAX` and every suffix array entry is a valid index into `data`.
    #[must_use]
    pub fn as_i32(&self) -> Vec<i32> {
        self.inner.iter().map(|&pos| pos as i32).collect()
    }

    /// Returns the inverse suffix array: `inverse()[sa()[i]] == i` for every `i`.
    #[must_use]
    pub fn inverse(&self) -> Vec<i32> {
        let mut inv = Vec::from_iter(core::iter::repeat(0i32).take(self.inner.len()));
        for (rank, &pos) in self.inner.iter().enumerate() {
            inv[pos as usize] = rank as i32;
        }
        inv
    }

    /// Returns `true` if and only if `pattern` is contained in the associated data.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let data = b"Hello, world!\0";
    /// let sa = SuffixArray::new(data);
    /// assert!(sa.contains(b"world"));
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.inner
            .binary_search_by(|&suffix| {
                self.data[suffix as usize..]
                    .iter()
                    .take(pattern.len())
                    .cmp(pattern.iter())
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_one_match() {
        let data = b"Hello, world!\0";
        let sa = SuffixArray::new(data);

        assert!(sa.contains(b"world"));
    }

    #[test]
    fn contains_two_matches() {
        let data = b"The quick brown fox jumped over the lazy dog because the fox was quick\0";
        let sa = SuffixArray::new(data);

        assert!(sa.contains(b"fox"));
        assert!(sa.contains(b"quick"));
    }

    #[test]
    fn contains_no_matches() {
        let data = b"Now is the time for all good men to come to the aid of the party\0";
        let sa = SuffixArray::new(data);

        assert!(!sa.contains(b"times"));
    }

    #[test]
    #[should_panic]
    fn no_sentinel() {
        let data = b"Hello, world!";
        let _ = SuffixArray::new(data);
    }
}
