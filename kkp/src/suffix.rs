// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! A small convenience wrapper around [`sufsort`] for building the suffix array of exactly the
//! bytes a caller cares about, hiding the sentinel `sufsort::SuffixArray::new` requires.

use sufsort::SuffixArray;

/// Builds the suffix array of `text`, returning exactly `text.len()` entries in `0..text.len()`.
///
/// `sufsort::SuffixArray::new` requires a trailing `0` sentinel and returns an entry for it;
/// this helper appends that sentinel internally and filters the sentinel's own entry back out,
/// so callers can pass an arbitrary byte slice (which may itself contain `0` bytes elsewhere).
#[must_use]
pub fn build_suffix_array(text: &[u8]) -> Vec<i32> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut with_sentinel = Vec::with_capacity(text.len() + 1);
    with_sentinel.extend_from_slice(text);
    with_sentinel.push(0);

    SuffixArray::new(&with_sentinel)
        .as_i32()
        .into_iter()
        .filter(|&pos| (pos as usize) < text.len())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_n_entries_for_n_byte_text() {
        let text = b"mississippi";
        let sa = build_suffix_array(text);
        assert_eq!(sa.len(), text.len());
    }

    #[test]
    fn entries_sort_suffixes_ascending() {
        let text = b"banana";
        let sa = build_suffix_array(text);

        for pair in sa.windows(2) {
            let a = &text[pair[0] as usize..];
            let b = &text[pair[1] as usize..];
            assert!(a < b, "SA entries must sort suffixes ascending");
        }
    }

    #[test]
    fn empty_text_has_empty_suffix_array() {
        assert_eq!(build_suffix_array(b""), Vec::<i32>::new());
    }
}
