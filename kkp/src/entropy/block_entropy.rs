// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Shannon entropy of a sequence's overlapping fixed-size blocks.

use std::collections::HashMap;

/// Returns the base-2 Shannon entropy of the empirical distribution of overlapping
/// length-`blocksize` windows of `sequence`.
///
/// # Panics
///
/// Panics if `blocksize` is `0` or exceeds `sequence.len()`.
#[must_use]
pub fn block_entropy(sequence: &[u8], blocksize: usize) -> f64 {
    assert!(blocksize > 0, "blocksize must be nonzero");
    assert!(blocksize <= sequence.len(), "blocksize must not exceed sequence length");

    let nblocks = sequence.len() - blocksize + 1;
    let mut counts: HashMap<&[u8], usize> = HashMap::new();
    for window in sequence.windows(blocksize) {
        *counts.entry(window).or_insert(0) += 1;
    }

    let nblocks = nblocks as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / nblocks;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_sequence_has_zero_entropy() {
        assert_eq!(block_entropy(b"aaaaaaaa", 2), 0.0);
    }

    #[test]
    fn single_block_has_zero_entropy() {
        assert_eq!(block_entropy(b"abcd", 4), 0.0);
    }

    #[test]
    fn two_equally_likely_blocks_have_entropy_one() {
        // "abab" with blocksize 1 has two distinct bytes, each with probability 1/2.
        assert_eq!(block_entropy(b"abab", 1), 1.0);
    }

    #[test]
    #[should_panic(expected = "blocksize must be nonzero")]
    fn zero_blocksize_panics() {
        block_entropy(b"abc", 0);
    }
}
