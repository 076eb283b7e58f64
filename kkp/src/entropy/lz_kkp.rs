// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! KKP-based LZ77 complexity and factor extraction, and the cross-parse relative-entropy
//! analogue, both built on the core factorization drivers.

use crate::{
    cross_parse::cross_parse, error::KkpError, factor::Factor, kkp2::factorize_in_memory,
    suffix::build_suffix_array,
};

/// The LZ77 factorization complexity of `sequence`: the number of factors emitted by
/// [`crate::kkp2::factorize_in_memory`].
///
/// KKP2 is used rather than KKP3 because the original implementation's own comment notes that
/// the destructive driver "has issues with very large arrays".
#[must_use]
pub fn lz77_complexity_kkp(sequence: &[u8]) -> usize {
    let sa = build_suffix_array(sequence);
    let mut sink = ();
    factorize_in_memory(sequence, &sa, &mut sink)
}

/// The full LZ77 factor list of `sequence`, as produced by [`crate::kkp2::factorize_in_memory`].
#[must_use]
pub fn lz77_factors_kkp(sequence: &[u8]) -> Vec<Factor> {
    let sa = build_suffix_array(sequence);
    let mut factors = Vec::new();
    factorize_in_memory(sequence, &sa, &mut factors);
    factors
}

fn sumlog(factors: &[Factor]) -> f64 {
    factors
        .iter()
        .map(|f| {
            (f.pos.max(2) as f64).log2() + (f.len.max(2) as f64).log2()
        })
        .sum()
}

/// The LZ77 factorization complexity of `sequence`, plus a bits-cost proxy for its compressed
/// size: `Σ log2(max(2, pos)) + log2(max(2, len))` over every emitted factor.
#[must_use]
pub fn lz77_complexity_sumlog_kkp(sequence: &[u8]) -> (usize, f64) {
    let factors = lz77_factors_kkp(sequence);
    let sum = sumlog(&factors);
    (factors.len(), sum)
}

/// The cross-parse analogue of [`lz77_complexity_sumlog_kkp`]: factorizes `s2` against `s1` and
/// reports the factor count alongside the same bits-cost proxy.
///
/// # Errors
///
/// Returns [`KkpError::InvalidSeparator`] if either input contains the reserved byte `0x00`.
pub fn cross_parse_complexity_sumlog(s1: &[u8], s2: &[u8]) -> Result<(usize, f64), KkpError> {
    let mut factors = Vec::new();
    let count = cross_parse(s1, s2, &mut factors)?;
    let sum = sumlog(&factors);
    Ok((count, sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_matches_factor_count() {
        let sequence = b"mississippi";
        assert_eq!(lz77_complexity_kkp(sequence), lz77_factors_kkp(sequence).len());
    }

    #[test]
    fn sumlog_is_nonnegative_for_nonempty_input() {
        let (count, sum) = lz77_complexity_sumlog_kkp(b"mississippi");
        assert!(count > 0);
        assert!(sum >= 0.0);
    }

    #[test]
    fn cross_parse_sumlog_rejects_separator() {
        let result = cross_parse_complexity_sumlog(b"a\0b", b"c");
        assert!(result.is_err());
    }

    #[test]
    fn cross_parse_sumlog_matches_cross_parse_factor_count() {
        let s1 = b"abracadabra";
        let s2 = b"bracadabra";
        let (count, _) = cross_parse_complexity_sumlog(s1, s2).unwrap();

        let mut factors = Vec::new();
        let expected = cross_parse(s1, s2, &mut factors).unwrap();
        assert_eq!(count, expected);
    }
}
