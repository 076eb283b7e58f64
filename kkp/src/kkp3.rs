// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! KKP3: the in-memory, destructive LZ77 factorization driver.
//!
//! Unlike [`crate::kkp2`], this driver computes PSV and NSV in the same scan and therefore needs
//! no in-place linked-list trick during the main pass. It pays for that by reusing (and
//! scrambling) the suffix array buffer as its own stack work space. The original implementation
//! notes this driver "has issues with very large arrays"; [`crate::kkp2::factorize_in_memory`] is
//! the recommended default for most callers (see `DESIGN.md`).

use crate::{factor::Factor, factor::FactorSink, kernel, psv::compute_psv_nsv_pairs};

/// Factorizes `text` using its suffix array `sa`, writing factors into `sink`.
///
/// `sa` is consumed: it is resized, shifted, and used as scratch space, and its contents after
/// this call are unspecified. Callers that need to reuse the suffix array afterward should use
/// [`crate::kkp2::factorize_in_memory`] instead.
///
/// # Examples
///
/// ```
/// use kkp::{kkp3::factorize_in_memory_destructive, suffix::build_suffix_array};
///
/// let text = b"abab";
/// let mut sa = build_suffix_array(text);
///
/// let mut factors = Vec::new();
/// let count = factorize_in_memory_destructive(text, &mut sa, &mut factors);
///
/// assert_eq!(count, factors.len());
/// ```
pub fn factorize_in_memory_destructive(
    text: &[u8],
    sa: &mut Vec<i32>,
    sink: &mut impl FactorSink,
) -> usize {
    let n = text.len();
    log::debug!("kkp3: factorizing {n} bytes");

    if n == 0 {
        return 0;
    }

    // Shift SA right by one and add terminal sentinels, matching the reference algorithm's
    // `SA[i] = SA[i - 1]` in-place shift.
    sa.resize(n + 2, 0);
    for i in (1..=n).rev() {
        sa[i] = sa[i - 1];
    }
    sa[0] = -1;
    sa[n + 1] = -1;

    let c = compute_psv_nsv_pairs(sa, n);

    sink.push(Factor::new(text[0] as i32, 0));
    let mut count = 1usize;
    let mut i = 1usize;

    while i < n {
        let addr = i * 2;
        let psv = c[addr];
        let nsv = c[addr + 1];
        i = kernel::extend(text, i, psv, nsv, sink);
        count += 1;
    }

    log::debug!("kkp3: emitted {count} factors");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kkp2::factorize_in_memory, suffix::build_suffix_array};

    fn factorize(text: &[u8]) -> Vec<Factor> {
        let mut sa = build_suffix_array(text);
        let mut factors = Vec::new();
        factorize_in_memory_destructive(text, &mut sa, &mut factors);
        factors
    }

    #[test]
    fn empty_text() {
        assert_eq!(factorize(b""), vec![]);
    }

    #[test]
    fn single_byte() {
        assert_eq!(factorize(b"a"), vec![Factor::new(b'a' as i32, 0)]);
    }

    #[test]
    fn aaaa() {
        assert_eq!(
            factorize(b"aaaa"),
            vec![Factor::new(b'a' as i32, 0), Factor::new(0, 3)]
        );
    }

    #[test]
    fn agrees_with_kkp2_on_a_variety_of_inputs() {
        for text in [
            &b""[..],
            b"a",
            b"aaaa",
            b"abab",
            b"ababab",
            b"mississippi",
            b"the quick brown fox jumps over the lazy dog",
            b"abcabcabcabcabcabcabc",
        ] {
            let sa_for_kkp2 = build_suffix_array(text);
            let mut kkp2_factors = Vec::new();
            factorize_in_memory(text, &sa_for_kkp2, &mut kkp2_factors);

            let kkp3_factors = factorize(text);

            assert_eq!(kkp2_factors, kkp3_factors, "mismatch for {text:?}");
        }
    }

    #[test]
    fn tiles_exactly() {
        let text = b"mississippi";
        let factors = factorize(text);

        let covered: usize = factors.iter().map(|f| f.len.max(1) as usize).sum();
        assert_eq!(covered, text.len());
    }
}
