// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! KKP2: the in-memory, non-destructive LZ77 factorization driver.

use crate::{
    config::SaSourceConfig,
    factor::FactorSink,
    kernel,
    psv::compute_psv_only,
    sa_source::InMemorySaSource,
};

/// Factorizes `text` using its suffix array `sa`, writing factors into `sink`.
///
/// This is the recommended in-memory driver: unlike [`crate::kkp3::factorize_in_memory_destructive`],
/// it does not mutate `sa`.
///
/// Returns the number of factors emitted. `sa` must be the correct suffix array of `text`;
/// passing an incorrect one is a logic error whose behavior is unspecified but memory-safe.
///
/// # Examples
///
/// ```
/// use kkp::{kkp2::factorize_in_memory, suffix::build_suffix_array};
///
/// let text = b"abab";
/// let sa = build_suffix_array(text);
///
/// let mut factors = Vec::new();
/// let count = factorize_in_memory(text, &sa, &mut factors);
///
/// assert_eq!(count, factors.len());
/// ```
pub fn factorize_in_memory(text: &[u8], sa: &[i32], sink: &mut impl FactorSink) -> usize {
    factorize_in_memory_with_config(text, sa, sink, &SaSourceConfig::default())
}

/// As [`factorize_in_memory`], but with a custom [`SaSourceConfig`] (notably the bounded stack
/// size used by the PSV engine).
pub fn factorize_in_memory_with_config(
    text: &[u8],
    sa: &[i32],
    sink: &mut impl FactorSink,
    config: &SaSourceConfig,
) -> usize {
    let n = text.len();
    log::debug!("kkp2: factorizing {n} bytes");

    if n == 0 {
        return 0;
    }

    let mut c = compute_psv_only(InMemorySaSource::new(sa), n, config);
    c[0] = 0;

    let mut next = 1usize;
    let mut count = 0usize;

    for t in 1..=n {
        let psv = c[t];
        let nsv = c[psv as usize];

        if t == next {
            next = kernel::extend(text, t - 1, psv - 1, nsv - 1, sink) + 1;
            count += 1;
        }

        c[t] = nsv;
        c[psv as usize] = t as i32;
    }

    log::debug!("kkp2: emitted {count} factors");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{factor::Factor, suffix::build_suffix_array};

    fn factorize(text: &[u8]) -> Vec<Factor> {
        let sa = build_suffix_array(text);
        let mut factors = Vec::new();
        factorize_in_memory(text, &sa, &mut factors);
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
    fn abab() {
        assert_eq!(
            factorize(b"abab"),
            vec![
                Factor::new(b'a' as i32, 0),
                Factor::new(b'b' as i32, 0),
                Factor::new(0, 2),
            ]
        );
    }

    #[test]
    fn ababab() {
        assert_eq!(
            factorize(b"ababab"),
            vec![
                Factor::new(b'a' as i32, 0),
                Factor::new(b'b' as i32, 0),
                Factor::new(0, 4),
            ]
        );
    }

    #[test]
    fn mississippi_tiles_and_is_correct() {
        let text = b"mississippi";
        let factors = factorize(text);

        let mut covered = 0usize;
        let mut pos = 0usize;
        for f in &factors {
            let len = f.len.max(1) as usize;
            if f.len > 0 {
                assert!((f.pos as usize) < pos);
                assert_eq!(
                    &text[f.pos as usize..f.pos as usize + f.len as usize],
                    &text[pos..pos + f.len as usize]
                );
            } else {
                assert_eq!(f.pos as u8, text[pos]);
            }
            pos += len;
            covered += len;
        }

        assert_eq!(covered, text.len());
        assert_eq!(factors.len(), 6);
    }

    #[test]
    fn null_sink_count_matches_collecting_sink() {
        let text = b"mississippi";
        let sa = build_suffix_array(text);

        let mut null_sink = ();
        let null_count = factorize_in_memory(text, &sa, &mut null_sink);

        let mut collecting = Vec::new();
        let collecting_count = factorize_in_memory(text, &sa, &mut collecting);

        assert_eq!(null_count, collecting_count);
        assert_eq!(collecting_count, collecting.len());
    }
}
