// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! KKP1s: the external-suffix-array LZ77 factorization driver.
//!
//! Identical to [`crate::kkp2`] except the suffix array is streamed from a file rather than held
//! in memory, so this driver's memory footprint is independent of the suffix array's size.

use std::path::Path;

use crate::{
    config::SaSourceConfig,
    error::KkpError,
    factor::FactorSink,
    kernel,
    psv::compute_psv_only,
    sa_source::ExternalSaSource,
};

/// Factorizes `text` using the suffix array stored at `sa_path`, writing factors into `sink`.
///
/// `sa_path` must contain exactly `text.len()` little-endian 32-bit signed integers forming the
/// correct suffix array of `text`.
///
/// # Errors
///
/// Returns [`KkpError::Io`] if `sa_path` cannot be opened or read.
pub fn factorize_external_sa(
    text: &[u8],
    sa_path: &Path,
    sink: &mut impl FactorSink,
) -> Result<usize, KkpError> {
    factorize_external_sa_with_config(text, sa_path, sink, &SaSourceConfig::default())
}

/// As [`factorize_external_sa`], but with a custom [`SaSourceConfig`] controlling both the PSV
/// stack size and the external read buffer length.
///
/// # Errors
///
/// Returns [`KkpError::Io`] if `sa_path` cannot be opened or read.
pub fn factorize_external_sa_with_config(
    text: &[u8],
    sa_path: &Path,
    sink: &mut impl FactorSink,
    config: &SaSourceConfig,
) -> Result<usize, KkpError> {
    let n = text.len();
    log::debug!("kkp1s: factorizing {n} bytes from external SA {}", sa_path.display());

    if n == 0 {
        return Ok(0);
    }

    let source = ExternalSaSource::open_with_config(sa_path, config)?;
    let mut c = compute_psv_only(source, n, config);
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

    log::debug!("kkp1s: emitted {count} factors");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        io::Write,
        sync::atomic::{AtomicU32, Ordering},
    };

    use byteorder::{LittleEndian, WriteBytesExt};

    use super::*;
    use crate::{factor::Factor, kkp2::factorize_in_memory, suffix::build_suffix_array};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_sa_file(sa: &[i32]) -> std::path::PathBuf {
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("kkp-kkp1s-test-{}-{id}.bin", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        for &value in sa {
            file.write_i32::<LittleEndian>(value).unwrap();
        }
        path
    }

    #[test]
    fn missing_file_is_an_error() {
        let text = b"abab";
        let mut factors = Vec::new();
        let result = factorize_external_sa(text, Path::new("/nonexistent/sa.bin"), &mut factors);
        assert!(result.is_err());
    }

    #[test]
    fn empty_text_returns_zero_without_opening_the_file() {
        let mut factors = Vec::new();
        let count =
            factorize_external_sa(b"", Path::new("/nonexistent/sa.bin"), &mut factors).unwrap();
        assert_eq!(count, 0);
        assert_eq!(factors, vec![]);
    }

    #[test]
    fn agrees_with_kkp2_on_a_variety_of_inputs() {
        for text in [
            &b"a"[..],
            b"aaaa",
            b"abab",
            b"ababab",
            b"mississippi",
            b"the quick brown fox jumps over the lazy dog",
        ] {
            let sa = build_suffix_array(text);
            let path = temp_sa_file(&sa);

            let mut kkp2_factors: Vec<Factor> = Vec::new();
            factorize_in_memory(text, &sa, &mut kkp2_factors);

            let mut kkp1s_factors: Vec<Factor> = Vec::new();
            let count = factorize_external_sa(text, &path, &mut kkp1s_factors).unwrap();

            assert_eq!(count, kkp1s_factors.len());
            assert_eq!(kkp2_factors, kkp1s_factors, "mismatch for {text:?}");

            fs::remove_file(&path).unwrap();
        }
    }
}
