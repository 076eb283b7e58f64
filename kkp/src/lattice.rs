// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Mapping sequences of non-negative integers (e.g. lattice trajectories from an upstream
//! simulation) to byte strings suitable for factorization or cross-parsing.

use crate::error::KkpError;

/// Maps `values` to a byte string, rejecting any value outside `0..=255`.
///
/// # Errors
///
/// Returns [`KkpError::AlphabetOverflow`] for the first value outside `0..=255`.
///
/// # Examples
///
/// ```
/// use kkp::lattice::to_bytes;
///
/// assert_eq!(to_bytes(&[0, 1, 255]).unwrap(), vec![0, 1, 255]);
/// assert!(to_bytes(&[256]).is_err());
/// ```
pub fn to_bytes(values: &[i64]) -> Result<Vec<u8>, KkpError> {
    values
        .iter()
        .map(|&value| {
            if !(0..=255).contains(&value) {
                return Err(KkpError::AlphabetOverflow { value, max: 255 });
            }
            Ok(value as u8)
        })
        .collect()
}

/// As [`to_bytes`], but shifts every value by `+1` and rejects values outside `0..=254`,
/// guaranteeing no output byte is `0` (the cross-parse separator).
///
/// # Errors
///
/// Returns [`KkpError::AlphabetOverflow`] for the first value outside `0..=254`.
pub fn to_bytes_cross_parse_safe(values: &[i64]) -> Result<Vec<u8>, KkpError> {
    values
        .iter()
        .map(|&value| {
            if !(0..=254).contains(&value) {
                return Err(KkpError::AlphabetOverflow { value, max: 254 });
            }
            Ok((value + 1) as u8)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_accepts_full_range() {
        assert_eq!(to_bytes(&[0, 128, 255]).unwrap(), vec![0, 128, 255]);
    }

    #[test]
    fn to_bytes_rejects_negative_and_overflow() {
        assert!(matches!(
            to_bytes(&[-1]),
            Err(KkpError::AlphabetOverflow { value: -1, max: 255 })
        ));
        assert!(matches!(
            to_bytes(&[256]),
            Err(KkpError::AlphabetOverflow { value: 256, max: 255 })
        ));
    }

    #[test]
    fn cross_parse_safe_shifts_and_avoids_zero() {
        let bytes = to_bytes_cross_parse_safe(&[0, 1, 254]).unwrap();
        assert_eq!(bytes, vec![1, 2, 255]);
        assert!(!bytes.contains(&0));
    }

    #[test]
    fn cross_parse_safe_rejects_above_254() {
        assert!(matches!(
            to_bytes_cross_parse_safe(&[255]),
            Err(KkpError::AlphabetOverflow { value: 255, max: 254 })
        ));
    }
}
