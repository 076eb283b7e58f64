// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Cross-parsing: the Ziv–Merhav relative-entropy estimator's factorization primitive.
//!
//! Factors `s2` against `s1` by building the joint suffix array of `s1 ⊕ 0x00 ⊕ s2` and, for
//! every position in `s2`, walking the joint suffix array outward for the nearest neighboring
//! suffixes that are themselves anchored in `s1`. Shares [`kernel::extend`] with the ordinary
//! factorization drivers.

use sufsort::SuffixArray;

use crate::{error::KkpError, factor::FactorSink, kernel};

/// Cross-parses `s2` against `s1`, writing factors into `sink`.
///
/// Every emitted factor either is a literal or references a substring entirely inside `s1`.
///
/// # Errors
///
/// Returns [`KkpError::InvalidSeparator`] if either input contains the reserved byte `0x00`.
pub fn cross_parse(s1: &[u8], s2: &[u8], sink: &mut impl FactorSink) -> Result<usize, KkpError> {
    if s1.contains(&0) || s2.contains(&0) {
        return Err(KkpError::InvalidSeparator);
    }

    let n1 = s1.len();
    let n2 = s2.len();
    let joint_len = n1 + 1 + n2;
    log::debug!("cross_parse: {n1} bytes against {n2} bytes ({joint_len} joint)");

    if n2 == 0 {
        return Ok(0);
    }

    let mut buf = Vec::with_capacity(joint_len + 1);
    buf.extend_from_slice(s1);
    buf.push(0);
    buf.extend_from_slice(s2);
    buf.push(0);

    let joint_sa = SuffixArray::new(&buf);
    let full_isa = joint_sa.inverse();
    let sa: Vec<i32> = joint_sa
        .as_i32()
        .into_iter()
        .filter(|&pos| (pos as usize) < joint_len)
        .collect();

    // `buf`'s own trailing sentinel is the unique shortest suffix (just "\0"), so it always ranks
    // first in the full suffix array; every other position's rank drops by exactly one once that
    // entry is filtered out of `sa`.
    let isa: Vec<i32> = full_isa[..joint_len].iter().map(|&rank| rank - 1).collect();

    let u = &buf[..joint_len];
    let mut next = n1 + 1;
    let mut count = 0usize;

    while next < joint_len {
        let next_lex = isa[next] as usize;

        let mut psv = -1i32;
        let mut psv_lex = next_lex;
        while psv_lex > 0 {
            psv_lex -= 1;
            if (sa[psv_lex] as usize) < n1 {
                psv = sa[psv_lex];
                break;
            }
        }

        let mut nsv = -1i32;
        let mut nsv_lex = next_lex;
        while nsv_lex + 1 < sa.len() {
            nsv_lex += 1;
            if (sa[nsv_lex] as usize) < n1 {
                nsv = sa[nsv_lex];
                break;
            }
        }

        next = kernel::extend(u, next, psv, nsv, sink);
        count += 1;
    }

    log::debug!("cross_parse: emitted {count} factors");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factor::Factor;

    fn parse(s1: &[u8], s2: &[u8]) -> Vec<Factor> {
        let mut factors = Vec::new();
        cross_parse(s1, s2, &mut factors).unwrap();
        factors
    }

    #[test]
    fn rejects_separator_byte_in_either_input() {
        let mut sink = Vec::new();
        assert!(matches!(
            cross_parse(b"a\0b", b"c", &mut sink),
            Err(KkpError::InvalidSeparator)
        ));
        assert!(matches!(
            cross_parse(b"a", b"c\0d", &mut sink),
            Err(KkpError::InvalidSeparator)
        ));
    }

    #[test]
    fn empty_s2_yields_no_factors() {
        assert_eq!(parse(b"abracadabra", b""), vec![]);
    }

    #[test]
    fn every_backreference_points_into_s1() {
        let s1 = b"abracadabra";
        let s2 = b"bracadabra";
        let factors = parse(s1, s2);

        let mut pos = 0usize;
        for f in &factors {
            if f.len > 0 {
                assert!((f.pos as usize) < s1.len());
                assert_eq!(
                    &s1[f.pos as usize..f.pos as usize + f.len as usize],
                    &s2[pos..pos + f.len as usize]
                );
            } else {
                assert_eq!(f.pos as u8, s2[pos]);
            }
            pos += f.len.max(1) as usize;
        }
        assert_eq!(pos, s2.len());
    }

    #[test]
    fn shared_prefix_parses_as_one_long_reference() {
        let s1 = b"abracadabra";
        let s2 = b"bracadabra";
        let factors = parse(s1, s2);

        assert!(factors.len() <= 2);
        assert!(factors[0].len as usize >= s2.len() - 1);
    }

    #[test]
    fn disjoint_alphabets_parse_entirely_as_literals() {
        let s1 = b"aaaaaaaa";
        let s2 = b"zzzzzzzz";
        let factors = parse(s1, s2);

        assert!(factors.iter().all(Factor::is_literal));
        assert_eq!(factors.len(), s2.len());
    }
}
