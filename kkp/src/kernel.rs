// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! The phrase-extension kernel shared by every factorization driver and the cross-parser.

use crate::factor::{Factor, FactorSink};

/// Extends the longest common prefixes of `X[i..]` with `X[psv..]` and `X[nsv..]`, emits the
/// resulting factor into `sink`, and returns the text position where the next phrase begins.
///
/// `psv` and `nsv` are the previous and next smaller suffix array values for position `i`, or
/// `-1` if absent. At least one of `psv`, `nsv` is non-negative whenever `i < x.len()`, since
/// every suffix other than the lexicographically smallest one has either a PSV or an NSV.
pub fn extend(x: &[u8], i: usize, psv: i32, nsv: i32, sink: &mut impl FactorSink) -> usize {
    let n = x.len();
    let mut len = 0usize;
    let pos;

    if nsv < 0 {
        let psv = psv as usize;
        while psv + len < n && i + len < n && x[psv + len] == x[i + len] {
            len += 1;
        }
        debug_assert!(
            i + len < n,
            "PSV-only extension should stop at a mismatch, not at end-of-text, on a correct SA"
        );
        pos = psv as i32;
    } else if psv < 0 {
        let nsv = nsv as usize;
        while i + len < n && nsv + len < n && x[nsv + len] == x[i + len] {
            len += 1;
        }
        pos = nsv as i32;
    } else {
        let psv_u = psv as usize;
        let nsv_u = nsv as usize;

        while psv_u + len < n && nsv_u + len < n && x[psv_u + len] == x[nsv_u + len] {
            len += 1;
        }

        if i + len < n && psv_u + len < n && x[i + len] == x[psv_u + len] {
            len += 1;
            while i + len < n && psv_u + len < n && x[i + len] == x[psv_u + len] {
                len += 1;
            }
            pos = psv;
        } else {
            while i + len < n && nsv_u + len < n && x[i + len] == x[nsv_u + len] {
                len += 1;
            }
            pos = nsv;
        }
    }

    let (pos, len) = if len == 0 {
        (x[i] as i32, 0)
    } else {
        (pos, len as u32)
    };

    sink.push(Factor::new(pos, len));

    i + (len as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_when_no_match() {
        let x = b"abc";
        let mut out = Vec::new();
        let next = extend(x, 0, -1, -1, &mut out);

        assert_eq!(next, 1);
        assert_eq!(out, vec![Factor::new(b'a' as i32, 0)]);
    }

    #[test]
    fn psv_only_extension() {
        let x = b"aaaa";
        let mut out = Vec::new();
        // At i=1, psv=0, no nsv (suffix "aaa" is not lexicographically smaller than anything
        // that follows it other than its own psv chain).
        let next = extend(x, 1, 0, -1, &mut out);

        assert_eq!(next, 4);
        assert_eq!(out, vec![Factor::new(0, 3)]);
    }
}
