// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! The LZ77 factor type and the sink trait every factorization driver writes into.

/// A single LZ77 factor.
///
/// If `len == 0`, this is a literal phrase: `pos` holds the literal byte value of the text
/// position it covers, and the factor covers exactly one position. Otherwise this is a
/// back-reference: the `len` bytes starting at the phrase's text position equal the `len` bytes
/// starting at `pos`, and `pos` is strictly less than the phrase's text position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Factor {
    /// A previous phrase occurrence (if `len > 0`) or a literal byte value (if `len == 0`).
    pub pos: i32,
    /// The phrase length, or `0` for a literal.
    pub len: u32,
}

impl Factor {
    /// Creates a new factor.
    #[must_use]
    pub const fn new(pos: i32, len: u32) -> Self {
        Self { pos, len }
    }

    /// Returns `true` if this factor is a literal, i.e. `len == 0`.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.len == 0
    }
}

/// A sink that factorization and cross-parsing drivers write emitted factors into.
///
/// Every driver calls [`FactorSink::push`] for every factor it emits, even when the caller only
/// wants the factor count: this mirrors the reference implementation's behavior of performing
/// the same bookkeeping work regardless of whether its output vector pointer is null, and keeps
/// [`FactorSink::push`] itself infallible and cheap to no-op for `()`.
pub trait FactorSink {
    /// Records one emitted factor.
    fn push(&mut self, factor: Factor);
}

/// A null sink: counts factors without recording them.
impl FactorSink for () {
    fn push(&mut self, _factor: Factor) {}
}

/// A collecting sink: records every emitted factor in order.
impl FactorSink for Vec<Factor> {
    fn push(&mut self, factor: Factor) {
        self.push(factor);
    }
}
