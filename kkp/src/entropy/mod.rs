// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Entropy and complexity estimators built on top of the core factorization and suffix-array
//! primitives.
//!
//! These are downstream consumers of [`crate::kkp2`], [`crate::cross_parse`], and `sufsort`; none
//! of them participate in the PSV/NSV engine directly.

mod block_entropy;
mod block_sorting;
mod complexity;
mod gosper;
mod lz_kkp;

pub use block_entropy::block_entropy;
pub use block_sorting::block_sorting_estimator_uniform;
pub use complexity::{lz_complexity_76, lz_complexity_78};
pub use gosper::gosper_distance;
pub use lz_kkp::{
    cross_parse_complexity_sumlog, lz77_complexity_kkp, lz77_complexity_sumlog_kkp,
    lz77_factors_kkp,
};
