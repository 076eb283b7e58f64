// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Linear-time LZ77 factorization over a precomputed suffix array, plus cross-parsing and a set
//! of entropy estimators built on top of it.
//!
//! This crate implements the **KKP family** of factorization algorithms (Kärkkäinen–Kempa–
//! Puglisi): given a text and its suffix array, compute its LZ77 parse in linear time using only
//! `O(n)` extra integer slots.
//!
//! - [`kkp2::factorize_in_memory`]: in-memory, non-destructive. The recommended default.
//! - [`kkp3::factorize_in_memory_destructive`]: in-memory, destructive (reuses the SA buffer).
//! - [`kkp1s::factorize_external_sa`]: streams the suffix array from external storage.
//! - [`cross_parse::cross_parse`]: the Ziv–Merhav relative-entropy estimator's factorization
//!   primitive, factoring one string against another via their joint suffix array.
//!
//! # Examples
//!
//! ```
//! use kkp::{kkp2::factorize_in_memory, suffix::build_suffix_array};
//!
//! let text = b"mississippi";
//! let sa = build_suffix_array(text);
//!
//! let mut factors = Vec::new();
//! let count = factorize_in_memory(text, &sa, &mut factors);
//!
//! assert_eq!(count, factors.len());
//! ```

pub mod config;
pub mod cross_parse;
pub mod entropy;
mod error;
pub mod factor;
pub mod kernel;
pub mod kkp1s;
pub mod kkp2;
pub mod kkp3;
pub mod lattice;
pub mod psv;
pub mod sa_source;
pub mod suffix;

pub use config::SaSourceConfig;
pub use error::KkpError;
pub use factor::{Factor, FactorSink};
