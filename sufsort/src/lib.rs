// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![no_std]

extern crate alloc;

mod sacak;
mod suffix_array;

pub use suffix_array::SuffixArray;
