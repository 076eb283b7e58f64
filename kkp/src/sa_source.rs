// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Uniform access to suffix array entries, whether held in memory or streamed from a file.

use std::{fs::File, io::Read, path::Path};

use byteorder::{ByteOrder, LittleEndian};

use crate::{config::SaSourceConfig, error::KkpError};

/// A source of suffix array entries, yielded in scan order.
///
/// Implementations are read strictly sequentially: every PSV/NSV scan calls [`SaSource::next`]
/// exactly `n` times and never seeks backward.
pub trait SaSource {
    /// Returns the next suffix array entry.
    ///
    /// # Panics
    ///
    /// May panic if called more than `n` times for a source backed by `n` entries.
    fn next(&mut self) -> i32;
}

/// An in-memory suffix array source backed by a `&[i32]` slice.
pub struct InMemorySaSource<'a> {
    sa: &'a [i32],
    pos: usize,
}

impl<'a> InMemorySaSource<'a> {
    /// Creates a new in-memory source over `sa`.
    #[must_use]
    pub const fn new(sa: &'a [i32]) -> Self {
        Self { sa, pos: 0 }
    }
}

impl SaSource for InMemorySaSource<'_> {
    fn next(&mut self) -> i32 {
        let value = self.sa[self.pos];
        self.pos += 1;
        value
    }
}

/// A suffix array source backed by a file of little-endian 32-bit signed integers.
///
/// The file is opened on construction and closed on drop. Reads are buffered in fixed blocks of
/// [`SaSourceConfig::read_buffer_len`] entries; there is no seeking and no concurrent access.
pub struct ExternalSaSource {
    file: File,
    buf: Vec<u8>,
    len: usize,
    pos: usize,
}

impl ExternalSaSource {
    /// Opens `path` as an external suffix array source, using the default buffer size.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, KkpError> {
        Self::open_with_config(path, &SaSourceConfig::default())
    }

    /// Opens `path` as an external suffix array source, using a custom read buffer size.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open_with_config(path: &Path, config: &SaSourceConfig) -> Result<Self, KkpError> {
        let file = File::open(path)?;
        log::debug!(
            "opened external suffix array source {} with buffer {} entries",
            path.display(),
            config.read_buffer_len,
        );

        Ok(Self {
            file,
            buf: vec![0u8; config.read_buffer_len * 4],
            len: 0,
            pos: 0,
        })
    }

    fn refill(&mut self) -> Result<(), KkpError> {
        let mut filled = 0;
        loop {
            let read = self.file.read(&mut self.buf[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
            if filled == self.buf.len() {
                break;
            }
        }
        self.len = filled / 4;
        self.pos = 0;
        Ok(())
    }
}

impl SaSource for ExternalSaSource {
    fn next(&mut self) -> i32 {
        if self.pos == self.len {
            self.refill().expect("failed to refill external SA buffer");
        }

        let offset = self.pos * 4;
        let value = LittleEndian::read_i32(&self.buf[offset..offset + 4]);
        self.pos += 1;
        value
    }
}
