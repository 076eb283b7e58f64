// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Tunable constants for the PSV/NSV engine and the external suffix array source.

/// Configuration for the PSV/NSV engine and external suffix array reads.
///
/// The defaults match the reference KKP implementation's hardcoded constants and should be
/// optimal for most use cases. Reducing [`SaSourceConfig::stack_size`] trades peak memory for
/// more frequent implicit-stack reconstructions; reducing [`SaSourceConfig::read_buffer_len`]
/// trades I/O throughput for lower external-source memory use.
///
/// # Examples
///
/// ```
/// use kkp::SaSourceConfig;
///
/// let mut config = SaSourceConfig::new();
/// config.stack_size(1 << 12);
/// assert_eq!(config.stack_size, 1 << 12);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct SaSourceConfig {
    /// Size of the bounded explicit stack used by the PSV/NSV engine.
    pub stack_size: usize,
    /// Number of `i32` entries buffered per read from an external suffix array file.
    pub read_buffer_len: usize,
}

impl SaSourceConfig {
    /// The default bounded stack size.
    ///
    /// This is `2^16`, matching the reference implementation's `STACK_SIZE`. Peak PSV/NSV
    /// auxiliary memory is this value plus a small constant, independent of input size.
    pub const DEFAULT_STACK_SIZE: usize = 1 << 16;

    /// The default external suffix array read buffer length, in `i32` entries.
    ///
    /// This is `2^15`, matching the reference implementation's `SA_streamer::bufsize`.
    pub const DEFAULT_READ_BUFFER_LEN: usize = 1 << 15;

    /// Creates a new configuration using the reference implementation's defaults.
    pub const fn new() -> Self {
        Self {
            stack_size: Self::DEFAULT_STACK_SIZE,
            read_buffer_len: Self::DEFAULT_READ_BUFFER_LEN,
        }
    }

    /// Sets the bounded explicit stack size.
    ///
    /// Must be a power of two for the overflow-halving and modulus-by-mask logic in the PSV/NSV
    /// engine to behave correctly; this is not currently enforced by this setter.
    pub fn stack_size(&mut self, stack_size: usize) -> &mut Self {
        self.stack_size = stack_size;
        self
    }

    /// Sets the external suffix array read buffer length.
    pub fn read_buffer_len(&mut self, read_buffer_len: usize) -> &mut Self {
        self.read_buffer_len = read_buffer_len;
        self
    }
}

impl Default for SaSourceConfig {
    fn default() -> Self {
        Self::new()
    }
}
