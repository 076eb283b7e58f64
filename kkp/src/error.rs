// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

/// An error occurring while factorizing, cross-parsing, or preprocessing input for this crate.
///
/// # Examples
///
/// ```
/// use kkp::{lattice, KkpError};
///
/// let result = lattice::to_bytes(&[0, 1, 999]);
///
/// assert!(matches!(result, Err(KkpError::AlphabetOverflow { value: 999, max: 255 })));
/// ```
#[derive(Debug)]
pub enum KkpError {
    /// An I/O error occurred, e.g. while opening or reading an external suffix array file.
    Io(io::Error),
    /// A lattice value fell outside the byte alphabet accepted by [`crate::lattice`].
    AlphabetOverflow {
        /// The offending value.
        value: i64,
        /// The largest value accepted by the mapping that rejected it.
        max: i64,
    },
    /// Cross-parsing input contained the reserved separator byte `0`.
    InvalidSeparator,
}

impl Display for KkpError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            KkpError::Io(e) => write!(f, "I/O error: {e}"),
            KkpError::AlphabetOverflow { value, max } => {
                write!(f, "value {value} exceeds maximum accepted value {max}")
            }
            KkpError::InvalidSeparator => {
                write!(f, "input contains the reserved cross-parse separator byte 0")
            }
        }
    }
}

impl Error for KkpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            KkpError::Io(e) => Some(e),
            KkpError::AlphabetOverflow { .. } | KkpError::InvalidSeparator => None,
        }
    }
}

impl From<io::Error> for KkpError {
    fn from(e: io::Error) -> Self {
        KkpError::Io(e)
    }
}
