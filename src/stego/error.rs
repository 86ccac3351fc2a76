// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Error types for the pixel-domain engines.

use crate::codec::CodecError;
use std::fmt;

/// Errors from hiding, extracting, scanning or perturbing pixel data.
#[derive(Debug)]
pub enum StegoError {
    /// The payload does not fit in the raster's LSB capacity. Both counts
    /// are in bytes; `needed` includes the terminator.
    InsufficientCapacity { needed: usize, available: usize },
    /// The codec boundary failed to decode or re-encode (byte-level entry
    /// points only; raster-level operations never hit this).
    Codec(CodecError),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientCapacity { needed, available } => write!(
                f,
                "image too small: payload needs {needed} bytes, capacity is {available} bytes"
            ),
            Self::Codec(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for StegoError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}
