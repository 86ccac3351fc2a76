// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Error types for the container layer.
//!
//! Structural anomalies inside a recognized container are never surfaced as
//! errors; the rewriters degrade to passing the remaining bytes through
//! verbatim. The only hard failure at this layer is a declared MIME type
//! outside the supported set, rejected before any parsing.

use std::fmt;

/// Errors from the metadata-strip entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The declared MIME type is not one of `image/jpeg`, `image/png`,
    /// `image/webp`.
    UnsupportedFormat(String),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(mime) => {
                write!(f, "unsupported format {mime:?} (use JPEG, PNG or WEBP)")
            }
        }
    }
}

impl std::error::Error for ContainerError {}
