// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Pixel-domain engines: LSB steganography, bit-plane steganalysis and
//! hash-breaking noise.
//!
//! All operations here are pure functions over owned
//! [`Raster`](crate::raster::Raster)s: no shared state, no caching, safe
//! to run concurrently from independent call sites. The byte-level
//! conveniences at the bottom bridge through the [`crate::codec`] boundary
//! for callers holding encoded files.

pub mod capacity;
pub mod error;
pub mod lsb;
pub mod noise;
pub mod payload;
pub mod scan;

pub use capacity::lsb_capacity;
pub use error::StegoError;
pub use lsb::{extract, hide, Extraction};
pub use noise::{inject_noise, inject_noise_with_rng};
pub use scan::{scan, ScanReport, ANOMALY_THRESHOLD};

use crate::codec;

/// Hide a message inside an encoded image, returning lossless PNG bytes.
///
/// PNG is non-negotiable for the output: the payload lives in the pixel
/// LSBs and would not survive lossy re-encoding.
///
/// # Errors
/// [`StegoError::Codec`] if `data` cannot be decoded;
/// [`StegoError::InsufficientCapacity`] if the message does not fit.
pub fn hide_in_image(data: &[u8], text: &str) -> Result<Vec<u8>, StegoError> {
    let cover = codec::decode(data)?;
    let stego = lsb::hide(&cover, text)?;
    Ok(codec::encode_png(&stego)?)
}

/// Extract a hidden message from an encoded image.
///
/// # Errors
/// [`StegoError::Codec`] if `data` cannot be decoded. A decodable image
/// with no embedded payload is not an error; see
/// [`Extraction::terminator_found`].
pub fn extract_from_image(data: &[u8]) -> Result<Extraction, StegoError> {
    Ok(lsb::extract(&codec::decode(data)?))
}

/// Scan an encoded image's LSB plane.
///
/// # Errors
/// [`StegoError::Codec`] if `data` cannot be decoded.
pub fn scan_image(data: &[u8]) -> Result<ScanReport, StegoError> {
    Ok(scan::scan(&codec::decode(data)?))
}
