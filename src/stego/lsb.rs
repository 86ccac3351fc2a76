// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! LSB steganography codec.
//!
//! Hides a terminated text payload in the least-significant bits of the R,
//! G and B channels, one bit per channel, walking pixels in row-major
//! order. Extraction reads the same traversal and stops at the first
//! completed `0x00` byte.
//!
//! The embedding changes each touched channel value by at most 1:
//! invisible to the eye, fatal to any lossy re-encode. Stego output must be
//! persisted bit-exactly (PNG); see [`crate::codec::encode_png`].

use crate::raster::Raster;
use crate::stego::capacity::lsb_capacity;
use crate::stego::error::StegoError;
use crate::stego::payload::{self, ByteAssembler, TERMINATOR};
use crate::trace::trace_line;

/// Result of an extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The recovered message. Possibly truncated when no terminator was
    /// found; invalid UTF-8 sequences are replaced.
    pub text: String,
    /// Completed bytes read from the bit stream, terminator included.
    pub bytes_extracted: usize,
    /// Whether a `0x00` terminator was seen. `false` means the raster ran
    /// out first and `text` is a best-effort partial; the caller decides
    /// whether that means "not a stego image".
    pub terminator_found: bool,
}

/// Hide a text message in the raster's LSB plane.
///
/// Returns a new raster; pixels beyond the payload are untouched and the
/// input is never modified.
///
/// # Errors
/// [`StegoError::InsufficientCapacity`] when `text` plus its terminator
/// needs more bits than the raster holds. An exactly-full payload succeeds.
pub fn hide(raster: &Raster, text: &str) -> Result<Raster, StegoError> {
    let payload = payload::encode_payload(text);
    let available = lsb_capacity(raster);
    if payload.len() > available {
        return Err(StegoError::InsufficientCapacity {
            needed: payload.len(),
            available,
        });
    }

    trace_line!(
        "stego: embedding {} bytes ({} bits) into {}x{}",
        payload.len(),
        payload.len() * 8,
        raster.width(),
        raster.height()
    );

    let mut out = raster.clone();
    let mut bits = payload::iter_bits(&payload);
    'pixels: for px in out.pixels_mut().chunks_exact_mut(4) {
        for channel in 0..3 {
            match bits.next() {
                Some(bit) => px[channel] = (px[channel] & 0xFE) | bit,
                None => break 'pixels,
            }
        }
    }
    Ok(out)
}

/// Read the LSB plane back into a text message.
///
/// Never fails: a raster with no terminator yields whatever bytes were
/// recovered with `terminator_found == false`.
pub fn extract(raster: &Raster) -> Extraction {
    let mut assembler = ByteAssembler::new();
    let mut bytes = Vec::new();
    let mut terminator_found = false;

    'pixels: for px in raster.pixels().chunks_exact(4) {
        for channel in 0..3 {
            if let Some(byte) = assembler.push(px[channel] & 1) {
                if byte == TERMINATOR {
                    terminator_found = true;
                    break 'pixels;
                }
                bytes.push(byte);
            }
        }
    }

    let bytes_extracted = bytes.len() + usize::from(terminator_found);
    trace_line!(
        "stego: extracted {} bytes (terminator {})",
        bytes_extracted,
        if terminator_found { "found" } else { "missing" }
    );

    Extraction {
        text: String::from_utf8_lossy(&bytes).into_owned(),
        bytes_extracted,
        terminator_found,
    }
}
