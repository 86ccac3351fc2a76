// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! JPEG metadata stripping.
//!
//! Walks the marker segments between SOI and SOS/EOI and drops the APPn
//! segments that carry EXIF, ICC and IPTC payloads. Everything else,
//! including the entire entropy-coded scan, is copied verbatim, so the
//! output decodes identically to the input. On any structural anomaly the
//! walk stops and the remaining bytes pass through unchanged; a slightly
//! broken file comes out no more broken than it went in.

use crate::trace::trace_line;

/// JPEG marker constants.
pub const SOI: u8 = 0xD8;
pub const EOI: u8 = 0xD9;
pub const SOS: u8 = 0xDA;
pub const APP0: u8 = 0xE0;
pub const APP1: u8 = 0xE1;
pub const APP2: u8 = 0xE2;
pub const APP13: u8 = 0xED;
pub const APP14: u8 = 0xEE;

/// Metadata-bearing APPn markers: EXIF/XMP (APP1), ICC (APP2), IPTC (APP13).
/// APP0 (JFIF) and APP14 (Adobe) are never removed; decoders rely on them.
const METADATA_MARKERS: [u8; 3] = [APP1, APP2, APP13];

fn is_metadata_marker(marker: u8) -> bool {
    METADATA_MARKERS.contains(&marker)
}

/// Strip metadata segments from a JPEG byte stream.
///
/// Returns a new buffer with all EXIF/ICC/IPTC APPn segments removed. If the
/// data does not start with SOI it is returned unchanged (as a fresh copy):
/// the caller declared the wrong type or handed over something unrecognized,
/// and stripping degrades to a no-op.
pub fn strip_jpeg(data: &[u8]) -> Vec<u8> {
    if data.len() < 4 || data[0] != 0xFF || data[1] != SOI {
        return data.to_vec();
    }

    let mut out = Vec::with_capacity(data.len());
    out.extend_from_slice(&data[..2]);
    let mut pos = 2;
    let mut dropped = 0usize;

    while pos + 1 < data.len() {
        // Anything that is not a marker here means the stream is corrupt;
        // keep the remainder verbatim.
        if data[pos] != 0xFF {
            out.extend_from_slice(&data[pos..]);
            break;
        }

        let marker = data[pos + 1];

        if marker == EOI {
            out.extend_from_slice(&data[pos..pos + 2]);
            break;
        }

        // Scan data follows SOS and is never parsed as segments.
        if marker == SOS {
            out.extend_from_slice(&data[pos..]);
            break;
        }

        if pos + 3 >= data.len() {
            out.extend_from_slice(&data[pos..]);
            break;
        }

        // Big-endian segment length, covering itself but not the marker.
        let length = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        let segment_end = pos + 2 + length;
        if length < 2 || segment_end > data.len() {
            out.extend_from_slice(&data[pos..]);
            break;
        }

        if is_metadata_marker(marker) {
            trace_line!("jpeg: dropped APP{} segment ({} bytes)", marker - APP0, 2 + length);
            dropped += 1;
        } else {
            out.extend_from_slice(&data[pos..segment_end]);
        }

        pos = segment_end;
    }

    if dropped > 0 {
        trace_line!("jpeg: {} metadata segment(s) removed", dropped);
    }
    out
}
