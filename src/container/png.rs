// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! PNG metadata stripping.
//!
//! Drops the textual and EXIF chunks from the stream following the 8-byte
//! signature. A chunk is removed whole (length, type, data and CRC), so
//! every retained chunk keeps its original CRC and the output needs no
//! checksum recomputation. The walk ends at `IEND`; trailing garbage after
//! it is discarded along with the metadata.

use crate::trace::trace_line;

/// The fixed 8-byte PNG signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Chunk types that commonly store EXIF or text metadata.
const METADATA_CHUNKS: [&[u8; 4]; 5] = [b"eXIf", b"iTXt", b"tEXt", b"zTXt", b"tIME"];

fn is_metadata_chunk(tag: &[u8]) -> bool {
    METADATA_CHUNKS.iter().any(|m| *m as &[u8] == tag)
}

/// Strip metadata chunks from a PNG byte stream.
///
/// Returns a new buffer with all `eXIf`/`iTXt`/`tEXt`/`zTXt`/`tIME` chunks
/// removed. Data without the PNG signature is returned unchanged. A chunk
/// whose declared length would overrun the buffer ends the walk with the
/// remainder copied verbatim.
pub fn strip_png(data: &[u8]) -> Vec<u8> {
    if data.len() < PNG_SIGNATURE.len() || data[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        return data.to_vec();
    }

    let mut out = Vec::with_capacity(data.len());
    out.extend_from_slice(&PNG_SIGNATURE);
    let mut pos = PNG_SIGNATURE.len();
    let mut dropped = 0usize;

    while pos + 8 <= data.len() {
        let length = u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
            as usize;
        // length + type + data + CRC
        let chunk_end = pos + 12 + length;
        if chunk_end > data.len() {
            out.extend_from_slice(&data[pos..]);
            break;
        }

        let tag = &data[pos + 4..pos + 8];
        if is_metadata_chunk(tag) {
            trace_line!(
                "png: dropped {} chunk ({} bytes)",
                String::from_utf8_lossy(tag),
                12 + length
            );
            dropped += 1;
        } else {
            out.extend_from_slice(&data[pos..chunk_end]);
        }

        pos = chunk_end;

        // IEND is never in the metadata set, so it has just been retained.
        if tag == b"IEND" {
            break;
        }
    }

    if dropped > 0 {
        trace_line!("png: {} metadata chunk(s) removed", dropped);
    }
    out
}
