// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Metadata stripping properties across all three containers: metadata
//! gone, structure intact, idempotent, graceful on mismatched content.

use scour_core::{strip, ContainerError};

// ---------------------------------------------------------------------------
// Fixture builders
// ---------------------------------------------------------------------------

fn jpeg_segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut seg = vec![0xFF, marker];
    seg.extend_from_slice(&((payload.len() as u16 + 2).to_be_bytes()));
    seg.extend_from_slice(payload);
    seg
}

fn jpeg_file(segments: &[Vec<u8>], scan_data: &[u8]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    for seg in segments {
        data.extend_from_slice(seg);
    }
    data.extend_from_slice(&jpeg_segment(0xDA, &[1, 1, 0, 0, 63, 0]));
    data.extend_from_slice(scan_data);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

fn png_chunk(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut c = Vec::new();
    c.extend_from_slice(&(data.len() as u32).to_be_bytes());
    c.extend_from_slice(tag);
    c.extend_from_slice(data);
    c.extend_from_slice(&[0x11, 0x22, 0x33, 0x44]); // CRC bytes, never checked
    c
}

fn png_file(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut data = vec![137, 80, 78, 71, 13, 10, 26, 10];
    for c in chunks {
        data.extend_from_slice(c);
    }
    data
}

fn webp_chunk(fourcc: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut c = Vec::new();
    c.extend_from_slice(fourcc);
    c.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    c.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        c.push(0);
    }
    c
}

fn webp_file(chunks: &[Vec<u8>]) -> Vec<u8> {
    let payload_size = 4 + chunks.iter().map(Vec::len).sum::<usize>();
    let mut data = Vec::new();
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(payload_size as u32).to_le_bytes());
    data.extend_from_slice(b"WEBP");
    for c in chunks {
        data.extend_from_slice(c);
    }
    data
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|w| *w == needle)
        .count()
}

// ---------------------------------------------------------------------------
// JPEG
// ---------------------------------------------------------------------------

#[test]
fn jpeg_metadata_markers_all_removed() {
    let data = jpeg_file(
        &[
            jpeg_segment(0xE0, b"JFIF\0\x01\x02"),
            jpeg_segment(0xE1, b"Exif\0\0fake-exif-payload"),
            jpeg_segment(0xE2, b"ICC_PROFILE\0data"),
            jpeg_segment(0xDB, &[0u8; 65]),
            jpeg_segment(0xED, b"Photoshop 3.0\08BIM"),
            jpeg_segment(0xEE, b"Adobe\0stuff"),
            jpeg_segment(0xC0, &[8, 0, 16, 0, 16, 1, 1, 0x11, 0]),
        ],
        &[0xAA; 32],
    );

    let out = strip(&data, "image/jpeg").unwrap();

    assert_eq!(count_occurrences(&out, &[0xFF, 0xE1]), 0);
    assert_eq!(count_occurrences(&out, &[0xFF, 0xE2]), 0);
    assert_eq!(count_occurrences(&out, &[0xFF, 0xED]), 0);
    // JFIF and Adobe survive.
    assert_eq!(count_occurrences(&out, &[0xFF, 0xE0]), 1);
    assert_eq!(count_occurrences(&out, &[0xFF, 0xEE]), 1);
    // SOI/EOI frame intact.
    assert_eq!(&out[0..2], &[0xFF, 0xD8]);
    assert_eq!(&out[out.len() - 2..], &[0xFF, 0xD9]);
}

#[test]
fn jpeg_strip_is_idempotent() {
    let data = jpeg_file(
        &[
            jpeg_segment(0xE1, b"Exif\0\0abcdef"),
            jpeg_segment(0xDB, &[0u8; 65]),
        ],
        &[0x55; 16],
    );
    let once = strip(&data, "image/jpeg").unwrap();
    let twice = strip(&once, "image/jpeg").unwrap();
    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// PNG
// ---------------------------------------------------------------------------

#[test]
fn png_metadata_chunks_all_removed() {
    let data = png_file(&[
        png_chunk(b"IHDR", &[0, 0, 0, 2, 0, 0, 0, 2, 8, 6, 0, 0, 0]),
        png_chunk(b"tEXt", b"Author\0nobody"),
        png_chunk(b"zTXt", b"Comment\0\0x"),
        png_chunk(b"iTXt", b"Title\0\0\0\0\0t"),
        png_chunk(b"tIME", &[7, 0xE8, 1, 1, 0, 0, 0]),
        png_chunk(b"IDAT", &[0x78, 0x9C, 1, 2, 3]),
        png_chunk(b"eXIf", &[0x49, 0x49, 0x2A, 0]),
        png_chunk(b"IEND", &[]),
    ]);

    let out = strip(&data, "image/png").unwrap();

    for tag in [b"eXIf", b"iTXt", b"tEXt", b"zTXt", b"tIME"] {
        assert_eq!(count_occurrences(&out, tag), 0, "tag {tag:?} survived");
    }
    // Still a structurally valid PNG: signature first, IEND last.
    assert!(out.starts_with(&[137, 80, 78, 71, 13, 10, 26, 10]));
    assert!(out.ends_with(&png_chunk(b"IEND", &[])));
}

#[test]
fn png_exif_removal_shrinks_exactly() {
    // A 2×2 PNG with a 10-byte eXIf chunk before IEND loses exactly
    // 10 + 12 bytes, with IHDR/IDAT/IEND in original relative order.
    let ihdr = png_chunk(b"IHDR", &[0, 0, 0, 2, 0, 0, 0, 2, 8, 6, 0, 0, 0]);
    let idat = png_chunk(b"IDAT", &[1, 2, 3, 4, 5, 6]);
    let exif = png_chunk(b"eXIf", &[0xAB; 10]);
    let iend = png_chunk(b"IEND", &[]);
    let data = png_file(&[ihdr.clone(), idat.clone(), exif, iend.clone()]);

    let out = strip(&data, "image/png").unwrap();

    assert_eq!(out.len(), data.len() - 22);
    assert_eq!(out, png_file(&[ihdr, idat, iend]));
}

#[test]
fn png_strip_is_idempotent() {
    let data = png_file(&[
        png_chunk(b"IHDR", &[0; 13]),
        png_chunk(b"tEXt", b"k\0v"),
        png_chunk(b"IDAT", &[9; 30]),
        png_chunk(b"IEND", &[]),
    ]);
    let once = strip(&data, "image/png").unwrap();
    assert_eq!(strip(&once, "image/png").unwrap(), once);
}

// ---------------------------------------------------------------------------
// WEBP
// ---------------------------------------------------------------------------

#[test]
fn webp_exif_removed_and_flags_cleared() {
    let vp8x_payload = [0x08 | 0x04 | 0x10, 0, 0, 0, 63, 0, 0, 63, 0, 0];
    let data = webp_file(&[
        webp_chunk(b"VP8X", &vp8x_payload),
        webp_chunk(b"VP8 ", &[0x30; 25]),
        webp_chunk(b"EXIF", &[0x49, 0x49, 0x2A, 0, 1, 2, 3]),
        webp_chunk(b"XMP ", b"<x:xmpmeta/>"),
    ]);

    let out = strip(&data, "image/webp").unwrap();

    assert_eq!(count_occurrences(&out, b"EXIF"), 0);
    assert_eq!(count_occurrences(&out, b"XMP "), 0);
    // VP8X flags: EXIF (0x08) and XMP (0x04) cleared, ALPHA (0x10) kept.
    let vp8x_pos = out.windows(4).position(|w| w == b"VP8X").unwrap();
    assert_eq!(out[vp8x_pos + 8], 0x10);
    // Declared RIFF size equals remaining byte count minus 8.
    let declared = u32::from_le_bytes([out[4], out[5], out[6], out[7]]) as usize;
    assert_eq!(declared, out.len() - 8);
}

#[test]
fn webp_strip_is_idempotent() {
    let data = webp_file(&[
        webp_chunk(b"VP8X", &[0x08, 0, 0, 0, 63, 0, 0, 63, 0, 0]),
        webp_chunk(b"VP8 ", &[0x30; 21]),
        webp_chunk(b"EXIF", &[1; 11]),
    ]);
    let once = strip(&data, "image/webp").unwrap();
    assert_eq!(strip(&once, "image/webp").unwrap(), once);
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn unsupported_mime_rejected() {
    assert!(matches!(
        strip(b"GIF89a", "image/gif"),
        Err(ContainerError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        strip(b"", "text/plain"),
        Err(ContainerError::UnsupportedFormat(_))
    ));
}

#[test]
fn signature_mismatch_degrades_to_copy() {
    let png = png_file(&[png_chunk(b"IHDR", &[0; 13]), png_chunk(b"IEND", &[])]);
    // Declared JPEG, actually PNG: the JPEG rewriter passes it through.
    assert_eq!(strip(&png, "image/jpeg").unwrap(), png);
    // And vice versa.
    let jpeg = jpeg_file(&[], &[]);
    assert_eq!(strip(&jpeg, "image/png").unwrap(), jpeg);
    assert_eq!(strip(&jpeg, "image/webp").unwrap(), jpeg);
}
