// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! LSB codec round-trip laws, at the raster level and through a real
//! PNG encode/decode cycle.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use scour_core::{extract, extract_from_image, hide, hide_in_image, Raster, StegoError};

fn noisy_cover(w: u32, h: u32, seed: u8) -> Raster {
    let mut rng = ChaCha20Rng::from_seed([seed; 32]);
    let mut pixels = vec![0u8; w as usize * h as usize * 4];
    rng.fill(pixels.as_mut_slice());
    // Opaque alpha, like a decoded photo.
    for px in pixels.chunks_exact_mut(4) {
        px[3] = 255;
    }
    Raster::from_rgba8(w, h, pixels).unwrap()
}

#[test]
fn roundtrip_plain_text() {
    let cover = noisy_cover(32, 32, 1);
    let stego = hide(&cover, "the quick brown fox").unwrap();
    let result = extract(&stego);
    assert_eq!(result.text, "the quick brown fox");
    assert!(result.terminator_found);
    assert_eq!(result.bytes_extracted, 20);
}

#[test]
fn roundtrip_empty_and_multibyte_utf8() {
    let cover = noisy_cover(16, 16, 2);

    let result = extract(&hide(&cover, "").unwrap());
    assert_eq!(result.text, "");
    assert!(result.terminator_found);

    let message = "héllo wörld — 世界 🦀";
    let result = extract(&hide(&cover, message).unwrap());
    assert_eq!(result.text, message);
    assert_eq!(result.bytes_extracted, message.len() + 1);
}

#[test]
fn capacity_boundary_10x10() {
    // 100 pixels → 300 bits → 37 bytes of capacity.
    let cover = noisy_cover(10, 10, 3);

    // "hi" needs 3 bytes with terminator, plenty.
    assert!(hide(&cover, "hi").is_ok());

    // 36 characters + terminator = 37 bytes, exactly full.
    let exact = "a".repeat(36);
    let stego = hide(&cover, &exact).unwrap();
    assert_eq!(extract(&stego).text, exact);

    // One more byte does not fit, and a 400-character string certainly not.
    assert!(matches!(
        hide(&cover, &"a".repeat(37)),
        Err(StegoError::InsufficientCapacity { needed: 38, available: 37 })
    ));
    assert!(matches!(
        hide(&cover, &"a".repeat(400)),
        Err(StegoError::InsufficientCapacity { .. })
    ));
}

#[test]
fn cover_is_never_mutated() {
    let cover = noisy_cover(8, 8, 4);
    let before = cover.clone();
    let _ = hide(&cover, "mutation check").unwrap();
    let _ = extract(&cover);
    assert_eq!(cover, before);
}

#[test]
fn roundtrip_through_png_codec() {
    // The full byte-level path: decode cover PNG, embed, re-encode
    // lossless, decode again, extract.
    let cover = noisy_cover(24, 24, 5);
    let cover_png = scour_core::encode_png(&cover).unwrap();

    let stego_png = hide_in_image(&cover_png, "survives the codec").unwrap();
    let result = extract_from_image(&stego_png).unwrap();

    assert_eq!(result.text, "survives the codec");
    assert!(result.terminator_found);
}

#[test]
fn byte_level_entry_points_propagate_decode_failure() {
    assert!(matches!(
        hide_in_image(b"definitely not an image", "x"),
        Err(StegoError::Codec(_))
    ));
    assert!(matches!(
        extract_from_image(b"definitely not an image"),
        Err(StegoError::Codec(_))
    ));
}
