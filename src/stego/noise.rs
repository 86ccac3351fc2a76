// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Hash-breaking pixel noise.
//!
//! Perturbs roughly 1% of pixels by ±1 in a single randomly chosen color
//! channel. The change is far below the threshold of perception but alters
//! the file's cryptographic and perceptual hashes, defeating naive
//! duplicate tracking. Intentionally non-deterministic: two runs over the
//! same input produce different outputs.

use crate::raster::Raster;
use crate::trace::trace_line;
use rand::Rng;

/// Independent per-pixel probability of receiving a perturbation.
pub const NOISE_PROBABILITY: f64 = 0.01;

/// Perturb a raster using thread-local entropy.
///
/// Alpha is never touched; every changed channel moves by exactly 1 (with
/// clamping at 0 and 255). Returns a new raster.
pub fn inject_noise(raster: &Raster) -> Raster {
    inject_noise_with_rng(raster, &mut rand::thread_rng())
}

/// [`inject_noise`] with a caller-supplied generator.
///
/// Seed a `rand_chacha::ChaCha20Rng` for reproducible output: the PRNG
/// draws are per-pixel in row-major order, so equal seeds give equal
/// results on every platform.
pub fn inject_noise_with_rng<R: Rng + ?Sized>(raster: &Raster, rng: &mut R) -> Raster {
    let mut out = raster.clone();
    let mut touched = 0usize;

    for px in out.pixels_mut().chunks_exact_mut(4) {
        if rng.gen::<f64>() >= NOISE_PROBABILITY {
            continue;
        }
        let channel = rng.gen_range(0..3usize);
        let delta: i16 = if rng.gen_bool(0.5) { 1 } else { -1 };
        px[channel] = (px[channel] as i16 + delta).clamp(0, 255) as u8;
        touched += 1;
    }

    trace_line!(
        "noise: {} of {} pixels perturbed",
        touched,
        raster.pixel_count()
    );
    out
}
