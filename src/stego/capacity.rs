// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! LSB embedding capacity.

use crate::raster::Raster;

/// Usable bits per pixel: one LSB in each of R, G and B. Alpha is never
/// touched; many encoders special-case fully opaque alpha, and flipping
/// its low bit is far more detectable than a color-channel flip.
pub const BITS_PER_PIXEL: usize = 3;

/// Maximum payload size in whole bytes for the given raster, terminator
/// included.
pub fn lsb_capacity(raster: &Raster) -> usize {
    raster.pixel_count() * BITS_PER_PIXEL / 8
}
