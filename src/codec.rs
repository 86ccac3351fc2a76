// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Raster decode/encode boundary.
//!
//! The pixel-domain engines (LSB codec, scanner, noise injector) operate on
//! [`Raster`] values and treat compression as someone else's problem. This
//! module is that someone: a thin layer over the `image` crate that turns
//! bytes into rasters and back. PNG and WEBP re-encodes are lossless; JPEG
//! re-encodes use quality 95, high enough that a ±1 pixel perturbation
//! stays visually invisible after compression.

use crate::container::ImageFormat;
use crate::raster::{Raster, RasterError};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fmt;

/// JPEG re-encode quality. Matches the "high quality, hash-breaking but
/// visually imperceptible" goal of the noise pass.
pub const JPEG_REENCODE_QUALITY: u8 = 95;

/// Errors from the codec boundary.
#[derive(Debug)]
pub enum CodecError {
    /// The bytes could not be decoded as an image.
    Decode(image::ImageError),
    /// Re-encoding the raster failed.
    Encode(image::ImageError),
    /// The decoder produced a buffer inconsistent with its dimensions.
    Geometry(RasterError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "image decode failed: {e}"),
            Self::Encode(e) => write!(f, "image encode failed: {e}"),
            Self::Geometry(e) => write!(f, "decoded raster geometry invalid: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) | Self::Encode(e) => Some(e),
            Self::Geometry(e) => Some(e),
        }
    }
}

impl From<RasterError> for CodecError {
    fn from(e: RasterError) -> Self {
        Self::Geometry(e)
    }
}

/// Decode an image buffer (any format the `image` crate recognizes) into an
/// RGBA8 raster.
///
/// # Errors
/// [`CodecError::Decode`] when the bytes are not a decodable image.
pub fn decode(data: &[u8]) -> Result<Raster, CodecError> {
    let img = image::load_from_memory(data).map_err(CodecError::Decode)?;
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Raster::from_rgba8(width, height, rgba.into_raw())?)
}

/// Encode a raster in the given container format.
///
/// PNG and WEBP are lossless; JPEG uses [`JPEG_REENCODE_QUALITY`] and drops
/// the alpha channel (JPEG has none).
pub fn encode(raster: &Raster, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let (w, h) = (raster.width(), raster.height());
    match format {
        ImageFormat::Jpeg => {
            let rgb = drop_alpha(raster.pixels());
            JpegEncoder::new_with_quality(&mut out, JPEG_REENCODE_QUALITY)
                .write_image(&rgb, w, h, ExtendedColorType::Rgb8)
                .map_err(CodecError::Encode)?;
        }
        ImageFormat::Png => {
            PngEncoder::new(&mut out)
                .write_image(raster.pixels(), w, h, ExtendedColorType::Rgba8)
                .map_err(CodecError::Encode)?;
        }
        ImageFormat::Webp => {
            WebPEncoder::new_lossless(&mut out)
                .write_image(raster.pixels(), w, h, ExtendedColorType::Rgba8)
                .map_err(CodecError::Encode)?;
        }
    }
    Ok(out)
}

/// Encode a raster as lossless PNG.
///
/// This is the persistence format for stego output: the payload lives in
/// the low bit of the pixel values, and any lossy re-encode would destroy it.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, CodecError> {
    encode(raster, ImageFormat::Png)
}

fn drop_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
