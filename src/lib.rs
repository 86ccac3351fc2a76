// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! # scour-core
//!
//! Pure-Rust image sanitation engine. Everything runs on the device that
//! produced the image; no bytes leave the process. Four engines:
//!
//! - **Metadata stripping** (`container` module): container-aware removal
//!   of EXIF/ICC/IPTC/XMP and text metadata from JPEG, PNG and WEBP, plus
//!   optional decoy EXIF injection for JPEG.
//! - **LSB steganography** (`stego::lsb`): hide and extract text payloads
//!   in the low bits of RGB pixel data.
//! - **Steganalysis** (`stego::scan`): render the LSB bit-plane and score
//!   its deviation from the natural 50/50 noise split.
//! - **Pixel noise** (`stego::noise`): imperceptible ±1 perturbations that
//!   break content hashes.
//!
//! Every operation is a synchronous pure function over an owned buffer or
//! raster; there is no shared mutable state and no cross-call caching, so
//! independent calls are safe to run concurrently.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use scour_core::{strip, hide_in_image, extract_from_image};
//!
//! let dirty = std::fs::read("photo.jpg").unwrap();
//! let clean = strip(&dirty, "image/jpeg").unwrap();
//!
//! let stego_png = hide_in_image(&clean, "meet at dawn").unwrap();
//! let message = extract_from_image(&stego_png).unwrap();
//! assert_eq!(message.text, "meet at dawn");
//! ```

pub mod codec;
pub mod container;
pub mod pipeline;
pub mod raster;
pub mod stego;
pub mod trace;

pub use codec::{decode, encode, encode_png, CodecError};
pub use container::{
    inject_decoy_exif, strip, strip_format, ContainerError, DecoyProfile, ImageFormat,
};
pub use pipeline::{sanitize, sanitize_format, PipelineError, SanitizeOptions};
#[cfg(feature = "parallel")]
pub use pipeline::sanitize_batch;
pub use raster::{Raster, RasterError};
pub use stego::{
    extract, extract_from_image, hide, hide_in_image, inject_noise, inject_noise_with_rng,
    lsb_capacity, scan, scan_image, Extraction, ScanReport, StegoError, ANOMALY_THRESHOLD,
};
