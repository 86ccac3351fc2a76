// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Container-aware metadata stripping.
//!
//! One rewriter per supported container (JPEG segments, PNG chunks,
//! WEBP/RIFF chunks), dispatched by declared MIME type. The dispatcher
//! trusts the declaration (it never sniffs magic bytes itself), but every
//! rewriter verifies its own signature and degrades to a verbatim copy when
//! it does not match, so a mislabeled file is passed through rather than
//! mangled.

pub mod error;
pub mod exif;
pub mod jpeg;
pub mod png;
pub mod webp;

pub use error::ContainerError;
pub use exif::{inject_decoy_exif, DecoyProfile};

/// The three supported image containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    /// Resolve a declared MIME type. Returns `None` for anything outside
    /// the supported set.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// The canonical MIME type for this format.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }
}

/// Strip metadata from an image buffer of the declared MIME type.
///
/// Always returns a freshly allocated buffer; the input is never mutated.
/// When the content does not match the declared type (missing signature)
/// or the container is internally malformed, the result degrades toward a
/// verbatim copy instead of failing; see the individual rewriters.
///
/// # Errors
/// [`ContainerError::UnsupportedFormat`] if `mime` is not one of
/// `image/jpeg`, `image/png`, `image/webp`. This is checked before any
/// parsing.
pub fn strip(data: &[u8], mime: &str) -> Result<Vec<u8>, ContainerError> {
    let format = ImageFormat::from_mime(mime)
        .ok_or_else(|| ContainerError::UnsupportedFormat(mime.to_string()))?;
    Ok(strip_format(data, format))
}

/// [`strip`] with the format already resolved.
pub fn strip_format(data: &[u8], format: ImageFormat) -> Vec<u8> {
    match format {
        ImageFormat::Jpeg => jpeg::strip_jpeg(data),
        ImageFormat::Png => png::strip_png(data),
        ImageFormat::Webp => webp::strip_webp(data),
    }
}
