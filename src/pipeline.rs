// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! One-shot sanitation pipeline.
//!
//! Chains the engines over a single encoded file the way the UI's
//! drag-and-drop flow does:
//!
//! 1. optional pixel-noise pass (decode → perturb → re-encode) to break
//!    content hashes,
//! 2. metadata strip (always),
//! 3. optional decoy EXIF injection (JPEG only).
//!
//! The noise pass runs first so the strip sees the re-encoded container;
//! re-encoders love to write fresh metadata of their own.

use crate::codec::{self, CodecError};
use crate::container::{self, ContainerError, DecoyProfile, ImageFormat};
use crate::stego::noise;
use crate::trace::trace_line;

/// Which optional passes to run. Metadata stripping is not optional.
#[derive(Debug, Clone, Default)]
pub struct SanitizeOptions {
    /// Run the hash-breaking noise pass before stripping.
    pub noise: bool,
    /// Inject this decoy profile after stripping (JPEG only; silently
    /// skipped for other formats).
    pub decoy: Option<DecoyProfile>,
}

/// Errors from the sanitation pipeline.
#[derive(Debug)]
pub enum PipelineError {
    /// The declared MIME type is outside the supported set.
    UnsupportedFormat(String),
    /// The noise pass could not decode or re-encode the image.
    Codec(CodecError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat(mime) => {
                write!(f, "unsupported format {mime:?} (use JPEG, PNG or WEBP)")
            }
            Self::Codec(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContainerError> for PipelineError {
    fn from(e: ContainerError) -> Self {
        match e {
            ContainerError::UnsupportedFormat(mime) => Self::UnsupportedFormat(mime),
        }
    }
}

impl From<CodecError> for PipelineError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

/// Sanitize one file of the declared MIME type.
///
/// # Errors
/// [`PipelineError::UnsupportedFormat`] for a MIME type outside the
/// supported set; [`PipelineError::Codec`] when the noise pass cannot
/// decode or re-encode. Structural problems inside a recognized container
/// never error; the strip degrades to pass-through as usual.
pub fn sanitize(
    data: &[u8],
    mime: &str,
    options: &SanitizeOptions,
) -> Result<Vec<u8>, PipelineError> {
    let format = ImageFormat::from_mime(mime)
        .ok_or_else(|| PipelineError::UnsupportedFormat(mime.to_string()))?;
    sanitize_format(data, format, options)
}

/// [`sanitize`] with the format already resolved.
pub fn sanitize_format(
    data: &[u8],
    format: ImageFormat,
    options: &SanitizeOptions,
) -> Result<Vec<u8>, PipelineError> {
    trace_line!("pipeline: sanitizing {} bytes ({})", data.len(), format.mime());

    let mut current = if options.noise {
        let raster = codec::decode(data)?;
        let dusted = noise::inject_noise(&raster);
        codec::encode(&dusted, format)?
    } else {
        data.to_vec()
    };

    current = container::strip_format(&current, format);

    if let Some(profile) = &options.decoy {
        if format == ImageFormat::Jpeg {
            current = container::inject_decoy_exif(&current, profile);
        } else {
            trace_line!("pipeline: decoy skipped ({} is not JPEG)", format.mime());
        }
    }

    trace_line!("pipeline: done, {} bytes out", current.len());
    Ok(current)
}

/// Sanitize many independent files in parallel.
///
/// Each item is processed exactly as [`sanitize_format`]; failures are
/// per-item, not batch-fatal.
#[cfg(feature = "parallel")]
pub fn sanitize_batch(
    items: &[(Vec<u8>, ImageFormat)],
    options: &SanitizeOptions,
) -> Vec<Result<Vec<u8>, PipelineError>> {
    use rayon::prelude::*;
    items
        .par_iter()
        .map(|(data, format)| sanitize_format(data, *format, options))
        .collect()
}
