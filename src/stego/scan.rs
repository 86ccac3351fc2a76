// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Bit-plane steganalysis.
//!
//! Natural sensor noise leaves the LSB plane looking like a coin flip: a
//! near-50/50 split of ones and zeros with no visible structure. Embedded
//! data skews the split and paints patterns. The scanner renders the plane
//! as a black/white image for eyeballing and reduces the split to a single
//! deviation score.

use crate::raster::Raster;
use crate::trace::trace_line;

/// Score (in percent) above which the LSB distribution is considered
/// anomalous.
pub const ANOMALY_THRESHOLD: f64 = 5.0;

/// Steganalysis output: the distribution numbers plus the rendered plane.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub width: u32,
    pub height: u32,
    /// Pixels whose averaged LSB rounded to 1 (rendered white).
    pub ones: usize,
    /// Pixels whose averaged LSB rounded to 0 (rendered black).
    pub zeros: usize,
    /// `|ones - total/2| / total * 100`: 0 for a perfect coin flip, 50 for
    /// a fully uniform plane.
    pub anomaly_score_percent: f64,
    /// `anomaly_score_percent >= ANOMALY_THRESHOLD`.
    pub anomalous: bool,
    /// Black/white rendering of the averaged LSB plane, fully opaque.
    pub visualization: Raster,
}

/// Scan a raster's LSB plane.
///
/// Read-only over the source; the report owns a freshly built visualization
/// raster of the same dimensions.
pub fn scan(raster: &Raster) -> ScanReport {
    let mut visualization = Raster::blank(raster.width(), raster.height());
    let mut ones = 0usize;
    let mut zeros = 0usize;

    for (src, dst) in raster
        .pixels()
        .chunks_exact(4)
        .zip(visualization.pixels_mut().chunks_exact_mut(4))
    {
        // Rounded average of the three channel LSBs: 1 iff at least two
        // of them are set.
        let lsb_sum = (src[0] & 1) + (src[1] & 1) + (src[2] & 1);
        let bit = u8::from(lsb_sum >= 2);
        let value = bit * 255;
        dst[0] = value;
        dst[1] = value;
        dst[2] = value;
        dst[3] = 255;
        if bit == 1 {
            ones += 1;
        } else {
            zeros += 1;
        }
    }

    let total = ones + zeros;
    let anomaly_score_percent = if total == 0 {
        0.0
    } else {
        (ones as f64 - total as f64 / 2.0).abs() / total as f64 * 100.0
    };
    let anomalous = anomaly_score_percent >= ANOMALY_THRESHOLD;

    trace_line!(
        "scan: {} white / {} black, anomaly score {:.2}% ({})",
        ones,
        zeros,
        anomaly_score_percent,
        if anomalous { "hidden data likely" } else { "clean" }
    );

    ScanReport {
        width: raster.width(),
        height: raster.height(),
        ones,
        zeros,
        anomaly_score_percent,
        anomalous,
        visualization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_plane_scores_fifty() {
        // All channel values even → every LSB is 0 → maximal skew.
        let raster = Raster::from_rgba8(8, 8, vec![0x80; 8 * 8 * 4]).unwrap();
        let report = scan(&raster);
        assert_eq!(report.zeros, 64);
        assert_eq!(report.ones, 0);
        assert!((report.anomaly_score_percent - 50.0).abs() < 1e-9);
        assert!(report.anomalous);
    }

    #[test]
    fn balanced_plane_scores_zero() {
        // Alternate pixels between all-odd and all-even channel values.
        let mut pixels = Vec::new();
        for i in 0..64 {
            let v = if i % 2 == 0 { 0x01 } else { 0x00 };
            pixels.extend_from_slice(&[v, v, v, 0xFF]);
        }
        let raster = Raster::from_rgba8(8, 8, pixels).unwrap();
        let report = scan(&raster);
        assert_eq!(report.ones, 32);
        assert_eq!(report.zeros, 32);
        assert_eq!(report.anomaly_score_percent, 0.0);
        assert!(!report.anomalous);
    }

    #[test]
    fn visualization_is_black_and_white() {
        let mut pixels = vec![0u8; 2 * 2 * 4];
        // Pixel 0: two of three LSBs set → white. Others black.
        pixels[0] = 1;
        pixels[1] = 1;
        let raster = Raster::from_rgba8(2, 2, pixels).unwrap();
        let report = scan(&raster);
        let viz = report.visualization.pixels();
        assert_eq!(&viz[0..4], &[255, 255, 255, 255]);
        assert_eq!(&viz[4..8], &[0, 0, 0, 255]);
        assert_eq!(report.ones, 1);
        assert_eq!(report.zeros, 3);
    }

    #[test]
    fn majority_rounding() {
        // Exactly one LSB set rounds down to 0; two round up to 1.
        let mut one_set = vec![0u8; 4];
        one_set[0] = 1;
        one_set[3] = 255;
        let raster = Raster::from_rgba8(1, 1, one_set).unwrap();
        assert_eq!(scan(&raster).zeros, 1);
    }
}
