// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/scourcore

//! Decoy EXIF injection.
//!
//! Builds a fabricated EXIF APP1 segment (camera make/model, a fixed
//! timestamp, and GPS coordinates pointing somewhere deliberately absurd)
//! and inserts it into a JPEG right after SOI. A stripped file that carries
//! plausible-but-worthless provenance blends in better than one with no
//! metadata at all.
//!
//! The segment payload is `Exif\0\0` followed by a little-endian TIFF:
//! IFD0 (Make, Model, Software, Exif/GPS sub-IFD pointers), an Exif IFD
//! (DateTimeOriginal) and a GPS IFD (latitude/longitude as
//! degree/minute/second rationals).

use crate::container::jpeg::{APP1, SOI};
use crate::trace::trace_line;

// TIFF tags used in the decoy segment, in IFD order.
const TAG_MAKE: u16 = 0x010F;
const TAG_MODEL: u16 = 0x0110;
const TAG_SOFTWARE: u16 = 0x0131;
const TAG_EXIF_IFD: u16 = 0x8769;
const TAG_GPS_IFD: u16 = 0x8825;
const TAG_DATETIME_ORIGINAL: u16 = 0x9003;
const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
const TAG_GPS_LATITUDE: u16 = 0x0002;
const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
const TAG_GPS_LONGITUDE: u16 = 0x0004;

// TIFF field types.
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

/// Size of one IFD entry in bytes.
const IFD_ENTRY_LEN: usize = 12;

/// The fake provenance written into the decoy segment.
///
/// The defaults are intentionally ridiculous: a Nokia 3310 (a phone with no
/// camera) photographing Area 51 on the last day of 1999.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoyProfile {
    pub make: String,
    pub model: String,
    pub software: String,
    /// EXIF timestamp format: `YYYY:MM:DD HH:MM:SS`.
    pub date_time_original: String,
    /// Decimal degrees, negative = south.
    pub latitude: f64,
    /// Decimal degrees, negative = west.
    pub longitude: f64,
}

impl Default for DecoyProfile {
    fn default() -> Self {
        Self {
            make: "Nokia".to_string(),
            model: "3310".to_string(),
            software: "scour-core 0.3".to_string(),
            date_time_original: "1999:12:31 23:59:59".to_string(),
            latitude: 37.2431,
            longitude: -115.7930,
        }
    }
}

/// One IFD entry: value bytes are stored inline when they fit in 4 bytes,
/// otherwise in the data area following the entry table.
struct Entry {
    tag: u16,
    field_type: u16,
    count: u32,
    value: Vec<u8>,
}

/// An IFD under construction. Entries must be pushed in ascending tag
/// order; TIFF requires sorted tags and nothing here re-sorts.
struct Ifd {
    entries: Vec<Entry>,
}

impl Ifd {
    fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// NUL-terminated ASCII value.
    fn push_ascii(&mut self, tag: u16, text: &str) {
        let mut value = text.as_bytes().to_vec();
        value.push(0);
        let count = value.len() as u32;
        self.entries.push(Entry { tag, field_type: TYPE_ASCII, count, value });
    }

    fn push_long(&mut self, tag: u16, v: u32) {
        self.entries.push(Entry {
            tag,
            field_type: TYPE_LONG,
            count: 1,
            value: v.to_le_bytes().to_vec(),
        });
    }

    /// Unsigned rationals (numerator, denominator), 8 bytes each.
    fn push_rationals(&mut self, tag: u16, values: &[(u32, u32)]) {
        let mut bytes = Vec::with_capacity(values.len() * 8);
        for (num, den) in values {
            bytes.extend_from_slice(&num.to_le_bytes());
            bytes.extend_from_slice(&den.to_le_bytes());
        }
        self.entries.push(Entry {
            tag,
            field_type: TYPE_RATIONAL,
            count: values.len() as u32,
            value: bytes,
        });
    }

    /// Overwrite a previously pushed LONG value (sub-IFD pointers are pushed
    /// as placeholders before the final layout is known).
    fn set_long(&mut self, tag: u16, v: u32) {
        for entry in &mut self.entries {
            if entry.tag == tag {
                entry.value = v.to_le_bytes().to_vec();
            }
        }
    }

    /// Total serialized size: entry count + table + next-IFD offset + data area.
    fn byte_len(&self) -> usize {
        let table = 2 + self.entries.len() * IFD_ENTRY_LEN + 4;
        let data: usize = self
            .entries
            .iter()
            .map(|e| if e.value.len() > 4 { e.value.len() } else { 0 })
            .sum();
        table + data
    }

    /// Serialize at `ifd_offset` (relative to the TIFF header). The caller
    /// guarantees `out.len() == ifd_offset`; out-of-line values land in the
    /// data area immediately after the table.
    fn write(&self, out: &mut Vec<u8>, ifd_offset: usize) {
        debug_assert_eq!(out.len(), ifd_offset);
        let table_len = 2 + self.entries.len() * IFD_ENTRY_LEN + 4;
        let mut data_offset = ifd_offset + table_len;

        out.extend_from_slice(&(self.entries.len() as u16).to_le_bytes());
        let mut data_area: Vec<u8> = Vec::new();
        for entry in &self.entries {
            out.extend_from_slice(&entry.tag.to_le_bytes());
            out.extend_from_slice(&entry.field_type.to_le_bytes());
            out.extend_from_slice(&entry.count.to_le_bytes());
            if entry.value.len() <= 4 {
                let mut inline = [0u8; 4];
                inline[..entry.value.len()].copy_from_slice(&entry.value);
                out.extend_from_slice(&inline);
            } else {
                out.extend_from_slice(&(data_offset as u32).to_le_bytes());
                data_area.extend_from_slice(&entry.value);
                data_offset += entry.value.len();
            }
        }
        // No chained IFDs.
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&data_area);
        debug_assert_eq!(out.len(), ifd_offset + self.byte_len());
    }
}

/// Split absolute decimal degrees into EXIF degree/minute/second rationals.
/// Seconds carry two decimal places (denominator 100).
fn dms_rationals(decimal_abs: f64) -> [(u32, u32); 3] {
    let degrees = decimal_abs.floor();
    let minutes_f = (decimal_abs - degrees) * 60.0;
    let minutes = minutes_f.floor();
    let seconds_centi = ((minutes_f - minutes) * 60.0 * 100.0).round();
    [
        (degrees as u32, 1),
        (minutes as u32, 1),
        (seconds_centi as u32, 100),
    ]
}

/// Serialize the decoy profile as a little-endian TIFF block.
fn build_tiff(profile: &DecoyProfile) -> Vec<u8> {
    let mut ifd0 = Ifd::new();
    ifd0.push_ascii(TAG_MAKE, &profile.make);
    ifd0.push_ascii(TAG_MODEL, &profile.model);
    ifd0.push_ascii(TAG_SOFTWARE, &profile.software);
    ifd0.push_long(TAG_EXIF_IFD, 0);
    ifd0.push_long(TAG_GPS_IFD, 0);

    let mut exif_ifd = Ifd::new();
    exif_ifd.push_ascii(TAG_DATETIME_ORIGINAL, &profile.date_time_original);

    let mut gps_ifd = Ifd::new();
    let lat_ref = if profile.latitude >= 0.0 { "N" } else { "S" };
    let lon_ref = if profile.longitude >= 0.0 { "E" } else { "W" };
    gps_ifd.push_ascii(TAG_GPS_LATITUDE_REF, lat_ref);
    gps_ifd.push_rationals(TAG_GPS_LATITUDE, &dms_rationals(profile.latitude.abs()));
    gps_ifd.push_ascii(TAG_GPS_LONGITUDE_REF, lon_ref);
    gps_ifd.push_rationals(TAG_GPS_LONGITUDE, &dms_rationals(profile.longitude.abs()));

    // Pointer values depend on layout; entry sizes do not, so sizes can be
    // computed with placeholders in place.
    let ifd0_offset = 8usize;
    let exif_offset = ifd0_offset + ifd0.byte_len();
    let gps_offset = exif_offset + exif_ifd.byte_len();
    ifd0.set_long(TAG_EXIF_IFD, exif_offset as u32);
    ifd0.set_long(TAG_GPS_IFD, gps_offset as u32);

    let mut tiff = Vec::with_capacity(gps_offset + gps_ifd.byte_len());
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&(ifd0_offset as u32).to_le_bytes());
    ifd0.write(&mut tiff, ifd0_offset);
    exif_ifd.write(&mut tiff, exif_offset);
    gps_ifd.write(&mut tiff, gps_offset);
    tiff
}

/// Build a complete APP1 segment (`FF E1 <len> Exif\0\0 <tiff>`) for the
/// given profile.
pub fn build_exif_app1(profile: &DecoyProfile) -> Vec<u8> {
    let tiff = build_tiff(profile);
    let payload_len = 6 + tiff.len();
    let mut segment = Vec::with_capacity(4 + payload_len);
    segment.push(0xFF);
    segment.push(APP1);
    segment.extend_from_slice(&((payload_len as u16 + 2).to_be_bytes()));
    segment.extend_from_slice(b"Exif\0\0");
    segment.extend_from_slice(&tiff);
    segment
}

/// Insert a decoy EXIF segment into a JPEG, right after SOI.
///
/// Non-JPEG input (anything without the SOI signature) is returned
/// unchanged; decoy injection is a JPEG-only feature and skipping is the
/// compatible thing to do for the other formats.
pub fn inject_decoy_exif(data: &[u8], profile: &DecoyProfile) -> Vec<u8> {
    if data.len() < 2 || data[0] != 0xFF || data[1] != SOI {
        trace_line!("exif: decoy skipped (not a JPEG)");
        return data.to_vec();
    }
    let segment = build_exif_app1(profile);
    trace_line!(
        "exif: decoy segment injected ({} bytes, {} {})",
        segment.len(),
        profile.make,
        profile.model
    );
    let mut out = Vec::with_capacity(data.len() + segment.len());
    out.extend_from_slice(&data[..2]);
    out.extend_from_slice(&segment);
    out.extend_from_slice(&data[2..]);
    out
}
