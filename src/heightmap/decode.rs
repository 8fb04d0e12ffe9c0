// src/heightmap/decode.rs v1
//! Terrain-RGB elevation decoding and grayscale normalization
//!
//! Elevations are packed into three 8-bit channels: red carries multiples of
//! 256 m, green whole meters and blue 1/256 m. The packed value is offset by
//! 32768 so that the datum sits at `(128, 0, 0)`.

use image::{Rgba, RgbaImage};
use rayon::prelude::*;

/// Offset re-centering the unsigned encoding around the datum.
pub const ELEVATION_OFFSET: f64 = 32768.0;

/// Elevation mapped to full white when none is configured.
pub const DEFAULT_MAX_ELEVATION: f64 = 3000.0;

/// How decoded elevations are turned into grayscale intensities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    /// Elevation (m) that maps to intensity 255
    pub max_elevation: f64,
    /// Saturate out-of-range values instead of wrapping them
    pub clamp: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_elevation: DEFAULT_MAX_ELEVATION,
            clamp: true,
        }
    }
}

/// Decode raw channel values into an elevation in meters.
///
/// Channels must be raw 0-255 samples; pre-normalized input decodes to
/// values near -32768.
pub fn decode_channels(r: u8, g: u8, b: u8) -> f64 {
    r as f64 * 256.0 + g as f64 + b as f64 / 256.0 - ELEVATION_OFFSET
}

/// Decode one encoded pixel. Alpha is ignored.
pub fn decode_pixel(pixel: Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;
    decode_channels(r, g, b)
}

/// Scale an elevation to 0-255 against `max_elevation`, saturating at both ends.
pub fn normalize(elevation: f64, max_elevation: f64) -> u8 {
    let value = elevation / max_elevation * 255.0;
    // NaN (e.g. 0/0) falls through clamp and casts to 0
    value.clamp(0.0, 255.0) as u8
}

/// Scale an elevation like [`normalize`] but wrap out-of-range values modulo 256,
/// the way an unchecked 8-bit cast does.
pub fn normalize_wrapping(elevation: f64, max_elevation: f64) -> u8 {
    let value = elevation / max_elevation * 255.0;
    (value as i64).rem_euclid(256) as u8
}

pub fn intensity(elevation: f64, options: &DecodeOptions) -> u8 {
    if options.clamp {
        normalize(elevation, options.max_elevation)
    } else {
        normalize_wrapping(elevation, options.max_elevation)
    }
}

/// Convert an encoded heightmap into an opaque grayscale visualization.
pub fn decode_image(buffer: &RgbaImage, max_elevation: f64) -> RgbaImage {
    decode_image_with(
        buffer,
        &DecodeOptions {
            max_elevation,
            clamp: true,
        },
    )
}

/// Parameterized decode. Pixels are independent, so the map runs in parallel.
pub fn decode_image_with(buffer: &RgbaImage, options: &DecodeOptions) -> RgbaImage {
    let mut output = RgbaImage::new(buffer.width(), buffer.height());

    output
        .par_chunks_exact_mut(4)
        .zip(buffer.par_chunks_exact(4))
        .for_each(|(out, encoded)| {
            let elevation = decode_channels(encoded[0], encoded[1], encoded[2]);
            let value = intensity(elevation, options);
            out.copy_from_slice(&[value, value, value, 255]);
        });

    output
}

/// Lowest and highest decoded elevation in the image, `None` when it is empty.
pub fn elevation_range(buffer: &RgbaImage) -> Option<(f64, f64)> {
    buffer.pixels().map(|p| decode_pixel(*p)).fold(None, |range, e| match range {
        None => Some((e, e)),
        Some((min, max)) => Some((min.min(e), max.max(e))),
    })
}
