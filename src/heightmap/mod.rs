// src/heightmap/mod.rs
//! Encoded heightmap decoding

pub mod decode;
pub mod io;

pub use decode::{
    decode_image, decode_image_with, decode_pixel, elevation_range, intensity, normalize,
    normalize_wrapping, DecodeOptions, DEFAULT_MAX_ELEVATION,
};
