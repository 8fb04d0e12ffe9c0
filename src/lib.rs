// src/lib.rs
//! Terrain Tools Library
//!
//! Two independent utilities for terrain-tile workflows: decoding RGB-encoded
//! heightmaps into grayscale, and slippy-map tile math with an imagery tile
//! downloader.

pub mod config;
pub mod error;
pub mod heightmap;
pub mod tiles;

// Re-export main types for convenience
pub use config::ToolConfig;
pub use error::{Result, TerrainError};
pub use heightmap::DecodeOptions;
pub use tiles::{GeoCoord, TileCoord};
