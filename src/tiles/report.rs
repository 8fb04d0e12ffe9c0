// src/tiles/report.rs
//! Summary of a tile's geometry for display or JSON output

use super::math::{pixel_width, tile_width, BoundingBox, GeoCoord, TileCoord};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileReport {
    pub tile: TileCoord,
    pub upper_left: GeoCoord,
    pub bounding_box: BoundingBox,
    pub tile_width_m: f64,
    pub pixel_width_m: f64,
}

impl TileReport {
    /// Widths are measured at the tile's upper-left latitude.
    pub fn new(tile: TileCoord, pixels_per_tile: f64) -> Self {
        let upper_left = tile.upper_left();
        Self {
            tile,
            upper_left,
            bounding_box: tile.bounding_box(1),
            tile_width_m: tile_width(upper_left.lat, tile.zoom),
            pixel_width_m: pixel_width(upper_left.lat, tile.zoom, pixels_per_tile),
        }
    }
}

impl fmt::Display for TileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tile              = {}", self.tile)?;
        writeln!(f, "upper left        = {}", self.upper_left)?;
        writeln!(
            f,
            "bounding box      = {} .. {}",
            self.bounding_box.upper_left, self.bounding_box.lower_right
        )?;
        writeln!(f, "tile width (m)    = {:.3}", self.tile_width_m)?;
        write!(f, "pixel width (m)   = {:.3}", self.pixel_width_m)
    }
}
