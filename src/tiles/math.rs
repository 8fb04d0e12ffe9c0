// src/tiles/math.rs v1
//! Slippy-map tile and ground-distance math (spherical Mercator)

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Equatorial circumference of the reference geoid used by OpenStreetMap, in meters
pub const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

/// Pixels along one edge of a standard tile
pub const DEFAULT_TILE_PIXELS: f64 = 256.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    pub lat: f64, // degrees, north positive
    pub lon: f64, // degrees, east positive
}

impl GeoCoord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// North-west corner of this tile
    pub fn upper_left(&self) -> GeoCoord {
        tile_to_lat_lon(self.x, self.y, self.zoom)
    }

    pub fn bounding_box(&self, n_tiles: u32) -> BoundingBox {
        bounding_box(self.x, self.y, self.zoom, n_tiles)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Geographic extent of a block of tiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub upper_left: GeoCoord,
    pub lower_right: GeoCoord,
}

fn tiles_per_axis(zoom: u8) -> f64 {
    2_f64.powi(zoom as i32)
}

/// Ground width of one tile in meters at the given latitude (degrees).
pub fn tile_width(latitude: f64, zoom: u8) -> f64 {
    (EARTH_CIRCUMFERENCE * latitude.to_radians().cos() / tiles_per_axis(zoom)).abs()
}

/// Ground width of one pixel in meters.
pub fn pixel_width(latitude: f64, zoom: u8, pixels_per_tile: f64) -> f64 {
    tile_width(latitude, zoom) / pixels_per_tile
}

/// Upper-left corner of tile (x, y) at `zoom`.
pub fn tile_to_lat_lon(x: u32, y: u32, zoom: u8) -> GeoCoord {
    grid_to_lat_lon(x as f64, y as f64, zoom)
}

// Tile grid position to coordinate; f64 so block corners past u32::MAX stay defined
fn grid_to_lat_lon(x: f64, y: f64, zoom: u8) -> GeoCoord {
    let n = tiles_per_axis(zoom);
    let lon = x / n * 360.0 - 180.0;
    let lat_rad = (PI * (1.0 - 2.0 * y / n)).sinh().atan();
    GeoCoord::new(lat_rad.to_degrees(), lon)
}

/// Tile containing `coord` at `zoom`.
///
/// Indices are truncated toward zero. The poles are singular and the
/// antimeridian does not wrap; out-of-range results saturate to the `u32` range.
pub fn lat_lon_to_tile(coord: GeoCoord, zoom: u8) -> TileCoord {
    let n = tiles_per_axis(zoom);
    let lat_rad = coord.lat.to_radians();

    let x = n * ((coord.lon + 180.0) / 360.0);
    let y = n * (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;

    TileCoord::new(x as u32, y as u32, zoom)
}

/// Extent of the `n_tiles` x `n_tiles` block whose upper-left tile is (x, y).
pub fn bounding_box(x: u32, y: u32, zoom: u8, n_tiles: u32) -> BoundingBox {
    BoundingBox {
        upper_left: tile_to_lat_lon(x, y, zoom),
        lower_right: grid_to_lat_lon(
            x as f64 + n_tiles as f64,
            y as f64 + n_tiles as f64,
            zoom,
        ),
    }
}
