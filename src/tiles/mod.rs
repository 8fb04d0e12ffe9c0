// src/tiles/mod.rs
//! Slippy-map tile math and imagery tile downloads

pub mod downloader;
pub mod landmark;
pub mod math;
pub mod report;

pub use downloader::{DownloadOutcome, TileDownloader, UrlOrder};
pub use landmark::Landmark;
pub use math::{
    bounding_box, lat_lon_to_tile, pixel_width, tile_to_lat_lon, tile_width, BoundingBox,
    GeoCoord, TileCoord, DEFAULT_TILE_PIXELS, EARTH_CIRCUMFERENCE,
};
pub use report::TileReport;
