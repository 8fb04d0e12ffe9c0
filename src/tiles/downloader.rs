// src/tiles/downloader.rs v1
//! Imagery tile downloading with an on-disk skip check

use super::math::TileCoord;
use crate::config::ToolConfig;
use crate::error::{Result, TerrainError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Order of the path parameters after the zoom level in a tile URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UrlOrder {
    /// `{z}/{y}/{x}`, as used by ArcGIS MapServer
    #[default]
    Zyx,
    /// `{z}/{x}/{y}`, as used by OpenStreetMap style servers
    Zxy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded { path: PathBuf, bytes: u64 },
    AlreadyExists { path: PathBuf },
}

impl DownloadOutcome {
    pub fn path(&self) -> &Path {
        match self {
            DownloadOutcome::Downloaded { path, .. } => path,
            DownloadOutcome::AlreadyExists { path } => path,
        }
    }
}

pub struct TileDownloader {
    client: reqwest::blocking::Client,
    base_url: String,
    url_order: UrlOrder,
    tiles_dir: PathBuf,
}

impl TileDownloader {
    pub fn new(config: &ToolConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.tile_server_url.trim_end_matches('/').to_string(),
            url_order: config.url_order,
            tiles_dir: config.tiles_dir.clone(),
        })
    }

    pub fn tile_url(&self, tile: TileCoord) -> String {
        Self::format_url(&self.base_url, self.url_order, tile)
    }

    pub fn tile_path(&self, tile: TileCoord) -> PathBuf {
        Self::path_for(&self.tiles_dir, tile)
    }

    /// Fetch a tile unless it is already on disk.
    ///
    /// An existing file is never re-validated. A non-success status abandons
    /// the tile without retrying.
    pub fn download(&self, tile: TileCoord) -> Result<DownloadOutcome> {
        let path = self.tile_path(tile);
        let url = self.tile_url(tile);
        log::debug!("url = {}", url);

        if path.is_file() {
            log::info!("{} already exists", path.display());
            return Ok(DownloadOutcome::AlreadyExists { path });
        }

        std::fs::create_dir_all(&self.tiles_dir)?;

        let mut response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            log::warn!("Download of tile {} failed with {}", tile, response.status());
            return Err(TerrainError::Download(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        // Stream into a side file so an interrupted transfer is never mistaken
        // for a finished tile on the next run
        let partial = path.with_extension("jpg.part");
        let bytes = {
            let mut file = File::create(&partial)?;
            match response.copy_to(&mut file) {
                Ok(bytes) => bytes,
                Err(e) => {
                    drop(file);
                    let _ = std::fs::remove_file(&partial);
                    return Err(e.into());
                }
            }
        };
        std::fs::rename(&partial, &path)?;

        log::info!("wrote {} bytes to {}", bytes, path.display());
        Ok(DownloadOutcome::Downloaded { path, bytes })
    }

    fn format_url(base_url: &str, order: UrlOrder, tile: TileCoord) -> String {
        match order {
            UrlOrder::Zyx => format!("{}/{}/{}/{}", base_url, tile.zoom, tile.y, tile.x),
            UrlOrder::Zxy => format!("{}/{}/{}/{}", base_url, tile.zoom, tile.x, tile.y),
        }
    }

    fn path_for(tiles_dir: &Path, tile: TileCoord) -> PathBuf {
        tiles_dir.join(format!("tile_{}_{}_{}.jpg", tile.zoom, tile.x, tile.y))
    }
}
