// src/config.rs v1
//! Tool configuration, loaded once at startup and passed explicitly

use crate::error::{Result, TerrainError};
use crate::heightmap::{DecodeOptions, DEFAULT_MAX_ELEVATION};
use crate::tiles::{UrlOrder, DEFAULT_TILE_PIXELS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TILE_SERVER: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub tile_server_url: String,
    pub url_order: UrlOrder,
    pub tiles_dir: PathBuf,
    pub max_elevation: f64,
    pub pixels_per_tile: f64,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tile_server_url: DEFAULT_TILE_SERVER.to_string(),
            url_order: UrlOrder::Zyx,
            tiles_dir: PathBuf::from("tiles"),
            max_elevation: DEFAULT_MAX_ELEVATION,
            pixels_per_tile: DEFAULT_TILE_PIXELS,
            user_agent: format!("terrain-tools/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
        }
    }
}

impl ToolConfig {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Write the default configuration, refusing to replace an existing file
    /// unless `overwrite` is set
    pub fn write_default_to(path: &Path, overwrite: bool) -> Result<()> {
        if path.exists() {
            if !overwrite {
                return Err(TerrainError::Config(format!(
                    "{} already exists",
                    path.display()
                )));
            }
            log::warn!("Overwriting existing configuration {}", path.display());
        }
        Self::default().save_to(path)
    }

    /// Get config file path for the current platform
    pub fn config_path() -> Result<PathBuf> {
        #[cfg(windows)]
        {
            let appdata = std::env::var("APPDATA")
                .map_err(|_| TerrainError::Config("APPDATA environment variable not set".to_string()))?;
            Ok(PathBuf::from(appdata).join("terrain-tools").join("config.json"))
        }

        #[cfg(not(windows))]
        {
            let home = std::env::var("HOME")
                .map_err(|_| TerrainError::Config("HOME environment variable not set".to_string()))?;
            Ok(PathBuf::from(home).join(".config").join("terrain-tools").join("config.json"))
        }
    }

    /// Reject values the decode and tile operations cannot use
    pub fn validate(&self) -> Result<()> {
        if !(self.max_elevation.is_finite() && self.max_elevation > 0.0) {
            return Err(TerrainError::Config(format!(
                "max_elevation must be a positive number, got {}",
                self.max_elevation
            )));
        }
        if !(self.pixels_per_tile.is_finite() && self.pixels_per_tile > 0.0) {
            return Err(TerrainError::Config(format!(
                "pixels_per_tile must be a positive number, got {}",
                self.pixels_per_tile
            )));
        }
        if self.timeout_secs == 0 {
            return Err(TerrainError::Config(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.tile_server_url.trim().is_empty() {
            return Err(TerrainError::Config("tile_server_url is empty".to_string()));
        }
        Ok(())
    }

    pub fn decode_options(&self, clamp: bool) -> DecodeOptions {
        DecodeOptions {
            max_elevation: self.max_elevation,
            clamp,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("terrain-tools-config-{}-{}", name, std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert_eq!(config.tile_server_url, DEFAULT_TILE_SERVER);
        assert_eq!(config.url_order, UrlOrder::Zyx);
        assert_eq!(config.tiles_dir, PathBuf::from("tiles"));
        assert_eq!(config.max_elevation, 3000.0);
        assert_eq!(config.pixels_per_tile, 256.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = scratch_path("missing");
        let config = ToolConfig::load_from(&path).unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_path("roundtrip");
        let mut config = ToolConfig::default();
        config.max_elevation = 4810.0;
        config.url_order = UrlOrder::Zxy;
        config.save_to(&path).unwrap();

        let loaded = ToolConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch_path("partial");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "max_elevation": 9000.0, "url_order": "zxy" }"#).unwrap();

        let loaded = ToolConfig::load_from(&path).unwrap();
        assert_eq!(loaded.max_elevation, 9000.0);
        assert_eq!(loaded.url_order, UrlOrder::Zxy);
        assert_eq!(loaded.tile_server_url, DEFAULT_TILE_SERVER);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_max_elevation_rejected() {
        let mut config = ToolConfig::default();
        config.max_elevation = 0.0;
        assert!(matches!(config.validate(), Err(TerrainError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ToolConfig::default();
        config.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(TerrainError::Config(_))));

        let path = scratch_path("zero-timeout");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "timeout_secs": 0 }"#).unwrap();
        assert!(matches!(ToolConfig::load_from(&path), Err(TerrainError::Config(_))));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_write_default_keeps_existing_file() {
        let path = scratch_path("init");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = ToolConfig::write_default_to(&path, false).unwrap_err();
        assert!(matches!(err, TerrainError::Config(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");

        // a broken file can still be replaced explicitly
        ToolConfig::write_default_to(&path, true).unwrap();
        assert_eq!(ToolConfig::load_from(&path).unwrap(), ToolConfig::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_write_default_creates_file() {
        let path = scratch_path("init-fresh");
        ToolConfig::write_default_to(&path, false).unwrap();
        assert_eq!(ToolConfig::load_from(&path).unwrap(), ToolConfig::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_decode_options() {
        let options = ToolConfig::default().decode_options(false);
        assert_eq!(options.max_elevation, 3000.0);
        assert!(!options.clamp);
    }
}
