// src/error.rs
//! Error types for the terrain tools

use std::fmt;

pub type Result<T> = std::result::Result<T, TerrainError>;

#[derive(Debug)]
pub enum TerrainError {
    Io(std::io::Error),
    Image(image::ImageError),
    Http(reqwest::Error),
    Json(serde_json::Error),
    Config(String),
    Download(String),
    Other(String),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::Io(e) => write!(f, "IO error: {}", e),
            TerrainError::Image(e) => write!(f, "Image error: {}", e),
            TerrainError::Http(e) => write!(f, "HTTP error: {}", e),
            TerrainError::Json(e) => write!(f, "JSON error: {}", e),
            TerrainError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TerrainError::Download(msg) => write!(f, "Download error: {}", msg),
            TerrainError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::Io(e) => Some(e),
            TerrainError::Image(e) => Some(e),
            TerrainError::Http(e) => Some(e),
            TerrainError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TerrainError {
    fn from(error: std::io::Error) -> Self {
        TerrainError::Io(error)
    }
}

impl From<image::ImageError> for TerrainError {
    fn from(error: image::ImageError) -> Self {
        TerrainError::Image(error)
    }
}

impl From<reqwest::Error> for TerrainError {
    fn from(error: reqwest::Error) -> Self {
        TerrainError::Http(error)
    }
}

impl From<serde_json::Error> for TerrainError {
    fn from(error: serde_json::Error) -> Self {
        TerrainError::Json(error)
    }
}

impl From<anyhow::Error> for TerrainError {
    fn from(error: anyhow::Error) -> Self {
        TerrainError::Other(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TerrainError::Download("HTTP 404 Not Found".to_string());
        assert_eq!(err.to_string(), "Download error: HTTP 404 Not Found");

        let err = TerrainError::Config("no coordinates".to_string());
        assert_eq!(err.to_string(), "Configuration error: no coordinates");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TerrainError = io.into();
        assert!(matches!(err, TerrainError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_anyhow() {
        let err: TerrainError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "Error: boom");
    }
}
