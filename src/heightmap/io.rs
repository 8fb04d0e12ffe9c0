// src/heightmap/io.rs
//! Loading encoded heightmaps and persisting decoded output

use crate::error::Result;
use image::RgbaImage;
use std::path::Path;

/// Open any image the `image` crate understands and expand it to RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)?;
    log::info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgba8())
}

/// Save an image; the format follows the file extension.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image.save(path)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerrainError;
    use image::Rgba;

    #[test]
    fn test_png_roundtrip_preserves_channels() {
        let dir = std::env::temp_dir().join(format!("terrain-tools-io-{}", std::process::id()));
        let path = dir.join("encoded.png");

        let mut encoded = RgbaImage::from_pixel(4, 3, Rgba([128, 0, 0, 255]));
        encoded.put_pixel(2, 1, Rgba([131, 72, 200, 255]));
        save_image(&encoded, &path).unwrap();

        let loaded = load_rgba(&path).unwrap();
        assert_eq!(loaded, encoded);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let path = std::env::temp_dir().join("terrain-tools-does-not-exist.png");
        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, TerrainError::Image(_)));
    }
}
