//! Common test utilities for recast integration tests.
//!
//! Fixtures are written with the `image` crate directly so the tests do not
//! depend on recast's own encoders to set up their input.

use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const WIDTH: u32 = 32;
pub const HEIGHT: u32 = 20;

/// Write a small gradient image at `path` with content in `format`,
/// regardless of the path's extension.
pub fn write_image(path: &Path, format: ImageFormat) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let rgb = RgbImage::from_fn(WIDTH, HEIGHT, |x, y| {
        Rgb([(x * 8) as u8, (y * 12) as u8, 200])
    });
    let image = match format {
        ImageFormat::Gif => DynamicImage::ImageRgba8(DynamicImage::ImageRgb8(rgb).to_rgba8()),
        _ => DynamicImage::ImageRgb8(rgb),
    };
    image.save_with_format(path, format).unwrap();
}

/// The format a file's content sniffs as, if it decodes at all.
pub fn sniff(path: &Path) -> Option<ImageFormat> {
    let reader = ImageReader::open(path).ok()?.with_guessed_format().ok()?;
    let format = reader.format()?;
    reader.decode().ok()?;
    Some(format)
}

/// Dimensions of a decodable image file.
pub fn dimensions(path: &Path) -> (u32, u32) {
    let image = image::open(path).unwrap();
    (image.width(), image.height())
}

/// Every regular file under `root` with its bytes.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| (e.path().to_path_buf(), std::fs::read(e.path()).unwrap()))
        .collect()
}
