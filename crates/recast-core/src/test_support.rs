//! Fixture helpers shared by unit tests.

use image::{DynamicImage, Rgb, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::EncodeConfig;
use crate::format::Format;

/// A small gradient, 24x16.
pub(crate) fn sample_image() -> DynamicImage {
    let img = RgbImage::from_fn(24, 16, |x, y| Rgb([(x * 10) as u8, (y * 15) as u8, 128]));
    DynamicImage::ImageRgb8(img)
}

/// Write the sample image to `path` encoded as `format`.
pub(crate) fn write_fixture(path: &Path, format: Format) {
    let mut writer = BufWriter::new(File::create(path).unwrap());
    format
        .encode(&sample_image(), &mut writer, &EncodeConfig::default())
        .unwrap();
}
