//! Content-based format detection.

use image::{DynamicImage, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{RecastError, Result};
use crate::format::Format;

/// Determine the real format of a file from its content.
///
/// The extension is never consulted. The file is fully decoded so that
/// corrupt or truncated images are rejected here rather than later. The file
/// is closed before returning.
pub fn probe(path: &Path) -> Result<Format> {
    let (format, _) = decode_file(path)?;
    Ok(format)
}

/// Open, sniff and decode a file.
pub(crate) fn decode_file(path: &Path) -> Result<(Format, DynamicImage)> {
    let file = File::open(path).map_err(|e| RecastError::io(path, e))?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| RecastError::io(path, e))?;

    let image_format = reader.format().ok_or_else(|| RecastError::Decode {
        path: path.to_path_buf(),
        message: "Unrecognized image format".to_string(),
    })?;
    let format = Format::from_image_format(image_format).ok_or_else(|| RecastError::Decode {
        path: path.to_path_buf(),
        message: format!("{:?} is not a supported format", image_format),
    })?;

    let image = reader.decode().map_err(|e| RecastError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok((format, image))
}
