//! The in-memory record of one image during a batch.

use image::DynamicImage;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::format::Format;

use super::probe::decode_file;

/// A decoded image together with the file it came from.
///
/// `format` always matches the encoding of the file at `path`. Converting a
/// handle consumes it and yields a new one, so a stale path can never be
/// observed after conversion.
pub struct ImageHandle {
    path: PathBuf,
    format: Format,
    image: DynamicImage,
}

impl ImageHandle {
    /// Decode the file at `path`, sniffing its format from content.
    pub fn open(path: &Path) -> Result<Self> {
        let (format, image) = decode_file(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            format,
            image,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// The record for the same pixels after they were written to `path` as `format`.
    pub(crate) fn relocated(self, path: PathBuf, format: Format) -> Self {
        Self {
            path,
            format,
            image: self.image,
        }
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("path", &self.path)
            .field("format", &self.format)
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}
