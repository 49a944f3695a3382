//! The convert-and-replace transaction for a single image.

use image::{DynamicImage, ImageError};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::EncodeConfig;
use crate::error::{RecastError, Result};
use crate::format::Format;

use super::handle::ImageHandle;

/// Suffix appended to the extension while rewriting a file in place.
const STAGING_SUFFIX: &str = "recast-tmp";

/// A completed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRecord {
    /// Where the image was before conversion
    pub original: PathBuf,
    /// The format it was converted to
    pub format: Format,
    /// Where the image is now
    pub converted: PathBuf,
}

/// The status line reported for each converted file.
impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}の画像形式を{}({})に変更しました。",
            self.original.display(),
            self.format,
            self.converted.display()
        )
    }
}

/// Result of converting one handle.
#[derive(Debug)]
pub struct Converted {
    /// The image as it now exists on disk
    pub handle: ImageHandle,
    pub record: ConversionRecord,
}

/// Re-encodes images and replaces the original files.
pub struct FormatConverter {
    config: EncodeConfig,
}

impl FormatConverter {
    /// Create a new converter with the given encoder settings.
    pub fn new(config: EncodeConfig) -> Self {
        Self { config }
    }

    /// Convert to a format named by token.
    ///
    /// An unknown token fails with `UnsupportedFormat` before anything on
    /// disk is touched.
    pub fn convert_to_token(&self, handle: ImageHandle, token: &str) -> Result<Converted> {
        let target = Format::parse(token)?;
        self.convert(handle, target)
    }

    /// Write the image next to its file as `target`, then remove the original.
    ///
    /// The new file has the same directory and base name with the target's
    /// extension. An existing file at that path is overwritten. If writing
    /// fails the original is untouched. If removing the original fails, the
    /// error names both files and both remain on disk.
    ///
    /// When the new path names the same file as the current one (identical
    /// path, a case-only difference on a case-insensitive filesystem, or a
    /// hard link), the image is written to a staging file and renamed over
    /// the target instead, so the freshly written file is never removed.
    pub fn convert(&self, handle: ImageHandle, target: Format) -> Result<Converted> {
        let original = handle.path().to_path_buf();
        let converted = converted_path(&original, target);

        if names_same_file(&original, &converted) {
            let staging = staging_path(&converted);
            self.write_encoded(handle.image(), target, &staging)?;
            if let Err(e) = fs::rename(&staging, &converted) {
                discard_partial(&staging);
                return Err(RecastError::io(&converted, e));
            }
            // A hard link to the old content survives the rename
            if original != converted
                && original.exists()
                && !names_same_file(&original, &converted)
            {
                remove_original(&original, &converted)?;
            }
        } else {
            self.write_encoded(handle.image(), target, &converted)?;
            remove_original(&original, &converted)?;
        }

        let record = ConversionRecord {
            original,
            format: target,
            converted: converted.clone(),
        };
        tracing::info!("{}", record);

        Ok(Converted {
            handle: handle.relocated(converted, target),
            record,
        })
    }

    /// Create `path` and encode into it.
    ///
    /// A file this call created is removed again if encoding fails. The file
    /// is closed on every path out of this function.
    fn write_encoded(&self, image: &DynamicImage, target: Format, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| RecastError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        let written = target
            .encode(image, &mut writer, &self.config)
            .map_err(|e| encode_error(path, e))
            .and_then(|()| writer.flush().map_err(|e| RecastError::io(path, e)));

        drop(writer);
        if written.is_err() {
            discard_partial(path);
        }
        written
    }
}

/// Same directory, base name up to the last dot, target extension.
///
/// A name whose only dot is the leading one (`.gif`) has an empty base, so
/// it becomes `.png` rather than `.gif.png`.
fn converted_path(original: &Path, target: Format) -> PathBuf {
    match original.file_name().and_then(|name| name.to_str()) {
        Some(name) => {
            let base = name.rfind('.').map_or(name, |dot| &name[..dot]);
            original.with_file_name(format!("{}.{}", base, target.extension()))
        }
        None => original.with_extension(target.extension()),
    }
}

/// Whether two paths name one file on disk.
///
/// Identical paths always do. Otherwise both must exist and resolve to the
/// same file, which covers case-insensitive filesystems and hard links.
fn names_same_file(a: &Path, b: &Path) -> bool {
    a == b || (b.exists() && same_file::is_same_file(a, b).unwrap_or(false))
}

fn remove_original(original: &Path, converted: &Path) -> Result<()> {
    fs::remove_file(original).map_err(|source| RecastError::RemoveOriginal {
        original: original.to_path_buf(),
        converted: converted.to_path_buf(),
        source,
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

fn encode_error(path: &Path, error: ImageError) -> RecastError {
    match error {
        ImageError::IoError(source) => RecastError::io(path, source),
        other => RecastError::Encode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

fn discard_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!("Failed to remove partial output {:?}: {}", path, e);
    }
}
