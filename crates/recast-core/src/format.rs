//! The registry of supported formats.
//!
//! Supported formats live in a single constant table, [`FORMATS`]. Each entry
//! pairs a token (which is also the canonical file extension) with the codec
//! used to recognize it and the function used to encode it. Everything else
//! in the crate dispatches through this table.

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, Frame, ImageFormat, ImageResult};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::config::EncodeConfig;
use crate::error::RecastError;

/// Encodes decoded pixels into a writer.
pub type EncodeFn = fn(&DynamicImage, &mut dyn Write, &EncodeConfig) -> ImageResult<()>;

/// A supported raster format.
///
/// Discriminants index into [`FORMATS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Format {
    Gif = 0,
    Jpeg = 1,
    Png = 2,
}

/// One row of the format table.
pub struct FormatSpec {
    pub format: Format,
    /// Lowercase token, doubling as the canonical extension
    pub token: &'static str,
    /// Codec reported by content sniffing
    pub image_format: ImageFormat,
    pub encode: EncodeFn,
}

/// Every supported format, in discriminant order.
pub static FORMATS: [FormatSpec; 3] = [
    FormatSpec {
        format: Format::Gif,
        token: "gif",
        image_format: ImageFormat::Gif,
        encode: encode_gif,
    },
    FormatSpec {
        format: Format::Jpeg,
        token: "jpeg",
        image_format: ImageFormat::Jpeg,
        encode: encode_jpeg,
    },
    FormatSpec {
        format: Format::Png,
        token: "png",
        image_format: ImageFormat::Png,
        encode: encode_png,
    },
];

/// Check whether a token names a supported format.
///
/// Tokens are matched exactly; `"JPEG"` and `"jpg"` are not supported tokens.
pub fn is_supported(token: &str) -> bool {
    FORMATS.iter().any(|spec| spec.token == token)
}

/// All supported tokens, in table order.
pub fn supported_tokens() -> impl Iterator<Item = &'static str> {
    FORMATS.iter().map(|spec| spec.token)
}

impl Format {
    /// Parse a format token.
    pub fn parse(token: &str) -> Result<Self, RecastError> {
        FORMATS
            .iter()
            .find(|spec| spec.token == token)
            .map(|spec| spec.format)
            .ok_or_else(|| RecastError::UnsupportedFormat(token.to_string()))
    }

    /// Map a sniffed codec onto the registry.
    ///
    /// Codecs the `image` crate recognizes but this tool does not convert
    /// (WebP, BMP, ...) map to `None`.
    pub fn from_image_format(image_format: ImageFormat) -> Option<Self> {
        FORMATS
            .iter()
            .find(|spec| spec.image_format == image_format)
            .map(|spec| spec.format)
    }

    /// The table row for this format.
    pub fn spec(self) -> &'static FormatSpec {
        &FORMATS[self as usize]
    }

    pub fn token(self) -> &'static str {
        self.spec().token
    }

    /// Canonical file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        self.spec().token
    }

    pub fn image_format(self) -> ImageFormat {
        self.spec().image_format
    }

    /// Encode pixels in this format.
    pub fn encode(
        self,
        image: &DynamicImage,
        writer: &mut dyn Write,
        config: &EncodeConfig,
    ) -> ImageResult<()> {
        (self.spec().encode)(image, writer, config)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Format {
    type Err = RecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// GIF frames are RGBA; the encoder quantizes to a palette. The trailer is
// written when the encoder drops at the end of this function.
fn encode_gif(image: &DynamicImage, writer: &mut dyn Write, _: &EncodeConfig) -> ImageResult<()> {
    let mut encoder = GifEncoder::new(writer);
    encoder.encode_frame(Frame::new(image.to_rgba8()))
}

// JPEG has no alpha channel.
fn encode_jpeg(
    image: &DynamicImage,
    writer: &mut dyn Write,
    config: &EncodeConfig,
) -> ImageResult<()> {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, config.jpeg_quality))
}

fn encode_png(image: &DynamicImage, writer: &mut dyn Write, _: &EncodeConfig) -> ImageResult<()> {
    image.write_with_encoder(PngEncoder::new(writer))
}
