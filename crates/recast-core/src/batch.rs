//! Batch coordination: validate, scan, then convert each image in order.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{RecastError, Result};
use crate::format::{self, Format};
use crate::pipeline::{ConversionRecord, DirectoryScanner, FormatConverter};

/// The validated parameters of one batch.
///
/// The only way to obtain one is [`BatchRequest::new`], so holding a request
/// means the arguments were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    dir: PathBuf,
    source: Format,
    target: Format,
}

impl BatchRequest {
    /// Validate the three batch parameters.
    ///
    /// Fails with `InvalidArgument` if any is empty or a format token is not
    /// supported. Never touches the filesystem.
    pub fn new(dir: impl AsRef<Path>, source: &str, target: &str) -> Result<Self> {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            return Err(RecastError::InvalidArgument("no directory given".into()));
        }
        let source = parse_token("source", source)?;
        let target = parse_token("target", target)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            source,
            target,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn source(&self) -> Format {
        self.source
    }

    pub fn target(&self) -> Format {
        self.target
    }
}

fn parse_token(role: &str, token: &str) -> Result<Format> {
    if token.is_empty() {
        return Err(RecastError::InvalidArgument(format!(
            "no {} format given",
            role
        )));
    }
    if !format::is_supported(token) {
        let expected: Vec<_> = format::supported_tokens().collect();
        return Err(RecastError::InvalidArgument(format!(
            "unsupported {} format {:?} (expected one of: {})",
            role,
            token,
            expected.join(", ")
        )));
    }
    Format::parse(token)
}

/// Outcome of a successful batch.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Every conversion, in the order it happened
    pub converted: Vec<ConversionRecord>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.converted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converted.is_empty()
    }
}

/// Drives a directory through scan and conversion.
pub struct Recaster {
    scanner: DirectoryScanner,
    converter: FormatConverter,
}

impl Recaster {
    /// Create a new recaster with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            scanner: DirectoryScanner::new(config.scan.clone()),
            converter: FormatConverter::new(config.encode.clone()),
        }
    }

    /// Convert every `source` image under `dir` to `target`.
    pub fn run(&self, dir: impl AsRef<Path>, source: &str, target: &str) -> Result<BatchReport> {
        self.run_with(dir, source, target, |_| {})
    }

    /// Like [`Recaster::run`], calling `on_converted` after each file.
    pub fn run_with<F>(
        &self,
        dir: impl AsRef<Path>,
        source: &str,
        target: &str,
        on_converted: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(&ConversionRecord),
    {
        let request = BatchRequest::new(dir, source, target)?;
        self.execute(&request, on_converted)
    }

    /// Run an already validated batch.
    ///
    /// The whole directory is scanned before the first conversion. The first
    /// failure stops the batch; files converted before it stay converted.
    pub fn execute<F>(&self, request: &BatchRequest, mut on_converted: F) -> Result<BatchReport>
    where
        F: FnMut(&ConversionRecord),
    {
        let start = std::time::Instant::now();
        let handles = self.scanner.scan(request.dir(), request.source())?;
        tracing::info!(
            "Found {} {} image(s) under {:?}",
            handles.len(),
            request.source(),
            request.dir()
        );

        let mut report = BatchReport::default();
        for handle in handles {
            let converted = self.converter.convert(handle, request.target())?;
            on_converted(&converted.record);
            report.converted.push(converted.record);
        }

        tracing::info!(
            "Converted {} image(s) to {} in {:?}",
            report.len(),
            request.target(),
            start.elapsed()
        );
        Ok(report)
    }
}
