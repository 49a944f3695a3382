//! Directory walking and candidate selection.

use std::path::Path;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::{RecastError, Result};
use crate::format::Format;

use super::handle::ImageHandle;
use super::probe::probe;

/// Finds and decodes every image of one format under a directory.
pub struct DirectoryScanner {
    config: ScanConfig,
}

impl DirectoryScanner {
    /// Create a new scanner with the given walk settings.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Collect a decoded handle for every regular file under `root` whose
    /// content is `source`.
    ///
    /// Files that are not images, or are images of another format, are
    /// skipped. Walk errors and decode failures on a matching file abort the
    /// scan and discard everything collected so far. Entries are visited
    /// pre-order, sorted by file name within each directory.
    pub fn scan(&self, root: &Path, source: Format) -> Result<Vec<ImageHandle>> {
        let mut walker = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut handles = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                RecastError::io(path, e.into())
            })?;

            // Symlinks only count as files when they are followed
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            match probe(path) {
                Ok(format) if format == source => {
                    let handle = ImageHandle::open(path)?;
                    tracing::debug!("Candidate: {:?}", path);
                    handles.push(handle);
                }
                Ok(format) => {
                    tracing::trace!("Skipping {:?}: content is {}", path, format);
                }
                Err(e) => {
                    tracing::trace!("Skipping {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!(
            "Found {} {} image(s) under {:?}",
            handles.len(),
            source,
            root
        );
        Ok(handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_fixture;
    use std::path::PathBuf;

    fn paths(handles: &[ImageHandle]) -> Vec<PathBuf> {
        handles.iter().map(|h| h.path().to_path_buf()).collect()
    }

    #[test]
    fn test_scan_filters_by_content() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_fixture(&root.join("a.png"), Format::Png);
        write_fixture(&root.join("b.gif"), Format::Png);
        write_fixture(&root.join("c.png"), Format::Gif);
        std::fs::write(root.join("d.txt"), "hello").unwrap();

        let scanner = DirectoryScanner::new(ScanConfig::default());
        let handles = scanner.scan(root, Format::Png).unwrap();

        assert_eq!(paths(&handles), vec![root.join("a.png"), root.join("b.gif")]);
        assert!(handles.iter().all(|h| h.format() == Format::Png));
    }

    #[test]
    fn test_scan_recurses_in_preorder() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("b/inner")).unwrap();
        write_fixture(&root.join("a.gif"), Format::Gif);
        write_fixture(&root.join("b/inner/x.gif"), Format::Gif);
        write_fixture(&root.join("b/y.gif"), Format::Gif);
        write_fixture(&root.join("c.gif"), Format::Gif);

        let scanner = DirectoryScanner::new(ScanConfig::default());
        let handles = scanner.scan(root, Format::Gif).unwrap();

        assert_eq!(
            paths(&handles),
            vec![
                root.join("a.gif"),
                root.join("b/inner/x.gif"),
                root.join("b/y.gif"),
                root.join("c.gif"),
            ]
        );
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = DirectoryScanner::new(ScanConfig::default());
        assert!(scanner.scan(dir.path(), Format::Jpeg).unwrap().is_empty());
    }

    #[test]
    fn test_scan_respects_max_depth() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir(root.join("nested")).unwrap();
        write_fixture(&root.join("top.jpeg"), Format::Jpeg);
        write_fixture(&root.join("nested/deep.jpeg"), Format::Jpeg);

        let scanner = DirectoryScanner::new(ScanConfig {
            follow_links: false,
            max_depth: Some(1),
        });
        let handles = scanner.scan(root, Format::Jpeg).unwrap();
        assert_eq!(paths(&handles), vec![root.join("top.jpeg")]);
    }

    #[test]
    fn test_scan_missing_root_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = DirectoryScanner::new(ScanConfig::default());
        let err = scanner
            .scan(&dir.path().join("does-not-exist"), Format::Png)
            .unwrap_err();
        assert!(matches!(err, RecastError::Io { .. }));
    }
}
