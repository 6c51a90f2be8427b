//! Saves translated documents to disk.

use std::path::{Path, PathBuf};

use pratilipi_core::{Download, DownloadSink};
use tracing::info;

/// Where [`FileSink`] writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Directory; the download keeps its suggested name.
    Directory(PathBuf),
    /// Exact file path.
    File(PathBuf),
}

impl OutputTarget {
    /// Resolve `--output`.
    ///
    /// No flag means the input's directory. An existing directory keeps
    /// the suggested name; anything else is taken as the file path.
    pub fn resolve(output: Option<&Path>, input: &Path) -> Self {
        match output {
            Some(path) if path.is_dir() => Self::Directory(path.to_path_buf()),
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Directory(
                input
                    .parent()
                    .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
            ),
        }
    }
}

/// [`DownloadSink`] writing to an [`OutputTarget`].
#[derive(Debug, Clone)]
pub struct FileSink {
    target: OutputTarget,
}

impl FileSink {
    pub const fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    /// Path a download named `file_name` is written to.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        match &self.target {
            OutputTarget::Directory(dir) => dir.join(file_name),
            OutputTarget::File(path) => path.clone(),
        }
    }
}

impl DownloadSink for FileSink {
    type Error = std::io::Error;

    fn save(&self, download: &Download) -> Result<(), Self::Error> {
        let path = self.path_for(&download.file_name);
        std::fs::write(&path, &download.bytes)?;
        info!(path = %path.display(), bytes = download.bytes.len(), "translated PDF written");
        Ok(())
    }
}
