//! Local file sink
//!
//! Keeps one append handle per target and the header flag of every target it
//! has written to. A non-empty file found on open, for example one left by an
//! earlier run of the same worker, is taken to have its header already.

use super::target::FileTarget;
use super::RecordSink;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Sink appending to files on the local filesystem
#[derive(Debug, Default)]
pub struct FileSink {
    /// Open append handles by file path
    handles: HashMap<PathBuf, File>,
    /// Files that already start with a header row
    headers: HashSet<PathBuf>,
}

impl FileSink {
    /// Create a sink with no open files
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files currently held open
    pub fn open_files(&self) -> usize {
        self.handles.len()
    }

    /// Whether a handle for `target` is currently held open
    pub fn is_open(&self, target: &FileTarget) -> bool {
        self.handles.contains_key(target.path())
    }

    /// Get the handle for `target`, opening it for append if needed
    async fn handle(&mut self, target: &FileTarget) -> Result<&mut File> {
        let path = target.path();
        if !self.handles.contains_key(path) {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .await
                .map_err(|e| Error::output(path, format!("Failed to open file: {e}")))?;
            let existing = file
                .metadata()
                .await
                .map_err(|e| Error::output(path, format!("Failed to read metadata: {e}")))?
                .len();
            if existing > 0 {
                self.headers.insert(path.to_path_buf());
            }
            debug!("Opened export file: {} ({} bytes)", path.display(), existing);
            self.handles.insert(path.to_path_buf(), file);
        }

        self.handles
            .get_mut(path)
            .ok_or_else(|| Error::output(path, "File handle missing after open"))
    }
}

#[async_trait]
impl RecordSink for FileSink {
    async fn append(&mut self, target: &FileTarget, bytes: &[u8]) -> Result<()> {
        let file = self.handle(target).await?;

        if bytes.is_empty() {
            return Ok(());
        }

        file.write_all(bytes)
            .await
            .map_err(|e| Error::output(target.path(), format!("Failed to write: {e}")))?;
        file.flush()
            .await
            .map_err(|e| Error::output(target.path(), format!("Failed to flush: {e}")))?;

        debug!("Appended {} bytes to {}", bytes.len(), target);
        Ok(())
    }

    async fn header_written(&mut self, target: &FileTarget) -> Result<bool> {
        let path = target.path();
        if self.headers.contains(path) {
            return Ok(true);
        }
        if self.handles.contains_key(path) {
            return Ok(false);
        }
        has_content(path).await
    }

    fn mark_header_written(&mut self, target: &FileTarget) {
        self.headers.insert(target.path().to_path_buf());
    }

    async fn release(&mut self, target: &FileTarget) -> Result<()> {
        self.headers.remove(target.path());

        if let Some(mut file) = self.handles.remove(target.path()) {
            file.flush()
                .await
                .map_err(|e| Error::output(target.path(), format!("Failed to flush: {e}")))?;
            debug!("Closed export file: {}", target);
        }
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        let handles: Vec<(PathBuf, File)> = self.handles.drain().collect();
        self.headers.clear();

        for (path, mut file) in handles {
            file.flush()
                .await
                .map_err(|e| Error::output(&path, format!("Failed to flush: {e}")))?;
            debug!("Closed export file: {}", path.display());
        }
        Ok(())
    }
}

/// Whether `path` exists and is non-empty
async fn has_content(path: &Path) -> Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.len() > 0),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::output(path, format!("Failed to read metadata: {e}"))),
    }
}
