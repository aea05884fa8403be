//! Export stage
//!
//! `FileExporter` is what a host drives: one instance per worker, fed slices
//! one at a time in arrival order.
//!
//! ```rust,ignore
//! use file_exporter::{ExportConfig, FileExporter};
//!
//! let config = ExportConfig::from_yaml_str("path: ./out\nformat: csv\n")?;
//! let mut exporter = FileExporter::new(config, Some("ts-node-1")).await?;
//!
//! exporter.process_slice(&records).await?;
//! let stats = exporter.shutdown().await?;
//! ```

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::format;
use crate::sink::{FileSink, FileTarget, RecordSink};
use crate::types::{Record, UNKNOWN_WORKER};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of one processed slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliceReport {
    /// Zero-based position of the slice in arrival order
    pub slice_index: u64,
    /// File the slice was appended to
    pub path: PathBuf,
    /// Records rendered
    pub records: usize,
    /// Bytes appended
    pub bytes: usize,
    /// Whether a header row was written before the records
    pub wrote_header: bool,
}

/// Running totals for an exporter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    /// Slices received, including empty and failed ones
    pub slices: u64,
    /// Records written
    pub records: u64,
    /// Bytes written
    pub bytes: u64,
    /// Distinct files written: one per slice in per-slice mode, at most one
    /// otherwise
    pub files: u64,
}

/// Export stage for one worker
pub struct FileExporter<S: RecordSink = FileSink> {
    config: ExportConfig,
    worker_name: String,
    next_slice: u64,
    sink: S,
    stats: ExportStats,
}

impl FileExporter<FileSink> {
    /// Create an exporter writing to local files.
    ///
    /// The output directory must already exist. Without a worker name, files
    /// are named with the literal `undefined`.
    pub async fn new(config: ExportConfig, worker_name: Option<&str>) -> Result<Self> {
        config.validate()?;
        check_output_dir(config.output_dir()).await?;
        Ok(Self::with_sink(config, worker_name, FileSink::new()))
    }
}

impl<S: RecordSink> FileExporter<S> {
    /// Create an exporter over any sink. The config is assumed validated.
    pub fn with_sink(config: ExportConfig, worker_name: Option<&str>, sink: S) -> Self {
        let worker_name = match worker_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                warn!("No worker name supplied, export files will use '{UNKNOWN_WORKER}'");
                UNKNOWN_WORKER.to_string()
            }
        };

        debug!(
            "Export stage ready: format={}, dir={}, worker={}, file_per_slice={}",
            config.format,
            config.output_dir().display(),
            worker_name,
            config.file_per_slice
        );

        Self {
            config,
            worker_name,
            next_slice: 0,
            sink,
            stats: ExportStats::default(),
        }
    }

    /// Render a slice and append it to its target file.
    ///
    /// The slice index advances even when the slice is empty or fails. An
    /// empty slice appends nothing but still opens its target.
    pub async fn process_slice(&mut self, records: &[Record]) -> Result<SliceReport> {
        let slice_index = self.next_slice;
        self.next_slice += 1;
        self.stats.slices += 1;

        let target = self.target_for(slice_index);
        let header_written = self.sink.header_written(&target).await?;
        let rendered = format::render(records, &self.config, header_written)?;

        if let Err(e) = self.sink.append(&target, rendered.text.as_bytes()).await {
            // A per-slice target is never written again once its slice is over
            if self.config.file_per_slice {
                if let Err(release_err) = self.sink.release(&target).await {
                    warn!("Failed to release {} after write error: {}", target, release_err);
                }
            }
            return Err(e);
        }
        if rendered.wrote_header {
            self.sink.mark_header_written(&target);
        }
        if self.config.file_per_slice {
            self.sink.release(&target).await?;
        }

        if self.config.file_per_slice || self.stats.files == 0 {
            self.stats.files += 1;
        }
        self.stats.records += rendered.records as u64;
        self.stats.bytes += rendered.text.len() as u64;

        info!(
            "Exported slice {} ({} records, {} bytes) to {}",
            slice_index,
            rendered.records,
            rendered.text.len(),
            target
        );

        Ok(SliceReport {
            slice_index,
            path: target.path().to_path_buf(),
            records: rendered.records,
            bytes: rendered.text.len(),
            wrote_header: rendered.wrote_header,
        })
    }

    /// Flush and close every open file, returning the totals
    pub async fn shutdown(&mut self) -> Result<ExportStats> {
        self.sink.shutdown().await?;
        info!(
            "Export finished: {} slices, {} records, {} files",
            self.stats.slices,
            self.stats.records,
            self.stats.files
        );
        Ok(self.stats.clone())
    }

    /// Target the next slice will be written to
    pub fn next_target(&self) -> FileTarget {
        self.target_for(self.next_slice)
    }

    /// Worker name used in file names
    pub fn worker_name(&self) -> &str {
        &self.worker_name
    }

    /// Stage configuration
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Totals so far
    pub fn stats(&self) -> &ExportStats {
        &self.stats
    }

    /// The underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn target_for(&self, slice_index: u64) -> FileTarget {
        FileTarget::resolve(&self.config, &self.worker_name, slice_index)
    }
}

/// Fail unless `dir` is an existing directory
async fn check_output_dir(dir: &Path) -> Result<()> {
    let metadata = tokio::fs::metadata(dir).await.map_err(|e| {
        Error::config(format!(
            "Export directory '{}' is not accessible: {e}",
            dir.display()
        ))
    })?;

    if !metadata.is_dir() {
        return Err(Error::config(format!(
            "Export path '{}' is not a directory",
            dir.display()
        )));
    }

    Ok(())
}
