//! Sink module
//!
//! Owns everything about output files: where a slice goes, the open handles,
//! and whether a file already has its header.
//!
//! # Overview
//!
//! The sink module provides:
//! - `FileTarget` - Path of the file a slice is appended to
//! - `RecordSink` - Append/release lifecycle plus per-target header state
//! - `FileSink` - Local filesystem implementation

mod file;
mod target;

pub use file::FileSink;
pub use target::FileTarget;

use crate::error::Result;
use async_trait::async_trait;

/// Destination for rendered slices.
///
/// Calls for one worker are strictly sequential. Each `append` must have
/// reached the file before it returns.
#[async_trait]
pub trait RecordSink: Send {
    /// Append bytes to a target, opening it first if needed.
    ///
    /// An empty `bytes` still opens the target, creating the file.
    async fn append(&mut self, target: &FileTarget, bytes: &[u8]) -> Result<()>;

    /// Whether the target file already starts with a header row.
    ///
    /// A file that held data before this sink first opened it counts as
    /// having its header.
    async fn header_written(&mut self, target: &FileTarget) -> Result<bool>;

    /// Record that the target file now has its header row
    fn mark_header_written(&mut self, target: &FileTarget);

    /// Flush and close a target, forgetting its header state
    async fn release(&mut self, target: &FileTarget) -> Result<()>;

    /// Flush and close every open target
    async fn shutdown(&mut self) -> Result<()>;
}
