//! Output file identity

use crate::config::ExportConfig;
use std::fmt;
use std::path::{Path, PathBuf};

/// Physical file a slice is appended to.
///
/// `{path}/{file_prefix}_{worker}` for the whole life of a worker, or
/// `{path}/{file_prefix}_{worker}.{slice_index}` when every slice gets its own file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileTarget {
    path: PathBuf,
    slice_index: Option<u64>,
}

impl FileTarget {
    /// Target shared by every slice of a worker
    pub fn single(dir: impl AsRef<Path>, prefix: &str, worker: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{prefix}_{worker}")),
            slice_index: None,
        }
    }

    /// Target dedicated to one slice
    pub fn per_slice(dir: impl AsRef<Path>, prefix: &str, worker: &str, slice_index: u64) -> Self {
        Self {
            path: dir
                .as_ref()
                .join(format!("{prefix}_{worker}.{slice_index}")),
            slice_index: Some(slice_index),
        }
    }

    /// Target for the slice at `slice_index` under `config`
    pub fn resolve(config: &ExportConfig, worker: &str, slice_index: u64) -> Self {
        if config.file_per_slice {
            Self::per_slice(&config.path, &config.file_prefix, worker, slice_index)
        } else {
            Self::single(&config.path, &config.file_prefix, worker)
        }
    }

    /// Full path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Slice index suffix, if this target belongs to a single slice
    pub fn slice_index(&self) -> Option<u64> {
        self.slice_index
    }
}

impl fmt::Display for FileTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
