//! Filesystem-backed fetch source.
//!
//! Serves paths relative to a content root (the deployed site's asset
//! directory). Reads are chunked so that a large binary reports
//! incremental progress instead of completing in a single poll.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{Error, Result};
use super::{FetchPoll, FetchSource, FetchStream};

/// Default chunk size per poll (64 KiB)
const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Fetch source reading from a local directory tree.
pub struct FileSource {
    root: PathBuf,
    chunk_size: usize,
}

impl FileSource {
    /// Create a source rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a source with an explicit chunk size (must be non-zero).
    pub fn with_chunk_size(root: impl Into<PathBuf>, chunk_size: usize) -> Self {
        Self {
            root: root.into(),
            chunk_size: chunk_size.max(1),
        }
    }
}

impl FetchSource for FileSource {
    fn open(&self, path: &str) -> Result<Box<dyn FetchStream>> {
        let full = self.root.join(path);
        let file = File::open(&full).map_err(|e| Error::AssetFetch {
            asset_id: None,
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let total = file
            .metadata()
            .map(|m| m.len())
            .map_err(|e| Error::AssetFetch {
                asset_id: None,
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Box::new(FileStream {
            path: path.to_string(),
            file,
            buffer: Vec::with_capacity(total as usize),
            total,
            chunk_size: self.chunk_size,
        }))
    }
}

struct FileStream {
    path: String,
    file: File,
    buffer: Vec<u8>,
    total: u64,
    chunk_size: usize,
}

impl FetchStream for FileStream {
    fn poll(&mut self) -> Result<FetchPoll> {
        let mut chunk = vec![0u8; self.chunk_size];
        let read = self.file.read(&mut chunk).map_err(|e| Error::AssetFetch {
            asset_id: None,
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        if read == 0 {
            return Ok(FetchPoll::Done(std::mem::take(&mut self.buffer)));
        }

        self.buffer.extend_from_slice(&chunk[..read]);
        Ok(FetchPoll::Progress {
            received: self.buffer.len() as u64,
            total: self.total,
        })
    }

    fn total_bytes(&self) -> Option<u64> {
        Some(self.total)
    }
}
