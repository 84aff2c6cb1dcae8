//! In-memory fetch source.
//!
//! Serves preloaded byte payloads keyed by path. Used by hosts that embed
//! their content table directly and by tests that need deterministic,
//! chunked transfers without touching the filesystem.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use super::{FetchPoll, FetchSource, FetchStream};

/// Default chunk size per poll
const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Fetch source serving from an in-memory path -> bytes map.
pub struct MemorySource {
    entries: FxHashMap<String, Vec<u8>>,
    chunk_size: usize,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create an empty source with an explicit chunk size (must be non-zero).
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Register a payload under a path, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(path.into(), bytes.into());
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchSource for MemorySource {
    fn open(&self, path: &str) -> Result<Box<dyn FetchStream>> {
        let bytes = self.entries.get(path).ok_or_else(|| Error::AssetFetch {
            asset_id: None,
            path: path.to_string(),
            reason: "not found".to_string(),
        })?;

        Ok(Box::new(MemoryStream {
            bytes: bytes.clone(),
            cursor: 0,
            chunk_size: self.chunk_size,
        }))
    }
}

struct MemoryStream {
    bytes: Vec<u8>,
    cursor: usize,
    chunk_size: usize,
}

impl FetchStream for MemoryStream {
    fn poll(&mut self) -> Result<FetchPoll> {
        if self.cursor >= self.bytes.len() {
            return Ok(FetchPoll::Done(std::mem::take(&mut self.bytes)));
        }

        self.cursor = (self.cursor + self.chunk_size).min(self.bytes.len());
        if self.cursor >= self.bytes.len() {
            // Final chunk consumed; report completion immediately.
            return Ok(FetchPoll::Done(std::mem::take(&mut self.bytes)));
        }

        Ok(FetchPoll::Progress {
            received: self.cursor as u64,
            total: self.bytes.len() as u64,
        })
    }

    fn total_bytes(&self) -> Option<u64> {
        Some(self.bytes.len() as u64)
    }
}
