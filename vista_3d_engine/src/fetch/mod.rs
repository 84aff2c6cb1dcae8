//! Fetch seam — non-blocking retrieval of metadata and asset binaries.
//!
//! The engine never talks to the network or filesystem directly. Hosts
//! provide a `FetchSource`; the engine opens `FetchStream`s from it and
//! polls them cooperatively. Each `poll` performs at most one bounded
//! chunk of work, so many in-flight transfers can be interleaved on one
//! logical thread with their completion callbacks serialized — no locking
//! is required anywhere in the loading path.
//!
//! Dropping a stream abandons the transfer. That is the engine's
//! cancellation primitive: no partially transferred buffer outlives the
//! stream that owned it.

mod file_source;
mod memory_source;

pub use file_source::FileSource;
pub use memory_source::MemorySource;

use crate::error::Result;

/// One step of a non-blocking transfer.
#[derive(Debug, Clone)]
pub enum FetchPoll {
    /// More data arrived; the transfer is still in flight.
    Progress {
        /// Bytes received so far
        received: u64,
        /// Total bytes expected (0 when the source cannot tell)
        total: u64,
    },

    /// Transfer complete; the full payload.
    Done(Vec<u8>),
}

/// An in-flight transfer, advanced by repeated polling.
pub trait FetchStream {
    /// Advance the transfer by at most one chunk.
    ///
    /// Returns `FetchPoll::Progress` while data is still arriving and
    /// `FetchPoll::Done` with the full payload exactly once. Polling
    /// after `Done` is a contract violation and may return an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::AssetFetch` if the underlying transfer fails.
    fn poll(&mut self) -> Result<FetchPoll>;

    /// Total payload size in bytes, when known up front.
    fn total_bytes(&self) -> Option<u64>;
}

/// Factory for transfers, keyed by path.
///
/// Paths are relative to the deployment root (e.g. `assets/meta/asset-list.json`).
pub trait FetchSource: Send + Sync {
    /// Open a new transfer for the given path.
    ///
    /// # Errors
    ///
    /// Returns `Error::AssetFetch` if the path cannot be resolved.
    fn open(&self, path: &str) -> Result<Box<dyn FetchStream>>;
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
