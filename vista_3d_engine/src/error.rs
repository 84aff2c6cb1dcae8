//! Error types for the Vista3D engine
//!
//! This module defines the error types used throughout the engine:
//! asset fetching and parsing, render pass construction, configuration
//! validation, and device failures.

use std::fmt;

/// Result type for Vista3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Vista3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Network or I/O failure retrieving metadata or an asset binary.
    /// Not retried automatically; surfaced to the caller of the loading phase.
    AssetFetch {
        /// Asset identifier, when the fetch belongs to a specific asset
        asset_id: Option<String>,
        /// Path that failed to resolve
        path: String,
        /// Underlying failure description
        reason: String,
    },

    /// Payload retrieved but not parseable as a scene graph or metadata document
    AssetParse {
        asset_id: String,
        reason: String,
    },

    /// An optional render pass failed to construct.
    /// Recovered locally by omitting the pass; never fatal to the pipeline.
    PassInit {
        pass: &'static str,
        reason: String,
    },

    /// A descriptor references a section not present in the configuration table.
    /// Logged and the asset is skipped; not fatal to the rest of the load.
    ConfigReference {
        asset_id: String,
        section: String,
    },

    /// Render device failure (lock poisoned, resource creation failed, etc.)
    Device(String),

    /// Operation attempted on a disposed manager
    Disposed(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AssetFetch { asset_id, path, reason } => match asset_id {
                Some(id) => write!(f, "Failed to fetch '{}' for asset '{}': {}", path, id, reason),
                None => write!(f, "Failed to fetch '{}': {}", path, reason),
            },
            Error::AssetParse { asset_id, reason } => {
                write!(f, "Failed to parse asset '{}': {}", asset_id, reason)
            }
            Error::PassInit { pass, reason } => {
                write!(f, "Render pass '{}' failed to initialize: {}", pass, reason)
            }
            Error::ConfigReference { asset_id, section } => {
                write!(f, "Asset '{}' references unknown section '{}'", asset_id, section)
            }
            Error::Device(msg) => write!(f, "Render device error: {}", msg),
            Error::Disposed(op) => write!(f, "'{}' called on a disposed manager", op),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Asset identifier attached to this error, if any.
    ///
    /// Fetch and parse failures carry the failing descriptor's id for
    /// diagnostics; other variants return None.
    pub fn asset_id(&self) -> Option<&str> {
        match self {
            Error::AssetFetch { asset_id, .. } => asset_id.as_deref(),
            Error::AssetParse { asset_id, .. } => Some(asset_id),
            Error::ConfigReference { asset_id, .. } => Some(asset_id),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
