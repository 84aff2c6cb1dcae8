//! Asset metadata store — fetches and aggregates descriptor documents.
//!
//! Consumes the asset metadata endpoint: a manifest at
//! `assets/meta/asset-list.json` listing `{id, status}` entries, plus one
//! detail document per asset at `assets/meta/{id}.json` matching the
//! `AssetDescriptor` shape. Only entries whose status is `"complete"` are
//! eligible for loading.

use std::sync::Arc;

use serde::Deserialize;

use crate::engine_warn;
use crate::error::{Error, Result};
use crate::fetch::{FetchPoll, FetchSource};
use super::{AssetDescriptor, SectionWaypoint};

const MANIFEST_PATH: &str = "assets/meta/asset-list.json";

#[derive(Debug, Deserialize)]
struct Manifest {
    assets: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: String,
    status: String,
}

/// Fetches and aggregates descriptive metadata for each loadable asset.
pub struct AssetMetadataStore {
    source: Arc<dyn FetchSource>,
}

impl AssetMetadataStore {
    /// Create a store over the given fetch source.
    pub fn new(source: Arc<dyn FetchSource>) -> Self {
        Self { source }
    }

    /// Fetch the manifest and return the ids of all complete assets.
    ///
    /// # Errors
    ///
    /// Returns `Error::AssetFetch` if the manifest cannot be retrieved and
    /// `Error::AssetParse` if it is not a valid manifest document.
    pub fn load_manifest(&self) -> Result<Vec<String>> {
        let bytes = self.fetch_to_end(MANIFEST_PATH, None)?;
        let manifest: Manifest =
            serde_json::from_slice(&bytes).map_err(|e| Error::AssetParse {
                asset_id: "asset-list".to_string(),
                reason: e.to_string(),
            })?;

        Ok(manifest
            .assets
            .into_iter()
            .filter(|entry| entry.status == "complete")
            .map(|entry| entry.id)
            .collect())
    }

    /// Fetch the detail document for a single asset.
    pub fn load_descriptor(&self, asset_id: &str) -> Result<AssetDescriptor> {
        let path = format!("assets/meta/{}.json", asset_id);
        let bytes = self.fetch_to_end(&path, Some(asset_id))?;
        serde_json::from_slice(&bytes).map_err(|e| Error::AssetParse {
            asset_id: asset_id.to_string(),
            reason: e.to_string(),
        })
    }

    /// Fetch the manifest plus every eligible asset's detail document.
    ///
    /// Required path: any fetch or parse failure aborts the whole
    /// operation and is surfaced to the caller of the loading phase.
    pub fn load_all(&self) -> Result<Vec<AssetDescriptor>> {
        let ids = self.load_manifest()?;
        ids.iter().map(|id| self.load_descriptor(id)).collect()
    }

    /// Drop descriptors whose section does not exist in the configuration
    /// table. Offenders are logged and skipped; never fatal to the rest
    /// of the load.
    pub fn validate_sections(
        descriptors: Vec<AssetDescriptor>,
        sections: &[SectionWaypoint],
    ) -> Vec<AssetDescriptor> {
        descriptors
            .into_iter()
            .filter(|descriptor| {
                let known = sections.iter().any(|s| s.id == descriptor.section);
                if !known {
                    let err = Error::ConfigReference {
                        asset_id: descriptor.id.clone(),
                        section: descriptor.section.clone(),
                    };
                    engine_warn!("vista3d::AssetMetadataStore", "Skipping asset: {}", err);
                }
                known
            })
            .collect()
    }

    /// Drive one transfer to completion. Metadata documents are small;
    /// no per-chunk progress is reported here.
    fn fetch_to_end(&self, path: &str, asset_id: Option<&str>) -> Result<Vec<u8>> {
        let mut stream = self.source.open(path).map_err(|e| match e {
            Error::AssetFetch { path, reason, .. } => Error::AssetFetch {
                asset_id: asset_id.map(|s| s.to_string()),
                path,
                reason,
            },
            other => other,
        })?;

        loop {
            match stream.poll()? {
                FetchPoll::Progress { .. } => continue,
                FetchPoll::Done(bytes) => return Ok(bytes),
            }
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
