//! Model loading — parsing fetched asset binaries into scene subtrees.
//!
//! The on-disk 3D format is an external collaborator; the engine only
//! defines the `ModelLoader` boundary. `JsonModelLoader` handles the
//! pipeline's exported scene-graph JSON documents.

use glam::Vec3;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::metadata::AssetDescriptor;
use super::geometry::Geometry;
use super::material::{Material, MaterialKind};

/// One parsed mesh: geometry plus its material.
#[derive(Debug)]
pub struct ParsedMesh {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
}

/// The full parsed content of one asset binary.
#[derive(Debug)]
pub struct ModelData {
    pub meshes: Vec<ParsedMesh>,
}

/// External scene-graph file parser boundary.
pub trait ModelLoader: Send {
    /// Parse a fetched payload into mesh data.
    ///
    /// # Errors
    ///
    /// Returns `Error::AssetParse` (carrying the descriptor id) when the
    /// payload is not a valid scene-graph document.
    fn parse(&self, descriptor: &AssetDescriptor, bytes: &[u8]) -> Result<ModelData>;
}

// ===== JSON SCENE DOCUMENTS =====

#[derive(Debug, Deserialize)]
struct SceneDoc {
    meshes: Vec<MeshDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeshDoc {
    name: String,
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    #[serde(default)]
    normals: Vec<[f32; 3]>,
    #[serde(default)]
    material: Option<MaterialDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MaterialDoc {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    base_color: Option<[f32; 3]>,
    #[serde(default)]
    metallic: Option<f32>,
    #[serde(default)]
    roughness: Option<f32>,
    #[serde(default)]
    emissive: Option<[f32; 3]>,
    #[serde(default)]
    emissive_intensity: Option<f32>,
    #[serde(default)]
    opacity: Option<f32>,
}

/// Loader for the asset pipeline's scene-graph JSON export.
pub struct JsonModelLoader;

impl ModelLoader for JsonModelLoader {
    fn parse(&self, descriptor: &AssetDescriptor, bytes: &[u8]) -> Result<ModelData> {
        let parse_err = |reason: String| Error::AssetParse {
            asset_id: descriptor.id.clone(),
            reason,
        };

        let doc: SceneDoc =
            serde_json::from_slice(bytes).map_err(|e| parse_err(e.to_string()))?;

        if doc.meshes.is_empty() {
            return Err(parse_err("document contains no meshes".to_string()));
        }

        let mut meshes = Vec::with_capacity(doc.meshes.len());
        for mesh in doc.meshes {
            let vertex_count = mesh.positions.len() as u32;
            if mesh.indices.len() % 3 != 0 {
                return Err(parse_err(format!(
                    "mesh '{}' index count {} is not a multiple of 3",
                    mesh.name,
                    mesh.indices.len()
                )));
            }
            if let Some(&bad) = mesh.indices.iter().find(|&&i| i >= vertex_count) {
                return Err(parse_err(format!(
                    "mesh '{}' index {} out of range ({} vertices)",
                    mesh.name, bad, vertex_count
                )));
            }

            let positions: Vec<Vec3> = mesh.positions.iter().map(|&p| Vec3::from(p)).collect();
            let geometry = if mesh.normals.len() == positions.len() {
                Geometry::with_normals(
                    positions,
                    mesh.normals.iter().map(|&n| Vec3::from(n)).collect(),
                    mesh.indices,
                )
            } else {
                Geometry::new(positions, mesh.indices)
            };

            let material = build_material(&mesh.name, mesh.material);
            meshes.push(ParsedMesh {
                name: mesh.name,
                geometry,
                material,
            });
        }

        Ok(ModelData { meshes })
    }
}

fn build_material(mesh_name: &str, doc: Option<MaterialDoc>) -> Material {
    let Some(doc) = doc else {
        return Material::standard(format!("{}-material", mesh_name));
    };

    let mut material =
        Material::standard(doc.name.unwrap_or_else(|| format!("{}-material", mesh_name)));
    if let Some(kind) = doc.kind.as_deref() {
        material.kind = match kind {
            "basic" => MaterialKind::Basic,
            _ => MaterialKind::Pbr,
        };
    }
    if let Some(color) = doc.base_color {
        material.base_color = Vec3::from(color);
    }
    if let Some(metallic) = doc.metallic {
        material.metallic = metallic;
    }
    if let Some(roughness) = doc.roughness {
        material.roughness = roughness;
    }
    if let Some(emissive) = doc.emissive {
        material.emissive = Vec3::from(emissive);
    }
    if let Some(intensity) = doc.emissive_intensity {
        material.emissive_intensity = intensity;
    }
    if let Some(opacity) = doc.opacity {
        material.opacity = opacity;
        material.transparent = opacity < 1.0;
    }
    material
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
