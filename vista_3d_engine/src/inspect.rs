//! Diagnostic inspection — read-only scene analysis for development and
//! troubleshooting.
//!
//! Every function here observes and logs; none of them mutate the scene.
//! The manager runs a full diagnostic after the first asset loads so
//! material or lighting mistakes surface immediately.

use rustc_hash::FxHashSet;

use crate::{engine_debug, engine_info, engine_warn};
use crate::camera::PerspectiveCamera;
use crate::scene::{LightKind, MaterialKind, NodeKey, Scene};

const LOG_SRC: &str = "vista3d::DiagnosticInspector";

/// Lighting the experience is balanced for; beyond this highlights clip
const TOTAL_INTENSITY_CEILING: f32 = 1.5;

/// Aggregate structure report for one model subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReport {
    pub mesh_count: usize,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub unique_materials: usize,
    pub emissive_materials: usize,
}

/// Light census for the whole scene.
#[derive(Debug, Clone, PartialEq)]
pub struct LightingReport {
    pub ambient_count: usize,
    pub directional_count: usize,
    pub hemisphere_count: usize,
    pub total_intensity: f32,
}

impl LightingReport {
    pub fn light_count(&self) -> usize {
        self.ambient_count + self.directional_count + self.hemisphere_count
    }
}

/// Read-only scene analysis entry points.
pub struct DiagnosticInspector;

impl DiagnosticInspector {
    /// Walk a model subtree and report its mesh/material structure.
    pub fn analyze_model(scene: &Scene, root: NodeKey) -> ModelReport {
        let mut report = ModelReport {
            mesh_count: 0,
            vertex_count: 0,
            triangle_count: 0,
            unique_materials: 0,
            emissive_materials: 0,
        };
        let mut material_names: FxHashSet<String> = FxHashSet::default();

        scene.visit(root, |_, node| {
            if let Some(mesh) = node.as_mesh() {
                report.mesh_count += 1;
                report.vertex_count += mesh.geometry.vertex_count();
                report.triangle_count += mesh.geometry.triangle_count();
                if material_names.insert(mesh.material.name.clone()) && mesh.material.is_emissive()
                {
                    report.emissive_materials += 1;
                }
            }
        });
        report.unique_materials = material_names.len();

        let name = scene
            .node(root)
            .map(|n| n.name.as_str())
            .unwrap_or("<stale>");
        engine_info!(
            LOG_SRC,
            "Model '{}': {} meshes, {} vertices, {} triangles, {} materials ({} emissive)",
            name,
            report.mesh_count,
            report.vertex_count,
            report.triangle_count,
            report.unique_materials,
            report.emissive_materials
        );
        report
    }

    /// Flag meshes that will render incorrectly: missing normals (flat
    /// black under PBR lighting) or unlit basic materials on lit content.
    /// Returns one human-readable finding per offending mesh.
    pub fn verify_meshes(scene: &Scene, root: NodeKey) -> Vec<String> {
        let mut findings = Vec::new();
        scene.visit(root, |_, node| {
            let Some(mesh) = node.as_mesh() else {
                return;
            };
            if !mesh.geometry.has_normals() {
                findings.push(format!("mesh '{}' has no vertex normals", node.name));
            }
            if mesh.material.kind == MaterialKind::Basic {
                findings.push(format!(
                    "mesh '{}' uses unlit material '{}'",
                    node.name, mesh.material.name
                ));
            }
        });
        for finding in &findings {
            engine_warn!(LOG_SRC, "{}", finding);
        }
        findings
    }

    /// Census of the scene's lights with a total-intensity check.
    pub fn analyze_lighting(scene: &Scene) -> LightingReport {
        let mut report = LightingReport {
            ambient_count: 0,
            directional_count: 0,
            hemisphere_count: 0,
            total_intensity: 0.0,
        };

        scene.visit(scene.root(), |_, node| {
            let Some(light) = node.as_light() else {
                return;
            };
            match light.kind {
                LightKind::Ambient => report.ambient_count += 1,
                LightKind::Directional { .. } => report.directional_count += 1,
                LightKind::Hemisphere { .. } => report.hemisphere_count += 1,
            }
            report.total_intensity += light.intensity;
        });

        if report.total_intensity > TOTAL_INTENSITY_CEILING {
            engine_warn!(
                LOG_SRC,
                "Total light intensity {:.2} exceeds balanced ceiling {:.2}",
                report.total_intensity,
                TOTAL_INTENSITY_CEILING
            );
        } else {
            engine_debug!(
                LOG_SRC,
                "{} lights, total intensity {:.2}",
                report.light_count(),
                report.total_intensity
            );
        }
        report
    }

    /// Run every check over the whole scene and log a summary.
    pub fn full_diagnostic(scene: &Scene, camera: &PerspectiveCamera) {
        let model = Self::analyze_model(scene, scene.root());
        let findings = Self::verify_meshes(scene, scene.root());
        let lighting = Self::analyze_lighting(scene);

        engine_info!(
            LOG_SRC,
            "Diagnostic: {} meshes, {} lights, {} findings, camera at {:?}",
            model.mesh_count,
            lighting.light_count(),
            findings.len(),
            camera.position()
        );
    }
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
