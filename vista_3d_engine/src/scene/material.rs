//! Materials — physically-based shading parameters per mesh.

use glam::Vec3;

use super::device::MaterialHandle;

/// Material shading model.
///
/// Loaded assets are expected to carry PBR materials; `Basic` exists so
/// the inspector can flag meshes that slipped through with an unlit
/// material (they render flat and break the cinematic look).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Physically-based (metallic/roughness) shading
    Pbr,
    /// Unlit flat shading
    Basic,
}

/// PBR material parameters.
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub kind: MaterialKind,
    pub base_color: Vec3,
    pub metallic: f32,
    pub roughness: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    /// Render opacity in [0,1]; animated by section fade-ins
    pub opacity: f32,
    /// Whether the material blends (set when opacity animates below 1)
    pub transparent: bool,
    /// GPU parameter buffer handle once uploaded
    pub(crate) gpu: Option<MaterialHandle>,
}

impl Material {
    /// A neutral PBR material.
    pub fn standard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Pbr,
            base_color: Vec3::ONE,
            metallic: 0.0,
            roughness: 0.8,
            emissive: Vec3::ZERO,
            emissive_intensity: 1.0,
            opacity: 1.0,
            transparent: false,
            gpu: None,
        }
    }

    /// Whether the material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emissive != Vec3::ZERO
    }

    /// GPU buffer handle, when uploaded.
    pub fn gpu(&self) -> Option<MaterialHandle> {
        self.gpu
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
