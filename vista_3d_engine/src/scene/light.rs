//! Lights — the pre-balanced lighting rig.
//!
//! Lighting is pre-baked into assets; these lights only provide fill and
//! key shading for the PBR materials. No shadow mapping.

use glam::Vec3;

/// Light kind tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform fill from all directions
    Ambient,
    /// Parallel key light
    Directional {
        /// Unit direction the light travels (toward the scene)
        direction: Vec3,
    },
    /// Sky/ground gradient fill
    Hemisphere {
        ground_color: Vec3,
    },
}

/// One light in the rig.
#[derive(Debug, Clone)]
pub struct Light {
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color,
            intensity,
        }
    }

    /// Directional key light shining from `position` toward the origin.
    pub fn directional_from(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional {
                direction: (-position).try_normalize().unwrap_or(Vec3::NEG_Y),
            },
            color,
            intensity,
        }
    }

    pub fn hemisphere(sky: Vec3, ground: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Hemisphere { ground_color: ground },
            color: sky,
            intensity,
        }
    }
}
