//! Scene configuration — maps scroll sections to assets and camera waypoints.
//!
//! The ordered section list defines the scroll traversal order and must
//! match the hosting document's section ordering. Immutable configuration;
//! deserializable from JSON or built from the compiled-in default table.

use glam::Vec3;
use serde::Deserialize;

/// Convert a packed 0xRRGGBB color to a linear-ish Vec3 in [0,1].
pub fn color_vec3(color: u32) -> Vec3 {
    Vec3::new(
        ((color >> 16) & 0xff) as f32 / 255.0,
        ((color >> 8) & 0xff) as f32 / 255.0,
        (color & 0xff) as f32 / 255.0,
    )
}

/// A camera pose: position plus look-at target.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Optional per-section animation timing hints.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingHints {
    #[serde(default)]
    pub duration: Option<f32>,
    #[serde(default)]
    pub ease: Option<String>,
}

/// One scroll section: identity, associated asset, and the camera
/// waypoint pair traversed while the section scrolls through view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionWaypoint {
    pub id: String,
    pub title: String,
    pub route: String,
    pub asset_id: String,
    pub camera_from: CameraPose,
    pub camera_to: CameraPose,
    #[serde(default)]
    pub animation: Option<TimingHints>,
}

/// Perspective camera settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub initial_position: Vec3,
}

/// One light's settings (packed 0xRRGGBB color plus intensity).
#[derive(Debug, Clone, Deserialize)]
pub struct LightSettings {
    pub color: u32,
    pub intensity: f32,
}

/// Directional key light settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionalSettings {
    pub color: u32,
    pub intensity: f32,
    pub position: Vec3,
}

/// Lighting rig: soft ambient fill, optional directional key light,
/// subtle hemisphere fill. Intensities are pre-balanced; the inspector
/// warns when their sum exceeds the recommended ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct LightingSettings {
    pub ambient: LightSettings,
    #[serde(default)]
    pub directional: Option<DirectionalSettings>,
    #[serde(default = "default_hemisphere")]
    pub hemisphere: LightSettings,
}

fn default_hemisphere() -> LightSettings {
    LightSettings {
        color: 0xffffff,
        intensity: 0.15,
    }
}

/// Full scene configuration table.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    pub camera: CameraSettings,
    pub lighting: LightingSettings,
    pub sections: Vec<SectionWaypoint>,
}

impl SceneConfig {
    /// Parse a configuration document from JSON.
    pub fn from_json(bytes: &[u8]) -> crate::error::Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| crate::error::Error::AssetParse {
            asset_id: "scene-config".to_string(),
            reason: e.to_string(),
        })
    }

    /// Look up a section by identifier.
    pub fn section(&self, id: &str) -> Option<&SectionWaypoint> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Look up the section owning a given asset.
    pub fn section_for_asset(&self, asset_id: &str) -> Option<&SectionWaypoint> {
        self.sections.iter().find(|s| s.asset_id == asset_id)
    }
}

impl Default for SceneConfig {
    /// The production configuration table: four chained sections where
    /// each section's camera-from pose continues the previous camera-to.
    fn default() -> Self {
        let pose = |px: f32, py: f32, pz: f32| CameraPose {
            position: Vec3::new(px, py, pz),
            look_at: Vec3::ZERO,
        };
        let timing = || {
            Some(TimingHints {
                duration: Some(1.5),
                ease: Some("power2.inOut".to_string()),
            })
        };

        Self {
            camera: CameraSettings {
                fov: 75.0,
                near: 0.1,
                far: 1000.0,
                initial_position: Vec3::new(0.0, 3.0, 10.0),
            },
            lighting: LightingSettings {
                ambient: LightSettings {
                    color: 0x404050,
                    intensity: 0.4,
                },
                directional: Some(DirectionalSettings {
                    color: 0xfff5e1,
                    intensity: 0.8,
                    position: Vec3::new(5.0, 10.0, 7.0),
                }),
                hemisphere: default_hemisphere(),
            },
            sections: vec![
                SectionWaypoint {
                    id: "home".to_string(),
                    title: "Home".to_string(),
                    route: "/".to_string(),
                    asset_id: "station-home".to_string(),
                    camera_from: pose(0.0, 3.0, 10.0),
                    camera_to: pose(0.0, 2.0, 6.0),
                    animation: timing(),
                },
                SectionWaypoint {
                    id: "store".to_string(),
                    title: "Store".to_string(),
                    route: "#store".to_string(),
                    asset_id: "station-store".to_string(),
                    camera_from: pose(0.0, 2.0, 6.0),
                    camera_to: pose(3.0, 2.0, 4.0),
                    animation: timing(),
                },
                SectionWaypoint {
                    id: "gallery".to_string(),
                    title: "Gallery".to_string(),
                    route: "#gallery".to_string(),
                    asset_id: "station-gallery".to_string(),
                    camera_from: pose(3.0, 2.0, 4.0),
                    camera_to: pose(-3.0, 2.0, 4.0),
                    animation: timing(),
                },
                SectionWaypoint {
                    id: "blog".to_string(),
                    title: "Blog".to_string(),
                    route: "#blog".to_string(),
                    asset_id: "station-blog".to_string(),
                    camera_from: pose(-3.0, 2.0, 4.0),
                    camera_to: pose(0.0, 2.0, -6.0),
                    animation: timing(),
                },
            ],
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
