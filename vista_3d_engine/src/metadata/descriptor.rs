//! Asset descriptors — per-asset metadata documents.

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Descriptive metadata for one loadable asset.
///
/// Sourced from the per-asset detail JSON document; immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    /// Unique identifier, also the scene-graph name of the loaded object
    pub id: String,

    /// Asset category (informational)
    pub category: String,

    /// Binary source file, relative to the asset root
    pub file: String,

    /// Uniform or per-axis scale applied to the loaded object
    pub scale: Vec3,

    /// World position applied to the loaded object
    pub position: Vec3,

    /// Euler rotation (radians, XYZ order) applied to the loaded object
    pub rotation: Vec3,

    /// Owning section identifier; must reference a configured section
    pub section: String,

    /// Visibility behavior hints
    #[serde(default)]
    pub visibility: Option<VisibilityFlags>,

    /// Ambient/scroll animation directive
    #[serde(default)]
    pub animation: Option<AnimationDirective>,
}

impl AssetDescriptor {
    /// Whether the asset starts visible (defaults to true when no flags are set).
    pub fn default_visible(&self) -> bool {
        self.visibility
            .as_ref()
            .map(|v| v.default_visible)
            .unwrap_or(true)
    }
}

/// Optional visibility flags for an asset.
#[derive(Debug, Clone, Deserialize)]
pub struct VisibilityFlags {
    /// Initial render visibility
    #[serde(rename = "default", default = "default_true")]
    pub default_visible: bool,

    /// Whether the asset fades in when its section is entered
    #[serde(rename = "fadeIn", default = "default_true")]
    pub fade_in: bool,

    /// Whether the asset fades out when its section is left
    #[serde(rename = "fadeOut", default)]
    pub fade_out: bool,
}

fn default_true() -> bool {
    true
}

impl Default for VisibilityFlags {
    fn default() -> Self {
        Self {
            default_visible: true,
            fade_in: true,
            fade_out: false,
        }
    }
}

/// Ambient or scroll-bound animation directive for an asset.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationDirective {
    /// Animation kind
    #[serde(rename = "type")]
    pub kind: AnimationKind,

    /// Free-form parameter mapping (duration, ease, ...)
    #[serde(default)]
    pub params: FxHashMap<String, serde_json::Value>,
}

impl AnimationDirective {
    /// Numeric parameter lookup with a fallback.
    pub fn param_f32(&self, key: &str, fallback: f32) -> f32 {
        self.params
            .get(key)
            .and_then(|v| v.as_f64())
            .map(|v| v as f32)
            .unwrap_or(fallback)
    }

    /// String parameter lookup.
    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(|v| v.as_str())
    }
}

/// Supported animation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AnimationKind {
    /// Continuous yoyo vertical bob plus slow yoyo rotation
    #[serde(rename = "idle")]
    Idle,

    /// Continuous one-directional rotation about the vertical axis
    #[serde(rename = "loop")]
    Loop,

    /// Discrete scale up/down on section enter / backward leave
    #[serde(rename = "scroll_triggered", alias = "scrollTriggered")]
    ScrollTriggered,
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
