//! Asset metadata and section configuration.
//!
//! Pure data-access leaf of the engine: descriptive metadata for each
//! loadable asset (transform, section association, visibility and
//! animation hints) and the static section -> asset -> camera-waypoint
//! configuration table. Everything here is immutable once loaded and
//! read-only to the rest of the engine.

mod config;
mod descriptor;
mod store;

pub use config::{
    CameraSettings, CameraPose, DirectionalSettings, LightSettings,
    LightingSettings, SceneConfig, SectionWaypoint, TimingHints, color_vec3,
};
pub use descriptor::{AnimationDirective, AnimationKind, AssetDescriptor, VisibilityFlags};
pub use store::AssetMetadataStore;
