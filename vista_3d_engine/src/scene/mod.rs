//! Scene module — scene graph, GPU resource seam, asset loading and the
//! resource manager that owns all of it.

mod device;
mod geometry;
mod light;
mod loader;
mod manager;
mod material;
mod node;
#[allow(clippy::module_inception)]
mod scene;

// Mock render device for tests (no GPU required)
#[cfg(test)]
pub mod mock_device;

pub use device::{
    DrawCall, FrameDraw, GeometryHandle, GeometryUpload, MaterialHandle,
    PassKind, PassRun, RenderDevice, TargetHandle, Vertex,
};
pub use geometry::Geometry;
pub use light::{Light, LightKind};
pub use loader::{JsonModelLoader, ModelData, ModelLoader, ParsedMesh};
pub use manager::{FrameDriver, LoadedAsset, SceneResourceManager};
pub use material::{Material, MaterialKind};
pub use node::{Mesh, NodeKey, NodeKind, SceneNode, Transform};
pub use scene::{Scene, collect_draws};
