//! Render device seam — the boundary to the GPU backend.
//!
//! The engine never issues graphics API calls itself; everything goes
//! through the `RenderDevice` trait. Backends own the actual buffers and
//! targets and hand back opaque handles. The manager and the pipeline
//! share one device behind `Arc<Mutex<_>>`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::error::Result;
use super::material::Material;

/// Opaque handle to an uploaded geometry buffer pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u64);

/// Opaque handle to an uploaded material parameter buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

/// Opaque handle to an offscreen render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetHandle(pub u64);

/// Interleaved GPU vertex layout
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Geometry upload request.
pub struct GeometryUpload<'a> {
    pub vertices: &'a [Vertex],
    pub indices: &'a [u32],
    pub label: &'a str,
}

/// One mesh draw within a frame.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall {
    pub geometry: GeometryHandle,
    pub material: MaterialHandle,
    pub world: Mat4,
    pub opacity: f32,
}

/// A full base-scene draw submission.
pub struct FrameDraw<'a> {
    pub draws: &'a [DrawCall],
    pub view: Mat4,
    pub projection: Mat4,
    pub clear_color: Vec3,
}

/// Post-processing pass kinds with their tunable parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassKind {
    /// Screen-space ambient occlusion
    Ssao {
        kernel_radius: f32,
        min_distance: f32,
        max_distance: f32,
    },
    /// Bright-area glow
    Bloom {
        strength: f32,
        radius: f32,
        threshold: f32,
    },
    /// Edge anti-aliasing
    AntiAlias,
    /// Filmic tone mapping and color-space finalization
    Output { exposure: f32 },
}

impl PassKind {
    /// Stable pass name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            PassKind::Ssao { .. } => "ssao",
            PassKind::Bloom { .. } => "bloom",
            PassKind::AntiAlias => "anti-alias",
            PassKind::Output { .. } => "output",
        }
    }
}

/// One pass execution: read `input`, write `output` (None = surface).
#[derive(Debug, Clone, Copy)]
pub struct PassRun {
    pub kind: PassKind,
    pub input: TargetHandle,
    pub output: Option<TargetHandle>,
}

/// GPU backend boundary.
///
/// All resource lifetime flows through this trait: whoever created a
/// handle is responsible for releasing it. `MockRenderDevice` verifies
/// that accounting in tests.
pub trait RenderDevice: Send {
    // ===== SURFACE =====

    /// Current drawable surface size in pixels.
    fn surface_size(&self) -> (u32, u32);

    /// Resize the surface framebuffer.
    fn resize_surface(&mut self, width: u32, height: u32);

    /// Whether the backend can run the ambient-occlusion pass.
    fn supports_ssao(&self) -> bool;

    // ===== RESOURCES =====

    /// Upload an indexed vertex buffer pair.
    fn upload_geometry(&mut self, upload: &GeometryUpload<'_>) -> Result<GeometryHandle>;

    /// Release a geometry buffer pair.
    fn release_geometry(&mut self, handle: GeometryHandle);

    /// Upload a material parameter buffer.
    fn upload_material(&mut self, material: &Material, label: &str) -> Result<MaterialHandle>;

    /// Release a material parameter buffer.
    fn release_material(&mut self, handle: MaterialHandle);

    /// Create an offscreen color target.
    fn create_target(&mut self, width: u32, height: u32, label: &str) -> Result<TargetHandle>;

    /// Resize an offscreen target.
    fn resize_target(&mut self, handle: TargetHandle, width: u32, height: u32) -> Result<()>;

    /// Destroy an offscreen target.
    fn destroy_target(&mut self, handle: TargetHandle);

    // ===== FRAME =====

    /// Draw the base scene into a target (None = surface backbuffer).
    fn draw(&mut self, frame: &FrameDraw<'_>, target: Option<TargetHandle>) -> Result<()>;

    /// Execute one post-processing pass.
    fn run_pass(&mut self, pass: &PassRun) -> Result<()>;

    /// Present the surface backbuffer.
    fn present(&mut self) -> Result<()>;
}
