//! Mock render device for unit tests (no GPU required).
//!
//! Tracks live allocations so tests can assert that every handle created
//! during a scenario was released by dispose, and records every frame
//! event so pipeline tests can assert pass ordering.

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use super::device::{
    FrameDraw, GeometryHandle, GeometryUpload, MaterialHandle,
    PassRun, RenderDevice, TargetHandle,
};
use super::material::Material;

/// Recorded device event.
#[derive(Debug, Clone, PartialEq)]
pub enum MockEvent {
    Draw {
        draw_count: usize,
        to_surface: bool,
    },
    Pass {
        name: &'static str,
        to_surface: bool,
    },
    Present,
    ResizeSurface(u32, u32),
    ResizeTarget(TargetHandle, u32, u32),
}

/// In-memory device double.
pub struct MockRenderDevice {
    next_handle: u64,
    width: u32,
    height: u32,
    /// Toggle to simulate a backend without SSAO capability
    pub ssao_supported: bool,
    /// Force geometry uploads to fail (error-path tests)
    pub fail_geometry_uploads: bool,
    pub live_geometry: FxHashSet<GeometryHandle>,
    pub live_materials: FxHashSet<MaterialHandle>,
    pub live_targets: FxHashSet<TargetHandle>,
    pub events: Vec<MockEvent>,
}

impl MockRenderDevice {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            next_handle: 1,
            width,
            height,
            ssao_supported: true,
            fail_geometry_uploads: false,
            live_geometry: FxHashSet::default(),
            live_materials: FxHashSet::default(),
            live_targets: FxHashSet::default(),
            events: Vec::new(),
        }
    }

    /// Device with SSAO capability disabled.
    pub fn without_ssao(width: u32, height: u32) -> Self {
        let mut device = Self::new(width, height);
        device.ssao_supported = false;
        device
    }

    /// Total live allocations across all resource kinds.
    pub fn live_allocations(&self) -> usize {
        self.live_geometry.len() + self.live_materials.len() + self.live_targets.len()
    }

    /// Names of executed passes, in order.
    pub fn pass_sequence(&self) -> Vec<&'static str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                MockEvent::Pass { name, .. } => Some(*name),
                _ => None,
            })
            .collect()
    }

    fn alloc(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }
}

impl RenderDevice for MockRenderDevice {
    fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.events.push(MockEvent::ResizeSurface(width, height));
    }

    fn supports_ssao(&self) -> bool {
        self.ssao_supported
    }

    fn upload_geometry(&mut self, upload: &GeometryUpload<'_>) -> Result<GeometryHandle> {
        if self.fail_geometry_uploads {
            return Err(Error::Device(format!(
                "mock geometry upload failure for '{}'",
                upload.label
            )));
        }
        let handle = GeometryHandle(self.alloc());
        self.live_geometry.insert(handle);
        Ok(handle)
    }

    fn release_geometry(&mut self, handle: GeometryHandle) {
        self.live_geometry.remove(&handle);
    }

    fn upload_material(&mut self, _material: &Material, _label: &str) -> Result<MaterialHandle> {
        let handle = MaterialHandle(self.alloc());
        self.live_materials.insert(handle);
        Ok(handle)
    }

    fn release_material(&mut self, handle: MaterialHandle) {
        self.live_materials.remove(&handle);
    }

    fn create_target(&mut self, _width: u32, _height: u32, _label: &str) -> Result<TargetHandle> {
        let handle = TargetHandle(self.alloc());
        self.live_targets.insert(handle);
        Ok(handle)
    }

    fn resize_target(&mut self, handle: TargetHandle, width: u32, height: u32) -> Result<()> {
        if !self.live_targets.contains(&handle) {
            return Err(Error::Device("resize of unknown target".to_string()));
        }
        self.events.push(MockEvent::ResizeTarget(handle, width, height));
        Ok(())
    }

    fn destroy_target(&mut self, handle: TargetHandle) {
        self.live_targets.remove(&handle);
    }

    fn draw(&mut self, frame: &FrameDraw<'_>, target: Option<TargetHandle>) -> Result<()> {
        self.events.push(MockEvent::Draw {
            draw_count: frame.draws.len(),
            to_surface: target.is_none(),
        });
        Ok(())
    }

    fn run_pass(&mut self, pass: &PassRun) -> Result<()> {
        self.events.push(MockEvent::Pass {
            name: pass.kind.name(),
            to_surface: pass.output.is_none(),
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.events.push(MockEvent::Present);
        Ok(())
    }
}
