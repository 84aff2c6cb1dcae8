//! The render pipeline: base scene draw followed by a fixed-order pass
//! chain, ping-ponged through two offscreen targets.
//!
//! Pass order is SSAO (when the device supports it), bloom, anti-alias,
//! tone-mapped output. The output pass is always last and always writes
//! the surface backbuffer. A device without SSAO capability yields a
//! pipeline without that pass rather than a construction failure.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{engine_debug, engine_info, engine_warn};
use crate::camera::PerspectiveCamera;
use crate::error::{Error, Result};
use crate::scene::{
    collect_draws, FrameDraw, PassKind, PassRun, RenderDevice, Scene, TargetHandle,
};

const LOG_SRC: &str = "vista3d::RenderPipeline";

/// Bloom tuning. Defaults are the cinematic baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomSettings {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            strength: 0.4,
            radius: 0.6,
            threshold: 0.88,
        }
    }
}

/// Ambient-occlusion tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SsaoSettings {
    pub kernel_radius: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for SsaoSettings {
    fn default() -> Self {
        Self {
            kernel_radius: 8.0,
            min_distance: 0.005,
            max_distance: 0.1,
        }
    }
}

/// Exposure for the filmic tone-mapping output pass
const OUTPUT_EXPOSURE: f32 = 0.9;

/// Ordered post-processing chain over a shared render device.
pub struct RenderPipeline {
    device: Arc<Mutex<dyn RenderDevice>>,
    /// Base scene render target (chain input)
    scene_target: TargetHandle,
    /// Ping-pong intermediate target
    ping_target: TargetHandle,
    ssao: Option<SsaoSettings>,
    bloom: BloomSettings,
    width: u32,
    height: u32,
    disposed: bool,
}

impl RenderPipeline {
    /// Build the pass chain for a surface of the given size.
    ///
    /// SSAO is probed against the device and silently omitted when
    /// unsupported; every other pass is mandatory.
    ///
    /// # Errors
    ///
    /// Returns `Error::PassInit` when an offscreen target cannot be
    /// created.
    pub fn new(device: Arc<Mutex<dyn RenderDevice>>, width: u32, height: u32) -> Result<Self> {
        let (scene_target, ping_target, ssao_supported) = {
            let mut dev = lock_device(&device)?;
            let scene_target = dev
                .create_target(width, height, "pipeline-scene")
                .map_err(|e| Error::PassInit {
                    pass: "scene",
                    reason: e.to_string(),
                })?;
            let ping_target = match dev.create_target(width, height, "pipeline-ping") {
                Ok(target) => target,
                Err(e) => {
                    dev.destroy_target(scene_target);
                    return Err(Error::PassInit {
                        pass: "ping",
                        reason: e.to_string(),
                    });
                }
            };
            (scene_target, ping_target, dev.supports_ssao())
        };

        let ssao = if ssao_supported {
            engine_debug!(LOG_SRC, "SSAO pass enabled");
            Some(SsaoSettings::default())
        } else {
            engine_warn!(LOG_SRC, "Device lacks SSAO support, pass omitted");
            None
        };

        engine_info!(LOG_SRC, "Pipeline ready at {}x{}", width, height);
        Ok(Self {
            device,
            scene_target,
            ping_target,
            ssao,
            bloom: BloomSettings::default(),
            width,
            height,
            disposed: false,
        })
    }

    // ===== ACCESSORS =====

    pub fn has_ssao(&self) -> bool {
        self.ssao.is_some()
    }

    pub fn bloom(&self) -> BloomSettings {
        self.bloom
    }

    pub fn ssao(&self) -> Option<SsaoSettings> {
        self.ssao
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // ===== TUNING =====

    /// Retune the bloom pass for subsequent frames.
    pub fn set_bloom(&mut self, settings: BloomSettings) {
        self.bloom = settings;
    }

    /// Retune the SSAO pass. No-op when the pass was omitted at build.
    pub fn set_ssao(&mut self, settings: SsaoSettings) {
        if let Some(ssao) = self.ssao.as_mut() {
            *ssao = settings;
        }
    }

    // ===== FRAME =====

    /// Render one frame through the full chain and present it.
    pub fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<()> {
        if self.disposed {
            return Err(Error::Disposed("pipeline render"));
        }

        let draws = collect_draws(scene);
        let mut device = lock_device(&self.device)?;

        device.draw(
            &FrameDraw {
                draws: &draws,
                view: camera.view_matrix(),
                projection: camera.projection_matrix(),
                clear_color: scene.background,
            },
            Some(self.scene_target),
        )?;

        // Ping-pong: each intermediate pass reads the previous output.
        let mut read = self.scene_target;
        let mut write = self.ping_target;
        let mut chain: Vec<PassKind> = Vec::with_capacity(4);
        if let Some(ssao) = self.ssao {
            chain.push(PassKind::Ssao {
                kernel_radius: ssao.kernel_radius,
                min_distance: ssao.min_distance,
                max_distance: ssao.max_distance,
            });
        }
        chain.push(PassKind::Bloom {
            strength: self.bloom.strength,
            radius: self.bloom.radius,
            threshold: self.bloom.threshold,
        });
        chain.push(PassKind::AntiAlias);

        for kind in chain {
            device.run_pass(&PassRun {
                kind,
                input: read,
                output: Some(write),
            })?;
            std::mem::swap(&mut read, &mut write);
        }

        device.run_pass(&PassRun {
            kind: PassKind::Output {
                exposure: OUTPUT_EXPOSURE,
            },
            input: read,
            output: None,
        })?;
        device.present()
    }

    // ===== LIFECYCLE =====

    /// Resize every offscreen target to the new surface size.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        let mut device = lock_device(&self.device)?;
        device.resize_target(self.scene_target, width, height)?;
        device.resize_target(self.ping_target, width, height)?;
        Ok(())
    }

    /// Destroy the offscreen targets. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Ok(mut device) = self.device.lock() {
            device.destroy_target(self.scene_target);
            device.destroy_target(self.ping_target);
        }
        engine_debug!(LOG_SRC, "Pipeline disposed");
    }
}

fn lock_device<'a>(
    device: &'a Arc<Mutex<dyn RenderDevice>>,
) -> Result<MutexGuard<'a, dyn RenderDevice + 'static>> {
    device
        .lock()
        .map_err(|_| Error::Device("render device lock poisoned".to_string()))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
