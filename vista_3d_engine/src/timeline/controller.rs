//! Scroll timeline controller — the bridge between page scroll position
//! and the 3D scene.
//!
//! Each configured section gets a binding against its document extent.
//! A section is "active" while the viewport's vertical center lies inside
//! its extent, and its progress runs 0 to 1 across that span. The
//! controller drives the camera along the active section's waypoint pair
//! and fires per-asset transitions on boundary crossings.
//!
//! Continuous animations (idle bob, loop spin, enter fades) live in an
//! explicit registry here; `destroy` clears exactly what was registered
//! and nothing else.

use std::f32::consts::{PI, TAU};

use crate::{engine_debug, engine_warn};
use crate::metadata::{AnimationKind, AssetDescriptor, CameraPose, SceneConfig};
use crate::scene::SceneResourceManager;
use super::easing::Easing;
use super::tween::{Repeat, Tween};

const LOG_SRC: &str = "vista3d::ScrollTimelineController";

/// Enter fade-in duration in seconds
const ENTER_FADE_SECONDS: f32 = 0.5;
/// Discrete scale step applied on scroll-triggered crossings
const SCROLL_SCALE_STEP: f32 = 1.1;

/// Document extent of one scroll section, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f32,
    pub height: f32,
}

/// Host scroll/document seam.
///
/// The hosting page owns scrolling and layout; the controller only reads
/// them through this trait.
pub trait ScrollAdapter {
    /// Current scroll offset from the top of the document, in pixels.
    fn scroll_top(&self) -> f32;

    /// Visible viewport height, in pixels.
    fn viewport_height(&self) -> f32;

    /// Layout extent of a section element, when it exists in the page.
    fn section_extent(&self, id: &str) -> Option<SectionExtent>;
}

/// One section's scroll state.
#[derive(Debug, Clone)]
pub struct SectionBinding {
    pub section_id: String,
    pub asset_id: String,
    /// Normalized scroll progress through the section span, clamped [0,1]
    pub progress: f32,
    camera_from: CameraPose,
    camera_to: CameraPose,
    extent: SectionExtent,
    inside: bool,
    fade_in: bool,
    scroll_scaled: bool,
    /// Whether the discrete enter scale step is currently applied
    scale_applied: bool,
}

// Which scalar of an asset a registered tween writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    PositionY,
    RotationY,
    Opacity,
}

#[derive(Debug)]
struct RegisteredAnimation {
    asset_id: String,
    channel: Channel,
    tween: Tween,
}

/// Maps continuous scroll to camera pose and section transitions.
pub struct ScrollTimelineController {
    adapter: Box<dyn ScrollAdapter>,
    bindings: Vec<SectionBinding>,
    animations: Vec<RegisteredAnimation>,
    last_center: f32,
    destroyed: bool,
}

impl ScrollTimelineController {
    pub fn new(adapter: Box<dyn ScrollAdapter>) -> Self {
        let last_center = adapter.scroll_top() + adapter.viewport_height() / 2.0;
        Self {
            adapter,
            bindings: Vec::new(),
            animations: Vec::new(),
            last_center,
            destroyed: false,
        }
    }

    // ===== ACCESSORS =====

    pub fn bindings(&self) -> &[SectionBinding] {
        &self.bindings
    }

    /// Progress of one section, when bound.
    pub fn section_progress(&self, section_id: &str) -> Option<f32> {
        self.bindings
            .iter()
            .find(|b| b.section_id == section_id)
            .map(|b| b.progress)
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // ===== SETUP =====

    /// Bind every configured section against its document extent and
    /// register the continuous animations the descriptors declare.
    ///
    /// Sections missing from the page layout are skipped with a warning;
    /// the experience keeps working with the sections that exist.
    pub fn bind_sections(&mut self, config: &SceneConfig, descriptors: &[AssetDescriptor]) {
        if self.destroyed {
            return;
        }
        self.bindings.clear();

        for section in &config.sections {
            let Some(extent) = self.adapter.section_extent(&section.id) else {
                engine_warn!(LOG_SRC, "Section '{}' has no page extent, skipped", section.id);
                continue;
            };

            let descriptor = descriptors.iter().find(|d| d.id == section.asset_id);
            let fade_in = descriptor
                .and_then(|d| d.visibility.as_ref())
                .map(|v| v.fade_in)
                .unwrap_or(true);
            let scroll_scaled = descriptor
                .and_then(|d| d.animation.as_ref())
                .map(|a| a.kind == AnimationKind::ScrollTriggered)
                .unwrap_or(false);

            self.bindings.push(SectionBinding {
                section_id: section.id.clone(),
                asset_id: section.asset_id.clone(),
                progress: 0.0,
                camera_from: section.camera_from,
                camera_to: section.camera_to,
                extent,
                inside: false,
                fade_in,
                scroll_scaled,
                scale_applied: false,
            });
        }

        for descriptor in descriptors {
            self.register_ambient(descriptor);
        }

        engine_debug!(
            LOG_SRC,
            "Bound {} sections, {} continuous animations",
            self.bindings.len(),
            self.animations.len()
        );
    }

    /// Register the continuous tweens an asset's animation directive asks
    /// for. Scroll-triggered directives have no continuous component;
    /// they act on boundary crossings in `update`.
    fn register_ambient(&mut self, descriptor: &AssetDescriptor) {
        let Some(directive) = &descriptor.animation else {
            return;
        };
        match directive.kind {
            AnimationKind::Idle => {
                let amplitude = directive.param_f32("amplitude", 0.1);
                let period = directive.param_f32("period", 4.0);
                let base_y = descriptor.position.y;
                let base_rot = descriptor.rotation.y;
                self.animations.push(RegisteredAnimation {
                    asset_id: descriptor.id.clone(),
                    channel: Channel::PositionY,
                    tween: Tween::new(
                        base_y,
                        base_y + amplitude,
                        period / 2.0,
                        Easing::SineInOut,
                        Repeat::Yoyo,
                    ),
                });
                // Rotation sways at half the bob frequency
                self.animations.push(RegisteredAnimation {
                    asset_id: descriptor.id.clone(),
                    channel: Channel::RotationY,
                    tween: Tween::new(
                        base_rot,
                        base_rot + PI * 0.1,
                        period,
                        Easing::SineInOut,
                        Repeat::Yoyo,
                    ),
                });
            }
            AnimationKind::Loop => {
                let duration = directive.param_f32("duration", 2.0);
                let base_rot = descriptor.rotation.y;
                self.animations.push(RegisteredAnimation {
                    asset_id: descriptor.id.clone(),
                    channel: Channel::RotationY,
                    tween: Tween::new(
                        base_rot,
                        base_rot + TAU,
                        duration,
                        Easing::Linear,
                        Repeat::Loop,
                    ),
                });
            }
            AnimationKind::ScrollTriggered => {}
        }
    }

    // ===== SCROLL =====

    /// Recompute section progress from the current scroll position, fire
    /// boundary transitions and reposition the camera.
    ///
    /// Scrolling forward out of a section deliberately changes nothing:
    /// the next section's enter handles the handoff, so assets never pop
    /// out mid-scroll.
    pub fn update(&mut self, manager: &mut SceneResourceManager) {
        if self.destroyed {
            return;
        }
        let center = self.adapter.scroll_top() + self.adapter.viewport_height() / 2.0;
        let prev_center = self.last_center;
        let forward = center >= prev_center;
        self.last_center = center;

        for i in 0..self.bindings.len() {
            let extent = self.bindings[i].extent;
            let bottom = extent.top + extent.height;
            let raw = (center - extent.top) / extent.height.max(f32::EPSILON);
            let inside = (0.0..=1.0).contains(&raw);
            let was_inside = self.bindings[i].inside;
            self.bindings[i].progress = raw.clamp(0.0, 1.0);
            self.bindings[i].inside = inside;

            // A single large scroll delta can sweep past an entire section
            // without ever sampling inside it. Transitions therefore come
            // from the segment the center travelled, not just the endpoint.
            let swept_past = (prev_center < extent.top && center > bottom)
                || (prev_center > bottom && center < extent.top);

            if (inside && !was_inside) || swept_past {
                self.enter_section(manager, i, forward);
            }
            if !forward && ((was_inside && !inside) || swept_past) {
                self.leave_section_backward(manager, i);
            }
        }

        self.apply_camera(manager);
    }

    fn enter_section(&mut self, manager: &mut SceneResourceManager, index: usize, forward: bool) {
        let asset_id = self.bindings[index].asset_id.clone();
        engine_debug!(LOG_SRC, "Entering section '{}'", self.bindings[index].section_id);

        if self.bindings[index].scroll_scaled && forward && !self.bindings[index].scale_applied {
            if let Some(root) = manager.asset_root(&asset_id) {
                if let Some(node) = manager.scene_mut().node_mut(root) {
                    node.transform.scale *= SCROLL_SCALE_STEP;
                    self.bindings[index].scale_applied = true;
                }
            }
        }

        if self.bindings[index].fade_in {
            // Re-entering a section the asset is already visible in must
            // not restart the fade
            let already_visible = manager
                .asset_root(&asset_id)
                .and_then(|root| manager.scene().node(root))
                .map(|node| node.visible)
                .unwrap_or(true);
            if !already_visible {
                manager.set_asset_visibility(&asset_id, true);
                manager.set_asset_opacity(&asset_id, 0.0);
                self.animations.push(RegisteredAnimation {
                    asset_id,
                    channel: Channel::Opacity,
                    tween: Tween::new(
                        0.0,
                        1.0,
                        ENTER_FADE_SECONDS,
                        Easing::Power2Out,
                        Repeat::Once,
                    ),
                });
            }
        }
    }

    fn leave_section_backward(&mut self, manager: &mut SceneResourceManager, index: usize) {
        // Undo the discrete enter step so a scrub back and forth is
        // stable. The revert only fires while a step is outstanding.
        if !self.bindings[index].scroll_scaled || !self.bindings[index].scale_applied {
            return;
        }
        if let Some(root) = manager.asset_root(&self.bindings[index].asset_id) {
            if let Some(node) = manager.scene_mut().node_mut(root) {
                node.transform.scale /= SCROLL_SCALE_STEP;
                self.bindings[index].scale_applied = false;
            }
        }
    }

    /// Place the camera along the active section's waypoint pair.
    ///
    /// The active section is the furthest one with any progress, so a
    /// fully-scrolled earlier section never pulls the camera back from a
    /// later one that has started.
    fn apply_camera(&self, manager: &mut SceneResourceManager) {
        let active = self
            .bindings
            .iter()
            .rev()
            .find(|b| b.progress > 0.0)
            .or_else(|| self.bindings.first());
        let Some(binding) = active else {
            return;
        };
        let t = binding.progress;
        let position = binding.camera_from.position.lerp(binding.camera_to.position, t);
        let look_at = binding.camera_from.look_at.lerp(binding.camera_to.look_at, t);
        let camera = manager.camera_mut();
        camera.set_position(position);
        camera.look_at(look_at);
    }

    // ===== FRAME =====

    /// Advance every registered animation by `dt` seconds, writing the
    /// results through the manager. Finished one-shot tweens are dropped
    /// after their end value has been applied.
    pub fn tick(&mut self, manager: &mut SceneResourceManager, dt: f32) {
        if self.destroyed {
            return;
        }
        for animation in &mut self.animations {
            let value = animation.tween.advance(dt);
            match animation.channel {
                Channel::PositionY => {
                    if let Some(root) = manager.asset_root(&animation.asset_id) {
                        if let Some(node) = manager.scene_mut().node_mut(root) {
                            node.transform.position.y = value;
                        }
                    }
                }
                Channel::RotationY => {
                    if let Some(root) = manager.asset_root(&animation.asset_id) {
                        if let Some(node) = manager.scene_mut().node_mut(root) {
                            node.transform.rotation.y = value;
                        }
                    }
                }
                Channel::Opacity => manager.set_asset_opacity(&animation.asset_id, value),
            }
        }
        self.animations.retain(|a| !a.tween.finished());
    }

    // ===== TEARDOWN =====

    /// Drop every binding and registered animation. Idempotent; the
    /// controller goes inert afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.bindings.clear();
        self.animations.clear();
        engine_debug!(LOG_SRC, "Timeline destroyed");
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
