/// Perspective camera for the cinematic scroll path.
///
/// The camera stores its pose as position plus look-at target; view and
/// projection matrices are derived on demand, never cached. The scroll
/// timeline rewrites position and target every update, so orientation is
/// recomputed from the current target each time — pose and gaze stay
/// consistent even under rapid scroll-direction reversal.

use glam::{Mat4, Vec3};

/// Perspective camera with an explicit look-at target.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    position: Vec3,
    target: Vec3,
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl PerspectiveCamera {
    /// Create a camera from field of view (degrees), aspect ratio and
    /// clip planes, positioned at the origin looking down -Z.
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            fov_y_degrees,
            aspect,
            near,
            far,
        }
    }

    // ===== POSE =====

    /// Current world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current look-at target.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Move the camera.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Aim the camera at a world-space point.
    ///
    /// Orientation is not cached: the view matrix is recomputed from this
    /// target on every `view_matrix()` call.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    // ===== PROJECTION =====

    /// Vertical field of view in degrees.
    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    /// Current aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clip plane distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip plane distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Update the aspect ratio (called on viewport resize).
    /// The projection matrix reflects the new ratio on the next frame.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    // ===== DERIVED MATRICES =====

    /// View matrix, recomputed from the current position and target.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
