//! Scene nodes — tagged-variant scene graph elements.
//!
//! Every node carries an explicit kind tag (Group, Mesh, Light, Camera);
//! traversal dispatches on the tag rather than probing for capability
//! fields. Nodes are stored in a slot map with stable keys (see `Scene`).

use glam::{EulerRot, Mat4, Quat, Vec3};
use slotmap::new_key_type;

use super::geometry::Geometry;
use super::light::Light;
use super::material::Material;

new_key_type! {
    /// Stable key for a scene node
    pub struct NodeKey;
}

/// Local transform: position, Euler rotation (radians, XYZ order), scale.
///
/// Stored exactly as assigned — descriptor transforms survive a round
/// trip through the scene graph unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Local transform matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            self.position,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Renderable mesh: geometry plus material.
///
/// Shadow flags exist for completeness but stay off — lighting is
/// pre-baked, not dynamically shadowed.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    /// Create a non-shadowing mesh.
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

/// Explicit node kind tag.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Pure grouping node (asset roots, rig containers)
    Group,
    /// Renderable mesh
    Mesh(Mesh),
    /// Light in the rig
    Light(Light),
    /// Camera attachment point
    Camera,
}

impl NodeKind {
    /// Human-readable tag name for diagnostics.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Group => "Group",
            NodeKind::Mesh(_) => "Mesh",
            NodeKind::Light(_) => "Light",
            NodeKind::Camera => "Camera",
        }
    }
}

/// One node of the scene graph.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub visible: bool,
    pub kind: NodeKind,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
}

impl SceneNode {
    /// Create a detached node (attach it via `Scene::add_node`).
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            visible: true,
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Parent key, if attached.
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Child keys in insertion order.
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Mesh payload, when this node is a mesh.
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// Mutable mesh payload, when this node is a mesh.
    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// Light payload, when this node is a light.
    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
