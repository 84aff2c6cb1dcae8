//! Scene — the node graph container.
//!
//! Uses a SlotMap for O(1) insert/remove with stable keys. Keys remain
//! valid even after other nodes are removed.

use glam::{Mat4, Vec3};
use slotmap::SlotMap;

use crate::metadata::color_vec3;
use super::device::DrawCall;
use super::node::{NodeKey, NodeKind, SceneNode};

/// Default cinematic background (deep navy)
const DEFAULT_BACKGROUND: u32 = 0x1a1a2e;

/// A scene graph with a single root group node.
pub struct Scene {
    nodes: SlotMap<NodeKey, SceneNode>,
    root: NodeKey,
    /// Clear color for the base render
    pub background: Vec3,
}

impl Scene {
    /// Create an empty scene (root group only).
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode::new("root", NodeKind::Group));
        Self {
            nodes,
            root,
            background: color_vec3(DEFAULT_BACKGROUND),
        }
    }

    /// Root group key.
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Total node count (including the root).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Attach a node under a parent. Falls back to the root if the parent
    /// key is stale. Returns a stable key for the new node.
    pub fn add_node(&mut self, parent: NodeKey, mut node: SceneNode) -> NodeKey {
        let parent = if self.nodes.contains_key(parent) {
            parent
        } else {
            self.root
        };
        node.parent = Some(parent);
        node.children.clear();
        let key = self.nodes.insert(node);
        self.nodes[parent].children.push(key);
        key
    }

    /// Get a node by key.
    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Get a mutable node by key.
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    /// Find the first node with the given name (depth-first from the root).
    pub fn find_by_name(&self, name: &str) -> Option<NodeKey> {
        self.subtree_keys(self.root)
            .into_iter()
            .find(|&key| self.nodes[key].name == name)
    }

    /// Keys of a subtree in depth-first order, starting at `from`.
    pub fn subtree_keys(&self, from: NodeKey) -> Vec<NodeKey> {
        let mut keys = Vec::new();
        let mut stack = vec![from];
        while let Some(key) = stack.pop() {
            if let Some(node) = self.nodes.get(key) {
                keys.push(key);
                // Reverse so children come off the stack in insertion order
                stack.extend(node.children.iter().rev().copied());
            }
        }
        keys
    }

    /// Visit every node of a subtree (read-only, depth-first).
    pub fn visit<F: FnMut(NodeKey, &SceneNode)>(&self, from: NodeKey, mut f: F) {
        for key in self.subtree_keys(from) {
            f(key, &self.nodes[key]);
        }
    }

    /// Remove a subtree. Returns the number of nodes removed.
    /// Removing the root is a no-op.
    pub fn remove_subtree(&mut self, from: NodeKey) -> usize {
        if from == self.root {
            return 0;
        }
        let keys = self.subtree_keys(from);
        if keys.is_empty() {
            return 0;
        }
        if let Some(parent) = self.nodes[from].parent {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.retain(|&c| c != from);
            }
        }
        for key in &keys {
            self.nodes.remove(*key);
        }
        keys.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten the visible scene into draw calls with accumulated world
/// matrices. Invisible nodes prune their whole subtree. Meshes that have
/// not been uploaded to the device yet are skipped.
pub fn collect_draws(scene: &Scene) -> Vec<DrawCall> {
    let mut draws = Vec::new();
    collect_into(scene, scene.root(), Mat4::IDENTITY, &mut draws);
    draws
}

fn collect_into(scene: &Scene, key: NodeKey, parent_world: Mat4, draws: &mut Vec<DrawCall>) {
    let Some(node) = scene.node(key) else {
        return;
    };
    if !node.visible {
        return;
    }
    let world = parent_world * node.transform.matrix();

    if let NodeKind::Mesh(mesh) = &node.kind {
        if let (Some(geometry), Some(material)) = (mesh.geometry.gpu(), mesh.material.gpu()) {
            draws.push(DrawCall {
                geometry,
                material,
                world,
                opacity: mesh.material.opacity,
            });
        }
    }

    for &child in node.children() {
        collect_into(scene, child, world, draws);
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
