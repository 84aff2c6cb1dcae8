//! Mesh geometry — vertex positions, normals and triangle indices.

use glam::Vec3;

use super::device::{GeometryHandle, Vertex};

/// Indexed triangle geometry.
///
/// Normals are recomputed after load regardless of what the source file
/// carried, so subdivision-surface exports shade smoothly no matter where
/// they came from.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    /// GPU buffer handle once uploaded
    pub(crate) gpu: Option<GeometryHandle>,
}

impl Geometry {
    /// Create geometry from positions and triangle indices (normals empty
    /// until `compute_vertex_normals` runs).
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            normals: Vec::new(),
            indices,
            gpu: None,
        }
    }

    /// Create geometry with explicit normals.
    pub fn with_normals(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            normals,
            indices,
            gpu: None,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles (indexed, or every three vertices when unindexed).
    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.positions.len() / 3
        } else {
            self.indices.len() / 3
        }
    }

    /// Whether per-vertex normals are present.
    pub fn has_normals(&self) -> bool {
        self.normals.len() == self.positions.len()
    }

    /// GPU buffer handle, when uploaded.
    pub fn gpu(&self) -> Option<GeometryHandle> {
        self.gpu
    }

    /// Recompute smooth per-vertex normals from triangle faces.
    ///
    /// Face normals are accumulated unnormalized (area-weighted) onto each
    /// referenced vertex, then normalized. Degenerate vertices fall back
    /// to +Y.
    pub fn compute_vertex_normals(&mut self) {
        let mut accum = vec![Vec3::ZERO; self.positions.len()];

        let mut face = |a: usize, b: usize, c: usize| {
            if a >= accum.len() || b >= accum.len() || c >= accum.len() {
                return;
            }
            let normal = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            accum[a] += normal;
            accum[b] += normal;
            accum[c] += normal;
        };

        if self.indices.is_empty() {
            for tri in (0..self.positions.len() / 3).map(|t| t * 3) {
                face(tri, tri + 1, tri + 2);
            }
        } else {
            for tri in self.indices.chunks_exact(3) {
                face(tri[0] as usize, tri[1] as usize, tri[2] as usize);
            }
        }

        self.normals = accum
            .into_iter()
            .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
            .collect();
    }

    /// Pack positions and normals into the interleaved GPU vertex layout.
    pub fn pack_vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex {
                position: position.to_array(),
                normal: self
                    .normals
                    .get(i)
                    .copied()
                    .unwrap_or(Vec3::Y)
                    .to_array(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
