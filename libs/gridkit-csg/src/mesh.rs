//! # Triangle Mesh
//!
//! Indexed triangle mesh handed from a [`Solid`](crate::Solid) to renderers
//! and exporters.

use crate::error::{CsgError, CsgResult};
use glam::DVec3;
use gridkit_config::constants::VERTEX_WELD_EPSILON;
use std::collections::HashMap;

/// An indexed triangle mesh.
///
/// Geometry stays in f64; the `*_f32` exports narrow it for GPU buffers.
///
/// # Example
///
/// ```rust
/// use gridkit_csg::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.weld_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.weld_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.weld_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    /// Quantized position -> vertex index, for welding.
    lookup: HashMap<[i64; 3], u32>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Triangle vertex indices, counter-clockwise seen from outside.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the index of a vertex within [`VERTEX_WELD_EPSILON`] of
    /// `position`, adding one if none exists.
    pub fn weld_vertex(&mut self, position: DVec3) -> u32 {
        let key = weld_key(position);
        if let Some(&index) = self.lookup.get(&key) {
            return index;
        }
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.lookup.insert(key, index);
        index
    }

    /// Adds a triangle, skipping it when two corners welded together.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        if v0 != v1 && v1 != v2 && v0 != v2 {
            self.triangles.push([v0, v1, v2]);
        }
    }

    /// Appends another mesh, welding shared vertices.
    pub fn merge(&mut self, other: &Mesh) {
        for [a, b, c] in &other.triangles {
            let a = self.weld_vertex(other.vertices[*a as usize]);
            let b = self.weld_vertex(other.vertices[*b as usize]);
            let c = self.weld_vertex(other.vertices[*c as usize]);
            self.add_triangle(a, b, c);
        }
    }

    /// Axis-aligned bounding box as (min, max); zero for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        self.vertices[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Enclosed volume via the divergence theorem.
    pub fn volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// True when every directed edge is matched by its reverse, i.e. the
    /// surface is closed and consistently oriented.
    pub fn is_closed(&self) -> bool {
        let mut balance: HashMap<(u32, u32), i32> = HashMap::new();
        for [a, b, c] in &self.triangles {
            for (from, to) in [(*a, *b), (*b, *c), (*c, *a)] {
                if from < to {
                    *balance.entry((from, to)).or_default() += 1;
                } else {
                    *balance.entry((to, from)).or_default() -= 1;
                }
            }
        }
        balance.values().all(|count| *count == 0)
    }

    /// Checks index bounds and rejects zero-area triangles.
    pub fn validate(&self) -> CsgResult<()> {
        let vertex_count = self.vertices.len();
        for (i, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&index| index as usize >= vertex_count) {
                return Err(CsgError::degenerate(format!(
                    "triangle {i} references a missing vertex"
                )));
            }
            let [a, b, c] = tri.map(|index| self.vertices[index as usize]);
            if (b - a).cross(c - a).length() < VERTEX_WELD_EPSILON * VERTEX_WELD_EPSILON {
                return Err(CsgError::degenerate(format!("triangle {i} has zero area")));
            }
        }
        Ok(())
    }

    /// Flattened `[x, y, z, ...]` positions for GPU buffers.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Flattened `[i0, i1, i2, ...]` indices for GPU buffers.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn weld_key(position: DVec3) -> [i64; 3] {
    let scaled = (position / VERTEX_WELD_EPSILON).round();
    [scaled.x as i64, scaled.y as i64, scaled.z as i64]
}
