// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Triangle-soup mesh representation

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Vertex with position and normal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f64>,
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }
}

/// Triangle-soup mesh: a flat vertex buffer in consecutive-triangle order.
///
/// Every three vertices form one triangle; there is no shared-vertex
/// indexing. A well-formed mesh has a vertex count that is a multiple of 3.
/// Positions are mutated in place by re-centering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Add a single vertex
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// Add a triangle as three consecutive vertices
    pub fn add_triangle(&mut self, corners: [Vertex; 3]) {
        self.vertices.extend_from_slice(&corners);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count (trailing partial triangles are not counted)
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over triangles as slices of three vertices
    pub fn triangles(&self) -> std::slice::ChunksExact<'_, Vertex> {
        self.vertices.chunks_exact(3)
    }

    /// Shift every vertex position by an offset, in place
    pub fn translate(&mut self, offset: &Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Scale every vertex position about the origin, in place
    pub fn scale(&mut self, factor: f64) {
        for vertex in &mut self.vertices {
            vertex.position.coords *= factor;
        }
    }

    /// Reverse the winding order of every triangle and flip vertex normals
    pub fn reverse_winding(&mut self) {
        for triangle in self.vertices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
        for vertex in &mut self.vertices {
            vertex.normal = -vertex.normal;
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math;

    fn quad() -> Mesh {
        let normal = Vector3::z();
        let mut mesh = Mesh::new();
        mesh.add_triangle([
            Vertex::new(Point3::new(0.0, 0.0, 0.0), normal),
            Vertex::new(Point3::new(1.0, 0.0, 0.0), normal),
            Vertex::new(Point3::new(1.0, 1.0, 0.0), normal),
        ]);
        mesh.add_triangle([
            Vertex::new(Point3::new(0.0, 0.0, 0.0), normal),
            Vertex::new(Point3::new(1.0, 1.0, 0.0), normal),
            Vertex::new(Point3::new(0.0, 1.0, 0.0), normal),
        ]);
        mesh
    }

    #[test]
    fn test_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_triangle_iteration() {
        let mesh = quad();
        assert_eq!(mesh.triangles().count(), 2);
        for triangle in mesh.triangles() {
            assert_eq!(triangle.len(), 3);
        }
    }

    #[test]
    fn test_translate() {
        let mut mesh = quad();
        mesh.translate(&Vector3::new(10.0, 0.0, 0.0));
        assert!(math::approx_eq(mesh.vertices[0].position.x, 10.0, 1e-12));
        assert!(math::approx_eq(mesh.vertices[1].position.x, 11.0, 1e-12));
    }

    #[test]
    fn test_reverse_winding_flips_normals() {
        let mut mesh = quad();
        let first = mesh.vertices[1].position;
        mesh.reverse_winding();

        assert!(math::approx_eq(mesh.vertices[0].normal.z, -1.0, 1e-12));
        // Second and third corners swap
        assert!(math::approx_eq(
            (mesh.vertices[2].position - first).norm(),
            0.0,
            1e-12
        ));
    }
}
