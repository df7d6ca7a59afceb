// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Procedural reference solids
//!
//! Known-good closed meshes used by the test suite and benches, and handy
//! as smoke-test inputs for callers.

use super::{Mesh, Vertex};
use crate::utils::math;
use nalgebra::{Point3, Vector3};

/// Generate an axis-aligned cuboid as a 12-triangle soup, outward wound.
pub fn cube(size: Vector3<f64>, center: bool) -> Mesh {
    let (min_x, max_x) = if center {
        (-size.x / 2.0, size.x / 2.0)
    } else {
        (0.0, size.x)
    };
    let (min_y, max_y) = if center {
        (-size.y / 2.0, size.y / 2.0)
    } else {
        (0.0, size.y)
    };
    let (min_z, max_z) = if center {
        (-size.z / 2.0, size.z / 2.0)
    } else {
        (0.0, size.z)
    };

    // 8 corners
    let positions = [
        Point3::new(min_x, min_y, min_z),
        Point3::new(max_x, min_y, min_z),
        Point3::new(max_x, max_y, min_z),
        Point3::new(min_x, max_y, min_z),
        Point3::new(min_x, min_y, max_z),
        Point3::new(max_x, min_y, max_z),
        Point3::new(max_x, max_y, max_z),
        Point3::new(min_x, max_y, max_z),
    ];

    // 6 faces, two triangles each, normals pointing outward
    let faces = [
        // Front (z+)
        ([4, 5, 6], Vector3::new(0.0, 0.0, 1.0)),
        ([4, 6, 7], Vector3::new(0.0, 0.0, 1.0)),
        // Back (z-)
        ([1, 0, 3], Vector3::new(0.0, 0.0, -1.0)),
        ([1, 3, 2], Vector3::new(0.0, 0.0, -1.0)),
        // Right (x+)
        ([5, 1, 2], Vector3::new(1.0, 0.0, 0.0)),
        ([5, 2, 6], Vector3::new(1.0, 0.0, 0.0)),
        // Left (x-)
        ([0, 4, 7], Vector3::new(-1.0, 0.0, 0.0)),
        ([0, 7, 3], Vector3::new(-1.0, 0.0, 0.0)),
        // Top (y+)
        ([7, 6, 2], Vector3::new(0.0, 1.0, 0.0)),
        ([7, 2, 3], Vector3::new(0.0, 1.0, 0.0)),
        // Bottom (y-)
        ([0, 1, 5], Vector3::new(0.0, -1.0, 0.0)),
        ([0, 5, 4], Vector3::new(0.0, -1.0, 0.0)),
    ];

    let mut mesh = Mesh::with_capacity(faces.len());
    for (indices, normal) in faces {
        mesh.add_triangle([
            Vertex::new(positions[indices[0]], normal),
            Vertex::new(positions[indices[1]], normal),
            Vertex::new(positions[indices[2]], normal),
        ]);
    }

    mesh
}

/// Generate a corner tetrahedron with legs of length `scale` along each
/// axis, outward wound. Encloses scale³ / 6.
pub fn tetrahedron(scale: f64) -> Mesh {
    let apex = Point3::new(0.0, 0.0, 0.0);
    let px = Point3::new(scale, 0.0, 0.0);
    let py = Point3::new(0.0, scale, 0.0);
    let pz = Point3::new(0.0, 0.0, scale);

    let faces = [
        [apex, py, px], // z = 0
        [apex, pz, py], // x = 0
        [apex, px, pz], // y = 0
        [px, py, pz],   // slanted
    ];

    let mut mesh = Mesh::with_capacity(faces.len());
    for [p0, p1, p2] in faces {
        let normal = math::triangle_normal(&p0, &p1, &p2);
        mesh.add_triangle([
            Vertex::new(p0, normal),
            Vertex::new(p1, normal),
            Vertex::new(p2, normal),
        ]);
    }

    mesh
}
