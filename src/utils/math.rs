// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Triangle math used by the analyzer

use nalgebra::{Point3, Vector3};

/// Signed volume of the tetrahedron spanned by the origin and a triangle.
///
/// Summed over every triangle of a closed, consistently wound mesh this
/// equals the enclosed volume (divergence theorem). For open or mixed-winding
/// meshes the sum is a best-effort estimate only.
pub fn signed_tetrahedron_volume(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    p0.coords.dot(&p1.coords.cross(&p2.coords)) / 6.0
}

/// Area of a triangle via the cross-product magnitude.
///
/// Non-negative regardless of winding; degenerate triangles contribute zero.
pub fn triangle_area(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;
    edge1.cross(&edge2).norm() / 2.0
}

/// Unit normal of a triangle. Falls back to +Z for degenerate triangles.
pub fn triangle_normal(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> Vector3<f64> {
    let normal = (p1 - p0).cross(&(p2 - p0));
    let length = normal.norm();
    if length > 1e-12 {
        normal / length
    } else {
        Vector3::z()
    }
}

/// Check if two floats are approximately equal
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
