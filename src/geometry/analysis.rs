// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Mesh analysis: bounding box, re-centering, volume and surface area

use super::{BoundingBox, Mesh};
use crate::error::AnalysisError;
use crate::utils::math;
use log::debug;
use serde::{Deserialize, Serialize};

/// Input coordinates are millimetres; volume is reported in cm³.
const MM3_PER_CM3: f64 = 1000.0;

/// Result of a single mesh analysis.
///
/// Immutable once created; the caller owns display and storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Bounding-box extent per axis (width, depth, height) in mm
    pub dimensions: [f64; 3],
    /// Number of triangles
    pub triangle_count: usize,
    /// Estimated enclosed volume in cm³.
    ///
    /// Absolute value of the signed tetrahedron sum; exact only for
    /// watertight, consistently wound meshes.
    pub volume: f64,
    /// Total surface area in mm²
    pub surface_area: f64,
}

impl AnalysisReport {
    /// Get the shortest dimension
    pub fn min_extent(&self) -> f64 {
        self.dimensions[0].min(self.dimensions[1]).min(self.dimensions[2])
    }

    /// Get the longest dimension
    pub fn max_extent(&self) -> f64 {
        self.dimensions[0].max(self.dimensions[1]).max(self.dimensions[2])
    }

    /// Pretty print the report
    pub fn print(&self) {
        println!("╔══════════════════════════════════════════════════════════╗");
        println!("║                     MESH ANALYSIS                        ║");
        println!("╠══════════════════════════════════════════════════════════╣");
        println!(
            "║ Dimensions:   {:>8.2} × {:>8.2} × {:>8.2} mm         ║",
            self.dimensions[0], self.dimensions[1], self.dimensions[2]
        );
        println!(
            "║ Triangles:    {:>10}                                 ║",
            self.triangle_count
        );
        println!(
            "║ Volume:       {:>10.3} cm³                            ║",
            self.volume
        );
        println!(
            "║ Surface Area: {:>10.2} mm²                            ║",
            self.surface_area
        );
        println!("╚══════════════════════════════════════════════════════════╝");
    }
}

/// Compute the axis-aligned bounding box of a mesh.
///
/// Fails on a mesh with no vertices: "no geometry" is distinct from
/// zero-size geometry and must not produce a degenerate box.
pub fn compute_bounding_box(mesh: &Mesh) -> Result<BoundingBox, AnalysisError> {
    if mesh.is_empty() {
        return Err(AnalysisError::EmptyMesh);
    }
    Ok(BoundingBox::from_vertices(&mesh.vertices))
}

/// Move the mesh so its bounding-box midpoint sits at the origin.
///
/// Mutates positions in place. Not idempotent: a second call with a stale
/// box shifts the mesh again. One-time normalization, not a query.
pub fn center_mesh(mesh: &mut Mesh, bbox: &BoundingBox) {
    let centroid = bbox.center();
    mesh.translate(&(-centroid.coords));
}

/// Accumulate the signed volume (mm³) and surface area (mm²) of a mesh.
///
/// Volume is the divergence-theorem tetrahedron sum: exact for closed,
/// consistently wound meshes, best-effort otherwise. Degenerate triangles
/// contribute zero to both sums and are never an error.
pub fn volume_and_area(mesh: &Mesh) -> (f64, f64) {
    let mut volume = 0.0;
    let mut area = 0.0;

    for triangle in mesh.triangles() {
        let p0 = &triangle[0].position;
        let p1 = &triangle[1].position;
        let p2 = &triangle[2].position;

        volume += math::signed_tetrahedron_volume(p0, p1, p2);
        area += math::triangle_area(p0, p1, p2);
    }

    (volume, area)
}

/// Analyze a mesh: bounding box, re-centering, volume, surface area.
///
/// Re-centers the mesh in place so downstream display receives normalized
/// geometry. Fails on a mesh with no vertices or with a vertex count that
/// is not a whole number of triangles.
pub fn analyze(mesh: &mut Mesh) -> Result<AnalysisReport, AnalysisError> {
    let bbox = compute_bounding_box(mesh)?;
    center_mesh(mesh, &bbox);

    let (signed_volume, surface_area) = volume_and_area(mesh);

    let vertex_count = mesh.vertex_count();
    if vertex_count % 3 != 0 {
        return Err(AnalysisError::UnevenVertexCount(vertex_count));
    }

    let size = bbox.size();
    debug!(
        "analyzed mesh: {} triangles, signed volume {:.3} mm³, area {:.3} mm²",
        vertex_count / 3,
        signed_volume,
        surface_area
    );

    Ok(AnalysisReport {
        dimensions: [size.x, size.y, size.z],
        triangle_count: vertex_count / 3,
        volume: signed_volume.abs() / MM3_PER_CM3,
        surface_area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives;
    use crate::utils::math::approx_eq;
    use nalgebra::{Point3, Vector3};
    use crate::geometry::Vertex;

    #[test]
    fn test_analyze_cube() {
        let mut mesh = primitives::cube(Vector3::new(10.0, 10.0, 10.0), true);
        let report = analyze(&mut mesh).unwrap();

        // 10×10×10 cube: 1000 mm³ = 1 cm³, 6 faces × 100 mm²
        assert!(approx_eq(report.volume, 1.0, 1e-9));
        assert!(approx_eq(report.surface_area, 600.0, 1e-9));
        assert_eq!(report.triangle_count, 12);
        for axis in 0..3 {
            assert!(approx_eq(report.dimensions[axis], 10.0, 1e-9));
        }
    }

    #[test]
    fn test_analyze_recenters_in_place() {
        let mut mesh = primitives::cube(Vector3::new(10.0, 10.0, 10.0), false);
        analyze(&mut mesh).unwrap();

        let bbox = compute_bounding_box(&mesh).unwrap();
        let center = bbox.center();
        assert!(approx_eq(center.x, 0.0, 1e-9));
        assert!(approx_eq(center.y, 0.0, 1e-9));
        assert!(approx_eq(center.z, 0.0, 1e-9));
    }

    #[test]
    fn test_empty_mesh_is_rejected() {
        let mut mesh = Mesh::new();
        assert!(matches!(
            analyze(&mut mesh),
            Err(AnalysisError::EmptyMesh)
        ));
        assert!(matches!(
            compute_bounding_box(&Mesh::new()),
            Err(AnalysisError::EmptyMesh)
        ));
    }

    #[test]
    fn test_ragged_soup_is_rejected() {
        let mut mesh = primitives::tetrahedron(1.0);
        mesh.add_vertex(Vertex::new(Point3::new(0.0, 0.0, 2.0), Vector3::z()));

        assert!(matches!(
            analyze(&mut mesh),
            Err(AnalysisError::UnevenVertexCount(13))
        ));
    }

    #[test]
    fn test_center_mesh_is_not_idempotent() {
        let mut mesh = primitives::cube(Vector3::new(10.0, 10.0, 10.0), false);
        let bbox = compute_bounding_box(&mesh).unwrap();

        // Two applications with the same stale box shift the mesh twice
        center_mesh(&mut mesh, &bbox);
        center_mesh(&mut mesh, &bbox);

        let shifted = compute_bounding_box(&mesh).unwrap();
        assert!(approx_eq(shifted.center().x, -5.0, 1e-9));
    }

    #[test]
    fn test_volume_sign_flips_with_winding() {
        let mesh = primitives::tetrahedron(2.0);
        let (volume, area) = volume_and_area(&mesh);

        let mut reversed = mesh.clone();
        reversed.reverse_winding();
        let (volume_rev, area_rev) = volume_and_area(&reversed);

        assert!(approx_eq(volume, -volume_rev, 1e-9));
        assert!(approx_eq(area, area_rev, 1e-9));
    }
}
