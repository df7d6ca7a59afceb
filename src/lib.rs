// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Meshmetrics
//!
//! Mesh analysis for 3D-print preparation. Loads STL models (binary or
//! ASCII), computes bounding box, dimensions, triangle count, enclosed
//! volume and surface area, and re-centers the mesh for display.

pub mod cli;
pub mod error;
pub mod geometry;
pub mod io;
pub mod utils;

pub use error::AnalysisError;
pub use geometry::{analyze, AnalysisReport, BoundingBox, Mesh, Vertex};
pub use io::{export_stl, load_stl_file, read_stl_bytes};

use std::path::Path;

/// Analyze an STL byte buffer.
///
/// Returns the re-centered mesh alongside its report; the mesh is handed
/// back for downstream display and is owned by the caller.
pub fn analyze_stl_bytes(bytes: &[u8]) -> Result<(Mesh, AnalysisReport), AnalysisError> {
    let mut mesh = io::read_stl_bytes(bytes)?;
    let report = geometry::analyze(&mut mesh)?;
    Ok((mesh, report))
}

/// Analyze an STL file on disk.
pub fn analyze_stl_file(path: impl AsRef<Path>) -> Result<(Mesh, AnalysisReport), AnalysisError> {
    let mut mesh = io::load_stl_file(path)?;
    let report = geometry::analyze(&mut mesh)?;
    Ok((mesh, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_analyze_generated_cube() {
        let mut mesh = geometry::cube(Vector3::new(10.0, 10.0, 10.0), true);
        let report = analyze(&mut mesh).unwrap();
        assert_eq!(report.triangle_count, 12);
    }
}
