// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Binary STL export
//!
//! Writes a mesh back out (typically after re-centering) so downstream
//! viewers receive the normalized geometry.

use crate::geometry::Mesh;
use crate::utils::math;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// Export a mesh as binary STL.
///
/// Facet normals are recomputed from triangle geometry rather than taken
/// from the vertex buffer, so exports stay consistent after winding flips.
pub fn export_stl(mesh: &Mesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let mut triangles = Vec::with_capacity(mesh.triangle_count());
    for triangle in mesh.triangles() {
        let p0 = &triangle[0].position;
        let p1 = &triangle[1].position;
        let p2 = &triangle[2].position;
        let normal = math::triangle_normal(p0, p1, p2);

        triangles.push(stl_io::Triangle {
            normal: stl_io::Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
            vertices: [
                stl_io::Vertex::new([p0.x as f32, p0.y as f32, p0.z as f32]),
                stl_io::Vertex::new([p1.x as f32, p1.y as f32, p1.z as f32]),
                stl_io::Vertex::new([p2.x as f32, p2.y as f32, p2.z as f32]),
            ],
        });
    }

    let mut file =
        File::create(path).context(format!("Failed to create STL file: {}", path.display()))?;
    stl_io::write_stl(&mut file, triangles.into_iter())
        .context(format!("Failed to write STL file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cube;
    use nalgebra::Vector3;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_writes_binary_stl() -> Result<()> {
        let mesh = cube(Vector3::new(10.0, 10.0, 10.0), true);

        let file = NamedTempFile::with_suffix(".stl")?;
        export_stl(&mesh, file.path())?;

        // 80-byte header + 4-byte count + 12 facets × 50 bytes
        let metadata = std::fs::metadata(file.path())?;
        assert_eq!(metadata.len(), 84 + 12 * 50);

        Ok(())
    }
}
