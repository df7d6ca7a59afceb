// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! STL loading
//!
//! Parsing itself is delegated to the `stl_io` crate (binary and ASCII
//! variants); this module flattens its indexed output into the
//! consecutive-triangle vertex order the analyzer works on.

use crate::error::AnalysisError;
use crate::geometry::{Mesh, Vertex};
use log::debug;
use nalgebra::{Point3, Vector3};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Read an STL mesh from a reader.
///
/// Parse failures are propagated unchanged; no repair is attempted.
pub fn read_stl<R: Read + Seek>(reader: &mut R) -> Result<Mesh, AnalysisError> {
    let stl = stl_io::read_stl(reader)?;

    let mut mesh = Mesh::with_capacity(stl.faces.len());
    for face in &stl.faces {
        let normal = Vector3::new(
            face.normal[0] as f64,
            face.normal[1] as f64,
            face.normal[2] as f64,
        );

        let corner = |i: usize| {
            let position = &stl.vertices[face.vertices[i]];
            Vertex::new(
                Point3::new(
                    position[0] as f64,
                    position[1] as f64,
                    position[2] as f64,
                ),
                normal,
            )
        };

        mesh.add_triangle([corner(0), corner(1), corner(2)]);
    }

    debug!("loaded STL: {} triangles", mesh.triangle_count());
    Ok(mesh)
}

/// Read an STL mesh from an in-memory byte buffer.
pub fn read_stl_bytes(bytes: &[u8]) -> Result<Mesh, AnalysisError> {
    read_stl(&mut Cursor::new(bytes))
}

/// Load an STL mesh from a file on disk.
pub fn load_stl_file(path: impl AsRef<Path>) -> Result<Mesh, AnalysisError> {
    let mut file = File::open(path.as_ref())?;
    read_stl(&mut file)
}
