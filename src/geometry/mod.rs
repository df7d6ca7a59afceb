// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Geometry module - mesh representation and analysis

mod analysis;
mod bbox;
mod mesh;
mod primitives;

pub use analysis::{
    analyze, center_mesh, compute_bounding_box, volume_and_area, AnalysisReport,
};
pub use bbox::BoundingBox;
pub use mesh::{Mesh, Vertex};
pub use primitives::{cube, tetrahedron};
