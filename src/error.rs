// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Error types for mesh loading and analysis

use thiserror::Error;

/// Errors surfaced by the mesh analyzer.
///
/// Invalid-mesh failures are definitive: the input cannot be analyzed and
/// retrying with the same bytes will not help. Geometric imperfection
/// (degenerate triangles, open or inconsistently wound meshes) is never an
/// error; those contribute near-zero terms to the accumulators instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The mesh has no vertices at all. Distinct from zero-size geometry.
    #[error("invalid mesh: no vertices")]
    EmptyMesh,

    /// The vertex count is not a whole number of triangles.
    #[error("invalid mesh: {0} vertices is not a multiple of 3")]
    UnevenVertexCount(usize),

    /// The STL parser rejected the input. Propagated unchanged.
    #[error("failed to read STL data: {0}")]
    Parse(#[from] std::io::Error),
}

impl AnalysisError {
    /// True for the invalid-mesh conditions (as opposed to parse failures).
    pub fn is_invalid_mesh(&self) -> bool {
        matches!(self, Self::EmptyMesh | Self::UnevenVertexCount(_))
    }
}
