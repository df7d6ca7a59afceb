// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! I/O module - STL loading and export

mod export;
mod loader;

pub use export::export_stl;
pub use loader::{load_stl_file, read_stl, read_stl_bytes};
