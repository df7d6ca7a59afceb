// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Batch analysis over many STL files
//!
//! Each file owns its own mesh and accumulators; results stay keyed by
//! input path so a report can never be attributed to the wrong file.

use crate::geometry::AnalysisReport;
use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Outcome of analyzing one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    pub file: String,
    /// Present on success
    pub report: Option<AnalysisReport>,
    /// Present on failure
    pub error: Option<String>,
    pub seconds: f64,
}

impl FileResult {
    pub fn passed(&self) -> bool {
        self.report.is_some()
    }
}

/// Complete batch report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub timestamp: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<FileResult>,
}

impl BatchReport {
    pub fn from_results(results: Vec<FileResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed()).count();
        Self {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            total: results.len(),
            passed,
            failed: results.len() - passed,
            results,
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).context(format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }
}

/// Expand file and directory arguments into a sorted list of STL files.
/// Directories are searched recursively.
pub fn discover_stl_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            for entry in WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"))
                {
                    files.push(path.to_path_buf());
                }
            }
        }
    }

    // Sort for consistent ordering
    files.sort();
    files
}

/// Analyze every file, fanning out across a thread pool.
///
/// Per-file failures are recorded, not fatal; the caller decides whether a
/// retry with different input is warranted.
pub fn run_batch(
    files: &[PathBuf],
    recentered_dir: Option<&Path>,
    progress: Option<&ProgressBar>,
) -> Vec<FileResult> {
    files
        .par_iter()
        .map(|path| {
            let start = Instant::now();
            let outcome = analyze_one(path, recentered_dir);
            if let Some(pb) = progress {
                pb.inc(1);
            }

            match outcome {
                Ok(report) => FileResult {
                    file: path.display().to_string(),
                    report: Some(report),
                    error: None,
                    seconds: start.elapsed().as_secs_f64(),
                },
                Err(e) => FileResult {
                    file: path.display().to_string(),
                    report: None,
                    error: Some(e.to_string()),
                    seconds: start.elapsed().as_secs_f64(),
                },
            }
        })
        .collect()
}

fn analyze_one(path: &Path, recentered_dir: Option<&Path>) -> Result<AnalysisReport> {
    let (mesh, report) = crate::analyze_stl_file(path)
        .context(format!("Failed to analyze {}", path.display()))?;

    if let Some(dir) = recentered_dir {
        let name = path
            .file_name()
            .context("Input path has no file name")?;
        crate::io::export_stl(&mesh, dir.join(name))?;
    }

    Ok(report)
}
