// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! CLI output reporter with colored formatting

use crate::geometry::AnalysisReport;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a single file's analysis with colors
    pub fn report_analysis(file: &str, report: &AnalysisReport, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());

        println!(
            "  {} {}",
            "Dimensions:".bright_black(),
            format!(
                "{:.2} × {:.2} × {:.2} mm",
                report.dimensions[0], report.dimensions[1], report.dimensions[2]
            )
            .cyan()
        );
        println!(
            "  {} {}",
            "Triangles:".bright_black(),
            report.triangle_count.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Volume:".bright_black(),
            format!("{:.3} cm³", report.volume).cyan()
        );
        println!(
            "  {} {}",
            "Surface area:".bright_black(),
            format!("{:.2} mm²", report.surface_area).cyan()
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    fn format_duration(duration: Duration) -> String {
        if duration.as_secs() > 0 {
            format!("{:.2}s", duration.as_secs_f64())
        } else {
            format!("{:.1}ms", duration.as_secs_f64() * 1000.0)
        }
    }
}
