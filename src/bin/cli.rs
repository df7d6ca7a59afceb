// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmetrics Inc.

//! Meshmetrics CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use meshmetrics::cli::{discover_stl_files, run_batch, BatchReport, Reporter};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "meshmetrics")]
#[command(about = "Meshmetrics - STL analysis for 3D printing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input STL file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write the re-centered mesh to this file
    #[arg(short, long, value_name = "FILE")]
    recentered: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze STL files or directories of STL files
    Analyze {
        /// Input STL file(s) or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write a JSON batch report
        #[arg(short, long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Directory for re-centered STL copies
        #[arg(long, value_name = "DIR")]
        recentered: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Analyze {
            inputs,
            json,
            recentered,
        }) => {
            analyze_command(inputs, json.as_deref(), recentered.as_deref(), cli.verbose)?;
        }
        Some(Commands::Version) => {
            println!("Meshmetrics v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            if let Some(input) = &cli.input {
                single_command(input, cli.recentered.as_deref(), cli.verbose)?;
            } else {
                eprintln!("Error: Input file required");
                eprintln!("Usage: meshmetrics <FILE> [--recentered <FILE>]");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn single_command(input: &Path, recentered: Option<&Path>, verbose: bool) -> Result<()> {
    if !input.exists() {
        Reporter::report_error(&format!("Input file not found: {}", input.display()));
        std::process::exit(1);
    }

    let start = Instant::now();
    let (mesh, report) = match meshmetrics::analyze_stl_file(input) {
        Ok(result) => result,
        Err(e) => {
            Reporter::report_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if verbose {
        println!("Analyzed in {:.2?}", start.elapsed());
        println!("Vertices: {}", mesh.vertex_count());
    }

    Reporter::report_analysis(&input.display().to_string(), &report, start.elapsed());

    if let Some(output) = recentered {
        meshmetrics::io::export_stl(&mesh, output)?;
        if verbose {
            println!("Re-centered mesh written to: {}", output.display());
        }
    }

    Ok(())
}

fn analyze_command(
    inputs: &[PathBuf],
    json: Option<&Path>,
    recentered: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let files = discover_stl_files(inputs);
    if files.is_empty() {
        eprintln!("{}", "No STL files found in input(s)".red());
        std::process::exit(1);
    }

    if verbose {
        println!("Analyzing {} file(s)", files.len());
    }

    if let Some(dir) = recentered {
        std::fs::create_dir_all(dir)?;
    }

    let progress = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let results = run_batch(&files, recentered, progress.as_ref());

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    for result in &results {
        match (&result.report, &result.error) {
            (Some(report), _) => {
                Reporter::report_analysis(
                    &result.file,
                    report,
                    std::time::Duration::from_secs_f64(result.seconds),
                );
            }
            (None, Some(error)) => {
                Reporter::report_error(&format!("{}: {}", result.file, error));
            }
            _ => {}
        }
    }

    let report = BatchReport::from_results(results);

    if report.total > 1 {
        println!("\n{}", "═".repeat(80).bright_black());
        println!("{}", "Analysis Summary".bold());
        println!("{}", "═".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Total Files:".bright_black(),
            report.total.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Passed:".bright_black(),
            report.passed.to_string().green()
        );
        println!(
            "  {} {}",
            "Failed:".bright_black(),
            if report.failed > 0 {
                report.failed.to_string().red()
            } else {
                report.failed.to_string().green()
            }
        );
        println!("{}", "═".repeat(80).bright_black());
    }

    if let Some(path) = json {
        report.write_json(path)?;
        println!(
            "  {} {}",
            "JSON Report:".bright_black(),
            path.display().to_string().cyan()
        );
    }

    if report.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
