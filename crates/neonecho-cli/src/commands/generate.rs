//! Generate command implementation
//!
//! Renders every catalog asset (optionally limited to some categories),
//! writes the PNG files under the resource root and prints a summary.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use crate::catalog::{AssetCategory, Catalog};
use crate::output::{generate_asset, write_summary, AssetResult, GenerationSummary};

/// Default resource root, relative to the working directory.
pub const DEFAULT_OUT_ROOT: &str = "src/main/resources";

/// Run the generate command
///
/// # Arguments
/// * `out_root` - Resource root directory (default: `src/main/resources`)
/// * `only` - Categories to generate (empty = all)
/// * `report` - Optional path for a JSON summary report
/// * `verbose` - Whether to show one line per asset
///
/// # Returns
/// Exit code: 0 success, 1 if any asset failed
pub fn run(
    out_root: Option<&str>,
    only: &[AssetCategory],
    report: Option<&str>,
    verbose: bool,
) -> Result<ExitCode> {
    let out_root = out_root.unwrap_or(DEFAULT_OUT_ROOT);
    let catalog = Catalog::neon_echo().filtered(only);

    println!("{}", "======================================".cyan());
    println!("{}", "  NeonEcho Texture Generator".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!("{} {}", "Output root:".blue().bold(), out_root);
    if !only.is_empty() {
        let names: Vec<&str> = only.iter().map(|c| c.as_str()).collect();
        println!("{} {}", "Categories:".blue().bold(), names.join(", "));
    }
    println!();

    let summary = generate_catalog(&catalog, Path::new(out_root), verbose);
    print_summary(&summary);

    if let Some(report_path) = report {
        write_summary(&summary, Path::new(report_path))?;
        println!("{} {}", "Summary report:".blue().bold(), report_path);
    }

    if summary.failed > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Generate every asset in `catalog` under `out_root`, in catalog order.
pub fn generate_catalog(catalog: &Catalog, out_root: &Path, verbose: bool) -> GenerationSummary {
    let start = Instant::now();

    println!(
        "{} Generating {} textures",
        "INFO".blue().bold(),
        catalog.len()
    );

    let mut results: Vec<AssetResult> = Vec::with_capacity(catalog.len());
    for asset in catalog.assets() {
        let result = generate_asset(asset, out_root);
        report_progress(&result, verbose);
        results.push(result);
    }

    if !verbose {
        println!(); // Newline after progress dots
    }

    let successful = results.iter().filter(|r| r.success).count();
    GenerationSummary {
        out_root: out_root.display().to_string(),
        total: results.len(),
        successful,
        failed: results.len() - successful,
        runtime_seconds: start.elapsed().as_secs_f64(),
        assets: results,
    }
}

fn report_progress(result: &AssetResult, verbose: bool) {
    match (result.success, verbose) {
        (true, true) => println!(
            "  {} {} {}x{} ({}ms)",
            "SUCCESS".green(),
            result.asset_id,
            result.width,
            result.height,
            result.duration_ms
        ),
        (true, false) => print!("{}", ".".green()),
        (false, true) => println!(
            "  {} {} - {}",
            "FAILED".red(),
            result.asset_id,
            result.error.as_deref().unwrap_or("unknown error")
        ),
        (false, false) => print!("{}", "x".red()),
    }
}

fn print_summary(summary: &GenerationSummary) {
    println!();
    println!("{}", "======================================".cyan());
    println!("{}", "  Generation Summary".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!("{} {}", "Total textures:".blue().bold(), summary.total);
    println!("{} {}", "Successful:".green().bold(), summary.successful);
    println!("{} {}", "Failed:".red().bold(), summary.failed);
    println!(
        "{} {:.2}s",
        "Total runtime:".blue().bold(),
        summary.runtime_seconds
    );
    println!();

    let failed: Vec<_> = summary.assets.iter().filter(|r| !r.success).collect();
    if !failed.is_empty() {
        println!("{}", "Failed textures:".red().bold());
        for result in failed {
            println!(
                "  - {}: {}",
                result.asset_id,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
        println!();
    }

    println!("Generated {} textures.", summary.successful);
}
