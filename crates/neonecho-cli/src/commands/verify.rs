//! Verify command implementation
//!
//! Reads every catalog texture back from the resource root, validates the
//! PNG container and checks the dimensions against the catalog.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use neonecho_raster::validate_png;

use crate::catalog::{Asset, Catalog};
use crate::commands::generate::DEFAULT_OUT_ROOT;

/// Verification outcome for one asset.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResult {
    pub asset_id: String,
    pub path: String,
    pub ok: bool,
    pub problems: Vec<String>,
}

/// Check a single asset on disk.
pub fn verify_asset(asset: &Asset, out_root: &Path) -> VerifyResult {
    let path = asset.path_under(out_root);
    let mut problems = Vec::new();

    match fs::read(&path) {
        Ok(bytes) => {
            let report = validate_png(&bytes);
            problems.extend(report.errors.iter().map(|e| e.to_string()));
            if let (Some(w), Some(h)) = (report.width, report.height) {
                if (w, h) != (asset.width, asset.height) {
                    problems.push(format!(
                        "Size mismatch: file is {}x{}, catalog expects {}x{}",
                        w, h, asset.width, asset.height
                    ));
                }
            }
        }
        Err(e) => problems.push(format!("Failed to read file: {}", e)),
    }

    VerifyResult {
        asset_id: asset.id(),
        path: path.display().to_string(),
        ok: problems.is_empty(),
        problems,
    }
}

/// Verify every asset in `catalog`.
pub fn verify_catalog(catalog: &Catalog, out_root: &Path) -> Vec<VerifyResult> {
    catalog
        .assets()
        .iter()
        .map(|asset| verify_asset(asset, out_root))
        .collect()
}

/// Run the verify command
///
/// # Returns
/// Exit code: 0 if every file is present and valid, 1 otherwise
pub fn run(out_root: Option<&str>, json: bool) -> Result<ExitCode> {
    let out_root = out_root.unwrap_or(DEFAULT_OUT_ROOT);
    let results = verify_catalog(&Catalog::neon_echo(), Path::new(out_root));
    let failed = results.iter().filter(|r| !r.ok).count();

    if json {
        let out = serde_json::to_string_pretty(&results)
            .context("Failed to serialize verification results")?;
        println!("{}", out);
    } else {
        for result in &results {
            if result.ok {
                println!("  {} {}", "OK".green(), result.asset_id);
            } else {
                println!("  {} {}", "FAILED".red(), result.asset_id);
                for problem in &result.problems {
                    println!("      {}", problem);
                }
            }
        }
        println!();
        println!(
            "{} {}/{} textures valid",
            if failed == 0 {
                "PASS".green().bold()
            } else {
                "FAIL".red().bold()
            },
            results.len() - failed,
            results.len()
        );
    }

    if failed > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
