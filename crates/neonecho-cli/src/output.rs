//! Rendering catalog assets to disk and reporting the results.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;

use neonecho_raster::{encode, hash_png};

use crate::catalog::{Asset, AssetCategory};

/// Outcome of generating one asset.
#[derive(Debug, Clone, Serialize)]
pub struct AssetResult {
    /// `<category>/<stem>` identifier
    pub asset_id: String,
    pub category: AssetCategory,
    /// Recipe name
    pub recipe: String,
    /// Path the file was (or would have been) written to
    pub path: String,
    pub width: u32,
    pub height: u32,
    /// Whether generation succeeded
    pub success: bool,
    /// Error message if failed
    pub error: Option<String>,
    /// BLAKE3 hash of the PNG bytes
    pub hash: Option<String>,
    /// Encoded size in bytes
    pub bytes: Option<usize>,
    /// Generation time in milliseconds
    pub duration_ms: u64,
}

/// Summary report for a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub out_root: String,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub runtime_seconds: f64,
    pub assets: Vec<AssetResult>,
}

/// Render and encode an asset without touching the filesystem.
pub fn render_png(asset: &Asset) -> Result<Vec<u8>> {
    let canvas = asset
        .recipe
        .render(asset.width, asset.height)
        .with_context(|| format!("Failed to render {}", asset.id()))?;
    let bytes = encode(&canvas).with_context(|| format!("Failed to encode {}", asset.id()))?;
    Ok(bytes)
}

/// Write bytes to `path`, creating any missing parent directories.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Render, encode and write one asset under `out_root`.
///
/// Failures are captured in the returned result rather than propagated so a
/// batch run can continue past a bad asset.
pub fn generate_asset(asset: &Asset, out_root: &Path) -> AssetResult {
    let start = Instant::now();
    let path = asset.path_under(out_root);

    let mut result = AssetResult {
        asset_id: asset.id(),
        category: asset.category,
        recipe: asset.recipe.name(),
        path: path.display().to_string(),
        width: asset.width,
        height: asset.height,
        success: false,
        error: None,
        hash: None,
        bytes: None,
        duration_ms: 0,
    };

    let outcome = render_png(asset).and_then(|bytes| {
        write_file(&path, &bytes)?;
        Ok(bytes)
    });

    match outcome {
        Ok(bytes) => {
            result.success = true;
            result.hash = Some(hash_png(&bytes));
            result.bytes = Some(bytes.len());
        }
        Err(e) => {
            result.error = Some(format!("{:#}", e));
        }
    }

    result.duration_ms = start.elapsed().as_millis() as u64;
    result
}

/// Serialize a summary as pretty JSON to `path`.
pub fn write_summary(summary: &GenerationSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
    write_file(path, json.as_bytes())
}
