//! List command implementation
//!
//! Prints the catalog: one line per asset, or a JSON array with `--json`.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use crate::catalog::{Asset, AssetCategory, Catalog};

/// Catalog entry as emitted by `list --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub asset_id: String,
    pub category: AssetCategory,
    pub recipe: String,
    pub width: u32,
    pub height: u32,
    pub path: String,
}

impl From<&Asset> for ListEntry {
    fn from(asset: &Asset) -> Self {
        Self {
            asset_id: asset.id(),
            category: asset.category,
            recipe: asset.recipe.name(),
            width: asset.width,
            height: asset.height,
            path: asset.relative_path().display().to_string(),
        }
    }
}

/// Build the listing for a catalog.
pub fn entries(catalog: &Catalog) -> Vec<ListEntry> {
    catalog.assets().iter().map(ListEntry::from).collect()
}

/// Run the list command
pub fn run(only: &[AssetCategory], json: bool) -> Result<ExitCode> {
    let catalog = Catalog::neon_echo().filtered(only);
    let entries = entries(&catalog);

    if json {
        let out = serde_json::to_string_pretty(&entries).context("Failed to serialize catalog")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    let mut current: Option<AssetCategory> = None;
    for entry in &entries {
        if current != Some(entry.category) {
            println!("{}", entry.category.as_str().cyan().bold());
            current = Some(entry.category);
        }
        println!(
            "  {:<40} {:>3}x{:<3} {}",
            entry.path,
            entry.width,
            entry.height,
            entry.recipe.dimmed()
        );
    }
    println!();
    println!("{} {} textures", "Total:".blue().bold(), entries.len());

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_follow_catalog_order() {
        let catalog = Catalog::neon_echo();
        let entries = entries(&catalog);
        assert_eq!(entries.len(), 24);
        assert_eq!(entries[0].asset_id, "block_texture/NeonPanel");
        assert_eq!(entries[23].recipe, "icon/beacon");
    }

    #[test]
    fn test_entry_json_shape() {
        let catalog = Catalog::neon_echo().filtered(&[AssetCategory::BlockModel]);
        let json = serde_json::to_value(entries(&catalog)).unwrap();
        assert_eq!(json[1]["width"], 128);
        assert_eq!(json[1]["category"], "block_model");
        assert_eq!(
            json[1]["path"],
            "Common/Blocks/NeonEcho/PrototypeSign_Texture.png"
        );
    }
}
