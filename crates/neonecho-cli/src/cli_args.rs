//! CLI argument definitions for the NeonEcho command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

use neonecho_cli::AssetCategory;

/// NeonEcho - Procedural texture generator
#[derive(Parser)]
#[command(name = "neonecho")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render every catalog texture and write the PNG files
    Generate {
        /// Resource root directory (default: src/main/resources)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Only generate these categories (block_texture, block_model, ingot, icon)
        #[arg(long, value_name = "CATEGORY")]
        only: Vec<AssetCategory>,

        /// Write a JSON summary report to this path
        #[arg(long)]
        report: Option<String>,

        /// Show one line per texture instead of progress dots
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the texture catalog
    List {
        /// Only list these categories
        #[arg(long, value_name = "CATEGORY")]
        only: Vec<AssetCategory>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check generated files against the catalog
    Verify {
        /// Resource root directory (default: src/main/resources)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_parses_categories() {
        let cli = Cli::try_parse_from([
            "neonecho", "generate", "--only", "icon", "--only", "ingot", "-v",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { only, verbose, .. } => {
                assert_eq!(only, vec![AssetCategory::Icon, AssetCategory::Ingot]);
                assert!(verbose);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(Cli::try_parse_from(["neonecho", "list", "--only", "sprites"]).is_err());
    }
}
