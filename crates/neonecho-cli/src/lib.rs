//! NeonEcho texture catalog.
//!
//! This crate holds everything that decides what the NeonEcho textures look
//! like and where they go: the palette, the drawing recipes, the fixed asset
//! catalog, and the commands that render, write, list and verify them. The
//! pixel work itself is done by `neonecho-raster`.

pub mod catalog;
pub mod commands;
pub mod effects;
pub mod output;
pub mod palette;
pub mod recipes;

pub use catalog::{Asset, AssetCategory, Catalog};
pub use recipes::{IconShape, Recipe};
