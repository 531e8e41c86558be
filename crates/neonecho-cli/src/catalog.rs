//! The fixed NeonEcho asset catalog.
//!
//! Each entry pairs a recipe and size with the resource path the game's
//! asset loader expects. Paths are relative to the resource root supplied
//! by the caller.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::palette::{CHROME, NEON_BLUE, NEON_CYAN, NEON_MAGENTA, NEON_PURPLE};
use crate::recipes::{IconShape, Recipe};

/// Where an asset lives and what kind of texture it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Tiling block faces.
    BlockTexture,
    /// Textures wrapped onto custom block models.
    BlockModel,
    /// Material textures for crafted resources.
    Ingot,
    /// Inventory icons.
    Icon,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::BlockTexture,
        AssetCategory::BlockModel,
        AssetCategory::Ingot,
        AssetCategory::Icon,
    ];

    /// Output directory relative to the resource root.
    pub fn directory(self) -> &'static str {
        match self {
            AssetCategory::BlockTexture => "Common/BlockTextures/NeonEcho",
            AssetCategory::BlockModel => "Common/Blocks/NeonEcho",
            AssetCategory::Ingot => "Common/Resources/Materials/Ingot_Textures",
            AssetCategory::Icon => "Common/Icons/ItemsGenerated",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetCategory::BlockTexture => "block_texture",
            AssetCategory::BlockModel => "block_model",
            AssetCategory::Ingot => "ingot",
            AssetCategory::Icon => "icon",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = AssetCategory::ALL.iter().map(|c| c.as_str()).collect();
                format!("unknown category '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// One generated texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// File name including the `.png` extension.
    pub filename: &'static str,
    pub category: AssetCategory,
    pub width: u32,
    pub height: u32,
    pub recipe: Recipe,
}

impl Asset {
    /// Identifier used in logs and reports: `<category>/<file stem>`.
    pub fn id(&self) -> String {
        let stem = self.filename.strip_suffix(".png").unwrap_or(self.filename);
        format!("{}/{}", self.category, stem)
    }

    /// Path relative to the resource root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.category.directory()).join(self.filename)
    }

    /// Full output path under `root`.
    pub fn path_under(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }
}

/// Ordered list of assets.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    assets: Vec<Asset>,
}

const fn asset(
    filename: &'static str,
    category: AssetCategory,
    width: u32,
    height: u32,
    recipe: Recipe,
) -> Asset {
    Asset {
        filename,
        category,
        width,
        height,
        recipe,
    }
}

const fn icon(filename: &'static str, shape: IconShape, accent: neonecho_raster::Rgba) -> Asset {
    asset(filename, AssetCategory::Icon, 64, 64, Recipe::Icon { shape, accent })
}

impl Catalog {
    /// The full NeonEcho texture set, in generation order.
    pub fn neon_echo() -> Self {
        use AssetCategory::{BlockModel, BlockTexture, Ingot};

        let panel = Recipe::NeonPanel { accent: NEON_CYAN };
        let glass = Recipe::NeonGlass { accent: NEON_PURPLE };

        let assets = vec![
            asset("NeonPanel.png", BlockTexture, 32, 32, panel),
            asset("NeonPanel_Top.png", BlockTexture, 32, 32, panel),
            asset("ChromePanel.png", BlockTexture, 32, 32, Recipe::ChromePanel),
            asset("ChromePanel_Top.png", BlockTexture, 32, 32, Recipe::ChromePanel),
            asset("CircuitTile.png", BlockTexture, 32, 32, Recipe::CircuitTile { accent: NEON_CYAN }),
            asset("NeonGlass.png", BlockTexture, 32, 32, glass),
            asset("NeonGlass_Top.png", BlockTexture, 32, 32, glass),
            asset("DangerSign_Texture.png", BlockModel, 64, 64, Recipe::Sign { accent: NEON_MAGENTA }),
            asset("PrototypeSign_Texture.png", BlockModel, 128, 64, Recipe::Sign { accent: NEON_CYAN }),
            asset("StreetLamp_Texture.png", BlockModel, 128, 64, Recipe::Lamp { accent: NEON_CYAN }),
            asset("HoloLamp_Texture.png", BlockModel, 96, 64, Recipe::Potion { accent: NEON_CYAN }),
            asset("Beacon_Texture.png", BlockModel, 96, 64, Recipe::Potion { accent: NEON_MAGENTA }),
            asset("NeonEcho_Datachip.png", Ingot, 32, 32, Recipe::Datachip),
            icon("NeonEcho_Datachip.png", IconShape::Datachip, NEON_CYAN),
            icon("NeonEcho_NeonPanel.png", IconShape::Panel, NEON_CYAN),
            icon("NeonEcho_ChromePanel.png", IconShape::Chrome, CHROME),
            icon("NeonEcho_CircuitTile.png", IconShape::Circuit, NEON_BLUE),
            icon("NeonEcho_NeonGlass.png", IconShape::Glass, NEON_PURPLE),
            icon("NeonEcho_HoloLamp.png", IconShape::Lamp, NEON_CYAN),
            icon("NeonEcho_DangerSign.png", IconShape::Danger, NEON_MAGENTA),
            icon("NeonEcho_NeonBillboard.png", IconShape::Billboard, NEON_MAGENTA),
            icon("NeonEcho_NeonArrowSign.png", IconShape::Arrow, NEON_CYAN),
            icon("NeonEcho_NeonStreetLamp.png", IconShape::StreetLamp, NEON_CYAN),
            icon("NeonEcho_NeonBeacon.png", IconShape::Beacon, NEON_MAGENTA),
        ];

        Self { assets }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Keep only assets in `categories`. An empty slice keeps everything.
    pub fn filtered(&self, categories: &[AssetCategory]) -> Catalog {
        if categories.is_empty() {
            return self.clone();
        }
        Catalog {
            assets: self
                .assets
                .iter()
                .filter(|a| categories.contains(&a.category))
                .cloned()
                .collect(),
        }
    }
}
