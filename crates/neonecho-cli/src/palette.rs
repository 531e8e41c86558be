//! NeonEcho color palette.

use neonecho_raster::Rgba;

pub const NEON_CYAN: Rgba = Rgba::rgb(30, 245, 255);
pub const NEON_MAGENTA: Rgba = Rgba::rgb(255, 63, 179);
pub const NEON_PURPLE: Rgba = Rgba::rgb(177, 75, 255);
pub const NEON_BLUE: Rgba = Rgba::rgb(40, 140, 255);

pub const DARK: Rgba = Rgba::rgb(10, 12, 18);
pub const MID: Rgba = Rgba::rgb(22, 26, 38);
pub const CHROME: Rgba = Rgba::rgb(180, 186, 198);
