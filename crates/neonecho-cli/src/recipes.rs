//! Drawing recipes for NeonEcho textures.
//!
//! A [`Recipe`] is plain data; [`Recipe::render`] replays the same sequence
//! of canvas primitives every time, so a recipe and a size fully determine
//! the output bytes.

use neonecho_raster::{BlendMode, Canvas, RasterError, Rgba};

use crate::effects::{add_scanlines, diagonal_pattern, gradient_base, sine_glow};
use crate::palette::{CHROME, DARK, MID, NEON_BLUE, NEON_CYAN};

/// Glyph drawn on top of the shared item-icon frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconShape {
    Panel,
    Chrome,
    Circuit,
    Glass,
    Lamp,
    Danger,
    Billboard,
    Arrow,
    StreetLamp,
    Beacon,
    Datachip,
}

impl IconShape {
    pub fn name(self) -> &'static str {
        match self {
            IconShape::Panel => "panel",
            IconShape::Chrome => "chrome",
            IconShape::Circuit => "circuit",
            IconShape::Glass => "glass",
            IconShape::Lamp => "lamp",
            IconShape::Danger => "danger",
            IconShape::Billboard => "billboard",
            IconShape::Arrow => "arrow",
            IconShape::StreetLamp => "streetlamp",
            IconShape::Beacon => "beacon",
            IconShape::Datachip => "datachip",
        }
    }
}

/// A data-described drawing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// Dark gradient with an accent grid, frame and scanlines.
    NeonPanel { accent: Rgba },
    /// Brushed-metal gradient with a sine sheen and two highlight lines.
    ChromePanel,
    /// Trace lines with solder pads.
    CircuitTile { accent: Rgba },
    /// Violet glass with a faint diagonal hatch.
    NeonGlass { accent: Rgba },
    /// Framed sign face with text rules and a center plate.
    Sign { accent: Rgba },
    /// Lamp post with a bulb and halo.
    Lamp { accent: Rgba },
    /// Concentric glowing orb.
    Potion { accent: Rgba },
    /// Chip body with pins, always cyan.
    Datachip,
    /// Framed item icon with a glyph.
    Icon { shape: IconShape, accent: Rgba },
}

impl Recipe {
    /// Short identifier for listings and reports.
    pub fn name(&self) -> String {
        match self {
            Recipe::NeonPanel { .. } => "neon_panel".to_string(),
            Recipe::ChromePanel => "chrome_panel".to_string(),
            Recipe::CircuitTile { .. } => "circuit_tile".to_string(),
            Recipe::NeonGlass { .. } => "neon_glass".to_string(),
            Recipe::Sign { .. } => "sign".to_string(),
            Recipe::Lamp { .. } => "lamp".to_string(),
            Recipe::Potion { .. } => "potion".to_string(),
            Recipe::Datachip => "datachip".to_string(),
            Recipe::Icon { shape, .. } => format!("icon/{}", shape.name()),
        }
    }

    /// Render this recipe onto a fresh canvas.
    pub fn render(&self, width: u32, height: u32) -> Result<Canvas, RasterError> {
        let mut canvas = base_for(self, width, height)?;
        let (w, h) = (width as i32, height as i32);
        match *self {
            Recipe::NeonPanel { accent } => neon_panel(&mut canvas, w, h, accent),
            Recipe::ChromePanel => chrome_panel(&mut canvas, w, h),
            Recipe::CircuitTile { accent } => circuit_tile(&mut canvas, w, h, accent),
            Recipe::NeonGlass { accent } => neon_glass(&mut canvas, w, h, accent),
            Recipe::Sign { accent } => sign(&mut canvas, w, h, accent),
            Recipe::Lamp { accent } => lamp(&mut canvas, w, h, accent),
            Recipe::Potion { accent } => potion(&mut canvas, w, h, accent),
            Recipe::Datachip => datachip(&mut canvas, w, h),
            Recipe::Icon { shape, accent } => icon(&mut canvas, w, h, shape, accent),
        }
        Ok(canvas)
    }
}

/// Background gradient for each recipe.
fn base_for(recipe: &Recipe, width: u32, height: u32) -> Result<Canvas, RasterError> {
    let (top, bottom) = match recipe {
        Recipe::NeonPanel { .. } => (DARK, MID),
        Recipe::ChromePanel => (Rgba::rgb(32, 38, 46), Rgba::rgb(16, 20, 28)),
        Recipe::CircuitTile { .. } => (Rgba::rgb(10, 14, 20), Rgba::rgb(20, 24, 36)),
        Recipe::NeonGlass { .. } => (Rgba::rgb(30, 10, 40), Rgba::rgb(10, 5, 20)),
        Recipe::Sign { .. } => (Rgba::rgb(20, 8, 18), Rgba::rgb(10, 5, 14)),
        Recipe::Lamp { .. } => (Rgba::rgb(12, 16, 24), Rgba::rgb(8, 10, 16)),
        Recipe::Potion { .. } => (Rgba::rgb(8, 12, 18), Rgba::rgb(16, 20, 30)),
        Recipe::Datachip => (Rgba::rgb(14, 18, 24), Rgba::rgb(6, 8, 12)),
        Recipe::Icon { .. } => (Rgba::rgb(8, 10, 16), Rgba::rgb(18, 20, 28)),
    };
    gradient_base(width, height, top, bottom)
}

/// `start..end` stepping by `step`, empty when `start >= end`.
fn stride(start: i32, end: i32, step: usize) -> impl Iterator<Item = i32> {
    (start..end).step_by(step)
}

fn neon_panel(c: &mut Canvas, w: i32, h: i32, accent: Rgba) {
    diagonal_pattern(c, 7, Rgba::rgb(12, 18, 26), BlendMode::Replace);
    for x in stride(0, w, 6) {
        c.draw_line(x, 0, x, h - 1, accent.with_alpha(180));
    }
    for y in stride(0, h, 6) {
        c.draw_line(0, y, w - 1, y, accent.with_alpha(160));
    }
    c.draw_rect_outline(1, 1, w - 1, h - 1, accent.with_alpha(200));
    add_scanlines(c, 4, 18);
}

fn chrome_panel(c: &mut Canvas, w: i32, h: i32) {
    sine_glow(c, 20.0, 6.0);
    c.draw_line(0, h / 3, w - 1, h / 3 - 2, CHROME.with_alpha(200));
    c.draw_line(0, h / 3 + 2, w - 1, h / 3, Rgba::new(140, 150, 168, 160));
    c.draw_rect_outline(1, 1, w - 1, h - 1, Rgba::new(120, 130, 150, 180));
}

fn circuit_tile(c: &mut Canvas, w: i32, h: i32, accent: Rgba) {
    for x in stride(4, w, 8) {
        c.draw_line(x, 2, x, h - 3, accent.with_alpha(180));
        c.draw_filled_circle(x, 4, 2, accent.with_alpha(220));
    }
    for y in stride(6, h, 8) {
        c.draw_line(2, y, w - 3, y, NEON_BLUE.with_alpha(180));
        c.draw_filled_circle(w - 5, y, 2, NEON_BLUE.with_alpha(220));
    }
    c.draw_rect_outline(1, 1, w - 1, h - 1, accent.with_alpha(160));
}

fn neon_glass(c: &mut Canvas, w: i32, h: i32, accent: Rgba) {
    diagonal_pattern(c, 5, accent.with_alpha(60), BlendMode::Over);
    c.draw_rect_outline(1, 1, w - 1, h - 1, accent.with_alpha(200));
}

fn sign(c: &mut Canvas, w: i32, h: i32, accent: Rgba) {
    c.draw_rect_outline(2, 2, w - 2, h - 2, accent.with_alpha(220));
    for y in stride(6, h - 6, 6) {
        c.draw_line(6, y, w - 7, y, accent.with_alpha(140));
    }
    c.draw_rect_outline(8, h / 2 - 6, w - 8, h / 2 + 6, accent.with_alpha(180));
}

fn lamp(c: &mut Canvas, w: i32, h: i32, accent: Rgba) {
    c.draw_line(w / 2, 4, w / 2, h - 6, Rgba::new(90, 100, 120, 220));
    c.draw_filled_circle(w / 2, 6, 5, accent.with_alpha(220));
    c.draw_filled_circle(w / 2, 6, 9, accent.with_alpha(80));
}

fn potion(c: &mut Canvas, w: i32, h: i32, accent: Rgba) {
    let side = w.min(h);
    c.draw_filled_circle(w / 2, h / 2, side / 3, accent.with_alpha(200));
    c.draw_filled_circle(w / 2, h / 2, side / 2, accent.with_alpha(80));
}

fn datachip(c: &mut Canvas, w: i32, h: i32) {
    c.draw_rect_outline(4, 6, w - 4, h - 6, NEON_CYAN.with_alpha(200));
    for x in stride(6, w - 6, 4) {
        c.draw_line(x, 4, x, 6, NEON_CYAN.with_alpha(220));
        c.draw_line(x, h - 6, x, h - 4, NEON_CYAN.with_alpha(220));
    }
}

fn icon(c: &mut Canvas, w: i32, h: i32, shape: IconShape, accent: Rgba) {
    let a = |alpha: u8| accent.with_alpha(alpha);
    c.draw_rect_outline(2, 2, w - 2, h - 2, a(200));
    match shape {
        IconShape::Panel => {
            for x in stride(8, w - 8, 8) {
                c.draw_line(x, 8, x, h - 9, a(180));
            }
            for y in stride(8, h - 8, 8) {
                c.draw_line(8, y, w - 9, y, a(140));
            }
        }
        IconShape::Chrome => {
            c.draw_line(8, h / 2, w - 9, h / 2 - 6, CHROME.with_alpha(220));
            c.draw_line(8, h / 2 + 4, w - 9, h / 2 - 2, Rgba::new(150, 160, 180, 180));
        }
        IconShape::Circuit => {
            c.draw_line(12, 18, 52, 18, NEON_BLUE.with_alpha(200));
            c.draw_line(12, 32, 44, 32, a(200));
            c.draw_line(20, 46, 52, 46, a(180));
            c.draw_filled_circle(12, 18, 3, NEON_BLUE.with_alpha(220));
            c.draw_filled_circle(52, 46, 3, a(220));
        }
        IconShape::Glass => {
            c.draw_rect_outline(10, 10, w - 10, h - 10, a(160));
            for y in stride(12, h - 12, 4) {
                c.draw_line(12, y, w - 13, y, a(80));
            }
        }
        IconShape::Lamp => {
            c.draw_line(w / 2, 12, w / 2, h - 16, Rgba::new(120, 130, 150, 220));
            c.draw_filled_circle(w / 2, 16, 6, a(220));
            c.draw_filled_circle(w / 2, 16, 11, a(80));
        }
        IconShape::Danger => {
            c.draw_line(32, 12, 12, 52, a(200));
            c.draw_line(32, 12, 52, 52, a(200));
            c.draw_line(12, 52, 52, 52, a(200));
        }
        IconShape::Billboard => {
            c.draw_rect_outline(12, 18, w - 12, h - 18, a(200));
            for y in stride(24, h - 22, 6) {
                c.draw_line(16, y, w - 17, y, a(140));
            }
        }
        IconShape::Arrow => {
            c.draw_line(14, 32, 46, 32, a(220));
            c.draw_line(36, 22, 46, 32, a(220));
            c.draw_line(36, 42, 46, 32, a(220));
        }
        IconShape::StreetLamp => {
            c.draw_line(32, 14, 32, 50, Rgba::new(120, 130, 150, 220));
            c.draw_filled_circle(32, 16, 5, a(200));
        }
        IconShape::Beacon => {
            c.draw_rect_outline(28, 16, 36, 50, a(200));
            c.draw_filled_circle(32, 16, 8, a(100));
        }
        IconShape::Datachip => {
            c.draw_rect_outline(16, 20, w - 16, h - 20, a(200));
            for x in stride(18, w - 18, 6) {
                c.draw_line(x, 16, x, 20, a(200));
                c.draw_line(x, h - 20, x, h - 16, a(200));
            }
        }
    }
}
