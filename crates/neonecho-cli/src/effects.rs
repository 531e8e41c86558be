//! Whole-canvas effects used by the recipes.
//!
//! These are compositions over canvas access, not new primitives. Float math
//! here truncates toward zero before saturating, so results match the
//! published NeonEcho textures bit for bit.

use neonecho_raster::{BlendMode, Canvas, RasterError, Rgba};

/// Truncate toward zero, then saturate to a channel value.
pub fn clamp_channel(value: f64) -> u8 {
    (value as i64).clamp(0, 255) as u8
}

/// Opaque canvas fading linearly from `top` on the first row to `bottom` on
/// the last.
pub fn gradient_base(width: u32, height: u32, top: Rgba, bottom: Rgba) -> Result<Canvas, RasterError> {
    let mut canvas = Canvas::new(width, height, top)?;
    let span = f64::from(height.saturating_sub(1).max(1));
    canvas.map_pixels(|_, y, _| {
        let t = f64::from(y) / span;
        let mix = |a: u8, b: u8| clamp_channel(f64::from(a) * (1.0 - t) + f64::from(b) * t);
        Rgba::rgb(mix(top.r, bottom.r), mix(top.g, bottom.g), mix(top.b, bottom.b))
    });
    Ok(canvas)
}

/// Brighten every `step`-th row (starting at row 0) by `intensity`.
pub fn add_scanlines(canvas: &mut Canvas, step: u32, intensity: i32) {
    let step = step.max(1);
    canvas.map_pixels(|_, y, px| {
        if y % step == 0 {
            offset_rgb(px, intensity)
        } else {
            px
        }
    });
}

/// Write `color` on every pixel where `(x + y)` is a multiple of `period`.
pub fn diagonal_pattern(canvas: &mut Canvas, period: u32, color: Rgba, mode: BlendMode) {
    let period = period.max(1);
    canvas.map_pixels(|x, y, px| {
        if (x + y) % period == 0 {
            mode.apply(px, color)
        } else {
            px
        }
    });
}

/// Shift brightness along the diagonal by `amplitude * sin((x + y) / wavelength)`.
pub fn sine_glow(canvas: &mut Canvas, amplitude: f64, wavelength: f64) {
    canvas.map_pixels(|x, y, px| {
        let glow = (amplitude * (f64::from(x + y) / wavelength).sin()) as i32;
        offset_rgb(px, glow)
    });
}

fn offset_rgb(px: Rgba, delta: i32) -> Rgba {
    let shift = |c: u8| (i32::from(c) + delta).clamp(0, 255) as u8;
    Rgba::new(shift(px.r), shift(px.g), shift(px.b), px.a)
}
