//! Fixed-size RGBA canvas with clipped drawing primitives.
//!
//! Coordinates are signed so callers may overshoot the edges; anything that
//! falls outside `[0, width) x [0, height)` is dropped, never wrapped into a
//! neighboring row.

use crate::color::{BlendMode, Rgba};
use crate::error::{check_dimensions, RasterError};

/// A 2D RGBA pixel grid, row-major, origin at the top left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<Rgba>,
}

impl Canvas {
    /// Create a canvas filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Result<Self, RasterError> {
        let size = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![fill; size],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> + '_ {
        self.data.chunks_exact(self.width as usize)
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel at the given coordinates, or `None` outside the canvas.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x.into(), y.into()).map(|i| self.data[i])
    }

    /// Write a pixel through `mode`. Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba, mode: BlendMode) {
        self.write(x.into(), y.into(), color, mode);
    }

    #[inline]
    fn write(&mut self, x: i64, y: i64, color: Rgba, mode: BlendMode) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = mode.apply(self.data[i], color);
        }
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba, mode: BlendMode) {
        // Clip first; every pixel is visited independently so order is irrelevant.
        let (x0, x1) = clip_span(x0.into(), x1.into(), self.width);
        let (y0, y1) = clip_span(y0.into(), y1.into(), self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.write(x, y, color, mode);
            }
        }
    }

    /// Composite the boundary of `[x0, x1) x [y0, y1)`.
    ///
    /// Horizontal edges are drawn first, then vertical ones, so corner pixels
    /// are composited twice.
    pub fn draw_rect_outline(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        // Columns and rows off the canvas contribute nothing to either edge pair.
        let (cx0, cx1) = clip_span(x0, x1, self.width);
        for x in cx0..cx1 {
            self.write(x, y0, color, BlendMode::Over);
            self.write(x, y1 - 1, color, BlendMode::Over);
        }
        let (cy0, cy1) = clip_span(y0, y1, self.height);
        for y in cy0..cy1 {
            self.write(x0, y, color, BlendMode::Over);
            self.write(x1 - 1, y, color, BlendMode::Over);
        }
    }

    /// Composite an 8-connected Bresenham line, both endpoints included.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        if x0.max(x1) < 0 || y0.max(y1) < 0 || x0.min(x1) >= w || y0.min(y1) >= h {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            // Both coordinates move monotonically, so once either has left the
            // canvas in its direction of travel no later pixel can land on it.
            let past_x = if sx > 0 { x >= w } else { x < 0 };
            let past_y = if sy > 0 { y >= h } else { y < 0 };
            if past_x || past_y {
                break;
            }
            self.write(x, y, color, BlendMode::Over);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Composite every pixel within `radius` of `(cx, cy)`.
    pub fn draw_filled_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba) {
        if radius < 0 {
            return;
        }
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let r2 = r * r;
        let (x0, x1) = clip_span(cx - r, cx + r + 1, self.width);
        let (y0, y1) = clip_span(cy - r, cy + r + 1, self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let (ddx, ddy) = (x - cx, y - cy);
                if ddx * ddx + ddy * ddy <= r2 {
                    self.write(x, y, color, BlendMode::Over);
                }
            }
        }
    }

    /// Apply `f` to every pixel, passing its coordinates.
    pub fn map_pixels<F>(&mut self, mut f: F)
    where
        F: FnMut(u32, u32, Rgba) -> Rgba,
    {
        let width = self.width as usize;
        for (i, px) in self.data.iter_mut().enumerate() {
            let x = (i % width) as u32;
            let y = (i / width) as u32;
            *px = f(x, y, *px);
        }
    }

    /// Convert to tightly packed 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for px in &self.data {
            bytes.extend_from_slice(&px.to_array());
        }
        bytes
    }
}

/// Clamp a half-open span to `[0, len)`. Empty spans stay empty.
fn clip_span(start: i64, end: i64, len: u32) -> (i64, i64) {
    let len = i64::from(len);
    let start = start.clamp(0, len);
    let end = end.clamp(0, len);
    (start, end.max(start))
}
