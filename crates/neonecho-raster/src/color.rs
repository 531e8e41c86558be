//! RGBA pixels and the source-over compositing rule.

/// 8-bit RGBA pixel. Alpha 0 is fully transparent, 255 fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Channels in R, G, B, A order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_array(rgba)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

/// How a primitive writes into the destination pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Overwrite the destination with the source.
    Replace,
    /// Composite the source over the destination.
    #[default]
    Over,
}

impl BlendMode {
    /// Combine a source pixel with a destination pixel using this mode.
    #[inline]
    pub fn apply(self, dst: Rgba, src: Rgba) -> Rgba {
        match self {
            BlendMode::Replace => src,
            BlendMode::Over => blend_over(dst, src),
        }
    }
}

/// Source-over-destination compositing on straight (non-premultiplied) alpha.
///
/// All divisions truncate. The alpha term `sa + da * inv / 255` and the color
/// term `(sc * sa + dc * da * inv / 255) / out_a` are evaluated with numerator
/// and denominator scaled by 255, so the results are exact floors.
pub fn blend_over(dst: Rgba, src: Rgba) -> Rgba {
    if src.a == 0 {
        return dst;
    }
    if src.a == 255 {
        return src;
    }

    let sa = u32::from(src.a);
    let da = u32::from(dst.a);
    let inv = 255 - sa;

    let out_a = saturate((sa * 255 + da * inv) / 255);
    if out_a == 0 {
        return Rgba::TRANSPARENT;
    }

    let denom = out_a * 255;
    let channel = |s: u8, d: u8| -> u8 {
        let num = u32::from(s) * sa * 255 + u32::from(d) * da * inv;
        saturate(num / denom) as u8
    };

    Rgba::new(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        out_a as u8,
    )
}

#[inline]
fn saturate(value: u32) -> u32 {
    value.min(255)
}
