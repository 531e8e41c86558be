//! NeonEcho Raster Core
//!
//! This crate provides the two pieces of the NeonEcho texture pipeline that
//! carry real engineering: a small software rasterizer and a deterministic
//! PNG encoder. Everything that decides *what* a texture looks like lives in
//! the catalog crate on top of this one.
//!
//! # Features
//!
//! - **Canvas**: fixed-size RGBA grid with clipped drawing primitives
//!   (filled rects, rect outlines, Bresenham lines, filled circles)
//! - **Compositing**: integer source-over blending, reproducible to the bit
//! - **PNG Encoder**: signature, `IHDR`, a single zlib `IDAT`, `IEND`, all
//!   CRC-protected, written without an image codec library
//! - **Validator**: structural checks for encoded files read back from disk
//!
//! # Example
//!
//! ```
//! use neonecho_raster::{encode, BlendMode, Canvas, Rgba};
//!
//! let mut canvas = Canvas::new(4, 2, Rgba::TRANSPARENT).unwrap();
//! canvas.fill_rect(0, 0, 2, 2, Rgba::new(255, 0, 0, 255), BlendMode::Replace);
//! canvas.draw_line(0, 0, 3, 1, Rgba::new(0, 255, 0, 128));
//!
//! let bytes = encode(&canvas).unwrap();
//! assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
//! ```
//!
//! # Determinism
//!
//! - Compositing uses exact integer arithmetic (truncating division)
//! - The encoder uses a fixed compression level and a fixed chunk order
//! - Same canvas = byte-identical output

pub mod canvas;
pub mod color;
pub mod error;
pub mod png;
pub mod validate;

// Re-export main types for convenience
pub use canvas::Canvas;
pub use color::{blend_over, BlendMode, Rgba};
pub use error::RasterError;
pub use png::{encode, hash_png};
pub use validate::{validate_png, PngFormatError, PngReport};
