//! Error types for canvas creation and encoding.

use thiserror::Error;

/// Largest width or height a PNG header can carry.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Errors from raster operations.
///
/// Drawing outside the canvas is not an error; primitives clip silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("Invalid dimensions: {width}x{height} (each side must be 1..={max})", max = MAX_DIMENSION)]
    InvalidDimension { width: u32, height: u32 },

    #[error("{tag} chunk payload of {len} bytes exceeds the PNG limit of {max} bytes", max = i32::MAX)]
    ChunkTooLarge { tag: String, len: usize },
}

/// Check that a width/height pair describes a non-empty, addressable grid.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<usize, RasterError> {
    let invalid = || RasterError::InvalidDimension { width, height };

    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(invalid());
    }

    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_side_rejected() {
        assert_eq!(
            check_dimensions(0, 4),
            Err(RasterError::InvalidDimension { width: 0, height: 4 })
        );
        assert!(check_dimensions(4, 0).is_err());
    }

    #[test]
    fn test_oversized_side_rejected() {
        assert!(check_dimensions(MAX_DIMENSION + 1, 1).is_err());
        assert!(check_dimensions(1, u32::MAX).is_err());
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(check_dimensions(128, 64), Ok(8192));
    }

    #[test]
    fn test_display_names_dimensions() {
        let err = RasterError::InvalidDimension { width: 0, height: 7 };
        assert!(err.to_string().contains("0x7"));
    }

    #[test]
    fn test_display_names_chunk() {
        let err = RasterError::ChunkTooLarge {
            tag: "IDAT".to_string(),
            len: 1 << 31,
        };
        assert_eq!(
            err.to_string(),
            "IDAT chunk payload of 2147483648 bytes exceeds the PNG limit of 2147483647 bytes"
        );
    }
}
