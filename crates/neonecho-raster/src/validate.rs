//! Structural PNG validator.
//!
//! Checks an encoded file against the container layout the encoder writes:
//! signature, well-formed chunks with matching CRCs, an 8-bit RGBA `IHDR`
//! first, at least one `IDAT`, and `IEND` last. Errors are collected into a
//! report rather than stopping at the first problem, except where the chunk
//! stream itself can no longer be followed.

use std::fmt;

use crate::png::{chunk_crc, BIT_DEPTH, COLOR_TYPE_RGBA, IDAT, IEND, IHDR, IHDR_LEN, PNG_SIGNATURE};

/// Bytes of framing around every chunk payload (length, tag, CRC).
const CHUNK_OVERHEAD: usize = 12;

/// PNG format validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PngFormatError {
    /// File is shorter than the signature.
    FileTooSmall { size: usize },
    /// The first eight bytes are not the PNG signature.
    InvalidSignature { found: Vec<u8> },
    /// A chunk header or payload runs past the end of the file.
    ChunkTruncated { offset: usize, tag: String },
    /// Stored CRC does not match the tag and payload.
    CrcMismatch { tag: String, stored: u32, computed: u32 },
    /// The first chunk is not `IHDR`.
    MissingHeader,
    /// `IHDR` payload is not 13 bytes.
    InvalidHeaderLength { length: usize },
    /// Width or height of zero.
    InvalidDimensions { width: u32, height: u32 },
    /// Header fields other than RGBA/8-bit/methods 0.
    UnsupportedFormat {
        bit_depth: u8,
        color_type: u8,
        compression: u8,
        filter: u8,
        interlace: u8,
    },
    /// No `IDAT` chunk present.
    MissingImageData,
    /// The stream does not end with an empty `IEND`.
    MissingEnd,
    /// `IEND` carries a payload.
    NonEmptyEnd { length: usize },
    /// Bytes follow the `IEND` chunk.
    TrailingData { bytes: usize },
}

impl fmt::Display for PngFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PngFormatError::FileTooSmall { size } => {
                write!(f, "File too small: {} bytes (minimum 8 required)", size)
            }
            PngFormatError::InvalidSignature { found } => {
                write!(f, "Invalid PNG signature: {:02X?}", found)
            }
            PngFormatError::ChunkTruncated { offset, tag } => {
                write!(f, "Chunk '{}' at offset {} is truncated", tag, offset)
            }
            PngFormatError::CrcMismatch {
                tag,
                stored,
                computed,
            } => {
                write!(
                    f,
                    "CRC mismatch in '{}': stored 0x{:08X}, computed 0x{:08X}",
                    tag, stored, computed
                )
            }
            PngFormatError::MissingHeader => write!(f, "First chunk is not IHDR"),
            PngFormatError::InvalidHeaderLength { length } => {
                write!(f, "Invalid IHDR length: {} (expected 13)", length)
            }
            PngFormatError::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {}x{}", width, height)
            }
            PngFormatError::UnsupportedFormat {
                bit_depth,
                color_type,
                compression,
                filter,
                interlace,
            } => {
                write!(
                    f,
                    "Unsupported format: depth {}, color type {}, compression {}, filter {}, interlace {} (expected 8/6/0/0/0)",
                    bit_depth, color_type, compression, filter, interlace
                )
            }
            PngFormatError::MissingImageData => write!(f, "No IDAT chunk"),
            PngFormatError::MissingEnd => write!(f, "Stream does not end with IEND"),
            PngFormatError::NonEmptyEnd { length } => {
                write!(f, "IEND carries {} payload bytes", length)
            }
            PngFormatError::TrailingData { bytes } => {
                write!(f, "{} bytes after IEND", bytes)
            }
        }
    }
}

impl std::error::Error for PngFormatError {}

/// Result of validating a PNG byte stream.
#[derive(Debug, Clone, Default)]
pub struct PngReport {
    /// True when no errors were found.
    pub valid: bool,
    /// Width from `IHDR`, if it could be read.
    pub width: Option<u32>,
    /// Height from `IHDR`, if it could be read.
    pub height: Option<u32>,
    /// Chunk tags in file order.
    pub chunks: Vec<String>,
    /// Every problem found.
    pub errors: Vec<PngFormatError>,
}

/// A chunk located inside the byte stream.
struct RawChunk<'a> {
    tag: [u8; 4],
    payload: &'a [u8],
}

fn tag_name(tag: &[u8]) -> String {
    String::from_utf8_lossy(tag).into_owned()
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Validate a PNG byte stream.
pub fn validate_png(data: &[u8]) -> PngReport {
    let mut report = PngReport::default();

    if data.len() < PNG_SIGNATURE.len() {
        report.errors.push(PngFormatError::FileTooSmall { size: data.len() });
        return report;
    }
    if &data[..8] != PNG_SIGNATURE {
        report.errors.push(PngFormatError::InvalidSignature {
            found: data[..8].to_vec(),
        });
        return report;
    }

    let mut chunks = Vec::new();
    let mut offset = PNG_SIGNATURE.len();
    while offset < data.len() {
        if data.len() - offset < CHUNK_OVERHEAD {
            let tag_end = (offset + 8).min(data.len());
            let tag = data.get(offset + 4..tag_end).map(tag_name).unwrap_or_default();
            report.errors.push(PngFormatError::ChunkTruncated { offset, tag });
            break;
        }

        let length = read_u32(data, offset) as usize;
        let tag: [u8; 4] = [
            data[offset + 4],
            data[offset + 5],
            data[offset + 6],
            data[offset + 7],
        ];
        let payload_start = offset + 8;
        let Some(payload_end) = payload_start
            .checked_add(length)
            .filter(|end| end + 4 <= data.len())
        else {
            report.errors.push(PngFormatError::ChunkTruncated {
                offset,
                tag: tag_name(&tag),
            });
            break;
        };

        let payload = &data[payload_start..payload_end];
        let stored = read_u32(data, payload_end);
        let computed = chunk_crc(&tag, payload);
        if stored != computed {
            report.errors.push(PngFormatError::CrcMismatch {
                tag: tag_name(&tag),
                stored,
                computed,
            });
        }

        report.chunks.push(tag_name(&tag));
        chunks.push(RawChunk { tag, payload });
        offset = payload_end + 4;

        if &tag == IEND {
            break;
        }
    }

    check_layout(&chunks, &mut report);

    if offset < data.len() && chunks.last().is_some_and(|c| &c.tag == IEND) {
        report.errors.push(PngFormatError::TrailingData {
            bytes: data.len() - offset,
        });
    }

    report.valid = report.errors.is_empty();
    report
}

fn check_layout(chunks: &[RawChunk<'_>], report: &mut PngReport) {
    match chunks.first() {
        Some(first) if &first.tag == IHDR => check_header(first.payload, report),
        _ => report.errors.push(PngFormatError::MissingHeader),
    }

    if !chunks.iter().any(|c| &c.tag == IDAT) {
        report.errors.push(PngFormatError::MissingImageData);
    }

    match chunks.last() {
        Some(last) if &last.tag == IEND => {
            if !last.payload.is_empty() {
                report.errors.push(PngFormatError::NonEmptyEnd {
                    length: last.payload.len(),
                });
            }
        }
        _ => report.errors.push(PngFormatError::MissingEnd),
    }
}

fn check_header(payload: &[u8], report: &mut PngReport) {
    if payload.len() != IHDR_LEN {
        report.errors.push(PngFormatError::InvalidHeaderLength {
            length: payload.len(),
        });
        return;
    }

    let width = read_u32(payload, 0);
    let height = read_u32(payload, 4);
    report.width = Some(width);
    report.height = Some(height);
    if width == 0 || height == 0 {
        report
            .errors
            .push(PngFormatError::InvalidDimensions { width, height });
    }

    let (bit_depth, color_type, compression, filter, interlace) =
        (payload[8], payload[9], payload[10], payload[11], payload[12]);
    if bit_depth != BIT_DEPTH
        || color_type != COLOR_TYPE_RGBA
        || compression != 0
        || filter != 0
        || interlace != 0
    {
        report.errors.push(PngFormatError::UnsupportedFormat {
            bit_depth,
            color_type,
            compression,
            filter,
            interlace,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::color::Rgba;
    use crate::png::{encode, write_chunk};

    fn sample() -> Vec<u8> {
        let canvas = Canvas::new(6, 4, Rgba::rgb(10, 12, 18)).unwrap();
        encode(&canvas).unwrap()
    }

    #[test]
    fn test_encoded_file_is_valid() {
        let report = validate_png(&sample());
        assert!(report.valid, "errors: {:?}", report.errors);
        assert_eq!(report.width, Some(6));
        assert_eq!(report.height, Some(4));
        assert_eq!(report.chunks, vec!["IHDR", "IDAT", "IEND"]);
    }

    #[test]
    fn test_bad_signature() {
        let mut data = sample();
        data[1] = b'X';
        let report = validate_png(&data);
        assert!(!report.valid);
        assert!(matches!(
            report.errors[0],
            PngFormatError::InvalidSignature { .. }
        ));
    }

    #[test]
    fn test_too_small() {
        let report = validate_png(&[0x89, b'P']);
        assert_eq!(report.errors, vec![PngFormatError::FileTooSmall { size: 2 }]);
    }

    #[test]
    fn test_corrupt_payload_fails_crc() {
        let mut data = sample();
        // First IHDR payload byte.
        data[16] ^= 0xFF;
        let report = validate_png(&data);
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, PngFormatError::CrcMismatch { tag, .. } if tag == "IHDR")));
    }

    #[test]
    fn test_truncated_stream() {
        let data = sample();
        let report = validate_png(&data[..data.len() - 6]);
        assert!(!report.valid);
        assert!(report
            .errors
            .iter()
            .any(|e| matches!(e, PngFormatError::ChunkTruncated { .. })));
        assert!(report.errors.contains(&PngFormatError::MissingEnd));
    }

    #[test]
    fn test_trailing_bytes() {
        let mut data = sample();
        data.extend_from_slice(b"junk");
        let report = validate_png(&data);
        assert_eq!(report.errors, vec![PngFormatError::TrailingData { bytes: 4 }]);
    }

    #[test]
    fn test_wrong_color_type() {
        let mut data = PNG_SIGNATURE.to_vec();
        write_chunk(&mut data, IHDR, &[0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0]).unwrap();
        write_chunk(&mut data, IDAT, &[]).unwrap();
        write_chunk(&mut data, IEND, &[]).unwrap();
        let report = validate_png(&data);
        assert!(matches!(
            report.errors.as_slice(),
            [PngFormatError::UnsupportedFormat { color_type: 2, .. }]
        ));
    }

    #[test]
    fn test_missing_idat() {
        let mut data = PNG_SIGNATURE.to_vec();
        write_chunk(&mut data, IHDR, &[0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0]).unwrap();
        write_chunk(&mut data, IEND, &[]).unwrap();
        let report = validate_png(&data);
        assert_eq!(report.errors, vec![PngFormatError::MissingImageData]);
    }

    #[test]
    fn test_error_display() {
        let err = PngFormatError::InvalidHeaderLength { length: 12 };
        assert_eq!(err.to_string(), "Invalid IHDR length: 12 (expected 13)");
    }
}
