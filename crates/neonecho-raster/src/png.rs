//! Deterministic PNG encoder.
//!
//! Writes 8-bit RGBA truecolor images as signature, `IHDR`, one `IDAT` and
//! `IEND`. Scanlines are stored unfiltered (filter type 0) and the stream is
//! zlib-compressed at a fixed level, so the same canvas always produces the
//! same bytes.

use crate::canvas::Canvas;
use crate::error::{check_dimensions, RasterError};

/// PNG file signature.
pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Header chunk tag.
pub const IHDR: &[u8; 4] = b"IHDR";

/// Image data chunk tag.
pub const IDAT: &[u8; 4] = b"IDAT";

/// End chunk tag.
pub const IEND: &[u8; 4] = b"IEND";

/// Size of the `IHDR` payload.
pub const IHDR_LEN: usize = 13;

/// Bits per channel.
pub const BIT_DEPTH: u8 = 8;

/// Color type 6: truecolor with alpha.
pub const COLOR_TYPE_RGBA: u8 = 6;

/// Per-scanline filter byte ("None").
pub const FILTER_NONE: u8 = 0;

/// zlib level used for `IDAT`. Fixed for byte-identical output.
pub const COMPRESSION_LEVEL: u8 = 9;

/// Largest payload a single chunk may carry (2^31 - 1 bytes).
pub const MAX_CHUNK_LEN: usize = i32::MAX as usize;

/// Encode a canvas as a PNG byte stream.
///
/// Fails if the compressed image data does not fit in one chunk.
pub fn encode(canvas: &Canvas) -> Result<Vec<u8>, RasterError> {
    let (width, height) = (canvas.width(), canvas.height());
    check_dimensions(width, height)?;

    let raw = scanlines(canvas);
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, COMPRESSION_LEVEL);

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + IHDR_LEN + compressed.len());
    out.extend_from_slice(PNG_SIGNATURE);
    write_chunk(&mut out, IHDR, &header_payload(width, height))?;
    write_chunk(&mut out, IDAT, &compressed)?;
    write_chunk(&mut out, IEND, &[])?;
    Ok(out)
}

/// Build the 13-byte `IHDR` payload.
pub fn header_payload(width: u32, height: u32) -> [u8; IHDR_LEN] {
    let mut payload = [0u8; IHDR_LEN];
    payload[0..4].copy_from_slice(&width.to_be_bytes());
    payload[4..8].copy_from_slice(&height.to_be_bytes());
    payload[8] = BIT_DEPTH;
    payload[9] = COLOR_TYPE_RGBA;
    payload[10] = 0; // compression method
    payload[11] = 0; // filter method
    payload[12] = 0; // interlace method
    payload
}

/// Raw image stream: each row is a filter byte followed by `width * 4` bytes.
pub fn scanlines(canvas: &Canvas) -> Vec<u8> {
    let row_len = canvas.width() as usize * 4 + 1;
    let mut raw = Vec::with_capacity(row_len * canvas.height() as usize);
    for row in canvas.rows() {
        raw.push(FILTER_NONE);
        for px in row {
            raw.extend_from_slice(&px.to_array());
        }
    }
    raw
}

/// Write one chunk: length, tag, payload, CRC-32 over tag and payload.
///
/// Fails without touching `out` if the payload is longer than
/// [`MAX_CHUNK_LEN`].
pub fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) -> Result<(), RasterError> {
    let len = chunk_length(tag, payload.len())?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&chunk_crc(tag, payload).to_be_bytes());
    Ok(())
}

/// Value of a chunk's length field for a payload of `len` bytes.
pub fn chunk_length(tag: &[u8; 4], len: usize) -> Result<u32, RasterError> {
    u32::try_from(len)
        .ok()
        .filter(|&n| n as usize <= MAX_CHUNK_LEN)
        .ok_or_else(|| RasterError::ChunkTooLarge {
            tag: String::from_utf8_lossy(tag).into_owned(),
            len,
        })
}

/// CRC-32 (IEEE) of a chunk's tag followed by its payload.
pub fn chunk_crc(tag: &[u8; 4], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(payload);
    hasher.finalize()
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
