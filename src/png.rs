//! Minimal PNG writer: 8-bit truecolor with alpha, no filtering, no interlacing.
//!
//! Output is a signature followed by `IHDR`, the zlib-compressed scanlines in `IDAT`
//! and an empty `IEND`. Nothing else is emitted.

use crate::error::{IconError, IconResult};
use flate2::{write::ZlibEncoder, Compression};
use image::Rgba;
use std::io::Write;

/// PNG file signature (magic bytes).
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// Largest payload a single chunk may carry.
const MAX_CHUNK_LEN: usize = (1 << 31) - 1;

/// Encode a row-major RGBA buffer as a PNG file.
///
/// `pixels` must hold exactly `width * height` entries and both sides must be non-zero;
/// both are checked before any compression happens.
#[tracing::instrument(skip(pixels), fields(pixels = pixels.len()))]
pub fn encode(width: u32, height: u32, pixels: &[Rgba<u8>]) -> IconResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(IconError::InvalidDimension { width, height });
    }

    let expected = (width as usize)
        .checked_mul(height as usize)
        .unwrap_or(usize::MAX);
    if pixels.len() != expected {
        return Err(IconError::BufferLengthMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let raw = scanlines(width, pixels);
    let compressed = compress(&raw)?;
    tracing::debug!(
        raw = raw.len(),
        compressed = compressed.len(),
        "compressed scanlines"
    );

    let mut png = Vec::with_capacity(compressed.len() + 64);
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &header(width, height));
    for block in compressed.chunks(MAX_CHUNK_LEN) {
        write_chunk(&mut png, b"IDAT", block);
    }
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Append one chunk: length, tag, payload, then the CRC-32 of tag and payload.
pub fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&chunk_crc(tag, payload).to_be_bytes());
}

/// CRC-32 over a chunk's tag followed by its payload.
pub fn chunk_crc(tag: &[u8; 4], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(payload);
    hasher.finalize()
}

fn header(width: u32, height: u32) -> [u8; 13] {
    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = BIT_DEPTH;
    ihdr[9] = COLOR_TYPE_RGBA;
    // compression, filter and interlace methods stay 0
    ihdr
}

/// Each row gets a leading filter byte (none) followed by its raw RGBA bytes.
fn scanlines(width: u32, pixels: &[Rgba<u8>]) -> Vec<u8> {
    let width = width as usize;
    let rows = pixels.len() / width;
    let mut raw = Vec::with_capacity(rows * (1 + width * 4));
    for row in pixels.chunks_exact(width) {
        raw.push(FILTER_NONE);
        for pixel in row {
            raw.extend_from_slice(&pixel.0);
        }
    }
    raw
}

fn compress(raw: &[u8]) -> IconResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 2), Compression::best());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}
