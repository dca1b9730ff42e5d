//! The 5-byte frame header: a little-endian uncompressed length followed by a composite byte
//! that fuses the 3-bit level tag with the top bits of the block codec's first opcode.
//!
//! This is deliberately not an LZ4-style streaming frame format (magic number, content
//! checksum, multi-block chunking): this format has exactly one block and a fixed 5-byte
//! prefix, so there is nothing to chunk or dispatch beyond picking level 1 vs level 2.

use alloc::vec::Vec;

use crate::block;
use crate::error::{CompressError, DecompressError};

const HEADER_LEN: usize = 4;

/// Compresses `data` at the given `level` into a freshly allocated frame (header + opcode
/// stream). Only level 1 is supported for encoding; level 2 is a decode-only format (see
/// [`CompressError::Level2Unsupported`]).
pub fn compress(data: &[u8], level: u8) -> Result<Vec<u8>, CompressError> {
    let mut output = Vec::with_capacity(HEADER_LEN + 1 + data.len() + data.len() / 32 + 1);
    compress_into(data, level, &mut output)?;
    Ok(output)
}

/// Compresses `data` at the given `level`, appending the frame to `output`.
pub fn compress_into(data: &[u8], level: u8, output: &mut Vec<u8>) -> Result<(), CompressError> {
    match level {
        1 => {}
        2 => return Err(CompressError::Level2Unsupported),
        _ => return Err(CompressError::InvalidLevel { level }),
    }

    output.extend_from_slice(&(data.len() as u32).to_le_bytes());
    let body_start = output.len();
    block::compress_into(data, output);

    // level_tag is 0 for level 1, so ORing it into the first opcode byte is a no-op; this
    // mirrors the frame layout exactly so a future level 2 encoder only needs to change this
    // one line.
    if output.len() == body_start {
        output.push(0);
    } else {
        output[body_start] |= 0u8 << 5;
    }
    Ok(())
}

/// Decompresses a complete frame (header + opcode stream) produced by [`compress`].
pub fn decompress(frame: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let (declared_len, level_tag, body) = parse_header(frame)?;
    let mut output = alloc::vec![0u8; declared_len];
    decode_body(body, level_tag, &mut output)?;
    Ok(output)
}

/// Decompresses a complete frame into the caller-supplied `output`, which must be exactly the
/// length declared by the frame header.
pub fn decompress_into(frame: &[u8], output: &mut [u8]) -> Result<(), DecompressError> {
    let (declared_len, level_tag, body) = parse_header(frame)?;
    if declared_len != output.len() {
        return Err(DecompressError::UncompressedSizeDiffers {
            expected: declared_len,
            actual: output.len(),
        });
    }
    decode_body(body, level_tag, output)
}

/// Validates the 4-byte length prefix and returns `(declared_len, level_tag, body)`, where
/// `body` is `frame[4..]` — the opcode stream, including the composite byte at its head.
fn parse_header(frame: &[u8]) -> Result<(usize, u8, &[u8]), DecompressError> {
    if frame.len() < HEADER_LEN {
        return Err(DecompressError::NoHeaderLen);
    }
    let declared = u32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]);
    if declared as usize / 256 > frame.len() {
        return Err(DecompressError::BadHeaderLen {
            declared,
            frame_len: frame.len(),
        });
    }

    let body = &frame[HEADER_LEN..];
    let level_tag = *body.first().ok_or(DecompressError::ExpectedAnotherByte)? >> 5;
    Ok((declared as usize, level_tag, body))
}

fn decode_body(body: &[u8], level_tag: u8, output: &mut [u8]) -> Result<(), DecompressError> {
    match level_tag {
        0 => block::decompress::decompress_level1_into(body, output),
        1 => block::decompress::decompress_level2_into(body, output),
        other => Err(DecompressError::UnknownLevel(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_round_trips() {
        let frame = compress(b"", 1).unwrap();
        assert_eq!(frame, vec![0, 0, 0, 0, 0]);
        assert_eq!(decompress(&frame).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn single_byte_round_trips() {
        let frame = compress(b"A", 1).unwrap();
        assert_eq!(decompress(&frame).unwrap(), b"A");
    }

    #[test]
    fn repeated_pattern_round_trips() {
        let data = b"ABCD".repeat(250);
        let frame = compress(&data, 1).unwrap();
        assert_eq!(decompress(&frame).unwrap(), data);
    }

    #[test]
    fn invalid_level_is_rejected() {
        assert_eq!(
            compress(b"x", 0).unwrap_err(),
            CompressError::InvalidLevel { level: 0 }
        );
        assert_eq!(
            compress(b"x", 3).unwrap_err(),
            CompressError::InvalidLevel { level: 3 }
        );
    }

    #[test]
    fn level_2_encoding_is_rejected() {
        assert_eq!(
            compress(b"x", 2).unwrap_err(),
            CompressError::Level2Unsupported
        );
    }

    #[test]
    fn truncated_frame_is_rejected() {
        assert_eq!(
            decompress(b"abc").unwrap_err(),
            DecompressError::NoHeaderLen
        );
    }

    #[test]
    fn implausible_header_is_rejected() {
        let mut frame = Vec::new();
        frame.extend_from_slice(&1_000_000u32.to_le_bytes());
        frame.push(b'x');
        assert_eq!(
            decompress(&frame).unwrap_err(),
            DecompressError::BadHeaderLen {
                declared: 1_000_000,
                frame_len: frame.len(),
            }
        );
    }

    #[test]
    fn unknown_level_tag_is_rejected() {
        let mut frame = Vec::new();
        frame.extend_from_slice(&1u32.to_le_bytes());
        frame.push(0xFF); // top 3 bits = 0b111 = 7, not 0 or 1
        frame.push(b'z');
        assert_eq!(decompress(&frame).unwrap_err(), DecompressError::UnknownLevel(7));
    }
}
