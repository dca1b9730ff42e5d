use core::fmt;

/// An error produced by [`compress`](crate::compress) or [`block::compress`](crate::block::compress).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressError {
    /// `level` was neither 1 nor 2.
    InvalidLevel { level: u8 },
    /// `level` was 2. Level 2 encoding is not implemented by this codec, only level 2 decoding.
    Level2Unsupported,
}

impl fmt::Display for CompressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompressError::InvalidLevel { level } => {
                write!(f, "compression level must be 1 or 2, got {level}")
            }
            CompressError::Level2Unsupported => {
                f.write_str("level 2 compression is not implemented")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CompressError {}

/// An error representing invalid or truncated compressed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The frame is shorter than the 4-byte length header.
    NoHeaderLen,
    /// The declared uncompressed length is wildly out of proportion to the frame size.
    BadHeaderLen { declared: u32, frame_len: usize },
    /// The level tag in byte 4 of the frame is neither 0 (level 1) nor 1 (level 2).
    UnknownLevel(u8),
    /// A token field (opcode byte, length byte, or offset byte) ran past the end of the
    /// opcode stream.
    ExpectedAnotherByte,
    /// A literal run would read past the end of the opcode stream.
    LiteralOutOfBounds,
    /// A match's backward distance reaches before the start of the output buffer.
    OffsetOutOfBounds,
    /// The decoder produced a different number of bytes than the header declared.
    UncompressedSizeDiffers { expected: usize, actual: usize },
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecompressError::NoHeaderLen => f.write_str("no header length present"),
            DecompressError::BadHeaderLen {
                declared,
                frame_len,
            } => write!(
                f,
                "bad header length: declared {declared} bytes uncompressed, frame is only {frame_len} bytes"
            ),
            DecompressError::UnknownLevel(level) => {
                write!(f, "unknown compression level ({level})")
            }
            DecompressError::ExpectedAnotherByte => {
                f.write_str("unexpected end of compressed stream")
            }
            DecompressError::LiteralOutOfBounds => {
                f.write_str("literal run is out of bounds of the compressed stream")
            }
            DecompressError::OffsetOutOfBounds => {
                f.write_str("match offset out of bounds of the decompressed output")
            }
            DecompressError::UncompressedSizeDiffers { expected, actual } => write!(
                f,
                "decompressed size differs from header: expected {expected}, got {actual}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecompressError {}
