/*!

Block-level codec: the opcode stream described by the frame header (see [`crate::frame`]).

```text
Opcode (level 1)
  type 000          : literal run,  1 + L bytes,  L = opcode0 & 0x1F
  type 001..110     : short match,  2 bytes,       length = type + 2
  type 111          : long match,   3 bytes,       length = 9 + opcode1
```

A token's type is always the top 3 bits of its first byte; `opcode0 < 0x20` identifies a
literal run, anything else a match.
*/

pub mod compress;
pub mod decompress;

pub use compress::{compress, compress_into};
pub use decompress::{decompress_level1, decompress_level2};

/// Minimum length of a match the encoder will emit.
pub(crate) const MIN_MATCH: usize = 3;
/// Maximum length of a single match token (`9 + 255`).
pub(crate) const MAX_MATCH: usize = 264;
/// Maximum 1-based backward distance a level 1 match can encode (13 bits).
pub(crate) const MAX_DISTANCE: usize = 8191;
/// Maximum number of bytes a single literal-run token can carry.
pub(crate) const MAX_LITERAL_RUN: usize = 32;

/// Splits an opcode byte into its 3-bit type and 5-bit data field.
#[inline]
pub(crate) fn split_opcode(opcode: u8) -> (u8, u8) {
    (opcode >> 5, opcode & 0x1F)
}
