/*! A pure Rust implementation of a FastLZ-family byte-oriented compression codec.

Level 1 is the only encoding implemented. Level 1 and level 2 are both decodable, since a
frame's header carries the level it was encoded with and a conforming decoder has to handle
either.

# Examples
```
use fastlz_flex::{compress, decompress};
let input: &[u8] = b"Hello people, what's up?";
let compressed = compress(input, 1).unwrap();
let uncompressed = decompress(&compressed).unwrap();
assert_eq!(input, uncompressed);
```

# Feature flags
There are two feature flags: `std` and `checked-decode`, both enabled by default.

`checked-decode` adds bounds checks to every token read and overlap-copy window during
decoding, turning a truncated or corrupt frame into a typed error instead of an out-of-bounds
access. Disabling it trusts the frame header's declared length and trades that safety margin
for fewer bounds checks on the decode path.

`std` pulls in `std::error::Error` impls for the error types; without it the crate is
`no_std` (it still requires `alloc` for its `Vec<u8>`-returning APIs).
*/
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
pub mod block;
pub mod frame;
mod sink;


pub use error::{CompressError, DecompressError};
pub use frame::{compress, compress_into, decompress, decompress_into};
