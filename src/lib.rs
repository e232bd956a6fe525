//! Bit-level block transcoding between bytes and 5-bit quintets.
//!
//! This crate is the bit-packing engine underneath a Base32 codec. It turns a
//! block of one to five raw bytes into two to eight quintets (values `0..32`)
//! and back, validating on the way back that no information was lost.
//! Mapping quintets to printable characters, padding and chunking a longer
//! message into blocks are left to the caller.
//!
//! # Block shapes
//!
//! ```text
//! bytes    1  2  3  4  5
//! quintets 2  4  5  7  8
//! ```
//!
//! Five bytes and eight quintets both span 40 bits, one full alignment
//! period. Shorter blocks only occur at the tail of a message; their final
//! quintet is zero-filled in its low bits, and the decoder rejects any
//! block where those bits are set.
//!
//! # Examples
//!
//! Encode and decode a full block:
//!
//! ```
//! use base32_quintets::{decode_block, encode_block, Block};
//!
//! let block = Block::from(*b"abcde");
//! let quintets = encode_block(&block);
//! assert_eq!(quintets.len(), 8);
//!
//! let decoded = decode_block(&quintets).unwrap();
//! assert_eq!(decoded, block);
//! ```
//!
//! Chunk a longer message the way a Base32 layer would:
//!
//! ```
//! use base32_quintets::{decode_block, encode_block, encoded_len, Block};
//!
//! let message = b"hello, quintets";
//! let mut quintets: Vec<u8> = Vec::with_capacity(encoded_len(message.len()).unwrap());
//! for chunk in message.chunks(5) {
//!     let block = Block::from_slice(chunk).unwrap();
//!     quintets.extend_from_slice(&encode_block(&block));
//! }
//!
//! let mut bytes = Vec::new();
//! for chunk in quintets.chunks(8) {
//!     decode_block(chunk).unwrap().extend_into(&mut bytes);
//! }
//! assert_eq!(bytes, message);
//! ```

#![deny(clippy::all)]

pub mod error;

mod block;
mod decode;
mod encode;
mod shape;
pub(crate) mod utils;

pub use block::{Block, Quintets};
pub use decode::decode_block;
pub use encode::encode_block;
pub use error::Base32Error;
pub use shape::{decoded_len, encoded_len, BlockShape, FULL_BLOCK_BYTES, FULL_BLOCK_QUINTETS};
