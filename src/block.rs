//! Typed buffers exchanged with the codec.
//!
//! [`Block`] is a run of one to five raw bytes, tagged by its length so that
//! every legal shape is a distinct variant. [`Quintets`] is the fixed-size
//! buffer produced by encoding a block.

use std::ops::Deref;

use crate::shape::{BlockShape, FULL_BLOCK_BYTES, FULL_BLOCK_QUINTETS};

/// A run of one to five raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    One(u8),
    Two(u8, u8),
    Three(u8, u8, u8),
    Four(u8, u8, u8, u8),
    Five(u8, u8, u8, u8, u8),
}

impl Block {
    /// Builds a block from a slice of one to five bytes.
    ///
    /// # Returns
    /// `None` if `bytes` is empty or longer than five bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use base32_quintets::Block;
    ///
    /// assert_eq!(Block::from_slice(b"ab"), Some(Block::Two(b'a', b'b')));
    /// assert_eq!(Block::from_slice(b"abcdef"), None);
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [b0] => Some(Block::One(b0)),
            [b0, b1] => Some(Block::Two(b0, b1)),
            [b0, b1, b2] => Some(Block::Three(b0, b1, b2)),
            [b0, b1, b2, b3] => Some(Block::Four(b0, b1, b2, b3)),
            [b0, b1, b2, b3, b4] => Some(Block::Five(b0, b1, b2, b3, b4)),
            _ => None,
        }
    }

    /// Returns the shape of this block.
    pub fn shape(&self) -> BlockShape {
        match self {
            Block::One(..) => BlockShape::One,
            Block::Two(..) => BlockShape::Two,
            Block::Three(..) => BlockShape::Three,
            Block::Four(..) => BlockShape::Four,
            Block::Five(..) => BlockShape::Five,
        }
    }

    /// Number of bytes in the block (1..=5).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.shape().byte_len()
    }

    /// Returns the bytes zero-filled to a full period, with the meaningful length.
    pub fn to_array(&self) -> ([u8; FULL_BLOCK_BYTES], usize) {
        let bytes = match *self {
            Block::One(b0) => [b0, 0, 0, 0, 0],
            Block::Two(b0, b1) => [b0, b1, 0, 0, 0],
            Block::Three(b0, b1, b2) => [b0, b1, b2, 0, 0],
            Block::Four(b0, b1, b2, b3) => [b0, b1, b2, b3, 0],
            Block::Five(b0, b1, b2, b3, b4) => [b0, b1, b2, b3, b4],
        };
        (bytes, self.len())
    }

    /// Returns the bytes of the block as a vector.
    pub fn to_vec(&self) -> Vec<u8> {
        let (bytes, len) = self.to_array();
        bytes[..len].to_vec()
    }

    /// Appends the bytes of the block to `out`.
    pub fn extend_into(&self, out: &mut Vec<u8>) {
        let (bytes, len) = self.to_array();
        out.extend_from_slice(&bytes[..len]);
    }
}

impl From<u8> for Block {
    fn from(b0: u8) -> Self {
        Block::One(b0)
    }
}

impl From<[u8; 1]> for Block {
    fn from([b0]: [u8; 1]) -> Self {
        Block::One(b0)
    }
}

impl From<[u8; 2]> for Block {
    fn from([b0, b1]: [u8; 2]) -> Self {
        Block::Two(b0, b1)
    }
}

impl From<[u8; 3]> for Block {
    fn from([b0, b1, b2]: [u8; 3]) -> Self {
        Block::Three(b0, b1, b2)
    }
}

impl From<[u8; 4]> for Block {
    fn from([b0, b1, b2, b3]: [u8; 4]) -> Self {
        Block::Four(b0, b1, b2, b3)
    }
}

impl From<[u8; 5]> for Block {
    fn from([b0, b1, b2, b3, b4]: [u8; 5]) -> Self {
        Block::Five(b0, b1, b2, b3, b4)
    }
}

/// The quintets produced by encoding one [`Block`].
///
/// Only the first [`len`](Self::len) cells are meaningful; the rest are zero.
/// Every cell is below 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quintets {
    shape: BlockShape,
    values: [u8; FULL_BLOCK_QUINTETS],
}

impl Quintets {
    /// Wraps a full period of quintets, zeroing cells beyond the shape.
    pub(crate) fn new(shape: BlockShape, mut values: [u8; FULL_BLOCK_QUINTETS]) -> Self {
        values[shape.quintet_len()..].fill(0);
        Quintets { shape, values }
    }

    /// Returns the shape of the encoded block.
    pub fn shape(&self) -> BlockShape {
        self.shape
    }

    /// Number of meaningful quintets (2, 4, 5, 7 or 8).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.shape.quintet_len()
    }

    /// Returns the meaningful quintets.
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len()]
    }
}

impl Deref for Quintets {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Quintets {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
