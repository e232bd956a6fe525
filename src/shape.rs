//! Canonical table of legal block shapes.
//!
//! The 8-bit / 5-bit alignment cycle admits exactly five block shapes. Both
//! directions look their counts up here so that encoder and decoder can never
//! disagree about how many quintets a run of bytes occupies.

/// Bits carried by a single quintet.
const QUINTET_BITS: u32 = 5;

/// Bytes in a full alignment period.
pub const FULL_BLOCK_BYTES: usize = 5;

/// Quintets in a full alignment period.
pub const FULL_BLOCK_QUINTETS: usize = 8;

/// One row of the shape table.
#[derive(Clone, Copy)]
struct ShapeRow {
    bytes: usize,
    quintets: usize,
    used_bits: u32,
    stray_mask: u8,
}

/// Rows indexed by `BlockShape as usize`.
const SHAPE_TABLE: [ShapeRow; 5] = [
    ShapeRow {
        bytes: 1,
        quintets: 2,
        used_bits: 3,
        stray_mask: 0b0_0011,
    },
    ShapeRow {
        bytes: 2,
        quintets: 4,
        used_bits: 1,
        stray_mask: 0b0_1111,
    },
    ShapeRow {
        bytes: 3,
        quintets: 5,
        used_bits: 4,
        stray_mask: 0b0_0001,
    },
    ShapeRow {
        bytes: 4,
        quintets: 7,
        used_bits: 2,
        stray_mask: 0b0_0111,
    },
    ShapeRow {
        bytes: 5,
        quintets: 8,
        used_bits: 5,
        stray_mask: 0b0_0000,
    },
];

/// The five legal pairings of byte count and quintet count.
///
/// | shape   | bytes | quintets | stray mask |
/// |---------|-------|----------|------------|
/// | `One`   | 1     | 2        | `0b00011`  |
/// | `Two`   | 2     | 4        | `0b01111`  |
/// | `Three` | 3     | 5        | `0b00001`  |
/// | `Four`  | 4     | 7        | `0b00111`  |
/// | `Five`  | 5     | 8        | none       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockShape {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
}

impl BlockShape {
    /// Every shape, ordered by byte count.
    pub const ALL: [BlockShape; 5] = [
        BlockShape::One,
        BlockShape::Two,
        BlockShape::Three,
        BlockShape::Four,
        BlockShape::Five,
    ];

    const fn row(self) -> ShapeRow {
        SHAPE_TABLE[self as usize]
    }

    /// Number of raw bytes in a block of this shape.
    pub const fn byte_len(self) -> usize {
        self.row().bytes
    }

    /// Number of quintets in a block of this shape.
    pub const fn quintet_len(self) -> usize {
        self.row().quintets
    }

    /// Number of significant bits carried by the final quintet.
    pub const fn used_bits(self) -> u32 {
        self.row().used_bits
    }

    /// Low-order bits of the final quintet that must be zero.
    pub const fn stray_mask(self) -> u8 {
        self.row().stray_mask
    }

    /// Returns `true` if the final quintet is only partially used.
    pub const fn is_partial(self) -> bool {
        self.stray_mask() != 0
    }

    /// Looks up the shape holding `len` bytes (1..=5).
    ///
    /// # Examples
    ///
    /// ```
    /// use base32_quintets::BlockShape;
    ///
    /// assert_eq!(BlockShape::from_byte_len(3), Some(BlockShape::Three));
    /// assert_eq!(BlockShape::from_byte_len(6), None);
    /// ```
    pub fn from_byte_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.byte_len() == len)
    }

    /// Looks up the shape spanning `len` quintets (2, 4, 5, 7 or 8).
    ///
    /// # Examples
    ///
    /// ```
    /// use base32_quintets::BlockShape;
    ///
    /// assert_eq!(BlockShape::from_quintet_len(7), Some(BlockShape::Four));
    /// assert_eq!(BlockShape::from_quintet_len(3), None);
    /// ```
    pub fn from_quintet_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.quintet_len() == len)
    }
}

/// Total number of quintets needed to encode `byte_count` bytes.
///
/// Returns `None` if the count does not fit in a `usize`.
///
/// # Examples
///
/// ```
/// use base32_quintets::encoded_len;
///
/// assert_eq!(encoded_len(0), Some(0));
/// assert_eq!(encoded_len(6), Some(10));
/// assert_eq!(encoded_len(usize::MAX), None);
/// ```
pub fn encoded_len(byte_count: usize) -> Option<usize> {
    let tail = match byte_count % FULL_BLOCK_BYTES {
        0 => 0,
        rem => BlockShape::from_byte_len(rem)?.quintet_len(),
    };
    (byte_count / FULL_BLOCK_BYTES)
        .checked_mul(FULL_BLOCK_QUINTETS)?
        .checked_add(tail)
}

/// Total number of bytes carried by `quintet_count` quintets.
///
/// Returns `None` if the trailing partial block is not a legal shape.
pub fn decoded_len(quintet_count: usize) -> Option<usize> {
    let full = (quintet_count / FULL_BLOCK_QUINTETS) * FULL_BLOCK_BYTES;
    match quintet_count % FULL_BLOCK_QUINTETS {
        0 => Some(full),
        tail => BlockShape::from_quintet_len(tail).map(|shape| full + shape.byte_len()),
    }
}
