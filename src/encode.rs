//! Encoder: bytes to quintets.

use crate::block::{Block, Quintets};
use crate::utils::bits::{
    eighth_quintet, fifth_quintet, first_quintet, fourth_quintet, second_quintet, seventh_quintet,
    sixth_quintet, third_quintet,
};

/// Encodes one block of bytes into its quintets.
///
/// Every byte pattern of every block length is encodable, so this never
/// fails. Bytes past the end of a short block read as zero, which leaves the
/// unused low bits of the final quintet clear.
///
/// # Examples
///
/// ```
/// use base32_quintets::{encode_block, Block};
///
/// let q = encode_block(&Block::One(0xFF));
/// assert_eq!(q.as_slice(), &[31, 28]);
/// ```
pub fn encode_block(block: &Block) -> Quintets {
    let ([b0, b1, b2, b3, b4], _) = block.to_array();
    let values = [
        first_quintet(b0),
        second_quintet(b0, b1),
        third_quintet(b1),
        fourth_quintet(b1, b2),
        fifth_quintet(b2, b3),
        sixth_quintet(b3),
        seventh_quintet(b3, b4),
        eighth_quintet(b4),
    ];
    Quintets::new(block.shape(), values)
}
