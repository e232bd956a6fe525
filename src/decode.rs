//! Decoder: quintets to bytes.
//!
//! Decoding dispatches on the quintet count through the shape table, rejects
//! counts that are not a legal shape, and rejects partial blocks whose final
//! quintet carries bits the encoder could never have produced.

use crate::block::Block;
use crate::error::Base32Error;
use crate::shape::{BlockShape, FULL_BLOCK_QUINTETS};
use crate::utils::bits::{fifth_byte, first_byte, fourth_byte, second_byte, third_byte};

/// Decodes one block of quintets back into its bytes.
///
/// `quintets` holds values already mapped from the alphabet. Only the low five
/// bits of each cell are read.
///
/// # Errors
/// - [`Base32Error::IncompleteBlock`] if `quintets.len()` is not 2, 4, 5, 7 or 8.
/// - [`Base32Error::StrayBits`] if the final quintet of a partial block has
///   bits set outside its used range.
///
/// # Examples
///
/// ```
/// use base32_quintets::{decode_block, Base32Error, Block};
///
/// assert_eq!(decode_block(&[31, 28]), Ok(Block::One(0xFF)));
/// assert_eq!(decode_block(&[31, 29]), Err(Base32Error::StrayBits));
/// assert_eq!(decode_block(&[31, 28, 0]), Err(Base32Error::IncompleteBlock));
/// ```
pub fn decode_block(quintets: &[u8]) -> Result<Block, Base32Error> {
    let shape = BlockShape::from_quintet_len(quintets.len()).ok_or(Base32Error::IncompleteBlock)?;
    check_stray_bits(shape, quintets[shape.quintet_len() - 1])?;

    let mut q = [0u8; FULL_BLOCK_QUINTETS];
    q[..quintets.len()].copy_from_slice(quintets);

    let block = match shape {
        BlockShape::One => Block::One(first_byte(q[0], q[1])),
        BlockShape::Two => Block::Two(first_byte(q[0], q[1]), second_byte(q[1], q[2], q[3])),
        BlockShape::Three => Block::Three(
            first_byte(q[0], q[1]),
            second_byte(q[1], q[2], q[3]),
            third_byte(q[3], q[4]),
        ),
        BlockShape::Four => Block::Four(
            first_byte(q[0], q[1]),
            second_byte(q[1], q[2], q[3]),
            third_byte(q[3], q[4]),
            fourth_byte(q[4], q[5], q[6]),
        ),
        BlockShape::Five => Block::Five(
            first_byte(q[0], q[1]),
            second_byte(q[1], q[2], q[3]),
            third_byte(q[3], q[4]),
            fourth_byte(q[4], q[5], q[6]),
            fifth_byte(q[6], q[7]),
        ),
    };
    Ok(block)
}

/// Verifies that the unused low bits of the final quintet are clear.
///
/// Applied to every shape; the full shape has an empty mask and always passes.
fn check_stray_bits(shape: BlockShape, last: u8) -> Result<(), Base32Error> {
    if last & shape.stray_mask() != 0 {
        return Err(Base32Error::StrayBits);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_byte() {
        assert_eq!(decode_block(&[31, 28]), Ok(Block::One(0xFF)));
        assert_eq!(decode_block(&[0, 0]), Ok(Block::One(0x00)));
    }

    #[test]
    fn test_decode_abcde() {
        let block = decode_block(&[12, 5, 17, 6, 6, 25, 3, 5]).unwrap();
        assert_eq!(block.to_vec(), b"abcde");
    }

    #[test]
    fn test_decode_rejects_illegal_counts() {
        let cells = [0u8; 16];
        for len in [0, 1, 3, 6, 9, 10, 16] {
            assert_eq!(
                decode_block(&cells[..len]),
                Err(Base32Error::IncompleteBlock),
                "len={}",
                len
            );
        }
    }

    #[test]
    fn test_decode_rejects_every_stray_bit() {
        for shape in BlockShape::ALL {
            let mut cells = vec![0u8; shape.quintet_len()];
            for bit in 0..5 {
                let flag = 1u8 << bit;
                *cells.last_mut().unwrap() = flag;
                let result = decode_block(&cells);
                if shape.stray_mask() & flag != 0 {
                    assert_eq!(
                        result,
                        Err(Base32Error::StrayBits),
                        "{:?} bit={}",
                        shape,
                        bit
                    );
                } else {
                    assert!(result.is_ok(), "{:?} bit={}", shape, bit);
                }
            }
        }
    }

    #[test]
    fn test_check_stray_bits_only_reports_stray_bits() {
        for shape in BlockShape::ALL {
            for last in 0..32u8 {
                let expected = if last & shape.stray_mask() == 0 {
                    Ok(())
                } else {
                    Err(Base32Error::StrayBits)
                };
                assert_eq!(
                    check_stray_bits(shape, last),
                    expected,
                    "{:?} last={}",
                    shape,
                    last
                );
            }
        }
    }

    #[test]
    fn test_decode_ignores_high_bits_of_cells() {
        assert_eq!(decode_block(&[0xFF, 0xFC]), Ok(Block::One(0xFF)));
        assert_eq!(decode_block(&[0xE0; 8]), Ok(Block::Five(0, 0, 0, 0, 0)));
    }

    #[test]
    fn test_decode_failure_is_repeatable() {
        let bad = [1u8, 2, 3];
        assert_eq!(decode_block(&bad), decode_block(&bad));
        let stray = [4u8, 1, 0, 1];
        assert_eq!(decode_block(&stray), Err(Base32Error::StrayBits));
        assert_eq!(decode_block(&stray), Err(Base32Error::StrayBits));
    }
}
