//! Bit-slice primitives for the 8-bit / 5-bit alignment cycle.
//!
//! A full alignment period is 40 bits: five bytes or eight quintets. Each
//! quintet is a fixed slice of one or two adjacent bytes, and each byte is a
//! fixed concatenation of slices from two or three adjacent quintets. These
//! slice positions are the compatibility surface of standard Base32.

/// Mask selecting the five significant bits of a quintet cell.
pub(crate) const QUINTET_MASK: u8 = 0b0001_1111;

/// Bits 7–3 of `b0`.
pub(crate) const fn first_quintet(b0: u8) -> u8 {
    (b0 & 0b1111_1000) >> 3
}

/// Bits 2–0 of `b0` followed by bits 7–6 of `b1`.
pub(crate) const fn second_quintet(b0: u8, b1: u8) -> u8 {
    ((b0 & 0b0000_0111) << 2) | ((b1 & 0b1100_0000) >> 6)
}

/// Bits 5–1 of `b1`.
pub(crate) const fn third_quintet(b1: u8) -> u8 {
    (b1 & 0b0011_1110) >> 1
}

/// Bit 0 of `b1` followed by bits 7–4 of `b2`.
pub(crate) const fn fourth_quintet(b1: u8, b2: u8) -> u8 {
    ((b1 & 0b0000_0001) << 4) | ((b2 & 0b1111_0000) >> 4)
}

/// Bits 3–0 of `b2` followed by bit 7 of `b3`.
pub(crate) const fn fifth_quintet(b2: u8, b3: u8) -> u8 {
    ((b2 & 0b0000_1111) << 1) | ((b3 & 0b1000_0000) >> 7)
}

/// Bits 6–2 of `b3`.
pub(crate) const fn sixth_quintet(b3: u8) -> u8 {
    (b3 & 0b0111_1100) >> 2
}

/// Bits 1–0 of `b3` followed by bits 7–5 of `b4`.
pub(crate) const fn seventh_quintet(b3: u8, b4: u8) -> u8 {
    ((b3 & 0b0000_0011) << 3) | ((b4 & 0b1110_0000) >> 5)
}

/// Bits 4–0 of `b4`.
pub(crate) const fn eighth_quintet(b4: u8) -> u8 {
    b4 & QUINTET_MASK
}

/// All of `q0` followed by the top three bits of `q1`.
pub(crate) const fn first_byte(q0: u8, q1: u8) -> u8 {
    ((q0 & QUINTET_MASK) << 3) | ((q1 & 0b1_1100) >> 2)
}

/// Low two bits of `q1`, all of `q2`, then the top bit of `q3`.
pub(crate) const fn second_byte(q1: u8, q2: u8, q3: u8) -> u8 {
    ((q1 & 0b0_0011) << 6) | ((q2 & QUINTET_MASK) << 1) | ((q3 & 0b1_0000) >> 4)
}

/// Low four bits of `q3` followed by the top four bits of `q4`.
pub(crate) const fn third_byte(q3: u8, q4: u8) -> u8 {
    ((q3 & 0b0_1111) << 4) | ((q4 & 0b1_1110) >> 1)
}

/// Low bit of `q4`, all of `q5`, then the top two bits of `q6`.
pub(crate) const fn fourth_byte(q4: u8, q5: u8, q6: u8) -> u8 {
    ((q4 & 0b0_0001) << 7) | ((q5 & QUINTET_MASK) << 2) | ((q6 & 0b1_1000) >> 3)
}

/// Low three bits of `q6` followed by all of `q7`.
pub(crate) const fn fifth_byte(q6: u8, q7: u8) -> u8 {
    ((q6 & 0b0_0111) << 5) | (q7 & QUINTET_MASK)
}
