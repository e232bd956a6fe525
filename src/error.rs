//! Error types for the quintet block codec.

use std::fmt;

/// Errors produced while decoding a block of quintets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base32Error {
    /// Quintet count is not one of the legal block shapes (2, 4, 5, 7 or 8).
    IncompleteBlock,
    /// Final quintet of a partial block has bits set outside its used range.
    StrayBits,
}

impl fmt::Display for Base32Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base32Error::IncompleteBlock => {
                write!(f, "Quintet count does not form a complete block")
            }
            Base32Error::StrayBits => {
                write!(f, "Final quintet has non-zero stray bits")
            }
        }
    }
}

impl std::error::Error for Base32Error {}
