//! # Error Types for the UM Specification

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    // Instruction errors
    #[error("Invalid opcode: {0:#x} (defined range: 0-13)")]
    InvalidOpcode(u8),

    // Boot image errors
    #[error("Truncated boot image: {len} bytes is not a multiple of 4")]
    TruncatedImage { len: usize },
}
