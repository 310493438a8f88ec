//! # Universal Machine Specification
//!
//! Core definitions for the UM-32 instruction set: a 32-bit register machine
//! with 8 general-purpose registers, 14 opcodes, and segmented memory.
//!
//! ## Key Features
//! - 32-bit words, used both as instructions and as segment contents
//! - 4-bit opcode in the most-significant bits of each instruction word
//! - Three 3-bit register selectors (load-value carries a 25-bit immediate)
//! - Boot images are big-endian 32-bit word streams

pub mod encoding;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

pub use encoding::{decode, encode};
pub use error::SpecError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;
pub use register::{Register, NUM_REGISTERS};

/// Machine word: an unsigned 32-bit value.
pub type Word = u32;

/// Value stored by the IN operation when the input stream is exhausted.
pub const END_OF_INPUT: Word = 0xFFFF_FFFF;

/// Number of defined opcodes (0..=13).
pub const NUM_OPCODES: usize = 14;
