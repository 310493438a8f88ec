//! Universal Machine Instruction Set
//!
//! 32-bit instructions with a 4-bit opcode in bits 31-28.
//!
//! ## Instruction Formats
//! - Three-register: [opcode:4][unused:19][a:3][b:3][c:3]
//! - Load-value:     [opcode:4][a:3][value:25]
//!
//! Register fields the operation does not consult (e.g. for HALT) are
//! dropped during decoding; each variant carries only the operands its
//! semantics read.

use crate::opcode::Opcode;
use crate::register::Register;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Universal Machine instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// CMOV: if c != 0 then a = b
    Cmov { a: Register, b: Register, c: Register },

    /// SLOAD: a = segment[b][c]
    Sload { a: Register, b: Register, c: Register },

    /// SSTORE: segment[a][b] = c
    Sstore { a: Register, b: Register, c: Register },

    /// ADD: a = (b + c) mod 2^32
    Add { a: Register, b: Register, c: Register },

    /// MUL: a = (b * c) mod 2^32
    Mul { a: Register, b: Register, c: Register },

    /// DIV: a = b / c (unsigned integer division)
    Div { a: Register, b: Register, c: Register },

    /// NAND: a = !(b & c)
    Nand { a: Register, b: Register, c: Register },

    /// HALT: stop execution and release all segments
    Halt,

    /// MAP: allocate a zeroed segment of c words; b receives its identifier
    Map { b: Register, c: Register },

    /// UNMAP: free the segment identified by c
    Unmap { c: Register },

    /// OUT: write the byte in c to the output stream
    Out { c: Register },

    /// IN: read one byte from the input stream into c
    In { c: Register },

    /// LOADP: copy segment b over segment 0, set PC to c
    LoadProgram { b: Register, c: Register },

    /// LV: a = 25-bit immediate
    LoadValue { a: Register, value: u32 },
}

impl Instruction {
    /// The opcode this instruction encodes to.
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Cmov { .. } => Opcode::Cmov,
            Self::Sload { .. } => Opcode::Sload,
            Self::Sstore { .. } => Opcode::Sstore,
            Self::Add { .. } => Opcode::Add,
            Self::Mul { .. } => Opcode::Mul,
            Self::Div { .. } => Opcode::Div,
            Self::Nand { .. } => Opcode::Nand,
            Self::Halt => Opcode::Halt,
            Self::Map { .. } => Opcode::Map,
            Self::Unmap { .. } => Opcode::Unmap,
            Self::Out { .. } => Opcode::Out,
            Self::In { .. } => Opcode::In,
            Self::LoadProgram { .. } => Opcode::LoadProgram,
            Self::LoadValue { .. } => Opcode::LoadValue,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cmov { a, b, c }
            | Self::Sload { a, b, c }
            | Self::Sstore { a, b, c }
            | Self::Add { a, b, c }
            | Self::Mul { a, b, c }
            | Self::Div { a, b, c }
            | Self::Nand { a, b, c } => {
                write!(f, "{} {}, {}, {}", self.opcode(), a, b, c)
            }
            Self::Halt => write!(f, "halt"),
            Self::Map { b, c } => write!(f, "map {}, {}", b, c),
            Self::Unmap { c } => write!(f, "unmap {}", c),
            Self::Out { c } => write!(f, "out {}", c),
            Self::In { c } => write!(f, "in {}", c),
            Self::LoadProgram { b, c } => write!(f, "loadp {}, {}", b, c),
            Self::LoadValue { a, value } => write!(f, "lv {}, {}", a, value),
        }
    }
}
