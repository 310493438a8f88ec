//! # Universal Machine Opcode Definitions
//!
//! Opcodes occupy the most-significant 4 bits of an instruction word.
//! Values 0-13 are defined; 14 and 15 are illegal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction opcode (4 bits, values 0-13)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// CMOV: if rc != 0 then ra = rb
    Cmov = 0,
    /// SLOAD: ra = segment[rb][rc]
    Sload = 1,
    /// SSTORE: segment[ra][rb] = rc
    Sstore = 2,
    /// ADD: ra = (rb + rc) mod 2^32
    Add = 3,
    /// MUL: ra = (rb * rc) mod 2^32
    Mul = 4,
    /// DIV: ra = rb / rc (unsigned; rc = 0 is fatal)
    Div = 5,
    /// NAND: ra = !(rb & rc)
    Nand = 6,
    /// HALT: stop the machine, releasing every segment
    Halt = 7,
    /// MAP: allocate a zeroed segment of rc words, identifier into rb
    Map = 8,
    /// UNMAP: free the segment identified by rc
    Unmap = 9,
    /// OUT: write the byte in rc to the output stream
    Out = 10,
    /// IN: read one byte from the input stream into rc
    In = 11,
    /// LOADP: copy segment rb over segment 0, jump to rc
    LoadProgram = 12,
    /// LV: ra = 25-bit immediate
    LoadValue = 13,
}

impl Opcode {
    /// Opcode field width in bits
    pub const BITS: u32 = 4;

    /// Opcode field mask
    pub const MASK: u32 = 0xF;

    /// Convert a raw 4-bit field into an opcode, if defined.
    pub fn from_u8(value: u8) -> Option<Self> {
        use Opcode::*;
        match value {
            0 => Some(Cmov),
            1 => Some(Sload),
            2 => Some(Sstore),
            3 => Some(Add),
            4 => Some(Mul),
            5 => Some(Div),
            6 => Some(Nand),
            7 => Some(Halt),
            8 => Some(Map),
            9 => Some(Unmap),
            10 => Some(Out),
            11 => Some(In),
            12 => Some(LoadProgram),
            13 => Some(LoadValue),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Cmov => "cmov",
            Self::Sload => "sload",
            Self::Sstore => "sstore",
            Self::Add => "add",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Nand => "nand",
            Self::Halt => "halt",
            Self::Map => "map",
            Self::Unmap => "unmap",
            Self::Out => "out",
            Self::In => "in",
            Self::LoadProgram => "loadp",
            Self::LoadValue => "lv",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
