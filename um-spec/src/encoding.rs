//! # Instruction Encoding Constants and Helpers
//!
//! Centralized constants and helper functions for the Universal Machine
//! instruction encoding.
//!
//! ## Instruction Format (32-bit)
//!
//! ```text
//! Three-register: [opcode:4][unused:19][a:3][b:3][c:3]
//! Load-value:     [opcode:4][a:3][value:25]
//! ```

use crate::error::SpecError;
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::register::Register;

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Opcode field: bits 28-31 (4 bits)
pub const OPCODE_SHIFT: u32 = 28;

/// First register selector: bits 6-8 (3 bits)
pub const REG_A_SHIFT: u32 = 6;

/// Second register selector: bits 3-5 (3 bits)
pub const REG_B_SHIFT: u32 = 3;

/// Third register selector: bits 0-2 (3 bits)
pub const REG_C_SHIFT: u32 = 0;

/// Load-value register selector: bits 25-27 (3 bits)
pub const LV_REG_SHIFT: u32 = 25;

// ============================================================================
// Field Masks
// ============================================================================

/// Register selector mask (3 bits)
pub const REG_MASK: u32 = 0x7;

/// Load-value immediate mask (25 bits)
pub const LV_VALUE_MASK: u32 = 0x01FF_FFFF;

// ============================================================================
// Field Extraction Functions
// ============================================================================

/// Extract the raw opcode field (bits 28-31)
#[inline]
pub const fn extract_opcode(word: u32) -> u32 {
    word >> OPCODE_SHIFT
}

/// Extract register selector a (bits 6-8)
#[inline]
pub fn extract_a(word: u32) -> Register {
    Register::from_selector(word >> REG_A_SHIFT)
}

/// Extract register selector b (bits 3-5)
#[inline]
pub fn extract_b(word: u32) -> Register {
    Register::from_selector(word >> REG_B_SHIFT)
}

/// Extract register selector c (bits 0-2)
#[inline]
pub fn extract_c(word: u32) -> Register {
    Register::from_selector(word >> REG_C_SHIFT)
}

/// Extract the load-value register selector (bits 25-27)
#[inline]
pub fn extract_lv_reg(word: u32) -> Register {
    Register::from_selector(word >> LV_REG_SHIFT)
}

/// Extract the 25-bit load-value immediate (bits 0-24)
#[inline]
pub const fn extract_lv_value(word: u32) -> u32 {
    word & LV_VALUE_MASK
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode a 32-bit instruction word.
///
/// Operand extraction cannot fail (register selectors are exactly 3 bits);
/// the only failure is an opcode outside 0-13.
pub fn decode(word: u32) -> Result<Instruction, SpecError> {
    let raw = extract_opcode(word) as u8;
    let opcode = Opcode::from_u8(raw).ok_or(SpecError::InvalidOpcode(raw))?;

    let inst = match opcode {
        Opcode::Cmov => Instruction::Cmov {
            a: extract_a(word),
            b: extract_b(word),
            c: extract_c(word),
        },
        Opcode::Sload => Instruction::Sload {
            a: extract_a(word),
            b: extract_b(word),
            c: extract_c(word),
        },
        Opcode::Sstore => Instruction::Sstore {
            a: extract_a(word),
            b: extract_b(word),
            c: extract_c(word),
        },
        Opcode::Add => Instruction::Add {
            a: extract_a(word),
            b: extract_b(word),
            c: extract_c(word),
        },
        Opcode::Mul => Instruction::Mul {
            a: extract_a(word),
            b: extract_b(word),
            c: extract_c(word),
        },
        Opcode::Div => Instruction::Div {
            a: extract_a(word),
            b: extract_b(word),
            c: extract_c(word),
        },
        Opcode::Nand => Instruction::Nand {
            a: extract_a(word),
            b: extract_b(word),
            c: extract_c(word),
        },
        Opcode::Halt => Instruction::Halt,
        Opcode::Map => Instruction::Map {
            b: extract_b(word),
            c: extract_c(word),
        },
        Opcode::Unmap => Instruction::Unmap { c: extract_c(word) },
        Opcode::Out => Instruction::Out { c: extract_c(word) },
        Opcode::In => Instruction::In { c: extract_c(word) },
        Opcode::LoadProgram => Instruction::LoadProgram {
            b: extract_b(word),
            c: extract_c(word),
        },
        Opcode::LoadValue => Instruction::LoadValue {
            a: extract_lv_reg(word),
            value: extract_lv_value(word),
        },
    };

    Ok(inst)
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode a three-register instruction word
#[inline]
pub const fn encode_triple(opcode: Opcode, a: u32, b: u32, c: u32) -> u32 {
    ((opcode.to_u8() as u32) << OPCODE_SHIFT)
        | ((a & REG_MASK) << REG_A_SHIFT)
        | ((b & REG_MASK) << REG_B_SHIFT)
        | ((c & REG_MASK) << REG_C_SHIFT)
}

/// Encode a load-value instruction word (immediate truncated to 25 bits)
#[inline]
pub const fn encode_load_value(a: u32, value: u32) -> u32 {
    ((Opcode::LoadValue.to_u8() as u32) << OPCODE_SHIFT)
        | ((a & REG_MASK) << LV_REG_SHIFT)
        | (value & LV_VALUE_MASK)
}

/// Encode an instruction to its 32-bit word.
///
/// Operands an opcode does not consult encode as zero.
pub fn encode(inst: &Instruction) -> u32 {
    match *inst {
        Instruction::Cmov { a, b, c }
        | Instruction::Sload { a, b, c }
        | Instruction::Sstore { a, b, c }
        | Instruction::Add { a, b, c }
        | Instruction::Mul { a, b, c }
        | Instruction::Div { a, b, c }
        | Instruction::Nand { a, b, c } => encode_triple(
            inst.opcode(),
            a.index() as u32,
            b.index() as u32,
            c.index() as u32,
        ),
        Instruction::Halt => encode_triple(Opcode::Halt, 0, 0, 0),
        Instruction::Map { b, c } => {
            encode_triple(Opcode::Map, 0, b.index() as u32, c.index() as u32)
        }
        Instruction::Unmap { c } => encode_triple(Opcode::Unmap, 0, 0, c.index() as u32),
        Instruction::Out { c } => encode_triple(Opcode::Out, 0, 0, c.index() as u32),
        Instruction::In { c } => encode_triple(Opcode::In, 0, 0, c.index() as u32),
        Instruction::LoadProgram { b, c } => {
            encode_triple(Opcode::LoadProgram, 0, b.index() as u32, c.index() as u32)
        }
        Instruction::LoadValue { a, value } => encode_load_value(a.index() as u32, value),
    }
}
