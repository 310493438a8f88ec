//! Register definitions for the Universal Machine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 8;

/// Register (r0-r7)
///
/// Register selectors in instruction words are exactly 3 bits wide, so every
/// encodable selector names a valid register.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
}

impl Register {
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        use Register::*;
        match index {
            0 => Some(R0),
            1 => Some(R1),
            2 => Some(R2),
            3 => Some(R3),
            4 => Some(R4),
            5 => Some(R5),
            6 => Some(R6),
            7 => Some(R7),
            _ => None,
        }
    }

    /// Build a register from a 3-bit selector field. Cannot fail: the field
    /// is masked to 3 bits first.
    #[inline]
    pub fn from_selector(field: u32) -> Self {
        // 3-bit field covers exactly the 8 variants
        Self::from_index((field & 0x7) as usize).unwrap()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::R0 => "r0",
            Self::R1 => "r1",
            Self::R2 => "r2",
            Self::R3 => "r3",
            Self::R4 => "r4",
            Self::R5 => "r5",
            Self::R6 => "r6",
            Self::R7 => "r7",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_valid() {
        for i in 0..NUM_REGISTERS {
            let reg = Register::from_index(i).unwrap();
            assert_eq!(reg.index(), i);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Register::from_index(8), None);
        assert_eq!(Register::from_index(usize::MAX), None);
    }

    #[test]
    fn test_from_selector_masks_to_three_bits() {
        assert_eq!(Register::from_selector(0), Register::R0);
        assert_eq!(Register::from_selector(7), Register::R7);
        assert_eq!(Register::from_selector(0b1_010), Register::R2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Register::R0.to_string(), "r0");
        assert_eq!(Register::R7.to_string(), "r7");
    }
}
