//! Machine state: register file, program counter, run status

use um_spec::{Register, Word, NUM_REGISTERS};

/// Run status. `Halted` is terminal and entered only through HALT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
}

/// Machine state
#[derive(Debug, Clone)]
pub struct MachineState {
    /// Register file (r0-r7)
    pub registers: [Word; NUM_REGISTERS],

    /// Program counter: index into segment 0
    pub pc: u32,

    /// Instructions executed so far
    pub steps: u64,

    /// Run status
    pub status: Status,
}

impl MachineState {
    /// Fresh state: all registers zero, PC at 0, running.
    pub fn new() -> Self {
        MachineState {
            registers: [0; NUM_REGISTERS],
            pc: 0,
            steps: 0,
            status: Status::Running,
        }
    }

    #[inline]
    pub fn read_reg(&self, reg: Register) -> Word {
        self.registers[reg.index()]
    }

    #[inline]
    pub fn write_reg(&mut self, reg: Register, value: Word) {
        self.registers[reg.index()] = value;
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.status == Status::Halted
    }

    pub fn halt(&mut self) {
        self.status = Status::Halted;
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}
