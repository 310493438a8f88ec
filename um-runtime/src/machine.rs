//! The Universal Machine execution engine
//!
//! A fetch-decode-dispatch loop over segment 0. All fourteen operations are
//! dispatched through a single `match` on the closed instruction enum; each
//! arm leaves the program counter at the next instruction to execute.

use crate::error::{Result, RuntimeError};
use crate::io::IoBus;
use crate::segments::SegmentStore;
use crate::state::MachineState;
use std::io::{Read, Write};
use tracing::{debug, trace};
use um_spec::{decode, Instruction, Program, END_OF_INPUT};

/// Machine configuration
#[derive(Debug, Clone, Default)]
pub struct MachineConfig {
    /// Abort after this many instructions. `None` runs until HALT or a
    /// fatal condition; the limit is a debugging guard, not a feature of
    /// the machine itself.
    pub max_steps: Option<u64>,
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub steps: u64,
}

/// Universal Machine
pub struct Machine<R, W> {
    /// Registers, PC, run status
    state: MachineState,

    /// Segment store (owns segment 0 and all mapped segments)
    segments: SegmentStore,

    /// Byte I/O boundary
    io: IoBus<R, W>,

    /// Configuration
    config: MachineConfig,
}

impl<R: Read, W: Write> Machine<R, W> {
    /// Create a machine booted from `program`, wired to the given streams.
    pub fn new(program: Program, input: R, output: W) -> Self {
        Self::with_config(program, input, output, MachineConfig::default())
    }

    pub fn with_config(program: Program, input: R, output: W, config: MachineConfig) -> Self {
        Machine {
            state: MachineState::new(),
            segments: SegmentStore::new(program.words),
            io: IoBus::new(input, output),
            config,
        }
    }

    /// Run until HALT. Any fatal condition aborts immediately with `Err`.
    pub fn run(mut self) -> Result<ExecutionResult> {
        debug!(words = self.segments.program().len(), "machine booted");

        while !self.state.is_halted() {
            if let Some(limit) = self.config.max_steps {
                if self.state.steps >= limit {
                    return Err(RuntimeError::StepLimitExceeded { limit });
                }
            }

            let inst = self.fetch_and_decode()?;
            trace!(step = self.state.steps, pc = self.state.pc, %inst);

            self.step(inst)?;
            self.state.steps += 1;
        }

        self.io.flush()?;
        debug!(steps = self.state.steps, "machine halted");

        Ok(ExecutionResult {
            steps: self.state.steps,
        })
    }

    /// Fetch the word at (segment 0, PC) and decode it.
    fn fetch_and_decode(&self) -> Result<Instruction> {
        let program = self.segments.program();
        let pc = self.state.pc;
        let word = *program
            .get(pc as usize)
            .ok_or(RuntimeError::PcOutOfRange {
                pc,
                len: program.len(),
            })?;

        decode(word).map_err(|_| RuntimeError::IllegalInstruction { pc, word })
    }

    /// Execute one decoded instruction.
    fn step(&mut self, inst: Instruction) -> Result<()> {
        match inst {
            Instruction::Cmov { a, b, c } => {
                if self.state.read_reg(c) != 0 {
                    let value = self.state.read_reg(b);
                    self.state.write_reg(a, value);
                }
                self.state.pc += 1;
            }

            Instruction::Sload { a, b, c } => {
                let id = self.state.read_reg(b);
                let offset = self.state.read_reg(c);
                let word = self.segments.load(id, offset)?;
                self.state.write_reg(a, word);
                self.state.pc += 1;
            }

            Instruction::Sstore { a, b, c } => {
                let id = self.state.read_reg(a);
                let offset = self.state.read_reg(b);
                let word = self.state.read_reg(c);
                self.segments.store(id, offset, word)?;
                self.state.pc += 1;
            }

            Instruction::Add { a, b, c } => {
                let result = self.state.read_reg(b).wrapping_add(self.state.read_reg(c));
                self.state.write_reg(a, result);
                self.state.pc += 1;
            }

            Instruction::Mul { a, b, c } => {
                let result = self.state.read_reg(b).wrapping_mul(self.state.read_reg(c));
                self.state.write_reg(a, result);
                self.state.pc += 1;
            }

            Instruction::Div { a, b, c } => {
                let divisor = self.state.read_reg(c);
                if divisor == 0 {
                    return Err(RuntimeError::DivisionByZero { pc: self.state.pc });
                }
                let result = self.state.read_reg(b) / divisor;
                self.state.write_reg(a, result);
                self.state.pc += 1;
            }

            Instruction::Nand { a, b, c } => {
                let result = !(self.state.read_reg(b) & self.state.read_reg(c));
                self.state.write_reg(a, result);
                self.state.pc += 1;
            }

            Instruction::Halt => {
                self.segments.clear();
                self.state.halt();
            }

            Instruction::Map { b, c } => {
                let len = self.state.read_reg(c);
                let id = self.segments.map(len)?;
                self.state.write_reg(b, id);
                self.state.pc += 1;
            }

            Instruction::Unmap { c } => {
                let id = self.state.read_reg(c);
                self.segments.unmap(id)?;
                self.state.pc += 1;
            }

            Instruction::Out { c } => {
                let value = self.state.read_reg(c);
                if value > 0xFF {
                    return Err(RuntimeError::OutputOutOfRange { value });
                }
                self.io.write_byte(value as u8)?;
                self.state.pc += 1;
            }

            Instruction::In { c } => {
                // Interactive programs expect their prompt before blocking
                self.io.flush()?;
                let value = match self.io.read_byte()? {
                    Some(byte) => byte as u32,
                    None => END_OF_INPUT,
                };
                self.state.write_reg(c, value);
                self.state.pc += 1;
            }

            Instruction::LoadProgram { b, c } => {
                let id = self.state.read_reg(b);
                self.segments.load_program(id)?;
                self.state.pc = self.state.read_reg(c);
            }

            Instruction::LoadValue { a, value } => {
                self.state.write_reg(a, value);
                self.state.pc += 1;
            }
        }

        Ok(())
    }

    /// Current state (for debugging and tests)
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Segment store (for debugging and tests)
    pub fn segments(&self) -> &SegmentStore {
        &self.segments
    }
}
