//! # Universal Machine Runtime
//!
//! Execute UM-32 boot images: a fetch-decode-execute loop over a register
//! file of 8 unsigned 32-bit registers and a growable store of word
//! segments.
//!
//! ## Features
//!
//! - **14 operations**: the complete UM instruction set
//! - **Segmented memory**: fixed-length word segments with FIFO identifier
//!   recycling; the running program (segment 0) can replace itself
//! - **Byte I/O**: generic over `Read`/`Write`, end-of-input reported as a
//!   sentinel value rather than an error
//! - **Strict fatal-error model**: every invalid access aborts the run
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use um_runtime::Machine;
//! use um_spec::{encode, Instruction, Program, Register};
//!
//! let program = Program::from_words(vec![
//!     encode(&Instruction::LoadValue { a: Register::R0, value: 65 }),
//!     encode(&Instruction::Out { c: Register::R0 }),
//!     encode(&Instruction::Halt),
//! ]);
//!
//! let mut output = Vec::new();
//! let machine = Machine::new(program, Cursor::new(Vec::new()), &mut output);
//! machine.run().unwrap();
//! assert_eq!(output, b"A");
//! ```

pub mod error;
pub mod io;
pub mod machine;
pub mod segments;
pub mod state;

pub use error::{Result, RuntimeError};
pub use io::IoBus;
pub use machine::{ExecutionResult, Machine, MachineConfig};
pub use segments::{SegmentStore, PROGRAM_SEGMENT};
pub use state::{MachineState, Status};

use std::io::{Read, Write};
use um_spec::Program;

/// Simple execution helper
///
/// Boots `program` against the given streams and runs it to completion.
pub fn run<R: Read, W: Write>(program: Program, input: R, output: W) -> Result<ExecutionResult> {
    Machine::new(program, input, output).run()
}
