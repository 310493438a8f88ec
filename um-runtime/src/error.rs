//! Runtime error types for the Universal Machine
//!
//! Every variant here is fatal: the machine is executing a program whose
//! correctness is the loader's responsibility, so detection aborts the run
//! with no recovery. End-of-input is not an error (the IN operation stores a
//! sentinel instead).

use thiserror::Error;
use um_spec::SpecError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] SpecError),

    #[error("Illegal instruction {word:#010x} at pc {pc}")]
    IllegalInstruction { pc: u32, word: u32 },

    #[error("Program counter {pc} outside segment 0 (length {len})")]
    PcOutOfRange { pc: u32, len: usize },

    #[error("Segment {id} is not mapped")]
    UnmappedSegment { id: u32 },

    #[error("Offset {offset} outside segment {id} (length {len})")]
    OffsetOutOfRange { id: u32, offset: u32, len: usize },

    #[error("Segment 0 cannot be unmapped")]
    UnmapSegmentZero,

    #[error("Division by zero at pc {pc}")]
    DivisionByZero { pc: u32 },

    #[error("Segment identifier space exhausted")]
    IdentifierSpaceExhausted,

    #[error("Output value {value:#x} exceeds one byte")]
    OutputOutOfRange { value: u32 },

    #[error("Step limit exceeded: {limit}")]
    StepLimitExceeded { limit: u64 },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
