//! End-to-end tests for the Universal Machine
//!
//! These boot complete images (assembled with `um_spec::encode` or from raw
//! big-endian bytes) and check the bytes the machine writes to its output
//! stream, exactly as an operator would observe them.

use std::io::Cursor;
use um_runtime::{run, Machine, RuntimeError};
use um_spec::{encode, Instruction, Program, Register::*};

fn boot(instructions: &[Instruction]) -> Program {
    Program::from_words(instructions.iter().map(encode).collect())
}

#[test]
fn hello_byte() {
    // lv r0, 65 / out r0 / halt emits exactly one byte, 'A', then exits clean
    let program = boot(&[
        Instruction::LoadValue { a: R0, value: 65 },
        Instruction::Out { c: R0 },
        Instruction::Halt,
    ]);

    let mut output = Vec::new();
    let result = run(program, Cursor::new(Vec::new()), &mut output).unwrap();
    assert_eq!(output, vec![0x41]);
    assert_eq!(result.steps, 3);
}

#[test]
fn map_store_load_out_unmap() {
    // Allocate a 4-word segment, store 7 at offset 2, read it back, print,
    // free the segment, halt: output is the single byte 7
    let program = boot(&[
        Instruction::LoadValue { a: R1, value: 4 },
        Instruction::Map { b: R2, c: R1 },
        Instruction::LoadValue { a: R3, value: 2 },
        Instruction::LoadValue { a: R4, value: 7 },
        Instruction::Sstore { a: R2, b: R3, c: R4 },
        Instruction::Sload { a: R5, b: R2, c: R3 },
        Instruction::Out { c: R5 },
        Instruction::Unmap { c: R2 },
        Instruction::Halt,
    ]);

    let mut output = Vec::new();
    run(program, Cursor::new(Vec::new()), &mut output).unwrap();
    assert_eq!(output, vec![7]);
}

#[test]
fn input_exhaustion_yields_sentinel() {
    // IN on an exhausted stream must not abort; the register holds all ones,
    // which NAND-with-itself turns into 0 for output
    let program = boot(&[
        Instruction::In { c: R1 },
        Instruction::Nand { a: R2, b: R1, c: R1 },
        Instruction::Out { c: R2 },
        Instruction::Halt,
    ]);

    let mut output = Vec::new();
    let result = run(program, Cursor::new(Vec::new()), &mut output);
    assert!(result.is_ok());
    assert_eq!(output, vec![0]);
}

#[test]
fn echo_until_eof() {
    // Copy stdin to stdout one byte at a time. The loop detects the EOF
    // sentinel by adding 1: 0xFFFFFFFF wraps to 0, which CMOV treats as
    // false, so the jump through r5 lands on "out" for a real byte and on
    // "halt" once the stream is exhausted. loadp on segment 0 is a plain
    // jump.
    let program = boot(&[
        /* 0 */ Instruction::In { c: R1 },
        /* 1 */ Instruction::LoadValue { a: R2, value: 1 },
        /* 2 */ Instruction::Add { a: R3, b: R1, c: R2 },
        /* 3 */ Instruction::LoadValue { a: R4, value: 7 },
        /* 4 */ Instruction::LoadValue { a: R5, value: 9 },
        /* 5 */ Instruction::Cmov { a: R5, b: R4, c: R3 },
        /* 6 */ Instruction::LoadProgram { b: R0, c: R5 },
        /* 7 */ Instruction::Out { c: R1 },
        /* 8 */ Instruction::LoadProgram { b: R0, c: R0 }, // back to 0 (r0 = 0)
        /* 9 */ Instruction::Halt,
    ]);

    let mut output = Vec::new();
    run(program, Cursor::new(b"echo!".to_vec()), &mut output).unwrap();
    assert_eq!(output, b"echo!");
}

#[test]
fn boots_from_raw_big_endian_image() {
    // The same hello program, hand-assembled into bytes
    let program = boot(&[
        Instruction::LoadValue { a: R0, value: 65 },
        Instruction::Out { c: R0 },
        Instruction::Halt,
    ]);
    let image = program.to_bytes();

    let reparsed = Program::from_bytes(&image).unwrap();
    let mut output = Vec::new();
    run(reparsed, Cursor::new(Vec::new()), &mut output).unwrap();
    assert_eq!(output, b"A");
}

#[test]
fn execution_is_deterministic() {
    // Same image, same input: identical output and step count, including
    // identifier-reuse order (the program prints a reused identifier)
    let instructions = [
        Instruction::LoadValue { a: R1, value: 1 },
        Instruction::Map { b: R2, c: R1 },
        Instruction::Map { b: R3, c: R1 },
        Instruction::Unmap { c: R2 },
        Instruction::Map { b: R4, c: R1 },
        Instruction::Out { c: R4 },
        Instruction::In { c: R5 },
        Instruction::Out { c: R5 },
        Instruction::Halt,
    ];

    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut output = Vec::new();
        let result = run(
            boot(&instructions),
            Cursor::new(b"z".to_vec()),
            &mut output,
        )
        .unwrap();
        runs.push((output, result.steps));
    }
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[0].0, vec![1, b'z']);
}

#[test]
fn fatal_conditions_abort_without_output_guarantees() {
    // A program that faults mid-stream: whatever was written before the
    // fault may remain, but the run itself reports the error
    let program = boot(&[
        Instruction::LoadValue { a: R1, value: 33 },
        Instruction::Out { c: R1 },
        Instruction::Div { a: R2, b: R1, c: R0 },
        Instruction::Halt,
    ]);

    let mut output = Vec::new();
    let machine = Machine::new(program, Cursor::new(Vec::new()), &mut output);
    let err = machine.run().unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero { pc: 2 }));
}
