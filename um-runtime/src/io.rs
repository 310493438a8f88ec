//! Byte-oriented I/O boundary
//!
//! The machine speaks raw bytes with no framing. The bus is generic over
//! `Read`/`Write` so the CLI wires the process streams and tests wire
//! in-memory buffers.

use std::io::{self, ErrorKind, Read, Write};

#[derive(Debug)]
pub struct IoBus<R, W> {
    input: R,
    output: W,
}

impl<R: Read, W: Write> IoBus<R, W> {
    pub fn new(input: R, output: W) -> Self {
        IoBus { input, output }
    }

    /// Read one byte, blocking until a byte or end-of-input is available.
    /// Returns `None` at end-of-input; that is a defined state, not an error.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.output.write_all(&[byte])
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_bytes_in_order() {
        let mut bus = IoBus::new(Cursor::new(vec![1u8, 2, 3]), Vec::new());
        assert_eq!(bus.read_byte().unwrap(), Some(1));
        assert_eq!(bus.read_byte().unwrap(), Some(2));
        assert_eq!(bus.read_byte().unwrap(), Some(3));
        assert_eq!(bus.read_byte().unwrap(), None);
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let mut bus = IoBus::new(Cursor::new(Vec::new()), Vec::new());
        assert_eq!(bus.read_byte().unwrap(), None);
        assert_eq!(bus.read_byte().unwrap(), None);
    }

    #[test]
    fn test_write_bytes() {
        let mut out = Vec::new();
        {
            let mut bus = IoBus::new(Cursor::new(Vec::new()), &mut out);
            bus.write_byte(0x41).unwrap();
            bus.write_byte(0x42).unwrap();
            bus.flush().unwrap();
        }
        assert_eq!(out, b"AB");
    }
}
