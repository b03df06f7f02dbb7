pub mod executor;

use std::io::{Read, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("IO Error")]
    StreamIO(
        #[from]
        std::io::Error,
    ),
}

/// All the mutable state for one run: the tape, the data pointer and the
/// I/O streams. The tape starts as a single zero cell and grows eagerly
/// whenever a move would take the data pointer out of bounds, so the pointer
/// is always a valid index after any instruction.
pub struct Runtime<'a> {
    /// Pointer into the tape
    data_pointer: usize,

    /// The growable tape of 8-bit cells
    tape: Vec<u8>,

    in_stream: &'a mut dyn Read,
    out_stream: &'a mut dyn Write,
}

impl<'a> Runtime<'a> {
    pub fn new(in_stream: &'a mut dyn Read, out_stream: &'a mut dyn Write) -> Self {
        Self {
            data_pointer: 0,
            tape: vec![0],
            in_stream,
            out_stream,
        }
    }

    /// Write the current cell to the output stream
    pub fn print(&mut self) -> Result<(), RuntimeError> {
        self.out_stream.write_all(&[self.tape[self.data_pointer]])?;
        Ok(())
    }

    /// Read one byte from the input stream into the current cell.
    ///
    /// On end of input the cell is left unchanged. Buffered output is flushed
    /// first so that anything printed before the read is visible.
    pub fn input(&mut self) -> Result<(), RuntimeError> {
        self.out_stream.flush()?;
        let mut byte = [0u8];
        if self.in_stream.read(&mut byte)? == 1 {
            self.tape[self.data_pointer] = byte[0];
        }
        Ok(())
    }

    pub fn add(&mut self, by: usize) {
        self.tape[self.data_pointer] =
            self.tape[self.data_pointer].wrapping_add((by % 256) as u8);
    }

    pub fn sub(&mut self, by: usize) {
        self.tape[self.data_pointer] =
            self.tape[self.data_pointer].wrapping_sub((by % 256) as u8);
    }

    pub fn set_zero(&mut self) {
        self.tape[self.data_pointer] = 0;
    }

    /// Move the data pointer left; returns false on underflow, which is the
    /// silent halting condition rather than an error
    pub fn move_left(&mut self, by: usize) -> bool {
        if self.data_pointer < by {
            return false;
        }
        self.data_pointer -= by;
        true
    }

    /// Move the data pointer right, growing the tape with zero cells so the
    /// pointer stays in bounds (plus a couple of spare cells past it)
    pub fn move_right(&mut self, by: usize) {
        self.data_pointer += by;
        if self.data_pointer >= self.tape.len() {
            let missing = self.data_pointer - self.tape.len();
            self.tape.resize(self.tape.len() + missing + 2, 0);
        }
    }

    /// is the value at the data pointer zero?
    pub fn value_is_zero(&self) -> bool {
        self.tape[self.data_pointer] == 0
    }

    /// Flush any buffered output; called once when a run completes
    pub fn flush(&mut self) -> Result<(), RuntimeError> {
        self.out_stream.flush()?;
        Ok(())
    }
}
