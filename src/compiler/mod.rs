use std::collections::HashMap;

use thiserror::Error;

pub mod compiler;

/// A single compiled instruction, run-length collapsed where possible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    // `<...`: Move the data pointer left by the net magnitude
    MoveLeft(usize),
    // `>...`: Move the data pointer right by the net magnitude
    MoveRight(usize),

    // `+...`: Add the net magnitude to the cell at the data pointer
    Add(usize),
    // `-...`: Subtract the net magnitude from the cell at the data pointer
    Sub(usize),

    // `.`: Write the cell at the data pointer to the output stream
    Print,
    // `,`: Read one byte from the input stream into the cell at the data pointer
    Input,

    // `[`: If the cell at the data pointer is zero, jump past the matching LoopEnd
    LoopStart,
    // `]`: If the cell at the data pointer is non-zero, jump back to re-enter the loop body
    LoopEnd,

    // `[-]`: Set the cell at the data pointer to zero
    SetZero,
}

/// A compiled program: the instruction sequence plus both loop jump maps.
///
/// The jump maps are keyed by instruction index and are mutual inverses over
/// the bracket instructions; they are filled in once during compilation and
/// read-only from then on, so the executor never scans for a partner bracket.
#[derive(Debug)]
pub struct Program {
    pub instructions: Vec<Instruction>,
    pub start_to_end: HashMap<usize, usize>,
    pub end_to_start: HashMap<usize, usize>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompileError {
    #[error("unmatched loop end: ] with no matching [")]
    UnmatchedLoopEnd,

    #[error("unmatched loop start: [ with no matching ]")]
    UnmatchedLoopStart,
}
