use std::collections::HashMap;

use super::{CompileError, Instruction, Program};

/// Compile raw source bytes into a [`Program`].
///
/// Any byte that isn't one of the eight instruction characters is ignored.
/// Runs of `<`/`>` and `+`/`-` collapse into a single instruction carrying
/// the net magnitude, `[-]` collapses into [`Instruction::SetZero`], and
/// bracket pairs are resolved into the jump maps up front.
pub fn compile(source: &[u8]) -> Result<Program, CompileError> {
    let mut instructions = vec![];
    let mut start_to_end = HashMap::new();
    let mut end_to_start = HashMap::new();

    // indices of LoopStart instructions still waiting for their `]`
    let mut pending_starts: Vec<usize> = vec![];

    let mut i = 0;
    while i < source.len() {
        let instruction = match source[i] {
            b'<' | b'>' => {
                let mut net: isize = 0;
                while i < source.len() && (source[i] == b'<' || source[i] == b'>') {
                    net += if source[i] == b'<' { -1 } else { 1 };
                    i += 1;
                }
                if net < 0 {
                    Instruction::MoveLeft(-net as usize)
                } else {
                    // a fully cancelled run still emits a MoveRight(0) no-op
                    Instruction::MoveRight(net as usize)
                }
            }
            b'+' | b'-' => {
                let mut net: isize = 0;
                while i < source.len() && (source[i] == b'+' || source[i] == b'-') {
                    net += if source[i] == b'-' { -1 } else { 1 };
                    i += 1;
                }
                if net < 0 {
                    Instruction::Sub(-net as usize)
                } else {
                    Instruction::Add(net as usize)
                }
            }
            b'.' => {
                i += 1;
                Instruction::Print
            }
            b',' => {
                i += 1;
                Instruction::Input
            }
            b'[' => {
                if source.get(i + 1) == Some(&b'-') && source.get(i + 2) == Some(&b']') {
                    // the `[-]` idiom zeroes the cell without looping
                    i += 3;
                    Instruction::SetZero
                } else {
                    i += 1;
                    pending_starts.push(instructions.len());
                    Instruction::LoopStart
                }
            }
            b']' => {
                i += 1;
                let start = pending_starts
                    .pop()
                    .ok_or(CompileError::UnmatchedLoopEnd)?;
                let end = instructions.len();
                start_to_end.insert(start, end);
                end_to_start.insert(end, start);
                Instruction::LoopEnd
            }
            _ => {
                i += 1;
                continue;
            }
        };

        instructions.push(instruction);
    }

    if !pending_starts.is_empty() {
        return Err(CompileError::UnmatchedLoopStart);
    }

    Ok(Program {
        instructions,
        start_to_end,
        end_to_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_arithmetic_runs_to_net_magnitude() {
        let program = compile(b"+++--").unwrap();
        assert_eq!(program.instructions, vec![Instruction::Add(1)]);

        let program = compile(b"--+").unwrap();
        assert_eq!(program.instructions, vec![Instruction::Sub(1)]);
    }

    #[test]
    fn collapses_movement_runs_to_net_magnitude() {
        let program = compile(b">>><").unwrap();
        assert_eq!(program.instructions, vec![Instruction::MoveRight(2)]);

        let program = compile(b"<<<").unwrap();
        assert_eq!(program.instructions, vec![Instruction::MoveLeft(3)]);
    }

    #[test]
    fn cancelled_movement_run_becomes_zero_magnitude_move() {
        let program = compile(b"><").unwrap();
        assert_eq!(program.instructions, vec![Instruction::MoveRight(0)]);
    }

    #[test]
    fn set_zero_idiom_compiles_to_one_instruction() {
        let program = compile(b"[-]").unwrap();
        assert_eq!(program.instructions, vec![Instruction::SetZero]);
        assert!(program.start_to_end.is_empty());
        assert!(program.end_to_start.is_empty());
    }

    #[test]
    fn non_instruction_bytes_are_ignored() {
        let program = compile(b"this + only . compiles the instructions").unwrap();
        assert_eq!(
            program.instructions,
            vec![Instruction::Add(1), Instruction::Print]
        );
    }

    #[test]
    fn nested_loops_map_to_their_structural_partner() {
        // indices: 0 = outer [, 1 = inner [, 2 = inner ], 3 = outer ]
        let program = compile(b"[[]]").unwrap();
        assert_eq!(program.start_to_end[&0], 3);
        assert_eq!(program.start_to_end[&1], 2);
        assert_eq!(program.end_to_start[&3], 0);
        assert_eq!(program.end_to_start[&2], 1);
    }

    #[test]
    fn jump_maps_are_mutual_inverses() {
        let program = compile(b"+[>[->+<]<[.]]").unwrap();

        assert_eq!(program.start_to_end.len(), program.end_to_start.len());
        for (start, end) in program.start_to_end.iter() {
            assert_eq!(program.instructions[*start], Instruction::LoopStart);
            assert_eq!(program.instructions[*end], Instruction::LoopEnd);
            assert_eq!(program.end_to_start[end], *start);
        }
    }

    #[test]
    fn unmatched_loop_end_is_an_error() {
        assert_eq!(
            compile(b"+]").unwrap_err(),
            CompileError::UnmatchedLoopEnd
        );
    }

    #[test]
    fn unmatched_loop_start_is_an_error() {
        assert_eq!(
            compile(b"[+").unwrap_err(),
            CompileError::UnmatchedLoopStart
        );
        // the idiom lookahead must not treat a trailing `[-` as `[-]`
        assert_eq!(
            compile(b"[-").unwrap_err(),
            CompileError::UnmatchedLoopStart
        );
    }
}
