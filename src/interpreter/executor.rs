use crate::compiler::{Instruction, Program};

use super::{Runtime, RuntimeError};

pub struct Executor {}

impl Executor {
    pub fn new() -> Self {
        Self {}
    }

    /// Run a compiled program to completion.
    ///
    /// Every dispatch step ends by advancing the instruction pointer, taken
    /// jumps included, so a jump resumes at the instruction after the partner
    /// bracket. The loop condition is checked by whichever bracket the
    /// instruction pointer is currently on: LoopStart skips forward when the
    /// cell is zero, LoopEnd jumps back when it is non-zero.
    pub fn run(&mut self, runtime: &mut Runtime, program: &Program) -> Result<(), RuntimeError> {
        let mut ip = 0;
        while ip < program.instructions.len() {
            match &program.instructions[ip] {
                Instruction::MoveLeft(by) => {
                    if !runtime.move_left(*by) {
                        // moving past cell zero halts the run, successfully
                        break;
                    }
                }
                Instruction::MoveRight(by) => runtime.move_right(*by),
                Instruction::Add(by) => runtime.add(*by),
                Instruction::Sub(by) => runtime.sub(*by),
                Instruction::Print => runtime.print()?,
                Instruction::Input => runtime.input()?,
                Instruction::LoopStart => {
                    if runtime.value_is_zero() {
                        ip = program.start_to_end[&ip];
                    }
                }
                Instruction::LoopEnd => {
                    if !runtime.value_is_zero() {
                        ip = program.end_to_start[&ip];
                    }
                }
                Instruction::SetZero => runtime.set_zero(),
            }

            ip += 1;
        }

        runtime.flush()
    }
}
