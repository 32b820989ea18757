mod core;

use self::core::{Core, TickResult};
use crate::opcode::{read_operand, Opcode};
use crate::{constants, Word};
use std::fmt;

/// Reason the interpreter loop came to a stop.
///
/// Every variant except `Halted` is a fatal runtime error; the machine
/// never resumes after reporting one.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExitCode {
    Halted,               // HALT instruction was executed (normal shutdown)
    PcOutOfBounds,        // Program counter left the code image
    TruncatedOperand,     // Operand-bearing opcode too close to the end of the image
    StackOverflow,        // Value stack capacity exceeded
    StackUnderflow,       // Pop or arithmetic with too few values
    ReturnStackOverflow,  // CALL nesting exceeded the return stack capacity
    ReturnStackUnderflow, // RET with no return address
    DivisionByZero,       // DIV with a zero divisor
    InvalidJumpTarget,    // Taken branch target outside the code image
    InvalidMemoryIndex,   // LOAD/STORE index outside data memory
    InvalidOpcode,        // Opcode byte not in the instruction table
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ExitCode::Halted => "halted",
            ExitCode::PcOutOfBounds => "PC out of bounds",
            ExitCode::TruncatedOperand => "incomplete operand",
            ExitCode::StackOverflow => "stack overflow",
            ExitCode::StackUnderflow => "stack underflow",
            ExitCode::ReturnStackOverflow => "return stack overflow",
            ExitCode::ReturnStackUnderflow => "return stack underflow",
            ExitCode::DivisionByZero => "division by zero",
            ExitCode::InvalidJumpTarget => "jump target out of bounds",
            ExitCode::InvalidMemoryIndex => "memory index out of bounds",
            ExitCode::InvalidOpcode => "invalid opcode",
        })
    }
}

/// The virtual machine: a value stack, a return stack and a linear data
/// memory of 32-bit signed integers, driven by a byte-addressed code image.
///
/// The machine borrows the code image only for the duration of [`run`] and
/// never writes to it. Stack, return stack and memory stay inspectable
/// after the run, including after a fault.
///
/// [`run`]: #method.run
pub struct Machine {
    core: Core,
    pc: u32,
}

impl Machine {
    /// Constructs a machine with the default capacities (1024 stack slots,
    /// 1024 return addresses, 1024 memory cells).
    pub fn new() -> Machine {
        Machine::with_sizes(
            constants::STACK_SIZE,
            constants::RET_STACK_SIZE,
            constants::MEM_SIZE,
        )
    }

    /// Constructs a machine with explicit capacities. The limits are hard:
    /// exceeding one stops the machine with an error instead of growing.
    pub fn with_sizes(stack_size: usize, ret_stack_size: usize, mem_size: usize) -> Machine {
        Machine {
            core: Core::new(stack_size, ret_stack_size, mem_size),
            pc: 0,
        }
    }

    /// Byte offset of the last fetched instruction. After a fault this is
    /// the address of the instruction that caused it.
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// The value stack, bottom first.
    pub fn stack(&self) -> &[Word] {
        self.core.stack()
    }

    /// The linear data memory.
    pub fn memory(&self) -> &[Word] {
        self.core.memory()
    }

    /// Resets the machine state and executes `code` from offset zero until
    /// `HALT` or a fatal runtime error.
    ///
    /// # Examples
    /// ```
    /// use svm::{program, ExitCode, Machine};
    ///
    /// let mut machine = Machine::new();
    /// let code = program![(PUSH 7), (STORE 0), (LOAD 0), (HALT)];
    ///
    /// assert_eq!(machine.run(&code), ExitCode::Halted);
    /// assert_eq!(machine.stack(), &[7][..]);
    /// assert_eq!(machine.memory()[0], 7);
    /// ```
    pub fn run(&mut self, code: &[u8]) -> ExitCode {
        self.core.reset();
        self.pc = 0;

        let code_size = code.len() as u32;

        loop {
            if self.pc >= code_size {
                return ExitCode::PcOutOfBounds;
            }

            let offset = self.pc as usize;

            let opcode = match Opcode::from_byte(code[offset]) {
                Some(opcode) => opcode,
                None => return ExitCode::InvalidOpcode,
            };

            let operand = if opcode.has_operand() {
                if self.pc + constants::OPERAND_BYTES >= code_size {
                    return ExitCode::TruncatedOperand;
                }
                read_operand(&code[offset + 1..offset + 1 + constants::OPERAND_BYTES as usize])
            } else {
                0
            };

            match self.core.tick(opcode, operand, self.pc, code_size) {
                TickResult::Next => self.pc += opcode.size(),
                TickResult::Jump(target) => self.pc = target,
                TickResult::Stop(exit_code) => return exit_code,
            }
        }
    }
}

impl Default for Machine {
    fn default() -> Machine {
        Machine::new()
    }
}
