//! A small stack-based bytecode virtual machine.
//!
//! The crate has two halves: the shared bytecode format ([`Opcode`], the
//! operand encoding helpers and [`constants`]) and the interpreter itself
//! ([`Machine`]). The assembler in the `sasm` crate depends on the same
//! format definitions, so opcodes and instruction sizes are defined in
//! exactly one place.
//!
//! # Examples
//! ```
//! use svm::{program, ExitCode, Machine};
//!
//! let code = program![(PUSH 2), (PUSH 3), (ADD), (HALT)];
//!
//! let mut machine = Machine::new();
//! assert_eq!(machine.run(&code), ExitCode::Halted);
//! assert_eq!(machine.stack(), &[5][..]);
//! ```
//!
//! [`Opcode`]: enum.Opcode.html
//! [`Machine`]: struct.Machine.html
//! [`constants`]: constants/index.html

pub mod constants;
mod machine;
mod opcode;


use std::{error, fmt};

pub use machine::{ExitCode, Machine};
pub use opcode::{push_operand, read_operand, Opcode};

/// Value type of the stack machine. All stack slots, memory cells and
/// instruction operands are 32-bit signed integers.
pub type Word = i32;

/// Byte order of operands in the binary image, regardless of host.
pub type Endian = byteorder::LittleEndian;

/// Error returned when parsing a string into one of the bytecode enums fails.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseEnumError {
    pub value: String,
    pub enum_name: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Failed to parse \"{}\" as {}.",
            &self.value, &self.enum_name
        )
    }
}

impl error::Error for ParseEnumError {}
