use crate::{constants, Endian, ParseEnumError, Word};
use byteorder::ByteOrder;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::fmt;
use std::str::FromStr;

/// Instruction set of the stack machine.
///
/// Instructions come in two encodings:
///
/// | Encoding | Byte 0 | Bytes 1-4                            |
/// |----------|--------|--------------------------------------|
/// | plain    | opcode | -                                    |
/// | operand  | opcode | 32-bit little-endian signed operand  |
///
/// The numeric values are part of the binary image format and must not
/// change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    //  Mnemonic     | Operand | Effect
    //---------------+---------+--------------------------------------------------
    PUSH = 0x01,  // | value   | Push the operand onto the stack
    POP = 0x02,   // | -       | Discard the top of the stack
    DUP = 0x03,   // | -       | Duplicate the top of the stack
    ADD = 0x10,   // | -       | Pop b, a; push a + b (wrapping)
    SUB = 0x11,   // | -       | Pop b, a; push a - b (wrapping)
    MUL = 0x12,   // | -       | Pop b, a; push a * b (wrapping)
    DIV = 0x13,   // | -       | Pop b, a; push a / b (truncating toward zero)
    CMP = 0x14,   // | -       | Pop b, a; push 1 if a < b, else 0
    JMP = 0x20,   // | address | Unconditional jump
    JZ = 0x21,    // | address | Pop c; jump iff c == 0
    JNZ = 0x22,   // | address | Pop c; jump iff c != 0
    STORE = 0x30, // | index   | Pop v; memory[index] = v
    LOAD = 0x31,  // | index   | Push memory[index]
    CALL = 0x40,  // | address | Push return address onto the return stack; jump
    RET = 0x41,   // | -       | Pop the return stack into the program counter
    HALT = 0xFF,  // | -       | Stop execution
}

impl Opcode {
    /// Decodes an opcode byte. Returns `None` for bytes outside the table.
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        FromPrimitive::from_u8(byte)
    }

    /// Encodes the opcode as its image byte.
    pub fn to_byte(self) -> u8 {
        ToPrimitive::to_u8(&self).unwrap()
    }

    /// Whether the opcode is followed by a 4-byte operand in the image.
    pub fn has_operand(self) -> bool {
        match self {
            Opcode::PUSH
            | Opcode::JMP
            | Opcode::JZ
            | Opcode::JNZ
            | Opcode::STORE
            | Opcode::LOAD
            | Opcode::CALL => true,
            _ => false,
        }
    }

    /// Encoded size of an instruction with this opcode, in bytes.
    ///
    /// Both assembler passes and the fetch loop of the VM use this single
    /// definition, so label addresses cannot drift from emission.
    pub fn size(self) -> u32 {
        if self.has_operand() {
            constants::OPERAND_INSTR_BYTES
        } else {
            constants::PLAIN_INSTR_BYTES
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Opcode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Opcode, ParseEnumError> {
        Ok(match s {
            "PUSH" => Opcode::PUSH,
            "POP" => Opcode::POP,
            "DUP" => Opcode::DUP,
            "ADD" => Opcode::ADD,
            "SUB" => Opcode::SUB,
            "MUL" => Opcode::MUL,
            "DIV" => Opcode::DIV,
            "CMP" => Opcode::CMP,
            "JMP" => Opcode::JMP,
            "JZ" => Opcode::JZ,
            "JNZ" => Opcode::JNZ,
            "STORE" => Opcode::STORE,
            "LOAD" => Opcode::LOAD,
            "CALL" => Opcode::CALL,
            "RET" => Opcode::RET,
            "HALT" => Opcode::HALT,
            _ => {
                return Err(ParseEnumError {
                    value: s.to_owned(),
                    enum_name: "Opcode",
                })
            }
        })
    }
}

/// Appends `value` to `code` as a little-endian operand.
pub fn push_operand(code: &mut Vec<u8>, value: Word) {
    let mut buffer = [0u8; constants::OPERAND_BYTES as usize];
    Endian::write_i32(&mut buffer, value);
    code.extend_from_slice(&buffer);
}

/// Reads a little-endian operand from the start of `buffer`.
///
/// The sign bit is part of the encoded bit pattern, so negative operands
/// round-trip exactly.
pub fn read_operand(buffer: &[u8]) -> Word {
    Endian::read_i32(buffer)
}

/// Builds a byte image from a list of instructions.
///
/// # Examples
/// ```
/// use svm::program;
///
/// let code = program![(PUSH 10), (POP), (HALT)];
/// assert_eq!(code, vec![0x01, 0x0A, 0x00, 0x00, 0x00, 0x02, 0xFF]);
/// ```
#[macro_export]
macro_rules! program {
    [$( ($opcode:ident $( $operand:expr )?) ),* $(,)?] => {{
        #[allow(unused_mut)]
        let mut code = ::std::vec::Vec::<u8>::new();
        $(
            code.push($crate::Opcode::$opcode.to_byte());
            $( $crate::push_operand(&mut code, ($operand) as $crate::Word); )?
        )*
        code
    }};
}
