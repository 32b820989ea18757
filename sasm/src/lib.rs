//! Assembler for the [svm](../svm/index.html) stack machine.
//!
//! The main function provided by this crate is [`assemble`](fn.assemble.html),
//! which accepts a program written in a line-oriented assembly language and
//! outputs the binary image the VM executes. Additionally, a
//! [`SourceMap`](type.SourceMap.html) is returned, which associates each
//! assembled instruction with its source line and byte address.
//!
//! Parsing is implemented using [pest], and the [`Error`](type.Error.html)
//! type used by this crate is just a type alias of `pest::error::Error`, so
//! every diagnostic carries the source line and column and pretty-prints the
//! offending span.
//!
//! # Assembly Language
//!
//! The source is processed line by line. A comment starts with a semicolon
//! `;` and continues to the end of the line; blank lines are ignored. A line
//! holds either a single label definition (`name:`) or a single instruction;
//! mixing both on one line is not supported.
//!
//! A label names the byte address of the next emitted instruction and may be
//! referenced before it is defined. Label names are case-sensitive
//! identifiers of at most 31 characters, and a program may define at most
//! 128 of them.
//!
//! Integer literals can be signed decimal, hexadecimal (`0x`), octal (`0o`)
//! or binary (`0b`). Unsigned literals keep their 32-bit pattern, so
//! `0xFFFFFFFF` means -1.
//!
//! Quick reference for all mnemonics:
//!
//! Mnemonic | Operand  | Short Description                     | Syntax
//! ---------|----------|---------------------------------------|----------------
//! `PUSH`   | integer  | Push value onto the stack             | `PUSH value`
//! `POP`    | -        | Discard top of stack                  | `POP`
//! `DUP`    | -        | Duplicate top of stack                | `DUP`
//! `ADD`    | -        | Integer addition                      | `ADD`
//! `SUB`    | -        | Integer subtraction                   | `SUB`
//! `MUL`    | -        | Integer multiplication                | `MUL`
//! `DIV`    | -        | Integer division                      | `DIV`
//! `CMP`    | -        | Less-than comparison                  | `CMP`
//! `JMP`    | target   | Unconditional jump                    | `JMP target`
//! `JZ`     | target   | Jump if top of stack is zero          | `JZ target`
//! `JNZ`    | target   | Jump if top of stack is not zero      | `JNZ target`
//! `STORE`  | index    | Store top of stack in memory          | `STORE index`
//! `LOAD`   | index    | Load memory cell onto the stack       | `LOAD index`
//! `CALL`   | target   | Call subroutine                       | `CALL target`
//! `RET`    | -        | Return from subroutine                | `RET`
//! `HALT`   | -        | Stop execution                        | `HALT`
//!
//! A `target` is usually a label name, but an explicit byte address is also
//! accepted.
//!
//! # Examples
//! ```
//! let source = "
//! PUSH 10
//! PUSH 20
//! ADD
//! HALT";
//!
//! let (code, _) = sasm::assemble(source).unwrap();
//! assert_eq!(code.len(), 12);
//! ```
//!
//! [pest]: https://docs.rs/pest/

mod instructions;
mod int_util;
mod labels;
mod parser;
mod source_map;


use parser::{AsmParser, Rule};
use pest::iterators::Pair;
use pest::{Parser, Span};
pub use source_map::{SourceMap, SourceMapItem};

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// Translates assembly source into a binary image.
///
/// The translation runs in two passes over the parsed statement list: the
/// first resolves every label to a byte offset, the second emits opcodes and
/// operands. Both passes derive instruction sizes from the same opcode
/// table, so label addresses cannot drift from emission.
pub fn assemble(input: &str) -> Result<(Vec<u8>, SourceMap)> {
    let program = parse(input)?;
    let (instr, labels, source_map) = instructions::process_instructions(program)?;
    let code = instructions::assemble_instructions(&instr, &labels)?;

    Ok((code, source_map))
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(AsmParser::parse(Rule::program, input)?.next().unwrap())
}
