use crate::int_util::process_int;
use crate::labels::*;
use crate::source_map::{SourceMap, SourceMapItem};
use crate::*;
use matches::debug_assert_matches;
use std::collections::HashMap;
use svm::{push_operand, Opcode, ParseEnumError, Word};

type InstrVec<'i> = Vec<ParsedInstruction<'i>>;

/// Branch operand as written in the source, before address resolution.
#[derive(Debug, PartialEq)]
pub enum JumpTarget<'i> {
    Address(Word),
    Label(Span<'i>),
}

#[derive(Debug, PartialEq)]
pub enum ParsedInstruction<'i> {
    Plain(Opcode),

    Value {
        opcode: Opcode,
        value: Word,
    },

    Branch {
        opcode: Opcode,
        target: JumpTarget<'i>,
    },
}

impl<'i> ParsedInstruction<'i> {
    pub fn opcode(&self) -> Opcode {
        match *self {
            ParsedInstruction::Plain(opcode) => opcode,
            ParsedInstruction::Value { opcode, .. } => opcode,
            ParsedInstruction::Branch { opcode, .. } => opcode,
        }
    }
}

fn process_opcode(pair: &Pair<Rule>) -> Result<Opcode> {
    pair.as_str()
        .parse()
        .map_err(|err: ParseEnumError| new_parser_error(pair.as_span(), format!("{}", err)))
}

fn process_jump_target<'i>(pair: Pair<'i, Rule>) -> Result<JumpTarget<'i>> {
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::int => Ok(JumpTarget::Address(process_int(inner)?)),
        Rule::identifier => Ok(JumpTarget::Label(inner.as_span())),
        _ => unreachable!(),
    }
}

fn process_instruction<'i>(pair: Pair<'i, Rule>, instr: &mut InstrVec<'i>) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);

    let inner = pair.into_inner().next().unwrap();
    let rule = inner.as_rule();
    let mut pairs = inner.into_inner();

    match rule {
        Rule::instruction_value => {
            let opcode = process_opcode(&pairs.next().unwrap())?;
            let value = process_int(pairs.next().unwrap())?;
            instr.push(ParsedInstruction::Value { opcode, value });
        }
        Rule::instruction_branch => {
            let opcode = process_opcode(&pairs.next().unwrap())?;
            let target = process_jump_target(pairs.next().unwrap())?;
            instr.push(ParsedInstruction::Branch { opcode, target });
        }
        Rule::instruction_plain => {
            let opcode = process_opcode(&pairs.next().unwrap())?;
            instr.push(ParsedInstruction::Plain(opcode));
        }
        _ => unreachable!(),
    }

    Ok(())
}

/// Pass 1: walks the parsed program, collecting instructions, the label
/// table and the source map. Label addresses are accumulated from
/// `Opcode::size`, the same table emission uses, and labels themselves
/// occupy no bytes.
pub fn process_instructions<'i>(
    pair: Pair<'i, Rule>,
) -> Result<(InstrVec<'i>, LabelMap<'i>, SourceMap)> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut instructions = Vec::new();
    let mut labels = HashMap::new();
    let mut source_map = Vec::new();
    let mut pc = 0u32;

    for statement in pair.into_inner() {
        match statement.as_rule() {
            Rule::label => {
                let name = statement.into_inner().next().unwrap();
                define_label(&mut labels, name.as_span(), pc)?;
            }
            Rule::instruction => {
                let line = statement.as_span().start_pos().line_col().0 as u32;
                process_instruction(statement, &mut instructions)?;

                source_map.push(SourceMapItem { line, address: pc });
                pc += instructions.last().unwrap().opcode().size();
            }
            Rule::EOI => (),
            _ => unreachable!(),
        }
    }

    Ok((instructions, labels, source_map))
}

fn resolve_jump_target(labels: &LabelMap, target: &JumpTarget) -> Result<Word> {
    match target {
        JumpTarget::Address(address) => Ok(*address),
        JumpTarget::Label(label) => labels
            .get(label.as_str())
            .map(|&address| address as Word)
            .ok_or_else(|| {
                new_parser_error(
                    label.clone(),
                    format!("Undefined label \"{}\"", label.as_str()),
                )
            }),
    }
}

/// Pass 2: emits the opcode byte and, for operand-bearing instructions, the
/// operand value or resolved label address as 4 little-endian bytes.
pub fn assemble_instructions(instr: &[ParsedInstruction], labels: &LabelMap) -> Result<Vec<u8>> {
    let mut code = Vec::new();

    for pi in instr {
        let start = code.len();
        code.push(pi.opcode().to_byte());

        match pi {
            ParsedInstruction::Plain(_) => (),
            ParsedInstruction::Value { value, .. } => push_operand(&mut code, *value),
            ParsedInstruction::Branch { target, .. } => {
                let address = resolve_jump_target(labels, target)?;
                push_operand(&mut code, address);
            }
        }

        debug_assert_eq!((code.len() - start) as u32, pi.opcode().size());
    }

    Ok(code)
}
