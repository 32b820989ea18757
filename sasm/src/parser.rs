use pest_derive::Parser;

/// Parser for the assembly language, generated from `sasm.pest`.
#[derive(Parser)]
#[grammar = "sasm.pest"]
pub struct AsmParser;
