use crate::*;
use pest::iterators::Pair;
use svm::Word;

/// Parses an `int` pair into an operand value.
///
/// Decimal literals are signed; binary, octal and hexadecimal literals are
/// unsigned and keep their bit pattern, so `0xFFFFFFFF` parses to -1.
/// Out-of-range literals are an error, never silently truncated.
pub fn process_int(pair: Pair<Rule>) -> Result<Word> {
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::bin_uint => process_uint_lit(inner.into_inner().next().unwrap(), 2),
        Rule::oct_uint => process_uint_lit(inner.into_inner().next().unwrap(), 8),
        Rule::hex_uint => process_uint_lit(inner.into_inner().next().unwrap(), 16),
        Rule::dec_int => {
            let span = inner.as_span();
            i32::from_str_radix(span.as_str(), 10)
                .map_err(|err| new_parser_error(span, format!("Parsing integer failed: {}", err)))
        }
        _ => unreachable!(),
    }
}

fn process_uint_lit(pair: Pair<Rule>, radix: u32) -> Result<Word> {
    let span = pair.as_span();
    u32::from_str_radix(span.as_str(), radix)
        .map(|value| value as Word)
        .map_err(|err| new_parser_error(span, format!("Parsing integer failed: {}", err)))
}
