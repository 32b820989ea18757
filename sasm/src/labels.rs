use crate::*;
use std::collections::HashMap;

pub const MAX_LABELS: usize = 128;
pub const MAX_LABEL_LENGTH: usize = 31;

pub type LabelMap<'i> = HashMap<&'i str, u32>;

/// Records a label definition at the given byte address.
///
/// Duplicate definitions are rejected rather than shadowed, so a reference
/// can never silently bind to the wrong address.
pub fn define_label<'i>(labels: &mut LabelMap<'i>, name: Span<'i>, address: u32) -> Result<()> {
    let text = name.as_str();

    if text.len() > MAX_LABEL_LENGTH {
        return Err(new_parser_error(
            name,
            format!(
                "Label exceeds maximum length of {} characters",
                MAX_LABEL_LENGTH
            ),
        ));
    }

    if labels.contains_key(text) {
        return Err(new_parser_error(
            name,
            format!("Duplicate label \"{}\"", text),
        ));
    }

    if labels.len() >= MAX_LABELS {
        return Err(new_parser_error(
            name,
            format!("Too many labels (at most {})", MAX_LABELS),
        ));
    }

    labels.insert(text, address);
    Ok(())
}
