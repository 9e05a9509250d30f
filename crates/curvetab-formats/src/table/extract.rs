//! Locating a `&[u128]` declaration in source text and reading its literals

use crate::table::error::{Result, TableError};
use crate::table::literal::{Literal, ValueSequence};
use regex::Regex;

/// Line comment marker; everything after it on a line is ignored
const COMMENT_MARKER: &str = "//";

/// Extract the literals of table `name` from `source`
///
/// Finds the first `pub static NAME: &[u128] = &[ ... ];` declaration and
/// captures everything up to the first `];` after it. Within that span each
/// line loses everything from its first `//`, then every maximal run of ASCII
/// digits becomes one literal, in reading order. Commas, whitespace and any
/// other characters only separate literals.
///
/// An empty body (`&[]`) yields an empty sequence. Magnitude is not checked
/// here; see [`ValueSequence::to_values`].
pub fn extract(source: &str, name: &str) -> Result<ValueSequence> {
    if !is_identifier(name) {
        return Err(TableError::InvalidTableName(name.to_string()));
    }

    let pattern = declaration_pattern(name)?;
    let body = pattern
        .captures(source)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| TableError::TableNotFound(name.to_string()))?;

    // Line of the first body character
    let first_line = source[..body.start()].matches('\n').count() + 1;

    let digits = Regex::new(r"[0-9]+")?;
    let mut literals = Vec::new();
    for (offset, line) in body.as_str().split('\n').enumerate() {
        let code = line.find(COMMENT_MARKER).map_or(line, |pos| &line[..pos]);

        literals.extend(
            digits
                .find_iter(code)
                .map(|m| Literal::new(m.as_str(), first_line + offset)),
        );
    }

    Ok(ValueSequence::new(name, literals))
}

/// Build the non-greedy declaration matcher for `name`
///
/// Whitespace between tokens of the declaration head is flexible. The name is
/// followed by `:` so a shorter name never matches a longer one.
fn declaration_pattern(name: &str) -> Result<Regex> {
    let pattern = format!(
        r"pub\s+static\s+{}\s*:\s*&\s*\[\s*u128\s*\]\s*=\s*&\s*\[([\s\S]*?)\];",
        regex::escape(name)
    );
    Ok(Regex::new(&pattern)?)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
