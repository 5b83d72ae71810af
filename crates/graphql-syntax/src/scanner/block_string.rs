//! Decoding of block (`"""..."""`) string literals.

use crate::scanner::StringValueError;
use crate::scanner::decode_string_value;
use memchr::memchr;
use memchr::memmem;
use std::borrow::Cow;

/// Decodes the content of a block string (without its `"""` delimiters).
///
/// `\"""` becomes `"""`, the result is de-indented with
/// [`dedent_block_string`], and the remaining escapes are then decoded the
/// same way as in a quoted string.
pub fn decode_block_string_value(content: &str) -> Result<Cow<'_, str>, StringValueError> {
    let dedented = if memmem::find(content.as_bytes(), b"\\\"\"\"").is_some() {
        let unescaped = content.replace("\\\"\"\"", "\"\"\"");
        Cow::Owned(dedent_block_string(&unescaped).into_owned())
    } else {
        dedent_block_string(content)
    };

    match dedented {
        Cow::Borrowed(text) => decode_string_value(text),
        Cow::Owned(text) if memchr(b'\\', text.as_bytes()).is_none() => Ok(Cow::Owned(text)),
        Cow::Owned(text) => Ok(Cow::Owned(decode_string_value(&text)?.into_owned())),
    }
}

/// Removes the common indentation and the leading and trailing empty lines
/// of a block string.
///
/// Only spaces count as indentation. The first line never counts toward the
/// common indentation and is never stripped, and neither do lines made only
/// of spaces. Indentation is removed before empty lines are trimmed.
pub fn dedent_block_string(raw: &str) -> Cow<'_, str> {
    if raw.is_empty() {
        return Cow::Borrowed(raw);
    }
    let has_line_break = memchr::memchr2(b'\n', b'\r', raw.as_bytes()).is_some();
    if !has_line_break && !raw.starts_with(' ') {
        return Cow::Borrowed(raw);
    }

    let mut lines = split_lines(raw);

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = leading_spaces(line.as_bytes());
        if indent < line.len() && common_indent.is_none_or(|common| indent < common) {
            common_indent = Some(indent);
        }
    }

    if let Some(common) = common_indent.filter(|common| *common > 0) {
        for line in lines.iter_mut().skip(1) {
            // Indentation is ASCII, so `common` (clamped to the line) is a
            // char boundary.
            *line = &line[common.min(leading_spaces(line.as_bytes()))..];
        }
    }

    let first_content = lines.iter().position(|line| !line.is_empty());
    let Some(first) = first_content else {
        return Cow::Borrowed("");
    };
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(first);

    Cow::Owned(lines[first..=last].join("\n"))
}

/// Splits on `\r\n`, `\n` and `\r`.
fn split_lines(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut pos = 0;
    while let Some(offset) = memchr::memchr2(b'\n', b'\r', &bytes[pos..]) {
        let at = pos + offset;
        lines.push(&raw[line_start..at]);
        pos = if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
            at + 2
        } else {
            at + 1
        };
        line_start = pos;
    }
    lines.push(&raw[line_start..]);
    lines
}

/// Counts leading spaces. Two- and four-space indents are the common case
/// and are checked first.
fn leading_spaces(line: &[u8]) -> usize {
    match line {
        [b' ', b' ', c, ..] if *c != b' ' => 2,
        [b' ', b' ', b' ', b' ', c, ..] if *c != b' ' => 4,
        _ => line.iter().take_while(|b| **b == b' ').count(),
    }
}
