// Quote list extractor

use anyhow::{Context, Result};
use nom::{
    character::complete::{char, digit1, space0},
    combinator::rest,
    IResult,
};
use std::fs;
use std::path::Path;

/// Read `path` and extract its numbered quote lines, in file order.
pub fn extract_quotes_from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read quotes file '{}'", path.display()))?;
    Ok(extract_quotes(&content))
}

/// Extract quotes from file content.
///
/// A quote line is one or more digits, a period, optional whitespace, then
/// the quote text. Blank lines, `#` comments, and all-dash separator lines
/// are skipped; anything else that does not match is silently ignored.
pub fn extract_quotes(content: &str) -> Vec<String> {
    let mut quotes = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || is_separator(line) {
            continue;
        }
        if let Ok((_, text)) = numbered_line(line) {
            let text = strip_quote_pair(text.trim());
            if !text.is_empty() {
                quotes.push(text.to_string());
            }
        }
    }
    quotes
}

/// Parse a numbered line: `<digits>.<optional space><text>`.
fn numbered_line(input: &str) -> IResult<&str, &str> {
    let (input, _) = digit1(input)?;
    let (input, _) = char('.')(input)?;
    let (input, _) = space0(input)?;
    rest(input)
}

/// A separator is one or more dashes and nothing else.
fn is_separator(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b == b'-')
}

/// Strip one surrounding quotation pair, if present. Single pass: at most
/// one pair is removed, and only when both ends carry the same character.
fn strip_quote_pair(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}
