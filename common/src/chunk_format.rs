//! A module for formatting long strings as multi-line C string literals.
//!
//! The output relies on implicit concatenation of adjacent literals:
//!
//! ```text
//!     "0123"
//!       "4567"
//!       "89"
//! ```
//!
//! Each line is one chunk of the input. The first line is indented by a tab and
//! every continuation line by a tab and two spaces.

use crate::InvalidArgument;
use itertools::Itertools;
use log::trace;

const CHUNK_SEPARATOR: &str = "\"\n\t  \"";

/// Break a string into consecutive chunks of `chunk_size` characters.
/// The last chunk may be shorter. An empty string gives one empty chunk so the
/// literal built from it is still valid.
///
/// # Errors
/// Returns [`InvalidArgument::ZeroChunkSize`] if `chunk_size` is zero.
pub fn split_chunks(s: &str, chunk_size: usize) -> Result<Vec<String>, InvalidArgument> {
    if chunk_size == 0 {
        return Err(InvalidArgument::ZeroChunkSize);
    }
    if s.is_empty() {
        return Ok(vec![String::new()]);
    }

    // Split on chars, not bytes, so we never cut a multi-byte character
    let chunks = s.chars().chunks(chunk_size);
    let mut output = Vec::new();
    for chunk in &chunks {
        output.push(chunk.collect::<String>());
    }

    trace!("Split {} chars into {} chunks", s.chars().count(), output.len());
    Ok(output)
}

/// Escape anything that would end or break a C string literal.
#[must_use]
pub fn escape_chunk(chunk: &str) -> String {
    let mut escaped = String::with_capacity(chunk.len());
    for c in chunk.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Format a string as an indented, multi-line C string literal.
///
/// # Errors
/// Returns [`InvalidArgument::ZeroChunkSize`] if `chunk_size` is zero.
pub fn to_c_literal(s: &str, chunk_size: usize) -> Result<String, InvalidArgument> {
    let body = split_chunks(s, chunk_size)?
        .iter()
        .map(|chunk| escape_chunk(chunk))
        .join(CHUNK_SEPARATOR);
    Ok(format!("\t\"{body}\""))
}

/// Recover the original string from a literal built by [`to_c_literal`].
#[must_use]
pub fn from_c_literal(literal: &str) -> String {
    let mut output = String::with_capacity(literal.len());
    for line in literal.lines() {
        let line = line.trim_start_matches(['\t', ' ']);
        let line = line.strip_prefix('"').unwrap_or(line);
        let line = line.strip_suffix('"').unwrap_or(line);

        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                output.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => output.push('\n'),
                Some('r') => output.push('\r'),
                Some('t') => output.push('\t'),
                Some(other) => output.push(other),
                None => output.push('\\'),
            }
        }
    }
    output
}
