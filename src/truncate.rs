//! Clip TSV field contents to a maximum length.
//!
//! Row-wise independent transformation: each line is split on tabs, the
//! selected fields (or all of them) are cut to at most `length` characters,
//! and the line is rejoined. No cross-row state, no column-count
//! requirement. Field indices are 0-based here, unlike the 1-based columns
//! of the paste tool; both match their original command-line interfaces.

use std::fmt;

/// Which fields of a row to truncate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelector {
    /// Every field of every row.
    All,
    /// Only the named 0-based columns; a missing column is an error.
    Fields(Vec<usize>),
}

/// Options for one truncation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateOptions {
    /// Maximum field length in characters. Zero empties selected fields.
    pub length: usize,
    pub selector: FieldSelector,
    /// Pass `#`-prefixed lines through untouched.
    pub skip_comments: bool,
}

/// Errors during truncation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruncateError {
    /// A selected column does not exist in the current row.
    FieldOutOfRange { index: usize, fields: usize },
}

impl fmt::Display for TruncateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruncateError::FieldOutOfRange { index, fields } => {
                write!(f, "field {} out of range for line with {} fields", index, fields)
            }
        }
    }
}

impl std::error::Error for TruncateError {}

/// Cut a string to at most `length` characters, on `char` boundaries.
fn clip(s: &str, length: usize) -> &str {
    match s.char_indices().nth(length) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Transform one line. Blank and whitespace-only lines come back unchanged,
/// as do comment lines when `skip_comments` is set.
pub fn truncate_line(line: &str, options: &TruncateOptions) -> Result<String, TruncateError> {
    if line.trim().is_empty() {
        return Ok(line.to_string());
    }
    if options.skip_comments && line.starts_with('#') {
        return Ok(line.to_string());
    }
    let mut fields: Vec<&str> = line.split('\t').collect();
    match &options.selector {
        FieldSelector::All => {
            for field in fields.iter_mut() {
                *field = clip(field, options.length);
            }
        }
        FieldSelector::Fields(indices) => {
            for &index in indices {
                if index >= fields.len() {
                    return Err(TruncateError::FieldOutOfRange {
                        index,
                        fields: fields.len(),
                    });
                }
                fields[index] = clip(fields[index], options.length);
            }
        }
    }
    Ok(fields.join("\t"))
}

/// Lazy per-line adapter over a line sequence.
pub fn truncate_lines<'a, I>(
    lines: I,
    options: &'a TruncateOptions,
) -> impl Iterator<Item = Result<String, TruncateError>> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    lines.into_iter().map(move |line| truncate_line(line, options))
}
