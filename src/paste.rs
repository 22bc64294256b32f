//! Merge per-token TSV values into a CoNLL-U column.
//!
//! The two inputs are expected to carry the same tokens in the same order,
//! but not the same framing: the CoNLL-U side interleaves comment lines and
//! blank sentence separators, while the TSV side table may drop its blank
//! lines (or keep them). A strict line-for-line zip would therefore fail on
//! well-formed input.
//!
//! Instead [`Merge`] runs a two-cursor loop over peekable line sources:
//! inspect both lookaheads, then advance only the side the decision calls
//! for. Comment/blank annotation lines are emitted verbatim and consume the
//! annotation side only; blank table lines are skipped and consume the
//! table side only; a pair of data lines is validated (field counts, token
//! text agreement) and merged, consuming both. The loop ends as soon as
//! either lookahead is exhausted.
//!
//! Any format or mismatch error is fatal: the iterator yields it once and
//! then fuses. Silent misalignment would corrupt the merged annotations, so
//! there is no skip-and-continue mode.

use crate::conllu;
use std::fmt;
use std::iter::Peekable;

/// Options for the merge: which CoNLL-U column receives the value, the
/// separator between old and new content, and which of the two TSV columns
/// holds the token text. Both indices are 1-based, as in the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub field: usize,
    pub separator: String,
    pub text_field: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        MergeOptions {
            field: 5,
            separator: "-".to_string(),
            text_field: 1,
        }
    }
}

impl MergeOptions {
    /// Check index ranges before any input is read: `field` must name one
    /// of the ten CoNLL-U columns and `text_field` one of the two TSV
    /// columns.
    pub fn validate(&self) -> Result<(), MergeError> {
        if self.field == 0 || self.field > conllu::FIELD_COUNT {
            return Err(MergeError::BadOption(format!(
                "--field must be in 1..={}, got {}",
                conllu::FIELD_COUNT,
                self.field
            )));
        }
        if self.text_field != 1 && self.text_field != 2 {
            return Err(MergeError::BadOption(format!(
                "--text-field must be 1 or 2, got {}",
                self.text_field
            )));
        }
        Ok(())
    }
}

/// Errors during merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// CoNLL-U data line did not split into exactly ten fields.
    ConlluFieldCount(usize),
    /// TSV data line did not split into exactly two fields.
    TsvFieldCount(usize),
    /// Token text disagrees between the two inputs.
    FormMismatch { conllu: String, tsv: String },
    /// Invalid option value (index out of range).
    BadOption(String),
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::ConlluFieldCount(n) => {
                write!(
                    f,
                    "expected {} tab-separated fields, got {}",
                    conllu::FIELD_COUNT,
                    n
                )
            }
            MergeError::TsvFieldCount(n) => {
                write!(f, "expected 2 tab-separated fields, got {}", n)
            }
            MergeError::FormMismatch { conllu, tsv } => {
                write!(f, "form mismatch: \"{}\" != \"{}\"", conllu, tsv)
            }
            MergeError::BadOption(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MergeError {}

/// Two-cursor merge over a CoNLL-U line source and a TSV line source.
///
/// Yields one `Result<String, MergeError>` per output line, without
/// trailing newlines. Created by [`merge`].
pub struct Merge<C: Iterator, T: Iterator> {
    conllu: Peekable<C>,
    tsv: Peekable<T>,
    options: MergeOptions,
    failed: bool,
}

/// Build a [`Merge`] over two line sequences.
pub fn merge<'a, C, T>(conllu: C, tsv: T, options: MergeOptions) -> Merge<C::IntoIter, T::IntoIter>
where
    C: IntoIterator<Item = &'a str>,
    T: IntoIterator<Item = &'a str>,
{
    Merge {
        conllu: conllu.into_iter().peekable(),
        tsv: tsv.into_iter().peekable(),
        options,
        failed: false,
    }
}

impl<'a, C, T> Merge<C, T>
where
    C: Iterator<Item = &'a str>,
    T: Iterator<Item = &'a str>,
{
    /// Count the non-blank table lines left unconsumed once the merge loop
    /// has ended. The merge stops at the shorter input, so a non-zero count
    /// means the table file had entries no annotation line ever matched;
    /// callers may want to warn about it. Drains the table source.
    pub fn unconsumed_table_lines(&mut self) -> usize {
        self.tsv.by_ref().filter(|l| !l.trim().is_empty()).count()
    }

    fn merge_pair(&self, c_line: &str, t_line: &str) -> Result<String, MergeError> {
        let c_fields: Vec<&str> = c_line.split('\t').collect();
        if c_fields.len() != conllu::FIELD_COUNT {
            return Err(MergeError::ConlluFieldCount(c_fields.len()));
        }
        let t_fields: Vec<&str> = t_line.split('\t').collect();
        if t_fields.len() != 2 {
            return Err(MergeError::TsvFieldCount(t_fields.len()));
        }

        let text_idx = self.options.text_field - 1;
        let c_form = c_fields[conllu::FORM];
        let t_form = t_fields[text_idx];
        if c_form != t_form {
            return Err(MergeError::FormMismatch {
                conllu: c_form.to_string(),
                tsv: t_form.to_string(),
            });
        }
        // the other of the two table fields
        let t_value = t_fields[1 - text_idx];

        let mut out: Vec<String> = c_fields.iter().map(|s| s.to_string()).collect();
        let target = &mut out[self.options.field - 1];
        target.push_str(&self.options.separator);
        target.push_str(t_value);
        Ok(out.join("\t"))
    }
}

impl<'a, C, T> Iterator for Merge<C, T>
where
    C: Iterator<Item = &'a str>,
    T: Iterator<Item = &'a str>,
{
    type Item = Result<String, MergeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            // Stop as soon as either side runs out; trailing lines of the
            // other side are left unconsumed.
            let c_line = *self.conllu.peek()?;
            let t_line = *self.tsv.peek()?;

            if conllu::is_blank(c_line) || conllu::is_comment(c_line) {
                self.conllu.next();
                return Some(Ok(c_line.to_string()));
            }
            if t_line.trim().is_empty() {
                // The side table may omit sentence separators; skip its
                // blank lines without touching the annotation side.
                self.tsv.next();
                continue;
            }

            let result = self.merge_pair(c_line, t_line);
            if result.is_err() {
                self.failed = true;
            } else {
                self.conllu.next();
                self.tsv.next();
            }
            return Some(result);
        }
    }
}
