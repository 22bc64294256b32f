//! CoNLL-U format constants and line classification.
//!
//! CoNLL-U is a plain-text tabular format for dependency-annotated
//! sentences: ten tab-separated fields per token line, blank lines between
//! sentences, and `#`-prefixed sentence-level comment lines. The canonical
//! column list lives here so the "exactly ten fields" invariant is enforced
//! in one place.

/// The ten canonical CoNLL-U columns, in order.
pub const FIELDS: [&str; 10] = [
    "ID", "FORM", "LEMMA", "UPOS", "XPOS", "FEATS", "HEAD", "DEPREL", "DEPS", "MISC",
];

/// Number of fields on a CoNLL-U data line.
pub const FIELD_COUNT: usize = FIELDS.len();

/// Zero-based index of the FORM column (the surface token text).
pub const FORM: usize = 1;

/// A sentence-level comment line.
pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Empty or whitespace-only line (sentence separator in CoNLL-U).
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
