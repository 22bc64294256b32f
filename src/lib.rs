//! # conllu-tools
//!
//! Small line-oriented utilities for tab-separated linguistic annotation
//! files: merging per-token values from a TSV side table into a CoNLL-U
//! column ([`paste`]), and clipping TSV field contents to a maximum length
//! ([`truncate`]).
//!
//! Both components are pure iterator adapters over line sequences; file
//! handling and argument parsing live in the binaries under `src/bin/`.
//!
//! Note on indexing: `paste` addresses columns with 1-based indices while
//! `truncate` uses 0-based field lists. The asymmetry is inherited from the
//! original command-line tools and kept on purpose.

pub mod conllu;
pub mod paste;
pub mod truncate;
