//! Variant of the `paste` command for CoNLL-U data.
//!
//! Usage:
//!   paste-conllu [-f INT] [-s STRING] [-t INT] `<CONLLU>` `<TSV>`
//!
//! Merges the value column of a two-column TSV file into a CoNLL-U column,
//! matching rows by token text, and writes the result to stdout. Any format
//! error or token mismatch aborts the run with a non-zero exit.

use clap::{Arg, Command};
use conllu_tools::paste::{merge, MergeOptions};
use std::fs;
use std::io::{self, Write};

fn main() {
    let matches = Command::new("paste-conllu")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Paste per-token TSV values into a CoNLL-U column")
        .arg(
            Arg::new("field")
                .long("field")
                .short('f')
                .value_name("INT")
                .value_parser(clap::value_parser!(usize))
                .default_value("5")
                .help("1-based index of the CoNLL-U field to paste to"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .short('s')
                .value_name("STRING")
                .default_value("-")
                .help("String separating the pasted from the existing value"),
        )
        .arg(
            Arg::new("text-field")
                .long("text-field")
                .short('t')
                .value_name("INT")
                .value_parser(clap::value_parser!(usize))
                .default_value("1")
                .help("1-based index of the TSV field holding the token text"),
        )
        .arg(
            Arg::new("conllu")
                .help("CoNLL-U file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("tsv")
                .help("Two-column TSV file with token text and values")
                .required(true)
                .index(2),
        )
        .get_matches();

    let options = MergeOptions {
        field: *matches.get_one::<usize>("field").unwrap(),
        separator: matches.get_one::<String>("separator").unwrap().clone(),
        text_field: *matches.get_one::<usize>("text-field").unwrap(),
    };
    if let Err(e) = options.validate() {
        eprintln!("paste-conllu: {}", e);
        std::process::exit(2);
    }

    let conllu_path = matches.get_one::<String>("conllu").unwrap();
    let tsv_path = matches.get_one::<String>("tsv").unwrap();
    let conllu_text = read_input(conllu_path);
    let tsv_text = read_input(tsv_path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut merged = merge(conllu_text.lines(), tsv_text.lines(), options);
    for item in merged.by_ref() {
        let line = item.unwrap_or_else(|e| {
            eprintln!("paste-conllu: {}", e);
            std::process::exit(1);
        });
        if let Err(e) = writeln!(out, "{}", line) {
            eprintln!("paste-conllu: write error: {}", e);
            std::process::exit(1);
        }
    }

    let leftover = merged.unconsumed_table_lines();
    if leftover > 0 {
        eprintln!(
            "paste-conllu: warning: {} unmatched line(s) at end of {}",
            leftover, tsv_path
        );
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("paste-conllu: {}: {}", path, e);
        std::process::exit(1);
    })
}
