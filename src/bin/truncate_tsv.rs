//! Truncate TSV field contents to a maximum length.
//!
//! Usage:
//!   truncate-tsv -l INT [-c] [-f INT[,INT...]] `<TSV>`...
//!
//! Processes each file in order, clipping the selected fields (default:
//! all) of every data line to at most the given number of characters, and
//! writes the transformed lines to stdout. Field indices are 0-based. A
//! selected field missing from a row aborts the run.

use clap::{Arg, ArgAction, Command};
use conllu_tools::truncate::{truncate_line, FieldSelector, TruncateOptions};
use std::fs;
use std::io::{self, Write};

fn main() {
    let matches = Command::new("truncate-tsv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Truncate TSV field contents to a maximum length")
        .arg(
            Arg::new("skip-comments")
                .long("skip-comments")
                .short('c')
                .action(ArgAction::SetTrue)
                .help("Do not truncate lines starting with '#'"),
        )
        .arg(
            Arg::new("fields")
                .long("fields")
                .short('f')
                .value_name("INT[,INT...]")
                .help("Comma-separated 0-based TSV fields to truncate (default: all)"),
        )
        .arg(
            Arg::new("length")
                .long("length")
                .short('l')
                .value_name("INT")
                .value_parser(clap::value_parser!(usize))
                .required(true)
                .help("Length to truncate to, in characters"),
        )
        .arg(
            Arg::new("file")
                .value_name("TSV")
                .help("TSV files")
                .required(true)
                .num_args(1..),
        )
        .get_matches();

    let selector = match matches.get_one::<String>("fields") {
        None => FieldSelector::All,
        Some(list) => FieldSelector::Fields(parse_field_list(list)),
    };
    let options = TruncateOptions {
        length: *matches.get_one::<usize>("length").unwrap(),
        selector,
        skip_comments: matches.get_flag("skip-comments"),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in matches.get_many::<String>("file").unwrap() {
        let text = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("truncate-tsv: {}: {}", path, e);
            std::process::exit(1);
        });
        for (line_no, line) in text.lines().enumerate() {
            let transformed = truncate_line(line, &options).unwrap_or_else(|e| {
                eprintln!("truncate-tsv: {}:{}: {}", path, line_no + 1, e);
                std::process::exit(1);
            });
            if let Err(e) = writeln!(out, "{}", transformed) {
                eprintln!("truncate-tsv: write error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Parse the `-f` value: comma-separated 0-based column indices.
fn parse_field_list(list: &str) -> Vec<usize> {
    list.split(',')
        .map(|part| {
            part.trim().parse::<usize>().unwrap_or_else(|_| {
                eprintln!("truncate-tsv: invalid field index '{}'", part);
                std::process::exit(2);
            })
        })
        .collect()
}
