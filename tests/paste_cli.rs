//! CLI-level tests for the paste-conllu binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_inputs(dir: &TempDir, conllu: &str, tsv: &str) -> (String, String) {
    let conllu_path = dir.path().join("input.conllu");
    let tsv_path = dir.path().join("values.tsv");
    fs::write(&conllu_path, conllu).unwrap();
    fs::write(&tsv_path, tsv).unwrap();
    (
        conllu_path.to_str().unwrap().to_string(),
        tsv_path.to_str().unwrap().to_string(),
    )
}

#[test]
fn merges_into_default_field() {
    let dir = TempDir::new().unwrap();
    let conllu = "# sent_id = 1\n\
                  1\tdog\t_\t_\t_\t_\t_\t_\t_\t_\n\
                  2\tran\t_\t_\t_\t_\t_\t_\t_\t_\n\
                  \n";
    let tsv = "dog\tN\nran\tV\n";
    let (conllu_path, tsv_path) = write_inputs(&dir, conllu, tsv);

    let mut cmd = cargo_bin_cmd!("paste-conllu");
    cmd.arg(&conllu_path).arg(&tsv_path);

    let expected = "# sent_id = 1\n\
                    1\tdog\t_\t_\t_-N\t_\t_\t_\t_\t_\n\
                    2\tran\t_\t_\t_-V\t_\t_\t_\t_\t_\n\
                    \n";
    cmd.assert().success().stdout(predicate::eq(expected));
}

#[test]
fn custom_field_and_separator() {
    let dir = TempDir::new().unwrap();
    let conllu = "1\tdog\t_\t_\t_\t_\t_\t_\t_\t_\n";
    let tsv = "dog\tcanine\n";
    let (conllu_path, tsv_path) = write_inputs(&dir, conllu, tsv);

    let mut cmd = cargo_bin_cmd!("paste-conllu");
    cmd.args(["-f", "3", "-s", "|"]).arg(&conllu_path).arg(&tsv_path);

    cmd.assert()
        .success()
        .stdout(predicate::eq("1\tdog\t_|canine\t_\t_\t_\t_\t_\t_\t_\n"));
}

#[test]
fn mismatch_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let conllu = "1\tdog\t_\t_\t_\t_\t_\t_\t_\t_\n";
    let tsv = "cat\tN\n";
    let (conllu_path, tsv_path) = write_inputs(&dir, conllu, tsv);

    let mut cmd = cargo_bin_cmd!("paste-conllu");
    cmd.arg(&conllu_path).arg(&tsv_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("form mismatch"));
}

#[test]
fn bad_field_count_fails() {
    let dir = TempDir::new().unwrap();
    // 9 fields instead of 10
    let conllu = "1\tdog\t_\t_\t_\t_\t_\t_\t_\n";
    let tsv = "dog\tN\n";
    let (conllu_path, tsv_path) = write_inputs(&dir, conllu, tsv);

    let mut cmd = cargo_bin_cmd!("paste-conllu");
    cmd.arg(&conllu_path).arg(&tsv_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected 10 tab-separated fields, got 9"));
}

#[test]
fn out_of_range_field_option_rejected() {
    let dir = TempDir::new().unwrap();
    let (conllu_path, tsv_path) = write_inputs(&dir, "", "");

    let mut cmd = cargo_bin_cmd!("paste-conllu");
    cmd.args(["-f", "11"]).arg(&conllu_path).arg(&tsv_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--field"));
}

#[test]
fn leftover_table_lines_warn_on_stderr() {
    let dir = TempDir::new().unwrap();
    let conllu = "1\tdog\t_\t_\t_\t_\t_\t_\t_\t_\n";
    let tsv = "dog\tN\nran\tV\nwas\tV\n";
    let (conllu_path, tsv_path) = write_inputs(&dir, conllu, tsv);

    let mut cmd = cargo_bin_cmd!("paste-conllu");
    cmd.arg(&conllu_path).arg(&tsv_path);

    cmd.assert()
        .success()
        .stdout(predicate::eq("1\tdog\t_\t_\t_-N\t_\t_\t_\t_\t_\n"))
        .stderr(predicate::str::contains("2 unmatched line(s)"));
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = cargo_bin_cmd!("paste-conllu");
    cmd.arg("no-such.conllu").arg("no-such.tsv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no-such.conllu"));
}
