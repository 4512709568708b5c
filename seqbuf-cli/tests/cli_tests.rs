//! Integration tests for the `seqbuf` binary

use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::process::{Command, Output, Stdio};

const PROMPT: &str = "Enter the number of integers: ";

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seqbuf"));
    cmd.args(args)
        .env_remove("RUST_LOG")
        .env_remove("SEQBUF_LOG")
        .env_remove("SEQBUF_MAX_COUNT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

fn run_with_input(args: &[&str], input: &str) -> Output {
    let mut child = command(args).spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_five_elements() {
    let output = run_with_input(&[], "5\n");
    assert_eq!(output.status.code(), Some(0));

    let expected: String = (0..5).map(|i| format!("arr[{i}] = {i}\n")).collect();
    assert_eq!(stdout_of(&output), format!("{PROMPT}{expected}"));
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_zero_elements() {
    let output = run_with_input(&[], "0\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), PROMPT);
}

#[test]
fn test_negative_count() {
    let output = run_with_input(&[], "-1\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_of(&output).contains("arr["));
    assert!(stderr_of(&output).contains("Memory allocation failed"));
}

#[test]
fn test_non_numeric_input() {
    let output = run_with_input(&[], "abc\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_of(&output).contains("arr["));
    assert!(stderr_of(&output).contains("Invalid input"));
}

#[test]
fn test_invalid_utf8_input() {
    let mut child = command(&[]).spawn().unwrap();
    child.stdin.take().unwrap().write_all(b"\xff\xfe\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_of(&output).contains("arr["));
    assert!(stderr_of(&output).starts_with("Invalid input"));
}

#[test]
fn test_trailing_garbage_ignored() {
    let mut child = command(&["--no-prompt"]).spawn().unwrap();
    child.stdin.take().unwrap().write_all(b"2 \xff\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "arr[0] = 0\narr[1] = 1\n");
}

#[test]
fn test_empty_input() {
    let output = run_with_input(&[], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_of(&output).contains("arr["));
    assert!(stderr_of(&output).contains("Invalid input"));
}

#[test]
fn test_max_count_flag_injects_failure() {
    let output = run_with_input(&["--max-count", "3"], "4\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_of(&output).contains("arr["));
    assert_eq!(stderr_of(&output).trim_end(), "Memory allocation failed");
}

#[test]
fn test_max_count_env_injects_failure() {
    let mut child = command(&[])
        .env("SEQBUF_MAX_COUNT", "0")
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"1\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Memory allocation failed"));
}

#[test]
fn test_no_prompt() {
    let output = run_with_input(&["--no-prompt"], "2");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "arr[0] = 0\narr[1] = 1\n");
}

#[test]
fn test_large_count() {
    let output = run_with_input(&["--no-prompt"], "100000\n");
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 100_000);
    assert_eq!(lines[0], "arr[0] = 0");
    assert_eq!(lines[99_999], "arr[99999] = 99999");
}

#[test]
fn test_stdin_from_file() {
    let mut file: File = tempfile::tempfile().unwrap();
    writeln!(file, "3 ignored").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let output = command(&["--no-prompt"])
        .stdin(Stdio::from(file))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "arr[0] = 0\narr[1] = 1\narr[2] = 2\n");
}
