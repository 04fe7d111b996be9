//! End-to-end tests for the ucmd binary.

use super::common::{run_ucmd, run_ucmd_with_stdin};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn test_hello() {
    let (code, stdout, _) = run_ucmd(&["-e", "hello"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Hello World!\n");
}

#[test]
fn test_hello_extra_args() {
    let (code, stdout, _) = run_ucmd(&["-e", "hello with extra arguments"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Hello World!\n");
}

#[test]
fn test_ls() {
    let (code, stdout, _) = run_ucmd(&["-e", "ls"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "1 2 3\n");
}

#[test]
fn test_argv_printed_in_order() {
    let (code, stdout, _) = run_ucmd(&["-e", "p arg1 arg2 arg3"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "p\narg1\narg2\narg3\n");
}

#[test]
fn test_unknown_command_exit_status() {
    let (code, stdout, _) = run_ucmd(&["-e", "bad_cmd not in list"]);
    assert_eq!(code, 1);
    assert_eq!(
        stdout,
        "Unknown command: bad_cmd. Type help for available commands.\n"
    );
}

#[test]
fn test_show_results() {
    let (code, stdout, _) = run_ucmd(&["--show-results", "-e", "27", "-e", "c 1 2 3 4"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "=> 27\n=> 5\n");
}

#[test]
fn test_custom_delimiter_flag() {
    let (code, stdout, _) = run_ucmd(&["-d", "&", "--show-results", "-e", "c&1&2&3&4"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "=> 5\n");
}

#[test]
fn test_list() {
    let (code, stdout, _) = run_ucmd(&["--list"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Available Commands:\n"));
    assert!(stdout.contains("\tls \tlist some integers\n"));
}

#[test]
fn test_stdin_lines() {
    let (code, stdout, _) = run_ucmd_with_stdin(&[], "hello\n\n   \nls\n");
    assert_eq!(code, 0);
    // Piped stdin is not a terminal, so no prompt is written.
    assert_eq!(stdout, "Hello World!\n1 2 3\n");
}

#[test]
fn test_stdin_unknown_command_continues() {
    let (code, stdout, _) = run_ucmd_with_stdin(&[], "nope\nls\n");
    assert_eq!(code, 1);
    assert_eq!(
        stdout,
        "Unknown command: nope. Type help for available commands.\n1 2 3\n"
    );
}

#[test]
fn test_config_file_delimiters() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "delimiters = \":\"").unwrap();
    let path = file.path().to_str().unwrap();

    let (code, stdout, _) = run_ucmd(&["--config", path, "-e", "p:a::b:"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "p\na\nb\n");
}

#[test]
fn test_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_results = 3").unwrap();
    let path = file.path().to_str().unwrap();

    let (code, stdout, stderr) = run_ucmd(&["--config", path, "-e", "hello"]);
    assert_eq!(code, 2);
    assert_eq!(stdout, "");
    assert!(stderr.contains("Configuration error"));
}
