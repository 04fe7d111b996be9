//! Fixed-output handlers (help, hello, ls).

use std::io::{self, Write};

use super::{write_stdout, DEMO_COMMANDS};
use crate::commands::definitions::generate_help_text;

/// Writes the help listing for `DEMO_COMMANDS`.
pub fn write_help(out: &mut dyn Write) -> io::Result<()> {
    out.write_all(generate_help_text(DEMO_COMMANDS).as_bytes())
}

/// Writes the greeting.
pub fn write_hello(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Hello World!")
}

/// Writes a short list of integers.
pub fn write_list(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "1 2 3")
}

/// Handle `help`.
pub fn help_cmd(_argc: usize, argv: &[&str]) -> i32 {
    write_stdout(argv.first().copied().unwrap_or_default(), write_help)
}

/// Handle `hello`. Extra arguments are ignored.
pub fn hello_cmd(_argc: usize, argv: &[&str]) -> i32 {
    write_stdout(argv.first().copied().unwrap_or_default(), write_hello)
}

/// Handle `ls`.
pub fn list_cmd(_argc: usize, argv: &[&str]) -> i32 {
    write_stdout(argv.first().copied().unwrap_or_default(), write_list)
}
