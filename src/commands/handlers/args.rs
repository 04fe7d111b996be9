//! Handlers that work with their argument vector.

use std::io::{self, Write};

use super::write_stdout;

/// Writes each argument on its own line, command name first.
pub fn write_args(out: &mut dyn Write, argv: &[&str]) -> io::Result<()> {
    for arg in argv {
        writeln!(out, "{arg}")?;
    }
    Ok(())
}

/// Handle `27`: always returns 27.
pub fn return_27_cmd(_argc: usize, _argv: &[&str]) -> i32 {
    27
}

/// Handle `c`: returns the argument count, command name included.
pub fn count_cmd(argc: usize, _argv: &[&str]) -> i32 {
    i32::try_from(argc).unwrap_or(i32::MAX)
}

/// Handle `p`: prints its arguments.
pub fn print_cmd(_argc: usize, argv: &[&str]) -> i32 {
    write_stdout(argv.first().copied().unwrap_or_default(), |out| write_args(out, argv))
}
