//! Demonstration command handlers.
//!
//! `DEMO_COMMANDS` is the table the `ucmd` binary dispatches against. The
//! printing handlers are thin wrappers around writer-generic functions so
//! their output can be checked without capturing stdout.

pub mod args;
pub mod system;

use std::io::{self, Write};

use tracing::warn;

use super::definitions::Command;

/// Exit code returned by a printing handler whose output could not be written.
pub const WRITE_FAILED: i32 = 1;

/// All demonstration commands, in lookup order.
pub static DEMO_COMMANDS: &[Command] = &[
    Command::new("27", "returns 27", args::return_27_cmd),
    Command::new("hello", "says \"Hello World!\"", system::hello_cmd),
    Command::new("ls", "list some integers", system::list_cmd),
    Command::new("c", "count arguments", args::count_cmd),
    Command::new("p", "print arguments", args::print_cmd),
    Command::new("help", "show available commands", system::help_cmd),
];

/// Runs `body` against a locked stdout and maps the outcome to a handler code.
fn write_stdout(command: &str, body: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> i32 {
    write_output(&mut io::stdout().lock(), command, body)
}

/// Runs `body` against `out`, flushes, and maps the outcome to a handler code.
fn write_output(
    out: &mut dyn Write,
    command: &str,
    body: impl FnOnce(&mut dyn Write) -> io::Result<()>,
) -> i32 {
    match body(&mut *out).and_then(|()| out.flush()) {
        Ok(()) => 0,
        Err(e) => {
            warn!(command, "failed to write handler output: {e}");
            WRITE_FAILED
        }
    }
}
