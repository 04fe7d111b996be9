//! Command definitions.
//!
//! A command table is a plain slice of [`Command`] entries. Tables are usually
//! `static`, built by the embedding application and never mutated.

use std::fmt;

/// Signature of a command handler.
///
/// `argv[0]` is the command name itself and `argc == argv.len()`. The return
/// value is forwarded verbatim to the caller of dispatch.
pub type Handler = fn(argc: usize, argv: &[&str]) -> i32;

/// Definition of a command.
#[derive(Clone, Copy)]
pub struct Command {
    /// Command name, matched exactly against the first token.
    pub name: &'static str,
    /// Short description shown in help.
    pub help: &'static str,
    /// Function invoked when the command matches.
    pub handler: Handler,
}

impl Command {
    /// Creates a command entry.
    pub const fn new(name: &'static str, help: &'static str, handler: Handler) -> Self {
        Self {
            name,
            help,
            handler,
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Finds a command by name.
///
/// Matching is exact and case-sensitive. When a table holds the same name
/// twice, the earlier entry wins.
pub fn find_command<'a>(table: &'a [Command], name: &str) -> Option<&'a Command> {
    table.iter().find(|c| c.name == name)
}

/// Generates help text listing every command in `table`.
pub fn generate_help_text(table: &[Command]) -> String {
    let command_lines = table
        .iter()
        .map(|cmd| format!("\t{} \t{}\n", cmd.name, cmd.help))
        .collect::<Vec<_>>()
        .join("");

    format!("Available Commands:\n{}", command_lines)
}
