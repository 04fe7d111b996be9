//! Command dispatch.
//!
//! Turns a line of input into a handler call: tokenize, look the first token
//! up in the table, call the handler with the full token list.
//!
//! Two entry points share one implementation. [`try_dispatch`] returns a
//! tagged result; [`dispatch`] folds it onto a single integer, using
//! [`CMD_NOT_FOUND`] for lookup failures and `0` for empty input.

use thiserror::Error;
use tracing::{debug, trace};

use super::definitions::{find_command, Command};
use super::tokenizer::{effective_delimiters, tokenize, DEFAULT_DELIMITER};

/// Returned by [`dispatch`] when there is no table or no command matches.
///
/// Handlers are free to return any `i32`, including this value; callers that
/// need to tell the cases apart should use [`try_dispatch`].
pub const CMD_NOT_FOUND: i32 = i32::MIN;

/// Successful outcome of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// Input was absent, empty, or held only delimiters. No handler ran.
    NoOp,
    /// A handler ran and returned this value.
    Completed(i32),
}

impl Dispatched {
    /// Projects the outcome onto the integer convention used by [`dispatch`].
    pub fn code(self) -> i32 {
        match self {
            Self::NoOp => 0,
            Self::Completed(code) => code,
        }
    }
}

/// Reasons a line could not be dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No command table was supplied.
    #[error("no command table")]
    NoTable,

    /// The first token does not name any command in the table.
    #[error("command not found: {0}")]
    CommandNotFound(String),
}

impl DispatchError {
    /// Projects the error onto the integer convention used by [`dispatch`].
    pub fn code(&self) -> i32 {
        CMD_NOT_FOUND
    }
}

/// Lookup failure against a table that is known to exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("command not found: {name}")]
pub struct CommandNotFound {
    /// The unmatched first token.
    pub name: String,
}

impl From<CommandNotFound> for DispatchError {
    fn from(err: CommandNotFound) -> Self {
        Self::CommandNotFound(err.name)
    }
}

/// Tokenizes `input`, resolves the command and runs its handler.
///
/// `delimiters` of `None` or `""` means [`DEFAULT_DELIMITER`]. A missing table
/// is checked before the input, so `try_dispatch(None, _, None)` is an error.
pub fn try_dispatch(
    table: Option<&[Command]>,
    delimiters: Option<&str>,
    input: Option<&str>,
) -> Result<Dispatched, DispatchError> {
    let table = table.ok_or(DispatchError::NoTable)?;
    let delimiters = effective_delimiters(delimiters);
    let outcome = dispatch_in(table, delimiters, input.unwrap_or_default())?;
    Ok(outcome)
}

fn dispatch_in(
    table: &[Command],
    delimiters: &str,
    input: &str,
) -> Result<Dispatched, CommandNotFound> {
    let argv = tokenize(input, delimiters);
    trace!(?argv, delimiters, "tokenized input");

    let Some(&name) = argv.first() else {
        return Ok(Dispatched::NoOp);
    };

    let command = find_command(table, name).ok_or_else(|| {
        debug!(command = name, "no matching command");
        CommandNotFound {
            name: name.to_string(),
        }
    })?;

    let code = (command.handler)(argv.len(), &argv);
    trace!(command = command.name, code, "handler returned");

    Ok(Dispatched::Completed(code))
}

/// Integer form of [`try_dispatch`].
///
/// Returns the handler's value verbatim, `0` for absent/empty input, and
/// [`CMD_NOT_FOUND`] for a missing table or unknown command.
pub fn dispatch(table: Option<&[Command]>, delimiters: Option<&str>, input: Option<&str>) -> i32 {
    match try_dispatch(table, delimiters, input) {
        Ok(outcome) => outcome.code(),
        Err(err) => err.code(),
    }
}

/// A command table bound to a delimiter set.
#[derive(Debug, Clone)]
pub struct Dispatcher<'a> {
    table: &'a [Command],
    delimiters: String,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher over `table` using [`DEFAULT_DELIMITER`].
    pub fn new(table: &'a [Command]) -> Self {
        Self {
            table,
            delimiters: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Sets the delimiter set. An empty string keeps the default.
    pub fn with_delimiters(self, delimiters: impl Into<String>) -> Self {
        let delimiters = delimiters.into();
        Self {
            delimiters: effective_delimiters(Some(&delimiters)).to_string(),
            ..self
        }
    }

    /// Returns the command table.
    pub fn commands(&self) -> &'a [Command] {
        self.table
    }

    /// Returns the active delimiter set.
    pub fn delimiters(&self) -> &str {
        &self.delimiters
    }

    /// See [`try_dispatch`]. The table is always present, so the only
    /// failure is an unknown command.
    pub fn try_dispatch(&self, input: &str) -> Result<Dispatched, CommandNotFound> {
        dispatch_in(self.table, &self.delimiters, input)
    }

    /// See [`dispatch`].
    pub fn dispatch(&self, input: &str) -> i32 {
        dispatch(Some(self.table), Some(&self.delimiters), Some(input))
    }
}
