//! Line-oriented console.
//!
//! Feeds lines from any `BufRead` source into a [`Dispatcher`], the way a
//! serial console would, and reports unknown commands on the given writer.
//! Handler output goes wherever the handlers write it (stdout for the demo
//! table), not to the console writer.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::commands::{CommandNotFound, Dispatched, Dispatcher};
use crate::error::Result;

/// Default prompt shown in interactive mode.
pub const DEFAULT_PROMPT: &str = "ucmd> ";

/// What happened to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or delimiter-only line.
    NoOp,
    /// A handler ran and returned this code.
    Completed(i32),
    /// The first token did not match any command.
    NotFound(String),
}

/// Counters collected over a console run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleSummary {
    /// Lines that ran a handler.
    pub executed: usize,
    /// Lines naming an unknown command.
    pub not_found: usize,
    /// Blank or delimiter-only lines.
    pub no_op: usize,
}

impl ConsoleSummary {
    fn record(&mut self, outcome: &LineOutcome) {
        match outcome {
            LineOutcome::NoOp => self.no_op += 1,
            LineOutcome::Completed(_) => self.executed += 1,
            LineOutcome::NotFound(_) => self.not_found += 1,
        }
    }

    /// Returns true if every non-blank line matched a command.
    pub fn all_found(&self) -> bool {
        self.not_found == 0
    }
}

/// Drives a dispatcher from lines of text.
#[derive(Debug, Clone)]
pub struct Console<'a> {
    dispatcher: Dispatcher<'a>,
    prompt: String,
    show_results: bool,
}

impl<'a> Console<'a> {
    /// Creates a console with the default prompt and result echo off.
    pub fn new(dispatcher: Dispatcher<'a>) -> Self {
        Self {
            dispatcher,
            prompt: DEFAULT_PROMPT.to_string(),
            show_results: false,
        }
    }

    /// Sets the interactive prompt.
    pub fn with_prompt(self, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..self
        }
    }

    /// Enables writing `=> <code>` after each completed command.
    pub fn with_show_results(self, show_results: bool) -> Self {
        Self {
            show_results,
            ..self
        }
    }

    /// Returns the underlying dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher<'a> {
        &self.dispatcher
    }

    /// Dispatches one line and writes any console feedback to `out`.
    pub fn execute<W: Write>(&self, line: &str, out: &mut W) -> Result<LineOutcome> {
        let outcome = match self.dispatcher.try_dispatch(line) {
            Ok(Dispatched::NoOp) => LineOutcome::NoOp,
            Ok(Dispatched::Completed(code)) => LineOutcome::Completed(code),
            Err(CommandNotFound { name }) => LineOutcome::NotFound(name),
        };

        match &outcome {
            LineOutcome::NotFound(name) => {
                writeln!(
                    out,
                    "Unknown command: {}. Type help for available commands.",
                    name
                )?;
            }
            LineOutcome::Completed(code) if self.show_results => {
                writeln!(out, "=> {}", code)?;
            }
            _ => {}
        }
        out.flush()?;

        debug!(line, ?outcome, "line dispatched");
        Ok(outcome)
    }

    /// Reads lines until EOF, dispatching each one.
    ///
    /// With `interactive` set, the prompt is written before every read.
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// ending the session.
    pub fn run_lines<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        out: &mut W,
        interactive: bool,
    ) -> Result<ConsoleSummary> {
        let mut summary = ConsoleSummary::default();
        let mut buf = Vec::new();

        loop {
            if interactive {
                write!(out, "{}", self.prompt)?;
                out.flush()?;
            }

            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let decoded = String::from_utf8_lossy(&buf);
            if matches!(decoded, Cow::Owned(_)) {
                warn!(bytes = buf.len(), "replaced invalid UTF-8 in input line");
            }

            let line: &str = &decoded;
            let trimmed = line
                .strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(line);

            let outcome = self.execute(trimmed, out)?;
            summary.record(&outcome);
        }

        if interactive {
            writeln!(out)?;
        }

        info!(
            executed = summary.executed,
            not_found = summary.not_found,
            no_op = summary.no_op,
            "console input closed"
        );
        Ok(summary)
    }

    /// Dispatches each of `lines` in order.
    pub fn run_all<W: Write>(&self, lines: &[String], out: &mut W) -> Result<ConsoleSummary> {
        let mut summary = ConsoleSummary::default();
        for line in lines {
            let outcome = self.execute(line, out)?;
            summary.record(&outcome);
        }
        Ok(summary)
    }
}
