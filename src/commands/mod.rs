//! Command parsing and dispatch for ucmd.
//!
//! Tokenizing, table lookup and the handler calling convention live here,
//! separate from the console that feeds lines in, so dispatch can be tested
//! and embedded on its own.

pub mod definitions;
pub mod handlers;
pub mod router;
pub mod tokenizer;

pub use definitions::{find_command, generate_help_text, Command, Handler};
pub use handlers::DEMO_COMMANDS;
pub use router::{
    dispatch, try_dispatch, CommandNotFound, DispatchError, Dispatched, Dispatcher,
    CMD_NOT_FOUND,
};
pub use tokenizer::{tokenize, DEFAULT_DELIMITER};
