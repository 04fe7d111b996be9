//! ucmd - a tiny command tokenizer and dispatcher.
//!
//! Splits a command line on a delimiter set, looks the first token up in a
//! static table and calls the matching handler with `(argc, argv)`:
//!
//! ```
//! use ucmd::commands::{dispatch, Command, CMD_NOT_FOUND};
//!
//! fn count(argc: usize, _argv: &[&str]) -> i32 {
//!     argc as i32
//! }
//!
//! static TABLE: &[Command] = &[Command::new("c", "count arguments", count)];
//!
//! assert_eq!(dispatch(Some(TABLE), Some(":"), Some("c:1::2:")), 3);
//! assert_eq!(dispatch(Some(TABLE), None, Some("x")), CMD_NOT_FOUND);
//! assert_eq!(dispatch(Some(TABLE), None, Some("")), 0);
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;

pub use commands::{
    dispatch, try_dispatch, Command, Dispatcher, CMD_NOT_FOUND, DEFAULT_DELIMITER,
};
pub use error::{Result, UcmdError};
