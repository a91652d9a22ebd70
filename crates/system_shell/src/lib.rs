//! Command interpreter for the desktop terminal.
//!
//! Lines are parsed into a [`Command`] and evaluated against a [`ShellHost`], which supplies
//! window opening, storage, and environment values. The interpreter has no history, completion,
//! or quoting.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod command;
pub mod interpreter;

pub use command::{parse_command, Command};
pub use interpreter::{interpret, neofetch, ShellHost, ShellOutput, CREATE_USAGE, HELP_TEXT};
