//! Text command input module.
//!
//! Parses command lines such as `swap 0 1 1 1` or `ex 3 4` into
//! [`Command`]s. Independent of any terminal backend; the binary feeds it one
//! line at a time.

pub mod commands;
pub mod parse;

pub use tui_match3_types as types;

pub use commands::{help_lines, lookup, Command, CommandKind, CommandSpec, COMMANDS};
pub use parse::{parse_line, ParseError};
