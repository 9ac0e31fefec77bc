//! Terminal output module.
//!
//! Rendering is split in two:
//! - [`game_view`]: pure layout of a session snapshot into styled lines
//! - [`renderer`]: crossterm encoding of those lines to stdout
//!
//! Keeping layout free of I/O lets the board text be tested directly.

pub mod game_view;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use game_view::{plain_text, token_color, BoardView, Line, Rgb, Span};
pub use renderer::{encode_lines_into, TerminalRenderer};
