//! TerminalRenderer: writes styled lines to a real terminal.
//!
//! Output is line oriented so it interleaves with the command prompt; colors
//! are optional so piped output stays plain.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::game_view::{Line, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
            color,
        }
    }

    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Print unstyled text followed by a newline
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.buf.queue(Print("\n"))?;
        self.flush_buf()
    }

    /// Print text without a newline, e.g. an input prompt
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode styled lines into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_lines_into(lines: &[Line], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        for span in line {
            if color {
                if let Some(fg) = span.fg {
                    out.queue(SetForegroundColor(rgb_to_color(fg)))?;
                }
                if span.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
            }
            out.queue(Print(&span.text))?;
            if color && (span.fg.is_some() || span.bold) {
                out.queue(ResetColor)?;
                out.queue(SetAttribute(Attribute::Reset))?;
            }
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
