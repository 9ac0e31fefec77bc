//! BoardView: maps a `core::GameSnapshot` into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CascadeFrame, GameSnapshot, Mask};
use crate::types::{Rect, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Option<Rgb>,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bold: false,
        }
    }

    pub fn colored(text: impl Into<String>, fg: Rgb) -> Self {
        Self {
            text: text.into(),
            fg: Some(fg),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub type Line = Vec<Span>;

/// Concatenate the text of a styled line
pub fn plain_text(line: &Line) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

pub fn token_color(token: Token) -> Rgb {
    match token {
        Token::A => Rgb::new(230, 70, 70),
        Token::B => Rgb::new(80, 200, 90),
        Token::C => Rgb::new(80, 140, 240),
        Token::D => Rgb::new(240, 210, 60),
        Token::E => Rgb::new(200, 90, 220),
        Token::F => Rgb::new(60, 210, 210),
        Token::G => Rgb::new(245, 150, 50),
        Token::H => Rgb::new(220, 220, 220),
    }
}

const LABEL: Rgb = Rgb::new(150, 150, 160);
const EMPTY: Rgb = Rgb::new(90, 90, 100);

/// Text layout for the board and the side information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardView {
    /// Hide the row labels and column footer
    bare: bool,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bare(mut self) -> Self {
        self.bare = true;
        self
    }

    /// Board, score, bonus chest and game-over banner
    pub fn render(&self, snap: &GameSnapshot) -> Vec<Line> {
        let mut lines = self.board(&snap.rows, None);
        lines.push(Vec::new());
        lines.push(vec![
            Span::colored("Score: ", LABEL),
            Span::plain(snap.score.to_string()).bold(),
            Span::colored("   Moves: ", LABEL),
            Span::plain(snap.moves.to_string()),
        ]);

        let mut chest = vec![Span::colored("Bonuses:", LABEL)];
        for bonus in &snap.bonuses {
            chest.push(Span::plain(format!(" {} {}", bonus.kind, bonus.count)));
        }
        lines.push(chest);

        if snap.game_over {
            lines.push(vec![Span::colored("GAME OVER", token_color(Token::A)).bold()]);
        }
        lines
    }

    /// Plain-text form of [`BoardView::render`]
    pub fn render_lines(&self, snap: &GameSnapshot) -> Vec<String> {
        self.render(snap).iter().map(plain_text).collect()
    }

    /// Intermediate cascade board with the combination about to be erased
    /// marked by `*`
    pub fn render_frame(&self, frame: &CascadeFrame) -> Vec<Line> {
        self.board(&frame.rows, Some(&frame.erased))
    }

    /// Rows are given row 0 first and drawn top row first.
    fn board(&self, rows: &[String], marked: Option<&Mask>) -> Vec<Line> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let rect = Rect::new(width as u8, height as u8);
        let mut lines = Vec::with_capacity(height + 2);

        for (row, text) in rows.iter().enumerate().rev() {
            let mut line = Vec::with_capacity(width + 1);
            if !self.bare {
                line.push(Span::colored(format!("{:>2} |", row), LABEL));
            }
            for (col, ch) in text.chars().enumerate() {
                let is_marked = match (rect, marked) {
                    (Some(rect), Some(mask)) => rect
                        .coordinate(row as i32, col as i32)
                        .is_some_and(|c| mask.contains(c)),
                    _ => false,
                };
                let prefix = if is_marked { '*' } else { ' ' };
                let cell = format!("{}{}", prefix, ch);
                line.push(match Token::from_char(ch) {
                    Some(token) if is_marked => Span::colored(cell, token_color(token)).bold(),
                    Some(token) => Span::colored(cell, token_color(token)),
                    None => Span::colored(cell, EMPTY),
                });
            }
            lines.push(line);
        }

        if !self.bare {
            lines.push(vec![Span::colored(format!("   +{}", "--".repeat(width)), LABEL)]);
            let footer: String = (0..width).map(|c| format!(" {}", c % 10)).collect();
            lines.push(vec![Span::colored(format!("    {}", footer), LABEL)]);
        }
        lines
    }
}
