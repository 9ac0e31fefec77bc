//! Match-3 command-line runner (default binary).
//!
//! Reads one command per line from stdin, applies it to the session and
//! redraws the board. Diagnostics go to stderr through `tracing`, filtered by
//! `MATCH3_LOG` (or `RUST_LOG`).
//!
//! Flags:
//! - `--seed <n>`: RNG seed (env `MATCH3_SEED`, default: system clock)
//! - `--preset <classic|diagonal>`: starting layout (default: classic)
//! - `--no-color`: plain output (env `MATCH3_NO_COLOR`)

use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_match3::core::{GameConfig, GameState, Preset};
use tui_match3::input::{help_lines, parse_line, Command};
use tui_match3::term::{BoardView, TerminalRenderer};

const WELCOME: &str = "Type 'help' for the list of commands or 'exit' to leave.";

#[derive(Debug)]
struct Options {
    config: GameConfig,
    color: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let options = parse_options(std::env::args().skip(1))?;
    info!(
        preset = options.config.preset.as_str(),
        seed = options.config.seed,
        "starting session"
    );

    let mut game = GameState::new(options.config).context("failed to set up the board")?;
    let mut term = TerminalRenderer::new(options.color);
    run(&mut game, &mut term)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MATCH3_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut seed = std::env::var("MATCH3_SEED")
        .ok()
        .map(|v| parse_seed(&v))
        .transpose()?;
    let mut preset = Preset::Classic;
    let mut color = std::env::var("MATCH3_NO_COLOR").map_or(true, |v| v.is_empty() || v == "0");

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                seed = Some(parse_seed(&value)?);
            }
            "--preset" => {
                let value = args.next().ok_or_else(|| anyhow!("--preset needs a value"))?;
                preset = Preset::from_str(&value)
                    .ok_or_else(|| anyhow!("unknown preset {value:?} (classic, diagonal)"))?;
            }
            "--no-color" => color = false,
            other => return Err(anyhow!("unknown argument {other:?}")),
        }
    }

    Ok(Options {
        config: GameConfig::new(preset, seed.unwrap_or_else(clock_seed)),
        color,
    })
}

fn parse_seed(value: &str) -> Result<u32> {
    value
        .parse()
        .with_context(|| format!("seed must be a 32-bit unsigned integer, got {value:?}"))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn run(game: &mut GameState, term: &mut TerminalRenderer) -> Result<()> {
    let view = BoardView::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    term.print(WELCOME)?;
    term.draw(&view.render(&game.snapshot()))?;

    loop {
        term.prompt("> ")?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Err(err) => term.print(&err.to_string())?,
            Ok(Command::Exit) => {
                term.print("Goodbye!")?;
                break;
            }
            Ok(Command::Help) => {
                for text in help_lines() {
                    term.print(&text)?;
                }
            }
            Ok(Command::Snapshot) => {
                term.print(&serde_json::to_string_pretty(&game.snapshot())?)?;
            }
            Ok(Command::Hint) => match game.hint() {
                Some((a, b)) => term.print(&format!(
                    "try: swap {} {} {} {}",
                    a.row(),
                    a.col(),
                    b.row(),
                    b.col()
                ))?,
                None => term.print("no swap creates a combination")?,
            },
            Ok(Command::Switch) => {
                let on = !game.record_steps();
                game.set_record_steps(on);
                term.print(if on {
                    "cascade steps: on"
                } else {
                    "cascade steps: off"
                })?;
            }
            Ok(Command::Move(command)) => match game.apply(command) {
                Ok(report) => {
                    for frame in &report.frames {
                        term.draw(&view.render_frame(frame))?;
                        term.print("")?;
                    }
                    term.draw(&view.render(&game.snapshot()))?;
                    if report.score_delta > 0 {
                        term.print(&format!("+{}", report.score_delta))?;
                    }
                }
                Err(err) if err.is_broken() => {
                    term.print(&format!("internal error, move undone: {err}"))?;
                }
                Err(err) => term.print(&err.to_string())?,
            },
        }

        if game.is_game_over() {
            term.print("Game over!")?;
            term.draw(&view.render(&game.snapshot()))?;
            break;
        }
    }
    Ok(())
}
