//! Line parser: `name arg...` into a [`Command`].

use arrayvec::ArrayVec;

use crate::commands::{lookup, Command, CommandKind, CommandSpec};
use crate::types::MoveCommand;

/// Most arguments any command takes
pub const MAX_ARGS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command, type 'help' for the list of commands")]
    Empty,

    #[error("unknown command: {0}, type 'help' for the list of commands")]
    Unknown(String),

    #[error("{command} takes {expected} argument(s), got {actual}: {usage}")]
    ArgCount {
        command: &'static str,
        expected: usize,
        actual: usize,
        usage: &'static str,
    },

    #[error("{command}: {arg:?} is not a board index")]
    InvalidNumber { command: &'static str, arg: String },
}

/// Parse one input line
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let mut parts = line.split_whitespace();
    let name = parts.next().ok_or(ParseError::Empty)?;
    let spec = lookup(name).ok_or_else(|| ParseError::Unknown(name.to_string()))?;
    let args = parse_args(spec, parts.collect())?;
    Ok(build(spec.kind, &args))
}

fn parse_args(spec: &CommandSpec, raw: Vec<&str>) -> Result<ArrayVec<u8, MAX_ARGS>, ParseError> {
    if raw.len() != spec.args {
        return Err(ParseError::ArgCount {
            command: spec.name,
            expected: spec.args,
            actual: raw.len(),
            usage: spec.usage,
        });
    }

    let mut args = ArrayVec::new();
    for arg in raw {
        let value = arg.parse::<u8>().map_err(|_| ParseError::InvalidNumber {
            command: spec.name,
            arg: arg.to_string(),
        })?;
        args.try_push(value).map_err(|_| ParseError::ArgCount {
            command: spec.name,
            expected: spec.args,
            actual: MAX_ARGS + 1,
            usage: spec.usage,
        })?;
    }
    Ok(args)
}

/// Arguments were counted against the command table already.
fn build(kind: CommandKind, args: &[u8]) -> Command {
    let arg = |i: usize| args.get(i).copied().unwrap_or_default();
    match kind {
        CommandKind::Swap => Command::Move(MoveCommand::SmartSwap {
            a: (arg(0), arg(1)),
            b: (arg(2), arg(3)),
        }),
        CommandKind::SwapBonus => Command::Move(MoveCommand::BonusSwap {
            a: (arg(0), arg(1)),
            b: (arg(2), arg(3)),
        }),
        CommandKind::EraseRow => Command::Move(MoveCommand::EraseRow { row: arg(0) }),
        CommandKind::EraseCol => Command::Move(MoveCommand::EraseCol { col: arg(0) }),
        CommandKind::EraseCross => Command::Move(MoveCommand::EraseCross {
            row: arg(0),
            col: arg(1),
        }),
        CommandKind::EraseAll => Command::Move(MoveCommand::EraseAll),
        CommandKind::Brush => Command::Move(MoveCommand::Brush {
            row: arg(0),
            col: arg(1),
        }),
        CommandKind::Shuffle => Command::Move(MoveCommand::Shuffle),
        CommandKind::AutoSwap => Command::Move(MoveCommand::AutoSwap),
        CommandKind::Restart => Command::Move(MoveCommand::Restart),
        CommandKind::Help => Command::Help,
        CommandKind::Exit => Command::Exit,
        CommandKind::Snapshot => Command::Snapshot,
        CommandKind::Hint => Command::Hint,
        CommandKind::Switch => Command::Switch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_is_smart_swap() {
        assert_eq!(
            parse_line("s 0 1 1 1"),
            Ok(Command::Move(MoveCommand::SmartSwap {
                a: (0, 1),
                b: (1, 1)
            }))
        );
    }

    #[test]
    fn test_erase_commands() {
        assert_eq!(
            parse_line("er 3"),
            Ok(Command::Move(MoveCommand::EraseRow { row: 3 }))
        );
        assert_eq!(
            parse_line("erase_col 5"),
            Ok(Command::Move(MoveCommand::EraseCol { col: 5 }))
        );
        assert_eq!(
            parse_line("  EX 2 4  "),
            Ok(Command::Move(MoveCommand::EraseCross { row: 2, col: 4 }))
        );
        assert_eq!(parse_line("ea"), Ok(Command::Move(MoveCommand::EraseAll)));
    }

    #[test]
    fn test_session_commands() {
        assert_eq!(parse_line("q"), Ok(Command::Exit));
        assert_eq!(parse_line("?"), Ok(Command::Help));
        assert_eq!(parse_line("snap"), Ok(Command::Snapshot));
        assert_eq!(parse_line("sw"), Ok(Command::Switch));
        assert_eq!(parse_line("hint"), Ok(Command::Hint));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_line("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_line("fly 1"),
            Err(ParseError::Unknown("fly".to_string()))
        );
        assert!(matches!(
            parse_line("swap 1 2 3"),
            Err(ParseError::ArgCount {
                expected: 4,
                actual: 3,
                ..
            })
        ));
        assert!(matches!(
            parse_line("brush 1 x"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_line("brush 1 -2"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_line("shuffle now"),
            Err(ParseError::ArgCount { expected: 0, .. })
        ));
    }
}
