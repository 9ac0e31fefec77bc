//! Command line parsing tests

use tui_match3::input::{help_lines, parse_line, Command, ParseError, COMMANDS};
use tui_match3::types::MoveCommand;

#[test]
fn test_names_and_aliases_agree() {
    let pairs = [
        ("swap 1 2 1 3", "s 1 2 1 3"),
        ("swap_bonus 0 0 7 7", "sb 0 0 7 7"),
        ("erase_row 4", "er 4"),
        ("erase_col 5", "ec 5"),
        ("erase_cross 2 3", "ex 2 3"),
        ("erase_all", "ea"),
        ("brush 6 1", "b 6 1"),
        ("shuffle", "sh"),
        ("auto_swap", "a"),
        ("restart", "r"),
        ("switch", "sw"),
        ("help", "?"),
        ("exit", "q"),
    ];
    for (long, short) in pairs {
        assert_eq!(parse_line(long), parse_line(short), "{long} vs {short}");
        assert!(parse_line(long).is_ok(), "{long}");
    }
}

#[test]
fn test_moves_carry_their_arguments() {
    assert_eq!(
        parse_line("swap 1 2 1 3"),
        Ok(Command::Move(MoveCommand::SmartSwap {
            a: (1, 2),
            b: (1, 3)
        }))
    );
    assert_eq!(
        parse_line("  SB 0 0   7 7 "),
        Ok(Command::Move(MoveCommand::BonusSwap {
            a: (0, 0),
            b: (7, 7)
        }))
    );
    assert_eq!(
        parse_line("ex 2 3"),
        Ok(Command::Move(MoveCommand::EraseCross { row: 2, col: 3 }))
    );
    assert_eq!(parse_line("quit"), Ok(Command::Exit));
    assert_eq!(parse_line("snap"), Ok(Command::Snapshot));
    assert_eq!(parse_line("hint"), Ok(Command::Hint));
}

#[test]
fn test_bad_lines() {
    assert_eq!(parse_line("   "), Err(ParseError::Empty));
    assert_eq!(
        parse_line("jump 1"),
        Err(ParseError::Unknown("jump".to_string()))
    );
    assert!(matches!(
        parse_line("erase_row"),
        Err(ParseError::ArgCount {
            command: "erase_row",
            expected: 1,
            actual: 0,
            ..
        })
    ));
    assert!(matches!(
        parse_line("shuffle now"),
        Err(ParseError::ArgCount { actual: 1, .. })
    ));
    assert!(matches!(
        parse_line("brush -1 2"),
        Err(ParseError::InvalidNumber { command: "brush", .. })
    ));
    assert!(matches!(
        parse_line("erase_col 300"),
        Err(ParseError::InvalidNumber { .. })
    ));
}

#[test]
fn test_help_lists_every_command() {
    let help = help_lines().join("\n");
    for spec in COMMANDS {
        assert!(help.contains(spec.usage), "missing {}", spec.name);
    }
}
