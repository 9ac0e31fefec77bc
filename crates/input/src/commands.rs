//! Command table: names, aliases, argument counts and help text.

use crate::types::MoveCommand;

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A move to apply to the session
    Move(MoveCommand),
    Help,
    Exit,
    /// Print the session as JSON
    Snapshot,
    /// Show the smart swap `auto_swap` would play
    Hint,
    /// Toggle printing of intermediate cascade boards
    Switch,
}

/// What a command name resolves to, before its arguments are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Swap,
    SwapBonus,
    EraseRow,
    EraseCol,
    EraseCross,
    EraseAll,
    Brush,
    Shuffle,
    AutoSwap,
    Restart,
    Help,
    Exit,
    Snapshot,
    Hint,
    Switch,
}

/// One row of the command table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub kind: CommandKind,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Number of numeric arguments
    pub args: usize,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        kind: CommandKind::Swap,
        name: "swap",
        aliases: &["s"],
        args: 4,
        usage: "swap <row1> <col1> <row2> <col2>",
        description: "Swap two adjacent tokens (must create a combination)",
    },
    CommandSpec {
        kind: CommandKind::SwapBonus,
        name: "swap_bonus",
        aliases: &["sb"],
        args: 4,
        usage: "swap_bonus <row1> <col1> <row2> <col2>",
        description: "Swap any two tokens using a swap bonus",
    },
    CommandSpec {
        kind: CommandKind::EraseRow,
        name: "erase_row",
        aliases: &["er"],
        args: 1,
        usage: "erase_row <row>",
        description: "Erase a whole row using a row bonus",
    },
    CommandSpec {
        kind: CommandKind::EraseCol,
        name: "erase_col",
        aliases: &["ec"],
        args: 1,
        usage: "erase_col <col>",
        description: "Erase a whole column using a col bonus",
    },
    CommandSpec {
        kind: CommandKind::EraseCross,
        name: "erase_cross",
        aliases: &["ex"],
        args: 2,
        usage: "erase_cross <row> <col>",
        description: "Erase a row and a column using a cross bonus",
    },
    CommandSpec {
        kind: CommandKind::EraseAll,
        name: "erase_all",
        aliases: &["ea"],
        args: 0,
        usage: "erase_all",
        description: "Erase the whole board using an all bonus",
    },
    CommandSpec {
        kind: CommandKind::Brush,
        name: "brush",
        aliases: &["b"],
        args: 2,
        usage: "brush <row> <col>",
        description: "Erase every token of the color at a cell using a brush bonus",
    },
    CommandSpec {
        kind: CommandKind::Shuffle,
        name: "shuffle",
        aliases: &["sh"],
        args: 0,
        usage: "shuffle",
        description: "Shuffle the board using a shuffle bonus",
    },
    CommandSpec {
        kind: CommandKind::AutoSwap,
        name: "auto_swap",
        aliases: &["a"],
        args: 0,
        usage: "auto_swap",
        description: "Play the first available swap",
    },
    CommandSpec {
        kind: CommandKind::Restart,
        name: "restart",
        aliases: &["r"],
        args: 0,
        usage: "restart",
        description: "Start the game over",
    },
    CommandSpec {
        kind: CommandKind::Hint,
        name: "hint",
        aliases: &[],
        args: 0,
        usage: "hint",
        description: "Show a swap that would create a combination",
    },
    CommandSpec {
        kind: CommandKind::Snapshot,
        name: "snapshot",
        aliases: &["snap"],
        args: 0,
        usage: "snapshot",
        description: "Print the game state as JSON",
    },
    CommandSpec {
        kind: CommandKind::Switch,
        name: "switch",
        aliases: &["sw"],
        args: 0,
        usage: "switch",
        description: "Toggle printing of intermediate cascade steps",
    },
    CommandSpec {
        kind: CommandKind::Help,
        name: "help",
        aliases: &["h", "?"],
        args: 0,
        usage: "help",
        description: "Show this help",
    },
    CommandSpec {
        kind: CommandKind::Exit,
        name: "exit",
        aliases: &["quit", "q"],
        args: 0,
        usage: "exit",
        description: "Leave the game",
    },
];

/// Look up a command by name or alias (case-insensitive)
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    let name = name.to_lowercase();
    COMMANDS
        .iter()
        .find(|spec| spec.name == name || spec.aliases.contains(&name.as_str()))
}

/// Help text, one command per line
pub fn help_lines() -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    for spec in COMMANDS {
        let aliases = if spec.aliases.is_empty() {
            String::new()
        } else {
            format!("  ({})", spec.aliases.join(" "))
        };
        lines.push(format!("  {}: {}{}", spec.description, spec.usage, aliases));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_alias() {
        assert_eq!(lookup("ex").map(|s| s.kind), Some(CommandKind::EraseCross));
        assert_eq!(lookup("?").map(|s| s.kind), Some(CommandKind::Help));
        assert_eq!(lookup("QUIT").map(|s| s.kind), Some(CommandKind::Exit));
        assert!(lookup("jump").is_none());
    }

    #[test]
    fn test_aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for spec in COMMANDS {
            assert!(seen.insert(spec.name), "duplicate {}", spec.name);
            for alias in spec.aliases {
                assert!(seen.insert(*alias), "duplicate {}", alias);
            }
        }
    }

    #[test]
    fn test_help_mentions_every_command() {
        let text = help_lines().join("\n");
        for spec in COMMANDS {
            assert!(text.contains(spec.usage));
        }
    }
}
