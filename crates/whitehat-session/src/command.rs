//! Text command parsing.

use std::path::PathBuf;

use whitehat_core::{Move, PieceKind, Position};

use crate::error::ArgumentError;

/// A runtime setting changed with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `set board on|off` -- print the board after each successful command.
    ShowBoard(bool),
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `move e7e5`, or just `e7e5`.
    Move(Move),
    /// `castle e8g8` -- castle for the side to move.
    Castle(Move),
    /// `enpassant d4e3` -- capture en passant for the side to move.
    EnPassant(Move),
    /// `promote a8 queen` -- promote the pawn on a square.
    Promote {
        /// Square holding the pawn.
        square: Position,
        /// Kind to promote to; never king or pawn.
        kind: PieceKind,
    },
    /// `load moves.txt` -- replay a move file.
    Load(PathBuf),
    /// `reset` -- start a new game.
    Reset,
    /// `board` -- print the board.
    Board,
    /// `status` -- print the status line.
    Status,
    /// `history` -- print the move history.
    History,
    /// `set <name> <value>`.
    Set(Setting),
    /// `quit` -- leave the command loop.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ArgumentError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    let keyword = tokens[0].to_ascii_lowercase();
    match keyword.as_str() {
        "move" => Ok(Command::Move(parse_move(arg(&tokens, 1, "move")?)?)),
        "castle" => Ok(Command::Castle(parse_move(arg(&tokens, 1, "castle")?)?)),
        "enpassant" => Ok(Command::EnPassant(parse_move(arg(&tokens, 1, "enpassant")?)?)),
        "promote" => parse_promote(&tokens[1..]),
        "load" => Ok(Command::Load(PathBuf::from(arg(&tokens, 1, "load")?))),
        "reset" => Ok(Command::Reset),
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "history" => Ok(Command::History),
        "set" => parse_set(&tokens[1..]),
        "quit" => Ok(Command::Quit),
        _ => match Move::from_text(tokens[0]) {
            Some(mv) if tokens.len() == 1 => Ok(Command::Move(mv)),
            _ => Ok(Command::Unknown(tokens[0].to_string())),
        },
    }
}

/// Parse move text, reporting malformed input as an [`ArgumentError`].
pub fn parse_move(text: &str) -> Result<Move, ArgumentError> {
    Move::from_text(text).ok_or_else(|| ArgumentError::MalformedMove {
        text: text.trim().to_string(),
    })
}

/// Parse a promotion target, refusing kings and pawns.
pub fn parse_promotion_kind(name: &str) -> Result<PieceKind, ArgumentError> {
    let kind = PieceKind::from_name(name).ok_or_else(|| ArgumentError::UnknownPieceKind {
        name: name.to_string(),
    })?;
    match kind {
        PieceKind::King | PieceKind::Pawn => Err(ArgumentError::ForbiddenPromotion { kind }),
        _ => Ok(kind),
    }
}

fn arg<'a>(tokens: &[&'a str], index: usize, command: &'static str) -> Result<&'a str, ArgumentError> {
    tokens
        .get(index)
        .copied()
        .ok_or(ArgumentError::MissingArgument { command })
}

/// `promote <square> <kind>`
fn parse_promote(tokens: &[&str]) -> Result<Command, ArgumentError> {
    let square_text = arg(tokens, 0, "promote")?;
    let kind_text = arg(tokens, 1, "promote")?;
    let square = Position::from_algebraic(square_text).ok_or_else(|| {
        ArgumentError::MalformedSquare {
            text: square_text.to_string(),
        }
    })?;
    let kind = parse_promotion_kind(kind_text)?;
    Ok(Command::Promote { square, kind })
}

/// `set board on|off`
fn parse_set(tokens: &[&str]) -> Result<Command, ArgumentError> {
    let invalid = || ArgumentError::InvalidSetting {
        text: tokens.join(" "),
    };
    match tokens {
        [name, value] if name.eq_ignore_ascii_case("board") => {
            let on = match value.to_ascii_lowercase().as_str() {
                "on" | "true" => true,
                "off" | "false" => false,
                _ => return Err(invalid()),
            };
            Ok(Command::Set(Setting::ShowBoard(on)))
        }
        _ => Err(invalid()),
    }
}
