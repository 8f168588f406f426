//! A single board transition.

use std::fmt;

use crate::position::{Position, parse_file, parse_rank_digit};

/// A move from one square to another.
///
/// No promotion, castling or en-passant metadata travels with a move; those
/// are decided from the board contents by whoever applies it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Position,
    to: Position,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(from: Position, to: Position) -> Move {
        Move { from, to }
    }

    /// Return the origin square.
    #[inline]
    pub const fn from(self) -> Position {
        self.from
    }

    /// Return the destination square.
    #[inline]
    pub const fn to(self) -> Position {
        self.to
    }

    /// Return the move with origin and destination swapped.
    #[inline]
    pub const fn reversed(self) -> Move {
        Move::new(self.to, self.from)
    }

    /// Parse four-character move text such as `e7e5`.
    ///
    /// Files map `a..h` to `0..7`. Ranks map digit `d` to `8 - d`, so text
    /// rank `1` is row 7 and text rank `8` is row 0. This differs from
    /// [`Position::from_algebraic`] and the two must stay separate.
    pub fn from_text(s: &str) -> Option<Move> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 4 {
            return None;
        }
        let square = |file: u8, rank: u8| -> Option<Position> {
            let file = parse_file(file)?;
            let digit = parse_rank_digit(rank)?;
            Some(Position::new(file, 8 - digit))
        };
        let from = square(bytes[0], bytes[1])?;
        let to = square(bytes[2], bytes[3])?;
        Some(Move::new(from, to))
    }

    /// History notation: both squares with 1-based ranks, e.g. `e2e4`.
    pub fn notation(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
