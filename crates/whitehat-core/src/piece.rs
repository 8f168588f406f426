//! A piece on the board: kind, owner, and castling bookkeeping.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// A piece owned by one side.
///
/// `has_moved` is only consulted and updated by castling. Ordinary moves
/// carry the flag along unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece {
            kind,
            side,
            has_moved: false,
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the owning side.
    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    /// Return whether castling has recorded this piece as moved.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    #[inline]
    pub(crate) fn set_has_moved(&mut self, moved: bool) {
        self.has_moved = moved;
    }

    /// Return `true` if this is a `kind` owned by `side`.
    #[inline]
    pub fn is(self, kind: PieceKind, side: Side) -> bool {
        self.kind == kind && self.side == side
    }

    /// Letter for this piece: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        match self.side {
            Side::White => self.kind.symbol(),
            Side::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    /// Unicode chess glyph for this piece.
    pub const fn glyph(self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::King) => '♔',
            (Side::White, PieceKind::Queen) => '♕',
            (Side::White, PieceKind::Rook) => '♖',
            (Side::White, PieceKind::Bishop) => '♗',
            (Side::White, PieceKind::Knight) => '♘',
            (Side::White, PieceKind::Pawn) => '♙',
            (Side::Black, PieceKind::King) => '♚',
            (Side::Black, PieceKind::Queen) => '♛',
            (Side::Black, PieceKind::Rook) => '♜',
            (Side::Black, PieceKind::Bishop) => '♝',
            (Side::Black, PieceKind::Knight) => '♞',
            (Side::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_prefix = match self.side {
            Side::White => 'W',
            Side::Black => 'B',
        };
        write!(f, "{}{}", side_prefix, self.kind.symbol())?;
        if self.has_moved {
            write!(f, "*")?;
        }
        Ok(())
    }
}
