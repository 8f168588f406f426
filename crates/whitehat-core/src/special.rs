//! Castling, en passant and promotion.
//!
//! These act on the board directly and skip the self-check trial that
//! [`Game::make_move`](crate::Game::make_move) performs.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::InvalidMove;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;

/// Special-move operations over a borrowed board.
pub struct SpecialMoves<'a> {
    board: &'a mut Board,
}

impl<'a> SpecialMoves<'a> {
    pub(crate) fn new(board: &'a mut Board) -> SpecialMoves<'a> {
        SpecialMoves { board }
    }

    /// Castle `side`'s king along `mv`, a two-file king step on its own rank.
    ///
    /// Needs an unmoved king and an unmoved rook of `side` in the corner the
    /// king moves towards, with every square between them empty and not
    /// attacked by the opponent. The rook lands next to the king's origin on
    /// the king's side. Returns `false` and leaves the board untouched
    /// otherwise.
    pub fn attempt_castling(&mut self, mv: Move, side: Side) -> bool {
        let (from, to) = (mv.from(), mv.to());
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        match self.board.piece_at(from) {
            Some(king) if king.is(PieceKind::King, side) && !king.has_moved() => {}
            _ => return false,
        }
        if to.rank() != from.rank() || (to.file() - from.file()).abs() != 2 {
            return false;
        }

        let direction = (to.file() - from.file()).signum();
        let rook_from = Position::new(if direction > 0 { 7 } else { 0 }, from.rank());
        match self.board.piece_at(rook_from) {
            Some(rook) if rook.is(PieceKind::Rook, side) && !rook.has_moved() => {}
            _ => return false,
        }

        let mut square = from.offset(direction, 0);
        while square != rook_from {
            if self.board.piece_at(square).is_some()
                || self.board.is_square_attacked(square, side.opponent())
            {
                return false;
            }
            square = square.offset(direction, 0);
        }

        let rook_to = from.offset(direction, 0);
        self.board.apply_move(mv);
        self.board.apply_move(Move::new(rook_from, rook_to));
        self.board.mark_moved(to);
        self.board.mark_moved(rook_to);
        debug!(%mv, %side, "castled");
        true
    }

    /// Capture en passant along `mv`.
    ///
    /// Needs a pawn of `side` on the origin, a destination one file over and
    /// one rank forward, and an opponent pawn beside the origin on the
    /// destination file. Returns `false` and leaves the board untouched
    /// otherwise.
    pub fn attempt_en_passant(&mut self, mv: Move, side: Side) -> bool {
        let (from, to) = (mv.from(), mv.to());
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        match self.board.piece_at(from) {
            Some(pawn) if pawn.is(PieceKind::Pawn, side) => {}
            _ => return false,
        }
        if (from.file() - to.file()).abs() != 1 || to.rank() != from.rank() + side.forward() {
            return false;
        }

        let captured = Position::new(to.file(), from.rank());
        match self.board.piece_at(captured) {
            Some(victim) if victim.is(PieceKind::Pawn, side.opponent()) => {}
            _ => return false,
        }

        self.board.apply_move(mv);
        self.board.remove(captured);
        debug!(%mv, %side, %captured, "captured en passant");
        true
    }

    /// Replace the pawn on `pos` with a new `kind` of the same side.
    ///
    /// The pawn must stand on its side's last rank: rank 7 for White, rank 0
    /// for Black. `kind` is not checked; callers must refuse kings and pawns.
    pub fn promote_pawn(&mut self, pos: Position, kind: PieceKind) -> Result<(), InvalidMove> {
        let pawn = match self.board.piece_at(pos) {
            Some(piece) if piece.kind() == PieceKind::Pawn => piece,
            _ => return Err(InvalidMove::NoPawnToPromote { square: pos }),
        };
        if pos.rank() != pawn.side().promotion_rank() {
            return Err(InvalidMove::NotOnPromotionRank { square: pos });
        }

        self.board.place(pos, Piece::new(kind, pawn.side()));
        debug!(%pos, %kind, side = %pawn.side(), "promoted");
        Ok(())
    }
}
