//! The chess board: piece placement, cached king squares, status and history text.

use std::fmt;

use tracing::trace;

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;

/// Status text after [`Board::initialize`].
pub(crate) const STARTED_STATUS: &str = "Game started. White's turn";

/// The 8x8 grid, indexed `[file][rank]`.
type Grid = [[Option<Piece>; 8]; 8];

/// Square-level board state and legality.
///
/// `Board` never signals errors: illegal requests are answered with `false`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    /// King square per side, indexed by [`Side::index()`].
    kings: [Option<Position>; Side::COUNT],
    status: String,
    history: String,
}

impl Board {
    /// Return a board set up in the starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        board.initialize();
        board
    }

    /// Return a board with no pieces, empty status and empty history.
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            kings: [None; Side::COUNT],
            status: String::new(),
            history: String::new(),
        }
    }

    /// Reset to the standard starting position, in place.
    pub fn initialize(&mut self) {
        self.grid = [[None; 8]; 8];
        self.kings = [None; Side::COUNT];

        for side in Side::ALL {
            let home = side.home_rank();
            for (file, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                self.place(Position::new(file as i8, home), Piece::new(kind, side));
            }
            for file in 0..Position::SIZE {
                self.place(
                    Position::new(file, side.pawn_rank()),
                    Piece::new(PieceKind::Pawn, side),
                );
            }
        }

        self.status = STARTED_STATUS.to_string();
        self.history.clear();
    }

    /// Copy of the grid and king squares only, for trying a move out.
    ///
    /// Status and history are left empty.
    pub(crate) fn scratch_copy(&self) -> Board {
        Board {
            grid: self.grid,
            kings: self.kings,
            status: String::new(),
            history: String::new(),
        }
    }

    /// Return the piece at `pos`, or `None` if the square is empty or off the board.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if !pos.is_on_board() {
            return None;
        }
        self.grid[pos.file() as usize][pos.rank() as usize]
    }

    #[inline]
    fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    #[inline]
    fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.grid[pos.file() as usize][pos.rank() as usize] = piece;
    }

    /// Put `piece` on `pos`, replacing whatever was there.
    ///
    /// Placing a king updates that side's cached king square. Off-board
    /// positions are ignored.
    pub fn place(&mut self, pos: Position, piece: Piece) {
        if !pos.is_on_board() {
            return;
        }
        self.clear_king_cache_at(pos);
        if piece.kind() == PieceKind::King {
            self.kings[piece.side().index()] = Some(pos);
        }
        self.set(pos, Some(piece));
    }

    /// Remove and return the piece on `pos`.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        let piece = self.piece_at(pos)?;
        self.clear_king_cache_at(pos);
        self.set(pos, None);
        Some(piece)
    }

    fn clear_king_cache_at(&mut self, pos: Position) {
        for king in &mut self.kings {
            if *king == Some(pos) {
                *king = None;
            }
        }
    }

    /// Mark the piece on `pos` as moved for castling purposes.
    pub(crate) fn mark_moved(&mut self, pos: Position) {
        if !pos.is_on_board() {
            return;
        }
        if let Some(piece) = &mut self.grid[pos.file() as usize][pos.rank() as usize] {
            piece.set_has_moved(true);
        }
    }

    /// Return the cached king square for `side`.
    #[inline]
    pub fn king_position(&self, side: Side) -> Option<Position> {
        self.kings[side.index()]
    }

    /// Return a copy of the grid, indexed `[file][rank]`.
    #[inline]
    pub fn grid(&self) -> [[Option<Piece>; 8]; 8] {
        self.grid
    }

    /// Iterate over occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Return the status message.
    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replace the status message.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Return the move history text.
    #[inline]
    pub fn history(&self) -> &str {
        &self.history
    }

    /// Append to the move history.
    pub fn append_history(&mut self, entry: &str) {
        self.history.push_str(entry);
    }

    /// Return `true` if `side` may move `mv` as far as this board can tell.
    ///
    /// Checks bounds, ownership of the origin, that the destination is not
    /// held by `side`, and the moving piece's shape. Turn order and king
    /// safety are the caller's concern.
    pub fn is_valid_move(&self, mv: Move, side: Side) -> bool {
        let (from, to) = (mv.from(), mv.to());
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }

        let piece = match self.piece_at(from) {
            Some(piece) if piece.side() == side => piece,
            _ => return false,
        };

        let target = self.piece_at(to);
        if target.is_some_and(|t| t.side() == side) {
            return false;
        }

        self.is_valid_piece_move(piece, from, to, target.is_some())
    }

    /// Whether `piece` standing on `from` may reach `to` by its movement shape.
    ///
    /// Sliders also need every square strictly between to be empty. Pawn
    /// moves depend on `is_capture`.
    pub fn is_valid_piece_move(
        &self,
        piece: Piece,
        from: Position,
        to: Position,
        is_capture: bool,
    ) -> bool {
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        let df = (to.file() - from.file()).abs();
        let dr = to.rank() - from.rank();

        match piece.kind() {
            PieceKind::King => df <= 1 && dr.abs() <= 1,
            PieceKind::Queen => self.is_straight_move(from, to) || self.is_diagonal_move(from, to),
            PieceKind::Rook => self.is_straight_move(from, to),
            PieceKind::Bishop => self.is_diagonal_move(from, to),
            PieceKind::Knight => (df == 1 && dr.abs() == 2) || (df == 2 && dr.abs() == 1),
            PieceKind::Pawn => self.is_valid_pawn_move(piece.side(), from, to, is_capture),
        }
    }

    fn is_valid_pawn_move(&self, side: Side, from: Position, to: Position, is_capture: bool) -> bool {
        let direction = side.forward();
        let df = (to.file() - from.file()).abs();
        let dr = to.rank() - from.rank();

        if is_capture {
            return df == 1 && dr == direction;
        }
        if df != 0 {
            return false;
        }
        if dr == direction {
            return self.is_empty(to);
        }
        if dr == 2 * direction && from.rank() == side.pawn_rank() {
            return self.is_empty(from.offset(0, direction)) && self.is_empty(to);
        }
        false
    }

    /// Same file or same rank with nothing strictly between.
    fn is_straight_move(&self, from: Position, to: Position) -> bool {
        if from.file() != to.file() && from.rank() != to.rank() {
            return false;
        }
        self.is_path_clear(from, to)
    }

    /// Equal non-zero file and rank distance with nothing strictly between.
    fn is_diagonal_move(&self, from: Position, to: Position) -> bool {
        let df = to.file() - from.file();
        let dr = to.rank() - from.rank();
        if df.abs() != dr.abs() || df == 0 {
            return false;
        }
        self.is_path_clear(from, to)
    }

    /// Walk from `from` towards `to` one step at a time, requiring every
    /// square strictly between to be empty. Only meaningful for lines.
    fn is_path_clear(&self, from: Position, to: Position) -> bool {
        let step_file = (to.file() - from.file()).signum();
        let step_rank = (to.rank() - from.rank()).signum();
        let mut pos = from.offset(step_file, step_rank);
        while pos != to {
            if !self.is_empty(pos) {
                return false;
            }
            pos = pos.offset(step_file, step_rank);
        }
        true
    }

    /// Move whatever is on `from` to `to`, discarding any piece on `to`.
    ///
    /// No legality check is made. An empty origin leaves the board as is.
    pub fn apply_move(&mut self, mv: Move) {
        let Some(piece) = self.remove(mv.from()) else {
            trace!(%mv, "apply_move with empty origin");
            return;
        };
        self.place(mv.to(), piece);
    }

    /// Return `true` if any piece of `attacker` could capture on `pos`.
    ///
    /// Uses capture-shape legality: sliders need a clear line, knights jump,
    /// and pawns attack one file over and one rank forward.
    pub fn is_square_attacked(&self, pos: Position, attacker: Side) -> bool {
        if !pos.is_on_board() {
            return false;
        }
        self.pieces()
            .filter(|(_, piece)| piece.side() == attacker)
            .any(|(from, piece)| self.is_valid_piece_move(piece, from, pos, true))
    }

    /// Return `true` if `side`'s king is attacked by the opponent.
    ///
    /// A side with no king on the board is never in check.
    pub fn is_in_check(&self, side: Side) -> bool {
        match self.king_position(side) {
            Some(king) => self.is_square_attacked(king, side.opponent()),
            None => false,
        }
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("kings", &self.kings)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Wrapper for printing a board as an 8x8 grid of glyphs, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0..Position::SIZE).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0..Position::SIZE {
                let c = board
                    .piece_at(Position::new(file, rank))
                    .map_or('·', Piece::glyph);
                if file < Position::SIZE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
