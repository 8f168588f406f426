//! Turn order and full move legality on top of [`Board`].

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::InvalidMove;
use crate::side::Side;
use crate::special::SpecialMoves;

/// A game in progress: the board, the side to move, and whether it is in check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_side: Side,
    in_check: bool,
}

impl Game {
    /// Start a game from the standard position with White to move.
    pub fn new() -> Game {
        Game::with_board(Board::new())
    }

    /// Start a game from `board` with White to move.
    pub fn with_board(board: Board) -> Game {
        Game {
            board,
            current_side: Side::White,
            in_check: false,
        }
    }

    /// Return to the starting position, White to move, no check.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_side = Side::White;
        self.in_check = false;
    }

    /// Play `mv` for the side to move.
    ///
    /// The move is tried on a scratch copy first; the live board is only
    /// touched once the mover's king is known to be safe afterwards.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let side = self.current_side;
        if !self.board.is_valid_move(mv, side) {
            debug!(%mv, %side, "rejected: illegal for side");
            return Err(InvalidMove::IllegalForSide { side });
        }

        let mut trial = self.board.scratch_copy();
        trial.apply_move(mv);
        if trial.is_in_check(side) {
            debug!(%mv, %side, "rejected: leaves king in check");
            return Err(InvalidMove::LeavesKingInCheck);
        }

        self.board.apply_move(mv);
        self.complete_turn(mv);
        Ok(())
    }

    /// Hand the turn to the opponent after `mv` has been put on the board.
    ///
    /// Recomputes the check flag, rewrites the status line and records `mv`
    /// in the history under the side that played it.
    pub fn complete_turn(&mut self, mv: Move) {
        let mover = self.current_side;
        self.current_side = mover.opponent();
        self.in_check = self.board.is_in_check(self.current_side);

        let status = if self.in_check {
            format!("{} is in check!", self.current_side)
        } else {
            format!("Move successful. {}'s turn", self.current_side)
        };
        self.board.set_status(status);
        self.board
            .append_history(&format!("{}: {}\n", mover, mv.notation()));

        debug!(%mv, %mover, in_check = self.in_check, "move committed");
    }

    /// Lend the board to the castling, en-passant and promotion operations.
    ///
    /// These bypass the self-check trial that [`Game::make_move`] performs.
    pub fn special_moves(&mut self) -> SpecialMoves<'_> {
        SpecialMoves::new(&mut self.board)
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Return whether the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Return the status message.
    #[inline]
    pub fn status(&self) -> &str {
        self.board.status()
    }

    /// Return the move history text.
    #[inline]
    pub fn history(&self) -> &str {
        self.board.history()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
