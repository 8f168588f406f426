//! Error types for rejected moves.

use crate::position::Position;
use crate::side::Side;

/// A move or promotion the rules do not allow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    /// The move fails turn, ownership, bounds, or piece-shape checks.
    #[error("Invalid move for {side}")]
    IllegalForSide {
        /// The side that attempted the move.
        side: Side,
    },
    /// The move would expose the mover's own king.
    #[error("Move would leave you in check")]
    LeavesKingInCheck,
    /// The promotion square holds no pawn.
    #[error("No pawn at promotion square")]
    NoPawnToPromote {
        /// The requested square.
        square: Position,
    },
    /// The pawn has not reached its side's last rank.
    #[error("Pawn not in promotion position")]
    NotOnPromotionRank {
        /// The requested square.
        square: Position,
    },
}

impl InvalidMove {
    /// Human-readable reason, as shown in status text.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
