//! Core chess rules: board state, move legality, check detection, and special moves.

mod board;
mod chess_move;
mod error;
mod game;
mod piece;
mod piece_kind;
mod position;
mod side;
mod special;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use error::InvalidMove;
pub use game::Game;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use side::Side;
pub use special::SpecialMoves;
