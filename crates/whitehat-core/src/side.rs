//! The two players.

use std::fmt;
use std::ops::Not;

/// A player: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Total number of sides.
    pub const COUNT: usize = 2;

    /// All sides in index order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the other side.
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank step a pawn of this side advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Rank this side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Rank this side's back-rank pieces start on.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Rank a pawn of this side promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "WHITE"),
            Side::Black => write!(f, "BLACK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Side;

    #[test]
    fn opponent_is_involutive() {
        for side in Side::ALL {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn not_operator() {
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(!Side::Black, Side::White);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Side::White), "WHITE");
        assert_eq!(format!("{}", Side::Black), "BLACK");
    }

    #[test]
    fn ranks_mirror() {
        for side in Side::ALL {
            let other = side.opponent();
            assert_eq!(side.home_rank(), 7 - other.home_rank());
            assert_eq!(side.pawn_rank(), 7 - other.pawn_rank());
            assert_eq!(side.promotion_rank(), other.home_rank());
            assert_eq!(side.forward(), -other.forward());
        }
    }
}
