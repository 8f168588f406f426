//! Board coordinates.

use std::fmt;

/// A (file, rank) coordinate, 0-based.
///
/// File 0 is the a-file and rank 0 is White's back rank. Coordinates off the
/// board are representable; [`Position::is_on_board`] tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    file: i8,
    rank: i8,
}

impl Position {
    /// Number of files (and ranks) on the board.
    pub const SIZE: i8 = 8;

    /// Create a position. No bounds check is performed.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Position {
        Position { file, rank }
    }

    /// Return the file (0 = a).
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Return the rank (0 = White's back rank).
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Return `true` if both coordinates are in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < Self::SIZE && self.rank >= 0 && self.rank < Self::SIZE
    }

    /// Return the position shifted by the given deltas.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Position {
        Position::new(self.file + file_delta, self.rank + rank_delta)
    }

    /// Parse a square such as `e8`, mapping rank digit `d` to rank `d - 1`.
    ///
    /// This is the convention used for promotion squares, where `a8` is rank 7.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = parse_file(bytes[0])?;
        let digit = parse_rank_digit(bytes[1])?;
        Some(Position::new(file, digit - 1))
    }

    /// Iterate over all 64 on-board positions, file by file.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::SIZE).flat_map(|file| (0..Self::SIZE).map(move |rank| Position::new(file, rank)))
    }
}

/// Map `a..=h` to `0..=7`.
pub(crate) fn parse_file(byte: u8) -> Option<i8> {
    (b'a'..=b'h')
        .contains(&byte)
        .then(|| (byte - b'a') as i8)
}

/// Map `1..=8` to its numeric value.
pub(crate) fn parse_rank_digit(byte: u8) -> Option<i8> {
    (b'1'..=b'8')
        .contains(&byte)
        .then(|| (byte - b'0') as i8)
}

/// Renders as file letter plus 1-based rank, e.g. `(4, 1)` is `e2`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.file as u8) as char;
            write!(f, "{}{}", file, self.rank + 1)
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}
