use std::fmt;

use crate::bitboard::BitBoard;

pub const NUM_SQUARES: usize = 9;

/// One of the nine squares, numbered row-major:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Square(pub u8);

pub const ALL_SQUARES: [Square; NUM_SQUARES] = [
    Square(0),
    Square(1),
    Square(2),
    Square(3),
    Square(4),
    Square(5),
    Square(6),
    Square(7),
    Square(8),
];

impl Square {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self(row * 3 + col))
        } else {
            None
        }
    }

    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    #[inline(always)]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    #[must_use]
    #[inline(always)]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    #[must_use]
    #[inline(always)]
    pub const fn bitboard(self) -> BitBoard {
        BitBoard(1 << self.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Square::new(0), Some(Square(0)));
        assert_eq!(Square::new(8), Some(Square(8)));
        assert_eq!(Square::new(9), None);
        assert_eq!(Square::new(usize::MAX), None);
    }

    #[test]
    fn row_col_round_trip() {
        for sq in ALL_SQUARES {
            assert_eq!(Square::from_row_col(sq.row(), sq.col()), Some(sq));
        }
        assert_eq!(Square::from_row_col(3, 0), None);
        assert_eq!(Square::from_row_col(0, 3), None);
    }
}
