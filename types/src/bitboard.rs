use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::square::{Square, NUM_SQUARES};

/// Set of squares, one bit per square index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct BitBoard(pub u16);

impl BitBoard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self((1 << NUM_SQUARES) - 1);

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 & Self::FULL.0 == Self::FULL.0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn has(self, square: Square) -> bool {
        !self.is_disjoint(square.bitboard())
    }

    #[must_use]
    pub const fn is_disjoint(self, other: BitBoard) -> bool {
        self.0 & other.0 == Self::EMPTY.0
    }

    #[must_use]
    pub const fn is_subset(self, other: BitBoard) -> bool {
        other.0 & self.0 == self.0
    }

    #[must_use]
    pub const fn is_superset(self, other: BitBoard) -> bool {
        other.is_subset(self)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn try_next_square(self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }
        Some(Square(self.0.trailing_zeros() as u8))
    }

    #[must_use]
    pub const fn iter(self) -> BitBoardIter {
        BitBoardIter(self)
    }
}

impl std::fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitBoard({:#011b})", self.0)
    }
}

pub struct BitBoardIter(BitBoard);

impl Iterator for BitBoardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let square = self.0.try_next_square();
        if let Some(square) = square {
            self.0 .0 &= !square.bitboard().0;
        }
        square
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl ExactSizeIterator for BitBoardIter {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl IntoIterator for BitBoard {
    type Item = Square;
    type IntoIter = BitBoardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Square> for BitBoard {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut res = BitBoard::EMPTY;
        for sq in iter {
            res |= sq.bitboard();
        }
        res
    }
}

impl BitOr for BitBoard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for BitBoard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BitBoard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for BitBoard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

// Complement within the nine squares; the upper bits stay clear.
impl Not for BitBoard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0 & Self::FULL.0)
    }
}
