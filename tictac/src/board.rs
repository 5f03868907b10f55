use std::fmt;

use enum_map::EnumMap;
use itertools::Itertools;
use tictac_types::{BitBoard, Cell, Mark, Square, ALL_MARKS, ALL_SQUARES, NUM_SQUARES};

/// Nine cells stored as one occupancy mask per mark.
///
/// Boards are small `Copy` values. Placing a mark returns a new board and
/// leaves the old one untouched, so a history of boards never aliases.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    marks: EnumMap<Mark, BitBoard>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major cells. Used by tests, benches and
    /// anything that wants to set up a position directly.
    #[must_use]
    pub fn from_cells(cells: [Cell; NUM_SQUARES]) -> Self {
        let mut board = Self::new();
        for (sq, cell) in ALL_SQUARES.into_iter().zip(cells) {
            if let Some(mark) = cell {
                board.marks[mark] |= sq.bitboard();
            }
        }
        board
    }

    #[must_use]
    pub fn cells(&self) -> [Cell; NUM_SQUARES] {
        ALL_SQUARES.map(|sq| self.cell(sq))
    }

    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        ALL_MARKS
            .into_iter()
            .find(|mark| self.marks[*mark].has(square))
    }

    #[must_use]
    #[inline(always)]
    pub fn marks(&self, mark: Mark) -> BitBoard {
        self.marks[mark]
    }

    #[must_use]
    #[inline(always)]
    pub fn occupied(&self) -> BitBoard {
        self.marks[Mark::X] | self.marks[Mark::O]
    }

    #[must_use]
    pub fn empty_squares(&self) -> BitBoard {
        !self.occupied()
    }

    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        !self.occupied().has(square)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    #[must_use]
    pub fn marks_placed(&self) -> usize {
        self.occupied().len()
    }

    /// Copy of this board with `square` set to `mark`.
    ///
    /// The caller checks that `square` is empty.
    #[must_use]
    pub fn with_mark(&self, square: Square, mark: Mark) -> Self {
        debug_assert!(self.is_empty(square), "{square} is already taken");
        let mut next = *self;
        next.marks[mark] |= square.bitboard();
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .cells()
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Mark::symbol))
                    .join(" ")
            })
            .join("\n");
        write!(f, "{rows}")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ x: {:?}, o: {:?} }}",
            self.marks[Mark::X],
            self.marks[Mark::O]
        )
    }
}
