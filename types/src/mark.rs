use std::fmt;

use enum_map::Enum;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum)]
pub enum Mark {
    X,
    O,
}

pub const ALL_MARKS: [Mark; 2] = [Mark::X, Mark::O];

/// Content of a single square. `None` is an empty square.
pub type Cell = Option<Mark>;

impl Mark {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark to play after `moves_played` moves. X always opens.
    #[must_use]
    pub const fn to_move_after(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
