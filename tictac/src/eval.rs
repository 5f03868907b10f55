use tictac_types::{Mark, Square, ALL_MARKS, LINES, LINE_MASKS};

use crate::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won(Mark),
    Draw,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

/// First completed line in `LINES` order, with the mark that owns it.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Mark, [Square; 3])> {
    LINES.iter().zip(LINE_MASKS).find_map(|(line, mask)| {
        ALL_MARKS
            .into_iter()
            .find(|mark| mask.is_subset(board.marks(*mark)))
            .map(|mark| (mark, *line))
    })
}

#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, _)) = winning_line(board) {
        Outcome::Won(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

impl Board {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        evaluate(self)
    }

    #[must_use]
    pub fn winning_line(&self) -> Option<[Square; 3]> {
        winning_line(self).map(|(_, line)| line)
    }
}
