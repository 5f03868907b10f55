use smallvec::SmallVec;
use tictac_types::{Mark, Square, NUM_SQUARES};
use tracing::{debug, trace};

use crate::{board::Board, eval::Outcome};

/// A full game has nine moves plus the empty starting board.
pub const MAX_HISTORY: usize = NUM_SQUARES + 1;

pub type History = SmallVec<Board, MAX_HISTORY>;

/// Owns every board played so far and which one is on display.
///
/// Invariants:
/// - `history` is never empty and `history[0]` is the empty board.
/// - each entry fills exactly one empty square of its predecessor.
/// - `current_move < history.len()`.
///
/// Rejected operations are silent no-ops; they report `false` and leave the
/// game untouched.
#[derive(Debug, Clone)]
pub struct Game {
    history: History,
    current_move: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        let mut history = History::new();
        history.push(Board::new());
        Self {
            history,
            current_move: 0,
        }
    }

    #[must_use]
    pub fn displayed_board(&self) -> Board {
        self.history[self.current_move]
    }

    /// X moves on even indices, O on odd ones.
    #[must_use]
    pub fn active_mark(&self) -> Mark {
        Mark::to_move_after(self.current_move)
    }

    #[must_use]
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false, there is at least the starting board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.displayed_board().outcome()
    }

    /// Places the active mark on `square` of the displayed board.
    ///
    /// Does nothing on a won board or an occupied square. Boards after the
    /// displayed one are discarded before the new board is appended.
    pub fn apply_move(&mut self, square: Square) -> bool {
        let board = self.displayed_board();
        if square.index() >= NUM_SQUARES {
            trace!(%square, "rejected move: square out of range");
            return false;
        }
        if let Outcome::Won(winner) = board.outcome() {
            trace!(%square, %winner, "rejected move: game already won");
            return false;
        }
        if !board.is_empty(square) {
            trace!(%square, "rejected move: square taken");
            return false;
        }

        let mark = self.active_mark();
        let next = board.with_mark(square, mark);
        let discarded = self.history.len() - 1 - self.current_move;
        self.history = self.history[..=self.current_move]
            .iter()
            .copied()
            .chain(std::iter::once(next))
            .collect();
        self.current_move = self.history.len() - 1;
        debug!(
            %square,
            %mark,
            move_number = self.current_move,
            discarded,
            "applied move"
        );
        true
    }

    /// Same as [`Game::apply_move`] for a raw cell index.
    pub fn apply_move_index(&mut self, index: usize) -> bool {
        match Square::new(index) {
            Some(square) => self.apply_move(square),
            None => {
                trace!(index, "rejected move: index out of range");
                false
            }
        }
    }

    /// Displays an earlier (or later) board. History is kept as is until the
    /// next move is played.
    pub fn jump_to(&mut self, move_index: usize) -> bool {
        if move_index >= self.history.len() {
            trace!(
                move_index,
                len = self.history.len(),
                "rejected jump: out of range"
            );
            return false;
        }
        self.current_move = move_index;
        debug!(move_index, "jumped");
        true
    }

    pub fn restart(&mut self) -> bool {
        self.jump_to(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_types::{Cell, ALL_SQUARES};
    use Mark::*;

    fn play(game: &mut Game, moves: &[usize]) {
        for idx in moves {
            assert!(game.apply_move_index(*idx), "move {idx} rejected");
        }
    }

    fn state_of(game: &Game) -> (Vec<Board>, usize) {
        (game.history().to_vec(), game.current_move())
    }

    fn assert_well_formed(game: &Game) {
        let history = game.history();
        assert!(!history.is_empty());
        assert_eq!(history[0], Board::new());
        assert!(game.current_move() < history.len());
        for (prev, next) in history.iter().zip(history.iter().skip(1)) {
            let added = next.occupied().0 & !prev.occupied().0;
            assert_eq!(added.count_ones(), 1);
            assert!(prev.occupied().is_subset(next.occupied()));
        }
    }

    #[test]
    fn starts_empty_with_x_to_move() {
        let game = Game::new();
        assert_eq!(game.len(), 1);
        assert!(!game.is_empty());
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.displayed_board(), Board::new());
        assert_eq!(game.active_mark(), X);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn marks_alternate() {
        let mut game = Game::new();
        let mut expected = X;
        for idx in [4, 0, 8, 2, 6] {
            assert_eq!(game.active_mark(), expected);
            assert!(game.apply_move_index(idx));
            assert_eq!(game.displayed_board().cell(Square(idx as u8)), Some(expected));
            expected = expected.next();
        }
        assert_well_formed(&game);
    }

    #[test]
    fn occupied_square_is_rejected() {
        let mut game = Game::new();
        play(&mut game, &[0, 4, 8]);
        let before = state_of(&game);
        for sq in [0, 4, 8] {
            assert!(!game.apply_move_index(sq));
            assert_eq!(state_of(&game), before);
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut game = Game::new();
        play(&mut game, &[0]);
        let before = state_of(&game);
        assert!(!game.apply_move_index(9));
        assert!(!game.apply_move(Square(12)));
        assert!(!game.jump_to(2));
        assert!(!game.jump_to(usize::MAX));
        assert_eq!(state_of(&game), before);
    }

    #[test]
    fn moves_without_a_line_stay_in_progress() {
        let mut game = Game::new();
        play(&mut game, &[0, 4, 1, 3, 8]);
        let x = Some(X);
        let o = Some(O);
        let expected: [Cell; 9] = [x, x, None, o, o, None, None, None, x];
        assert_eq!(game.displayed_board().cells(), expected);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.active_mark(), O);

        assert!(game.apply_move_index(2));
        assert_eq!(game.displayed_board().cell(Square(2)), o);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.len(), 7);
    }

    #[test]
    fn top_row_wins_and_blocks_further_moves() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.outcome(), Outcome::Won(X));

        let before = state_of(&game);
        assert!(!game.apply_move_index(5));
        assert_eq!(state_of(&game), before);
        for sq in ALL_SQUARES {
            assert!(!game.apply_move(sq));
        }
        assert_eq!(state_of(&game), before);
    }

    #[test]
    fn full_board_is_a_draw() {
        let mut game = Game::new();
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.len(), MAX_HISTORY);
        let before = state_of(&game);
        for sq in ALL_SQUARES {
            assert!(!game.apply_move(sq));
        }
        assert_eq!(state_of(&game), before);
        assert_well_formed(&game);
    }

    #[test]
    fn jump_keeps_history() {
        let mut game = Game::new();
        play(&mut game, &[0, 4, 1, 3, 8]);
        assert_eq!(game.len(), 6);
        let history = game.history().to_vec();

        assert!(game.jump_to(2));
        assert_eq!(game.len(), 6);
        assert_eq!(game.current_move(), 2);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.displayed_board(), history[2]);
        assert_eq!(game.active_mark(), X);

        assert!(game.jump_to(5));
        assert_eq!(game.displayed_board(), history[5]);
    }

    #[test]
    fn move_after_jump_truncates_future() {
        let mut game = Game::new();
        play(&mut game, &[0, 4, 1, 3, 8]);
        let history = game.history().to_vec();

        assert!(game.jump_to(2));
        assert!(game.apply_move_index(6));
        assert_eq!(game.len(), 4);
        assert_eq!(game.current_move(), 3);
        assert_eq!(&game.history()[..3], &history[..3]);
        assert_eq!(game.displayed_board().cell(Square(6)), Some(X));
        assert_well_formed(&game);
    }

    #[test]
    fn truncation_length_from_every_point() {
        let moves = [4, 0, 8, 2, 1, 7, 6];
        for k in 0..moves.len() {
            let mut game = Game::new();
            play(&mut game, &moves);
            assert!(game.jump_to(k));
            let free = game
                .displayed_board()
                .empty_squares()
                .try_next_square()
                .unwrap();
            assert!(game.apply_move(free));
            assert_eq!(game.len(), k + 2);
            assert_eq!(game.current_move(), k + 1);
            assert_well_formed(&game);
        }
    }

    #[test]
    fn jump_back_reopens_a_won_game() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert!(game.outcome().is_over());

        assert!(game.jump_to(4));
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.active_mark(), X);
        assert!(game.apply_move_index(8));
        assert_eq!(game.len(), 6);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn restart_shows_empty_board_without_truncating() {
        let mut game = Game::new();
        play(&mut game, &[0, 4]);
        assert!(game.restart());
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.len(), 3);
        assert_eq!(game.displayed_board(), Board::new());
        assert!(game.apply_move_index(8));
        assert_eq!(game.len(), 2);
    }
}
