//! Plain data handed to whatever draws the game, and the inputs it sends back.
//!
//! A view never touches [`Game`] state directly: it pulls a fresh
//! [`Snapshot`] after every accepted transition and reports clicks as
//! [`Input`]s.

use serde::Deserialize;
use tictac_types::Mark;

use crate::{board::Board, eval::Outcome, game::Game};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    English,
    Russian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    CellClick(usize),
    HistoryClick(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLabel {
    pub index: usize,
    pub label: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub active_mark: Mark,
    pub outcome: Outcome,
    pub status: String,
    pub history_labels: Vec<HistoryLabel>,
    pub current_move: usize,
}

#[must_use]
pub fn status_text(outcome: Outcome, active_mark: Mark, locale: Locale) -> String {
    match (locale, outcome) {
        (Locale::English, Outcome::Won(mark)) => format!("Winner: {mark}"),
        (Locale::English, Outcome::Draw) => "Draw".to_owned(),
        (Locale::English, Outcome::InProgress) => format!("Next player: {active_mark}"),
        (Locale::Russian, Outcome::Won(mark)) => format!("Победил: {mark}"),
        (Locale::Russian, Outcome::Draw) => "Ничья".to_owned(),
        (Locale::Russian, Outcome::InProgress) => format!("Ходит игрок: {active_mark}"),
    }
}

#[must_use]
pub fn history_label(index: usize, locale: Locale) -> String {
    match (locale, index) {
        (Locale::English, 0) => "Restart game".to_owned(),
        (Locale::English, n) => format!("Go to move #{n}"),
        (Locale::Russian, 0) => "Начать игру заново".to_owned(),
        (Locale::Russian, n) => format!("Перейти на ход №{n}"),
    }
}

impl Game {
    #[must_use]
    pub fn snapshot(&self, locale: Locale) -> Snapshot {
        let outcome = self.outcome();
        let active_mark = self.active_mark();
        let history_labels = (0..self.len())
            .map(|index| HistoryLabel {
                index,
                label: history_label(index, locale),
                current: index == self.current_move(),
            })
            .collect();
        Snapshot {
            board: self.displayed_board(),
            active_mark,
            outcome,
            status: status_text(outcome, active_mark, locale),
            history_labels,
            current_move: self.current_move(),
        }
    }

    /// Routes a view event to the matching operation. Returns whether the
    /// game changed and views need a new snapshot.
    pub fn handle(&mut self, input: Input) -> bool {
        match input {
            Input::CellClick(index) => self.apply_move_index(index),
            Input::HistoryClick(index) => self.jump_to(index),
        }
    }
}
