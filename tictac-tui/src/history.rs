use ratatui::{
    crossterm::event::{Event, KeyCode},
    style::{Modifier, Style},
    text::Line,
    widgets::{List, ListItem, Widget},
};
use tictac::{HistoryLabel, Snapshot};

use crate::{app::Message, board::pane_block};

/// One entry per board in the game history; selecting one jumps there.
pub struct HistoryList {
    labels: Vec<HistoryLabel>,
    selected: usize,
}

impl HistoryList {
    pub fn new(snapshot: &Snapshot) -> Self {
        Self {
            labels: snapshot.history_labels.clone(),
            selected: snapshot.current_move,
        }
    }

    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1).min(self.labels.len().saturating_sub(1));
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Home => self.selected = 0,
                KeyCode::End => self.selected = self.labels.len().saturating_sub(1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(entry) = self.labels.get(self.selected) {
                        return Some(Message::JumpTo(entry.index));
                    }
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, snapshot: &Snapshot) {
        *self = HistoryList::new(snapshot);
    }

    pub fn draw(&self, focused: bool) -> impl Widget + '_ {
        let items = self.labels.iter().enumerate().map(|(idx, entry)| {
            let cursor = if focused && idx == self.selected { '>' } else { ' ' };
            let line = Line::raw(format!("{cursor}{}", entry.label));
            if entry.current {
                ListItem::new(line).style(Style::new().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(line)
            }
        });
        List::new(items).block(pane_block("History", focused))
    }
}
