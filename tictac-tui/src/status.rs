use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Widget},
};
use tictac::{Outcome, Snapshot};

use crate::board::mark_color;

pub struct StatusView {
    status: String,
    style: Style,
}

impl StatusView {
    pub fn new(snapshot: &Snapshot) -> Self {
        let style = match snapshot.outcome {
            Outcome::Won(mark) => Style::new().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
            Outcome::Draw => Style::new().add_modifier(Modifier::BOLD),
            Outcome::InProgress => Style::new().fg(mark_color(snapshot.active_mark)),
        };
        Self {
            status: snapshot.status.clone(),
            style,
        }
    }

    pub fn on_state_change(&mut self, snapshot: &Snapshot) {
        *self = StatusView::new(snapshot);
    }

    #[cfg(test)]
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn draw(&self) -> impl Widget + '_ {
        Paragraph::new(self.status.as_str())
            .style(self.style)
            .block(Block::bordered().title("Status"))
    }
}
