use ratatui::{
    crossterm::event::{Event, KeyCode},
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};
use tictac::Snapshot;
use tictac_types::{BitBoard, Cell, Mark, Square, NUM_SQUARES};

use crate::app::Message;

const ROW_SEPARATOR: &str = "───┼───┼───";

pub struct BoardView {
    cells: [Cell; NUM_SQUARES],
    winning_line: BitBoard,
    focused_square: Square,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
            winning_line: BitBoard::EMPTY,
            // centre
            focused_square: Square(4),
        }
    }

    #[cfg(test)]
    pub fn focused_square(&self) -> Square {
        self.focused_square
    }

    // Rows and columns are 0..=2, so the casts are lossless
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn shift_focus(&mut self, d_row: i8, d_col: i8) {
        let row = (self.focused_square.row() as i8 + d_row).clamp(0, 2);
        let col = (self.focused_square.col() as i8 + d_col).clamp(0, 2);
        if let Some(sq) = Square::from_row_col(row as u8, col as u8) {
            self.focused_square = sq;
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.shift_focus(0, -1),
                KeyCode::Right | KeyCode::Char('l') => self.shift_focus(0, 1),
                KeyCode::Up | KeyCode::Char('k') => self.shift_focus(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => self.shift_focus(1, 0),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    return Some(Message::Play(self.focused_square));
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let digit = c.to_digit(10).unwrap_or(1) as usize;
                    let sq = Square::new(digit - 1)?;
                    self.focused_square = sq;
                    return Some(Message::Play(sq));
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, snapshot: &Snapshot) {
        self.cells = snapshot.board.cells();
        self.winning_line = snapshot
            .board
            .winning_line()
            .map(|line| line.into_iter().collect())
            .unwrap_or_default();
    }

    fn cell_span(&self, sq: Square, focused: bool) -> Span<'static> {
        let (text, mut style) = match self.cells[sq.index()] {
            // Empty squares show the digit that plays them
            None => (
                format!(" {} ", sq.0 + 1),
                Style::new().fg(Color::DarkGray),
            ),
            Some(mark) => (
                format!(" {mark} "),
                Style::new().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
            ),
        };
        if self.winning_line.has(sq) {
            style = style.bg(Color::Green);
        }
        if focused && sq == self.focused_square {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(text, style)
    }

    fn row_line(&self, row: u8, focused: bool) -> Line<'static> {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::new().fg(Color::DarkGray)));
            }
            if let Some(sq) = Square::from_row_col(row, col) {
                spans.push(self.cell_span(sq, focused));
            }
        }
        Line::from(spans)
    }

    pub fn draw(&self, focused: bool) -> impl Widget + '_ {
        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            if row > 0 {
                lines.push(Line::styled(
                    ROW_SEPARATOR,
                    Style::new().fg(Color::DarkGray),
                ));
            }
            lines.push(self.row_line(row, focused));
        }
        Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(pane_block("Board", focused))
    }
}

pub fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

pub fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if focused {
        block.border_style(Style::new().fg(Color::Yellow))
    } else {
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};
    use tictac::{Game, Locale};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn focus_moves_and_stops_at_edges() {
        let mut view = BoardView::new();
        assert_eq!(view.focused_square(), Square(4));
        assert!(view.update(&key(KeyCode::Left)).is_none());
        assert_eq!(view.focused_square(), Square(3));
        view.update(&key(KeyCode::Char('h')));
        assert_eq!(view.focused_square(), Square(3));
        view.update(&key(KeyCode::Up));
        assert_eq!(view.focused_square(), Square(0));
        view.update(&key(KeyCode::Char('k')));
        assert_eq!(view.focused_square(), Square(0));
        view.update(&key(KeyCode::Char('j')));
        view.update(&key(KeyCode::Char('j')));
        view.update(&key(KeyCode::Char('l')));
        view.update(&key(KeyCode::Right));
        view.update(&key(KeyCode::Right));
        assert_eq!(view.focused_square(), Square(8));
    }

    #[test]
    fn enter_plays_focused_square() {
        let mut view = BoardView::new();
        assert_eq!(
            view.update(&key(KeyCode::Enter)),
            Some(Message::Play(Square(4)))
        );
        view.update(&key(KeyCode::Down));
        assert_eq!(
            view.update(&key(KeyCode::Char(' '))),
            Some(Message::Play(Square(7)))
        );
    }

    #[test]
    fn digits_play_directly() {
        let mut view = BoardView::new();
        assert_eq!(
            view.update(&key(KeyCode::Char('1'))),
            Some(Message::Play(Square(0)))
        );
        assert_eq!(
            view.update(&key(KeyCode::Char('9'))),
            Some(Message::Play(Square(8)))
        );
        assert_eq!(view.focused_square(), Square(8));
        assert_eq!(view.update(&key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn state_change_tracks_winning_line() {
        let mut game = Game::new();
        for idx in [0, 3, 1, 4, 2] {
            assert!(game.apply_move_index(idx));
        }
        let mut view = BoardView::new();
        view.on_state_change(&game.snapshot(Locale::English));
        assert_eq!(view.cells[0], Some(Mark::X));
        assert_eq!(view.cells[3], Some(Mark::O));
        let expected: BitBoard = [Square(0), Square(1), Square(2)].into_iter().collect();
        assert_eq!(view.winning_line, expected);

        assert!(game.jump_to(2));
        view.on_state_change(&game.snapshot(Locale::English));
        assert_eq!(view.winning_line, BitBoard::EMPTY);
        assert_eq!(view.cells[1], None);
    }
}
