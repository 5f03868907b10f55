use std::{io, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout},
    style::{Color, Style},
    DefaultTerminal, Frame,
};
use tictac::{Game, Input, Locale};
use tictac_types::Square;
use tracing::debug;

use crate::{
    board::BoardView,
    config::Config,
    history::HistoryList,
    popup::{Popup, HELP},
    status::StatusView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Board,
    History,
}

impl Mode {
    fn next(self) -> Self {
        match self {
            Mode::Board => Mode::History,
            Mode::History => Mode::Board,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Quit,
    Play(Square),
    JumpTo(usize),
    Restart,
    ToggleHelp,
}

pub struct App {
    game: Game,
    locale: Locale,
    poll_interval: Duration,
    mode: Mode,
    show_help: bool,
    board_view: BoardView,
    history_list: HistoryList,
    status: StatusView,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        let game = Game::new();
        let snapshot = game.snapshot(config.locale);
        let mut board_view = BoardView::new();
        board_view.on_state_change(&snapshot);
        Self {
            game,
            locale: config.locale,
            poll_interval: config.poll_interval(),
            mode: Mode::Board,
            show_help: false,
            board_view,
            history_list: HistoryList::new(&snapshot),
            status: StatusView::new(&snapshot),
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update()? {
                match message {
                    Message::Quit => break,
                    message => self.process(message),
                }
            }
        }
        Ok(())
    }

    fn update(&mut self) -> io::Result<Option<Message>> {
        if event::poll(self.poll_interval)? {
            let event = event::read()?;
            return Ok(self.handle_event(&event));
        }
        Ok(None)
    }

    /// Maps a terminal event to a message. Keys not handled globally go to
    /// the focused pane.
    pub fn handle_event(&mut self, event: &Event) -> Option<Message> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('q') => return Some(Message::Quit),
            KeyCode::Esc if self.show_help => return Some(Message::ToggleHelp),
            KeyCode::Esc => return Some(Message::Quit),
            KeyCode::Char('?') => return Some(Message::ToggleHelp),
            _ if self.show_help => return None,
            KeyCode::Tab | KeyCode::BackTab => {
                self.mode = self.mode.next();
                return None;
            }
            KeyCode::Char('r') => return Some(Message::Restart),
            _ => {}
        }
        match self.mode {
            Mode::Board => self.board_view.update(event),
            Mode::History => self.history_list.update(event),
        }
    }

    pub fn process(&mut self, message: Message) {
        let changed = match message {
            Message::Quit => false,
            Message::Play(square) => self.game.handle(Input::CellClick(square.index())),
            Message::JumpTo(index) => self.game.handle(Input::HistoryClick(index)),
            Message::Restart => self.game.restart(),
            Message::ToggleHelp => {
                self.show_help = !self.show_help;
                false
            }
        };
        if changed {
            self.on_state_change();
        } else {
            debug!(?message, "no state change");
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn on_state_change(&mut self) {
        let snapshot = self.game.snapshot(self.locale);
        self.board_view.on_state_change(&snapshot);
        self.history_list.on_state_change(&snapshot);
        self.status.on_state_change(&snapshot);
    }

    pub fn draw(&self, frame: &mut Frame) {
        let horizontal =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]);
        let vertical = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]);
        let [board, right] = horizontal.areas(frame.area());
        let [status, history] = vertical.areas(right);
        frame.render_widget(self.board_view.draw(self.mode == Mode::Board), board);
        frame.render_widget(self.status.draw(), status);
        frame.render_widget(
            self.history_list.draw(self.mode == Mode::History),
            history,
        );
        if self.show_help {
            let area = Popup::area(frame.area(), 50, 9);
            frame.render_widget(
                Popup::default()
                    .title("Keys")
                    .content(HELP)
                    .border_style(Style::new().fg(Color::Yellow)),
                area,
            );
        }
    }
}
