#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod eval;
pub mod game;
pub mod view;

pub use board::Board;
pub use eval::{evaluate, Outcome};
pub use game::Game;
pub use view::{HistoryLabel, Input, Locale, Snapshot};
