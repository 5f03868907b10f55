use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictac::Locale;

use crate::config::Config;

/// Tic-tac-toe in the terminal, with a move history you can step through.
#[derive(Parser, Debug)]
#[command(name = "tictac-tui", version)]
pub struct Cli {
    /// RON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Language of the status line and history labels
    #[arg(short, long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Write logs to this file. Nothing is logged without one.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    En,
    Ru,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::En => Locale::English,
            LocaleArg::Ru => Locale::Russian,
        }
    }
}

impl Cli {
    /// Flags given on the command line win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(locale) = self.locale {
            config.locale = locale.into();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
    }
}
