use std::io;

use tictac::{Game, Input, Locale};

fn print_state(game: &Game) {
    let snapshot = game.snapshot(Locale::English);
    println!("{}", snapshot.board);
    println!("{}", snapshot.status);
}

fn print_history(game: &Game) {
    for entry in game.snapshot(Locale::English).history_labels {
        let marker = if entry.current { '>' } else { ' ' };
        println!("{marker}{} {}", entry.index, entry.label);
    }
}

// Reads one command per line: a cell index plays there, `j <n>` jumps to a
// move, `state` and `history` print the game.
fn main() {
    let mut game = Game::new();
    let mut input = String::new();
    print_state(&game);
    loop {
        input.clear();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = input.trim();
        let changed = if let Ok(index) = line.parse::<usize>() {
            game.handle(Input::CellClick(index))
        } else if let Some(Ok(index)) = line.strip_prefix("j ").map(str::parse::<usize>) {
            game.handle(Input::HistoryClick(index))
        } else if line == "state" {
            print_state(&game);
            false
        } else if line == "history" {
            print_history(&game);
            false
        } else {
            println!("unknown command {line:?}");
            false
        };
        if changed {
            print_state(&game);
        }
    }
}
