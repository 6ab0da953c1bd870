//! Replay
//!
//! This demo plays a short game through the public shell, the same way a
//! UI would feed clicks in, and prints what the UI would draw.
//!
//! Key concepts:
//! - Clicks map 1:1 onto actions
//! - Illegal clicks are silently ignored
//! - Observers fire once per accepted click
//! - Jumping back and playing on discards the abandoned moves
//!
//! Run with: cargo run --example replay
//! Set RUST_LOG=tictac=trace to watch every transition.

use tictac::machine::{Action, GameState};
use tictac::view::View;
use tictac::{GameBuilder, StepResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_view(view: &View) {
    for row in view.cells.chunks(3) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| match (cell.mark, cell.highlighted) {
                (Some(mark), true) => format!("[{mark}]"),
                (Some(mark), false) => format!(" {mark} "),
                (None, _) => " . ".to_string(),
            })
            .collect();
        println!("  {}", line.join(""));
    }
    println!("  {}   ({})", view.status, view.sort_label);

    let links: Vec<String> = view
        .move_links
        .iter()
        .map(|link| {
            if link.active {
                format!("*{}*", link.label)
            } else {
                link.label.clone()
            }
        })
        .collect();
    println!("  {}\n", links.join(" | "));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Replay Example ===\n");

    let mut game = GameBuilder::new()
        .observer(|action: &Action, state: &GameState| {
            info!(?action, step = state.current_step(), "render");
        })
        .build()
        .expect("default configuration is valid");

    let clicks = [
        Action::PlaceMark(0),
        Action::PlaceMark(1),
        Action::PlaceMark(1), // Occupied: ignored
        Action::PlaceMark(4),
        Action::PlaceMark(3),
        Action::PlaceMark(8),
        Action::PlaceMark(5), // Game over: ignored
        Action::ToggleMoveOrder,
        Action::JumpTo(2),
        Action::PlaceMark(6),
    ];

    for action in clicks {
        println!("{action:?}");
        match game.dispatch(action) {
            StepResult::Transitioned(_) => print_view(&game.view()),
            StepResult::Rejected(rejection) => println!("  (ignored: {rejection})\n"),
        }
    }

    println!("Final board:\n{}", game.state().latest_board());
    println!("\n=== Example Complete ===");
}
