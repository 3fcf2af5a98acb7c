mod display;

use colored::Colorize;
use common::{solver::Solver, GameState};
use tracing_subscriber::EnvFilter;

/// One game with an odd disk count and one with an even count, so both
/// directions of the tiny disk cycle get shown.
const DEMO_GAMES: [u8; 2] = [3, 4];

const BANNER_WIDTH: usize = 79;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for nr_disks in DEMO_GAMES {
        solve_game(nr_disks);
    }
}

/// Play one game from the canonical start to the solved board, narrating
/// every move.
fn solve_game(nr_disks: u8) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("Towers of Hanoi with {nr_disks} disks");
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();

    let mut game = GameState::new(nr_disks);
    let mut nr_moves = 0u32;

    loop {
        // A fresh solver every turn; the move comes from the board alone.
        let next = Solver::new(&game).next_move();
        display::draw_board(&game, next);

        let Some(mv) = next else {
            println!("{}", "Solved!".green());
            println!();
            break;
        };

        display::describe_turn(mv);
        game.move_disk(mv.src, mv.dst);
        nr_moves += 1;
    }

    log::info!("solved {} disks in {} moves", nr_disks, nr_moves);
}
