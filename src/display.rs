use colored::Colorize;

use common::{
    solver::{Direction, MoveInfo, MoveKind},
    Disk, GameState, PegKind, NR_PEGS,
};

/// Empty rows drawn above the highest possible disk.
const HEIGHT_MARGIN: usize = 1;
/// Blank columns between two peg cells.
const PEG_GAP: &str = "   ";
const MAST: char = '|';
const GROUND: char = '.';

/// Print the board, top row first, then the ground line and a blank line.
/// The disk about to move, if any, is shown in red.
pub fn draw_board(game: &GameState, next: Option<MoveInfo>) {
    for line in board_lines(game, next) {
        println!("{line}");
    }
    println!();
}

/// Explain a move the way the solver derived it, before it is played.
pub fn describe_turn(mv: MoveInfo) {
    println!("gaps in the disk order: {}", mv.nr_gaps);
    println!("moving: {}", kind_label(mv.kind));
    println!("from:   {}", peg_label(mv.src));
    println!("to:     {}", peg_label(mv.dst));
    println!();
}

fn board_lines(game: &GameState, next: Option<MoveInfo>) -> Vec<String> {
    let nr_rows = game.nr_disks() as usize + HEIGHT_MARGIN;

    let mut lines = Vec::with_capacity(nr_rows + 1);
    for level in (0..nr_rows).rev() {
        let row: Vec<String> = game
            .pegs()
            .iter()
            .map(|peg| {
                let moving = matches!(next, Some(mv) if mv.src == peg.kind())
                    && level + 1 == peg.height();
                cell(peg.at(level), game.nr_disks(), moving)
            })
            .collect();
        lines.push(row.join(PEG_GAP));
    }

    let cell_width = 2 * game.nr_disks() as usize + 1;
    let ground_width = NR_PEGS * cell_width + (NR_PEGS - 1) * PEG_GAP.len();
    lines.push(GROUND.to_string().repeat(ground_width));
    lines
}

/// One cell of the board: a disk centered on the mast, or the bare mast.
///
/// A disk of size s is 2s+1 glyphs wide, dashes for even sizes and pluses
/// for odd ones, inside a cell sized for the largest disk.
fn cell(slot: Option<Disk>, max_size: u8, moving: bool) -> String {
    match slot {
        None => {
            let air = " ".repeat(max_size as usize);
            format!("{air}{MAST}{air}")
        }
        Some(disk) => {
            let air = " ".repeat((max_size - disk.size()) as usize);
            let glyph = if disk.size() % 2 == 0 { '-' } else { '+' };
            let body = glyph.to_string().repeat(2 * disk.size() as usize + 1);
            let body = if moving { body.red().to_string() } else { body };
            format!("{air}{body}{air}")
        }
    }
}

fn kind_label(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::OtherDisk => "a disk other than the tiny one",
        MoveKind::TinyDisk(Direction::Forward) => "the tiny disk, forwards",
        MoveKind::TinyDisk(Direction::Backward) => "the tiny disk, backwards",
    }
}

fn peg_label(kind: PegKind) -> &'static str {
    match kind {
        PegKind::Start => "the start peg (left)",
        PegKind::Interm => "the intermediate peg (middle)",
        PegKind::End => "the end peg (right)",
    }
}
