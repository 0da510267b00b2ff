use std::fmt::Write;

use sapper_core::{Board, Cell};

fn glyph(cell: &Cell, show_mines: bool) -> char {
    if cell.is_open() {
        match cell.neighbor_mine_count() {
            0 => '.',
            count => char::from(b'0' + count),
        }
    } else if show_mines && cell.is_mine() {
        '*'
    } else {
        '#'
    }
}

/// Draws the board as text with column and row labels, mines are only drawn when asked for.
pub fn render(board: &Board, show_mines: bool) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for x in 0..board.width() {
        let _ = write!(out, "{}", x % 10);
    }
    out.push('\n');

    for (y, row) in board.rows().enumerate() {
        let _ = write!(out, "{y:>3} ");
        out.extend(row.iter().map(|cell| glyph(cell, show_mines)));
        out.push('\n');
    }

    out
}
