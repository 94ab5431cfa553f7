#![cfg(feature = "std")]

//! Terminal rendering and coordinate input.

use crate::board::Board;
use crate::common::{Cell, Coord};
use crate::config::BOARD_SIZE;

/// Parse a coordinate typed as a column letter and a 1-based row, e.g. `B7`.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("Empty input")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str = chars.as_str().trim();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Coord::new(row - 1, col).map_err(|e| e.to_string())
}

fn cell_char(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::Ship(_) if reveal => 'S',
        _ => '.',
    }
}

/// Render the board as text. With `reveal`, untouched ship cells show as `S`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("    ");
    for c in 0..BOARD_SIZE as usize {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in board.grid().iter().enumerate() {
        out.push_str(&format!("  {:2}", r + 1));
        for cell in row {
            out.push(' ');
            out.push(cell_char(*cell, reveal));
        }
        out.push('\n');
    }
    out
}

/// One line per ship: name, length and damage.
pub fn render_fleet(board: &Board) -> String {
    board
        .fleet()
        .iter()
        .map(|ship| {
            let status = if ship.is_destroyed() {
                "DESTROYED".to_string()
            } else {
                format!("{}/{} hit", ship.hits(), ship.length())
            };
            format!("  {:<10} ({}) {}", ship.name(), ship.length(), status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
