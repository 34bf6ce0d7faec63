#![cfg(feature = "std")]

//! Text rendering of grids and coordinate parsing for the terminal shell.

use std::fmt::Write as _;

use crate::{
    common::{CellState, Coord},
    grid::Grid,
    knowledge::{Knowledge, KnowledgeGrid},
};

/// Glyph for a cell; intact ships are drawn as water unless `reveal` is set.
pub fn glyph(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Water => '.',
        CellState::ShipIntact if reveal => '&',
        CellState::ShipIntact => '.',
        CellState::ShipHit => '#',
        CellState::ShipDestroyed => '0',
        CellState::Miss => 'x',
    }
}

fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Human form of a coordinate, e.g. `(0, 2)` becomes `C1`.
pub fn coord_to_string((row, col): Coord) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Parse `A1`-style input (column letter, 1-based row) for an N×N grid.
pub fn parse_coord<const N: usize>(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("Empty input - enter a column letter and row number (e.g. A5)")?
        .to_ascii_uppercase();
    let last_col = column_letter(N - 1);
    if !col_ch.is_ascii_uppercase() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= N {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str = chars.as_str().trim();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, N))?;
    if row == 0 || row > N {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, N));
    }
    Ok((row - 1, col))
}

fn header(out: &mut String, n: usize, width: usize) {
    out.push_str("   ");
    for c in 0..n {
        let _ = write!(out, " {:>width$}", column_letter(c), width = width);
    }
    out.push('\n');
}

/// Render a grid, hiding intact ships unless `reveal` is set.
pub fn render_grid<const N: usize>(grid: &Grid<N>, reveal: bool) -> String {
    let mut out = String::new();
    header(&mut out, N, 1);
    for r in 0..N {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..N {
            let state = grid.cell_at(r, c).unwrap_or(CellState::Water);
            let _ = write!(out, " {}", glyph(state, reveal));
        }
        out.push('\n');
    }
    out
}

/// Render what a player has learned about an opponent.
pub fn render_knowledge<const N: usize>(knowledge: &KnowledgeGrid<N>) -> String {
    let mut out = String::new();
    header(&mut out, N, 1);
    for r in 0..N {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..N {
            let ch = match knowledge.cell(r, c) {
                Ok(Knowledge::Hit) => '#',
                Ok(Knowledge::Miss) => 'x',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Render a normalized probability matrix.
pub fn render_probability<const N: usize>(pdf: &[[f64; N]; N]) -> String {
    let mut out = String::from("Probability distribution:\n");
    header(&mut out, N, 4);
    for (r, row) in pdf.iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for p in row {
            let _ = write!(out, " {:4.2}", p);
        }
        out.push('\n');
    }
    out
}

/// Legend printed before a game starts.
pub fn rules() -> &'static str {
    "Players take turns attacking each other's ships.\n\
     The first player to sink every enemy ship wins.\n\n\
     Symbols on the board:\n  \
     '.' - Water\n  \
     '&' - Intact ship part\n  \
     '#' - Hit ship part\n  \
     '0' - Destroyed ship\n  \
     'x' - Missed attack\n"
}
