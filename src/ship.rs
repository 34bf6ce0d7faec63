//! Straight-line ship runs and their occupancy masks.
//!
//! Ships carry no identity once placed: a run only exists long enough to be
//! validated and stamped onto a grid, after which the grid tracks cells.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A run of `length` cells starting at `origin` and extending right
/// (horizontal) or down (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipRun<const N: usize> {
    length: usize,
    orientation: Orientation,
    origin: Coord,
    mask: BitBoard<u128, N>,
}

impl<const N: usize> ShipRun<N> {
    /// Build the run, failing if it is empty or leaves the N×N board.
    pub fn new(length: usize, orientation: Orientation, row: usize, col: usize) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        let (end_row, end_col) = match orientation {
            Orientation::Horizontal => (Some(row), col.checked_add(length - 1)),
            Orientation::Vertical => (row.checked_add(length - 1), Some(col)),
        };
        match (end_row, end_col) {
            (Some(r), Some(c)) if r < N && c < N => {}
            _ => return Err(BoardError::ShipOutOfBounds),
        }
        let mask = BitBoard::from_iter(run_cells(length, orientation, row, col))?;
        Ok(ShipRun {
            length,
            orientation,
            origin: (row, col),
            mask,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Occupancy mask of the run.
    pub fn mask(&self) -> BitBoard<u128, N> {
        self.mask
    }

    /// Cells covered by the run, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (row, col) = self.origin;
        run_cells(self.length, self.orientation, row, col)
    }
}

fn run_cells(
    length: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
) -> impl Iterator<Item = Coord> {
    (0..length).map(move |k| match orientation {
        Orientation::Horizontal => (row, col + k),
        Orientation::Vertical => (row + k, col),
    })
}

/// Every in-bounds run of `length` on an N×N board: all horizontal windows in
/// row-major order, then all vertical windows in column-major order.
pub fn windows<const N: usize>(length: usize) -> impl Iterator<Item = ShipRun<N>> {
    let span = if length == 0 || length > N { 0 } else { N - length + 1 };
    let horizontal = (0..N).flat_map(move |r| (0..span).map(move |c| (Orientation::Horizontal, r, c)));
    let vertical = (0..N).flat_map(move |c| (0..span).map(move |r| (Orientation::Vertical, r, c)));
    horizontal
        .chain(vertical)
        .filter_map(move |(o, r, c)| ShipRun::new(length, o, r, c).ok())
}
