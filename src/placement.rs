//! Randomised fleet placement with a bounded number of draws per ship.

use alloc::vec::Vec;

use rand::Rng;

use crate::common::{BoardError, Coord};
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::grid::Grid;
use crate::ship::{Orientation, ShipRun};

/// Which ships of a fleet made it onto the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementReport {
    placed: Vec<usize>,
    unplaced: Vec<usize>,
}

impl PlacementReport {
    /// Lengths of ships that were placed, in fleet order.
    pub fn placed(&self) -> &[usize] {
        &self.placed
    }

    /// Lengths of ships that were given up on, in fleet order.
    pub fn unplaced(&self) -> &[usize] {
        &self.unplaced
    }

    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Segments stamped onto the grid by this placement.
    pub fn placed_segments(&self) -> usize {
        self.placed.iter().sum()
    }

    /// Turn a partial placement into `PlacementExhausted` for the first
    /// ship left off the grid.
    pub fn ensure_complete(&self) -> Result<(), BoardError> {
        match self.unplaced.first() {
            Some(&length) => Err(BoardError::PlacementExhausted { length }),
            None => Ok(()),
        }
    }

    pub(crate) fn record(&mut self, length: usize, placed: bool) {
        if placed {
            self.placed.push(length);
        } else {
            self.unplaced.push(length);
        }
    }
}

/// Draw up to [`MAX_PLACEMENT_ATTEMPTS`] random origins and orientations for
/// a ship of `length`, returning the first one that fits on `grid`.
pub fn random_placement<const N: usize, R: Rng + ?Sized>(
    grid: &Grid<N>,
    length: usize,
    rng: &mut R,
) -> Result<(Coord, Orientation), BoardError> {
    if length == 0 {
        return Err(BoardError::InvalidShipLength);
    }
    if length > N {
        return Err(BoardError::PlacementExhausted { length });
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (N - 1, N - length),
            Orientation::Vertical => (N - length, N - 1),
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let run = ShipRun::<N>::new(length, orientation, r, c)?;
        if !run.mask().intersects(&grid.ship_map()) {
            return Ok(((r, c), orientation));
        }
    }
    Err(BoardError::PlacementExhausted { length })
}

/// Place each ship of `fleet` in order, best effort.
///
/// A ship that cannot be placed within the draw budget is skipped and the
/// remaining ships are still attempted. Callers that need the whole fleet
/// check the returned report.
pub fn place_fleet<const N: usize, R: Rng + ?Sized>(
    grid: &mut Grid<N>,
    fleet: &[usize],
    rng: &mut R,
) -> PlacementReport {
    let mut report = PlacementReport::default();
    for &length in fleet {
        let placed = random_placement(grid, length, rng)
            .and_then(|((r, c), o)| grid.place_ship(length, o, r, c));
        if let Err(e) = &placed {
            log::warn!("ship of length {} left unplaced: {}", length, e);
        }
        report.record(length, placed.is_ok());
    }
    log::debug!(
        "placed {} of {} ships ({} segments)",
        report.placed().len(),
        fleet.len(),
        report.placed_segments()
    );
    report
}
