//! A player's own grid: ship placement, attack resolution and defeat check.

use core::fmt;

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{AttackResult, BoardError, CellState};
use crate::placement::{self, PlacementReport};
use crate::region;
use crate::ship::{Orientation, ShipRun};

type BB<const N: usize> = BitBoard<u128, N>;

/// Ground truth for one side of a game.
///
/// Cell state is held as four masks with `sunk ⊆ struck ⊆ ships` and
/// `misses ∩ ships = ∅`. The only mutators are [`Grid::place_ship`] (before
/// the first attack) and [`Grid::resolve_attack`], so cells only ever move
/// forward: water to miss, intact to hit, hit to destroyed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    ships: BB<N>,
    struck: BB<N>,
    sunk: BB<N>,
    misses: BB<N>,
}

impl<const N: usize> Grid<N> {
    /// An all-water grid.
    pub fn new() -> Self {
        let empty = BB::<N>::new();
        Grid {
            ships: empty,
            struck: empty,
            sunk: empty,
            misses: empty,
        }
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    /// Stamp a ship of `length` at `(row, col)` extending right or down.
    ///
    /// All-or-nothing: on error the grid is left untouched.
    pub fn place_ship(
        &mut self,
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<(), BoardError> {
        if self.has_attacks() {
            return Err(BoardError::PlacementAfterAttack);
        }
        let run = ShipRun::<N>::new(length, orientation, row, col)?;
        if run.mask().intersects(&self.ships) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ships |= run.mask();
        Ok(())
    }

    /// Best-effort random placement of `fleet`, see [`placement::place_fleet`].
    pub fn place_ships_random<R: Rng + ?Sized>(
        &mut self,
        fleet: &[usize],
        rng: &mut R,
    ) -> PlacementReport {
        placement::place_fleet(self, fleet, rng)
    }

    /// Resolve an attack on `(row, col)`.
    ///
    /// Striking a segment re-runs region analysis so that a ship whose last
    /// intact segment was just hit reads as destroyed when this returns.
    /// Attacking a cell twice is reported as `AlreadyAttacked` and changes
    /// nothing.
    pub fn resolve_attack(&mut self, row: usize, col: usize) -> Result<AttackResult, BoardError> {
        match self.cell_at(row, col)? {
            CellState::ShipIntact => {
                self.struck.set(row, col)?;
                self.mark_destroyed_regions();
                log::trace!("attack ({}, {}) hit", row, col);
                Ok(AttackResult::Hit)
            }
            CellState::Water => {
                self.misses.set(row, col)?;
                log::trace!("attack ({}, {}) missed", row, col);
                Ok(AttackResult::Miss)
            }
            CellState::ShipHit | CellState::ShipDestroyed | CellState::Miss => {
                Err(BoardError::AlreadyAttacked)
            }
        }
    }

    /// Mark every ship region without intact segments as destroyed.
    ///
    /// Idempotent; [`Grid::resolve_attack`] calls it after each hit.
    pub fn mark_destroyed_regions(&mut self) {
        let sunk = region::sunk_cells(&self.ships, &self.struck);
        let newly_sunk = sunk & !self.sunk;
        if !newly_sunk.is_empty() {
            log::debug!("{} segment(s) destroyed", newly_sunk.count_ones());
        }
        self.sunk |= sunk;
    }

    /// True when no intact ship segment remains.
    pub fn is_defeated(&self) -> bool {
        (self.ships & !self.struck).is_empty()
    }

    /// State of the cell at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        let state = if self.sunk.get(row, col)? {
            CellState::ShipDestroyed
        } else if self.struck.get(row, col)? {
            CellState::ShipHit
        } else if self.ships.get(row, col)? {
            CellState::ShipIntact
        } else if self.misses.get(row, col)? {
            CellState::Miss
        } else {
            CellState::Water
        };
        Ok(state)
    }

    /// True if `(row, col)` has already received an attack.
    pub fn is_attacked(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cell_at(row, col)?.is_attacked())
    }

    /// True once any cell has been attacked.
    pub fn has_attacks(&self) -> bool {
        !(self.struck | self.misses).is_empty()
    }

    /// Cells that have not been attacked yet.
    pub fn unattacked_count(&self) -> usize {
        N * N - (self.struck | self.misses).count_ones()
    }

    /// Number of ship segments in any condition.
    pub fn ship_cell_count(&self) -> usize {
        self.ships.count_ones()
    }

    /// Number of ship segments not yet attacked.
    pub fn intact_count(&self) -> usize {
        (self.ships & !self.struck).count_ones()
    }

    /// Occupancy mask of all ship segments.
    pub fn ship_map(&self) -> BB<N> {
        self.ships
    }

    /// Mask of attacked ship segments, destroyed or not.
    pub fn struck(&self) -> BB<N> {
        self.struck
    }

    /// Mask of destroyed ship segments.
    pub fn sunk(&self) -> BB<N> {
        self.sunk
    }

    /// Mask of attacked water.
    pub fn misses(&self) -> BB<N> {
        self.misses
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid<{}> {{\n  ships: {:?},\n  struck: {:?},\n  sunk: {:?},\n  misses: {:?}\n}}",
            N, self.ships, self.struck, self.sunk, self.misses
        )
    }
}
