//! What one side has learned about the opponent's grid.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{AttackResult, BoardError};
use crate::grid::Grid;

type BB<const N: usize> = BitBoard<u128, N>;

/// Observed state of an opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knowledge {
    Unknown,
    /// Struck a ship segment here, sunk or not.
    Hit,
    Miss,
}

/// Record of attack outcomes against one opponent, kept apart from that
/// opponent's ground truth.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct KnowledgeGrid<const N: usize> {
    hits: BB<N>,
    misses: BB<N>,
}

impl<const N: usize> KnowledgeGrid<N> {
    /// Nothing known yet.
    pub fn new() -> Self {
        Self {
            hits: BB::<N>::new(),
            misses: BB::<N>::new(),
        }
    }

    /// The view any attacker is entitled to: struck segments as hits and
    /// attacked water as misses, nothing about intact ships.
    pub fn observed(grid: &Grid<N>) -> Self {
        Self {
            hits: grid.struck(),
            misses: grid.misses(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Knowledge, BoardError> {
        if self.hits.get(row, col)? {
            Ok(Knowledge::Hit)
        } else if self.misses.get(row, col)? {
            Ok(Knowledge::Miss)
        } else {
            Ok(Knowledge::Unknown)
        }
    }

    /// Store the outcome of an attack on `(row, col)`.
    pub fn record(&mut self, row: usize, col: usize, result: AttackResult) -> Result<(), BoardError> {
        if self.cell(row, col)? != Knowledge::Unknown {
            return Err(BoardError::AlreadyAttacked);
        }
        match result {
            AttackResult::Hit => self.hits.set(row, col)?,
            AttackResult::Miss => self.misses.set(row, col)?,
        }
        Ok(())
    }

    pub fn unknown_count(&self) -> usize {
        N * N - (self.hits | self.misses).count_ones()
    }

    pub fn hits(&self) -> BB<N> {
        self.hits
    }

    pub fn misses(&self) -> BB<N> {
        self.misses
    }
}

impl<const N: usize> fmt::Debug for KnowledgeGrid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "KnowledgeGrid<{}> {{\n  hits: {:?},\n  misses: {:?}\n}}",
            N, self.hits, self.misses
        )
    }
}
