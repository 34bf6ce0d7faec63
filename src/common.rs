//! Common types for the engine: cell states, attack outcomes and errors.

use crate::bitboard::BitBoardError;

/// A `(row, col)` position, 0-based.
pub type Coord = (usize, usize);

/// State of a single cell on a player's own grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Untouched open water.
    Water,
    /// Ship segment that has not been attacked.
    ShipIntact,
    /// Struck segment whose region still has intact segments.
    ShipHit,
    /// Struck segment whose whole region has been struck.
    ShipDestroyed,
    /// Attacked water.
    Miss,
}

impl CellState {
    /// Ship segment in any condition.
    pub fn is_ship(self) -> bool {
        matches!(
            self,
            CellState::ShipIntact | CellState::ShipHit | CellState::ShipDestroyed
        )
    }

    /// Cell has already received an attack.
    pub fn is_attacked(self) -> bool {
        matches!(
            self,
            CellState::ShipHit | CellState::ShipDestroyed | CellState::Miss
        )
    }
}

/// Outcome of resolving one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    Hit,
    Miss,
}

/// A resolved shot: where it landed and what it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub coord: Coord,
    pub result: AttackResult,
}

/// Errors returned by grid, placement and targeting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (coordinate off the board).
    BitBoard(BitBoardError),
    /// Part of the requested ship run lies outside the grid.
    ShipOutOfBounds,
    /// Part of the requested ship run is not open water.
    ShipOverlaps,
    /// Ship length must be at least one segment.
    InvalidShipLength,
    /// Ships can only be placed before the first attack.
    PlacementAfterAttack,
    /// The target cell was already attacked.
    AlreadyAttacked,
    /// Random placement gave up on a ship of this length.
    PlacementExhausted { length: usize },
    /// Every cell of the target grid has been attacked.
    NoTargetsRemaining,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "{}", e),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps another ship"),
            BoardError::InvalidShipLength => write!(f, "Ship length must be at least 1"),
            BoardError::PlacementAfterAttack => {
                write!(f, "Ships cannot be placed once attacks have started")
            }
            BoardError::AlreadyAttacked => write!(f, "Position was already attacked"),
            BoardError::PlacementExhausted { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            BoardError::NoTargetsRemaining => write!(f, "No unattacked cells remain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
