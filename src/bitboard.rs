//! Fixed-size N×N cell masks packed into an unsigned integer.
//!
//! Every per-cell fact a grid tracks (ship occupancy, struck segments, sunk
//! segments, misses) is one `Copy` mask, so snapshots and comparisons are
//! cheap and nothing here allocates.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "board of {}x{} cells exceeds {} bits", n, n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is off the board", row, col)
            }
        }
    }
}

/// Unsigned integer types a board can be packed into.
pub trait Bits: PrimInt + Unsigned {}

impl<T: PrimInt + Unsigned> Bits for T {}

/// Orthogonal neighbours of `(row, col)` that lie on an N×N board, in the
/// fixed order up, down, left, right.
pub fn neighbors<const N: usize>(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    const DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    DIRS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < N && c < N).then_some((r, c))
    })
}

/// An N×N set of cells stored in the unsigned integer `T`.
///
/// A board whose N*N cells do not fit in `T` is rejected when it is built:
///
/// ```compile_fail
/// let _ = gridstrike::BitBoard::<u128, 12>::new();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T: Bits, const N: usize> {
    bits: T,
}

impl<T: Bits, const N: usize> BitBoard<T, N> {
    const BOARD_BITS: usize = N * N;
    const FITS: () = assert!(
        N > 0 && N * N <= mem::size_of::<T>() * 8,
        "board does not fit in the bitboard integer"
    );

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Empty board, no size check.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Empty board, or `SizeTooLarge` when `N*N` does not fit in `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(BitBoard { bits: T::zero() })
        }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Membership test for a cell already known to be on the board.
    #[inline]
    pub(crate) fn contains(&self, (row, col): (usize, usize)) -> bool {
        debug_assert!(row < N && col < N);
        ((self.bits >> (row * N + col)) & T::one()) != T::zero()
    }

    /// Add a cell already known to be on the board.
    #[inline]
    pub(crate) fn insert(&mut self, (row, col): (usize, usize)) {
        debug_assert!(row < N && col < N);
        self.bits = self.bits | (T::one() << (row * N + col));
    }

    /// True if the two boards share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }

    /// Board from a raw integer; bits past `N*N` are dropped.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Set cells in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T: Bits, const N: usize> Default for BitBoard<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Bits, const N: usize> fmt::Display for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let set = ((self.bits >> (r * N + c)) & T::one()) != T::zero();
                write!(f, "{} ", if set { '■' } else { '□' })?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T: Bits, const N: usize> fmt::Debug for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        fmt::Display::fmt(self, f)
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<T: Bits, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T: Bits, const N: usize> Iterator for SetBits<T, N> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T: Bits, const N: usize> BitAnd for BitBoard<T, N> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T: Bits, const N: usize> BitOr for BitBoard<T, N> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Complement within the N×N board.
impl<T: Bits, const N: usize> Not for BitBoard<T, N> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl<T: Bits, const N: usize> BitOrAssign for BitBoard<T, N> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
