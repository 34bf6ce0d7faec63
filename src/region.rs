//! Connected-component analysis over ship cells.
//!
//! Sinking is a whole-region event: a region of 4-connected ship segments is
//! destroyed exactly when none of its segments is intact. Regions are found
//! with an explicit worklist and a visited mask, so the scan is `O(N²)` and
//! never recurses.

use alloc::vec::Vec;

use crate::bitboard::{neighbors, BitBoard};
use crate::common::Coord;

type BB<const N: usize> = BitBoard<u128, N>;

/// Maximal 4-connected groups of cells in `cells`, discovered in row-major
/// order of their first cell.
pub fn regions<const N: usize>(cells: &BB<N>) -> Vec<BB<N>> {
    let mut visited = BB::<N>::new();
    let mut found = Vec::new();
    let mut worklist: Vec<Coord> = Vec::with_capacity(N * N);

    for start in cells.iter_set_bits() {
        if visited.contains(start) {
            continue;
        }
        let mut region = BB::<N>::new();
        visited.insert(start);
        worklist.push(start);
        while let Some((r, c)) = worklist.pop() {
            region.insert((r, c));
            for next in neighbors::<N>(r, c) {
                if cells.contains(next) && !visited.contains(next) {
                    visited.insert(next);
                    worklist.push(next);
                }
            }
        }
        found.push(region);
    }
    found
}

/// Union of every ship region whose segments have all been struck.
pub fn sunk_cells<const N: usize>(ships: &BB<N>, struck: &BB<N>) -> BB<N> {
    regions(ships)
        .into_iter()
        .filter(|region| (*region & !*struck).is_empty())
        .fold(BB::<N>::new(), |acc, region| acc | region)
}
