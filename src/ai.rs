// Placement-density targeting over a knowledge grid.
// Uses no_std and avoids heap allocations.

use crate::{
    bitboard::neighbors,
    common::Coord,
    knowledge::{Knowledge, KnowledgeGrid},
    ship::windows,
};

/// Count, for every cell, how many in-bounds placements of the remaining
/// fleet could cover it without crossing a known miss.
///
/// Each length in `fleet` contributes every horizontal and vertical window
/// independently, i.e. a uniform placement prior that ignores overlap between
/// ships. Cells already struck keep contributing to (and receiving) counts;
/// callers only pick among unknown cells.
pub fn density_map<const N: usize>(
    knowledge: &KnowledgeGrid<N>,
    fleet: &[usize],
) -> [[u32; N]; N] {
    let mut counts = [[0u32; N]; N];
    let misses = knowledge.misses();
    for &length in fleet {
        for run in windows::<N>(length) {
            if run.mask().intersects(&misses) {
                continue;
            }
            for (r, c) in run.cells() {
                counts[r][c] += 1;
            }
        }
    }
    counts
}

/// First unknown neighbour of a known hit, scanning hits in row-major order
/// and neighbours in the order up, down, left, right.
pub fn adjacent_target<const N: usize>(knowledge: &KnowledgeGrid<N>) -> Option<Coord> {
    knowledge.hits().iter_set_bits().find_map(|(r, c)| {
        neighbors::<N>(r, c)
            .find(|&(nr, nc)| matches!(knowledge.cell(nr, nc), Ok(Knowledge::Unknown)))
    })
}

/// Unknown cell with the highest count; ties go to the first in row-major
/// order. `None` once every cell is known.
pub fn best_target<const N: usize>(
    knowledge: &KnowledgeGrid<N>,
    density: &[[u32; N]; N],
) -> Option<Coord> {
    let mut best: Option<(Coord, u32)> = None;
    for r in 0..N {
        for c in 0..N {
            if !matches!(knowledge.cell(r, c), Ok(Knowledge::Unknown)) {
                continue;
            }
            let score = density[r][c];
            if best.map_or(true, |(_, top)| score > top) {
                best = Some(((r, c), score));
            }
        }
    }
    best.map(|(coord, _)| coord)
}

/// Scale counts over unknown cells into a distribution summing to one.
/// Known cells get zero; with no mass anywhere every unknown cell is equal.
pub fn normalize<const N: usize>(
    knowledge: &KnowledgeGrid<N>,
    density: &[[u32; N]; N],
) -> [[f64; N]; N] {
    let mut matrix = [[0.0f64; N]; N];
    let mut total = 0.0;
    let mut unknown = 0usize;
    for r in 0..N {
        for c in 0..N {
            if matches!(knowledge.cell(r, c), Ok(Knowledge::Unknown)) {
                matrix[r][c] = density[r][c] as f64;
                total += matrix[r][c];
                unknown += 1;
            }
        }
    }
    if unknown == 0 {
        return matrix;
    }
    for r in 0..N {
        for c in 0..N {
            if !matches!(knowledge.cell(r, c), Ok(Knowledge::Unknown)) {
                continue;
            }
            matrix[r][c] = if total == 0.0 {
                1.0 / unknown as f64
            } else {
                matrix[r][c] / total
            };
        }
    }
    matrix
}
