//! Hunt/target opponent: random search until a hit, then probe the
//! neighbours of the most recent hit until the ship goes down.

use rand::{rngs::SmallRng, Rng};

use crate::{
    bitboard::neighbors,
    common::{AttackResult, BoardError, CellState, Coord, Shot},
    config::MAX_CANDIDATES,
    grid::Grid,
    player::Player,
};

/// Search mode of the reactive AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No live ship known; fire at random untried cells.
    #[default]
    Hunt,
    /// Chasing a ship around a known hit.
    Target,
}

/// Bounded LIFO of cells to probe next. Pushing onto a full stack drops the
/// oldest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CandidateStack {
    slots: [Coord; MAX_CANDIDATES],
    len: usize,
}

impl CandidateStack {
    fn as_slice(&self) -> &[Coord] {
        &self.slots[..self.len]
    }

    fn push(&mut self, coord: Coord) {
        if self.as_slice().contains(&coord) {
            return;
        }
        if self.len == MAX_CANDIDATES {
            log::debug!("candidate stack full, dropping {:?}", self.slots[0]);
            self.slots.copy_within(1.., 0);
            self.len -= 1;
        }
        self.slots[self.len] = coord;
        self.len += 1;
    }

    fn pop(&mut self) -> Option<Coord> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.slots[self.len])
    }

    fn clear(&mut self) {
        self.len = 0;
    }
}

/// The reactive hunt/target AI. All of its state lives here, so any number
/// of instances can run side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactiveAi {
    mode: Mode,
    last_hit: Option<Coord>,
    candidates: CandidateStack,
}

impl ReactiveAi {
    /// Fresh AI in hunt mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// AI already chasing a ship, with `candidates` pushed oldest first.
    pub fn targeting(last_hit: Coord, candidates: &[Coord]) -> Self {
        let mut ai = Self {
            mode: Mode::Target,
            last_hit: Some(last_hit),
            candidates: CandidateStack::default(),
        };
        for &coord in candidates {
            ai.candidates.push(coord);
        }
        ai
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    /// Outstanding candidates, oldest first; the last one is probed next.
    pub fn candidates(&self) -> &[Coord] {
        self.candidates.as_slice()
    }

    /// Pick a cell on `opponent` according to the current mode, attack it
    /// and update the chase state.
    pub fn select_and_attack<const N: usize, R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &mut Grid<N>,
    ) -> Result<Shot, BoardError> {
        let shot = match self.mode {
            Mode::Hunt => self.hunt(rng, opponent)?,
            Mode::Target => self.chase(rng, opponent)?,
        };
        if let Some((r, c)) = self.last_hit {
            if opponent.cell_at(r, c)? == CellState::ShipDestroyed {
                log::debug!("ship at ({}, {}) sunk, back to hunt", r, c);
                self.reset();
            }
        }
        Ok(shot)
    }

    fn hunt<const N: usize, R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &mut Grid<N>,
    ) -> Result<Shot, BoardError> {
        if opponent.unattacked_count() == 0 {
            return Err(BoardError::NoTargetsRemaining);
        }
        let (r, c) = loop {
            let r = rng.random_range(0..N);
            let c = rng.random_range(0..N);
            if !opponent.is_attacked(r, c)? {
                break (r, c);
            }
        };
        let result = opponent.resolve_attack(r, c)?;
        if result == AttackResult::Hit {
            log::debug!("hunt hit at ({}, {}), switching to target", r, c);
            self.mode = Mode::Target;
            self.last_hit = Some((r, c));
            self.candidates.clear();
            self.push_neighbors(opponent, r, c)?;
        }
        Ok(Shot {
            coord: (r, c),
            result,
        })
    }

    fn chase<const N: usize, R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &mut Grid<N>,
    ) -> Result<Shot, BoardError> {
        while let Some((r, c)) = self.candidates.pop() {
            // the cell may have been struck since it was queued
            if opponent.is_attacked(r, c)? {
                continue;
            }
            let result = opponent.resolve_attack(r, c)?;
            if result == AttackResult::Hit {
                self.last_hit = Some((r, c));
                self.push_neighbors(opponent, r, c)?;
            }
            return Ok(Shot {
                coord: (r, c),
                result,
            });
        }
        log::debug!("no candidates left, back to hunt");
        self.reset();
        self.hunt(rng, opponent)
    }

    fn push_neighbors<const N: usize>(
        &mut self,
        opponent: &Grid<N>,
        row: usize,
        col: usize,
    ) -> Result<(), BoardError> {
        for (r, c) in neighbors::<N>(row, col) {
            if !opponent.is_attacked(r, c)? {
                self.candidates.push((r, c));
            }
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.mode = Mode::Hunt;
        self.last_hit = None;
        self.candidates.clear();
    }
}

impl<const N: usize> Player<N> for ReactiveAi {
    fn name(&self) -> &str {
        "Computer"
    }

    fn take_shot(&mut self, rng: &mut SmallRng, opponent: &mut Grid<N>) -> anyhow::Result<Shot> {
        self.select_and_attack(rng, opponent)
            .map_err(|e| anyhow::anyhow!(e))
    }
}
