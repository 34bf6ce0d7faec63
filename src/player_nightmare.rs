//! "Nightmare" opponent: chases known hits first, otherwise fires at the
//! cell covered by the most placements still consistent with what it knows.

use alloc::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    ai::{adjacent_target, best_target, density_map},
    common::{BoardError, Coord, Shot},
    grid::Grid,
    knowledge::KnowledgeGrid,
    player::Player,
};

/// Density-driven AI with its own record of past shots.
///
/// It never reads intact ship positions from the opponent grid; all
/// decisions come from its [`KnowledgeGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightmareAi<const N: usize> {
    fleet: Vec<usize>,
    knowledge: KnowledgeGrid<N>,
}

impl<const N: usize> NightmareAi<N> {
    /// AI expecting an opponent carrying `fleet`.
    pub fn new(fleet: &[usize]) -> Self {
        Self {
            fleet: fleet.to_vec(),
            knowledge: KnowledgeGrid::new(),
        }
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    pub fn knowledge(&self) -> &KnowledgeGrid<N> {
        &self.knowledge
    }

    /// The cell the next shot will go to, or `None` once everything is known.
    pub fn next_target(&self) -> Option<Coord> {
        adjacent_target(&self.knowledge).or_else(|| {
            let density = density_map(&self.knowledge, &self.fleet);
            best_target(&self.knowledge, &density)
        })
    }

    /// Fire at [`NightmareAi::next_target`] and record the outcome.
    pub fn select_and_attack(&mut self, opponent: &mut Grid<N>) -> Result<Shot, BoardError> {
        let (r, c) = self.next_target().ok_or(BoardError::NoTargetsRemaining)?;
        let result = opponent.resolve_attack(r, c)?;
        self.knowledge.record(r, c, result)?;
        log::trace!("nightmare fired at ({}, {}): {:?}", r, c, result);
        Ok(Shot {
            coord: (r, c),
            result,
        })
    }
}

impl<const N: usize> Player<N> for NightmareAi<N> {
    fn name(&self) -> &str {
        "Computer (Nightmare)"
    }

    fn take_shot(&mut self, _rng: &mut SmallRng, opponent: &mut Grid<N>) -> anyhow::Result<Shot> {
        self.select_and_attack(opponent)
            .map_err(|e| anyhow::anyhow!(e))
    }
}
