//! Two-sided match driver: setup, turn alternation and victory detection.

use alloc::boxed::Box;

use rand::rngs::SmallRng;

use crate::{
    common::Shot,
    grid::Grid,
    placement::PlacementReport,
    player::Player,
};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Side that fired.
    pub side: Side,
    pub shot: Shot,
    /// Status after the shot resolved.
    pub status: GameStatus,
}

/// A game between two players, each owning one grid.
pub struct Match<const N: usize> {
    grids: [Grid<N>; 2],
    players: [Box<dyn Player<N>>; 2],
    to_move: Side,
    turns: usize,
}

impl<const N: usize> Match<N> {
    /// Empty grids, `first` moves first.
    pub fn new(first: Box<dyn Player<N>>, second: Box<dyn Player<N>>) -> Self {
        Self {
            grids: [Grid::new(), Grid::new()],
            players: [first, second],
            to_move: Side::First,
            turns: 0,
        }
    }

    /// Let each player place `fleet` on its own grid.
    pub fn setup(
        &mut self,
        rng: &mut SmallRng,
        fleet: &[usize],
    ) -> anyhow::Result<[PlacementReport; 2]> {
        let [first_grid, second_grid] = &mut self.grids;
        let [first, second] = &mut self.players;
        let a = first.place_ships(rng, first_grid, fleet)?;
        let b = second.place_ships(rng, second_grid, fleet)?;
        Ok([a, b])
    }

    pub fn grid(&self, side: Side) -> &Grid<N> {
        &self.grids[side.index()]
    }

    pub fn player(&self, side: Side) -> &dyn Player<N> {
        self.players[side.index()].as_ref()
    }

    /// Side whose turn is next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Shots fired so far, both sides combined.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn status(&self) -> GameStatus {
        if self.grids[1].is_defeated() {
            GameStatus::Won(Side::First)
        } else if self.grids[0].is_defeated() {
            GameStatus::Won(Side::Second)
        } else {
            GameStatus::InProgress
        }
    }

    /// Let the side to move fire one shot at its opponent.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        let side = self.to_move;
        let [first_grid, second_grid] = &mut self.grids;
        let target = match side {
            Side::First => second_grid,
            Side::Second => first_grid,
        };
        let shot = self.players[side.index()].take_shot(rng, target)?;
        self.turns += 1;
        self.to_move = side.opponent();
        let status = self.status();
        if let GameStatus::Won(winner) = status {
            log::debug!("{:?} wins after {} shots", winner, self.turns);
        }
        Ok(TurnReport { side, shot, status })
    }

    /// Play until one side is defeated or `max_turns` shots have been fired.
    pub fn run(&mut self, rng: &mut SmallRng, max_turns: usize) -> anyhow::Result<GameStatus> {
        while self.status() == GameStatus::InProgress && self.turns < max_turns {
            self.play_turn(rng)?;
        }
        Ok(self.status())
    }
}
