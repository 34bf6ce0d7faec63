use rand::rngs::SmallRng;

use crate::{
    common::Shot,
    grid::Grid,
    placement::{place_fleet, PlacementReport},
};

/// Interface implemented by everything that can take a side in a match.
pub trait Player<const N: usize> {
    /// Display name used by the shell when announcing turns.
    fn name(&self) -> &str;

    /// Place `fleet` onto the player's own grid. Defaults to best-effort
    /// random placement.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid<N>,
        fleet: &[usize],
    ) -> anyhow::Result<PlacementReport> {
        Ok(place_fleet(grid, fleet, rng))
    }

    /// Choose a cell on `opponent`, attack it, and report the shot.
    fn take_shot(&mut self, rng: &mut SmallRng, opponent: &mut Grid<N>) -> anyhow::Result<Shot>;
}
