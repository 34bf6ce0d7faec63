use gridstrike::region::regions;
use gridstrike::{CellState, Grid, STANDARD_FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

const N: usize = 10;

fn fleet_grid(seed: u64) -> Grid<N> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::<N>::new();
    grid.place_ships_random(&STANDARD_FLEET, &mut rng);
    grid
}

fn snapshot(grid: &Grid<N>) -> Vec<CellState> {
    (0..N)
        .flat_map(|r| (0..N).map(move |c| (r, c)))
        .map(|(r, c)| grid.cell_at(r, c).unwrap())
        .collect()
}

fn forward(before: CellState, after: CellState) -> bool {
    use CellState::*;
    before == after
        || matches!(
            (before, after),
            (Water, Miss) | (ShipIntact, ShipHit) | (ShipIntact, ShipDestroyed) | (ShipHit, ShipDestroyed)
        )
}

fn attacks() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..N, 0..N), 0..160)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cells_only_move_forward(seed in any::<u64>(), shots in attacks()) {
        let mut grid = fleet_grid(seed);
        for (r, c) in shots {
            let before = snapshot(&grid);
            let _ = grid.resolve_attack(r, c);
            let after = snapshot(&grid);
            for (b, a) in before.iter().zip(&after) {
                prop_assert!(forward(*b, *a), "{:?} -> {:?}", b, a);
            }
        }
    }

    #[test]
    fn ship_cells_are_conserved(seed in any::<u64>(), shots in attacks()) {
        let mut grid = fleet_grid(seed);
        let ships = snapshot(&grid).iter().filter(|s| s.is_ship()).count();
        prop_assert_eq!(ships, 13);
        for (r, c) in shots {
            let _ = grid.resolve_attack(r, c);
            let now = snapshot(&grid).iter().filter(|s| s.is_ship()).count();
            prop_assert_eq!(now, ships);
        }
    }

    #[test]
    fn defeat_means_no_intact_cells(seed in any::<u64>(), shots in attacks()) {
        let mut grid = fleet_grid(seed);
        for (r, c) in shots {
            let _ = grid.resolve_attack(r, c);
            let intact = snapshot(&grid).contains(&CellState::ShipIntact);
            prop_assert_eq!(grid.is_defeated(), !intact);
        }
    }

    #[test]
    fn region_marking_is_idempotent(seed in any::<u64>(), shots in attacks()) {
        let mut grid = fleet_grid(seed);
        for (r, c) in shots {
            let _ = grid.resolve_attack(r, c);
        }
        let once = grid;
        grid.mark_destroyed_regions();
        prop_assert_eq!(grid, once);
        grid.mark_destroyed_regions();
        prop_assert_eq!(grid, once);
    }

    #[test]
    fn regions_sink_exactly_when_fully_struck(seed in any::<u64>(), shots in attacks()) {
        let mut grid = fleet_grid(seed);
        for (r, c) in shots {
            let _ = grid.resolve_attack(r, c);
        }
        for region in regions(&grid.ship_map()) {
            let states: Vec<_> = region
                .iter_set_bits()
                .map(|(r, c)| grid.cell_at(r, c).unwrap())
                .collect();
            let has_intact = states.contains(&CellState::ShipIntact);
            let all_destroyed = states.iter().all(|s| *s == CellState::ShipDestroyed);
            prop_assert_eq!(all_destroyed, !has_intact);
        }
    }

    #[test]
    fn repeat_attacks_never_change_the_grid(seed in any::<u64>(), shots in attacks()) {
        let mut grid = fleet_grid(seed);
        for (r, c) in shots {
            if grid.resolve_attack(r, c).is_err() {
                continue;
            }
            let after = grid;
            prop_assert!(grid.resolve_attack(r, c).is_err());
            prop_assert_eq!(grid, after);
        }
    }
}
