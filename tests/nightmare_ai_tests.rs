use std::collections::HashSet;

use gridstrike::{
    adjacent_target, best_target, density_map, normalize, AttackResult, BoardError, Grid,
    Knowledge, KnowledgeGrid, NightmareAi, Orientation, STANDARD_FLEET,
};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn centre_outweighs_corner_on_an_empty_board() {
    let knowledge = KnowledgeGrid::<10>::new();
    let density = density_map(&knowledge, &STANDARD_FLEET);
    assert!(density[5][5] > density[0][0]);
    assert_eq!(density[0][0], 10);
    assert_eq!(density[5][5], 26);
}

#[test]
fn misses_block_windows_through_them() {
    let mut knowledge = KnowledgeGrid::<10>::new();
    knowledge.record(0, 1, AttackResult::Miss).unwrap();
    let density = density_map(&knowledge, &STANDARD_FLEET);
    // only the single-cell horizontal window survives along row 0
    assert_eq!(density[0][0], 6);
    assert_eq!(density[0][1], 0);
}

#[test]
fn hits_do_not_block_windows() {
    let mut knowledge = KnowledgeGrid::<10>::new();
    knowledge.record(0, 1, AttackResult::Hit).unwrap();
    let density = density_map(&knowledge, &STANDARD_FLEET);
    assert_eq!(density, density_map(&KnowledgeGrid::<10>::new(), &STANDARD_FLEET));
}

#[test]
fn first_shot_is_the_first_densest_cell() {
    let ai = NightmareAi::<10>::new(&STANDARD_FLEET);
    assert_eq!(ai.next_target(), Some((4, 4)));
}

#[test]
fn adjacency_prefers_up_then_down_left_right() {
    let mut knowledge = KnowledgeGrid::<10>::new();
    knowledge.record(3, 3, AttackResult::Hit).unwrap();
    assert_eq!(adjacent_target(&knowledge), Some((2, 3)));

    knowledge.record(2, 3, AttackResult::Miss).unwrap();
    assert_eq!(adjacent_target(&knowledge), Some((4, 3)));

    knowledge.record(4, 3, AttackResult::Miss).unwrap();
    knowledge.record(3, 2, AttackResult::Miss).unwrap();
    assert_eq!(adjacent_target(&knowledge), Some((3, 4)));

    knowledge.record(3, 4, AttackResult::Miss).unwrap();
    assert_eq!(adjacent_target(&knowledge), None);
}

#[test]
fn adjacency_scans_hits_in_row_major_order() {
    let mut knowledge = KnowledgeGrid::<10>::new();
    knowledge.record(6, 0, AttackResult::Hit).unwrap();
    knowledge.record(0, 0, AttackResult::Hit).unwrap();
    // (0, 0) comes first and has no cell above it
    assert_eq!(adjacent_target(&knowledge), Some((1, 0)));
}

#[test]
fn best_target_ignores_known_cells() {
    let mut knowledge = KnowledgeGrid::<10>::new();
    knowledge.record(4, 4, AttackResult::Miss).unwrap();
    let density = density_map(&knowledge, &STANDARD_FLEET);
    let (r, c) = best_target(&knowledge, &density).unwrap();
    assert_eq!(knowledge.cell(r, c), Ok(Knowledge::Unknown));
}

#[test]
fn ties_fall_back_to_row_major_order() {
    let knowledge = KnowledgeGrid::<4>::new();
    let flat = [[7u32; 4]; 4];
    assert_eq!(best_target(&knowledge, &flat), Some((0, 0)));
}

#[test]
fn normalized_density_sums_to_one_over_unknown_cells() {
    let mut knowledge = KnowledgeGrid::<8>::new();
    knowledge.record(0, 0, AttackResult::Miss).unwrap();
    knowledge.record(3, 3, AttackResult::Hit).unwrap();
    let density = density_map(&knowledge, &STANDARD_FLEET);
    let pdf = normalize(&knowledge, &density);

    let total: f64 = pdf.iter().flatten().sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(pdf[0][0], 0.0);
    assert_eq!(pdf[3][3], 0.0);
}

#[test]
fn zero_mass_normalizes_to_uniform() {
    let knowledge = KnowledgeGrid::<4>::new();
    let pdf = normalize(&knowledge, &[[0u32; 4]; 4]);
    assert!(pdf.iter().flatten().all(|&p| (p - 1.0 / 16.0).abs() < 1e-12));
}

#[test]
fn attacks_are_recorded_in_knowledge() {
    let mut grid = Grid::<10>::new();
    grid.place_ship(2, Orientation::Horizontal, 4, 4).unwrap();
    let mut ai = NightmareAi::<10>::new(&STANDARD_FLEET);

    let shot = ai.select_and_attack(&mut grid).unwrap();
    assert_eq!(shot.coord, (4, 4));
    assert_eq!(shot.result, AttackResult::Hit);
    assert_eq!(ai.knowledge().cell(4, 4), Ok(Knowledge::Hit));

    // chases the hit: up first
    let shot = ai.select_and_attack(&mut grid).unwrap();
    assert_eq!(shot.coord, (3, 4));
    assert_eq!(ai.knowledge().cell(3, 4), Ok(Knowledge::Miss));
    assert_eq!(ai.knowledge().unknown_count(), 98);
}

#[test]
fn runs_out_of_targets_on_a_known_grid() {
    let mut grid = Grid::<2>::new();
    let mut ai = NightmareAi::<2>::new(&[1]);
    for _ in 0..4 {
        ai.select_and_attack(&mut grid).unwrap();
    }
    assert_eq!(ai.next_target(), None);
    assert_eq!(
        ai.select_and_attack(&mut grid),
        Err(BoardError::NoTargetsRemaining)
    );
}

#[test]
fn sinks_a_full_fleet_without_repeating_a_cell() {
    for seed in 0..16 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::<10>::new();
        assert!(grid.place_ships_random(&STANDARD_FLEET, &mut rng).is_complete());

        let mut ai = NightmareAi::<10>::new(&STANDARD_FLEET);
        let mut seen = HashSet::new();
        while !grid.is_defeated() {
            let shot = ai.select_and_attack(&mut grid).unwrap();
            assert!(seen.insert(shot.coord));
        }
        assert!(seen.len() <= 100);
        assert_eq!(ai.knowledge().hits(), grid.struck());
    }
}

#[test]
fn largest_board_that_fits_in_the_bitboard() {
    // 11x11 = 121 cells, the biggest square that fits in a u128
    let mut knowledge = KnowledgeGrid::<11>::new();
    knowledge.record(10, 10, AttackResult::Miss).unwrap();
    assert_eq!(knowledge.cell(10, 10), Ok(Knowledge::Miss));
    assert_eq!(knowledge.unknown_count(), 120);

    let density = density_map(&knowledge, &STANDARD_FLEET);
    assert_eq!(density[10][10], 0);
    assert!(density[5][5] > density[0][0]);

    let ai = NightmareAi::<11>::new(&STANDARD_FLEET);
    assert_eq!(ai.next_target(), Some((4, 4)));
}
