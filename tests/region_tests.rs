use gridstrike::region::{regions, sunk_cells};
use gridstrike::BitBoard;

type BB = BitBoard<u128, 10>;

fn board(cells: &[(usize, usize)]) -> BB {
    BB::from_iter(cells.iter().copied()).unwrap()
}

#[test]
fn empty_board_has_no_regions() {
    assert!(regions(&BB::new()).is_empty());
}

#[test]
fn separate_runs_are_separate_regions() {
    let ships = board(&[(0, 0), (0, 1), (0, 2), (5, 5), (6, 5), (9, 9)]);
    let found = regions(&ships);
    assert_eq!(found.len(), 3);
    assert_eq!(found[0], board(&[(0, 0), (0, 1), (0, 2)]));
    assert_eq!(found[1], board(&[(5, 5), (6, 5)]));
    assert_eq!(found[2], board(&[(9, 9)]));
}

#[test]
fn diagonal_contact_does_not_join_regions() {
    let ships = board(&[(0, 0), (1, 1)]);
    assert_eq!(regions(&ships).len(), 2);
}

#[test]
fn orthogonal_contact_joins_regions() {
    // an L plus a parallel run touching it
    let ships = board(&[(2, 2), (3, 2), (4, 2), (4, 3), (4, 4), (5, 4), (5, 5)]);
    let found = regions(&ships);
    assert_eq!(found, vec![ships]);
}

#[test]
fn region_covering_the_whole_board() {
    let all = !BB::new();
    let found = regions(&all);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].count_ones(), 100);
}

#[test]
fn only_fully_struck_regions_sink() {
    let ships = board(&[(0, 0), (0, 1), (3, 3), (3, 4), (3, 5)]);
    let struck = board(&[(0, 0), (0, 1), (3, 3), (3, 4)]);
    assert_eq!(sunk_cells(&ships, &struck), board(&[(0, 0), (0, 1)]));

    let struck = struck | board(&[(3, 5)]);
    assert_eq!(sunk_cells(&ships, &struck), ships);
}

#[test]
fn nothing_struck_nothing_sunk() {
    let ships = board(&[(1, 1), (1, 2)]);
    assert!(sunk_cells(&ships, &BB::new()).is_empty());
}

#[test]
fn regions_reach_the_last_cell_of_the_largest_board() {
    let all = !BitBoard::<u128, 11>::new();
    let found = regions(&all);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].count_ones(), 121);
    assert!(found[0].get(10, 10).unwrap());

    let corners = BitBoard::<u128, 11>::from_iter([(0, 0), (10, 10)]).unwrap();
    assert_eq!(regions(&corners).len(), 2);
}
