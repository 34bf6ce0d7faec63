use gridstrike::{
    parse_fleet, total_segments, windows, BoardError, BoardSize, Orientation, ShipRun,
    STANDARD_FLEET,
};

#[test]
fn runs_extend_right_or_down() {
    let run = ShipRun::<10>::new(3, Orientation::Horizontal, 2, 4).unwrap();
    assert_eq!(run.cells().collect::<Vec<_>>(), vec![(2, 4), (2, 5), (2, 6)]);
    assert_eq!(run.mask().count_ones(), 3);
    assert_eq!(run.origin(), (2, 4));

    let run = ShipRun::<10>::new(2, Orientation::Vertical, 8, 0).unwrap();
    assert_eq!(run.cells().collect::<Vec<_>>(), vec![(8, 0), (9, 0)]);
    assert_eq!(run.length(), 2);
    assert_eq!(run.orientation(), Orientation::Vertical);
}

#[test]
fn runs_off_the_board_are_rejected() {
    assert_eq!(
        ShipRun::<10>::new(2, Orientation::Vertical, 9, 0),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        ShipRun::<10>::new(usize::MAX, Orientation::Horizontal, 0, 1),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        ShipRun::<10>::new(0, Orientation::Horizontal, 0, 0),
        Err(BoardError::InvalidShipLength)
    );
}

#[test]
fn window_counts_match_the_board() {
    assert_eq!(windows::<10>(5).count(), 2 * 10 * 6);
    assert_eq!(windows::<10>(1).count(), 200);
    assert_eq!(windows::<8>(8).count(), 16);
    assert_eq!(windows::<10>(11).count(), 0);
    assert_eq!(windows::<10>(0).count(), 0);
}

#[test]
fn windows_list_horizontal_before_vertical() {
    let all: Vec<_> = windows::<3>(2).map(|w| (w.orientation(), w.origin())).collect();
    assert_eq!(all[0], (Orientation::Horizontal, (0, 0)));
    assert_eq!(all[1], (Orientation::Horizontal, (0, 1)));
    assert_eq!(all[6], (Orientation::Vertical, (0, 0)));
    assert_eq!(all[7], (Orientation::Vertical, (1, 0)));
    assert_eq!(all.len(), 12);
}

#[test]
fn fleet_lists_parse() {
    assert_eq!(parse_fleet("5,3,2,2,1"), Ok(STANDARD_FLEET.to_vec()));
    assert_eq!(parse_fleet(" 4 , 4 "), Ok(vec![4, 4]));
    assert!(parse_fleet("").is_err());
    assert!(parse_fleet("3,0").is_err());
    assert!(parse_fleet("3,x").is_err());
    assert_eq!(total_segments(&STANDARD_FLEET), 13);
}

#[test]
fn board_sizes() {
    assert_eq!(BoardSize::default(), BoardSize::Standard);
    assert_eq!(BoardSize::Standard.dimension(), 10);
    assert_eq!(BoardSize::Small.dimension(), 8);
}
