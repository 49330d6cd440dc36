use seabattle::{Board, BoardError, Cell, Coordinate, Orientation, Ship, ShotOutcome};

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn ready_board(ships: &[Ship]) -> Board {
    let mut board = Board::new();
    for &ship in ships {
        board.place_ship(ship).unwrap();
    }
    board.finish_placement();
    board
}

#[test]
fn test_miss_then_already_targeted() {
    let mut board = ready_board(&[Ship::new(at(3, 3), 1, Orientation::Horizontal)]);
    assert_eq!(board.shoot(at(0, 0)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell(at(0, 0)), Some(Cell::Miss));
    assert_eq!(board.shoot(at(0, 0)).unwrap_err(), BoardError::AlreadyTargeted);
}

#[test]
fn test_single_cell_ship_sinks_and_rings() {
    let mut board = ready_board(&[Ship::new(at(2, 2), 1, Orientation::Vertical)]);
    assert_eq!(board.shoot(at(2, 2)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.sunk_count(), 1);
    assert_eq!(board.cell(at(2, 2)), Some(Cell::Hit));

    let ring = [
        (1, 1),
        (1, 2),
        (1, 3),
        (2, 1),
        (2, 3),
        (3, 1),
        (3, 2),
        (3, 3),
    ];
    for (r, c) in ring {
        assert_eq!(board.cell(at(r, c)), Some(Cell::Contour), "({r}, {c})");
        assert_eq!(board.shoot(at(r, c)).unwrap_err(), BoardError::AlreadyTargeted);
    }
    assert_eq!(board.cell(at(0, 0)), Some(Cell::Empty));
}

#[test]
fn test_ring_keeps_earlier_misses() {
    let mut board = ready_board(&[Ship::new(at(2, 2), 1, Orientation::Vertical)]);
    assert_eq!(board.shoot(at(1, 1)).unwrap(), ShotOutcome::Miss);
    board.shoot(at(2, 2)).unwrap();
    assert_eq!(board.cell(at(1, 1)), Some(Cell::Miss));
    assert_eq!(board.cell(at(1, 2)), Some(Cell::Contour));
}

#[test]
fn test_ring_clipped_at_corner() {
    let mut board = ready_board(&[Ship::new(at(0, 0), 2, Orientation::Horizontal)]);
    assert_eq!(board.shoot(at(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.shoot(at(0, 1)).unwrap(), ShotOutcome::Sunk);
    let contour = board
        .rows()
        .flatten()
        .filter(|&&c| c == Cell::Contour)
        .count();
    // (0,2), (1,0), (1,1), (1,2)
    assert_eq!(contour, 4);
}

#[test]
fn test_hits_count_down_lives() {
    let mut board = ready_board(&[Ship::new(at(1, 0), 3, Orientation::Vertical)]);
    assert_eq!(board.shoot(at(2, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.ships()[0].lives(), 2);
    assert_eq!(board.shoot(at(1, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.sunk_count(), 0);
    assert_eq!(board.shoot(at(3, 0)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.ships()[0].lives(), 0);
    assert!(board.ships()[0].is_sunk());
    assert_eq!(board.sunk_count(), 1);
}

#[test]
fn test_shots_off_the_board() {
    let mut board = ready_board(&[]);
    for coord in [at(-1, 0), at(0, -1), at(6, 0), at(0, 6), at(i32::MAX, 2)] {
        assert!(board.is_out_of_bounds(coord));
        assert_eq!(board.shoot(coord).unwrap_err(), BoardError::OutOfBounds);
    }
    assert!(board.excluded().is_empty());
}

#[test]
fn test_placement_rejects_overlap_and_contact() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(at(2, 2), 2, Orientation::Horizontal))
        .unwrap();

    let bad = [
        Ship::new(at(2, 3), 1, Orientation::Horizontal),
        Ship::new(at(3, 4), 2, Orientation::Vertical),
        Ship::new(at(1, 1), 1, Orientation::Vertical),
        Ship::new(at(0, 4), 3, Orientation::Vertical),
        Ship::new(at(5, 4), 3, Orientation::Horizontal),
        Ship::new(at(-1, 0), 1, Orientation::Horizontal),
    ];
    for ship in bad {
        let before = board.clone();
        assert_eq!(board.place_ship(ship), Err(BoardError::InvalidPlacement), "{ship:?}");
        assert_eq!(board, before);
    }

    board
        .place_ship(Ship::new(at(0, 5), 3, Orientation::Vertical))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_placement_marks_ship_cells_and_margin() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(at(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.cell(at(0, 0)), Some(Cell::Ship));
    // margin is excluded but not painted
    assert!(board.is_excluded(at(1, 1)));
    assert_eq!(board.cell(at(1, 1)), Some(Cell::Empty));
    assert_eq!(board.excluded().len(), 4);
}

#[test]
fn test_finish_placement_frees_margins() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(at(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    assert!(board.is_placing());
    board.finish_placement();
    assert!(!board.is_placing());
    assert!(board.excluded().is_empty());
    // next to a live ship, still a legal shot
    assert_eq!(board.shoot(at(2, 3)).unwrap(), ShotOutcome::Miss);
}

#[test]
fn test_finish_placement_only_once() {
    let mut board = ready_board(&[Ship::new(at(2, 2), 1, Orientation::Horizontal)]);
    board.shoot(at(0, 0)).unwrap();
    board.finish_placement();
    assert_eq!(board.shoot(at(0, 0)).unwrap_err(), BoardError::AlreadyTargeted);
}

#[test]
fn test_ship_cells_mask() {
    let board = ready_board(&[
        Ship::new(at(0, 0), 3, Orientation::Horizontal),
        Ship::new(at(2, 0), 2, Orientation::Vertical),
    ]);
    let mask = board.ship_cells();
    assert_eq!(mask.len(), 5);
    assert!(mask.contains(at(0, 2)));
    assert!(mask.contains(at(3, 0)));
    assert!(!mask.contains(at(1, 0)));
}
