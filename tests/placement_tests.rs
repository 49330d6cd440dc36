use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{random_board, try_board, try_board_within, Board, BoardError, FLEET, FLEET_CELLS};

fn assert_valid_fleet(board: &Board) {
    let lengths: Vec<_> = board.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, FLEET.to_vec());
    assert_eq!(board.ship_cells().len(), FLEET_CELLS);
    assert!(!board.is_placing());
    assert!(board.excluded().is_empty());
    assert_eq!(board.sunk_count(), 0);
    for ship in board.ships() {
        for cell in ship.cells() {
            assert!(!board.is_out_of_bounds(cell));
        }
        for other in board.ships().iter().filter(|o| *o != ship) {
            for a in ship.cells() {
                for b in other.cells() {
                    assert!((a.row - b.row).abs() > 1 || (a.col - b.col).abs() > 1);
                }
            }
        }
    }
}

#[test]
fn test_random_board_always_produces_a_fleet() {
    for seed in 0..1000 {
        let mut rng = SmallRng::seed_from_u64(seed);
        assert_valid_fleet(&random_board(&mut rng));
    }
}

#[test]
fn test_try_board_success_is_complete() {
    let mut produced = 0;
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        match try_board(&mut rng) {
            Ok(board) => {
                assert_valid_fleet(&board);
                produced += 1;
            }
            Err(e) => assert!(matches!(e, BoardError::PlacementExhausted { .. })),
        }
    }
    assert!(produced > 0);
}

#[test]
fn test_same_seed_same_board() {
    let a = random_board(&mut SmallRng::seed_from_u64(42));
    let b = random_board(&mut SmallRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_exhaustion_message() {
    let err = BoardError::PlacementExhausted { attempts: 2000 };
    assert_eq!(
        err.to_string(),
        "gave up placing the fleet after 2000 attempts"
    );
}

#[test]
fn test_exhaustion_reports_attempts_spent() {
    // seven ships need at least seven drops
    for limit in [0, 1, 3, 6] {
        let mut rng = SmallRng::seed_from_u64(9);
        assert_eq!(
            try_board_within(&mut rng, limit).unwrap_err(),
            BoardError::PlacementExhausted { attempts: limit }
        );
    }
}

#[test]
fn test_generous_budget_matches_default() {
    let a = try_board(&mut SmallRng::seed_from_u64(3));
    let b = try_board_within(&mut SmallRng::seed_from_u64(3), seabattle::PLACEMENT_ATTEMPT_LIMIT);
    assert_eq!(a, b);
}
