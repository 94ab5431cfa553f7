use bttlship::{
    Board, BoardError, Cell, Coord, Orientation, Placement, FLEET, MAX_BOARD_ATTEMPTS, NUM_SHIPS,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Always yields zero: every sample is a vertical run at the top-left corner.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

fn at(row: usize, col: usize, orientation: Orientation, length: usize) -> Placement {
    Placement::new(Coord::new(row, col).unwrap(), orientation, length).unwrap()
}

#[test]
fn test_catalog_composition() {
    let lengths: Vec<_> = FLEET.iter().map(|d| d.length()).collect();
    assert_eq!(lengths, vec![5, 4, 4, 3, 3, 3, 2, 2]);
    assert_eq!(lengths.iter().sum::<usize>(), TOTAL_SHIP_CELLS);

    let mut codes: Vec<_> = FLEET.iter().map(|d| d.code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), NUM_SHIPS, "ship codes must be unique");
}

#[test]
fn test_manual_place_stamps_code() {
    let mut board = Board::new();
    board.place(0, at(2, 3, Orientation::Horizontal, 5)).unwrap();

    for col in 3..8 {
        assert_eq!(board.cell(Coord::new(2, col).unwrap()).unwrap(), Cell::Ship("c"));
    }
    assert_eq!(board.cell(Coord::new(2, 8).unwrap()).unwrap(), Cell::Empty);
    assert_eq!(board.occupancy().count_ones(), 5);
}

#[test]
fn test_place_rejects_touching_ships() {
    let mut board = Board::new();
    board.place(0, at(0, 0, Orientation::Horizontal, 5)).unwrap();

    // overlapping
    assert_eq!(
        board.place(1, at(0, 2, Orientation::Vertical, 4)).unwrap_err(),
        BoardError::ShipTouches
    );
    // orthogonally adjacent
    assert_eq!(
        board.place(1, at(1, 0, Orientation::Horizontal, 4)).unwrap_err(),
        BoardError::ShipTouches
    );
    // diagonally adjacent
    assert_eq!(
        board.place(6, at(1, 5, Orientation::Vertical, 2)).unwrap_err(),
        BoardError::ShipTouches
    );
    // one empty cell of separation is fine
    board.place(1, at(2, 0, Orientation::Horizontal, 4)).unwrap();
}

#[test]
fn test_place_twice_and_bad_index() {
    let mut board = Board::new();
    board.place(7, at(9, 8, Orientation::Horizontal, 2)).unwrap();
    assert_eq!(
        board.place(7, at(0, 0, Orientation::Horizontal, 2)).unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
    assert_eq!(
        board.place(NUM_SHIPS, at(0, 0, Orientation::Horizontal, 2)).unwrap_err(),
        BoardError::InvalidIndex
    );
}

#[test]
fn test_placement_out_of_bounds() {
    let origin = Coord::new(0, 7).unwrap();
    assert_eq!(
        Placement::new(origin, Orientation::Horizontal, 4).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert!(Placement::new(origin, Orientation::Vertical, 4).is_ok());
    assert_eq!(
        Coord::new(10, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 10, col: 0 }
    );
}

#[test]
fn test_generate_places_whole_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::generate(&mut rng).unwrap();

    assert_eq!(board.occupancy().count_ones(), TOTAL_SHIP_CELLS);
    assert!(board.fleet().iter().all(|s| s.hits() == 0));
    assert!(!board.all_destroyed());

    for (index, def) in FLEET.iter().enumerate() {
        let mask = board.ship_mask(index).unwrap();
        assert_eq!(mask.count_ones(), def.length());
        for (r, c) in mask.iter_set_bits() {
            assert_eq!(board.grid()[r][c], Cell::Ship(def.code()));
        }
    }
}

#[test]
fn test_generate_is_reproducible() {
    let a = Board::generate(&mut SmallRng::seed_from_u64(7)).unwrap();
    let b = Board::generate(&mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_placement_gives_up_when_crowded() {
    let mut board = Board::new();
    board.place(0, at(0, 0, Orientation::Vertical, 5)).unwrap();

    let err = board.random_placement(&mut ZeroRng, 1).unwrap_err();
    assert_eq!(err, BoardError::ShipTouches);
}

#[test]
fn test_generate_stops_after_board_attempts() {
    let err = Board::generate(&mut ZeroRng).unwrap_err();
    assert_eq!(err, BoardError::GenerationFailed(MAX_BOARD_ATTEMPTS));
}
