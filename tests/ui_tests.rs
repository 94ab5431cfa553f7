#![cfg(feature = "std")]

use bttlship::ui::{parse_coord, render_board, render_fleet};
use bttlship::{attack, Board, Coord, Orientation, Placement};

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A1").unwrap(), Coord { row: 0, col: 0 });
    assert_eq!(parse_coord(" b7 ").unwrap(), Coord { row: 6, col: 1 });
    assert_eq!(parse_coord("J10").unwrap(), Coord { row: 9, col: 9 });

    assert!(parse_coord("").is_err());
    assert!(parse_coord("K1").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("A11").is_err());
    assert!(parse_coord("7B").is_err());
    assert!(parse_coord("Bx").is_err());
}

#[test]
fn test_coord_display_matches_input() {
    let coord = Coord::new(4, 2).unwrap();
    assert_eq!(coord.to_string(), "C5");
    assert_eq!(parse_coord(&coord.to_string()).unwrap(), coord);
}

#[test]
fn test_display_of_off_grid_coord() {
    assert_eq!(Coord { row: 0, col: 250 }.to_string(), "(0, 250)");
    assert_eq!(Coord { row: usize::MAX, col: 0 }.to_string(), format!("A{}", usize::MAX));
    assert_eq!(Coord { row: 2, col: 25 }.to_string(), "Z3");
}

#[test]
fn test_render_hides_ships_until_revealed() {
    let mut board = Board::new();
    let origin = Coord::new(0, 0).unwrap();
    board
        .place(7, Placement::new(origin, Orientation::Horizontal, 2).unwrap())
        .unwrap();
    let (_, board) = attack(&board, origin).unwrap();
    let (_, board) = attack(&board, Coord::new(5, 5).unwrap()).unwrap();

    let hidden = render_board(&board, false);
    assert!(hidden.contains('X'));
    assert!(hidden.contains('o'));
    assert!(!hidden.contains('S'));

    let revealed = render_board(&board, true);
    assert_eq!(revealed.matches('S').count(), 1);
    assert_eq!(revealed.lines().count(), 11);

    let fleet = render_fleet(&board);
    assert_eq!(fleet.lines().count(), 8);
    assert!(fleet.contains("1/2 hit"));
}
