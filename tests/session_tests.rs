#![cfg(feature = "std")]

use bttlship::{
    format_time, Board, BoardError, Coord, GameSession, GameStatus, Orientation, Placement,
    ScoreCard,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn destroyer_only() -> Board {
    let mut board = Board::new();
    let placement = Placement::new(Coord::new(3, 3).unwrap(), Orientation::Vertical, 2).unwrap();
    board.place(6, placement).unwrap();
    board
}

#[test]
fn test_score_card_accuracy_rounds() {
    assert_eq!(ScoreCard::default().accuracy(), 0);
    assert_eq!(ScoreCard { hits: 1, misses: 2 }.accuracy(), 33);
    assert_eq!(ScoreCard { hits: 2, misses: 1 }.accuracy(), 67);
    assert_eq!(ScoreCard { hits: 26, misses: 0 }.accuracy(), 100);
}

#[test]
fn test_session_tallies_first_time_shots_only() {
    let mut session = GameSession::new(destroyer_only());
    session.fire(Coord::new(0, 0).unwrap()).unwrap();
    session.fire(Coord::new(0, 0).unwrap()).unwrap();
    session.fire(Coord::new(3, 3).unwrap()).unwrap();
    session.fire(Coord::new(3, 3).unwrap()).unwrap();

    let card = session.score_card();
    assert_eq!(card, ScoreCard { hits: 1, misses: 1 });
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.final_score().is_none());
}

#[test]
fn test_full_game_against_generated_board() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut session = GameSession::start(&mut rng).unwrap();
    let targets: Vec<Coord> = session
        .board()
        .occupancy()
        .iter_set_bits()
        .map(|(r, c)| Coord::new(r, c).unwrap())
        .collect();

    for (i, coord) in targets.iter().enumerate() {
        assert_eq!(session.status(), GameStatus::InProgress, "ended early at shot {}", i);
        assert!(session.fire(*coord).unwrap().hit);
    }

    assert_eq!(session.status(), GameStatus::Won);
    let score = session.final_score().unwrap();
    assert_eq!(score.accuracy, 100.0);
    assert_eq!(
        session.fire(Coord::new(0, 0).unwrap()).unwrap_err(),
        BoardError::GameOver
    );
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(0), "0:00.00");
    assert_eq!(format_time(1_234), "0:01.23");
    assert_eq!(format_time(75_990), "1:15.99");
    assert_eq!(format_time(600_000), "10:00.00");
}
