//! Attack resolution and the single-player game session.

use crate::board::Board;
use crate::common::{AttackOutcome, BoardError, Cell, Coord, GameStatus};

/// Resolve one attack against `board`, returning the outcome and the board
/// after the attack. The input board is left untouched.
///
/// Attacking a cell that is already `Hit` or `Miss` reports
/// `already_attacked` and returns an identical board.
pub fn attack(board: &Board, coord: Coord) -> Result<(AttackOutcome, Board), BoardError> {
    let cell = board.cell(coord)?;
    if cell.is_resolved() {
        return Ok((AttackOutcome::already_attacked(), board.clone()));
    }
    match cell {
        Cell::Ship(code) => {
            let index = board.ship_index(code).ok_or(BoardError::UnknownShip(code))?;
            let ship = board.fleet()[index].hit();
            let next = board
                .clone()
                .with_ship(index, ship)
                .with_cell(coord, Cell::Hit);
            Ok((AttackOutcome::hit(ship.is_destroyed(), ship.name()), next))
        }
        _ => Ok((AttackOutcome::miss(), board.clone().with_cell(coord, Cell::Miss))),
    }
}

/// Hits and misses of first-time attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ScoreCard {
    pub hits: u32,
    pub misses: u32,
}

impl ScoreCard {
    pub fn shots(&self) -> u32 {
        self.hits + self.misses
    }

    /// Percentage of shots that hit, rounded to the nearest integer.
    pub fn accuracy(&self) -> u32 {
        let shots = self.shots();
        if shots == 0 {
            return 0;
        }
        (self.hits * 100 + shots / 2) / shots
    }

    fn record(self, outcome: &AttackOutcome) -> Self {
        if outcome.already_attacked {
            self
        } else if outcome.hit {
            Self {
                hits: self.hits + 1,
                ..self
            }
        } else {
            Self {
                misses: self.misses + 1,
                ..self
            }
        }
    }
}

#[cfg(feature = "std")]
pub use session::{format_time, FinalScore, GameSession};

#[cfg(feature = "std")]
mod session {
    use std::time::{Duration, Instant};

    use rand::Rng;

    use super::{attack, ScoreCard};
    use crate::board::Board;
    use crate::common::{AttackOutcome, BoardError, Coord, GameStatus};

    /// Score reported to the leaderboard once the fleet is destroyed.
    #[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
    pub struct FinalScore {
        pub time_ms: u64,
        pub accuracy: f64,
    }

    /// One game: the board, the running tally and the clock.
    #[derive(Debug, Clone)]
    pub struct GameSession {
        board: Board,
        card: ScoreCard,
        started: Instant,
        finished: Option<Instant>,
    }

    impl GameSession {
        /// Start the clock on an already generated board.
        pub fn new(board: Board) -> Self {
            Self {
                board,
                card: ScoreCard::default(),
                started: Instant::now(),
                finished: None,
            }
        }

        /// Generate a fresh board and start the clock.
        pub fn start<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
            Ok(Self::new(Board::generate(rng)?))
        }

        pub fn board(&self) -> &Board {
            &self.board
        }

        pub fn score_card(&self) -> ScoreCard {
            self.card
        }

        /// Fire at `coord`. Repeat shots do not count towards the tally.
        pub fn fire(&mut self, coord: Coord) -> Result<AttackOutcome, BoardError> {
            if self.finished.is_some() {
                return Err(BoardError::GameOver);
            }
            let (outcome, next) = attack(&self.board, coord)?;
            self.board = next;
            self.card = self.card.record(&outcome);
            if outcome.hit && self.board.all_destroyed() {
                self.finished = Some(Instant::now());
                log::info!(
                    "fleet destroyed after {} shots ({}% accuracy)",
                    self.card.shots(),
                    self.card.accuracy()
                );
            }
            Ok(outcome)
        }

        pub fn status(&self) -> GameStatus {
            GameStatus::of(&self.board)
        }

        /// Time on the clock: frozen once the game is won.
        pub fn elapsed(&self) -> Duration {
            self.finished
                .unwrap_or_else(Instant::now)
                .saturating_duration_since(self.started)
        }

        /// Final time and accuracy, available only after a win.
        pub fn final_score(&self) -> Option<FinalScore> {
            self.finished?;
            Some(FinalScore {
                time_ms: self.elapsed().as_millis() as u64,
                accuracy: f64::from(self.card.accuracy()),
            })
        }
    }

    /// Render milliseconds as `m:ss.cc`.
    pub fn format_time(ms: u64) -> String {
        let total_secs = ms / 1000;
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        let centis = (ms % 1000) / 10;
        format!("{}:{:02}.{:02}", mins, secs, centis)
    }
}

impl GameStatus {
    /// Status of a bare board, without a session around it.
    pub fn of(board: &Board) -> Self {
        if board.all_destroyed() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
