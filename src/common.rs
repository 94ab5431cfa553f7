//! Common types for the board model: coordinates, cells, attack outcomes
//! and board errors.

use core::fmt;
use thiserror::Error;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// A cell position on the grid. `row` selects the line, `col` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Build a coordinate, rejecting anything outside the 10×10 grid.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Chebyshev distance: 1 means touching, including diagonally.
    pub fn distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fields are public, so out-of-grid values can reach here.
        match u8::try_from(self.col).ok().filter(|c| *c < 26) {
            Some(c) => write!(f, "{}{}", (b'A' + c) as char, self.row.saturating_add(1)),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// State of a single grid cell.
///
/// `Ship` carries the code of the ship instance occupying the cell. `Hit`
/// and `Miss` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship(&'static str),
    Hit,
    Miss,
}

impl Cell {
    /// True once the cell has been attacked.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Result of attacking one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct AttackOutcome {
    pub hit: bool,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "core::ops::Not::not"))]
    pub already_attacked: bool,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub destroyed: Option<bool>,
    #[cfg_attr(feature = "std", serde(skip_serializing_if = "Option::is_none"))]
    pub ship_name: Option<&'static str>,
}

impl AttackOutcome {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn already_attacked() -> Self {
        Self {
            already_attacked: true,
            ..Self::default()
        }
    }

    pub fn hit(destroyed: bool, ship_name: &'static str) -> Self {
        Self {
            hit: true,
            already_attacked: false,
            destroyed: Some(destroyed),
            ship_name: Some(ship_name),
        }
    }
}

/// Current status of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Errors returned by board generation and attack resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Underlying bitboard error.
    #[error("bitboard error: {0}")]
    BitBoard(#[from] BitBoardError),
    /// Coordinate outside the 10×10 grid.
    #[error("coordinate out of bounds: row={row}, col={col}")]
    OutOfBounds { row: usize, col: usize },
    /// Fleet index is out of range.
    #[error("ship index is out of range")]
    InvalidIndex,
    /// Ship has already been placed on this board.
    #[error("ship is already placed on the board")]
    ShipAlreadyPlaced,
    /// Ship run would leave the grid.
    #[error("ship placement is out of bounds")]
    ShipOutOfBounds,
    /// Ship would overlap or touch an already placed ship.
    #[error("ship placement touches another ship")]
    ShipTouches,
    /// A grid cell names a ship code that is not in the fleet.
    #[error("unknown ship code {0:?}")]
    UnknownShip(&'static str),
    /// No valid board was produced within the attempt ceiling.
    #[error("unable to generate a board after {0} attempts")]
    GenerationFailed(usize),
    /// The fleet is already destroyed.
    #[error("game is already over")]
    GameOver,
}
