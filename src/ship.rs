//! Ship definitions, hit tracking and placement runs.

use crate::common::{BoardError, Coord};
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Catalog entry: unique code, display name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipDef {
    code: &'static str,
    name: &'static str,
    length: usize,
}

impl ShipDef {
    /// Create a new ship definition.
    pub const fn new(code: &'static str, name: &'static str, length: usize) -> Self {
        Self { code, name, length }
    }

    /// Code stamped into every grid cell this ship occupies.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Ship's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// One ship instance of the fleet and how many of its cells have been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    def: ShipDef,
    hits: usize,
}

impl Ship {
    /// A fresh, undamaged ship.
    pub fn new(def: ShipDef) -> Self {
        Self { def, hits: 0 }
    }

    pub fn code(&self) -> &'static str {
        self.def.code()
    }

    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    pub fn length(&self) -> usize {
        self.def.length()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// The ship after taking one more hit. Hit count never exceeds length.
    pub fn hit(self) -> Self {
        Self {
            def: self.def,
            hits: (self.hits + 1).min(self.def.length()),
        }
    }

    /// Every cell of the ship has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.hits >= self.def.length()
    }
}

/// A run of `length` cells starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Placement {
    origin: Coord,
    orientation: Orientation,
    length: usize,
}

impl Placement {
    /// Build a placement, rejecting runs that would leave the grid.
    pub fn new(origin: Coord, orientation: Orientation, length: usize) -> Result<Self, BoardError> {
        let end = match orientation {
            Orientation::Horizontal => origin.col + length,
            Orientation::Vertical => origin.row + length,
        };
        if length == 0 || end > BOARD_SIZE as usize {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Self {
            origin,
            orientation,
            length,
        })
    }

    /// Cells covered by the run, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord {
                row: self.origin.row,
                col: self.origin.col + i,
            },
            Orientation::Vertical => Coord {
                row: self.origin.row + i,
                col: self.origin.col,
            },
        })
    }
}
