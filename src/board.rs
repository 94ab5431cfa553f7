//! Board state and randomized fleet placement.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Coord};
use crate::config::{BOARD_SIZE, FLEET, MAX_BOARD_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS};
use crate::ship::{Orientation, Placement, Ship};
use rand::Rng;

pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// The 10×10 cell matrix, indexed `[row][col]`.
pub type Grid = [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// The ships of one game, in catalog order.
pub type Fleet = [Ship; NUM_SHIPS];

/// A generated board: the grid, the fleet's hit counts and the cells each
/// ship originally occupied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    fleet: Fleet,
    ship_masks: [BB; NUM_SHIPS],
}

impl Board {
    /// Create an empty board: no ships placed, fleet undamaged.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            fleet: FLEET.map(Ship::new),
            ship_masks: [BB::new(); NUM_SHIPS],
        }
    }

    /// Generate a full board with every catalog ship placed at random.
    ///
    /// A ship that cannot be placed within `MAX_PLACEMENT_ATTEMPTS` samples
    /// discards the whole board and starts over; after `MAX_BOARD_ATTEMPTS`
    /// restarts this gives up with [`BoardError::GenerationFailed`].
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        for attempt in 1..=MAX_BOARD_ATTEMPTS {
            match Self::try_generate(rng) {
                Ok(board) => {
                    #[cfg(feature = "std")]
                    log::debug!("board generated after {} attempt(s)", attempt);
                    return Ok(board);
                }
                Err(BoardError::ShipTouches) => {
                    #[cfg(feature = "std")]
                    log::debug!("board attempt {} ran out of room, restarting", attempt);
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::GenerationFailed(MAX_BOARD_ATTEMPTS))
    }

    /// One pass over the catalog on a fresh board.
    fn try_generate<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for index in 0..NUM_SHIPS {
            let placement = board.random_placement(rng, index)?;
            board.place(index, placement)?;
        }
        Ok(board)
    }

    /// Sample placements for ship `index` until one is valid on this board.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        index: usize,
    ) -> Result<Placement, BoardError> {
        let length = self.fleet.get(index).ok_or(BoardError::InvalidIndex)?.length();
        let forbidden = self.occupancy().halo();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE as usize - 1, BOARD_SIZE as usize - length),
                Orientation::Vertical => (BOARD_SIZE as usize - length, BOARD_SIZE as usize - 1),
            };
            let origin = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c))?;
            let placement = Placement::new(origin, orientation, length)?;
            if !Self::mask_of(&placement)?.intersects(&forbidden) {
                return Ok(placement);
            }
        }
        Err(BoardError::ShipTouches)
    }

    /// Whether `placement` is clear of every placed ship and its neighbours.
    pub fn can_place(&self, placement: &Placement) -> Result<bool, BoardError> {
        let mask = Self::mask_of(placement)?;
        Ok(!mask.intersects(&self.occupancy().halo()))
    }

    /// Stamp ship `index` onto the grid at `placement`.
    pub fn place(&mut self, index: usize, placement: Placement) -> Result<(), BoardError> {
        let code = self.fleet.get(index).ok_or(BoardError::InvalidIndex)?.code();
        if !self.ship_masks[index].is_empty() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if !self.can_place(&placement)? {
            return Err(BoardError::ShipTouches);
        }
        for cell in placement.cells() {
            self.grid[cell.row][cell.col] = Cell::Ship(code);
        }
        self.ship_masks[index] = Self::mask_of(&placement)?;
        Ok(())
    }

    fn mask_of(placement: &Placement) -> Result<BB, BoardError> {
        Ok(BB::from_cells(placement.cells().map(|c| (c.row, c.col)))?)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// State of one cell; rejects coordinates outside the grid.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        let coord = Coord::new(coord.row, coord.col)?;
        Ok(self.grid[coord.row][coord.col])
    }

    /// Fleet index of the ship carrying `code`.
    pub fn ship_index(&self, code: &str) -> Option<usize> {
        self.fleet.iter().position(|s| s.code() == code)
    }

    /// Cells ship `index` was placed on, regardless of later hits.
    pub fn ship_mask(&self, index: usize) -> Option<BB> {
        self.ship_masks.get(index).copied()
    }

    /// Every cell any ship was placed on.
    pub fn occupancy(&self) -> BB {
        self.ship_masks.iter().fold(BB::new(), |acc, m| acc | *m)
    }

    /// True when every ship's hit count has reached its length.
    pub fn all_destroyed(&self) -> bool {
        self.fleet.iter().all(Ship::is_destroyed)
    }

    pub(crate) fn with_cell(mut self, coord: Coord, cell: Cell) -> Self {
        self.grid[coord.row][coord.col] = cell;
        self
    }

    pub(crate) fn with_ship(mut self, index: usize, ship: Ship) -> Self {
        self.fleet[index] = ship;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
