//! Game rules and service defaults.

use crate::ship::ShipDef;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 8;
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("c", "Carrier", 5),
    ShipDef::new("b1", "Battleship", 4),
    ShipDef::new("b2", "Battleship", 4),
    ShipDef::new("c1", "Cruiser", 3),
    ShipDef::new("c2", "Cruiser", 3),
    ShipDef::new("c3", "Cruiser", 3),
    ShipDef::new("d1", "Destroyer", 2),
    ShipDef::new("d2", "Destroyer", 2),
];

/// Total number of cells occupied by the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 4 + 3 + 3 + 3 + 2 + 2;

/// Random origin/orientation samples tried for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Whole-board restarts before generation gives up.
pub const MAX_BOARD_ATTEMPTS: usize = 64;

/// Entries per leaderboard page unless the caller asks otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[cfg(feature = "std")]
pub use server::ServerConfig;

#[cfg(feature = "std")]
mod server {
    use std::time::Duration;

    use super::DEFAULT_PAGE_SIZE;

    /// Default timeout for a single frame read or write.
    const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(30);

    /// Largest frame accepted on the wire (1 MiB).
    const DEFAULT_MAX_FRAME: u32 = 1 << 20;

    /// Runtime settings for the leaderboard server.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        pub bind: String,
        pub page_size: usize,
        pub io_timeout: Duration,
        pub max_frame_size: u32,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "127.0.0.1:7878".to_string(),
                page_size: DEFAULT_PAGE_SIZE,
                io_timeout: DEFAULT_IO_TIMEOUT,
                max_frame_size: DEFAULT_MAX_FRAME,
            }
        }
    }
}
