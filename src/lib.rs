#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod ship;
#[cfg(feature = "std")]
pub mod api;
#[cfg(feature = "std")]
pub mod identity;
#[cfg(feature = "std")]
pub mod ledger;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod ranking;
#[cfg(feature = "std")]
pub mod skeleton;
#[cfg(feature = "std")]
pub mod store;
#[cfg(feature = "std")]
pub mod stub;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use api::{ApiService, ANONYMOUS};
#[cfg(feature = "std")]
pub use identity::{FixedIdentity, IdentityProvider, Session, SessionIdentity};
#[cfg(feature = "std")]
pub use ledger::{
    RankedRecord, ScoreLedger, ScoreRecord, ScoreStore, ServiceError, StoreError, Submission,
};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use protocol::{ApiRequest, ApiResponse, Message, PROTOCOL_VERSION};
#[cfg(feature = "std")]
pub use ranking::{LeaderboardPage, LeaderboardView, RankEntry, RankQueryService};
#[cfg(feature = "std")]
pub use skeleton::Skeleton;
#[cfg(feature = "std")]
pub use store::InMemoryScoreStore;
#[cfg(feature = "std")]
pub use stub::Stub;
#[cfg(feature = "std")]
pub use transport::tcp::TcpTransport;
