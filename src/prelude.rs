//! Commonly used types and utilities for ease of import.

pub use crate::{
    attack, format_time, AttackOutcome, Board, Coord, GameSession, GameStatus,
};

pub use crate::{
    ApiService, FixedIdentity, InMemoryScoreStore, RankQueryService, ScoreLedger, ScoreStore,
    Session, SessionIdentity, Skeleton, Stub,
};

pub use crate::transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
