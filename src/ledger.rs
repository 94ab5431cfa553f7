#![cfg(feature = "std")]

//! Best-time-wins score ledger.
//!
//! The ledger keeps one record per (scope, player): the smallest time ever
//! submitted and the accuracy that came with it. The compare-and-update is
//! delegated to [`ScoreStore::submit_if_faster`], which implementations must
//! perform atomically.

use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stored best result for one player in one scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub time_ms: u64,
    pub accuracy: f64,
}

/// Result of [`ScoreStore::submit_if_faster`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    /// The record held after the call.
    pub record: ScoreRecord,
    /// Whether this call wrote `record`.
    pub replaced: bool,
}

/// A stored record together with its 1-based position in the scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecord {
    pub player: String,
    pub record: ScoreRecord,
    pub rank: usize,
}

/// Failure of the backing store. Callers may retry the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the ledger and rank services.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("{0} is required but missing")]
    MissingField(&'static str),
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("not logged in")]
    Unauthenticated,
    #[error("no score recorded")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Key-ordered score storage shared by every game session.
///
/// Records in a scope are ordered by ascending time, then by player name.
#[async_trait::async_trait]
pub trait ScoreStore: Send + Sync {
    /// Store `(time_ms, accuracy)` for `player` unless an equal or faster
    /// time is already stored. Reports the record held after the call and
    /// whether it was written. Must be a single atomic step per player.
    async fn submit_if_faster(
        &self,
        scope: &str,
        player: &str,
        time_ms: u64,
        accuracy: f64,
    ) -> Result<Submission, StoreError>;

    /// Number of players with a record in `scope`.
    async fn count(&self, scope: &str) -> Result<usize, StoreError>;

    /// Up to `len` records starting at 0-based position `start`.
    async fn ranked_range(
        &self,
        scope: &str,
        start: usize,
        len: usize,
    ) -> Result<Vec<RankedRecord>, StoreError>;

    /// The record and rank of a single player, if any.
    async fn ranked_entry(
        &self,
        scope: &str,
        player: &str,
    ) -> Result<Option<RankedRecord>, StoreError>;
}

/// Accepts completed-game scores and applies the best-time-wins policy.
pub struct ScoreLedger<S: ScoreStore> {
    store: Arc<S>,
}

impl<S: ScoreStore> ScoreLedger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate a submission and hand it to the store. Returns the record
    /// stored afterwards, which is the previous one when the new time is
    /// not strictly faster.
    pub async fn submit(
        &self,
        scope: Option<&str>,
        player: &str,
        time: Option<f64>,
        accuracy: Option<f64>,
    ) -> Result<ScoreRecord, ServiceError> {
        let scope = require_scope(scope)?;
        let time = time.ok_or(ServiceError::MissingField("time"))?;
        let accuracy = accuracy.ok_or(ServiceError::MissingField("accuracy"))?;
        let time_ms = validate_time(time)?;
        validate_accuracy(accuracy)?;

        let Submission { record, replaced } = self
            .store
            .submit_if_faster(scope, player, time_ms, accuracy)
            .await?;
        if replaced {
            info!("{}: new best for {} ({} ms, {}%)", scope, player, time_ms, accuracy);
        } else {
            debug!(
                "{}: kept {} ms for {}, rejected {} ms",
                scope, record.time_ms, player, time_ms
            );
        }
        Ok(record)
    }
}

pub(crate) fn require_scope(scope: Option<&str>) -> Result<&str, ServiceError> {
    match scope {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ServiceError::MissingField("postId")),
    }
}

fn validate_time(time: f64) -> Result<u64, ServiceError> {
    if !time.is_finite() || time < 0.0 || time.fract() != 0.0 || time >= u64::MAX as f64 {
        return Err(ServiceError::InvalidField {
            field: "time",
            reason: format!("{} is not a whole number of milliseconds", time),
        });
    }
    Ok(time as u64)
}

fn validate_accuracy(accuracy: f64) -> Result<(), ServiceError> {
    if !accuracy.is_finite() || !(0.0..=100.0).contains(&accuracy) {
        return Err(ServiceError::InvalidField {
            field: "accuracy",
            reason: format!("{} is not a percentage", accuracy),
        });
    }
    Ok(())
}
