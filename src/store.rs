#![cfg(feature = "std")]

//! In-process [`ScoreStore`] backed by ordered sets.

use std::collections::{BTreeSet, HashMap};

use tokio::sync::RwLock;

use crate::ledger::{RankedRecord, ScoreRecord, ScoreStore, StoreError, Submission};

/// One ranking scope: the time ordering plus the per-player records that
/// carry the paired accuracy. Both are only ever changed together.
#[derive(Debug, Default)]
struct ScopeTable {
    order: BTreeSet<(u64, String)>,
    records: HashMap<String, ScoreRecord>,
}

impl ScopeTable {
    fn ranked(&self, player: &str, rank: usize) -> Option<RankedRecord> {
        self.records.get(player).map(|record| RankedRecord {
            player: player.to_string(),
            record: *record,
            rank,
        })
    }
}

/// Score store kept in memory for the lifetime of the process.
///
/// Writers take the lock once for the whole compare-and-update, so two
/// concurrent submissions for the same player cannot interleave.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    scopes: RwLock<HashMap<String, ScopeTable>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn submit_if_faster(
        &self,
        scope: &str,
        player: &str,
        time_ms: u64,
        accuracy: f64,
    ) -> Result<Submission, StoreError> {
        let mut scopes = self.scopes.write().await;
        let table = scopes.entry(scope.to_string()).or_default();
        if let Some(existing) = table.records.get(player).copied() {
            if existing.time_ms <= time_ms {
                return Ok(Submission {
                    record: existing,
                    replaced: false,
                });
            }
            table.order.remove(&(existing.time_ms, player.to_string()));
        }
        let record = ScoreRecord { time_ms, accuracy };
        table.order.insert((time_ms, player.to_string()));
        table.records.insert(player.to_string(), record);
        Ok(Submission {
            record,
            replaced: true,
        })
    }

    async fn count(&self, scope: &str) -> Result<usize, StoreError> {
        let scopes = self.scopes.read().await;
        Ok(scopes.get(scope).map_or(0, |t| t.order.len()))
    }

    async fn ranked_range(
        &self,
        scope: &str,
        start: usize,
        len: usize,
    ) -> Result<Vec<RankedRecord>, StoreError> {
        let scopes = self.scopes.read().await;
        let Some(table) = scopes.get(scope) else {
            return Ok(Vec::new());
        };
        Ok(table
            .order
            .iter()
            .skip(start)
            .take(len)
            .enumerate()
            .filter_map(|(i, (_, player))| table.ranked(player, start + i + 1))
            .collect())
    }

    async fn ranked_entry(
        &self,
        scope: &str,
        player: &str,
    ) -> Result<Option<RankedRecord>, StoreError> {
        let scopes = self.scopes.read().await;
        let Some(table) = scopes.get(scope) else {
            return Ok(None);
        };
        let Some(record) = table.records.get(player) else {
            return Ok(None);
        };
        let ahead = table
            .order
            .range(..(record.time_ms, player.to_string()))
            .count();
        Ok(table.ranked(player, ahead + 1))
    }
}
