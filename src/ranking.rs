#![cfg(feature = "std")]

//! Paginated leaderboard views over a [`ScoreStore`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ledger::{require_scope, RankedRecord, ScoreStore, ServiceError};

/// One leaderboard row as shown to players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub username: String,
    pub score: u64,
    pub accuracy: f64,
    pub rank: usize,
}

impl From<RankedRecord> for RankEntry {
    fn from(r: RankedRecord) -> Self {
        RankEntry {
            username: r.player,
            score: r.record.time_ms,
            accuracy: r.record.accuracy,
            rank: r.rank,
        }
    }
}

/// One page of the ascending-time ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    pub page: usize,
    pub total_pages: usize,
    pub entries: Vec<RankEntry>,
    pub is_first: bool,
    pub is_last: bool,
}

/// A page together with the requesting player's own row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardView {
    pub page: LeaderboardPage,
    pub own: Option<RankEntry>,
}

/// Read-only ranking queries. Results reflect whatever the store held at
/// the moment of the read.
pub struct RankQueryService<S: ScoreStore> {
    store: Arc<S>,
}

impl<S: ScoreStore> RankQueryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Page `page` (1-based; 0 is read as 1) of `page_size` entries.
    /// Pages past the end come back empty with `is_last` set.
    pub async fn query(
        &self,
        scope: Option<&str>,
        page: usize,
        page_size: usize,
    ) -> Result<LeaderboardPage, ServiceError> {
        let scope = require_scope(scope)?;
        if page_size == 0 {
            return Err(ServiceError::InvalidField {
                field: "pageSize",
                reason: "must be at least 1".to_string(),
            });
        }
        let page = page.max(1);
        let total = self.store.count(scope).await?;
        let total_pages = total.div_ceil(page_size);
        let start = (page - 1).saturating_mul(page_size);

        let entries = if start < total {
            self.store
                .ranked_range(scope, start, page_size)
                .await?
                .into_iter()
                .map(RankEntry::from)
                .collect()
        } else {
            Vec::new()
        };

        Ok(LeaderboardPage {
            page,
            total_pages,
            entries,
            is_first: page == 1,
            is_last: page >= total_pages,
        })
    }

    /// The player's own row, or `None` if they have no record in `scope`.
    pub async fn player_rank(
        &self,
        scope: Option<&str>,
        player: &str,
    ) -> Result<Option<RankEntry>, ServiceError> {
        let scope = require_scope(scope)?;
        Ok(self
            .store
            .ranked_entry(scope, player)
            .await?
            .map(RankEntry::from))
    }

    /// [`query`](Self::query) and [`player_rank`](Self::player_rank) in one call.
    pub async fn view(
        &self,
        scope: Option<&str>,
        page: usize,
        page_size: usize,
        player: Option<&str>,
    ) -> Result<LeaderboardView, ServiceError> {
        let listing = self.query(scope, page, page_size).await?;
        let own = match player {
            Some(p) => self.player_rank(scope, p).await?,
            None => None,
        };
        Ok(LeaderboardView {
            page: listing,
            own,
        })
    }
}
