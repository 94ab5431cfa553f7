#![cfg(feature = "std")]

//! Request handling for the leaderboard endpoints.

use std::sync::Arc;

use log::{error, warn};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::identity::{IdentityProvider, Session};
use crate::ledger::{ScoreLedger, ScoreStore, ServiceError};
use crate::protocol::{ApiRequest, ApiResponse, InitResponse, ScoreBody, StoredScore};
use crate::ranking::RankQueryService;

/// Username reported by `init` when nobody is logged in.
pub const ANONYMOUS: &str = "anonymous";

/// Ledger and rank services behind one request handler.
pub struct ApiService<S: ScoreStore, I: IdentityProvider> {
    ledger: ScoreLedger<S>,
    ranks: RankQueryService<S>,
    identity: I,
    page_size: usize,
}

impl<S: ScoreStore, I: IdentityProvider> ApiService<S, I> {
    pub fn new(store: Arc<S>, identity: I) -> Self {
        Self {
            ledger: ScoreLedger::new(store.clone()),
            ranks: RankQueryService::new(store),
            identity,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Serve one request. Never fails: every error becomes a status code.
    pub async fn handle(&self, session: &Session, request: ApiRequest) -> ApiResponse {
        let scope = self.identity.scope(session).await;
        let result = match request {
            ApiRequest::Init => return self.init(session, scope).await.unwrap_or_else(|r| r),
            ApiRequest::SubmitScore(body) => self.submit(session, scope.as_deref(), body).await,
            ApiRequest::OwnScore => self.own_score(session, scope.as_deref()).await,
            ApiRequest::Scores { page } => self
                .ranks
                .query(scope.as_deref(), page.unwrap_or(1), self.page_size)
                .await
                .map(|p| ApiResponse::ok(&p)),
        };
        result.unwrap_or_else(|e| error_response(&e))
    }

    async fn init(
        &self,
        session: &Session,
        scope: Option<String>,
    ) -> Result<ApiResponse, ApiResponse> {
        let post_id = scope.ok_or_else(|| {
            warn!("init without a post in context");
            ApiResponse::error(400, "postId is required but missing from context")
        })?;
        let username = self.identity.current_user(session).await;
        Ok(ApiResponse::ok(&InitResponse {
            kind: "init".to_string(),
            post_id,
            username: username.unwrap_or_else(|| ANONYMOUS.to_string()),
        }))
    }

    async fn submit(
        &self,
        session: &Session,
        scope: Option<&str>,
        body: ScoreBody,
    ) -> Result<ApiResponse, ServiceError> {
        if scope.is_none() {
            return Err(ServiceError::MissingField("postId"));
        }
        if body.time.is_none() || body.accuracy.is_none() {
            return Err(ServiceError::MissingField(if body.time.is_none() {
                "time"
            } else {
                "accuracy"
            }));
        }
        let username = self
            .identity
            .current_user(session)
            .await
            .ok_or(ServiceError::Unauthenticated)?;
        let stored = self
            .ledger
            .submit(scope, &username, body.time, body.accuracy)
            .await?;
        Ok(ApiResponse::ok(&StoredScore {
            username,
            time: stored.time_ms,
            accuracy: stored.accuracy,
        }))
    }

    async fn own_score(
        &self,
        session: &Session,
        scope: Option<&str>,
    ) -> Result<ApiResponse, ServiceError> {
        let username = self
            .identity
            .current_user(session)
            .await
            .ok_or(ServiceError::Unauthenticated)?;
        let entry = self
            .ranks
            .player_rank(scope, &username)
            .await?
            .ok_or(ServiceError::NotFound)?;
        Ok(ApiResponse::ok(&entry))
    }
}

fn error_response(err: &ServiceError) -> ApiResponse {
    let status = match err {
        ServiceError::MissingField(_) | ServiceError::InvalidField { .. } => 400,
        ServiceError::Unauthenticated => 401,
        ServiceError::NotFound => 404,
        ServiceError::Store(e) => {
            error!("score store failure: {}", e);
            return ApiResponse::error(500, "internal error, please retry");
        }
    };
    ApiResponse::error(status, err.to_string())
}
