#![cfg(feature = "std")]

//! Who is asking, and on behalf of which post.

use serde::{Deserialize, Serialize};

/// Platform context attached to every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub post_id: Option<String>,
    pub username: Option<String>,
}

impl Session {
    pub fn new(post_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            post_id: Some(post_id.into()),
            username: Some(username.into()),
        }
    }
}

/// Resolves the ranking scope and the calling player for a session.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn scope(&self, session: &Session) -> Option<String>;
    async fn current_user(&self, session: &Session) -> Option<String>;
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Trusts whatever the session carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionIdentity;

#[async_trait::async_trait]
impl IdentityProvider for SessionIdentity {
    async fn scope(&self, session: &Session) -> Option<String> {
        non_blank(&session.post_id)
    }

    async fn current_user(&self, session: &Session) -> Option<String> {
        non_blank(&session.username)
    }
}

/// Ignores the session and always answers with the same scope and user.
#[derive(Debug, Clone, Default)]
pub struct FixedIdentity {
    scope: Option<String>,
    user: Option<String>,
}

impl FixedIdentity {
    pub fn new(scope: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            user: Some(user.into()),
        }
    }

    /// A scope with no logged-in user.
    pub fn anonymous(scope: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            user: None,
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for FixedIdentity {
    async fn scope(&self, _session: &Session) -> Option<String> {
        self.scope.clone()
    }

    async fn current_user(&self, _session: &Session) -> Option<String> {
        self.user.clone()
    }
}
