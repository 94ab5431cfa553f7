#![cfg(feature = "std")]

//! Request/response payloads and the framed message envelope.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::identity::Session;

/// Wire protocol version exchanged in the handshake.
pub const PROTOCOL_VERSION: u32 = 1;

/// A routed API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiRequest {
    /// `GET /init`
    Init,
    /// `PUT /player/score`
    SubmitScore(ScoreBody),
    /// `GET /player/score`
    OwnScore,
    /// `GET /player/scores?page=N`
    Scores { page: Option<usize> },
}

/// Body of a score submission. Fields are optional so that missing values
/// are reported as validation errors rather than decode failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBody {
    pub time: Option<f64>,
    pub accuracy: Option<f64>,
}

impl ApiRequest {
    /// Route an HTTP-style method, target and optional JSON body. A leading
    /// `/api` on the path is accepted.
    pub fn parse(method: &str, target: &str, body: Option<&str>) -> Result<Self, ApiResponse> {
        let (path, query) = match target.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (target, None),
        };
        let path = path.strip_prefix("/api").unwrap_or(path);
        let path = path.trim_end_matches('/');

        match (method.to_ascii_uppercase().as_str(), path) {
            ("GET", "/init") => Ok(ApiRequest::Init),
            ("PUT", "/player/score") => {
                let body = match body.map(str::trim).filter(|b| !b.is_empty()) {
                    Some(b) => serde_json::from_str::<ScoreBody>(b).map_err(|e| {
                        ApiResponse::error(400, format!("malformed body: {}", e))
                    })?,
                    None => ScoreBody::default(),
                };
                Ok(ApiRequest::SubmitScore(body))
            }
            ("GET", "/player/score") => Ok(ApiRequest::OwnScore),
            ("GET", "/player/scores") => Ok(ApiRequest::Scores {
                page: query.and_then(page_param),
            }),
            (m, p) => Err(ApiResponse::error(404, format!("no route for {} {}", m, p))),
        }
    }
}

/// Reads `page` from a query string. Unparsable values count as absent.
fn page_param(query: &str) -> Option<usize> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "page")
        .and_then(|(_, v)| v.parse().ok())
}

/// Status code plus JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(500, format!("failed to encode response: {}", e)),
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "status": "error", "message": message.into() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Message of an error body, if there is one.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

/// `GET /init` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub post_id: String,
    pub username: String,
}

/// `PUT /player/score` payload: the record stored after the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScore {
    pub username: String,
    pub time: u64,
    pub accuracy: f64,
}

/// Frames exchanged between client and server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    Hello { version: u32 },
    Request {
        seq: u64,
        session: Session,
        request: ApiRequest,
    },
    Response { seq: u64, response: ApiResponse },
    Error { message: String },
}
