#![cfg(feature = "std")]

//! Client side of a connection.

use serde::de::DeserializeOwned;

use crate::identity::Session;
use crate::protocol::{
    ApiRequest, ApiResponse, InitResponse, Message, ScoreBody, StoredScore, PROTOCOL_VERSION,
};
use crate::ranking::{LeaderboardPage, RankEntry};
use crate::transport::Transport;

pub struct Stub<T: Transport> {
    transport: T,
    session: Session,
    seq: u64,
    handshaken: bool,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self {
            transport,
            session,
            seq: 0,
            handshaken: false,
        }
    }

    async fn ensure_handshake(&mut self) -> anyhow::Result<()> {
        if self.handshaken {
            return Ok(());
        }
        self.transport
            .send(Message::Hello {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match self.transport.recv().await? {
            Message::Hello { version } if version == PROTOCOL_VERSION => {
                self.handshaken = true;
                Ok(())
            }
            Message::Error { message } => Err(anyhow::anyhow!(message)),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    /// Send a raw request and wait for its response.
    pub async fn call(&mut self, request: ApiRequest) -> anyhow::Result<ApiResponse> {
        self.ensure_handshake().await?;
        let seq = self.seq;
        self.seq += 1;
        self.transport
            .send(Message::Request {
                seq,
                session: self.session.clone(),
                request,
            })
            .await?;
        match self.transport.recv().await? {
            Message::Response {
                seq: resp_seq,
                response,
            } if resp_seq == seq => Ok(response),
            Message::Response { seq: resp_seq, .. } => Err(anyhow::anyhow!(
                "Sequence mismatch: expected {}, got {}",
                seq,
                resp_seq
            )),
            Message::Error { message } => Err(anyhow::anyhow!(message)),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    pub async fn init(&mut self) -> anyhow::Result<InitResponse> {
        let response = self.call(ApiRequest::Init).await?;
        decode(response)
    }

    pub async fn submit_score(&mut self, time_ms: u64, accuracy: f64) -> anyhow::Result<StoredScore> {
        let body = ScoreBody {
            time: Some(time_ms as f64),
            accuracy: Some(accuracy),
        };
        let response = self.call(ApiRequest::SubmitScore(body)).await?;
        decode(response)
    }

    /// The caller's own row, or `None` if they have not submitted yet.
    pub async fn own_score(&mut self) -> anyhow::Result<Option<RankEntry>> {
        let response = self.call(ApiRequest::OwnScore).await?;
        if response.status == 404 {
            return Ok(None);
        }
        decode(response).map(Some)
    }

    pub async fn scores(&mut self, page: usize) -> anyhow::Result<LeaderboardPage> {
        let response = self.call(ApiRequest::Scores { page: Some(page) }).await?;
        decode(response)
    }
}

fn decode<P: DeserializeOwned>(response: ApiResponse) -> anyhow::Result<P> {
    if !response.is_success() {
        return Err(anyhow::anyhow!(
            "request failed with {}: {}",
            response.status,
            response.message().unwrap_or("no message")
        ));
    }
    serde_json::from_value(response.body).map_err(|e| anyhow::anyhow!("Bad response body: {}", e))
}
