#![cfg(feature = "std")]

//! Server side of a connection: handshake, then answer requests in order.

use std::sync::Arc;

use anyhow::anyhow;
use log::{debug, warn};

use crate::api::ApiService;
use crate::identity::IdentityProvider;
use crate::ledger::ScoreStore;
use crate::protocol::{Message, PROTOCOL_VERSION};
use crate::transport::Transport;

pub struct Skeleton<S: ScoreStore, I: IdentityProvider, T: Transport> {
    service: Arc<ApiService<S, I>>,
    transport: T,
}

impl<S: ScoreStore, I: IdentityProvider, T: Transport> Skeleton<S, I, T> {
    pub fn new(service: Arc<ApiService<S, I>>, transport: T) -> Self {
        Self { service, transport }
    }

    /// Serve until the peer goes away. Returns an error only for a failed
    /// handshake or a failed reply.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.transport.recv().await? {
            Message::Hello { version } if version == PROTOCOL_VERSION => {
                self.transport
                    .send(Message::Hello {
                        version: PROTOCOL_VERSION,
                    })
                    .await?;
            }
            Message::Hello { version } => {
                let message = format!(
                    "Protocol version mismatch: expected {}, got {}",
                    PROTOCOL_VERSION, version
                );
                self.transport
                    .send(Message::Error {
                        message: message.clone(),
                    })
                    .await?;
                return Err(anyhow!(message));
            }
            _ => return Err(anyhow!("Expected handshake")),
        }

        while let Ok(msg) = self.transport.recv().await {
            let reply = match msg {
                Message::Request {
                    seq,
                    session,
                    request,
                } => {
                    debug!("request #{}: {:?}", seq, request);
                    let response = self.service.handle(&session, request).await;
                    Message::Response { seq, response }
                }
                other => {
                    warn!("unexpected message from client: {:?}", other);
                    Message::Error {
                        message: "expected a request".to_string(),
                    }
                }
            };
            self.transport.send(reply).await?;
        }
        Ok(())
    }
}
