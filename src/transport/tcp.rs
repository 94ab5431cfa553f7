use std::io::ErrorKind;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::config::ServerConfig;
use crate::protocol::Message;
use crate::transport::Transport;

/// Length-prefixed JSON frames over a TCP stream.
///
/// Each frame is a big-endian `u32` byte count followed by that many bytes
/// of JSON. Every read or write is bounded by `timeout_duration`.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_message_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_config(stream, &ServerConfig::default())
    }

    pub fn with_config(stream: TcpStream, config: &ServerConfig) -> Self {
        Self {
            stream,
            timeout_duration: config.io_timeout,
            max_message_size: config.max_frame_size,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

fn io_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::BrokenPipe => {
            anyhow::anyhow!("Connection closed by peer")
        }
        ErrorKind::ConnectionReset => anyhow::anyhow!("Connection reset by peer"),
        _ => anyhow::anyhow!("I/O error: {}", e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let send_op = async {
            let data = serde_json::to_vec(&msg)
                .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
            if data.len() > self.max_message_size as usize {
                return Err(anyhow::anyhow!(
                    "Message too large: {} bytes (max: {})",
                    data.len(),
                    self.max_message_size
                ));
            }
            let len = (data.len() as u32).to_be_bytes();
            self.stream.write_all(&len).await.map_err(io_error)?;
            self.stream.write_all(&data).await.map_err(io_error)?;
            self.stream.flush().await.map_err(io_error)?;
            anyhow::Ok(())
        };

        timeout(self.timeout_duration, send_op)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", self.timeout_duration))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let recv_op = async {
            let mut len_buf = [0u8; 4];
            self.stream.read_exact(&mut len_buf).await.map_err(io_error)?;

            let len = u32::from_be_bytes(len_buf);
            if len > self.max_message_size {
                return Err(anyhow::anyhow!(
                    "Message too large: {} bytes (max: {})",
                    len,
                    self.max_message_size
                ));
            }
            if len == 0 {
                return Err(anyhow::anyhow!("Invalid message length: 0"));
            }

            let mut buf = vec![0u8; len as usize];
            self.stream.read_exact(&mut buf).await.map_err(io_error)?;

            let msg = serde_json::from_slice(&buf)
                .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))?;
            anyhow::Ok(msg)
        };

        timeout(self.timeout_duration, recv_op)
            .await
            .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", self.timeout_duration))?
    }
}
