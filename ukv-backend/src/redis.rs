//! # Cache-Store Adapter
//!
//! Purpose: speak RESP2 to a Redis-compatible cache store over one TCP
//! connection scoped to a single façade operation.
//!
//! The connection is opened by [`RedisStore::connect`], used for exactly
//! one command by the dispatcher, and closed on drop once the reply has
//! been read. There is no pool and no reconnect: pooling belongs to the
//! backend client, not to this access layer.

use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::debug;

use async_trait::async_trait;

use crate::backend::Backend;
use crate::error::{StoreError, StoreResult};
use crate::resp::{encode_command, read_reply, Reply};

/// One live cache-store connection with reusable buffers.
pub struct RedisStore {
    reader: BufReader<TcpStream>,
    line_buf: Vec<u8>,
    write_buf: Vec<u8>,
}

impl RedisStore {
    /// Opens a connection to `host:port`.
    pub async fn connect(host: &str, port: u16) -> StoreResult<Self> {
        let stream = TcpStream::connect((host, port)).await?;
        // Small single-command payloads; waiting on Nagle only adds latency.
        stream.set_nodelay(true)?;
        debug!(host, port, "cache store connected");

        Ok(RedisStore {
            reader: BufReader::new(stream),
            line_buf: Vec::with_capacity(128),
            write_buf: Vec::with_capacity(256),
        })
    }

    async fn exec(&mut self, args: &[&str]) -> StoreResult<Reply> {
        self.write_buf.clear();
        encode_command(args, &mut self.write_buf);

        let stream = self.reader.get_mut();
        stream.write_all(&self.write_buf).await?;
        stream.flush().await?;

        read_reply(&mut self.reader, &mut self.line_buf).await
    }
}

#[async_trait]
impl Backend for RedisStore {
    /// The cache store's container is implicit, so the idempotent
    /// "ensure" is a readiness check.
    async fn init(&mut self, _id: &str) -> StoreResult<()> {
        match self.exec(&["PING"]).await? {
            Reply::Simple(_) | Reply::Bulk(Some(_)) => Ok(()),
            Reply::Error(message) => Err(StoreError::Server(message)),
            _ => Err(StoreError::UnexpectedResponse),
        }
    }

    async fn get(&mut self, key: &str) -> StoreResult<Option<String>> {
        match self.exec(&["GET", key]).await? {
            Reply::Bulk(value) => Ok(value),
            Reply::Error(message) => Err(StoreError::Server(message)),
            _ => Err(StoreError::UnexpectedResponse),
        }
    }

    async fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        match self.exec(&["SET", key, value]).await? {
            Reply::Simple(_) => Ok(()),
            Reply::Error(message) => Err(StoreError::Server(message)),
            _ => Err(StoreError::UnexpectedResponse),
        }
    }

    async fn delete(&mut self, key: &str) -> StoreResult<bool> {
        match self.exec(&["DEL", key]).await? {
            Reply::Integer(count) => Ok(count > 0),
            Reply::Error(message) => Err(StoreError::Server(message)),
            _ => Err(StoreError::UnexpectedResponse),
        }
    }
}
