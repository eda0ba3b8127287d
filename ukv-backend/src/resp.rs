//! # RESP2 Encoding and Parsing
//!
//! Purpose: encode cache-store commands and parse server replies for the
//! per-operation connection in [`crate::RedisStore`].
//!
//! ## Design Principles
//! 1. **State-Free Parsing**: replies are parsed top-down, one at a time.
//! 2. **Buffer Reuse**: the caller provides the line buffer so repeated
//!    replies on one connection do not reallocate.
//! 3. **Fail Fast**: invalid framing returns a protocol error immediately.
//!
//! Stored values are the codec's JSON text, so replies are UTF-8; bulk
//! payloads decode to `String`. Array replies are rejected outright — no
//! command this adapter issues is answered with one.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::error::{StoreError, StoreResult};

/// One parsed RESP reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reply {
    /// +OK or +PONG style replies.
    Simple(String),
    /// -ERR ... replies.
    Error(String),
    /// :123 replies.
    Integer(i64),
    /// $... bulk strings, with `None` for the null bulk.
    Bulk(Option<String>),
}

/// Encodes a RESP2 command array into the provided buffer.
pub(crate) fn encode_command(args: &[&str], out: &mut Vec<u8>) {
    out.push(b'*');
    out.extend_from_slice(args.len().to_string().as_bytes());
    out.extend_from_slice(b"\r\n");
    for arg in args {
        out.push(b'$');
        out.extend_from_slice(arg.len().to_string().as_bytes());
        out.extend_from_slice(b"\r\n");
        out.extend_from_slice(arg.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
}

/// Reads one reply from the buffered reader.
pub(crate) async fn read_reply<R>(reader: &mut R, line_buf: &mut Vec<u8>) -> StoreResult<Reply>
where
    R: AsyncBufRead + Unpin,
{
    read_line(reader, line_buf).await?;
    let (&marker, rest) = line_buf.split_first().ok_or(StoreError::Protocol)?;

    match marker {
        b'+' => Ok(Reply::Simple(into_text(rest)?)),
        b'-' => Ok(Reply::Error(into_text(rest)?)),
        b':' => Ok(Reply::Integer(parse_i64(rest)?)),
        b'$' => {
            let len = parse_i64(rest)?;
            read_bulk(reader, len).await
        }
        _ => Err(StoreError::Protocol),
    }
}

async fn read_bulk<R>(reader: &mut R, len: i64) -> StoreResult<Reply>
where
    R: AsyncBufRead + Unpin,
{
    if len < 0 {
        return Ok(Reply::Bulk(None));
    }

    let mut data = vec![0u8; len as usize];
    reader.read_exact(&mut data).await?;

    let mut crlf = [0u8; 2];
    reader.read_exact(&mut crlf).await?;
    if crlf != [b'\r', b'\n'] {
        return Err(StoreError::Protocol);
    }

    Ok(Reply::Bulk(Some(into_text(&data)?)))
}

async fn read_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> StoreResult<()>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let bytes = reader.read_until(b'\n', buf).await?;
    if bytes == 0 {
        return Err(StoreError::Protocol);
    }
    if buf.len() < 2 || buf[buf.len() - 2] != b'\r' {
        return Err(StoreError::Protocol);
    }
    buf.truncate(buf.len() - 2);
    Ok(())
}

fn into_text(data: &[u8]) -> StoreResult<String> {
    String::from_utf8(data.to_vec()).map_err(|_| StoreError::Protocol)
}

fn parse_i64(data: &[u8]) -> StoreResult<i64> {
    std::str::from_utf8(data)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(StoreError::Protocol)
}
