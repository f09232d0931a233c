use bytes::{Buf, BytesMut};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::config::Config;
use crate::http::parser::{parse_http_request, ParseError};
use crate::http::status::StatusCode;
use crate::http::writer::ResponseWriter;
use crate::routes;

const READ_CHUNK: usize = 1024;

/// One accepted connection: the stream plus the bytes received but not
/// yet attributed to a dispatched request.
///
/// Generic over the stream so tests can drive it through an in-memory
/// duplex pipe instead of a socket.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    config: Arc<Config>,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, config: Arc<Config>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            config,
        }
    }

    /// Drives the connection until the peer closes it or a response is
    /// framed with `Connection: close`.
    ///
    /// Every complete request already buffered is dispatched to
    /// completion before the next parse attempt, so response N is
    /// fully flushed before request N+1 is even looked at; only when
    /// the buffer holds no complete request does the loop go back to
    /// the stream for more bytes. Unparsed bytes left at teardown are
    /// discarded.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            // Drain whatever is already buffered
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);

                    let close = request.wants_close();
                    let writer = ResponseWriter::new(&mut self.stream, close);
                    routes::dispatch(&request, writer, &self.config).await?;

                    if close {
                        return Ok(());
                    }

                    continue;
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Framing is unrecoverable past this point: answer
                    // 400 and tear the connection down.
                    tracing::warn!("Protocol error: {:?}", e);

                    let mut writer = ResponseWriter::new(&mut self.stream, true);
                    writer.write_status(StatusCode::BadRequest);
                    writer.write_header("Content-Length", "0");
                    writer.end(None).await?;
                    return Ok(());
                }
            }

            let mut chunk = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut chunk).await?;

            if n == 0 {
                // Peer closed; whatever is left buffered never becomes
                // a request.
                return Ok(());
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }
    }
}
