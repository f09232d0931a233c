use crate::http::status::StatusCode;
use tokio::io::{AsyncWrite, AsyncWriteExt};

const HTTP_VERSION: &str = "HTTP/1.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    NotStarted,
    Headers,
}

/// Response framing state machine, one per request and never reused.
///
/// The status line and headers accumulate in an internal buffer;
/// `end` appends the terminating blank line and the body, then flushes
/// everything to the stream in one write. The state machine keeps body
/// bytes from ever preceding the blank line, and `end` consuming
/// `self` makes writing after the end unrepresentable.
///
/// Centralizing the close framing here means handlers never reason
/// about connection lifecycle; they only pick status, headers, and
/// body.
pub struct ResponseWriter<'a, W: AsyncWrite + Unpin> {
    stream: &'a mut W,
    close: bool,
    state: WriterState,
    buf: Vec<u8>,
}

impl<'a, W: AsyncWrite + Unpin> ResponseWriter<'a, W> {
    /// Binds a writer to the connection stream. `close` is whether the
    /// client requested connection teardown after this response.
    pub fn new(stream: &'a mut W, close: bool) -> Self {
        Self {
            stream,
            close,
            state: WriterState::NotStarted,
            buf: Vec::with_capacity(256),
        }
    }

    /// Emits the status line. Handlers call this exactly once, before
    /// any header.
    pub fn write_status(&mut self, status: StatusCode) {
        debug_assert_eq!(self.state, WriterState::NotStarted);

        let status_line = format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            status.as_u16(),
            status.reason_phrase()
        );
        self.buf.extend_from_slice(status_line.as_bytes());
        self.state = WriterState::Headers;
    }

    /// Emits one header line.
    pub fn write_header(&mut self, name: &str, value: &str) {
        debug_assert_eq!(self.state, WriterState::Headers);

        self.buf.extend_from_slice(name.as_bytes());
        self.buf.extend_from_slice(b": ");
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.extend_from_slice(b"\r\n");
    }

    /// Terminates the response: emits defaults if the handler never
    /// wrote a status, the close framing if requested, the blank line,
    /// and the body, then flushes. Shuts the write half down when the
    /// close flag is set.
    pub async fn end(mut self, body: Option<&[u8]>) -> anyhow::Result<()> {
        if self.state == WriterState::NotStarted {
            self.write_status(StatusCode::Ok);
            self.write_header("Content-Length", "0");
        }

        // The close framing always wins over whatever the handler wrote.
        if self.close {
            self.write_header("Connection", "close");
        }

        self.buf.extend_from_slice(b"\r\n");

        if let Some(body) = body {
            self.buf.extend_from_slice(body);
        }

        self.stream.write_all(&self.buf).await?;
        self.stream.flush().await?;

        if self.close {
            self.stream.shutdown().await?;
        }

        Ok(())
    }
}
