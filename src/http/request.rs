use std::collections::HashMap;

/// Represents a parsed HTTP request from a client.
///
/// Built atomically by the parser once a complete request is buffered;
/// never handed out partially populated. Read-only from there on.
#[derive(Debug, Clone)]
pub struct Request {
    /// Method token exactly as received (e.g. "GET")
    pub method: String,
    /// Raw request-target (e.g. "/echo/abc")
    pub path: String,
    /// Headers with lower-cased, trimmed names; on duplicates the last
    /// value wins
    pub headers: HashMap<String, String>,
    /// Exactly `content-length` bytes, empty when the header is absent
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by its lower-cased name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    /// Whether the client asked for the connection to be torn down
    /// after this response.
    pub fn wants_close(&self) -> bool {
        self.header("connection")
            .map(|v| v.eq_ignore_ascii_case("close"))
            .unwrap_or(false)
    }

    /// Whether the accept-encoding header advertises gzip support
    /// (case-insensitive substring match).
    pub fn accepts_gzip(&self) -> bool {
        self.header("accept-encoding")
            .map(|v| v.to_ascii_lowercase().contains("gzip"))
            .unwrap_or(false)
    }
}
