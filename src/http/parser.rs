use crate::http::request::Request;
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not an error: the buffer does not yet hold a complete request.
    /// The caller waits for more transport bytes and calls again.
    Incomplete,
    /// Request line has fewer than two space-separated tokens.
    InvalidRequestLine,
    /// Header region is not valid UTF-8.
    InvalidEncoding,
}

/// Attempts to extract one complete request from the front of `buf`.
///
/// On success returns the request together with the number of bytes it
/// occupied, so the caller can drop the consumed prefix and re-run on
/// whatever remains — pipelined requests parse out one at a time. The
/// function keeps no state of its own and never mutates `buf`, making
/// it safe to re-invoke on the same growing buffer any number of
/// times.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {

    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_offset = headers_end + 4;

    let headers_str = std::str::from_utf8(header_bytes)
        .map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: METHOD SP request-target [SP version]
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let mut parts = request_line.split(' ');

    let method = parts
        .next()
        .filter(|m| !m.is_empty())
        .ok_or(ParseError::InvalidRequestLine)?;
    let path = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    // Headers; lines without a colon are skipped, never fatal
    let mut headers = HashMap::new();

    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(
                name.trim().to_ascii_lowercase(),
                value.trim().to_string(),
            );
        }
    }

    // An absent or unparseable content-length counts as no body; body
    // presence is load-bearing downstream, so a bad value must not
    // fail the whole connection.
    let content_length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    if buf.len() < body_offset + content_length {
        return Err(ParseError::Incomplete);
    }

    let body = buf[body_offset..body_offset + content_length].to_vec();

    let request = Request {
        method: method.to_string(),
        path: path.to_string(),
        headers,
        body,
    };

    Ok((request, body_offset + content_length))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
