//! Route table and handlers.

pub mod handlers;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use tokio::io::AsyncWrite;

/// Dispatches one request to its handler.
///
/// The lookup key is the verbatim method token plus the first path
/// segment; the match is exact, with no prefix or wildcard matching
/// beyond that segment. Anything unmatched gets the canonical 404.
pub async fn dispatch<W: AsyncWrite + Unpin>(
    req: &Request,
    writer: ResponseWriter<'_, W>,
    cfg: &Config,
) -> anyhow::Result<()> {
    match (req.method.as_str(), first_segment(&req.path)) {
        ("GET", Some("")) => handlers::root(writer).await,
        ("GET", Some("echo")) => handlers::echo(req, writer).await,
        ("GET", Some("user-agent")) => handlers::user_agent(req, writer).await,
        ("GET", Some("files")) => handlers::read_file(req, writer, cfg).await,
        ("POST", Some("files")) => handlers::write_file(req, writer, cfg).await,
        _ => handlers::not_found(writer).await,
    }
}

/// The substring between the first and second `/` of the request
/// target; empty for the bare root path. `None` when the target does
/// not start with `/`.
fn first_segment(path: &str) -> Option<&str> {
    let rest = path.strip_prefix('/')?;
    rest.split('/').next()
}

/// The `{value}` of a `/prefix/{value}` target. `None` unless the
/// target splits into exactly that shape; routes that need a sub-value
/// treat any other shape as unmatched.
pub(crate) fn sub_value(path: &str) -> Option<&str> {
    let mut parts = path.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(""), Some(_), Some(value), None) => Some(value),
        _ => None,
    }
}
