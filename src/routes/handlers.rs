//! Handlers behind the route table.
//!
//! Handlers decide status, headers, and body; connection lifecycle and
//! close framing live in the writer. Filesystem and compression
//! failures turn into status codes on the same connection, never into
//! a dead task.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;
use tokio::io::AsyncWrite;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::status::StatusCode;
use crate::http::writer::ResponseWriter;

pub async fn root<W: AsyncWrite + Unpin>(
    mut w: ResponseWriter<'_, W>,
) -> anyhow::Result<()> {
    w.write_status(StatusCode::Ok);
    w.write_header("Content-Length", "0");
    w.end(None).await
}

/// GET /echo/{value}: the value bytes back, gzip-compressed when the
/// client advertises gzip support.
pub async fn echo<W: AsyncWrite + Unpin>(
    req: &Request,
    mut w: ResponseWriter<'_, W>,
) -> anyhow::Result<()> {
    let Some(value) = super::sub_value(&req.path) else {
        return not_found(w).await;
    };

    w.write_status(StatusCode::Ok);
    w.write_header("Content-Type", "text/plain");

    if req.accepts_gzip() {
        let body = gzip(value.as_bytes())?;
        w.write_header("Content-Encoding", "gzip");
        w.write_header("Content-Length", &body.len().to_string());
        w.end(Some(&body)).await
    } else {
        w.write_header("Content-Length", &value.len().to_string());
        w.end(Some(value.as_bytes())).await
    }
}

/// GET /user-agent: echoes the user-agent header, 400 when the client
/// never sent one.
pub async fn user_agent<W: AsyncWrite + Unpin>(
    req: &Request,
    mut w: ResponseWriter<'_, W>,
) -> anyhow::Result<()> {
    match req.header("user-agent") {
        Some(agent) => {
            w.write_status(StatusCode::Ok);
            w.write_header("Content-Type", "text/plain");
            w.write_header("Content-Length", &agent.len().to_string());
            w.end(Some(agent.as_bytes())).await
        }
        None => {
            let body: &[u8] = b"missing user-agent header";
            w.write_status(StatusCode::BadRequest);
            w.write_header("Content-Type", "text/plain");
            w.write_header("Content-Length", &body.len().to_string());
            w.end(Some(body)).await
        }
    }
}

/// GET /files/{name}: the exact bytes of an existing regular file
/// under the serving directory, 404 otherwise.
pub async fn read_file<W: AsyncWrite + Unpin>(
    req: &Request,
    mut w: ResponseWriter<'_, W>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let Some(name) = super::sub_value(&req.path) else {
        return not_found(w).await;
    };
    let path = cfg.directory.join(name);

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return not_found(w).await,
    }

    match tokio::fs::read(&path).await {
        Ok(contents) => {
            w.write_status(StatusCode::Ok);
            w.write_header("Content-Type", "application/octet-stream");
            w.write_header("Content-Length", &contents.len().to_string());
            w.end(Some(&contents)).await
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            internal_error(w).await
        }
    }
}

/// POST /files/{name}: writes the request body verbatim, overwriting
/// any existing file.
pub async fn write_file<W: AsyncWrite + Unpin>(
    req: &Request,
    mut w: ResponseWriter<'_, W>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let Some(name) = super::sub_value(&req.path) else {
        return not_found(w).await;
    };
    let path = cfg.directory.join(name);

    match tokio::fs::write(&path, &req.body).await {
        Ok(()) => {
            w.write_status(StatusCode::Created);
            w.write_header("Content-Length", "0");
            w.end(None).await
        }
        Err(e) => {
            tracing::error!("Failed to write {}: {}", path.display(), e);
            internal_error(w).await
        }
    }
}

pub async fn not_found<W: AsyncWrite + Unpin>(
    mut w: ResponseWriter<'_, W>,
) -> anyhow::Result<()> {
    w.write_status(StatusCode::NotFound);
    w.write_header("Content-Length", "0");
    w.end(None).await
}

async fn internal_error<W: AsyncWrite + Unpin>(
    mut w: ResponseWriter<'_, W>,
) -> anyhow::Result<()> {
    w.write_status(StatusCode::InternalServerError);
    w.write_header("Content-Length", "0");
    w.end(None).await
}

fn gzip(data: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
