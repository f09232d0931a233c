//! Tests for the connection processing loop: arbitrary chunking,
//! pipelining, and teardown.

use microhttp::config::Config;
use microhttp::http::connection::Connection;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

fn test_config() -> Arc<Config> {
    Arc::new(Config::from_args(Vec::<String>::new()))
}

/// Runs a connection over an in-memory duplex pipe, delivering the
/// given chunks with a pause between them, and returns every byte the
/// server wrote back. `shutdown` closes the client's write half after
/// the last delivery so keep-alive connections terminate.
async fn drive(deliveries: Vec<Vec<u8>>, shutdown: bool) -> Vec<u8> {
    let (mut client, server) = tokio::io::duplex(64 * 1024);

    let cfg = test_config();
    let task = tokio::spawn(async move {
        let mut conn = Connection::new(server, cfg);
        conn.run().await
    });

    for (i, chunk) in deliveries.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        client.write_all(chunk).await.unwrap();
        client.flush().await.unwrap();
    }

    if shutdown {
        client.shutdown().await.unwrap();
    }

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    task.await.unwrap().unwrap();
    out
}

#[tokio::test]
async fn test_single_request_single_delivery() {
    let out = drive(vec![b"GET / HTTP/1.1\r\n\r\n".to_vec()], true).await;
    assert_eq!(out, b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
}

#[tokio::test]
async fn test_headers_split_across_deliveries() {
    let out = drive(
        vec![
            b"GET /echo/abc HTT".to_vec(),
            b"P/1.1\r\nHost: localhost\r\n\r\n".to_vec(),
        ],
        true,
    )
    .await;

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc"
    );
}

#[tokio::test]
async fn test_body_split_across_deliveries() {
    // Route is unmatched (404) but the body must still be framed in
    // full before dispatch, across three deliveries.
    let out = drive(
        vec![
            b"POST /upload HTTP/1.1\r\nContent-Length: 6\r\n\r\n".to_vec(),
            b"abc".to_vec(),
            b"def".to_vec(),
        ],
        true,
    )
    .await;

    assert_eq!(out, b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
}

#[tokio::test]
async fn test_pipelined_requests_answered_in_order() {
    let out = drive(
        vec![b"GET /echo/one HTTP/1.1\r\n\r\nGET /echo/two HTTP/1.1\r\n\r\n".to_vec()],
        true,
    )
    .await;

    let expected = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\n\
one\
HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\n\
two";
    assert_eq!(out, expected.as_slice());
}

#[tokio::test]
async fn test_connection_close_tears_down_without_client_eof() {
    // No client shutdown: the response framing alone must end the
    // connection.
    let out = drive(
        vec![b"GET / HTTP/1.1\r\nConnection: close\r\n\r\n".to_vec()],
        false,
    )
    .await;

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    );
}

#[tokio::test]
async fn test_malformed_request_line_gets_400_and_close() {
    let out = drive(vec![b"NONSENSE\r\n\r\n".to_vec()], false).await;

    assert_eq!(
        out,
        b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    );
}

#[tokio::test]
async fn test_unparsed_remainder_discarded_at_eof() {
    // A complete request followed by a partial one; the partial never
    // gets a response.
    let out = drive(
        vec![b"GET / HTTP/1.1\r\n\r\nGET /echo/tru".to_vec()],
        true,
    )
    .await;

    assert_eq!(out, b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n");
}
