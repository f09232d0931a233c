//! HTTP protocol implementation.
//!
//! This module implements HTTP/1.1 framing directly over a byte stream,
//! with support for pipelined requests.
//!
//! # Architecture
//!
//! - **`parser`**: Extracts complete requests from a growing byte buffer
//! - **`request`**: Immutable parsed-request representation
//! - **`connection`**: Per-connection loop appending transport bytes and
//!   draining pipelined requests in arrival order
//! - **`writer`**: Per-request response framing state machine
//! - **`status`**: Status codes the server emits
//!
//! # Connection loop
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Append bytes from the stream
//!        └──────┬──────┘
//!               │ Complete request buffered
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Route, write response to completion
//!        └──────┬───────────┘
//!               ├─ More buffered bytes → parse again (pipelining)
//!               ├─ Incomplete → Reading
//!               └─ Connection: close / peer EOF → done
//! ```
//!
//! No idle timeout is applied: a peer that stalls mid-request holds its
//! buffer until it disconnects.

pub mod connection;
pub mod parser;
pub mod request;
pub mod status;
pub mod writer;
